use std::io::{self, BufRead, Write};

use crate::{
    error::ScriptError,
    interpreter::{evaluator::operator::OPERATORS, value::Value},
    session::Session,
};

/// Prompt printed before each line when none is configured.
pub const DEFAULT_PROMPT: &str = "lisp> ";

/// Runs an interactive read-evaluate-print loop.
///
/// Reads `input` one line at a time until end of input or a line that reads
/// `exit` in any letter case. Blank lines are skipped. `:env` lists the
/// current bindings and `:help` lists the operators; every other line is
/// evaluated in `session`, printing the value or `Error: <message>`. Errors
/// never end the loop, and bytes that are not valid UTF-8 are replaced
/// before the line is evaluated.
///
/// The two commands are matched on the whole trimmed line before parsing, so
/// a symbol spelled `:env` or `:help` can be defined but not evaluated on its
/// own at the prompt; it is still usable inside an expression.
///
/// # Errors
/// Only I/O failures on `input` or `output` are returned.
///
/// # Example
/// ```
/// use minilisp::{repl, session::Session};
///
/// let input = "(define x 4)\n(* x x)\nexit\n";
/// let mut output = Vec::new();
/// repl::run(input.as_bytes(), &mut output, &mut Session::new(), "> ").unwrap();
///
/// let output = String::from_utf8(output).unwrap();
/// assert!(output.contains("> 16\n"));
/// ```
pub fn run<R, W>(mut input: R, mut output: W, session: &mut Session, prompt: &str) -> io::Result<()>
    where R: BufRead,
          W: Write
{
    writeln!(output, "minilisp")?;
    writeln!(output, "Type 'exit' to quit")?;

    let mut buf = Vec::new();

    loop {
        write!(output, "{prompt}")?;
        output.flush()?;

        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            writeln!(output)?;
            writeln!(output, "Input stream closed. Exiting...")?;
            break;
        }
        let line = String::from_utf8_lossy(&buf);
        let line = line.trim();

        if line.eq_ignore_ascii_case("exit") {
            writeln!(output, "Goodbye!")?;
            break;
        }

        match line {
            "" => {},
            ":env" => print_bindings(&mut output, session)?,
            ":help" => print_operators(&mut output)?,
            _ => match session.eval(line) {
                Ok(value) => writeln!(output, "{value}")?,
                Err(e) => {
                    tracing::debug!(error = %e, "line failed");
                    writeln!(output, "Error: {e}")?;
                },
            },
        }
    }

    Ok(())
}

/// Evaluates a script with one expression per line in `session`.
///
/// Blank lines are skipped. Each value is written to `output` unless `quiet`
/// is set, in which case only the last value is written once the script has
/// finished. Evaluation stops at the first failing line.
///
/// Returns the value of the last expression, or `None` for a script without
/// expressions.
///
/// # Errors
/// `ScriptError::Line` with the 1-based line number of the first failing
/// line, or `ScriptError::Io` if reading or writing fails.
///
/// # Example
/// ```
/// use minilisp::{interpreter::value::Value, repl, session::Session};
///
/// let script = "(define x 6)\n\n(* x 7)\n";
/// let mut output = Vec::new();
/// let last = repl::run_script(script.as_bytes(), &mut output, &mut Session::new(), true).unwrap();
///
/// assert_eq!(last, Some(Value::Integer(42)));
/// assert_eq!(output, b"42\n");
/// ```
pub fn run_script<R, W>(input: R,
                        mut output: W,
                        session: &mut Session,
                        quiet: bool)
                        -> Result<Option<Value>, ScriptError>
    where R: BufRead,
          W: Write
{
    let mut last = None;

    for (number, line) in input.split(b'\n').enumerate() {
        let line = line?;
        let line = String::from_utf8_lossy(&line);
        if line.trim().is_empty() {
            continue;
        }

        let value = session.eval(line.trim())
                           .map_err(|source| ScriptError::Line { line: number + 1,
                                                                 source })?;
        if !quiet {
            writeln!(output, "{value}")?;
        }
        last = Some(value);
    }

    if quiet && let Some(value) = last {
        writeln!(output, "{value}")?;
    }

    Ok(last)
}

fn print_bindings<W: Write>(output: &mut W, session: &Session) -> io::Result<()> {
    let env = session.environment();
    if env.is_empty() {
        return writeln!(output, "(no bindings)");
    }

    for (name, value) in env.bindings() {
        writeln!(output, "{name} = {value}")?;
    }
    Ok(())
}

fn print_operators<W: Write>(output: &mut W) -> io::Result<()> {
    writeln!(output, "operators: {}", OPERATORS.join(" "))?;
    writeln!(output, "constants: true false")
}
