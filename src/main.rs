use std::{
    fs::File,
    io::{self, BufReader},
    process::ExitCode,
};

use clap::Parser;
use minilisp::{repl, session::Session};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// minilisp is a minimal Lisp-like expression interpreter over integers and
/// booleans.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Treat CONTENTS as the path of a file with one expression per line.
    #[arg(short, long, requires = "contents")]
    file: bool,

    /// With --file, only print the value of the last expression.
    #[arg(short, long, requires = "file")]
    quiet: bool,

    /// Prompt shown by the interactive loop.
    #[arg(long, default_value = repl::DEFAULT_PROMPT)]
    prompt: String,

    /// An expression to evaluate. Starts the interactive loop when omitted.
    contents: Option<String>,
}

fn main() -> ExitCode {
    init_tracing();

    let args = Args::parse();
    let mut session = Session::new();

    let result = match args.contents {
        None => {
            let stdin = io::stdin();
            repl::run(stdin.lock(), io::stdout(), &mut session, &args.prompt)
                .map_err(|e| e.to_string())
        },
        Some(path) if args.file => run_file(&path, &mut session, args.quiet),
        Some(expr) => session.eval(&expr)
                             .map(|value| println!("{value}"))
                             .map_err(|e| e.to_string()),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        },
    }
}

/// Evaluates every non-blank line of the file at `path` in one session.
///
/// Stops at the first failing line.
fn run_file(path: &str, session: &mut Session, quiet: bool) -> Result<(), String> {
    let file = File::open(path).map_err(|_| {
                   format!("Failed to read the input file '{path}'. Perhaps this file does not \
                            exist?")
               })?;

    repl::run_script(BufReader::new(file), io::stdout(), session, quiet).map(|_| ())
                                                                        .map_err(|e| e.to_string())
}

/// Installs a stderr log subscriber when `RUST_LOG` is set.
fn init_tracing() {
    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::registry().with(fmt::layer().with_writer(io::stderr)
                                                        .with_target(true))
                                      .with(EnvFilter::from_default_env())
                                      .init();
    }
}
