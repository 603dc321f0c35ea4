use logos::Logos;

/// Represents a lexical token in the source input.
///
/// Parentheses always stand alone, whether or not whitespace surrounds them.
/// Everything else between whitespace and parentheses is an [`Token::Atom`];
/// whether an atom is a number or a symbol is decided by the parser.
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
#[logos(skip r"\s+")]
pub enum Token {
    /// `(`
    #[token("(")]
    OpenParen,
    /// `)`
    #[token(")")]
    CloseParen,
    /// Any maximal run of characters that are neither whitespace nor
    /// parentheses, such as `42`, `-7`, `define` or `>`.
    #[regex(r"[^\s()]+", |lex| lex.slice().to_string())]
    Atom(String),
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OpenParen => f.write_str("("),
            Self::CloseParen => f.write_str(")"),
            Self::Atom(text) => f.write_str(text),
        }
    }
}

/// Splits source text into tokens, each paired with its byte offset.
///
/// Tokenizing never fails: the three token patterns together with the skipped
/// whitespace cover every possible character, so malformed structure such as
/// unbalanced parentheses is left for the parser to report.
///
/// # Example
/// ```
/// use minilisp::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("(+ 1(* 2 3))");
/// let kinds = tokens.into_iter().map(|(tok, _)| tok).collect::<Vec<_>>();
///
/// assert_eq!(kinds[0], Token::OpenParen);
/// assert_eq!(kinds[3], Token::OpenParen);
/// assert_eq!(kinds.len(), 9);
/// ```
#[must_use]
pub fn tokenize(source: &str) -> Vec<(Token, usize)> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(source);

    while let Some(token) = lexer.next() {
        if let Ok(tok) = token {
            tokens.push((tok, lexer.span().start));
        }
    }

    tokens
}
