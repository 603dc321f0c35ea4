use std::iter::Peekable;

use crate::{
    ast::Node,
    error::ParseError,
    interpreter::{
        lexer::{Token, tokenize},
        parser::atom::parse_atom,
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses one line of source into a single expression.
///
/// The whole input must form exactly one expression; a bare number or symbol
/// is accepted as well as a parenthesised list.
///
/// # Errors
/// - `UnexpectedEndOfInput` for empty input or unbalanced parentheses.
/// - `UnexpectedToken` for a `)` where an expression should start.
/// - `UnexpectedTrailingTokens` if anything follows the expression.
/// - `LiteralTooLarge` for integer literals outside the `i64` range.
///
/// # Example
/// ```
/// use minilisp::{ast::Node, error::ParseError, interpreter::parser::core::parse};
///
/// let node = parse("(+ 1 (* 2 3))").unwrap();
/// assert_eq!(node.to_string(), "(+ 1 (* 2 3))");
///
/// assert_eq!(parse("-12").unwrap(), Node::Number(-12));
/// assert_eq!(parse("(+ 1 2"), Err(ParseError::UnexpectedEndOfInput));
/// ```
pub fn parse(source: &str) -> ParseResult<Node> {
    let tokens = tokenize(source);
    let mut iter = tokens.iter().peekable();

    let node = parse_expression(&mut iter)?;

    if let Some((token, position)) = iter.next() {
        return Err(ParseError::UnexpectedTrailingTokens { token:    token.to_string(),
                                                          position: *position, });
    }

    tracing::debug!(%node, "parsed expression");
    Ok(node)
}

/// Parses one expression starting at the current token.
///
/// Grammar: `expr := integer | symbol | "(" expr* ")"`
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, position)` pairs.
///
/// # Returns
/// The parsed expression node.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Node>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.next() {
        Some((Token::OpenParen, _)) => parse_list(tokens),
        Some((Token::CloseParen, position)) => {
            Err(ParseError::UnexpectedToken { token:    ")".to_string(),
                                              position: *position, })
        },
        Some((Token::Atom(text), position)) => parse_atom(text, *position),
        None => Err(ParseError::UnexpectedEndOfInput),
    }
}

/// Parses the elements of a list up to and including its closing `)`.
///
/// The opening `(` has already been consumed. Elements are kept in source
/// order; `()` yields an empty list.
fn parse_list<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Node>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let mut elements = Vec::new();

    loop {
        match tokens.peek() {
            Some((Token::CloseParen, _)) => {
                tokens.next();
                return Ok(Node::List(elements));
            },
            Some(_) => elements.push(parse_expression(tokens)?),
            None => return Err(ParseError::UnexpectedEndOfInput),
        }
    }
}
