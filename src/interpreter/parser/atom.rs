use crate::{ast::Node, error::ParseError, interpreter::parser::core::ParseResult};

/// Checks whether `text` matches the integer literal grammar `-?[0-9]+`.
///
/// A lone `-` or a leading `+` is not an integer literal; those atoms become
/// symbols.
#[must_use]
pub fn is_integer_literal(text: &str) -> bool {
    let digits = text.strip_prefix('-').unwrap_or(text);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

/// Turns an atom token into a leaf node.
///
/// # Errors
/// `ParseError::LiteralTooLarge` if the atom is an integer literal that does
/// not fit into an `i64`.
pub(in crate::interpreter::parser) fn parse_atom(text: &str, position: usize) -> ParseResult<Node> {
    if !is_integer_literal(text) {
        return Ok(Node::Symbol(text.to_string()));
    }

    text.parse::<i64>()
        .map(Node::Number)
        .map_err(|_| ParseError::LiteralTooLarge { literal: text.to_string(),
                                                   position })
}
