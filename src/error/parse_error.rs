/// Represents all errors that can occur while turning source text into an
/// expression tree.
///
/// Positions are byte offsets into the source line.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Ran out of tokens while an expression or a closing `)` was still
    /// expected. Also reported for empty input.
    #[error("unexpected end of input")]
    UnexpectedEndOfInput,
    /// Found a token that cannot start an expression, such as a stray `)`.
    #[error("unexpected token '{token}' at position {position}")]
    UnexpectedToken {
        /// The token encountered.
        token:    String,
        /// Byte offset of the token.
        position: usize,
    },
    /// A complete expression was parsed but more tokens follow it.
    #[error("extra tokens after expression, starting with '{token}' at position {position}")]
    UnexpectedTrailingTokens {
        /// The first extra token.
        token:    String,
        /// Byte offset of the token.
        position: usize,
    },
    /// An integer literal does not fit into a 64 bit signed integer.
    #[error("integer literal '{literal}' at position {position} is too large")]
    LiteralTooLarge {
        /// The literal as written.
        literal:  String,
        /// Byte offset of the literal.
        position: usize,
    },
}
