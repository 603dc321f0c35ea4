/// Core parsing entry points.
///
/// Contains [`core::parse`], which tokenizes a line and parses exactly one
/// expression from it, and the recursive [`core::parse_expression`].
pub mod core;

/// Atom classification.
///
/// Decides whether an atom token is an integer literal or a symbol.
pub mod atom;
