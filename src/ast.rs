/// An abstract syntax tree (AST) node representing one expression.
///
/// The node set is closed: every expression is a number literal, a symbol or
/// a parenthesised list of further expressions. Nodes are built bottom-up by
/// the parser and never change afterwards; each node is owned by exactly one
/// parent, so the tree has no sharing and no cycles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// An integer literal such as `42` or `-7`.
    Number(i64),
    /// Any other atom, such as `x`, `define` or `+`.
    Symbol(String),
    /// A parenthesised sequence of expressions, in source order.
    List(Vec<Self>),
}

impl Node {
    /// Returns the symbol name if this node is a [`Node::Symbol`].
    #[must_use]
    pub fn as_symbol(&self) -> Option<&str> {
        match self {
            Self::Symbol(name) => Some(name),
            _ => None,
        }
    }

    /// Human readable name of the node variant, used in error messages.
    #[must_use]
    pub const fn describe(&self) -> &'static str {
        match self {
            Self::Number(_) => "number",
            Self::Symbol(_) => "symbol",
            Self::List(_) => "list",
        }
    }
}

/// Renders the node back into canonical s-expression text.
///
/// ```
/// use minilisp::ast::Node;
///
/// let product = Node::List(vec![Node::Symbol("*".to_string()), Node::Number(2), Node::Number(3)]);
/// let node = Node::List(vec![Node::Symbol("+".to_string()), Node::Number(1), product]);
/// assert_eq!(node.to_string(), "(+ 1 (* 2 3))");
/// ```
impl std::fmt::Display for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Symbol(name) => f.write_str(name),
            Self::List(elements) => {
                f.write_str("(")?;
                for (i, element) in elements.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" ")?;
                    }
                    write!(f, "{element}")?;
                }
                f.write_str(")")
            },
        }
    }
}
