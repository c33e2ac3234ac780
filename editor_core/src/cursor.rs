//! Insertion cursor addressing

use expr_types::ExprId;
use std::fmt;

const APPEND_SUFFIX: &str = ":append";

/// Where a committed insertion lands
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum InsertionCursor {
    /// Immediately before this node, inside whichever list holds it
    Before(ExprId),
    /// As the new last child of this list-shaped node
    Append(ExprId),
}

impl InsertionCursor {
    /// Parses the textual form `<id>` or `<id>:append`
    pub fn parse(text: &str) -> Option<Self> {
        match text.strip_suffix(APPEND_SUFFIX) {
            Some("") => None,
            Some(id) => Some(InsertionCursor::Append(ExprId::new(id))),
            None if text.is_empty() => None,
            None => Some(InsertionCursor::Before(ExprId::new(text))),
        }
    }
}

impl fmt::Display for InsertionCursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InsertionCursor::Before(id) => write!(f, "{}", id),
            InsertionCursor::Append(id) => write!(f, "{}{}", id, APPEND_SUFFIX),
        }
    }
}
