use std::fmt;

use thiserror::Error;

use crate::selector::Category;

/// What a rejected part would have been appended after.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Preceding {
    /// The most specific part category already in the fragment.
    Part(Category),
    /// The fragment was produced by combining two selectors.
    Combined,
}

impl fmt::Display for Preceding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Part(category) => write!(f, "{category} selector"),
            Self::Combined => f.write_str("a combined selector"),
        }
    }
}

/// Misuse of the fluent chain.
///
/// Both variants are raised at the offending call. The fragment the call was
/// made on is left untouched; no partial result is produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SelectorError {
    /// A part was appended after a part that must follow it, or after a
    /// combinator.
    #[error("{attempted} selector cannot follow {after}")]
    OrderViolation {
        /// Category of the rejected part.
        attempted: Category,
        /// What the fragment already ends with.
        after: Preceding,
    },

    /// A second type selector, ID selector or pseudo-element.
    #[error("{0} selector may appear only once in a compound selector")]
    DuplicateNotAllowed(Category),
}
