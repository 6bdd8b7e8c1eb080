//! Fluent CSS selector builder for Selkie.
//!
//! # Scope
//!
//! This crate implements:
//! - **Compound selectors** ([§ 4.2 Compound selectors](https://www.w3.org/TR/selectors-4/#compound))
//!   - Type, ID, class, attribute, pseudo-class and pseudo-element parts
//!   - Left-to-right ordering of part categories
//!   - At most one type selector, ID selector and pseudo-element per chain
//!
//! - **Combinators** ([§ 16 Combinators](https://www.w3.org/TR/selectors-4/#combinators))
//!   - Descendant, child, next-sibling and subsequent-sibling symbols
//!   - Opaque combinator strings, accepted verbatim
//!
//! Every operation returns a new [`SelectorFragment`]; fragments are never
//! mutated after construction.
//!
//! ```
//! use selkie_selector::{combine, element, id};
//!
//! let main = element("div").id("main")?;
//! let selector = combine(&main, "+", &element("p"));
//! assert_eq!(selector.to_string(), "div#main + p");
//! assert_eq!(id("main").class("container")?.as_str(), "#main.container");
//! # Ok::<(), selkie_selector::SelectorError>(())
//! ```
//!
//! # Not Implemented
//!
//! - Parsing selector text
//! - Validating the content of attribute or pseudo-class values
//! - Specificity and DOM matching

/// Builder error types.
pub mod error;
/// Selector fragments, part categories and combinators.
pub mod selector;

// Re-exports for convenience
pub use error::{Preceding, SelectorError};
pub use selector::combinator::{Combinator, combine, combine_with};
pub use selector::{
    Category, SelectorFragment, attr, class, element, id, pseudo_class, pseudo_element, stringify,
};
