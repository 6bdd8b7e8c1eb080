//! CSS selector fragments
//!
//! This module builds compound selectors per
//! [Selectors Level 4](https://www.w3.org/TR/selectors-4/) one part at a time.

/// Combinators and selector composition per [§ 16](https://www.w3.org/TR/selectors-4/#combinators).
pub mod combinator;

use std::fmt;

use serde::{Serialize, Serializer};

use crate::error::{Preceding, SelectorError};

/// [§ 4.2 Compound selectors](https://www.w3.org/TR/selectors-4/#compound)
///
/// The kind of a simple selector inside a compound selector. Variants are
/// declared in the order they must appear, left to right, and the
/// discriminant is that position.
///
/// "If it contains a type selector or universal selector, that selector
/// must come first in the sequence."
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    /// [§ 5.1 Type selector](https://www.w3.org/TR/selectors-4/#type-selectors)
    ///
    /// Examples: `div`, `p`, `a`
    #[default]
    Element = 0,

    /// [§ 6.7 ID selector](https://www.w3.org/TR/selectors-4/#id-selectors)
    ///
    /// Examples: `#main`, `#nav-bar`
    Id = 1,

    /// [§ 6.6 Class selector](https://www.w3.org/TR/selectors-4/#class-html)
    ///
    /// Examples: `.container`, `.editable`
    Class = 2,

    /// [§ 6 Attribute selectors](https://www.w3.org/TR/selectors-4/#attribute-selectors)
    ///
    /// Examples: `[href]`, `[href$=".png"]`
    #[serde(rename = "attr")]
    Attribute = 3,

    /// [§ 3.5 Pseudo-classes](https://www.w3.org/TR/selectors-4/#pseudo-classes)
    ///
    /// Examples: `:focus`, `:nth-child(2)`
    PseudoClass = 4,

    /// [§ 3.6 Pseudo-elements](https://www.w3.org/TR/selectors-4/#pseudo-elements)
    ///
    /// Examples: `::before`, `::first-line`
    PseudoElement = 5,
}

impl Category {
    /// All categories in their required left-to-right order.
    pub const ALL: [Self; 6] = [
        Self::Element,
        Self::Id,
        Self::Class,
        Self::Attribute,
        Self::PseudoClass,
        Self::PseudoElement,
    ];

    /// Position of this category in a compound selector (0 = leftmost).
    #[must_use]
    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    /// Whether a chain may contain at most one part of this category.
    #[must_use]
    pub const fn is_unique(self) -> bool {
        matches!(self, Self::Element | Self::Id | Self::PseudoElement)
    }

    /// Text written before the value.
    #[must_use]
    pub const fn prefix(self) -> &'static str {
        match self {
            Self::Element => "",
            Self::Id => "#",
            Self::Class => ".",
            Self::Attribute => "[",
            Self::PseudoClass => ":",
            Self::PseudoElement => "::",
        }
    }

    /// Text written after the value. Only attribute selectors are closed.
    #[must_use]
    pub const fn suffix(self) -> &'static str {
        match self {
            Self::Attribute => "]",
            _ => "",
        }
    }

    /// Lowercase name used in messages, serialized output and on the command line.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Element => "element",
            Self::Id => "id",
            Self::Class => "class",
            Self::Attribute => "attr",
            Self::PseudoClass => "pseudo-class",
            Self::PseudoElement => "pseudo-element",
        }
    }

    /// Look up a category by its [`name`](Self::name).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|category| category.name() == name)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An immutable, partially or fully built selector.
///
/// Alongside the text, a fragment records the most specific [`Category`]
/// appended so far and which of the unique categories it already contains.
/// Appending returns a new fragment, so any fragment can be reused as the
/// base of several chains:
///
/// ```
/// use selkie_selector::element;
///
/// let link = element("a");
/// let external = link.attr("target=_blank")?;
/// let focused = link.pseudo_class("focus")?;
/// assert_eq!(link.as_str(), "a");
/// assert_eq!(external.as_str(), "a[target=_blank]");
/// assert_eq!(focused.as_str(), "a:focus");
/// # Ok::<(), selkie_selector::SelectorError>(())
/// ```
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
pub struct SelectorFragment {
    text: String,
    #[serde(serialize_with = "serialize_ordinal")]
    stage: Category,
    has_element: bool,
    has_id: bool,
    has_pseudo_element: bool,
    combined: bool,
}

/// Fragments report their stage as the 0-5 ordinal rather than the name.
#[allow(clippy::trivially_copy_pass_by_ref)]
fn serialize_ordinal<S: Serializer>(stage: &Category, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_u8(stage.ordinal())
}

impl SelectorFragment {
    /// The empty root fragment every chain starts from.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            text: String::new(),
            stage: Category::Element,
            has_element: false,
            has_id: false,
            has_pseudo_element: false,
            combined: false,
        }
    }

    /// A terminal fragment holding already-combined text. Bookkeeping is reset.
    pub(crate) const fn combined(text: String) -> Self {
        Self {
            text,
            stage: Category::Element,
            has_element: false,
            has_id: false,
            has_pseudo_element: false,
            combined: true,
        }
    }

    /// The selector text built so far.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// The most specific category appended so far.
    #[must_use]
    pub const fn stage(&self) -> Category {
        self.stage
    }

    /// Whether a type selector has been appended.
    #[must_use]
    pub const fn has_element(&self) -> bool {
        self.has_element
    }

    /// Whether an ID selector has been appended.
    #[must_use]
    pub const fn has_id(&self) -> bool {
        self.has_id
    }

    /// Whether a pseudo-element has been appended.
    #[must_use]
    pub const fn has_pseudo_element(&self) -> bool {
        self.has_pseudo_element
    }

    /// Whether this fragment was produced by [`combine`](combinator::combine).
    #[must_use]
    pub const fn is_combined(&self) -> bool {
        self.combined
    }

    const fn contains(&self, category: Category) -> bool {
        match category {
            Category::Element => self.has_element,
            Category::Id => self.has_id,
            Category::PseudoElement => self.has_pseudo_element,
            Category::Class | Category::Attribute | Category::PseudoClass => false,
        }
    }

    /// Append a part of any category.
    ///
    /// # Errors
    ///
    /// - [`SelectorError::OrderViolation`] if the fragment is combined, or
    ///   `category` must come before a part already in the fragment.
    /// - [`SelectorError::DuplicateNotAllowed`] if `category` is unique and
    ///   already present. Checked before ordering.
    pub fn append(&self, category: Category, value: &str) -> Result<Self, SelectorError> {
        if self.combined {
            return Err(SelectorError::OrderViolation {
                attempted: category,
                after: Preceding::Combined,
            });
        }
        if category.is_unique() && self.contains(category) {
            return Err(SelectorError::DuplicateNotAllowed(category));
        }
        if category.ordinal() < self.stage.ordinal() {
            return Err(SelectorError::OrderViolation {
                attempted: category,
                after: Preceding::Part(self.stage),
            });
        }
        Ok(self.extend(category, value))
    }

    /// Unchecked append. Callers guarantee the ordering and uniqueness rules.
    fn extend(&self, category: Category, value: &str) -> Self {
        let prefix = category.prefix();
        let suffix = category.suffix();
        let mut text =
            String::with_capacity(self.text.len() + prefix.len() + value.len() + suffix.len());
        text.push_str(&self.text);
        text.push_str(prefix);
        text.push_str(value);
        text.push_str(suffix);

        Self {
            text,
            stage: category,
            has_element: self.has_element || category == Category::Element,
            has_id: self.has_id || category == Category::Id,
            has_pseudo_element: self.has_pseudo_element || category == Category::PseudoElement,
            combined: false,
        }
    }

    /// Append a [type selector](https://www.w3.org/TR/selectors-4/#type-selectors).
    ///
    /// # Errors
    ///
    /// Fails if the fragment already holds any part, or is combined.
    pub fn element(&self, value: &str) -> Result<Self, SelectorError> {
        self.append(Category::Element, value)
    }

    /// Append an ID selector (`#value`).
    ///
    /// # Errors
    ///
    /// Fails after a class, attribute or pseudo part, or on a second ID.
    pub fn id(&self, value: &str) -> Result<Self, SelectorError> {
        self.append(Category::Id, value)
    }

    /// Append a class selector (`.value`). Repeatable.
    ///
    /// # Errors
    ///
    /// Fails after an attribute or pseudo part.
    pub fn class(&self, value: &str) -> Result<Self, SelectorError> {
        self.append(Category::Class, value)
    }

    /// Append an attribute selector (`[value]`). Repeatable.
    ///
    /// `value` is written verbatim between the brackets, so
    /// `href$=".png"` yields `[href$=".png"]`.
    ///
    /// # Errors
    ///
    /// Fails after a pseudo-class or pseudo-element.
    pub fn attr(&self, value: &str) -> Result<Self, SelectorError> {
        self.append(Category::Attribute, value)
    }

    /// Append a pseudo-class (`:value`). Repeatable.
    ///
    /// # Errors
    ///
    /// Fails after a pseudo-element.
    pub fn pseudo_class(&self, value: &str) -> Result<Self, SelectorError> {
        self.append(Category::PseudoClass, value)
    }

    /// Append a pseudo-element (`::value`).
    ///
    /// # Errors
    ///
    /// Fails on a second pseudo-element or on a combined fragment.
    pub fn pseudo_element(&self, value: &str) -> Result<Self, SelectorError> {
        self.append(Category::PseudoElement, value)
    }
}

impl fmt::Display for SelectorFragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl AsRef<str> for SelectorFragment {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

impl From<SelectorFragment> for String {
    fn from(fragment: SelectorFragment) -> Self {
        fragment.text
    }
}

/// Start a chain with a type selector.
#[must_use]
pub fn element(value: &str) -> SelectorFragment {
    SelectorFragment::new().extend(Category::Element, value)
}

/// Start a chain with an ID selector.
#[must_use]
pub fn id(value: &str) -> SelectorFragment {
    SelectorFragment::new().extend(Category::Id, value)
}

/// Start a chain with a class selector.
#[must_use]
pub fn class(value: &str) -> SelectorFragment {
    SelectorFragment::new().extend(Category::Class, value)
}

/// Start a chain with an attribute selector.
#[must_use]
pub fn attr(value: &str) -> SelectorFragment {
    SelectorFragment::new().extend(Category::Attribute, value)
}

/// Start a chain with a pseudo-class.
#[must_use]
pub fn pseudo_class(value: &str) -> SelectorFragment {
    SelectorFragment::new().extend(Category::PseudoClass, value)
}

/// Start a chain with a pseudo-element.
#[must_use]
pub fn pseudo_element(value: &str) -> SelectorFragment {
    SelectorFragment::new().extend(Category::PseudoElement, value)
}

/// The selector text of `fragment`.
///
/// A pure read: the fragment stays valid for further appends and repeated
/// calls return the same string.
#[must_use]
pub fn stringify(fragment: &SelectorFragment) -> String {
    fragment.text.clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordinals_follow_declaration_order() {
        for (index, category) in Category::ALL.into_iter().enumerate() {
            assert_eq!(usize::from(category.ordinal()), index);
        }
    }

    #[test]
    fn test_category_names_round_trip() {
        for category in Category::ALL {
            assert_eq!(Category::from_name(category.name()), Some(category));
        }
        assert_eq!(Category::from_name("universal"), None);
    }

    #[test]
    fn test_extend_sets_only_its_own_flag() {
        let fragment = SelectorFragment::new().extend(Category::Id, "main");
        assert!(fragment.has_id());
        assert!(!fragment.has_element());
        assert!(!fragment.has_pseudo_element());
        assert_eq!(fragment.stage(), Category::Id);
    }

    #[test]
    fn test_combined_constructor_resets_bookkeeping() {
        let fragment = SelectorFragment::combined("a > b".to_string());
        assert!(fragment.is_combined());
        assert_eq!(fragment.stage(), Category::Element);
        assert!(!fragment.contains(Category::Element));
        assert!(!fragment.contains(Category::Id));
        assert!(!fragment.contains(Category::PseudoElement));
    }
}
