use std::fmt;

use selkie_common::warning::warn_once;
use serde::Serialize;

use super::SelectorFragment;

/// [§ 16 Combinators](https://www.w3.org/TR/selectors-4/#combinators)
///
/// "A combinator is punctuation that represents a particular kind of
/// relationship between the selectors on either side."
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Combinator {
    /// [§ 16.1 Descendant combinator](https://www.w3.org/TR/selectors-4/#descendant-combinators)
    /// "A descendant combinator is whitespace that separates two compound selectors."
    Descendant,

    /// [§ 16.2 Child combinator](https://www.w3.org/TR/selectors-4/#child-combinators)
    /// "A child combinator is a greater-than sign (>) that separates two compound
    /// selectors."
    Child,

    /// [§ 16.3 Next-sibling combinator](https://www.w3.org/TR/selectors-4/#adjacent-sibling-combinators)
    /// "A next-sibling combinator is a plus sign (+) that separates two compound
    /// selectors."
    NextSibling,

    /// [§ 16.4 Subsequent-sibling combinator](https://www.w3.org/TR/selectors-4/#general-sibling-combinators)
    /// "A subsequent-sibling combinator is a tilde (~) that separates two compound
    /// selectors."
    SubsequentSibling,
}

impl Combinator {
    /// Every combinator in the CSS grammar.
    pub const ALL: [Self; 4] = [
        Self::Descendant,
        Self::Child,
        Self::NextSibling,
        Self::SubsequentSibling,
    ];

    /// The token written between the two selectors.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Descendant => " ",
            Self::Child => ">",
            Self::NextSibling => "+",
            Self::SubsequentSibling => "~",
        }
    }

    /// Recognize one of the four CSS combinator tokens.
    #[must_use]
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.symbol() == symbol)
    }
}

impl fmt::Display for Combinator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Join two selectors with a combinator token.
///
/// The result is `a + " " + combinator + " " + b`. It is terminal: its
/// bookkeeping is reset, appending to it fails, but it can be combined again.
///
/// `combinator` is written verbatim. Anything other than `" "`, `">"`, `"+"`
/// or `"~"` is still accepted and reported once through
/// [`warn_once`](selkie_common::warning::warn_once).
///
/// ```
/// use selkie_selector::{combine, element};
///
/// let list = combine(&element("ul"), ">", &element("li"));
/// let item = combine(&list, "~", &element("li"));
/// assert_eq!(item.as_str(), "ul > li ~ li");
/// ```
#[must_use]
pub fn combine(a: &SelectorFragment, combinator: &str, b: &SelectorFragment) -> SelectorFragment {
    if Combinator::from_symbol(combinator).is_none() {
        warn_once(
            "selector",
            &format!("unrecognized combinator {combinator:?}, using it verbatim"),
        );
    }
    join(a, combinator, b)
}

/// [`combine`] with a typed combinator. Never warns.
#[must_use]
pub fn combine_with(
    a: &SelectorFragment,
    combinator: Combinator,
    b: &SelectorFragment,
) -> SelectorFragment {
    join(a, combinator.symbol(), b)
}

fn join(a: &SelectorFragment, combinator: &str, b: &SelectorFragment) -> SelectorFragment {
    SelectorFragment::combined(format!("{} {combinator} {}", a.as_str(), b.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbols_round_trip() {
        for combinator in Combinator::ALL {
            assert_eq!(Combinator::from_symbol(combinator.symbol()), Some(combinator));
        }
    }

    #[test]
    fn test_from_symbol_is_exact() {
        assert_eq!(Combinator::from_symbol(" > "), None);
        assert_eq!(Combinator::from_symbol(""), None);
        assert_eq!(Combinator::from_symbol("  "), None);
    }
}
