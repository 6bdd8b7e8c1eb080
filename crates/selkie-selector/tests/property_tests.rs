//! Property tests over randomly generated part chains.

#![allow(clippy::needless_pass_by_value)]

use quickcheck::{Arbitrary, Gen};
use quickcheck_macros::quickcheck;
use selkie_selector::{Category, SelectorError, SelectorFragment, stringify};

/// A chain of parts whose categories never go backwards and whose unique
/// categories appear at most once.
#[derive(Debug, Clone)]
struct OrderedChain(Vec<(Category, String)>);

fn arbitrary_value(g: &mut Gen) -> String {
    let alphabet = ['a', 'b', 'x', '-', '_', '1'];
    let len = usize::arbitrary(g) % 6 + 1;
    (0..len).map(|_| *g.choose(&alphabet).unwrap()).collect()
}

impl Arbitrary for OrderedChain {
    fn arbitrary(g: &mut Gen) -> Self {
        let mut parts = Vec::new();
        for category in Category::ALL {
            let count = if category.is_unique() {
                usize::from(bool::arbitrary(g))
            } else {
                usize::arbitrary(g) % 3
            };
            for _ in 0..count {
                parts.push((category, arbitrary_value(g)));
            }
        }
        Self(parts)
    }
}

fn build(parts: &[(Category, String)]) -> Result<SelectorFragment, SelectorError> {
    parts
        .iter()
        .try_fold(SelectorFragment::new(), |fragment, (category, value)| {
            fragment.append(*category, value)
        })
}

fn expected_text(parts: &[(Category, String)]) -> String {
    parts
        .iter()
        .map(|(category, value)| format!("{}{value}{}", category.prefix(), category.suffix()))
        .collect()
}

#[quickcheck]
fn ordered_chains_always_build(chain: OrderedChain) -> bool {
    build(&chain.0).is_ok_and(|fragment| stringify(&fragment) == expected_text(&chain.0))
}

#[quickcheck]
fn stage_is_last_category(chain: OrderedChain) -> bool {
    let fragment = build(&chain.0).unwrap();
    let expected = chain.0.last().map_or(Category::Element, |(c, _)| *c);
    fragment.stage() == expected
}

#[quickcheck]
fn unique_flags_track_presence(chain: OrderedChain) -> bool {
    let fragment = build(&chain.0).unwrap();
    let has = |wanted: Category| chain.0.iter().any(|(c, _)| *c == wanted);
    fragment.has_element() == has(Category::Element)
        && fragment.has_id() == has(Category::Id)
        && fragment.has_pseudo_element() == has(Category::PseudoElement)
}

#[quickcheck]
fn appending_any_unique_category_twice_fails(chain: OrderedChain) -> bool {
    let fragment = build(&chain.0).unwrap();
    Category::ALL
        .into_iter()
        .filter(|c| c.is_unique() && chain.0.iter().any(|(present, _)| present == c))
        .all(|c| fragment.append(c, "again") == Err(SelectorError::DuplicateNotAllowed(c)))
}

#[quickcheck]
fn failed_appends_do_not_change_the_fragment(chain: OrderedChain, index: usize) -> bool {
    let fragment = build(&chain.0).unwrap();
    let before = fragment.clone();
    let category = Category::ALL[index % Category::ALL.len()];
    let _ = fragment.append(category, "probe");
    fragment == before && stringify(&fragment) == stringify(&before)
}
