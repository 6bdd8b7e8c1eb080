//! Command-line steps and their evaluation into a selector.
//!
//! A step is either a selector part written `<kind>:<value>` or a combinator
//! token. Parts accumulate into the current compound selector; a combinator
//! closes it and joins it, left-associatively, with the next one.

use std::fmt;
use std::str::FromStr;

use anyhow::{Context, Result, anyhow, bail};
use selkie_selector::{Category, Combinator, SelectorFragment, combine};

/// One command-line token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// A part appended to the current compound selector.
    Part(Category, String),
    /// A combinator symbol, passed through to [`combine`] verbatim.
    Combinator(String),
}

/// Spelled-out names accepted in place of combinator symbols.
fn named_combinator(token: &str) -> Option<Combinator> {
    match token {
        "descendant" => Some(Combinator::Descendant),
        "child" => Some(Combinator::Child),
        "next-sibling" => Some(Combinator::NextSibling),
        "subsequent-sibling" => Some(Combinator::SubsequentSibling),
        _ => None,
    }
}

impl FromStr for Step {
    type Err = anyhow::Error;

    fn from_str(token: &str) -> Result<Self> {
        if let Some(combinator) = Combinator::from_symbol(token).or_else(|| named_combinator(token))
        {
            return Ok(Self::Combinator(combinator.symbol().to_string()));
        }

        let Some((kind, value)) = token.split_once(':') else {
            bail!("expected <kind>:<value> or a combinator, got {token:?}");
        };

        if kind == "combinator" {
            return Ok(Self::Combinator(value.to_string()));
        }

        let category = Category::from_name(kind).ok_or_else(|| {
            let kinds: Vec<&str> = Category::ALL.iter().map(|c| c.name()).collect();
            anyhow!(
                "unknown selector kind {kind:?} (expected one of: {}, combinator)",
                kinds.join(", ")
            )
        })?;
        Ok(Self::Part(category, value.to_string()))
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Part(category, value) => write!(f, "{category}:{value}"),
            Self::Combinator(symbol) => write!(f, "combinator:{symbol}"),
        }
    }
}

/// Evaluate steps in order into a single selector.
///
/// # Errors
///
/// Fails when a part breaks the builder's ordering or uniqueness rules, when
/// a combinator has no compound selector on either side, or when there are
/// no steps at all.
pub fn build(steps: &[Step]) -> Result<SelectorFragment> {
    // Left-hand side built so far, with the combinator waiting for its right side
    let mut pending: Option<(SelectorFragment, &str)> = None;
    let mut compound = SelectorFragment::new();
    let mut compound_is_empty = true;

    for (index, step) in steps.iter().enumerate() {
        let position = index + 1;
        match step {
            Step::Part(category, value) => {
                compound = compound
                    .append(*category, value)
                    .with_context(|| format!("step {position} ({step}) rejected"))?;
                compound_is_empty = false;
            }
            Step::Combinator(symbol) => {
                if compound_is_empty {
                    bail!("step {position}: combinator {symbol:?} has no selector on its left");
                }
                let left = close(pending.take(), &compound);
                pending = Some((left, symbol.as_str()));
                compound = SelectorFragment::new();
                compound_is_empty = true;
            }
        }
    }

    if compound_is_empty {
        return match pending {
            Some((_, symbol)) => Err(anyhow!(
                "combinator {symbol:?} has no selector on its right"
            )),
            None => Err(anyhow!("no selector steps given")),
        };
    }

    Ok(close(pending, &compound))
}

fn close(pending: Option<(SelectorFragment, &str)>, compound: &SelectorFragment) -> SelectorFragment {
    match pending {
        Some((left, symbol)) => combine(&left, symbol, compound),
        None => compound.clone(),
    }
}
