//! Builder warnings with colored terminal output.
//!
//! Provides deduplication to avoid spamming the same warning multiple times.
//! Used by the selector builder to report input it accepts verbatim but does
//! not recognize (for example a combinator outside the CSS grammar).

use std::collections::HashSet;
use std::sync::{Mutex, MutexGuard, PoisonError};

use owo_colors::OwoColorize;
use serde::Serialize;

/// A warning that has been reported at least once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Warning {
    /// The component that raised the warning (e.g. `"selector"`).
    pub component: String,
    /// Human-readable description of what was unusual.
    pub message: String,
}

#[derive(Default)]
struct Registry {
    seen: HashSet<String>,
    records: Vec<Warning>,
    quiet: bool,
}

/// Global registry of warnings we've already reported (to deduplicate)
static WARNED: Mutex<Option<Registry>> = Mutex::new(None);

fn registry() -> MutexGuard<'static, Option<Registry>> {
    WARNED.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Warn about unusual input (prints once per unique message)
///
/// Every distinct message stays in the registry until [`clear_warnings`];
/// long-running callers that feed arbitrary input should clear it between
/// unrelated selectors.
///
/// # Example
/// ```
/// use selkie_common::warning::warn_once;
///
/// warn_once("selector", "unrecognized combinator '|'");
/// ```
pub fn warn_once(component: &str, message: &str) {
    let key = format!("[{component}] {message}");
    let mut guard = registry();
    let registry = guard.get_or_insert_with(Registry::default);

    if !registry.seen.insert(key) {
        return;
    }

    registry.records.push(Warning {
        component: component.to_string(),
        message: message.to_string(),
    });

    if !registry.quiet {
        eprintln!("{}", format!("[Selkie {component}] ⚠ {message}").yellow());
    }
}

/// Suppress (or re-enable) printing. Warnings are still recorded while quiet.
pub fn set_quiet(quiet: bool) {
    registry().get_or_insert_with(Registry::default).quiet = quiet;
}

/// Whether printing is currently suppressed.
#[must_use]
pub fn is_quiet() -> bool {
    registry().as_ref().is_some_and(|registry| registry.quiet)
}

/// Every warning recorded since the last [`clear_warnings`], in report order.
#[must_use]
pub fn recorded_warnings() -> Vec<Warning> {
    registry()
        .as_ref()
        .map(|registry| registry.records.clone())
        .unwrap_or_default()
}

/// Clear all recorded warnings (call before building an unrelated selector)
pub fn clear_warnings() {
    let mut guard = registry();
    if let Some(registry) = guard.as_mut() {
        registry.seen.clear();
        registry.records.clear();
    }
}
