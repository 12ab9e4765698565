//! Warnings with colored terminal output.
//!
//! Provides deduplication to avoid spamming the same warning multiple times.
//! Used by the selector builder and the CLI to report input that is accepted
//! but probably not what the caller meant.

use std::collections::HashSet;
use std::sync::{Mutex, MutexGuard, PoisonError};

use owo_colors::OwoColorize;

/// Global set of warnings we've already printed (to deduplicate)
static WARNED: Mutex<Option<HashSet<String>>> = Mutex::new(None);

fn warned() -> MutexGuard<'static, Option<HashSet<String>>> {
    // A panic while holding the lock leaves the set intact; keep using it.
    WARNED.lock().unwrap_or_else(PoisonError::into_inner)
}

fn key(component: &str, message: &str) -> String {
    format!("[{component}] {message}")
}

/// Warn about questionable input (prints once per unique message)
///
/// # Example
/// ```ignore
/// warn_once("Selector", "empty class value");
/// ```
pub fn warn_once(component: &str, message: &str) {
    let should_print = warned()
        .get_or_insert_with(HashSet::new)
        .insert(key(component, message));

    if should_print {
        eprintln!("{}", format!("[selkit {component}] ⚠ {message}").yellow());
    }
}

/// Whether `warn_once` has already reported this exact message.
///
/// Inspection hook for tests; nothing in the pipeline branches on it.
#[must_use]
pub fn has_warned(component: &str, message: &str) -> bool {
    warned()
        .as_ref()
        .is_some_and(|set| set.contains(&key(component, message)))
}

/// Clear all recorded warnings
pub fn clear_warnings() {
    if let Some(set) = warned().as_mut() {
        set.clear();
    }
}
