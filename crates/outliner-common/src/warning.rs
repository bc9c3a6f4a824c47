//! Outliner warnings with colored terminal output.
//!
//! Provides deduplication to avoid spamming the same warning multiple times.
//! Used by the HTML reader, the anchor planner and the outline builder to
//! report problems that do not abort a build.

use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

use owo_colors::OwoColorize;

/// Warnings recorded so far, in emission order, plus a set for deduplication.
struct WarningLog {
    seen: HashSet<String>,
    ordered: Vec<String>,
}

/// Global log of warnings we've already printed (to deduplicate)
static WARNED: Mutex<Option<WarningLog>> = Mutex::new(None);

/// When set, warnings are still recorded but nothing is printed.
static QUIET: AtomicBool = AtomicBool::new(false);

fn log() -> MutexGuard<'static, Option<WarningLog>> {
    WARNED.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Warn about a non-fatal problem (prints once per unique message)
///
/// # Example
/// ```
/// use outliner_common::warning::{emitted_warnings, warn_once};
///
/// warn_once("Anchor", "id 'head0' is already used by another element");
/// assert!(emitted_warnings().iter().any(|w| w.contains("head0")));
/// ```
pub fn warn_once(component: &str, message: &str) {
    let key = format!("[{component}] {message}");
    let should_print = {
        let mut guard = log();
        let entry = guard.get_or_insert_with(|| WarningLog {
            seen: HashSet::new(),
            ordered: Vec::new(),
        });
        if entry.seen.insert(key.clone()) {
            entry.ordered.push(key);
            true
        } else {
            false
        }
    };

    if should_print && !QUIET.load(Ordering::Relaxed) {
        eprintln!("{}", format!("[Outliner {component}] ⚠ {message}").yellow());
    }
}

/// Clear all recorded warnings (call before processing a new document)
pub fn clear_warnings() {
    if let Some(entry) = log().as_mut() {
        entry.seen.clear();
        entry.ordered.clear();
    }
}

/// Suppress (or re-enable) printing. Warnings are recorded either way.
pub fn set_quiet(quiet: bool) {
    QUIET.store(quiet, Ordering::Relaxed);
}

/// Every distinct warning recorded since the last [`clear_warnings`], formatted
/// as `[component] message`, in the order they were first emitted.
#[must_use]
pub fn emitted_warnings() -> Vec<String> {
    log()
        .as_ref()
        .map(|entry| entry.ordered.clone())
        .unwrap_or_default()
}
