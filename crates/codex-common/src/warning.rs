//! Deduplicated warnings on stderr.
//!
//! Each `(component, message)` pair is reported once until the registry is
//! cleared. The CLI clears it per document and reads the count back to
//! summarize the tokenizer's diagnostics.

use std::collections::HashSet;
use std::sync::{LazyLock, Mutex, MutexGuard, PoisonError};

use owo_colors::OwoColorize;

type Reported = HashSet<(String, String)>;

static REPORTED: LazyLock<Mutex<Reported>> = LazyLock::new(|| Mutex::new(HashSet::new()));

// A panic while holding the lock leaves the set intact, so poisoning is ignored.
fn reported() -> MutexGuard<'static, Reported> {
    REPORTED.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Print `message` from `component` in yellow on stderr, unless the same
/// pair has been reported since the last [`clear_warnings`].
///
/// # Example
/// ```
/// use codex_common::warning::warn_once;
///
/// warn_once("Tokenizer", "eof-in-tag at byte 42");
/// warn_once("Tokenizer", "eof-in-tag at byte 42"); // silent
/// ```
pub fn warn_once(component: &str, message: &str) {
    let first_report = reported().insert((component.to_string(), message.to_string()));
    if first_report {
        eprintln!("{}", format!("[Codex {component}] ⚠ {message}").yellow());
    }
}

/// Number of distinct warnings reported since the last [`clear_warnings`].
#[must_use]
pub fn warning_count() -> usize {
    reported().len()
}

/// Forget every reported warning (call before processing a new document).
pub fn clear_warnings() {
    reported().clear();
}
