//! `clear_warnings` resets process-wide state, so it lives in its own test binary.

use selkit_common::warning::{clear_warnings, has_warned, warn_once};

#[test]
fn test_clear_warnings_forgets_everything() {
    warn_once("Test", "first");
    warn_once("Other", "second");
    assert!(has_warned("Test", "first"));

    clear_warnings();

    assert!(!has_warned("Test", "first"));
    assert!(!has_warned("Other", "second"));
}
