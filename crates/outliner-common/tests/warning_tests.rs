//! Tests for the deduplicating warning log.

use outliner_common::warning::{emitted_warnings, set_quiet, warn_once};

#[test]
fn test_warning_is_recorded_once() {
    set_quiet(true);
    warn_once("Test", "duplicate-message-for-dedup-test");
    warn_once("Test", "duplicate-message-for-dedup-test");

    let count = emitted_warnings()
        .iter()
        .filter(|w| w.as_str() == "[Test] duplicate-message-for-dedup-test")
        .count();
    assert_eq!(count, 1);
}

#[test]
fn test_component_is_part_of_the_key() {
    set_quiet(true);
    warn_once("Alpha", "shared-message-across-components");
    warn_once("Beta", "shared-message-across-components");

    let warnings = emitted_warnings();
    assert!(warnings.contains(&"[Alpha] shared-message-across-components".to_string()));
    assert!(warnings.contains(&"[Beta] shared-message-across-components".to_string()));
}
