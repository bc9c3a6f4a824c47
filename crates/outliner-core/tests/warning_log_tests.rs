//! Warning log handling across documents.
//!
//! Kept in its own test binary: `process_html` resets the process-wide
//! warning log, which would race with tests that inspect it.

use outliner_common::warning::emitted_warnings;
use outliner_core::{NestingPolicy, OutlineOptions, process_html};

#[test]
fn test_each_document_starts_a_fresh_warning_log() {
    let clamped = r#"<div id="outline"></div><div id="doc"><h2>A</h2><h1>B</h1></div>"#;
    let options = OutlineOptions {
        nesting: NestingPolicy::Clamp,
        ..OutlineOptions::default()
    };
    let clamp_warnings = || {
        emitted_warnings()
            .iter()
            .filter(|w| w.contains("heading 1 (h1) follows h2"))
            .count()
    };

    let _ = process_html(clamped, &options).expect("first document");
    assert_eq!(clamp_warnings(), 1);

    // Recorded once per document, not accumulated.
    let _ = process_html(clamped, &options).expect("second document");
    assert_eq!(clamp_warnings(), 1);

    let clean = r#"<div id="outline"></div><div id="doc"><h1>A</h1></div>"#;
    let _ = process_html(clean, &options).expect("clean document");
    assert!(emitted_warnings().is_empty(), "{:?}", emitted_warnings());
}
