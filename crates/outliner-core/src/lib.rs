//! Table-of-contents outlines for HTML documents.
//!
//! Headings (`h1`-`h6`) under a source element are gathered in document
//! order, given anchor ids where they lack one, and folded into a nested
//! [`OutlineTree`]. The tree is then rendered as nested lists of links into a
//! container element of the same document.
//!
//! # Example
//!
//! ```
//! use outliner_core::{OutlineOptions, process_html};
//!
//! let html = concat!(
//!     r#"<div id="outline"></div>"#,
//!     r#"<div id="doc"><h1>Intro</h1><h2 id="why">Why</h2><h1>End</h1></div>"#,
//! );
//! let processed = process_html(html, &OutlineOptions::default()).unwrap();
//!
//! assert_eq!(processed.report.outline.len(), 3);
//! assert!(processed.html.starts_with(concat!(
//!     r#"<div id="outline"><h1>Outline</h1><ol>"#,
//!     r##"<li><a href="#head0">Intro</a><ol><li><a href="#why">Why</a></li></ol></li>"##,
//!     r##"<li><a href="#head2">End</a></li></ol></div>"##,
//! )));
//! ```

/// Anchor id planning and write-back.
pub mod anchors;
/// The outline builder and its tree.
pub mod builder;
/// The whole-document pipeline.
pub mod document;
/// Build errors.
pub mod error;
/// Heading discovery.
pub mod headings;
/// Configuration.
pub mod options;
/// Rendering to the document, text and JSON.
pub mod render;

pub use anchors::{AnchorAssignment, AnchorPlan, DEFAULT_ID_PREFIX, WriteBackFailure};
pub use builder::{NestingPolicy, OutlineBuilder, OutlineEntry, OutlineIter, OutlineTree};
pub use document::{OutlineReport, ProcessedDocument, make_outline, process_html};
pub use error::{ElementRole, OutlineError};
pub use headings::{HeadingLevel, HeadingNode, SearchStrategy, collect_headings};
pub use options::{OptionsError, OutlineOptions};
pub use render::{ListStyle, render_json, render_outline, render_text};
