//! Errors raised while building an outline.

use strum_macros::Display;
use thiserror::Error;

use crate::headings::HeadingLevel;

/// Which of the two elements the pipeline looks up by id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum ElementRole {
    /// The element whose headings are outlined.
    Source,
    /// The element the rendered outline is appended to.
    Container,
}

/// A failed outline build. The document is left untouched when one of these
/// is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OutlineError {
    /// No element carries the configured id.
    #[error("{role} element with id \"{id}\" not found")]
    MissingElement {
        /// Source or container.
        role: ElementRole,
        /// The id that was looked up.
        id: String,
    },

    /// A heading climbs further out than the outline is deep.
    #[error("heading {heading} ({to}) follows {from}, but only {depth} nesting levels are open")]
    MalformedNesting {
        /// Zero-based position of the offending heading in document order.
        heading: usize,
        /// Level of the heading before it.
        from: HeadingLevel,
        /// Level of the offending heading.
        to: HeadingLevel,
        /// Nesting depth that was open when it was reached.
        depth: usize,
    },
}
