//! Anchor identifiers for headings.
//!
//! Headings without an `id` get `prefix + N`, where `N` is the zero-based
//! position of the heading among all collected headings. Headings that
//! already carry an id keep it and still advance the counter, so running the
//! planner again over its own output assigns nothing new.

use outliner_common::warning::warn_once;
use outliner_dom::{DomError, DomTree, NodeId};
use serde::Serialize;

use crate::headings::HeadingNode;

/// Default prefix for generated identifiers.
pub const DEFAULT_ID_PREFIX: &str = "head";

/// The identifier generated for the heading at `index`.
#[must_use]
pub fn generated_identifier(prefix: &str, index: usize) -> String {
    format!("{prefix}{index}")
}

/// An identifier chosen for a heading that had none.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnchorAssignment {
    /// The heading element.
    #[serde(skip)]
    pub node: NodeId,
    /// Zero-based position of the heading in document order.
    pub index: usize,
    /// The generated identifier.
    pub identifier: String,
}

/// An identifier that could not be written to its heading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteBackFailure {
    /// The assignment that failed.
    pub assignment: AnchorAssignment,
    /// Why the tree refused it.
    pub error: DomError,
}

/// Identifiers chosen for headings, not yet written to the document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnchorPlan {
    assignments: Vec<AnchorAssignment>,
}

impl AnchorPlan {
    /// Fill in every missing identifier in `headings` and remember which
    /// ones were generated.
    pub fn assign(headings: &mut [HeadingNode], prefix: &str) -> Self {
        let mut assignments = Vec::new();
        for (index, heading) in headings.iter_mut().enumerate() {
            if heading.identifier.is_some() {
                continue;
            }
            let identifier = generated_identifier(prefix, index);
            heading.identifier = Some(identifier.clone());
            assignments.push(AnchorAssignment {
                node: heading.node,
                index,
                identifier,
            });
        }
        Self { assignments }
    }

    /// The generated identifiers, in document order.
    #[must_use]
    pub fn assignments(&self) -> &[AnchorAssignment] {
        &self.assignments
    }

    /// Consume the plan, keeping its assignments.
    #[must_use]
    pub fn into_assignments(self) -> Vec<AnchorAssignment> {
        self.assignments
    }

    /// Whether nothing needed an identifier.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }

    /// Warn about generated identifiers that some element in `tree` already
    /// uses. The links still point at the first such element in tree order,
    /// which may not be the heading. Returns the colliding identifiers.
    #[must_use]
    pub fn report_collisions(&self, tree: &DomTree) -> Vec<String> {
        let existing = tree.element_ids();
        let collisions: Vec<String> = self
            .assignments
            .iter()
            .filter(|a| existing.contains(a.identifier.as_str()))
            .map(|a| a.identifier.clone())
            .collect();
        for identifier in &collisions {
            warn_once(
                "Anchor",
                &format!("generated id \"{identifier}\" is already used by another element"),
            );
        }
        collisions
    }

    /// Write every generated identifier to its heading's `id` attribute.
    ///
    /// A failed write never stops the others. The outline entry for that
    /// heading keeps its anchor, but the link will not resolve.
    pub fn write_back(&self, tree: &mut DomTree) -> Vec<WriteBackFailure> {
        let mut failures = Vec::new();
        for assignment in &self.assignments {
            if let Err(error) = tree.set_attribute(assignment.node, "id", &assignment.identifier) {
                warn_once(
                    "Anchor",
                    &format!("could not set id \"{}\": {error}", assignment.identifier),
                );
                failures.push(WriteBackFailure {
                    assignment: assignment.clone(),
                    error,
                });
            }
        }
        failures
    }
}
