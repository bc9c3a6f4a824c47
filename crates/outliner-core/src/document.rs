//! The outline pipeline over a whole document.
//!
//! Locate the source and container elements, collect headings, plan
//! anchors, build the outline, and only then touch the document: ids are
//! written back and the outline is rendered once the build has succeeded.

use outliner_common::warning::clear_warnings;
use outliner_dom::{DomTree, NodeId};
use outliner_html::{ParseIssue, parse_document, serialize_document};

use crate::anchors::{AnchorAssignment, AnchorPlan, WriteBackFailure};
use crate::builder::{OutlineBuilder, OutlineTree};
use crate::error::{ElementRole, OutlineError};
use crate::headings::collect_headings;
use crate::options::OutlineOptions;
use crate::render::render_outline;

/// What a successful run produced.
#[derive(Debug, Clone)]
pub struct OutlineReport {
    /// The outline that was rendered.
    pub outline: OutlineTree,
    /// Identifiers generated for headings that had none.
    pub assigned_ids: Vec<AnchorAssignment>,
    /// Generated identifiers another element already used.
    pub id_collisions: Vec<String>,
    /// Identifiers that could not be written back.
    pub failed_write_backs: Vec<WriteBackFailure>,
    /// The rendered top-level list element.
    pub list: NodeId,
}

/// Build an outline of the source element and render it into the
/// container, both found by id.
///
/// # Errors
///
/// - [`OutlineError::MissingElement`] if either element is absent.
/// - [`OutlineError::MalformedNesting`] under strict nesting.
///
/// On error the tree is left exactly as it was.
pub fn make_outline(
    tree: &mut DomTree,
    options: &OutlineOptions,
) -> Result<OutlineReport, OutlineError> {
    let source = find_element(tree, ElementRole::Source, &options.source_id)?;
    let container = find_element(tree, ElementRole::Container, &options.container_id)?;

    let mut headings = collect_headings(tree, source, options.search, Some(container));
    let plan = AnchorPlan::assign(&mut headings, &options.id_prefix);
    let outline = OutlineBuilder::new(options.nesting)
        .with_id_prefix(options.id_prefix.as_str())
        .build(&headings)?;

    let id_collisions = plan.report_collisions(tree);
    let failed_write_backs = plan.write_back(tree);
    let list = render_outline(tree, container, &outline, options);

    Ok(OutlineReport {
        outline,
        assigned_ids: plan.into_assignments(),
        id_collisions,
        failed_write_backs,
        list,
    })
}

fn find_element(tree: &DomTree, role: ElementRole, id: &str) -> Result<NodeId, OutlineError> {
    tree.get_element_by_id(id)
        .ok_or_else(|| OutlineError::MissingElement {
            role,
            id: id.to_string(),
        })
}

/// A document after the outline pipeline has run over it.
#[derive(Debug, Clone)]
pub struct ProcessedDocument {
    /// The rewritten tree.
    pub tree: DomTree,
    /// The rewritten document as markup.
    pub html: String,
    /// What the pipeline did.
    pub report: OutlineReport,
    /// Problems met while parsing the input.
    pub issues: Vec<ParseIssue>,
}

/// Parse `html`, run [`make_outline`] over it and serialize the result.
///
/// Each call starts a fresh warning log, so a warning repeated from an
/// earlier document is printed again.
///
/// # Errors
///
/// As [`make_outline`].
pub fn process_html(html: &str, options: &OutlineOptions) -> Result<ProcessedDocument, OutlineError> {
    clear_warnings();
    let parsed = parse_document(html);
    let mut tree = parsed.tree;
    let report = make_outline(&mut tree, options)?;
    let html = serialize_document(&tree);
    Ok(ProcessedDocument {
        tree,
        html,
        report,
        issues: parsed.issues,
    })
}
