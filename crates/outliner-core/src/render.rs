//! Writing an outline into a document, or out as text.

use std::fmt::Write as _;

use outliner_dom::{DomTree, NodeId};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

use crate::builder::{OutlineEntry, OutlineTree};
use crate::options::OutlineOptions;

/// Which list element the outline is rendered with.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ListStyle {
    /// `<ol>`
    #[default]
    Ol,
    /// `<ul>`
    Ul,
}

impl ListStyle {
    /// The element's tag name.
    #[must_use]
    pub const fn tag_name(self) -> &'static str {
        match self {
            Self::Ol => "ol",
            Self::Ul => "ul",
        }
    }
}

/// Append the outline to `container`: the title heading, if one is
/// configured, then the top-level list. Returns the list element.
///
/// Each entry becomes `<li><a href="#id">…</a></li>`, the link holding a copy
/// of the heading's content. An entry with children gets a nested list of
/// the same style inside its `li`. An empty outline still produces an empty
/// list.
pub fn render_outline(
    tree: &mut DomTree,
    container: NodeId,
    outline: &OutlineTree,
    options: &OutlineOptions,
) -> NodeId {
    if let Some(title) = &options.title {
        let heading = tree.create_element("h1");
        let text = tree.create_text(title.clone());
        tree.append_child(heading, text);
        tree.append_child(container, heading);
    }
    let list = render_list(tree, &outline.entries, options.list_style);
    tree.append_child(container, list);
    list
}

fn render_list(tree: &mut DomTree, entries: &[OutlineEntry], style: ListStyle) -> NodeId {
    let list = tree.create_element(style.tag_name());
    for entry in entries {
        let item = tree.create_element("li");
        let link = tree.create_element_with_attributes("a", [("href", entry.anchor.as_str())]);
        copy_heading_content(tree, entry, link);
        tree.append_child(item, link);
        if !entry.children.is_empty() {
            let nested = render_list(tree, &entry.children, style);
            tree.append_child(item, nested);
        }
        tree.append_child(list, item);
    }
    list
}

/// Deep-copy the heading's children into `link`, without their `id`
/// attributes so that no id appears twice in the document. Entries whose
/// source is not in this tree fall back to their text.
fn copy_heading_content(tree: &mut DomTree, entry: &OutlineEntry, link: NodeId) {
    if tree.as_element(entry.source).is_none() {
        let text = tree.create_text(entry.text.clone());
        tree.append_child(link, text);
        return;
    }
    let children = tree.children(entry.source).to_vec();
    for child in children {
        if let Some(copy) = tree.clone_subtree(child) {
            tree.remove_attribute_in_subtree(copy, "id");
            tree.append_child(link, copy);
        }
    }
}

/// Indented plain-text rendering, one entry per line:
/// two spaces per level, the heading text, then the anchor.
///
/// ```
/// use outliner_core::{OutlineOptions, process_html, render_text};
///
/// let html = r#"<div id="doc"><h1>Intro</h1><h2>Scope</h2></div><div id="outline"></div>"#;
/// let processed = process_html(html, &OutlineOptions::default()).unwrap();
/// assert_eq!(render_text(&processed.report.outline), "Intro #head0\n  Scope #head1\n");
/// ```
#[must_use]
pub fn render_text(outline: &OutlineTree) -> String {
    let mut out = String::new();
    for (depth, entry) in outline.iter() {
        let _ = writeln!(out, "{}{} {}", "  ".repeat(depth), entry.text, entry.anchor);
    }
    out
}

/// The outline as pretty-printed JSON.
///
/// # Errors
///
/// Only if serialization itself fails, which plain strings and numbers
/// never cause.
pub fn render_json(outline: &OutlineTree) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(outline)
}
