//! Heading discovery.
//!
//! [§ 4.3.6 The h1, h2, h3, h4, h5, and h6 elements](https://html.spec.whatwg.org/multipage/sections.html#the-h1,-h2,-h3,-h4,-h5,-and-h6-elements)
//!
//! "These elements have a rank given by the number in their name. The h1
//! element is said to have the highest rank, the h6 element has the lowest
//! rank, and two elements with the same name have equal rank."

use std::fmt;

use outliner_dom::{DomTree, NodeId};
use outliner_html::inner_html;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// Heading rank, 1 (`h1`) through 6 (`h6`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct HeadingLevel(u8);

impl HeadingLevel {
    /// Build a level from its rank. `None` outside 1-6.
    #[must_use]
    pub const fn new(rank: u8) -> Option<Self> {
        if matches!(rank, 1..=6) {
            Some(Self(rank))
        } else {
            None
        }
    }

    /// Map a tag name (`h1`-`h6`, ASCII case-insensitive) to its rank.
    #[must_use]
    pub fn from_tag_name(tag: &str) -> Option<Self> {
        match tag.as_bytes() {
            [h, digit] if h.eq_ignore_ascii_case(&b'h') => Self::new(digit.wrapping_sub(b'0')),
            _ => None,
        }
    }

    /// The numeric rank.
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }
}

impl fmt::Display for HeadingLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "h{}", self.0)
    }
}

/// How far below the source element headings are looked for.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum SearchStrategy {
    /// Only direct children of the source element.
    #[default]
    Children,
    /// Every descendant, in tree order, including headings nested in
    /// sections or articles.
    Descendants,
}

/// One heading element found in the source document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadingNode {
    /// The heading element.
    pub node: NodeId,
    /// Rank taken from the tag name.
    pub level: HeadingLevel,
    /// The element's `id`, if it has a non-empty one.
    pub identifier: Option<String>,
    /// Serialized inner content of the heading.
    pub display_content: String,
    /// Text content with whitespace collapsed.
    pub text: String,
}

impl HeadingNode {
    /// Build a heading by hand. The text is `display_content` with
    /// whitespace collapsed.
    #[must_use]
    pub fn new(
        node: NodeId,
        level: HeadingLevel,
        identifier: Option<String>,
        display_content: impl Into<String>,
    ) -> Self {
        let display_content = display_content.into();
        let text = collapse_whitespace(&display_content);
        Self {
            node,
            level,
            identifier,
            display_content,
            text,
        }
    }

    /// Read a heading from the tree. `None` if `id` is not a heading element.
    #[must_use]
    pub fn from_element(tree: &DomTree, id: NodeId) -> Option<Self> {
        let element = tree.as_element(id)?;
        let level = HeadingLevel::from_tag_name(&element.tag_name)?;
        let identifier = element
            .id()
            .filter(|id| !id.is_empty())
            .map(ToString::to_string);
        Some(Self {
            node: id,
            level,
            identifier,
            display_content: inner_html(tree, id),
            text: collapse_whitespace(&tree.text_content(id)),
        })
    }
}

/// Collect the headings under `source` in document order.
///
/// Headings inside `excluded` (typically the outline container, which holds
/// a rendered title heading after a previous run) are skipped, but only when
/// `excluded` lies below `source`. A source nested inside the excluded
/// element is outlined in full.
#[must_use]
pub fn collect_headings(
    tree: &DomTree,
    source: NodeId,
    strategy: SearchStrategy,
    excluded: Option<NodeId>,
) -> Vec<HeadingNode> {
    let excluded = excluded.filter(|&container| tree.is_descendant_of(container, source));
    let outside_excluded = |id: NodeId| {
        excluded.is_none_or(|container| id != container && !tree.is_descendant_of(id, container))
    };
    match strategy {
        SearchStrategy::Children => tree
            .children(source)
            .iter()
            .copied()
            .filter(|&id| outside_excluded(id))
            .filter_map(|id| HeadingNode::from_element(tree, id))
            .collect(),
        SearchStrategy::Descendants => tree
            .descendants(source)
            .filter(|&id| outside_excluded(id))
            .filter_map(|id| HeadingNode::from_element(tree, id))
            .collect(),
    }
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
