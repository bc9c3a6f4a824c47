//! Turning a flat run of headings into a nested outline.
//!
//! Levels are relative: the first heading always sits at the top, whatever
//! its rank. After that, each heading is compared with the one before it:
//!
//! - same rank: a sibling in the current list;
//! - deeper: a new child list under the last entry, exactly one step down
//!   however large the jump (`h1` then `h4` nests once);
//! - shallower: climb `previous - current` lists, then append.
//!
//! The open lists are kept as a stack of child indices from the root, so
//! climbing is a bounds-checked pop rather than a walk over parent links.

use std::cmp::Ordering;

use outliner_common::warning::warn_once;
use outliner_dom::NodeId;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

use crate::anchors::{DEFAULT_ID_PREFIX, generated_identifier};
use crate::error::OutlineError;
use crate::headings::{HeadingLevel, HeadingNode};

/// What to do when a heading climbs out past the top of the outline
/// (`h3`, `h2`, `h1` after an opening `h2`, say).
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum NestingPolicy {
    /// Fail the build with [`OutlineError::MalformedNesting`].
    #[default]
    Strict,
    /// Stop climbing at the top level and warn.
    Clamp,
}

/// One line of the outline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutlineEntry {
    /// The heading's inner markup.
    pub label: String,
    /// The heading's text.
    pub text: String,
    /// `"#"` followed by the heading's identifier.
    pub anchor: String,
    /// Rank of the source heading.
    pub level: HeadingLevel,
    /// The source heading element.
    #[serde(skip)]
    pub source: NodeId,
    /// Entries nested under this one.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<OutlineEntry>,
}

impl OutlineEntry {
    /// The identifier this entry links to, without the `#`.
    #[must_use]
    pub fn identifier(&self) -> &str {
        self.anchor.strip_prefix('#').unwrap_or(&self.anchor)
    }
}

/// The finished outline: the top-level entries in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct OutlineTree {
    /// Top-level entries.
    pub entries: Vec<OutlineEntry>,
}

impl OutlineTree {
    /// Total number of entries at every depth.
    #[must_use]
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Whether the outline has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of nesting levels: 0 when empty, 1 when flat.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.iter().map(|(depth, _)| depth + 1).max().unwrap_or(0)
    }

    /// Pre-order walk yielding each entry with its depth (0 at the top).
    #[must_use]
    pub fn iter(&self) -> OutlineIter<'_> {
        OutlineIter {
            stack: self.entries.iter().rev().map(|e| (0, e)).collect(),
        }
    }

    /// Every entry in document order.
    #[must_use]
    pub fn flatten(&self) -> Vec<&OutlineEntry> {
        self.iter().map(|(_, entry)| entry).collect()
    }
}

/// Iterator returned by [`OutlineTree::iter`].
pub struct OutlineIter<'a> {
    stack: Vec<(usize, &'a OutlineEntry)>,
}

impl<'a> Iterator for OutlineIter<'a> {
    type Item = (usize, &'a OutlineEntry);

    fn next(&mut self) -> Option<Self::Item> {
        let (depth, entry) = self.stack.pop()?;
        self.stack
            .extend(entry.children.iter().rev().map(|child| (depth + 1, child)));
        Some((depth, entry))
    }
}

/// Builds an [`OutlineTree`] from headings in document order.
///
/// # Example
/// ```
/// use outliner_core::{HeadingLevel, HeadingNode, NestingPolicy, OutlineBuilder};
/// use outliner_dom::NodeId;
///
/// let heading = |n: usize, rank: u8| {
///     let level = HeadingLevel::new(rank).unwrap();
///     HeadingNode::new(NodeId(n), level, None, format!("Section {n}"))
/// };
/// let headings = [heading(1, 1), heading(2, 2), heading(3, 1)];
/// let outline = OutlineBuilder::new(NestingPolicy::Strict).build(&headings).unwrap();
///
/// assert_eq!(outline.entries.len(), 2);
/// assert_eq!(outline.entries[0].children[0].anchor, "#head1");
/// ```
#[derive(Debug, Clone)]
pub struct OutlineBuilder {
    policy: NestingPolicy,
    id_prefix: String,
}

impl Default for OutlineBuilder {
    fn default() -> Self {
        Self::new(NestingPolicy::default())
    }
}

impl OutlineBuilder {
    /// A builder with the given nesting policy and the default id prefix.
    #[must_use]
    pub fn new(policy: NestingPolicy) -> Self {
        Self {
            policy,
            id_prefix: DEFAULT_ID_PREFIX.to_string(),
        }
    }

    /// Prefix for anchors of headings that reach the builder without an
    /// identifier. Matches [`crate::AnchorPlan::assign`] when both use the
    /// same prefix.
    #[must_use]
    pub fn with_id_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.id_prefix = prefix.into();
        self
    }

    /// Build the outline.
    ///
    /// # Errors
    ///
    /// [`OutlineError::MalformedNesting`] under [`NestingPolicy::Strict`]
    /// when a heading would climb past the top level. No partial outline is
    /// returned.
    pub fn build(&self, headings: &[HeadingNode]) -> Result<OutlineTree, OutlineError> {
        let mut root: Vec<OutlineEntry> = Vec::new();
        // Child indices from the root down to the current insertion list.
        let mut open: Vec<usize> = Vec::new();
        let mut previous: Option<HeadingLevel> = None;

        for (index, heading) in headings.iter().enumerate() {
            if let Some(from) = previous {
                match heading.level.cmp(&from) {
                    Ordering::Equal => {}
                    Ordering::Greater => {
                        // The previous heading was appended to the current
                        // list, so it is never empty here.
                        let last = list_at(&mut root, &open).len().saturating_sub(1);
                        open.push(last);
                    }
                    Ordering::Less => {
                        let steps = usize::from(from.get() - heading.level.get());
                        self.ascend(&mut open, steps, index, from, heading.level)?;
                    }
                }
            }
            list_at(&mut root, &open).push(self.entry_for(index, heading));
            previous = Some(heading.level);
        }

        Ok(OutlineTree { entries: root })
    }

    fn ascend(
        &self,
        open: &mut Vec<usize>,
        steps: usize,
        index: usize,
        from: HeadingLevel,
        to: HeadingLevel,
    ) -> Result<(), OutlineError> {
        if let Some(remaining) = open.len().checked_sub(steps) {
            open.truncate(remaining);
            return Ok(());
        }
        match self.policy {
            NestingPolicy::Strict => Err(OutlineError::MalformedNesting {
                heading: index,
                from,
                to,
                depth: open.len(),
            }),
            NestingPolicy::Clamp => {
                warn_once(
                    "Outline",
                    &format!(
                        "heading {index} ({to}) follows {from} with only {} levels open; placed at the top level",
                        open.len()
                    ),
                );
                open.clear();
                Ok(())
            }
        }
    }

    fn entry_for(&self, index: usize, heading: &HeadingNode) -> OutlineEntry {
        let identifier = heading
            .identifier
            .clone()
            .unwrap_or_else(|| generated_identifier(&self.id_prefix, index));
        OutlineEntry {
            label: heading.display_content.clone(),
            text: heading.text.clone(),
            anchor: format!("#{identifier}"),
            level: heading.level,
            source: heading.node,
            children: Vec::new(),
        }
    }
}

/// The list reached by following `path` from `root`.
fn list_at<'a>(root: &'a mut Vec<OutlineEntry>, path: &[usize]) -> &'a mut Vec<OutlineEntry> {
    let mut list = root;
    for &index in path {
        list = &mut list[index].children;
    }
    list
}
