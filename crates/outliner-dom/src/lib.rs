//! DOM tree implementation for the outliner.
//!
//! This crate provides an arena-based DOM tree structure following the
//! [DOM Living Standard](https://dom.spec.whatwg.org/).
//!
//! # Design
//!
//! The tree uses arena allocation with [`NodeId`] indices for all relationships,
//! providing O(1) access and traversal without borrow checker issues. Nodes are
//! never freed: a removed node simply becomes detached and can be re-inserted.

use std::collections::HashSet;
use std::fmt;

use thiserror::Error;

/// A type-safe index into the DOM tree.
///
/// [§ 4.4 Interface Node](https://dom.spec.whatwg.org/#interface-node)
/// "Each node has an associated node document..."
///
/// `NodeId` provides O(1) access to any node in the tree without borrowing issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub usize);

impl NodeId {
    /// The root document node is always at index 0.
    pub const ROOT: Self = Self(0);
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "node {}", self.0)
    }
}

/// Errors raised by fallible tree mutations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomError {
    /// The id does not refer to a node allocated in this tree.
    #[error("{0} does not exist in this tree")]
    NodeNotFound(NodeId),
    /// The operation needs an element but the node is text, a comment, etc.
    #[error("{0} is not an element")]
    NotAnElement(NodeId),
}

/// [§ 4.9.2 Interface Attr](https://dom.spec.whatwg.org/#interface-attr)
///
/// "An element has an associated attribute list, which is a list of
/// attributes."
///
/// Kept as an ordered list rather than a map so that a serialized document
/// reproduces its attributes in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttributeList {
    entries: Vec<(String, String)>,
}

impl AttributeList {
    /// An empty attribute list.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// [§ 4.9 get an attribute by name](https://dom.spec.whatwg.org/#concept-element-attributes-get-by-name)
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// Whether an attribute with this name is present.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|(k, _)| k == name)
    }

    /// [§ 4.9 set an attribute value](https://dom.spec.whatwg.org/#concept-element-attributes-set-value)
    ///
    /// "If attribute is null, create an attribute ... and then append this
    /// attribute to element. Otherwise change attribute to value."
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        if let Some(entry) = self.entries.iter_mut().find(|(k, _)| *k == name) {
            entry.1 = value;
        } else {
            self.entries.push((name, value));
        }
    }

    /// Append an attribute unless one with the same name already exists.
    ///
    /// Returns `false` for a duplicate, which the tokenizer reports as a
    /// duplicate-attribute parse error.
    pub fn insert_if_absent(&mut self, name: impl Into<String>, value: impl Into<String>) -> bool {
        let name = name.into();
        if self.contains(&name) {
            return false;
        }
        self.entries.push((name, value.into()));
        true
    }

    /// Remove an attribute, returning its previous value.
    pub fn remove(&mut self, name: &str) -> Option<String> {
        let index = self.entries.iter().position(|(k, _)| k == name)?;
        Some(self.entries.remove(index).1)
    }

    /// Keep only the attributes for which `keep` returns true, in order.
    pub fn retain(&mut self, mut keep: impl FnMut(&str, &str) -> bool) {
        self.entries.retain(|(k, v)| keep(k, v));
    }

    /// Iterate `(name, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of attributes.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the element has no attributes.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for AttributeList {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut list = Self::new();
        for (k, v) in iter {
            list.set(k, v);
        }
        list
    }
}

/// [§ 4.4 Interface Node](https://dom.spec.whatwg.org/#interface-node)
///
/// "Node is an abstract interface that is used by all nodes in a tree."
///
/// This node stores indices for parent/child/sibling relationships,
/// enabling O(1) traversal in any direction.
#[derive(Debug, Clone)]
pub struct Node {
    /// "Each node has an associated node type"
    pub node_type: NodeType,

    /// [§ 4.4](https://dom.spec.whatwg.org/#concept-tree-parent)
    /// "An object that participates in a tree has a parent, which is either
    /// null or an object."
    pub parent: Option<NodeId>,

    /// [§ 4.4](https://dom.spec.whatwg.org/#concept-tree-child)
    /// "A node has an associated list of children"
    pub children: Vec<NodeId>,

    /// [§ 4.4](https://dom.spec.whatwg.org/#concept-tree-next-sibling)
    pub next_sibling: Option<NodeId>,

    /// [§ 4.4](https://dom.spec.whatwg.org/#concept-tree-previous-sibling)
    pub prev_sibling: Option<NodeId>,
}

impl Node {
    const fn detached(node_type: NodeType) -> Self {
        Self {
            node_type,
            parent: None,
            children: Vec::new(),
            next_sibling: None,
            prev_sibling: None,
        }
    }
}

/// [§ 4.4 Interface Node](https://dom.spec.whatwg.org/#interface-node)
///
/// "Each node has an associated node type"
#[derive(Debug, Clone)]
pub enum NodeType {
    /// [§ 4.5 Interface Document](https://dom.spec.whatwg.org/#interface-document)
    Document,
    /// [§ 4.6 Interface DocumentType](https://dom.spec.whatwg.org/#interface-documenttype)
    /// "Doctypes have an associated name"
    Doctype(String),
    /// [§ 4.9 Interface Element](https://dom.spec.whatwg.org/#interface-element)
    Element(ElementData),
    /// [§ 4.10 Interface Text](https://dom.spec.whatwg.org/#interface-text)
    Text(String),
    /// [§ 4.7 Interface Comment](https://dom.spec.whatwg.org/#interface-comment)
    Comment(String),
}

/// Element-specific data.
///
/// NOTE: We only store the local name and attributes. Namespaces are not
/// modelled; everything is treated as an HTML element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementData {
    /// "An element's local name", lowercased by the tokenizer.
    pub tag_name: String,
    /// "An element has an associated attribute list"
    pub attrs: AttributeList,
}

impl ElementData {
    /// Create element data with no attributes.
    #[must_use]
    pub fn new(tag_name: impl Into<String>) -> Self {
        Self {
            tag_name: tag_name.into(),
            attrs: AttributeList::new(),
        }
    }

    /// Returns the element's id attribute value if present.
    ///
    /// Per [§ 3.2.6 Global attributes](https://html.spec.whatwg.org/multipage/dom.html#global-attributes):
    /// "The id attribute specifies its element's unique identifier (ID)."
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.attrs.get("id")
    }

    /// Returns the set of class names from the class attribute.
    #[must_use]
    pub fn classes(&self) -> HashSet<&str> {
        self.attrs
            .get("class")
            .map(|list| list.split_ascii_whitespace().collect())
            .unwrap_or_default()
    }
}

/// Arena-based DOM tree with O(1) node access and traversal.
///
/// [§ 4 Nodes](https://dom.spec.whatwg.org/#nodes)
///
/// "The DOM represents a document as a tree."
#[derive(Debug, Clone)]
pub struct DomTree {
    /// All nodes in the tree, indexed by `NodeId`.
    /// The Document node is always at index 0 (`NodeId::ROOT`).
    nodes: Vec<Node>,
}

impl DomTree {
    /// Create a new DOM tree with just the Document node.
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::detached(NodeType::Document)],
        }
    }

    /// Get the root document node ID.
    #[must_use]
    pub const fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    /// Get a node by its ID.
    #[must_use]
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    /// Get a mutable reference to a node by its ID.
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id.0)
    }

    /// Number of allocated nodes, attached or not.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always false: the Document node exists from construction.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Allocate a new node and return its ID.
    /// The node is not yet attached to the tree.
    pub fn alloc(&mut self, node_type: NodeType) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node::detached(node_type));
        id
    }

    /// [§ 4.5 createElement()](https://dom.spec.whatwg.org/#dom-document-createelement)
    ///
    /// Allocates a detached element with no attributes.
    pub fn create_element(&mut self, tag_name: &str) -> NodeId {
        self.alloc(NodeType::Element(ElementData::new(tag_name)))
    }

    /// Allocates a detached element carrying `attributes` in the given order.
    /// A repeated name keeps its last value.
    pub fn create_element_with_attributes<'a>(
        &mut self,
        tag_name: &str,
        attributes: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) -> NodeId {
        let mut data = ElementData::new(tag_name);
        for (name, value) in attributes {
            data.attrs.set(name, value);
        }
        self.alloc(NodeType::Element(data))
    }

    /// [§ 4.5 createTextNode()](https://dom.spec.whatwg.org/#dom-document-createtextnode)
    pub fn create_text(&mut self, data: impl Into<String>) -> NodeId {
        self.alloc(NodeType::Text(data.into()))
    }

    /// Unlink `child` from its current parent, if any.
    fn detach(&mut self, child: NodeId) {
        if let Some(parent) = self.parent(child) {
            self.remove_child(parent, child);
        }
    }

    /// [§ 4.2.2 Append](https://dom.spec.whatwg.org/#concept-node-append)
    ///
    /// "To append a node to a parent, pre-insert node into parent before null."
    ///
    /// Appends `child` as the last child of `parent`, moving it out of its
    /// previous parent first.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        self.detach(child);
        let prev_last_child = self.nodes[parent.0].children.last().copied();

        self.nodes[parent.0].children.push(child);
        self.nodes[child.0].parent = Some(parent);

        if let Some(prev_id) = prev_last_child {
            self.nodes[prev_id.0].next_sibling = Some(child);
            self.nodes[child.0].prev_sibling = Some(prev_id);
        }
    }

    /// [§ 4.2.2 Insert](https://dom.spec.whatwg.org/#concept-node-insert)
    ///
    /// Inserts `child` into `parent` immediately before `reference`. If
    /// `reference` is not a child of `parent` this behaves like append.
    pub fn insert_before(&mut self, parent: NodeId, child: NodeId, reference: NodeId) {
        self.detach(child);
        let Some(pos) = self.nodes[parent.0]
            .children
            .iter()
            .position(|&id| id == reference)
        else {
            self.append_child(parent, child);
            return;
        };

        let before = pos
            .checked_sub(1)
            .map(|p| self.nodes[parent.0].children[p]);
        self.nodes[parent.0].children.insert(pos, child);
        self.nodes[child.0].parent = Some(parent);
        self.nodes[child.0].prev_sibling = before;
        self.nodes[child.0].next_sibling = Some(reference);
        self.nodes[reference.0].prev_sibling = Some(child);
        if let Some(before_id) = before {
            self.nodes[before_id.0].next_sibling = Some(child);
        }
    }

    /// [§ 4.2.2 Remove](https://dom.spec.whatwg.org/#concept-node-remove)
    ///
    /// Removes `child` from `parent`. Does nothing if `child` is not a child
    /// of `parent`. The node stays allocated and can be re-inserted.
    pub fn remove_child(&mut self, parent: NodeId, child: NodeId) {
        let Some(pos) = self.nodes[parent.0]
            .children
            .iter()
            .position(|&id| id == child)
        else {
            return;
        };
        let _ = self.nodes[parent.0].children.remove(pos);

        let prev = self.nodes[child.0].prev_sibling.take();
        let next = self.nodes[child.0].next_sibling.take();
        if let Some(prev_id) = prev {
            self.nodes[prev_id.0].next_sibling = next;
        }
        if let Some(next_id) = next {
            self.nodes[next_id.0].prev_sibling = prev;
        }
        self.nodes[child.0].parent = None;
    }

    /// Get the parent of a node.
    #[must_use]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(|n| n.parent)
    }

    /// Get all children of a node.
    #[must_use]
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.get(id).map_or(&[], |n| n.children.as_slice())
    }

    /// Get the first child of a node.
    #[must_use]
    pub fn first_child(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(|n| n.children.first().copied())
    }

    /// Get the last child of a node.
    #[must_use]
    pub fn last_child(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(|n| n.children.last().copied())
    }

    /// Get the next sibling of a node.
    #[must_use]
    pub fn next_sibling(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(|n| n.next_sibling)
    }

    /// Get the previous sibling of a node.
    #[must_use]
    pub fn prev_sibling(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(|n| n.prev_sibling)
    }

    /// [§ 4.2.6 Descendant](https://dom.spec.whatwg.org/#concept-tree-descendant)
    ///
    /// Check if `descendant` is a descendant of `ancestor`.
    #[must_use]
    pub fn is_descendant_of(&self, descendant: NodeId, ancestor: NodeId) -> bool {
        self.ancestors(descendant).any(|id| id == ancestor)
    }

    /// Iterate over all ancestors of a node, from parent to root.
    #[must_use]
    pub fn ancestors(&self, id: NodeId) -> AncestorIterator<'_> {
        AncestorIterator {
            tree: self,
            current: self.parent(id),
        }
    }

    /// [§ 4.2 Tree order](https://dom.spec.whatwg.org/#concept-tree-order)
    ///
    /// "Tree order is preorder, depth-first traversal of a tree."
    ///
    /// Iterate the descendants of `id` (excluding `id` itself) in tree order.
    #[must_use]
    pub fn descendants(&self, id: NodeId) -> DescendantIterator<'_> {
        let mut stack: Vec<NodeId> = self.children(id).to_vec();
        stack.reverse();
        DescendantIterator { tree: self, stack }
    }

    /// Get element data if this node is an element.
    #[must_use]
    pub fn as_element(&self, id: NodeId) -> Option<&ElementData> {
        self.get(id).and_then(|n| match &n.node_type {
            NodeType::Element(data) => Some(data),
            _ => None,
        })
    }

    /// Get mutable element data if this node is an element.
    pub fn as_element_mut(&mut self, id: NodeId) -> Option<&mut ElementData> {
        self.get_mut(id).and_then(|n| match &mut n.node_type {
            NodeType::Element(data) => Some(data),
            _ => None,
        })
    }

    /// Get text content if this node is a text node.
    #[must_use]
    pub fn as_text(&self, id: NodeId) -> Option<&str> {
        self.get(id).and_then(|n| match &n.node_type {
            NodeType::Text(s) => Some(s.as_str()),
            _ => None,
        })
    }

    /// [§ 4.4 textContent](https://dom.spec.whatwg.org/#dom-node-textcontent)
    ///
    /// "The descendant text content of a node is the concatenation of the
    /// data of all the Text node descendants of node, in tree order."
    #[must_use]
    pub fn text_content(&self, id: NodeId) -> String {
        if let Some(text) = self.as_text(id) {
            return text.to_string();
        }
        self.descendants(id)
            .filter_map(|d| self.as_text(d))
            .collect()
    }

    /// Read an attribute from an element. `None` for non-elements.
    #[must_use]
    pub fn get_attribute(&self, id: NodeId, name: &str) -> Option<&str> {
        self.as_element(id).and_then(|e| e.attrs.get(name))
    }

    /// [§ 4.9 setAttribute()](https://dom.spec.whatwg.org/#dom-element-setattribute)
    ///
    /// # Errors
    ///
    /// [`DomError::NodeNotFound`] if `id` was never allocated in this tree,
    /// [`DomError::NotAnElement`] if it names a text, comment or other
    /// non-element node.
    pub fn set_attribute(&mut self, id: NodeId, name: &str, value: &str) -> Result<(), DomError> {
        let node = self.get_mut(id).ok_or(DomError::NodeNotFound(id))?;
        match &mut node.node_type {
            NodeType::Element(data) => {
                data.attrs.set(name, value);
                Ok(())
            }
            _ => Err(DomError::NotAnElement(id)),
        }
    }

    /// [§ 4.2.4 getElementById()](https://dom.spec.whatwg.org/#dom-nonelementparentnode-getelementbyid)
    ///
    /// "The getElementById(elementId) method steps are to return the first
    /// element, in tree order, within this's descendants, whose ID is
    /// elementId; otherwise, if there is no such element, null."
    #[must_use]
    pub fn get_element_by_id(&self, element_id: &str) -> Option<NodeId> {
        self.descendants(NodeId::ROOT)
            .find(|&id| self.as_element(id).and_then(ElementData::id) == Some(element_id))
    }

    /// Collect every `id` attribute value present in the attached tree.
    #[must_use]
    pub fn element_ids(&self) -> HashSet<&str> {
        self.descendants(NodeId::ROOT)
            .filter_map(|id| self.as_element(id).and_then(ElementData::id))
            .collect()
    }

    /// [§ 4.4 Clone a node](https://dom.spec.whatwg.org/#concept-node-clone)
    ///
    /// Deep-clones `id` and its descendants into new detached nodes and
    /// returns the id of the copy. Returns `None` if `id` does not exist.
    pub fn clone_subtree(&mut self, id: NodeId) -> Option<NodeId> {
        let node_type = self.get(id)?.node_type.clone();
        let copy = self.alloc(node_type);
        let children = self.children(id).to_vec();
        for child in children {
            if let Some(child_copy) = self.clone_subtree(child) {
                self.append_child(copy, child_copy);
            }
        }
        Some(copy)
    }

    /// Remove the attribute `name` from `id` and from every element below it.
    pub fn remove_attribute_in_subtree(&mut self, id: NodeId, name: &str) {
        let nodes: Vec<NodeId> = std::iter::once(id).chain(self.descendants(id)).collect();
        for node in nodes {
            if let Some(element) = self.as_element_mut(node) {
                element.attrs.retain(|attr, _| attr != name);
            }
        }
    }

    /// [§ 3.1.1 The document element](https://html.spec.whatwg.org/multipage/dom.html#the-html-element-2)
    ///
    /// "The document element of a document is the element whose parent is that
    /// document, if it exists; otherwise null."
    #[must_use]
    pub fn document_element(&self) -> Option<NodeId> {
        self.children(NodeId::ROOT)
            .iter()
            .find(|&&id| self.as_element(id).is_some())
            .copied()
    }

    /// [§ 3.1.3 The body element](https://html.spec.whatwg.org/multipage/dom.html#the-body-element-2)
    ///
    /// First `body` element in tree order. Fragments without one return `None`.
    #[must_use]
    pub fn body(&self) -> Option<NodeId> {
        self.descendants(NodeId::ROOT)
            .find(|&id| self.as_element(id).is_some_and(|e| e.tag_name == "body"))
    }
}

impl Default for DomTree {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator over ancestors of a node.
pub struct AncestorIterator<'a> {
    tree: &'a DomTree,
    current: Option<NodeId>,
}

impl Iterator for AncestorIterator<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.current?;
        self.current = self.tree.parent(id);
        Some(id)
    }
}

/// Pre-order iterator over the descendants of a node.
pub struct DescendantIterator<'a> {
    tree: &'a DomTree,
    stack: Vec<NodeId>,
}

impl Iterator for DescendantIterator<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.stack.pop()?;
        self.stack
            .extend(self.tree.children(id).iter().rev().copied());
        Some(id)
    }
}
