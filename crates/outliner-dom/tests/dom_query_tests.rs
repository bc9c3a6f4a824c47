//! Tests for traversal and lookup: tree order, ids, text content, cloning.

use outliner_dom::{AttributeList, DomTree, NodeId, NodeType};

/// Builds `<div id="doc"><h1>Title <em>one</em></h1><p>body</p></div>`.
fn sample_tree() -> (DomTree, NodeId, NodeId) {
    let mut tree = DomTree::new();
    let div = tree.create_element("div");
    tree.append_child(NodeId::ROOT, div);
    tree.set_attribute(div, "id", "doc").unwrap();

    let h1 = tree.create_element("h1");
    tree.append_child(div, h1);
    let title = tree.create_text("Title ");
    tree.append_child(h1, title);
    let em = tree.create_element("em");
    tree.append_child(h1, em);
    let one = tree.create_text("one");
    tree.append_child(em, one);

    let p = tree.create_element("p");
    tree.append_child(div, p);
    let body = tree.create_text("body");
    tree.append_child(p, body);

    (tree, div, h1)
}

fn tag_names(tree: &DomTree, ids: impl Iterator<Item = NodeId>) -> Vec<String> {
    ids.filter_map(|id| tree.as_element(id).map(|e| e.tag_name.clone()))
        .collect()
}

#[test]
fn test_descendants_are_in_tree_order() {
    let (tree, div, _) = sample_tree();
    assert_eq!(tag_names(&tree, tree.descendants(div)), ["h1", "em", "p"]);
}

#[test]
fn test_get_element_by_id() {
    let (tree, div, _) = sample_tree();
    assert_eq!(tree.get_element_by_id("doc"), Some(div));
    assert_eq!(tree.get_element_by_id("missing"), None);
}

#[test]
fn test_get_element_by_id_returns_first_in_tree_order() {
    let mut tree = DomTree::new();
    let first = tree.create_element("section");
    let second = tree.create_element("section");
    tree.append_child(NodeId::ROOT, first);
    tree.append_child(NodeId::ROOT, second);
    tree.set_attribute(second, "id", "dup").unwrap();
    tree.set_attribute(first, "id", "dup").unwrap();

    assert_eq!(tree.get_element_by_id("dup"), Some(first));
}

#[test]
fn test_text_content_concatenates_descendants() {
    let (tree, _, h1) = sample_tree();
    assert_eq!(tree.text_content(h1), "Title one");
}

#[test]
fn test_clone_subtree_is_deep_and_detached() {
    let (mut tree, div, h1) = sample_tree();
    let copy = tree.clone_subtree(h1).unwrap();

    assert_ne!(copy, h1);
    assert_eq!(tree.parent(copy), None);
    assert_eq!(tree.text_content(copy), "Title one");
    // The source is untouched
    assert_eq!(tree.children(div).len(), 2);
    // Mutating the copy leaves the original alone
    tree.set_attribute(copy, "class", "copy").unwrap();
    assert_eq!(tree.get_attribute(h1, "class"), None);
}

#[test]
fn test_ancestors_and_descendant_check() {
    let (tree, div, h1) = sample_tree();
    let ancestors: Vec<_> = tree.ancestors(h1).collect();
    assert_eq!(ancestors, vec![div, NodeId::ROOT]);
    assert!(tree.is_descendant_of(h1, div));
    assert!(!tree.is_descendant_of(div, h1));
}

#[test]
fn test_attribute_list_keeps_insertion_order() {
    let mut attrs = AttributeList::new();
    attrs.set("zeta", "1");
    attrs.set("alpha", "2");
    attrs.set("zeta", "3");
    assert!(!attrs.insert_if_absent("alpha", "ignored"));

    let pairs: Vec<_> = attrs.iter().collect();
    assert_eq!(pairs, vec![("zeta", "3"), ("alpha", "2")]);
    assert_eq!(attrs.remove("zeta"), Some("3".to_string()));
    assert_eq!(attrs.len(), 1);
}

#[test]
fn test_classes_split_on_whitespace() {
    let mut tree = DomTree::new();
    let div = tree.create_element("div");
    tree.set_attribute(div, "class", "toc  wide\tdark").unwrap();
    let Some(NodeType::Element(data)) = tree.get(div).map(|n| &n.node_type) else {
        panic!("Expected Element");
    };
    let classes = data.classes();
    assert_eq!(classes.len(), 3);
    assert!(classes.contains("wide"));
}
