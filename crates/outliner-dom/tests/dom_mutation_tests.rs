//! Tests for DOM tree mutation methods: `append_child`, `remove_child`,
//! `insert_before`, `set_attribute`.

use outliner_dom::{DomError, DomTree, NodeId};

/// Helper to create an element attached to `parent`.
fn append_element(tree: &mut DomTree, parent: NodeId, tag: &str) -> NodeId {
    let id = tree.create_element(tag);
    tree.append_child(parent, id);
    id
}

/// Check that the sibling and parent links of `parent`'s children agree
/// with its child list.
fn assert_links_consistent(tree: &DomTree, parent: NodeId) {
    let children = tree.children(parent);
    for (i, &child) in children.iter().enumerate() {
        assert_eq!(tree.parent(child), Some(parent), "parent of {child}");
        let prev = i.checked_sub(1).map(|p| children[p]);
        assert_eq!(tree.prev_sibling(child), prev, "previous sibling of {child}");
        assert_eq!(tree.next_sibling(child), children.get(i + 1).copied(), "next sibling of {child}");
    }
    assert_eq!(tree.first_child(parent), children.first().copied());
    assert_eq!(tree.last_child(parent), children.last().copied());
}

// ========== remove_child ==========

#[test]
fn test_removing_only_item_detaches_it() {
    let mut tree = DomTree::new();
    let list = append_element(&mut tree, NodeId::ROOT, "ol");
    let item = append_element(&mut tree, list, "li");

    tree.remove_child(list, item);

    assert!(tree.children(list).is_empty());
    assert_eq!(tree.first_child(list), None);
    assert!(tree.ancestors(item).next().is_none());
    assert!([tree.prev_sibling(item), tree.next_sibling(item)].iter().all(Option::is_none));
}

#[test]
fn test_removing_middle_item_relinks_neighbours() {
    let mut tree = DomTree::new();
    let list = append_element(&mut tree, NodeId::ROOT, "ul");
    let items: Vec<NodeId> = (0..3).map(|_| append_element(&mut tree, list, "li")).collect();

    tree.remove_child(list, items[1]);

    assert_eq!(tree.children(list).to_vec(), vec![items[0], items[2]]);
    assert_links_consistent(&tree, list);
}

#[test]
fn test_remove_child_of_other_parent_is_noop() {
    let mut tree = DomTree::new();
    let left = append_element(&mut tree, NodeId::ROOT, "div");
    let right = append_element(&mut tree, NodeId::ROOT, "div");
    let child = append_element(&mut tree, left, "p");

    tree.remove_child(right, child);

    assert_eq!(tree.parent(child), Some(left));
    assert_eq!(tree.children(left), &[child]);
}

// ========== insert_before ==========

#[test]
fn test_insert_title_before_existing_list() {
    let mut tree = DomTree::new();
    let nav = append_element(&mut tree, NodeId::ROOT, "nav");
    let list = append_element(&mut tree, nav, "ol");

    let title = tree.create_element("h1");
    tree.insert_before(nav, title, list);

    assert_eq!(tree.children(nav).to_vec(), vec![title, list]);
    assert_links_consistent(&tree, nav);
}

#[test]
fn test_insert_between_two_items() {
    let mut tree = DomTree::new();
    let list = append_element(&mut tree, NodeId::ROOT, "ol");
    let first = append_element(&mut tree, list, "li");
    let last = append_element(&mut tree, list, "li");

    let middle = tree.create_element("li");
    tree.insert_before(list, middle, last);

    assert_eq!(tree.children(list).to_vec(), vec![first, middle, last]);
    assert_links_consistent(&tree, list);
}

#[test]
fn test_insert_before_unknown_reference_appends() {
    let mut tree = DomTree::new();
    let parent = append_element(&mut tree, NodeId::ROOT, "div");
    let a = append_element(&mut tree, parent, "a");
    let stranger = tree.create_element("x");

    let b = tree.create_element("b");
    tree.insert_before(parent, b, stranger);

    assert_eq!(tree.children(parent), &[a, b]);
}

// ========== append_child ==========

#[test]
fn test_append_child_moves_between_parents() {
    let mut tree = DomTree::new();
    let from = append_element(&mut tree, NodeId::ROOT, "div");
    let to = append_element(&mut tree, NodeId::ROOT, "span");
    let a = append_element(&mut tree, from, "a");
    let b = append_element(&mut tree, from, "b");

    tree.append_child(to, a);

    assert_eq!(tree.children(from).to_vec(), vec![b]);
    assert_eq!(tree.children(to).to_vec(), vec![a]);
    assert_links_consistent(&tree, from);
    assert_links_consistent(&tree, to);
}

// ========== set_attribute ==========

#[test]
fn test_set_attribute_on_element() {
    let mut tree = DomTree::new();
    let h1 = append_element(&mut tree, NodeId::ROOT, "h1");

    assert_eq!(tree.set_attribute(h1, "id", "head0"), Ok(()));
    assert_eq!(tree.get_attribute(h1, "id"), Some("head0"));

    // Overwrites in place
    assert_eq!(tree.set_attribute(h1, "id", "intro"), Ok(()));
    assert_eq!(tree.get_attribute(h1, "id"), Some("intro"));
    assert_eq!(tree.as_element(h1).map(|e| e.attrs.len()), Some(1));
}

#[test]
fn test_set_attribute_on_text_fails() {
    let mut tree = DomTree::new();
    let text = tree.create_text("hello");
    tree.append_child(NodeId::ROOT, text);

    assert_eq!(
        tree.set_attribute(text, "id", "x"),
        Err(DomError::NotAnElement(text))
    );
}

#[test]
fn test_set_attribute_on_missing_node_fails() {
    let mut tree = DomTree::new();
    let bogus = NodeId(999);

    assert_eq!(
        tree.set_attribute(bogus, "id", "x"),
        Err(DomError::NodeNotFound(bogus))
    );
}

#[test]
fn test_create_element_with_attributes_keeps_order() {
    let mut tree = DomTree::new();
    let link = tree.create_element_with_attributes("a", [("href", "#head0"), ("class", "toc")]);

    let attrs: Vec<(&str, &str)> = tree
        .as_element(link)
        .map(|e| e.attrs.iter().collect())
        .unwrap_or_default();
    assert_eq!(attrs, vec![("href", "#head0"), ("class", "toc")]);
    assert_eq!(tree.parent(link), None);
}

// ========== remove_attribute_in_subtree ==========

#[test]
fn test_remove_attribute_in_subtree_clears_copies() {
    let mut tree = DomTree::new();
    let heading = append_element(&mut tree, NodeId::ROOT, "h2");
    let span = append_element(&mut tree, heading, "span");
    assert_eq!(tree.set_attribute(heading, "id", "intro"), Ok(()));
    assert_eq!(tree.set_attribute(span, "id", "term"), Ok(()));
    assert_eq!(tree.set_attribute(span, "class", "k"), Ok(()));

    let copy = tree.clone_subtree(heading).expect("heading exists");
    tree.remove_attribute_in_subtree(copy, "id");

    assert_eq!(tree.get_attribute(copy, "id"), None);
    let span_copy = tree.children(copy)[0];
    assert_eq!(tree.get_attribute(span_copy, "id"), None);
    assert_eq!(tree.get_attribute(span_copy, "class"), Some("k"));
    // The original keeps its ids.
    assert_eq!(tree.get_element_by_id("term"), Some(span));
}
