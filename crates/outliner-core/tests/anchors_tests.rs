//! Integration tests for anchor planning and write-back.

use outliner_common::warning::emitted_warnings;
use outliner_core::{AnchorPlan, HeadingLevel, HeadingNode, SearchStrategy, collect_headings};
use outliner_dom::{DomError, NodeId};
use outliner_html::parse_document;

fn heading(node: usize, identifier: Option<&str>) -> HeadingNode {
    let level = HeadingLevel::new(2).expect("rank");
    HeadingNode::new(NodeId(node), level, identifier.map(str::to_string), "T")
}

#[test]
fn test_missing_ids_use_position_among_all_headings() {
    let mut headings = vec![
        heading(1, None),
        heading(2, Some("custom-id")),
        heading(3, None),
    ];
    let plan = AnchorPlan::assign(&mut headings, "head");
    let assigned: Vec<(usize, &str)> = plan
        .assignments()
        .iter()
        .map(|a| (a.index, a.identifier.as_str()))
        .collect();
    assert_eq!(assigned, vec![(0, "head0"), (2, "head2")]);
    assert_eq!(headings[1].identifier.as_deref(), Some("custom-id"));
    assert_eq!(headings[2].identifier.as_deref(), Some("head2"));
}

#[test]
fn test_nothing_to_assign_when_every_heading_has_an_id() {
    let mut headings = vec![heading(1, Some("a")), heading(2, Some("b"))];
    let plan = AnchorPlan::assign(&mut headings, "head");
    assert!(plan.is_empty());
}

#[test]
fn test_write_back_sets_ids_on_the_tree() {
    let mut doc = parse_document(r#"<div id="doc"><h1>One</h1><h2 id="two">Two</h2></div>"#);
    let source = doc.tree.get_element_by_id("doc").expect("source");
    let mut headings = collect_headings(&doc.tree, source, SearchStrategy::Children, None);
    let plan = AnchorPlan::assign(&mut headings, "head");
    assert!(plan.write_back(&mut doc.tree).is_empty());
    assert_eq!(doc.tree.get_attribute(headings[0].node, "id"), Some("head0"));
    assert_eq!(doc.tree.get_attribute(headings[1].node, "id"), Some("two"));
}

#[test]
fn test_assignment_is_idempotent() {
    let mut doc = parse_document(r#"<div id="doc"><h1>A</h1><h2>B</h2><h2 id="c">C</h2></div>"#);
    let source = doc.tree.get_element_by_id("doc").expect("source");

    let mut first = collect_headings(&doc.tree, source, SearchStrategy::Children, None);
    let plan = AnchorPlan::assign(&mut first, "head");
    assert_eq!(plan.assignments().len(), 2);
    let _ = plan.write_back(&mut doc.tree);

    let mut second = collect_headings(&doc.tree, source, SearchStrategy::Children, None);
    let replan = AnchorPlan::assign(&mut second, "head");
    assert!(replan.is_empty());
    let ids = |hs: &[HeadingNode]| hs.iter().map(|h| h.identifier.clone()).collect::<Vec<_>>();
    assert_eq!(ids(&first), ids(&second));
}

#[test]
fn test_write_back_failures_are_reported_not_fatal() {
    let mut doc = parse_document(r#"<div id="doc"><h1>A</h1>text</div>"#);
    let source = doc.tree.get_element_by_id("doc").expect("source");
    let h1 = doc.tree.children(source)[0];
    let text = doc.tree.children(source)[1];
    let mut headings = vec![heading(9999, None), heading(text.0, None), heading(h1.0, None)];

    let plan = AnchorPlan::assign(&mut headings, "toc-");
    let failures = plan.write_back(&mut doc.tree);

    assert_eq!(failures.len(), 2);
    assert_eq!(failures[0].error, DomError::NodeNotFound(NodeId(9999)));
    assert_eq!(failures[1].error, DomError::NotAnElement(text));
    assert_eq!(doc.tree.get_attribute(h1, "id"), Some("toc-2"));
    assert!(
        emitted_warnings()
            .iter()
            .any(|w| w.contains("could not set id \"toc-0\""))
    );
}

#[test]
fn test_collisions_with_existing_ids_are_reported() {
    let doc = parse_document(r#"<p id="head1"></p><div id="doc"><h1>A</h1><h1>B</h1></div>"#);
    let source = doc.tree.get_element_by_id("doc").expect("source");
    let mut headings = collect_headings(&doc.tree, source, SearchStrategy::Children, None);
    let plan = AnchorPlan::assign(&mut headings, "head");
    assert_eq!(plan.report_collisions(&doc.tree), vec!["head1".to_string()]);
    assert!(
        emitted_warnings()
            .iter()
            .any(|w| w.contains("\"head1\" is already used"))
    );
}
