//! Integration tests for the outline builder.

use outliner_common::warning::emitted_warnings;
use outliner_core::{
    HeadingLevel, HeadingNode, NestingPolicy, OutlineBuilder, OutlineError, OutlineTree,
};
use outliner_dom::NodeId;

/// Helper to make one heading per rank, labelled A, B, C, ...
fn headings(ranks: &[u8]) -> Vec<HeadingNode> {
    ranks
        .iter()
        .enumerate()
        .map(|(i, &rank)| {
            let level = HeadingLevel::new(rank).expect("rank in 1..=6");
            let label = char::from(b'A' + u8::try_from(i).expect("small index"));
            HeadingNode::new(NodeId(i + 1), level, None, label.to_string())
        })
        .collect()
}

fn build(ranks: &[u8]) -> OutlineTree {
    OutlineBuilder::new(NestingPolicy::Strict)
        .build(&headings(ranks))
        .expect("well-nested headings")
}

/// Helper to render a tree as `A(B,C),D(E)` for compact assertions
fn shape(tree: &OutlineTree) -> String {
    fn walk(entries: &[outliner_core::OutlineEntry]) -> String {
        entries
            .iter()
            .map(|e| {
                if e.children.is_empty() {
                    e.text.clone()
                } else {
                    format!("{}({})", e.text, walk(&e.children))
                }
            })
            .collect::<Vec<_>>()
            .join(",")
    }
    walk(&tree.entries)
}

#[test]
fn test_empty_input_gives_empty_tree() {
    let tree = build(&[]);
    assert!(tree.is_empty());
    assert_eq!(tree.len(), 0);
    assert_eq!(tree.depth(), 0);
}

#[test]
fn test_single_heading() {
    let tree = build(&[3]);
    assert_eq!(tree.entries.len(), 1);
    assert!(tree.entries[0].children.is_empty());
    assert_eq!(tree.entries[0].level, HeadingLevel::new(3).expect("rank"));
}

#[test]
fn test_siblings_and_return_to_top() {
    // [1,2,2,1,3]: A (children B, C), D (children E)
    assert_eq!(shape(&build(&[1, 2, 2, 1, 3])), "A(B,C),D(E)");
}

#[test]
fn test_ascend_exactly_one_level() {
    // [1,2,3,2]: A > B > C, then D is B's sibling under A
    assert_eq!(shape(&build(&[1, 2, 3, 2])), "A(B(C),D)");
}

#[test]
fn test_levels_are_relative_to_first_heading() {
    assert_eq!(shape(&build(&[2, 3, 3, 2])), shape(&build(&[1, 2, 2, 1])));
    assert_eq!(shape(&build(&[4, 5, 6, 4])), "A(B(C)),D");
}

#[test]
fn test_deep_jump_nests_once() {
    assert_eq!(shape(&build(&[1, 4, 4])), "A(B,C)");
}

#[test]
fn test_anchor_uses_identifier_or_generated_id() {
    let mut input = headings(&[1, 2, 2]);
    input[1].identifier = Some("custom-id".to_string());
    let tree = OutlineBuilder::default().build(&input).expect("build");
    let anchors: Vec<&str> = tree.flatten().iter().map(|e| e.anchor.as_str()).collect();
    assert_eq!(anchors, vec!["#head0", "#custom-id", "#head2"]);
    assert_eq!(tree.entries[0].children[0].identifier(), "custom-id");
}

#[test]
fn test_custom_id_prefix() {
    let tree = OutlineBuilder::new(NestingPolicy::Strict)
        .with_id_prefix("sec-")
        .build(&headings(&[1, 1]))
        .expect("build");
    assert_eq!(tree.entries[1].anchor, "#sec-1");
}

#[test]
fn test_strict_rejects_climbing_past_the_top() {
    let result = OutlineBuilder::new(NestingPolicy::Strict).build(&headings(&[1, 3, 1]));
    assert_eq!(
        result,
        Err(OutlineError::MalformedNesting {
            heading: 2,
            from: HeadingLevel::new(3).expect("rank"),
            to: HeadingLevel::new(1).expect("rank"),
            depth: 1,
        })
    );
}

#[test]
fn test_strict_rejects_opening_below_later_headings() {
    let err = OutlineBuilder::default()
        .build(&headings(&[2, 1]))
        .expect_err("h1 after opening h2 climbs past the top");
    assert_eq!(
        err.to_string(),
        "heading 1 (h1) follows h2, but only 0 nesting levels are open"
    );
}

#[test]
fn test_clamp_places_heading_at_top_level() {
    let tree = OutlineBuilder::new(NestingPolicy::Clamp)
        .build(&headings(&[1, 3, 1, 2]))
        .expect("clamp never fails");
    assert_eq!(shape(&tree), "A(B),C(D)");
    assert!(
        emitted_warnings()
            .iter()
            .any(|w| w.contains("heading 2 (h1) follows h3") && w.contains("top level"))
    );
}

#[test]
fn test_iter_reports_depths_in_document_order() {
    let tree = build(&[1, 2, 3, 2, 1]);
    let walked: Vec<(usize, &str)> = tree.iter().map(|(d, e)| (d, e.text.as_str())).collect();
    assert_eq!(
        walked,
        vec![(0, "A"), (1, "B"), (2, "C"), (1, "D"), (0, "E")]
    );
    assert_eq!(tree.depth(), 3);
    assert_eq!(tree.len(), 5);
}

#[test]
fn test_entries_keep_their_source_nodes() {
    let tree = build(&[1, 2]);
    let sources: Vec<NodeId> = tree.flatten().iter().map(|e| e.source).collect();
    assert_eq!(sources, vec![NodeId(1), NodeId(2)]);
}

#[test]
fn test_json_shape() {
    let tree = build(&[1, 2]);
    let json = serde_json::to_value(&tree).expect("serialize");
    assert_eq!(
        json,
        serde_json::json!([
            {
                "label": "A",
                "text": "A",
                "anchor": "#head0",
                "level": 1,
                "children": [
                    { "label": "B", "text": "B", "anchor": "#head1", "level": 2 }
                ]
            }
        ])
    );
}

#[test]
fn test_policy_parses_from_strings() {
    assert_eq!("clamp".parse::<NestingPolicy>(), Ok(NestingPolicy::Clamp));
    assert_eq!("Strict".parse::<NestingPolicy>(), Ok(NestingPolicy::Strict));
    assert!("loose".parse::<NestingPolicy>().is_err());
    assert_eq!(NestingPolicy::default().to_string(), "strict");
}
