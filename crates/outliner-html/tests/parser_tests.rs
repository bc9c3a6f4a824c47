//! Integration tests for the tree builder.

use outliner_dom::{DomTree, NodeId, NodeType};
use outliner_html::{HTMLParser, HTMLTokenizer, ParseStage, dump_tree, parse_document};

/// Helper to parse HTML and return the DOM tree
fn parse(html: &str) -> DomTree {
    let mut tokenizer = HTMLTokenizer::new(html.to_string());
    tokenizer.run();
    let parser = HTMLParser::new(tokenizer.into_tokens());
    parser.run()
}

/// Helper to list the tag names of an element's element children
fn child_tags(tree: &DomTree, id: NodeId) -> Vec<String> {
    tree.children(id)
        .iter()
        .filter_map(|&c| tree.as_element(c).map(|e| e.tag_name.clone()))
        .collect()
}

#[test]
fn test_no_implied_document_structure() {
    let tree = parse("<h1>Title</h1>");
    assert_eq!(child_tags(&tree, NodeId::ROOT), vec!["h1"]);
    assert!(tree.body().is_none());
}

#[test]
fn test_full_document_structure() {
    let tree = parse("<!DOCTYPE html><html><head></head><body><p>Hi</p></body></html>");
    let children = tree.children(NodeId::ROOT);
    assert!(matches!(
        tree.get(children[0]).map(|n| &n.node_type),
        Some(NodeType::Doctype(name)) if name == "html"
    ));
    let html = tree.document_element().expect("document element");
    assert_eq!(child_tags(&tree, html), vec!["head", "body"]);
    let body = tree.body().expect("body");
    assert_eq!(tree.text_content(body), "Hi");
}

#[test]
fn test_text_is_merged_into_one_node() {
    let tree = parse("<p>Hello world</p>");
    let p = tree.document_element().expect("p");
    assert_eq!(tree.children(p).len(), 1);
    assert_eq!(tree.as_text(tree.children(p)[0]), Some("Hello world"));
}

#[test]
fn test_headings_close_open_paragraph() {
    let tree = parse("<div><p>intro<h2>Next</h2></div>");
    let div = tree.document_element().expect("div");
    assert_eq!(child_tags(&tree, div), vec!["p", "h2"]);
}

#[test]
fn test_nested_heading_is_closed() {
    let doc = parse_document("<h1>One<h2>Two</h2>");
    assert_eq!(child_tags(&doc.tree, NodeId::ROOT), vec!["h1", "h2"]);
    assert!(
        doc.issues
            .iter()
            .any(|i| i.stage == ParseStage::TreeBuilder && i.message == "nested-heading")
    );
}

#[test]
fn test_any_heading_end_tag_closes_heading() {
    let tree = parse("<h2>Mismatched</h3><p>after</p>");
    assert_eq!(child_tags(&tree, NodeId::ROOT), vec!["h2", "p"]);
}

#[test]
fn test_list_items_auto_close() {
    let tree = parse("<ul><li>one<li>two</ul>");
    let ul = tree.document_element().expect("ul");
    assert_eq!(child_tags(&tree, ul), vec!["li", "li"]);
}

#[test]
fn test_void_elements_take_no_children() {
    let tree = parse("<p>a<br>b<img src=x.png>c</p>");
    let p = tree.document_element().expect("p");
    assert_eq!(tree.children(p).len(), 5);
    let br = tree.children(p)[1];
    assert!(tree.children(br).is_empty());
}

#[test]
fn test_stray_end_tag_is_ignored() {
    let doc = parse_document("<div>x</span></div>");
    assert_eq!(child_tags(&doc.tree, NodeId::ROOT), vec!["div"]);
    assert!(doc.issues.iter().any(|i| i.message == "unexpected-end-tag"));
}

#[test]
fn test_unclosed_elements_at_eof() {
    let tree = parse("<section><h1>Open");
    let section = tree.document_element().expect("section");
    let h1 = tree.children(section)[0];
    assert_eq!(tree.text_content(h1), "Open");
}

#[test]
fn test_comment_is_kept_in_place() {
    let tree = parse("<div><!-- x --><h1>T</h1></div>");
    let div = tree.document_element().expect("div");
    assert!(matches!(
        tree.get(tree.children(div)[0]).map(|n| &n.node_type),
        Some(NodeType::Comment(data)) if data == " x "
    ));
}

#[test]
fn test_attributes_keep_source_order() {
    let tree = parse(r#"<h1 class="a" id="b" data-x="c">T</h1>"#);
    let h1 = tree.document_element().expect("h1");
    let names: Vec<&str> = tree
        .as_element(h1)
        .expect("element")
        .attrs
        .iter()
        .map(|(k, _)| k)
        .collect();
    assert_eq!(names, vec!["class", "id", "data-x"]);
}

#[test]
fn test_dump_tree_shows_structure() {
    let tree = parse(r#"<div id="doc"><h1>A b</h1></div>"#);
    let dump = dump_tree(&tree, NodeId::ROOT);
    assert_eq!(
        dump,
        "Document\n  <div id=\"doc\">\n    <h1>\n      \"A\u{00B7}b\"\n"
    );
}
