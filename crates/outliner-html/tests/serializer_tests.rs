//! Integration tests for the serializer.

use outliner_dom::NodeId;
use outliner_html::{escape_text, inner_html, outer_html, parse_document, serialize_document};

fn roundtrip(html: &str) -> String {
    serialize_document(&parse_document(html).tree)
}

#[test]
fn test_well_formed_markup_is_preserved() {
    let html = r#"<!DOCTYPE html><html><body><div id="doc"><h1 class="t">Hello</h1><!-- c --><p>a<br>b</p></div></body></html>"#;
    assert_eq!(roundtrip(html), html);
}

#[test]
fn test_implied_end_tags_are_written() {
    assert_eq!(
        roundtrip("<ul><li>one<li>two</ul>"),
        "<ul><li>one</li><li>two</li></ul>"
    );
}

#[test]
fn test_text_is_escaped() {
    assert_eq!(
        roundtrip("<p>a &lt; b &amp;&amp; c &gt; d&nbsp;e</p>"),
        "<p>a &lt; b &amp;&amp; c &gt; d&nbsp;e</p>"
    );
}

#[test]
fn test_named_references_come_back_as_characters() {
    let html = r#"<h1 title="caf&eacute;">caf&eacute; &notin; &Aring;</h1>"#;
    assert_eq!(
        roundtrip(html),
        "<h1 title=\"caf\u{00E9}\">caf\u{00E9} \u{2209} \u{00C5}</h1>"
    );
}

#[test]
fn test_attribute_values_are_escaped() {
    assert_eq!(
        roundtrip(r#"<a title='say "hi" & <go>'>x</a>"#),
        r#"<a title="say &quot;hi&quot; &amp; <go>">x</a>"#
    );
}

#[test]
fn test_raw_text_is_not_escaped() {
    let html = "<style>h1 > a { content: \"&\" }</style>";
    assert_eq!(roundtrip(html), html);
}

#[test]
fn test_inner_and_outer_html() {
    let doc = parse_document(r#"<div id="doc"><h2>Two</h2></div>"#);
    let div = doc.tree.get_element_by_id("doc").expect("div");
    assert_eq!(inner_html(&doc.tree, div), "<h2>Two</h2>");
    assert_eq!(outer_html(&doc.tree, div), r#"<div id="doc"><h2>Two</h2></div>"#);
    assert_eq!(inner_html(&doc.tree, NodeId::ROOT), outer_html(&doc.tree, NodeId::ROOT));
}

#[test]
fn test_escape_text() {
    assert_eq!(escape_text("<a & b>"), "&lt;a &amp; b&gt;");
    assert_eq!(escape_text("\"quoted\""), "\"quoted\"");
}
