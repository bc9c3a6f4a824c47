//! [§ 13.3 Serializing HTML fragments](https://html.spec.whatwg.org/multipage/parsing.html#serialising-html-fragments)
//!
//! Turns a [`DomTree`] back into markup. Attribute order is preserved, so
//! parsing a document and serializing it again gives back equivalent markup.

use outliner_dom::{DomTree, NodeId, NodeType};

use crate::elements::{is_raw_text_element, is_serialized_as_void};

/// Serialize a whole document (every child of the Document node).
#[must_use]
pub fn serialize_document(tree: &DomTree) -> String {
    inner_html(tree, NodeId::ROOT)
}

/// [§ 13.3](https://html.spec.whatwg.org/multipage/parsing.html#html-fragment-serialisation-algorithm)
///
/// "The algorithm takes as input a DOM Element, Document, or DocumentFragment
/// referred to as the node" and serializes its children.
#[must_use]
pub fn inner_html(tree: &DomTree, id: NodeId) -> String {
    let mut out = String::new();
    for &child in tree.children(id) {
        serialize_node(tree, child, &mut out);
    }
    out
}

/// Serialize the node itself along with its descendants.
#[must_use]
pub fn outer_html(tree: &DomTree, id: NodeId) -> String {
    let mut out = String::new();
    serialize_node(tree, id, &mut out);
    out
}

fn serialize_node(tree: &DomTree, id: NodeId, out: &mut String) {
    let Some(node) = tree.get(id) else {
        return;
    };
    match &node.node_type {
        NodeType::Document => {
            for &child in tree.children(id) {
                serialize_node(tree, child, out);
            }
        }
        // "If current node is an Element ... Append a U+003C LESS-THAN SIGN
        // character (<), followed by tagname." For each attribute: a space,
        // the attribute's name, "=", a quote, the escaped value, a quote.
        NodeType::Element(data) => {
            out.push('<');
            out.push_str(&data.tag_name);
            for (name, value) in data.attrs.iter() {
                out.push(' ');
                out.push_str(name);
                out.push_str("=\"");
                escape_into(value, true, out);
                out.push('"');
            }
            out.push('>');

            // "If current node serializes as void, then continue on to the
            // next child node at this point."
            if is_serialized_as_void(&data.tag_name) {
                return;
            }
            for &child in tree.children(id) {
                serialize_node(tree, child, out);
            }
            out.push_str("</");
            out.push_str(&data.tag_name);
            out.push('>');
        }
        // "If the parent of current node is a style, script, xmp, iframe,
        // noembed, noframes, or plaintext element ... append the value of
        // current node's data IDL attribute literally. Otherwise, append the
        // value of current node's data IDL attribute, escaped as described below."
        NodeType::Text(data) => {
            let raw = tree
                .parent(id)
                .and_then(|p| tree.as_element(p))
                .is_some_and(|e| is_raw_text_element(&e.tag_name));
            if raw {
                out.push_str(data);
            } else {
                escape_into(data, false, out);
            }
        }
        NodeType::Comment(data) => {
            out.push_str("<!--");
            out.push_str(data);
            out.push_str("-->");
        }
        NodeType::Doctype(name) => {
            out.push_str("<!DOCTYPE ");
            out.push_str(name);
            out.push('>');
        }
    }
}

/// [§ 13.3 Escaping a string](https://html.spec.whatwg.org/multipage/parsing.html#escapingString)
///
/// 1. "Replace any occurrence of the "&" character by the string "&amp;"."
/// 2. "Replace any occurrences of the U+00A0 NO-BREAK SPACE character by the
///    string "&nbsp;"."
/// 3. "If the algorithm was invoked in the attribute mode, then replace any
///    occurrences of the """ character by the string "&quot;"."
/// 4. "If the algorithm was not invoked in the attribute mode, then replace
///    any occurrences of the "<" character by the string "&lt;", and any
///    occurrences of the ">" character by the string "&gt;"."
fn escape_into(text: &str, attribute_mode: bool, out: &mut String) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '\u{00A0}' => out.push_str("&nbsp;"),
            '"' if attribute_mode => out.push_str("&quot;"),
            '<' if !attribute_mode => out.push_str("&lt;"),
            '>' if !attribute_mode => out.push_str("&gt;"),
            c => out.push(c),
        }
    }
}

/// Escape text for use as element content.
#[must_use]
pub fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    escape_into(text, false, &mut out);
    out
}
