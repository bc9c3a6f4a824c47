//! Element categories shared by the tree builder and the serializer.

/// [§ 13.1.2 Elements](https://html.spec.whatwg.org/multipage/syntax.html#void-elements)
///
/// "Void elements: area, base, br, col, embed, hr, img, input, link, meta,
/// source, track, wbr"
const VOID_ELEMENTS: [&str; 13] = [
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

/// [§ 13.3 Serializing HTML fragments](https://html.spec.whatwg.org/multipage/parsing.html#serialising-html-fragments)
///
/// Legacy elements the serializer also writes without an end tag.
const LEGACY_VOID_ELEMENTS: [&str; 5] = ["basefont", "bgsound", "frame", "keygen", "param"];

/// Elements whose text children are serialized without escaping.
const RAW_TEXT_ELEMENTS: [&str; 7] = [
    "style", "script", "xmp", "iframe", "noembed", "noframes", "plaintext",
];

/// Start tags that close an open `p` element first
/// ([§ 13.2.6.4.7](https://html.spec.whatwg.org/multipage/parsing.html#parsing-main-inbody),
/// "If the stack of open elements has a p element in button scope, then close a p element.").
const CLOSES_P_ELEMENT: [&str; 37] = [
    "address", "article", "aside", "blockquote", "center", "details", "dialog", "dir", "div", "dl",
    "fieldset", "figcaption", "figure", "footer", "header", "hgroup", "main", "menu", "nav", "ol",
    "p", "search", "section", "summary", "ul", "h1", "h2", "h3", "h4", "h5", "h6", "pre",
    "listing", "form", "table", "hr", "plaintext",
];

/// [§ 13.2.4.2 Has an element in scope](https://html.spec.whatwg.org/multipage/parsing.html#has-an-element-in-scope)
///
/// The element types that bound "in scope" searches (plus `button` for
/// button scope).
const SCOPE_BOUNDARIES: [&str; 13] = [
    "applet", "caption", "html", "table", "td", "th", "marquee", "object", "template", "button",
    "svg", "math", "foreignobject",
];

/// Whether `tag` never has content or an end tag when parsing.
#[must_use]
pub fn is_void_element(tag: &str) -> bool {
    VOID_ELEMENTS.contains(&tag)
}

/// Whether `tag` is written without an end tag when serializing.
#[must_use]
pub fn is_serialized_as_void(tag: &str) -> bool {
    is_void_element(tag) || LEGACY_VOID_ELEMENTS.contains(&tag)
}

/// Whether text inside `tag` is emitted literally by the serializer.
#[must_use]
pub fn is_raw_text_element(tag: &str) -> bool {
    RAW_TEXT_ELEMENTS.contains(&tag)
}

/// `h1` through `h6`.
#[must_use]
pub fn is_heading_element(tag: &str) -> bool {
    matches!(tag, "h1" | "h2" | "h3" | "h4" | "h5" | "h6")
}

pub(crate) fn closes_p_element(tag: &str) -> bool {
    CLOSES_P_ELEMENT.contains(&tag)
}

pub(crate) fn is_scope_boundary(tag: &str) -> bool {
    SCOPE_BOUNDARIES.contains(&tag)
}
