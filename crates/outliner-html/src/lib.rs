//! HTML tokenizer, tree builder and serializer for the outliner.
//!
//! # Scope
//!
//! This crate implements:
//! - **HTML Tokenizer** ([WHATWG § 13.2.5](https://html.spec.whatwg.org/multipage/parsing.html#tokenization))
//!   - Data, RCDATA, RAWTEXT, and tag states
//!   - DOCTYPE, comment, and character reference handling
//!   - Attribute parsing with duplicate removal
//!
//! - **Tree Builder** ([WHATWG § 13.2.6](https://html.spec.whatwg.org/multipage/parsing.html#tree-construction))
//!   - Stack of open elements with implied `p`, heading and list item closing
//!   - Void elements
//!
//! - **Serializer** ([WHATWG § 13.3](https://html.spec.whatwg.org/multipage/parsing.html#serialising-html-fragments))
//!
//! # Not Yet Implemented
//!
//! - Insertion modes (no `html`, `head` or `body` is synthesized)
//! - Script data states
//! - Table parsing modes
//! - Adoption agency algorithm

/// Element categories (void, raw text, headings).
pub mod elements;
/// Parse issues reported by the tokenizer and tree builder.
pub mod issue;
/// HTML parser and tree construction.
pub mod parser;
/// DOM to markup serialization.
pub mod serializer;
/// HTML tokenizer for converting input into tokens.
pub mod tokenizer;

use outliner_dom::DomTree;

pub use elements::is_heading_element;
pub use issue::{ParseIssue, ParseStage};
pub use parser::{HTMLParser, dump_tree, print_tree};
pub use serializer::{escape_text, inner_html, outer_html, serialize_document};
pub use tokenizer::{Attribute, HTMLTokenizer, Token};

/// A parsed document along with every parse issue met on the way.
#[derive(Debug, Clone)]
pub struct ParsedDocument {
    /// The DOM tree.
    pub tree: DomTree,
    /// Tokenizer issues first, then tree builder issues.
    pub issues: Vec<ParseIssue>,
}

/// Tokenize and build a tree from `html`.
///
/// Parsing never fails. Malformed markup is recovered from and reported in
/// [`ParsedDocument::issues`].
///
/// ```
/// use outliner_dom::NodeId;
/// use outliner_html::{parse_document, serialize_document};
///
/// let doc = parse_document("<h1 id=top>Hi</h1>");
/// assert!(doc.issues.is_empty());
/// assert_eq!(serialize_document(&doc.tree), r#"<h1 id="top">Hi</h1>"#);
/// assert_eq!(doc.tree.children(NodeId::ROOT).len(), 1);
/// ```
#[must_use]
pub fn parse_document(html: &str) -> ParsedDocument {
    let mut tokenizer = HTMLTokenizer::new(html.to_string());
    tokenizer.run();
    let (tokens, mut issues) = tokenizer.into_parts();
    let (tree, builder_issues) = HTMLParser::new(tokens).run_with_issues();
    issues.extend(builder_issues);
    ParsedDocument { tree, issues }
}
