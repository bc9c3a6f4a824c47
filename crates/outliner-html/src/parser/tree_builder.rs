use std::fmt::Write as _;

use outliner_common::warning::warn_once;
use outliner_dom::{AttributeList, DomTree, ElementData, NodeId, NodeType};

use crate::elements::{closes_p_element, is_heading_element, is_scope_boundary, is_void_element};
use crate::issue::{ParseIssue, ParseStage};
use crate::tokenizer::{Attribute, Token};

/// [§ 13.2.6 Tree construction](https://html.spec.whatwg.org/multipage/parsing.html#tree-construction)
///
/// Builds a DOM tree from a stream of tokens using the stack of open
/// elements and a subset of the "in body" rules: implied `p` closing,
/// heading and list item auto-closing, void elements.
///
/// NOTE: No `html`, `head` or `body` elements are synthesized. The tree
/// mirrors the markup that was actually written, so a document serialized
/// after editing stays recognisably the same document.
pub struct HTMLParser {
    /// DOM tree with parent/sibling pointers.
    /// `NodeId::ROOT` (index 0) is the Document node.
    tree: DomTree,

    /// Input tokens from the tokenizer.
    tokens: Vec<Token>,

    /// Current position in token stream.
    token_index: usize,

    /// [§ 13.2.4.3 The stack of open elements](https://html.spec.whatwg.org/multipage/parsing.html#the-stack-of-open-elements)
    stack_of_open_elements: Vec<NodeId>,

    /// Parse issues encountered during tree construction.
    issues: Vec<ParseIssue>,

    /// Set once the first element has been inserted; a DOCTYPE after that
    /// point is misplaced.
    seen_element: bool,
}

impl HTMLParser {
    /// Create a new parser from a token stream.
    #[must_use]
    pub fn new(tokens: Vec<Token>) -> Self {
        Self {
            tree: DomTree::new(),
            tokens,
            token_index: 0,
            stack_of_open_elements: Vec::new(),
            issues: Vec::new(),
            seen_element: false,
        }
    }

    /// Consume all tokens and return the finished tree.
    #[must_use]
    pub fn run(self) -> DomTree {
        self.run_with_issues().0
    }

    /// Consume all tokens and return the tree along with the parse issues
    /// the tree builder recorded.
    #[must_use]
    pub fn run_with_issues(mut self) -> (DomTree, Vec<ParseIssue>) {
        let tokens = std::mem::take(&mut self.tokens);
        for (index, token) in tokens.into_iter().enumerate() {
            self.token_index = index;
            if token.is_eof() {
                break;
            }
            self.process_token(token);
        }
        (self.tree, self.issues)
    }

    fn process_token(&mut self, token: Token) {
        match token {
            // [§ 13.2.6.4.1 The "initial" insertion mode](https://html.spec.whatwg.org/multipage/parsing.html#the-initial-insertion-mode)
            // "Append a DocumentType node to the Document node"
            Token::Doctype { name, .. } => {
                if self.seen_element || self.has_doctype() {
                    self.parse_error("unexpected-doctype");
                } else {
                    let doctype = self
                        .tree
                        .alloc(NodeType::Doctype(name.unwrap_or_default()));
                    self.tree.append_child(NodeId::ROOT, doctype);
                }
            }
            Token::StartTag {
                name,
                self_closing,
                attributes,
            } => self.handle_start_tag(&name, self_closing, attributes),
            Token::EndTag { name, .. } => self.handle_end_tag(&name),
            // "Insert a comment."
            Token::Comment { data } => {
                let parent = self.current_node();
                let comment = self.tree.alloc(NodeType::Comment(data));
                self.tree.append_child(parent, comment);
            }
            Token::Character { data } => self.insert_character(data),
            Token::EndOfFile => {}
        }
    }

    /// [§ 13.2.4.3](https://html.spec.whatwg.org/multipage/parsing.html#current-node)
    ///
    /// "The current node is the bottommost node in this stack of open elements."
    /// The Document stands in when the stack is empty.
    fn current_node(&self) -> NodeId {
        self.stack_of_open_elements
            .last()
            .copied()
            .unwrap_or(NodeId::ROOT)
    }

    fn tag_name(&self, id: NodeId) -> &str {
        self.tree.as_element(id).map_or("", |e| e.tag_name.as_str())
    }

    fn has_doctype(&self) -> bool {
        self.tree.children(NodeId::ROOT).iter().any(|&id| {
            matches!(
                self.tree.get(id).map(|n| &n.node_type),
                Some(NodeType::Doctype(_))
            )
        })
    }

    /// [§ 13.2.6.1 Insert a character](https://html.spec.whatwg.org/multipage/parsing.html#insert-a-character)
    ///
    /// "If there is a Text node immediately before the adjusted insertion
    /// location, then append data to that Text node's data. Otherwise, create
    /// a new Text node whose data is data ... and insert the newly created
    /// node at the adjusted insertion location."
    fn insert_character(&mut self, c: char) {
        let parent = self.current_node();
        if let Some(last) = self.tree.last_child(parent)
            && let Some(node) = self.tree.get_mut(last)
            && let NodeType::Text(data) = &mut node.node_type
        {
            data.push(c);
            return;
        }
        let text = self.tree.create_text(c.to_string());
        self.tree.append_child(parent, text);
    }

    /// [§ 13.2.6.4.7 The "in body" insertion mode](https://html.spec.whatwg.org/multipage/parsing.html#parsing-main-inbody)
    /// start tag handling.
    fn handle_start_tag(&mut self, name: &str, self_closing: bool, attributes: Vec<Attribute>) {
        if closes_p_element(name) {
            self.close_p_element_in_button_scope();
        }

        // "A start tag whose tag name is one of: "h1", "h2", "h3", "h4", "h5", "h6"
        // ... If the current node is an HTML element whose tag name is one of
        // "h1", "h2", "h3", "h4", "h5", or "h6", then this is a parse error;
        // pop the current node off the stack of open elements."
        if is_heading_element(name) && is_heading_element(self.tag_name(self.current_node())) {
            self.parse_error("nested-heading");
            let _ = self.stack_of_open_elements.pop();
        }

        // "A start tag whose tag name is "li"" / "dd", "dt"
        match name {
            "li" => self.close_list_item(&["li"]),
            "dd" | "dt" => self.close_list_item(&["dd", "dt"]),
            _ => {}
        }

        let parent = self.current_node();
        let element = self.create_element(name, attributes);
        self.tree.append_child(parent, element);
        self.seen_element = true;

        if is_void_element(name) {
            // "Immediately pop the current node off the stack of open
            // elements. Acknowledge the token's self-closing flag"
            return;
        }
        if self_closing {
            if self.in_foreign_content() || matches!(name, "svg" | "math") {
                // Foreign elements honour the self-closing flag.
                return;
            }
            self.parse_error("non-void-html-element-start-tag-with-trailing-solidus");
        }
        self.stack_of_open_elements.push(element);
    }

    /// [§ 13.2.6.4.7 "in body" - Any other end tag](https://html.spec.whatwg.org/multipage/parsing.html#parsing-main-inbody)
    ///
    /// Pops up to and including the matching open element. An end tag for
    /// any heading closes whichever heading is open ("If the stack of open
    /// elements does not have an element in scope that is an HTML element and
    /// whose tag name is one of "h1", ..., "h6", then this is a parse error").
    fn handle_end_tag(&mut self, name: &str) {
        let heading = is_heading_element(name);
        let mut matched = None;
        for (index, &id) in self.stack_of_open_elements.iter().enumerate().rev() {
            let tag = self.tag_name(id);
            if tag == name || (heading && is_heading_element(tag)) {
                matched = Some(index);
                break;
            }
            if is_scope_boundary(tag) {
                break;
            }
        }

        let Some(index) = matched else {
            self.parse_error("unexpected-end-tag");
            return;
        };
        if index + 1 != self.stack_of_open_elements.len() {
            self.parse_error("end-tag-with-open-elements");
        }
        self.stack_of_open_elements.truncate(index);
    }

    /// [§ 13.2.6.4.7](https://html.spec.whatwg.org/multipage/parsing.html#close-a-p-element)
    ///
    /// "If the stack of open elements has a p element in button scope, then
    /// close a p element."
    fn close_p_element_in_button_scope(&mut self) {
        for index in (0..self.stack_of_open_elements.len()).rev() {
            let tag = self.tag_name(self.stack_of_open_elements[index]);
            if tag == "p" {
                if index + 1 != self.stack_of_open_elements.len() {
                    self.parse_error("unclosed-elements-in-p");
                }
                self.stack_of_open_elements.truncate(index);
                return;
            }
            if is_scope_boundary(tag) {
                return;
            }
        }
    }

    /// Close an open list item of one of `names`, stopping at the enclosing
    /// list or any scope boundary.
    fn close_list_item(&mut self, names: &[&str]) {
        for index in (0..self.stack_of_open_elements.len()).rev() {
            let tag = self.tag_name(self.stack_of_open_elements[index]);
            if names.contains(&tag) {
                self.stack_of_open_elements.truncate(index);
                return;
            }
            if matches!(tag, "ol" | "ul" | "dl") || is_scope_boundary(tag) {
                return;
            }
        }
    }

    fn in_foreign_content(&self) -> bool {
        self.stack_of_open_elements
            .iter()
            .any(|&id| matches!(self.tag_name(id), "svg" | "math"))
    }

    /// [§ 13.2.6.1 Create an element for a token](https://html.spec.whatwg.org/multipage/parsing.html#create-an-element-for-the-token)
    fn create_element(&mut self, name: &str, attributes: Vec<Attribute>) -> NodeId {
        let mut attrs = AttributeList::new();
        for attr in attributes {
            let _ = attrs.insert_if_absent(attr.name, attr.value);
        }
        self.tree.alloc(NodeType::Element(ElementData {
            tag_name: name.to_string(),
            attrs,
        }))
    }

    fn parse_error(&mut self, message: &str) {
        let stage = ParseStage::TreeBuilder;
        warn_once(
            &stage.to_string(),
            &format!("{message} at token {}", self.token_index),
        );
        self.issues.push(ParseIssue {
            stage,
            message: message.to_string(),
            position: self.token_index,
        });
    }
}

/// Render the subtree at `id` as an indented, human-readable outline of
/// nodes. Whitespace in text nodes is made visible.
#[must_use]
pub fn dump_tree(tree: &DomTree, id: NodeId) -> String {
    let mut out = String::new();
    dump_node(tree, id, 0, &mut out);
    out
}

fn dump_node(tree: &DomTree, id: NodeId, indent: usize, out: &mut String) {
    let Some(node) = tree.get(id) else {
        return;
    };
    let prefix = "  ".repeat(indent);
    let _ = match &node.node_type {
        NodeType::Document => writeln!(out, "{prefix}Document"),
        NodeType::Doctype(name) => writeln!(out, "{prefix}<!DOCTYPE {name}>"),
        NodeType::Element(data) => {
            let attrs: Vec<String> = data
                .attrs
                .iter()
                .map(|(k, v)| {
                    if v.is_empty() {
                        k.to_string()
                    } else {
                        format!("{k}=\"{v}\"")
                    }
                })
                .collect();
            if attrs.is_empty() {
                writeln!(out, "{prefix}<{}>", data.tag_name)
            } else {
                writeln!(out, "{prefix}<{} {}>", data.tag_name, attrs.join(" "))
            }
        }
        NodeType::Text(data) => {
            let display = data.replace('\n', "\\n").replace(' ', "\u{00B7}");
            writeln!(out, "{prefix}\"{display}\"")
        }
        NodeType::Comment(data) => writeln!(out, "{prefix}<!-- {data} -->"),
    };
    for &child_id in tree.children(id) {
        dump_node(tree, child_id, indent + 1, out);
    }
}

/// Print the subtree at `id` to stdout (see [`dump_tree`]).
pub fn print_tree(tree: &DomTree, id: NodeId) {
    print!("{}", dump_tree(tree, id));
}
