//! Tokenizer tests: tags and attributes as headings use them, text,
//! character references and the raw text elements.

use outliner_html::tokenizer::named_character_references::{longest_match, lookup_entity};
use outliner_html::{HTMLTokenizer, ParseStage, Token};

/// Run the tokenizer to completion over `input`.
fn tokenize(input: &str) -> Vec<Token> {
    let mut tokenizer = HTMLTokenizer::new(input.to_string());
    tokenizer.run();
    tokenizer.into_tokens()
}

/// Helper to collect the character tokens into a string
fn text_of(tokens: &[Token]) -> String {
    tokens
        .iter()
        .filter_map(|t| match t {
            Token::Character { data } => Some(*data),
            _ => None,
        })
        .collect()
}

#[test]
fn test_plain_text_is_one_token_per_char() {
    let tokens = tokenize("Scope");
    assert_eq!(text_of(&tokens), "Scope");
    assert_eq!(tokens.iter().filter(|t| matches!(t, Token::Character { .. })).count(), 5);
    assert!(matches!(tokens.last(), Some(Token::EndOfFile)));
}

#[test]
fn test_doctype() {
    let tokens = tokenize("<!doctype HTML><h1>");
    let Token::Doctype { name, force_quirks } = &tokens[0] else {
        panic!("doctype not tokenized first: {:?}", tokens[0]);
    };
    assert_eq!(name.as_deref(), Some("html"));
    assert!(!force_quirks);
    assert_eq!(tokens[1].tag_name(), Some("h1"));
}

#[test]
fn test_heading_with_attributes() {
    let tokens = tokenize(r#"<H2 ID="intro" class=lead>"#);
    match &tokens[0] {
        Token::StartTag {
            name,
            self_closing,
            attributes,
        } => {
            assert_eq!(name, "h2");
            assert!(!self_closing);
            assert_eq!(attributes.len(), 2);
            assert_eq!(attributes[0].name, "id");
            assert_eq!(attributes[0].value, "intro");
            assert_eq!(attributes[1].name, "class");
            assert_eq!(attributes[1].value, "lead");
        }
        _ => panic!("Expected StartTag token"),
    }
}

#[test]
fn test_end_tag() {
    let tokens = tokenize("</h3>");
    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[0].tag_name(), Some("h3"));
    assert!(matches!(tokens[0], Token::EndTag { .. }));
}

#[test]
fn test_self_closing_tag() {
    let tokens = tokenize("<br/>");
    match &tokens[0] {
        Token::StartTag {
            name, self_closing, ..
        } => {
            assert_eq!(name, "br");
            assert!(self_closing);
        }
        _ => panic!("Expected self-closing StartTag token"),
    }
}

#[test]
fn test_comment() {
    let tokens = tokenize("<!-- note -->");
    match &tokens[0] {
        Token::Comment { data } => assert_eq!(data, " note "),
        _ => panic!("Expected Comment token"),
    }
}

#[test]
fn test_duplicate_attribute_keeps_first_value() {
    let mut tokenizer = HTMLTokenizer::new(r#"<h1 id="a" id="b">"#.to_string());
    tokenizer.run();
    assert!(
        tokenizer
            .issues()
            .iter()
            .any(|i| i.message == "duplicate-attribute" && i.stage == ParseStage::Tokenizer)
    );
    let tokens = tokenizer.into_tokens();
    match &tokens[0] {
        Token::StartTag { attributes, .. } => {
            assert_eq!(attributes.len(), 1);
            assert_eq!(attributes[0].value, "a");
        }
        _ => panic!("Expected StartTag token"),
    }
}

#[test]
fn test_named_character_references() {
    let tokens = tokenize("Fish &amp; Chips &copy; 2024");
    assert_eq!(text_of(&tokens), "Fish & Chips \u{00A9} 2024");
}

#[test]
fn test_less_common_named_references_decode() {
    let tokens = tokenize("caf&eacute; &notin; &fjlig; &CounterClockwiseContourIntegral;");
    assert_eq!(text_of(&tokens), "caf\u{00E9} \u{2209} fj \u{2233}");
}

#[test]
fn test_longest_named_reference_wins() {
    // "&notin;" must not stop at the legacy "&not".
    assert_eq!(text_of(&tokenize("&notin;")), "\u{2209}");
    assert_eq!(text_of(&tokenize("&notit;")), "\u{00AC}it;");
    assert_eq!(longest_match("notin; x"), Some(("notin;", "\u{2209}")));
    assert_eq!(lookup_entity("eacute"), Some("\u{00E9}"));
    assert_eq!(lookup_entity("bogus;"), None);
}

#[test]
fn test_unknown_named_reference_is_literal() {
    let tokens = tokenize("&bogus; here");
    assert_eq!(text_of(&tokens), "&bogus; here");
}

#[test]
fn test_numeric_character_references() {
    let tokens = tokenize("&#65;&#x42;&#0;");
    assert_eq!(text_of(&tokens), "AB\u{FFFD}");
}

#[test]
fn test_character_reference_in_attribute() {
    let tokens = tokenize(r#"<a href="?a=1&amp;b=2">"#);
    match &tokens[0] {
        Token::StartTag { attributes, .. } => assert_eq!(attributes[0].value, "?a=1&b=2"),
        _ => panic!("Expected StartTag token"),
    }
}

#[test]
fn test_historical_reference_in_attribute_stays_literal() {
    let tokens = tokenize(r#"<a href="?x=1&copy=2">"#);
    match &tokens[0] {
        Token::StartTag { attributes, .. } => assert_eq!(attributes[0].value, "?x=1&copy=2"),
        _ => panic!("Expected StartTag token"),
    }
}

#[test]
fn test_style_content_is_raw_text() {
    let tokens = tokenize("<style>h1 > a { color: red }</style><p>");
    assert_eq!(text_of(&tokens), "h1 > a { color: red }");
    assert!(matches!(&tokens[tokens.len() - 3], Token::EndTag { name, .. } if name == "style"));
    assert!(matches!(&tokens[tokens.len() - 2], Token::StartTag { name, .. } if name == "p"));
}

#[test]
fn test_title_content_is_rcdata() {
    let tokens = tokenize("<title>A &amp; <b></title>");
    assert_eq!(text_of(&tokens), "A & <b>");
}

#[test]
fn test_carriage_returns_are_normalized() {
    let tokens = tokenize("a\r\nb\rc");
    assert_eq!(text_of(&tokens), "a\nb\nc");
}

#[test]
fn test_eof_in_tag_reports_issue() {
    let mut tokenizer = HTMLTokenizer::new("<h1 id=".to_string());
    tokenizer.run();
    assert!(tokenizer.issues().iter().any(|i| i.message == "eof-in-tag"));
    let tokens = tokenizer.into_tokens();
    assert!(matches!(tokens.last(), Some(Token::EndOfFile)));
}
