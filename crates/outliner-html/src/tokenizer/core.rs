use strum_macros::Display;

use super::token::Token;
use crate::issue::ParseIssue;

/// [§ 13.2.5 Tokenization](https://html.spec.whatwg.org/multipage/parsing.html#tokenization)
///
/// The tokenizer state machine. Each state corresponds to a section in § 13.2.5.
/// Script data escaping and CDATA sections are not modelled: `script` content is
/// read as RAWTEXT and CDATA is read as a bogus comment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum TokenizerState {
    /// [§ 13.2.5.1 Data state](https://html.spec.whatwg.org/multipage/parsing.html#data-state)
    Data,
    /// [§ 13.2.5.2 RCDATA state](https://html.spec.whatwg.org/multipage/parsing.html#rcdata-state)
    RCDATA,
    /// [§ 13.2.5.3 RAWTEXT state](https://html.spec.whatwg.org/multipage/parsing.html#rawtext-state)
    RAWTEXT,
    /// § 13.2.5.9 / § 13.2.5.12 RCDATA and RAWTEXT less-than sign states.
    RawTextLessThanSign,
    /// § 13.2.5.10 / § 13.2.5.13 RCDATA and RAWTEXT end tag open states.
    RawTextEndTagOpen,
    /// § 13.2.5.11 / § 13.2.5.14 RCDATA and RAWTEXT end tag name states.
    RawTextEndTagName,
    /// [§ 13.2.5.6 Tag open state](https://html.spec.whatwg.org/multipage/parsing.html#tag-open-state)
    TagOpen,
    /// [§ 13.2.5.7 End tag open state](https://html.spec.whatwg.org/multipage/parsing.html#end-tag-open-state)
    EndTagOpen,
    /// [§ 13.2.5.8 Tag name state](https://html.spec.whatwg.org/multipage/parsing.html#tag-name-state)
    TagName,
    /// [§ 13.2.5.32 Before attribute name state](https://html.spec.whatwg.org/multipage/parsing.html#before-attribute-name-state)
    BeforeAttributeName,
    /// [§ 13.2.5.33 Attribute name state](https://html.spec.whatwg.org/multipage/parsing.html#attribute-name-state)
    AttributeName,
    /// [§ 13.2.5.34 After attribute name state](https://html.spec.whatwg.org/multipage/parsing.html#after-attribute-name-state)
    AfterAttributeName,
    /// [§ 13.2.5.35 Before attribute value state](https://html.spec.whatwg.org/multipage/parsing.html#before-attribute-value-state)
    BeforeAttributeValue,
    /// [§ 13.2.5.36 Attribute value (double-quoted) state](https://html.spec.whatwg.org/multipage/parsing.html#attribute-value-(double-quoted)-state)
    AttributeValueDoubleQuoted,
    /// [§ 13.2.5.37 Attribute value (single-quoted) state](https://html.spec.whatwg.org/multipage/parsing.html#attribute-value-(single-quoted)-state)
    AttributeValueSingleQuoted,
    /// [§ 13.2.5.38 Attribute value (unquoted) state](https://html.spec.whatwg.org/multipage/parsing.html#attribute-value-(unquoted)-state)
    AttributeValueUnquoted,
    /// [§ 13.2.5.39 After attribute value (quoted) state](https://html.spec.whatwg.org/multipage/parsing.html#after-attribute-value-(quoted)-state)
    AfterAttributeValueQuoted,
    /// [§ 13.2.5.40 Self-closing start tag state](https://html.spec.whatwg.org/multipage/parsing.html#self-closing-start-tag-state)
    SelfClosingStartTag,
    /// [§ 13.2.5.41 Bogus comment state](https://html.spec.whatwg.org/multipage/parsing.html#bogus-comment-state)
    BogusComment,
    /// [§ 13.2.5.42 Markup declaration open state](https://html.spec.whatwg.org/multipage/parsing.html#markup-declaration-open-state)
    MarkupDeclarationOpen,
    /// [§ 13.2.5.43 Comment start state](https://html.spec.whatwg.org/multipage/parsing.html#comment-start-state)
    CommentStart,
    /// [§ 13.2.5.44 Comment start dash state](https://html.spec.whatwg.org/multipage/parsing.html#comment-start-dash-state)
    CommentStartDash,
    /// [§ 13.2.5.45 Comment state](https://html.spec.whatwg.org/multipage/parsing.html#comment-state)
    Comment,
    /// [§ 13.2.5.50 Comment end dash state](https://html.spec.whatwg.org/multipage/parsing.html#comment-end-dash-state)
    CommentEndDash,
    /// [§ 13.2.5.51 Comment end state](https://html.spec.whatwg.org/multipage/parsing.html#comment-end-state)
    CommentEnd,
    /// [§ 13.2.5.53 DOCTYPE state](https://html.spec.whatwg.org/multipage/parsing.html#doctype-state)
    DOCTYPE,
    /// [§ 13.2.5.54 Before DOCTYPE name state](https://html.spec.whatwg.org/multipage/parsing.html#before-doctype-name-state)
    BeforeDOCTYPEName,
    /// [§ 13.2.5.55 DOCTYPE name state](https://html.spec.whatwg.org/multipage/parsing.html#doctype-name-state)
    DOCTYPEName,
    /// [§ 13.2.5.56 After DOCTYPE name state](https://html.spec.whatwg.org/multipage/parsing.html#after-doctype-name-state)
    ///
    /// Public and system identifiers are skipped up to the closing `>`.
    AfterDOCTYPEName,
    /// [§ 13.2.5.72 Character reference state](https://html.spec.whatwg.org/multipage/parsing.html#character-reference-state)
    CharacterReference,
}

/// [§ 13.2.5 Tokenization](https://html.spec.whatwg.org/multipage/parsing.html#tokenization)
///
/// "Implementations must act as if they used the following state machine to tokenize HTML."
pub struct HTMLTokenizer {
    pub(super) state: TokenizerState,
    pub(super) return_state: Option<TokenizerState>,
    /// RCDATA or RAWTEXT: where the shared raw text end-tag states fall back to.
    pub(super) raw_text_state: TokenizerState,
    pub(super) input: String,
    pub(super) current_pos: usize,
    pub(super) current_input_character: Option<char>,
    pub(super) current_token: Option<Token>,
    /// Set when the attribute being built repeats an earlier name; it is
    /// dropped once its value has been read.
    pub(super) current_attribute_is_duplicate: bool,
    pub(super) at_eof: bool,
    pub(super) token_stream: Vec<Token>,
    // When true, the next iteration of the main loop will not consume a new character.
    pub(super) reconsume: bool,

    /// "The last start tag token emitted is used as part of the tree construction stage
    /// and in the RCDATA, RAWTEXT, and script data states."
    pub(super) last_start_tag_name: Option<String>,

    /// [§ 13.2.5 Tokenization](https://html.spec.whatwg.org/multipage/parsing.html#temporary-buffer)
    pub(super) temporary_buffer: String,

    pub(super) issues: Vec<ParseIssue>,
}

impl HTMLTokenizer {
    /// Create a new tokenizer for the given input.
    ///
    /// [§ 13.2.3.5 Preprocessing the input stream](https://html.spec.whatwg.org/multipage/parsing.html#preprocessing-the-input-stream):
    /// "Before the tokenization stage, the input stream must be preprocessed by
    /// normalizing newlines."
    #[must_use]
    pub fn new(input: String) -> Self {
        let input = if input.contains('\r') {
            input.replace("\r\n", "\n").replace('\r', "\n")
        } else {
            input
        };
        // "The initial state is the data state."
        Self {
            state: TokenizerState::Data,
            return_state: None,
            raw_text_state: TokenizerState::RAWTEXT,
            input,
            current_pos: 0,
            current_input_character: None,
            current_token: None,
            current_attribute_is_duplicate: false,
            at_eof: false,
            token_stream: Vec::new(),
            reconsume: false,
            last_start_tag_name: None,
            temporary_buffer: String::new(),
            issues: Vec::new(),
        }
    }

    /// Consume the tokenizer and return the token stream.
    /// Call this after `run()` to get the tokens for the parser.
    #[must_use]
    pub fn into_tokens(self) -> Vec<Token> {
        self.token_stream
    }

    /// Consume the tokenizer and return tokens together with parse issues.
    #[must_use]
    pub fn into_parts(self) -> (Vec<Token>, Vec<ParseIssue>) {
        (self.token_stream, self.issues)
    }

    /// Parse errors seen so far.
    #[must_use]
    pub fn issues(&self) -> &[ParseIssue] {
        &self.issues
    }

    /// Run the state machine until an end-of-file token has been emitted.
    pub fn run(&mut self) {
        while !self.at_eof {
            // Each state begins by consuming the next input character,
            // unless we're reconsuming from a previous state transition.
            if self.reconsume {
                self.reconsume = false;
            } else {
                self.current_input_character = self.consume();
            }

            match self.state {
                TokenizerState::Data => self.handle_data_state(),
                TokenizerState::RCDATA => self.handle_rcdata_state(),
                TokenizerState::RAWTEXT => self.handle_rawtext_state(),
                TokenizerState::RawTextLessThanSign => self.handle_raw_text_less_than_sign_state(),
                TokenizerState::RawTextEndTagOpen => self.handle_raw_text_end_tag_open_state(),
                TokenizerState::RawTextEndTagName => self.handle_raw_text_end_tag_name_state(),
                TokenizerState::TagOpen => self.handle_tag_open_state(),
                TokenizerState::EndTagOpen => self.handle_end_tag_open_state(),
                TokenizerState::TagName => self.handle_tag_name_state(),
                TokenizerState::BeforeAttributeName => self.handle_before_attribute_name_state(),
                TokenizerState::AttributeName => self.handle_attribute_name_state(),
                TokenizerState::AfterAttributeName => self.handle_after_attribute_name_state(),
                TokenizerState::BeforeAttributeValue => self.handle_before_attribute_value_state(),
                TokenizerState::AttributeValueDoubleQuoted => {
                    self.handle_attribute_value_quoted_state('"');
                }
                TokenizerState::AttributeValueSingleQuoted => {
                    self.handle_attribute_value_quoted_state('\'');
                }
                TokenizerState::AttributeValueUnquoted => {
                    self.handle_attribute_value_unquoted_state();
                }
                TokenizerState::AfterAttributeValueQuoted => {
                    self.handle_after_attribute_value_quoted_state();
                }
                TokenizerState::SelfClosingStartTag => self.handle_self_closing_start_tag_state(),
                TokenizerState::BogusComment => self.handle_bogus_comment_state(),
                TokenizerState::MarkupDeclarationOpen => {
                    self.handle_markup_declaration_open_state();
                }
                TokenizerState::CommentStart => self.handle_comment_start_state(),
                TokenizerState::CommentStartDash => self.handle_comment_start_dash_state(),
                TokenizerState::Comment => self.handle_comment_state(),
                TokenizerState::CommentEndDash => self.handle_comment_end_dash_state(),
                TokenizerState::CommentEnd => self.handle_comment_end_state(),
                TokenizerState::DOCTYPE => self.handle_doctype_state(),
                TokenizerState::BeforeDOCTYPEName => self.handle_before_doctype_name_state(),
                TokenizerState::DOCTYPEName => self.handle_doctype_name_state(),
                TokenizerState::AfterDOCTYPEName => self.handle_after_doctype_name_state(),
                TokenizerState::CharacterReference => self.handle_character_reference_state(),
            }
        }
    }

    /// [§ 13.2.5.1 Data state](https://html.spec.whatwg.org/multipage/parsing.html#data-state)
    fn handle_data_state(&mut self) {
        match self.current_input_character {
            // "U+0026 AMPERSAND (&) - Set the return state to the data state.
            // Switch to the character reference state."
            Some('&') => {
                self.return_state = Some(TokenizerState::Data);
                self.switch_to(TokenizerState::CharacterReference);
            }
            // "U+003C LESS-THAN SIGN (<) - Switch to the tag open state."
            Some('<') => self.switch_to(TokenizerState::TagOpen),
            // "U+0000 NULL - This is an unexpected-null-character parse error.
            // Emit the current input character as a character token."
            Some('\0') => {
                self.log_parse_error("unexpected-null-character");
                self.emit_character_token('\0');
            }
            // "EOF - Emit an end-of-file token."
            None => self.emit_eof_token(),
            // "Anything else - Emit the current input character as a character token."
            Some(c) => self.emit_character_token(c),
        }
    }

    /// [§ 13.2.5.2 RCDATA state](https://html.spec.whatwg.org/multipage/parsing.html#rcdata-state)
    fn handle_rcdata_state(&mut self) {
        match self.current_input_character {
            Some('&') => {
                self.return_state = Some(TokenizerState::RCDATA);
                self.switch_to(TokenizerState::CharacterReference);
            }
            Some('<') => self.switch_to(TokenizerState::RawTextLessThanSign),
            Some('\0') => {
                self.log_parse_error("unexpected-null-character");
                self.emit_character_token('\u{FFFD}');
            }
            None => self.emit_eof_token(),
            Some(c) => self.emit_character_token(c),
        }
    }

    /// [§ 13.2.5.3 RAWTEXT state](https://html.spec.whatwg.org/multipage/parsing.html#rawtext-state)
    fn handle_rawtext_state(&mut self) {
        match self.current_input_character {
            Some('<') => self.switch_to(TokenizerState::RawTextLessThanSign),
            Some('\0') => {
                self.log_parse_error("unexpected-null-character");
                self.emit_character_token('\u{FFFD}');
            }
            None => self.emit_eof_token(),
            Some(c) => self.emit_character_token(c),
        }
    }

    /// [§ 13.2.5.9 RCDATA less-than sign state](https://html.spec.whatwg.org/multipage/parsing.html#rcdata-less-than-sign-state)
    fn handle_raw_text_less_than_sign_state(&mut self) {
        if self.current_input_character == Some('/') {
            // "Set the temporary buffer to the empty string. Switch to the
            // RCDATA end tag open state."
            self.temporary_buffer.clear();
            self.switch_to(TokenizerState::RawTextEndTagOpen);
        } else {
            // "Emit a U+003C LESS-THAN SIGN character token. Reconsume in the RCDATA state."
            self.emit_character_token('<');
            self.reconsume_in(self.raw_text_state);
        }
    }

    /// [§ 13.2.5.10 RCDATA end tag open state](https://html.spec.whatwg.org/multipage/parsing.html#rcdata-end-tag-open-state)
    fn handle_raw_text_end_tag_open_state(&mut self) {
        match self.current_input_character {
            // "Create a new end tag token, set its tag name to the empty string.
            // Reconsume in the RCDATA end tag name state."
            Some(c) if c.is_ascii_alphabetic() => {
                self.current_token = Some(Token::new_end_tag());
                self.reconsume_in(TokenizerState::RawTextEndTagName);
            }
            _ => {
                self.emit_character_token('<');
                self.emit_character_token('/');
                self.reconsume_in(self.raw_text_state);
            }
        }
    }

    /// [§ 13.2.5.11 RCDATA end tag name state](https://html.spec.whatwg.org/multipage/parsing.html#rcdata-end-tag-name-state)
    fn handle_raw_text_end_tag_name_state(&mut self) {
        match self.current_input_character {
            Some(c) if Self::is_whitespace_char(c) && self.is_appropriate_end_tag_token() => {
                self.switch_to(TokenizerState::BeforeAttributeName);
            }
            Some('/') if self.is_appropriate_end_tag_token() => {
                self.switch_to(TokenizerState::SelfClosingStartTag);
            }
            Some('>') if self.is_appropriate_end_tag_token() => {
                self.switch_to(TokenizerState::Data);
                self.emit_token();
            }
            // "ASCII alpha: Append the lowercase version of the current input
            // character to the current tag token's tag name. Append the current
            // input character to the temporary buffer."
            Some(c) if c.is_ascii_alphabetic() => {
                if let Some(ref mut token) = self.current_token {
                    token.append_to_tag_name(c.to_ascii_lowercase());
                }
                self.temporary_buffer.push(c);
            }
            // "Anything else: Emit a U+003C LESS-THAN SIGN character token, a
            // U+002F SOLIDUS character token, and a character token for each of
            // the characters in the temporary buffer. Reconsume in the RCDATA state."
            _ => self.emit_raw_text_end_tag_name_anything_else(),
        }
    }

    /// [§ 13.2.5.6 Tag open state](https://html.spec.whatwg.org/multipage/parsing.html#tag-open-state)
    fn handle_tag_open_state(&mut self) {
        match self.current_input_character {
            Some('!') => self.switch_to(TokenizerState::MarkupDeclarationOpen),
            Some('/') => self.switch_to(TokenizerState::EndTagOpen),
            // "Create a new start tag token, set its tag name to the empty
            // string. Reconsume in the tag name state."
            Some(c) if c.is_ascii_alphabetic() => {
                self.current_token = Some(Token::new_start_tag());
                self.reconsume_in(TokenizerState::TagName);
            }
            // "This is an unexpected-question-mark-instead-of-tag-name parse
            // error. Create a comment token whose data is the empty string.
            // Reconsume in the bogus comment state."
            Some('?') => {
                self.log_parse_error("unexpected-question-mark-instead-of-tag-name");
                self.current_token = Some(Token::new_comment());
                self.reconsume_in(TokenizerState::BogusComment);
            }
            None => {
                self.log_parse_error("eof-before-tag-name");
                self.emit_character_token('<');
                self.emit_eof_token();
            }
            Some(_) => {
                self.log_parse_error("invalid-first-character-of-tag-name");
                self.emit_character_token('<');
                self.reconsume_in(TokenizerState::Data);
            }
        }
    }

    /// [§ 13.2.5.7 End tag open state](https://html.spec.whatwg.org/multipage/parsing.html#end-tag-open-state)
    fn handle_end_tag_open_state(&mut self) {
        match self.current_input_character {
            Some(c) if c.is_ascii_alphabetic() => {
                self.current_token = Some(Token::new_end_tag());
                self.reconsume_in(TokenizerState::TagName);
            }
            Some('>') => {
                self.log_parse_error("missing-end-tag-name");
                self.switch_to(TokenizerState::Data);
            }
            None => {
                self.log_parse_error("eof-before-tag-name");
                self.emit_character_token('<');
                self.emit_character_token('/');
                self.emit_eof_token();
            }
            Some(_) => {
                self.log_parse_error("invalid-first-character-of-tag-name");
                self.current_token = Some(Token::new_comment());
                self.reconsume_in(TokenizerState::BogusComment);
            }
        }
    }

    /// [§ 13.2.5.8 Tag name state](https://html.spec.whatwg.org/multipage/parsing.html#tag-name-state)
    fn handle_tag_name_state(&mut self) {
        match self.current_input_character {
            Some(c) if Self::is_whitespace_char(c) => {
                self.switch_to(TokenizerState::BeforeAttributeName);
            }
            Some('/') => self.switch_to(TokenizerState::SelfClosingStartTag),
            Some('>') => {
                self.switch_to(TokenizerState::Data);
                self.emit_token();
            }
            Some('\0') => {
                self.log_parse_error("unexpected-null-character");
                self.append_to_tag_name('\u{FFFD}');
            }
            // "This is an eof-in-tag parse error. Emit an end-of-file token."
            None => {
                self.log_parse_error("eof-in-tag");
                self.emit_eof_token();
            }
            Some(c) => self.append_to_tag_name(c.to_ascii_lowercase()),
        }
    }

    /// [§ 13.2.5.32 Before attribute name state](https://html.spec.whatwg.org/multipage/parsing.html#before-attribute-name-state)
    fn handle_before_attribute_name_state(&mut self) {
        match self.current_input_character {
            Some(c) if Self::is_whitespace_char(c) => {}
            Some('/' | '>') | None => self.reconsume_in(TokenizerState::AfterAttributeName),
            // "This is an unexpected-equals-sign-before-attribute-name parse
            // error. Start a new attribute in the current tag token. Set that
            // attribute's name to the current input character"
            Some('=') => {
                self.log_parse_error("unexpected-equals-sign-before-attribute-name");
                self.start_new_attribute();
                if let Some(ref mut token) = self.current_token {
                    token.append_to_current_attribute_name('=');
                }
                self.switch_to(TokenizerState::AttributeName);
            }
            Some(_) => {
                self.start_new_attribute();
                self.reconsume_in(TokenizerState::AttributeName);
            }
        }
    }

    /// [§ 13.2.5.33 Attribute name state](https://html.spec.whatwg.org/multipage/parsing.html#attribute-name-state)
    fn handle_attribute_name_state(&mut self) {
        match self.current_input_character {
            Some(c) if Self::is_whitespace_char(c) => {
                self.check_duplicate_attribute();
                self.reconsume_in(TokenizerState::AfterAttributeName);
            }
            Some('/' | '>') | None => {
                self.check_duplicate_attribute();
                self.reconsume_in(TokenizerState::AfterAttributeName);
            }
            Some('=') => {
                self.check_duplicate_attribute();
                self.switch_to(TokenizerState::BeforeAttributeValue);
            }
            Some('\0') => {
                self.log_parse_error("unexpected-null-character");
                self.append_to_attribute_name('\u{FFFD}');
            }
            Some(c @ ('"' | '\'' | '<')) => {
                self.log_parse_error("unexpected-character-in-attribute-name");
                self.append_to_attribute_name(c);
            }
            Some(c) => self.append_to_attribute_name(c.to_ascii_lowercase()),
        }
    }

    /// [§ 13.2.5.34 After attribute name state](https://html.spec.whatwg.org/multipage/parsing.html#after-attribute-name-state)
    fn handle_after_attribute_name_state(&mut self) {
        match self.current_input_character {
            Some(c) if Self::is_whitespace_char(c) => {}
            Some('/') => self.switch_to(TokenizerState::SelfClosingStartTag),
            Some('=') => self.switch_to(TokenizerState::BeforeAttributeValue),
            Some('>') => {
                self.switch_to(TokenizerState::Data);
                self.emit_token();
            }
            None => {
                self.log_parse_error("eof-in-tag");
                self.emit_eof_token();
            }
            Some(_) => {
                self.start_new_attribute();
                self.reconsume_in(TokenizerState::AttributeName);
            }
        }
    }

    /// [§ 13.2.5.35 Before attribute value state](https://html.spec.whatwg.org/multipage/parsing.html#before-attribute-value-state)
    fn handle_before_attribute_value_state(&mut self) {
        match self.current_input_character {
            Some(c) if Self::is_whitespace_char(c) => {}
            Some('"') => self.switch_to(TokenizerState::AttributeValueDoubleQuoted),
            Some('\'') => self.switch_to(TokenizerState::AttributeValueSingleQuoted),
            Some('>') => {
                self.log_parse_error("missing-attribute-value");
                self.switch_to(TokenizerState::Data);
                self.emit_token();
            }
            _ => self.reconsume_in(TokenizerState::AttributeValueUnquoted),
        }
    }

    /// [§ 13.2.5.36 Attribute value (double-quoted) state](https://html.spec.whatwg.org/multipage/parsing.html#attribute-value-(double-quoted)-state)
    /// and [§ 13.2.5.37 (single-quoted)](https://html.spec.whatwg.org/multipage/parsing.html#attribute-value-(single-quoted)-state),
    /// which differ only in their closing quote.
    fn handle_attribute_value_quoted_state(&mut self, quote: char) {
        match self.current_input_character {
            Some(c) if c == quote => self.switch_to(TokenizerState::AfterAttributeValueQuoted),
            Some('&') => {
                self.return_state = Some(self.state);
                self.switch_to(TokenizerState::CharacterReference);
            }
            Some('\0') => {
                self.log_parse_error("unexpected-null-character");
                self.append_to_attribute_value('\u{FFFD}');
            }
            None => {
                self.log_parse_error("eof-in-tag");
                self.emit_eof_token();
            }
            Some(c) => self.append_to_attribute_value(c),
        }
    }

    /// [§ 13.2.5.38 Attribute value (unquoted) state](https://html.spec.whatwg.org/multipage/parsing.html#attribute-value-(unquoted)-state)
    fn handle_attribute_value_unquoted_state(&mut self) {
        match self.current_input_character {
            Some(c) if Self::is_whitespace_char(c) => {
                self.switch_to(TokenizerState::BeforeAttributeName);
            }
            Some('&') => {
                self.return_state = Some(TokenizerState::AttributeValueUnquoted);
                self.switch_to(TokenizerState::CharacterReference);
            }
            Some('>') => {
                self.switch_to(TokenizerState::Data);
                self.emit_token();
            }
            Some('\0') => {
                self.log_parse_error("unexpected-null-character");
                self.append_to_attribute_value('\u{FFFD}');
            }
            Some(c @ ('"' | '\'' | '<' | '=' | '`')) => {
                self.log_parse_error("unexpected-character-in-unquoted-attribute-value");
                self.append_to_attribute_value(c);
            }
            None => {
                self.log_parse_error("eof-in-tag");
                self.emit_eof_token();
            }
            Some(c) => self.append_to_attribute_value(c),
        }
    }

    /// [§ 13.2.5.39 After attribute value (quoted) state](https://html.spec.whatwg.org/multipage/parsing.html#after-attribute-value-(quoted)-state)
    fn handle_after_attribute_value_quoted_state(&mut self) {
        match self.current_input_character {
            Some(c) if Self::is_whitespace_char(c) => {
                self.switch_to(TokenizerState::BeforeAttributeName);
            }
            Some('/') => self.switch_to(TokenizerState::SelfClosingStartTag),
            Some('>') => {
                self.switch_to(TokenizerState::Data);
                self.emit_token();
            }
            None => {
                self.log_parse_error("eof-in-tag");
                self.emit_eof_token();
            }
            Some(_) => {
                self.log_parse_error("missing-whitespace-between-attributes");
                self.reconsume_in(TokenizerState::BeforeAttributeName);
            }
        }
    }

    /// [§ 13.2.5.40 Self-closing start tag state](https://html.spec.whatwg.org/multipage/parsing.html#self-closing-start-tag-state)
    fn handle_self_closing_start_tag_state(&mut self) {
        match self.current_input_character {
            Some('>') => {
                if let Some(ref mut token) = self.current_token {
                    token.set_self_closing();
                }
                self.switch_to(TokenizerState::Data);
                self.emit_token();
            }
            None => {
                self.log_parse_error("eof-in-tag");
                self.emit_eof_token();
            }
            Some(_) => {
                self.log_parse_error("unexpected-solidus-in-tag");
                self.reconsume_in(TokenizerState::BeforeAttributeName);
            }
        }
    }

    /// [§ 13.2.5.41 Bogus comment state](https://html.spec.whatwg.org/multipage/parsing.html#bogus-comment-state)
    fn handle_bogus_comment_state(&mut self) {
        match self.current_input_character {
            Some('>') => {
                self.switch_to(TokenizerState::Data);
                self.emit_token();
            }
            None => {
                self.emit_token();
                self.emit_eof_token();
            }
            Some('\0') => {
                self.log_parse_error("unexpected-null-character");
                self.append_to_comment('\u{FFFD}');
            }
            Some(c) => self.append_to_comment(c),
        }
    }

    /// [§ 13.2.5.42 Markup declaration open state](https://html.spec.whatwg.org/multipage/parsing.html#markup-declaration-open-state)
    ///
    /// The lookahead here includes the character the main loop just consumed.
    fn handle_markup_declaration_open_state(&mut self) {
        // "Two U+002D HYPHEN-MINUS characters (-)"
        if self.next_few_characters_are("--", false) {
            self.consume_matched("--");
            self.current_token = Some(Token::new_comment());
            self.switch_to(TokenizerState::CommentStart);
        // "ASCII case-insensitive match for the word "DOCTYPE""
        } else if self.next_few_characters_are("doctype", true) {
            self.consume_matched("doctype");
            self.switch_to(TokenizerState::DOCTYPE);
        // "The string "[CDATA[" ... this is a cdata-in-html-content parse error.
        // Create a comment token whose data is the "[CDATA[" string."
        } else if self.next_few_characters_are("[CDATA[", false) {
            self.log_parse_error("cdata-in-html-content");
            self.consume_matched("[CDATA[");
            self.current_token = Some(Token::Comment {
                data: "[CDATA[".to_string(),
            });
            self.switch_to(TokenizerState::BogusComment);
        } else {
            self.log_parse_error("incorrectly-opened-comment");
            self.current_token = Some(Token::new_comment());
            self.reconsume_in(TokenizerState::BogusComment);
        }
    }

    /// [§ 13.2.5.43 Comment start state](https://html.spec.whatwg.org/multipage/parsing.html#comment-start-state)
    fn handle_comment_start_state(&mut self) {
        match self.current_input_character {
            Some('-') => self.switch_to(TokenizerState::CommentStartDash),
            Some('>') => {
                self.log_parse_error("abrupt-closing-of-empty-comment");
                self.switch_to(TokenizerState::Data);
                self.emit_token();
            }
            _ => self.reconsume_in(TokenizerState::Comment),
        }
    }

    /// [§ 13.2.5.44 Comment start dash state](https://html.spec.whatwg.org/multipage/parsing.html#comment-start-dash-state)
    fn handle_comment_start_dash_state(&mut self) {
        match self.current_input_character {
            Some('-') => self.switch_to(TokenizerState::CommentEnd),
            Some('>') => {
                self.log_parse_error("abrupt-closing-of-empty-comment");
                self.switch_to(TokenizerState::Data);
                self.emit_token();
            }
            None => {
                self.log_parse_error("eof-in-comment");
                self.emit_token();
                self.emit_eof_token();
            }
            Some(_) => {
                self.append_to_comment('-');
                self.reconsume_in(TokenizerState::Comment);
            }
        }
    }

    /// [§ 13.2.5.45 Comment state](https://html.spec.whatwg.org/multipage/parsing.html#comment-state)
    ///
    /// The nested `<!--` detection states are not modelled.
    fn handle_comment_state(&mut self) {
        match self.current_input_character {
            Some('-') => self.switch_to(TokenizerState::CommentEndDash),
            Some('\0') => {
                self.log_parse_error("unexpected-null-character");
                self.append_to_comment('\u{FFFD}');
            }
            None => {
                self.log_parse_error("eof-in-comment");
                self.emit_token();
                self.emit_eof_token();
            }
            Some(c) => self.append_to_comment(c),
        }
    }

    /// [§ 13.2.5.50 Comment end dash state](https://html.spec.whatwg.org/multipage/parsing.html#comment-end-dash-state)
    fn handle_comment_end_dash_state(&mut self) {
        match self.current_input_character {
            Some('-') => self.switch_to(TokenizerState::CommentEnd),
            None => {
                self.log_parse_error("eof-in-comment");
                self.emit_token();
                self.emit_eof_token();
            }
            Some(_) => {
                self.append_to_comment('-');
                self.reconsume_in(TokenizerState::Comment);
            }
        }
    }

    /// [§ 13.2.5.51 Comment end state](https://html.spec.whatwg.org/multipage/parsing.html#comment-end-state)
    fn handle_comment_end_state(&mut self) {
        match self.current_input_character {
            Some('>') => {
                self.switch_to(TokenizerState::Data);
                self.emit_token();
            }
            // "Append a U+002D HYPHEN-MINUS character (-) to the comment token's data."
            Some('-') => self.append_to_comment('-'),
            None => {
                self.log_parse_error("eof-in-comment");
                self.emit_token();
                self.emit_eof_token();
            }
            Some(_) => {
                self.append_to_comment('-');
                self.append_to_comment('-');
                self.reconsume_in(TokenizerState::Comment);
            }
        }
    }

    /// [§ 13.2.5.53 DOCTYPE state](https://html.spec.whatwg.org/multipage/parsing.html#doctype-state)
    fn handle_doctype_state(&mut self) {
        match self.current_input_character {
            Some(c) if Self::is_whitespace_char(c) => {
                self.switch_to(TokenizerState::BeforeDOCTYPEName);
            }
            Some('>') => self.reconsume_in(TokenizerState::BeforeDOCTYPEName),
            None => {
                self.log_parse_error("eof-in-doctype");
                self.emit_quirks_doctype();
                self.emit_eof_token();
            }
            Some(_) => {
                self.log_parse_error("missing-whitespace-before-doctype-name");
                self.reconsume_in(TokenizerState::BeforeDOCTYPEName);
            }
        }
    }

    /// [§ 13.2.5.54 Before DOCTYPE name state](https://html.spec.whatwg.org/multipage/parsing.html#before-doctype-name-state)
    fn handle_before_doctype_name_state(&mut self) {
        match self.current_input_character {
            Some(c) if Self::is_whitespace_char(c) => {}
            Some('>') => {
                self.log_parse_error("missing-doctype-name");
                self.switch_to(TokenizerState::Data);
                self.emit_quirks_doctype();
            }
            None => {
                self.log_parse_error("eof-in-doctype");
                self.emit_quirks_doctype();
                self.emit_eof_token();
            }
            Some(c) => {
                let mut token = Token::new_doctype();
                token.append_to_doctype_name(if c == '\0' {
                    '\u{FFFD}'
                } else {
                    c.to_ascii_lowercase()
                });
                self.current_token = Some(token);
                self.switch_to(TokenizerState::DOCTYPEName);
            }
        }
    }

    /// [§ 13.2.5.55 DOCTYPE name state](https://html.spec.whatwg.org/multipage/parsing.html#doctype-name-state)
    fn handle_doctype_name_state(&mut self) {
        match self.current_input_character {
            Some(c) if Self::is_whitespace_char(c) => {
                self.switch_to(TokenizerState::AfterDOCTYPEName);
            }
            Some('>') => {
                self.switch_to(TokenizerState::Data);
                self.emit_token();
            }
            None => {
                self.log_parse_error("eof-in-doctype");
                if let Some(ref mut token) = self.current_token {
                    token.set_force_quirks();
                }
                self.emit_token();
                self.emit_eof_token();
            }
            Some(c) => {
                let c = if c == '\0' {
                    '\u{FFFD}'
                } else {
                    c.to_ascii_lowercase()
                };
                if let Some(ref mut token) = self.current_token {
                    token.append_to_doctype_name(c);
                }
            }
        }
    }

    /// [§ 13.2.5.56 After DOCTYPE name state](https://html.spec.whatwg.org/multipage/parsing.html#after-doctype-name-state)
    fn handle_after_doctype_name_state(&mut self) {
        match self.current_input_character {
            Some('>') => {
                self.switch_to(TokenizerState::Data);
                self.emit_token();
            }
            None => {
                self.log_parse_error("eof-in-doctype");
                if let Some(ref mut token) = self.current_token {
                    token.set_force_quirks();
                }
                self.emit_token();
                self.emit_eof_token();
            }
            Some(_) => {}
        }
    }
}
