//! Helper functions for the HTML tokenizer.
//!
//! [§ 13.2.5 Tokenization](https://html.spec.whatwg.org/multipage/parsing.html#tokenization)
//!
//! This module contains utility functions used throughout the tokenizer:
//! - State transitions ("Switch to", "Reconsume in")
//! - Input/character handling ("Consume the next input character")
//! - Token emission ("Emit the current token")
//! - RCDATA/RAWTEXT helpers for raw text elements
//! - Attribute helpers for duplicate detection

use outliner_common::warning::warn_once;

use super::core::{HTMLTokenizer, TokenizerState};
use super::token::Token;
use crate::issue::{ParseIssue, ParseStage};

/// Elements whose content the tokenizer reads as RCDATA.
const RCDATA_ELEMENTS: [&str; 2] = ["title", "textarea"];

/// Elements whose content the tokenizer reads as RAWTEXT. `script` is
/// included here because script data escaping is not modelled.
const RAWTEXT_ELEMENTS: [&str; 6] = ["style", "script", "xmp", "iframe", "noembed", "noframes"];

// =============================================================================
// State Transition Helpers
// =============================================================================

impl HTMLTokenizer {
    /// "Switch to the X state"
    pub(super) const fn switch_to(&mut self, new_state: TokenizerState) {
        self.state = new_state;
    }

    /// "Reconsume in the X state"
    ///
    /// The same character will be processed again in the new state.
    pub(super) const fn reconsume_in(&mut self, new_state: TokenizerState) {
        self.reconsume = true;
        self.state = new_state;
    }

    /// The state a character reference returns to; data if none was set.
    pub(super) fn take_return_state(&mut self) -> TokenizerState {
        self.return_state.take().unwrap_or(TokenizerState::Data)
    }
}

// =============================================================================
// Input/Character Helpers
// =============================================================================

impl HTMLTokenizer {
    /// "Consume the next input character"
    pub(super) fn consume(&mut self) -> Option<char> {
        let c = self.input[self.current_pos..].chars().next()?;
        self.current_pos += c.len_utf8();
        Some(c)
    }

    /// Byte offset of the current input character (the one the main loop
    /// last consumed), or of the end of input at EOF.
    pub(super) fn current_char_start(&self) -> usize {
        self.current_input_character
            .map_or(self.current_pos, |c| self.current_pos - c.len_utf8())
    }

    /// The input starting at the current input character.
    pub(super) fn remaining_from_current(&self) -> &str {
        &self.input[self.current_char_start()..]
    }

    /// "If the next few characters are..."
    ///
    /// Lookahead starts at the current input character.
    pub(super) fn next_few_characters_are(&self, target: &str, ascii_case_insensitive: bool) -> bool {
        self.remaining_from_current()
            .get(..target.len())
            .is_some_and(|s| {
                if ascii_case_insensitive {
                    s.eq_ignore_ascii_case(target)
                } else {
                    s == target
                }
            })
    }

    /// "Consume those characters": move past an ASCII string matched by
    /// [`Self::next_few_characters_are`].
    pub(super) fn consume_matched(&mut self, target: &str) {
        self.current_pos = self.current_char_start() + target.len();
        self.current_input_character = target.chars().last();
    }

    /// ASCII whitespace as the tokenizer sees it: tab, LF, FF, space.
    pub(super) const fn is_whitespace_char(c: char) -> bool {
        matches!(c, '\t' | '\n' | '\u{000C}' | ' ')
    }
}

// =============================================================================
// Token Emission
// =============================================================================

impl HTMLTokenizer {
    /// "Emit the current token"
    ///
    /// NOTE: In the HTML standard the tree builder switches the tokenizer into RCDATA or
    /// RAWTEXT. Since we run the tokenizer before the parser, we detect those
    /// elements here and switch states accordingly.
    pub(super) fn emit_token(&mut self) {
        self.drop_duplicate_attribute();
        let Some(token) = self.current_token.take() else {
            return;
        };
        match &token {
            Token::StartTag { name, .. } => {
                self.last_start_tag_name = Some(name.clone());
                if RCDATA_ELEMENTS.contains(&name.as_str()) {
                    self.raw_text_state = TokenizerState::RCDATA;
                    self.switch_to(TokenizerState::RCDATA);
                } else if RAWTEXT_ELEMENTS.contains(&name.as_str()) {
                    self.raw_text_state = TokenizerState::RAWTEXT;
                    self.switch_to(TokenizerState::RAWTEXT);
                }
            }
            Token::EndTag { attributes, .. } if !attributes.is_empty() => {
                self.log_parse_error("end-tag-with-attributes");
            }
            _ => {}
        }
        self.token_stream.push(token);
    }

    /// "Emit the current input character as a character token."
    pub(super) fn emit_character_token(&mut self, c: char) {
        self.token_stream.push(Token::Character { data: c });
    }

    /// "Emit an end-of-file token."
    pub(super) fn emit_eof_token(&mut self) {
        self.token_stream.push(Token::EndOfFile);
        self.at_eof = true;
    }

    /// "Create a new DOCTYPE token. Set its force-quirks flag to on. Emit the
    /// current token." Also used when a DOCTYPE token is already under way.
    pub(super) fn emit_quirks_doctype(&mut self) {
        let mut token = self.current_token.take().unwrap_or_else(Token::new_doctype);
        token.set_force_quirks();
        self.token_stream.push(token);
    }

    pub(super) fn append_to_tag_name(&mut self, c: char) {
        if let Some(ref mut token) = self.current_token {
            token.append_to_tag_name(c);
        }
    }

    pub(super) fn append_to_comment(&mut self, c: char) {
        if let Some(ref mut token) = self.current_token {
            token.append_to_comment(c);
        }
    }
}

// =============================================================================
// RCDATA/RAWTEXT Helpers
// =============================================================================

impl HTMLTokenizer {
    /// [§ 13.2.5.11 RCDATA end tag name state](https://html.spec.whatwg.org/multipage/parsing.html#rcdata-end-tag-name-state)
    ///
    /// "An appropriate end tag token is an end tag token whose tag name matches
    /// the tag name of the last start tag to have been emitted from this
    /// tokenizer, if any."
    pub(super) fn is_appropriate_end_tag_token(&self) -> bool {
        match (&self.current_token, &self.last_start_tag_name) {
            (Some(Token::EndTag { name, .. }), Some(last)) => name == last,
            _ => false,
        }
    }

    /// The "anything else" branch of the RCDATA/RAWTEXT end tag name states.
    pub(super) fn emit_raw_text_end_tag_name_anything_else(&mut self) {
        self.current_token = None;
        self.emit_character_token('<');
        self.emit_character_token('/');
        let buffer = std::mem::take(&mut self.temporary_buffer);
        for c in buffer.chars() {
            self.emit_character_token(c);
        }
        self.reconsume_in(self.raw_text_state);
    }
}

// =============================================================================
// Attribute Helpers
// =============================================================================

impl HTMLTokenizer {
    /// "Start a new attribute in the current tag token."
    pub(super) fn start_new_attribute(&mut self) {
        self.drop_duplicate_attribute();
        if let Some(ref mut token) = self.current_token {
            token.start_new_attribute();
        }
    }

    pub(super) fn append_to_attribute_name(&mut self, c: char) {
        if let Some(ref mut token) = self.current_token {
            token.append_to_current_attribute_name(c);
        }
    }

    pub(super) fn append_to_attribute_value(&mut self, c: char) {
        if let Some(ref mut token) = self.current_token {
            token.append_to_current_attribute_value(c);
        }
    }

    /// [§ 13.2.5.33 Attribute name state](https://html.spec.whatwg.org/multipage/parsing.html#attribute-name-state)
    ///
    /// "When the user agent leaves the attribute name state (and before
    /// emitting the tag token, if appropriate), the complete attribute's name
    /// must be compared to the other attributes on the same token; if there is
    /// already an attribute on the token with the exact same name, then this
    /// is a duplicate-attribute parse error and the new attribute must be
    /// removed from the token."
    ///
    /// The attribute is only flagged here. It is removed once its value has
    /// been read, so the value cannot leak into the earlier attribute.
    pub(super) fn check_duplicate_attribute(&mut self) {
        let is_duplicate = self
            .current_token
            .as_ref()
            .is_some_and(Token::current_attribute_name_is_duplicate);
        if is_duplicate {
            self.log_parse_error("duplicate-attribute");
            self.current_attribute_is_duplicate = true;
        }
    }

    fn drop_duplicate_attribute(&mut self) {
        if self.current_attribute_is_duplicate {
            self.current_attribute_is_duplicate = false;
            if let Some(ref mut token) = self.current_token {
                token.remove_current_attribute();
            }
        }
    }
}

// =============================================================================
// Error Handling
// =============================================================================

impl HTMLTokenizer {
    /// [§ 13.2.2 Parse errors](https://html.spec.whatwg.org/multipage/parsing.html#parse-errors)
    pub(super) fn log_parse_error(&mut self, code: &str) {
        let position = self.current_char_start();
        let stage = ParseStage::Tokenizer;
        warn_once(&stage.to_string(), &format!("{code} at position {position}"));
        self.issues.push(ParseIssue {
            stage,
            message: code.to_string(),
            position,
        });
    }
}
