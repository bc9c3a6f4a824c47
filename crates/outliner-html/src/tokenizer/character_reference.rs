//! Character reference handling for the HTML tokenizer.
//!
//! [§ 13.2.5.72 Character reference state](https://html.spec.whatwg.org/multipage/parsing.html#character-reference-state)
//!
//! Names missing from the table pass through as literal text.

use super::core::{HTMLTokenizer, TokenizerState};
use super::named_character_references::longest_match;

impl HTMLTokenizer {
    /// [§ 13.2.5.72 Character reference state](https://html.spec.whatwg.org/multipage/parsing.html#character-reference-state)
    ///
    /// "Set the temporary buffer to the empty string. Append a U+0026
    /// AMPERSAND (&) character to the temporary buffer."
    pub(super) fn handle_character_reference_state(&mut self) {
        self.temporary_buffer.clear();
        self.temporary_buffer.push('&');
        match self.current_input_character {
            Some('#') => self.consume_numeric_character_reference(),
            Some(c) if c.is_ascii_alphanumeric() => self.consume_named_character_reference(),
            // "Anything else: Flush code points consumed as a character
            // reference. Reconsume in the return state."
            _ => {
                self.flush_code_points_consumed_as_character_reference();
                let return_state = self.take_return_state();
                self.reconsume_in(return_state);
            }
        }
    }

    /// [§ 13.2.5.73 Named character reference state](https://html.spec.whatwg.org/multipage/parsing.html#named-character-reference-state)
    fn consume_named_character_reference(&mut self) {
        let rest = self.remaining_from_current();
        let Some((name, replacement)) = longest_match(rest) else {
            // [§ 13.2.5.74 Ambiguous ampersand state](https://html.spec.whatwg.org/multipage/parsing.html#ambiguous-ampersand-state)
            // The alphanumerics are re-read as ordinary text.
            self.flush_code_points_consumed_as_character_reference();
            let return_state = self.take_return_state();
            self.reconsume_in(return_state);
            return;
        };

        // "If the character reference was consumed as part of an attribute,
        // and the last character matched is not a U+003B SEMICOLON character
        // (;), and the next input character is either a U+003D EQUALS SIGN
        // character (=) or an ASCII alphanumeric, then, for historical
        // reasons, flush code points consumed as a character reference and
        // switch to the return state."
        let next = rest[name.len()..].chars().next();
        let historical = self.is_consumed_as_part_of_attribute()
            && !name.ends_with(';')
            && next.is_some_and(|c| c == '=' || c.is_ascii_alphanumeric());

        if historical {
            self.temporary_buffer.push_str(name);
        } else {
            if !name.ends_with(';') {
                self.log_parse_error("missing-semicolon-after-character-reference");
            }
            self.temporary_buffer.clear();
            self.temporary_buffer.push_str(replacement);
        }
        self.consume_matched(name);
        self.flush_code_points_consumed_as_character_reference();
        let return_state = self.take_return_state();
        self.switch_to(return_state);
    }

    /// [§ 13.2.5.75 Numeric character reference state](https://html.spec.whatwg.org/multipage/parsing.html#numeric-character-reference-state)
    /// through [§ 13.2.5.80 Numeric character reference end state](https://html.spec.whatwg.org/multipage/parsing.html#numeric-character-reference-end-state).
    fn consume_numeric_character_reference(&mut self) {
        let rest = self.remaining_from_current();
        let after_hash = &rest[1..];
        let (radix, prefix_len) = if after_hash.starts_with(['x', 'X']) {
            (16, 2)
        } else {
            (10, 1)
        };
        let digits: String = rest[prefix_len..]
            .chars()
            .take_while(|c| c.is_digit(radix))
            .collect();

        if digits.is_empty() {
            // "This is an absence-of-digits-in-numeric-character-reference
            // parse error. Flush code points consumed as a character
            // reference. Reconsume in the return state."
            self.log_parse_error("absence-of-digits-in-numeric-character-reference");
            self.flush_code_points_consumed_as_character_reference();
            let return_state = self.take_return_state();
            self.reconsume_in(return_state);
            return;
        }

        let has_semicolon = rest[prefix_len + digits.len()..].starts_with(';');
        let consumed_len = prefix_len + digits.len() + usize::from(has_semicolon);
        let consumed = rest[..consumed_len].to_string();
        if !has_semicolon {
            self.log_parse_error("missing-semicolon-after-character-reference");
        }

        // "If the number is 0x00 ... greater than 0x10FFFF ... a surrogate"
        // the code point becomes U+FFFD REPLACEMENT CHARACTER.
        let code_point = u32::from_str_radix(&digits, radix).ok();
        let c = match code_point {
            Some(0) | None => {
                self.log_parse_error("null-or-out-of-range-character-reference");
                '\u{FFFD}'
            }
            Some(value) => char::from_u32(value).unwrap_or_else(|| {
                self.log_parse_error("invalid-character-reference");
                '\u{FFFD}'
            }),
        };

        self.temporary_buffer.clear();
        self.temporary_buffer.push(c);
        self.consume_matched(&consumed);
        self.flush_code_points_consumed_as_character_reference();
        let return_state = self.take_return_state();
        self.switch_to(return_state);
    }

    /// Returns true if the return state is an attribute value state.
    /// "consumed as part of an attribute"
    const fn is_consumed_as_part_of_attribute(&self) -> bool {
        matches!(
            self.return_state,
            Some(
                TokenizerState::AttributeValueDoubleQuoted
                    | TokenizerState::AttributeValueSingleQuoted
                    | TokenizerState::AttributeValueUnquoted
            )
        )
    }

    /// "Flush code points consumed as a character reference"
    ///
    /// "If the character reference was consumed as part of an attribute,
    /// then append each character to the current attribute's value. Otherwise,
    /// emit each character as a character token."
    fn flush_code_points_consumed_as_character_reference(&mut self) {
        let buffer = std::mem::take(&mut self.temporary_buffer);
        if self.is_consumed_as_part_of_attribute() {
            for c in buffer.chars() {
                self.append_to_attribute_value(c);
            }
        } else {
            for c in buffer.chars() {
                self.emit_character_token(c);
            }
        }
    }
}
