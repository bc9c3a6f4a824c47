//! HTML tokenizer module.
//!
//! Implements the parts of [§ 13.2.5 Tokenization](https://html.spec.whatwg.org/multipage/parsing.html#tokenization)
//! needed to read ordinary documents faithfully.

/// Character reference parsing per § 13.2.5.72.
pub mod character_reference;
/// HTML tokenizer state machine implementation.
pub mod core;
/// Helper methods for tokenizer state transitions.
pub mod helpers;
/// The named character reference table.
pub mod named_character_references;
/// Token types produced by the tokenizer.
pub mod token;

pub use self::core::{HTMLTokenizer, TokenizerState};
pub use token::{Attribute, Token};
