//! Parse issues recorded while reading a document.

use strum_macros::Display;

/// Which stage of reading produced an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum ParseStage {
    /// [§ 13.2.5 Tokenization](https://html.spec.whatwg.org/multipage/parsing.html#tokenization)
    #[strum(serialize = "HTML Tokenizer")]
    Tokenizer,
    /// [§ 13.2.6 Tree construction](https://html.spec.whatwg.org/multipage/parsing.html#tree-construction)
    #[strum(serialize = "HTML Parser")]
    TreeBuilder,
}

/// [§ 13.2.2 Parse errors](https://html.spec.whatwg.org/multipage/parsing.html#parse-errors)
///
/// "The handling of parse errors is well-defined": none of these abort
/// reading. They are kept so callers can surface them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseIssue {
    /// The stage that noticed the problem.
    pub stage: ParseStage,
    /// Error code or description, e.g. `duplicate-attribute`.
    pub message: String,
    /// Byte offset into the input for tokenizer issues, token index for
    /// tree builder issues.
    pub position: usize,
}
