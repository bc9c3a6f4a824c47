use core::fmt;

/// An attribute on a start or end tag token.
///
/// Per [§ 13.2.5 Tokenization](https://html.spec.whatwg.org/multipage/parsing.html#tokenization):
/// "a list of attributes, each of which has a name and a value"
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    /// "each of which has a name"
    pub name: String,
    /// "and a value"
    pub value: String,
}

impl Attribute {
    /// Create a new attribute with the given name and value.
    #[must_use]
    pub const fn new(name: String, value: String) -> Self {
        Self { name, value }
    }
}

/// [§ 13.2.5 Tokenization](https://html.spec.whatwg.org/multipage/parsing.html#tokenization)
///
/// "The output of the tokenization step is a series of zero or more of the following
/// tokens: DOCTYPE, start tag, end tag, comment, character, end-of-file."
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// "DOCTYPE tokens have a name, a public identifier, a system identifier,
    /// and a force-quirks flag."
    ///
    /// Public and system identifiers are skipped, not stored: the serializer
    /// only ever writes `<!DOCTYPE name>`.
    Doctype {
        /// "a name"
        name: Option<String>,
        /// "a force-quirks flag"
        force_quirks: bool,
    },

    /// "Start and end tag tokens have a tag name, a self-closing flag, and a
    /// list of attributes"
    StartTag {
        /// "a tag name"
        name: String,
        /// "a self-closing flag"
        self_closing: bool,
        /// "a list of attributes"
        attributes: Vec<Attribute>,
    },

    /// End tag token. Attributes are parsed but ignored by the tree builder.
    EndTag {
        /// "a tag name"
        name: String,
        /// "a list of attributes"
        attributes: Vec<Attribute>,
    },

    /// "Comment and character tokens have data."
    Comment {
        /// "data"
        data: String,
    },

    /// "Comment and character tokens have data."
    Character {
        /// "data"
        data: char,
    },

    /// End-of-file token signals the end of input.
    EndOfFile,
}

impl Token {
    /// "When a DOCTYPE token is created, its name ... must be marked as missing
    /// ... and the force-quirks flag must be set to off."
    #[must_use]
    pub const fn new_doctype() -> Self {
        Self::Doctype {
            name: None,
            force_quirks: false,
        }
    }

    /// "When a start or end tag token is created, its self-closing flag must be
    /// unset ... and its attributes list must be empty."
    #[must_use]
    pub const fn new_start_tag() -> Self {
        Self::StartTag {
            name: String::new(),
            self_closing: false,
            attributes: Vec::new(),
        }
    }

    /// Create a new end tag token.
    #[must_use]
    pub const fn new_end_tag() -> Self {
        Self::EndTag {
            name: String::new(),
            attributes: Vec::new(),
        }
    }

    /// Create a new comment token with empty data.
    #[must_use]
    pub const fn new_comment() -> Self {
        Self::Comment {
            data: String::new(),
        }
    }

    /// Returns true if this is an end-of-file token.
    #[must_use]
    pub const fn is_eof(&self) -> bool {
        matches!(self, Self::EndOfFile)
    }

    /// The tag name of a start or end tag token.
    #[must_use]
    pub fn tag_name(&self) -> Option<&str> {
        match self {
            Self::StartTag { name, .. } | Self::EndTag { name, .. } => Some(name),
            _ => None,
        }
    }

    // The mutation helpers below are only meaningful on the variant named in
    // their section; on any other variant they do nothing.

    /// [§ 13.2.5.55 DOCTYPE name state](https://html.spec.whatwg.org/multipage/parsing.html#doctype-name-state)
    ///
    /// "Append the current input character to the current DOCTYPE token's name."
    pub fn append_to_doctype_name(&mut self, c: char) {
        if let Self::Doctype { name, .. } = self {
            name.get_or_insert_with(String::new).push(c);
        }
    }

    /// "Set the current DOCTYPE token's force-quirks flag to on."
    pub const fn set_force_quirks(&mut self) {
        if let Self::Doctype { force_quirks, .. } = self {
            *force_quirks = true;
        }
    }

    /// [§ 13.2.5.8 Tag name state](https://html.spec.whatwg.org/multipage/parsing.html#tag-name-state)
    ///
    /// "Append the current input character to the current tag token's tag name."
    pub fn append_to_tag_name(&mut self, c: char) {
        if let Self::StartTag { name, .. } | Self::EndTag { name, .. } = self {
            name.push(c);
        }
    }

    /// [§ 13.2.5.40 Self-closing start tag state](https://html.spec.whatwg.org/multipage/parsing.html#self-closing-start-tag-state)
    ///
    /// "Set the self-closing flag of the current tag token."
    pub const fn set_self_closing(&mut self) {
        if let Self::StartTag { self_closing, .. } = self {
            *self_closing = true;
        }
    }

    /// [§ 13.2.5.32 Before attribute name state](https://html.spec.whatwg.org/multipage/parsing.html#before-attribute-name-state)
    ///
    /// "Start a new attribute in the current tag token. Set that attribute
    /// name and value to the empty string."
    pub fn start_new_attribute(&mut self) {
        if let Self::StartTag { attributes, .. } | Self::EndTag { attributes, .. } = self {
            attributes.push(Attribute::new(String::new(), String::new()));
        }
    }

    /// [§ 13.2.5.33 Attribute name state](https://html.spec.whatwg.org/multipage/parsing.html#attribute-name-state)
    ///
    /// "Append the current input character to the current attribute's name."
    pub fn append_to_current_attribute_name(&mut self, c: char) {
        if let Self::StartTag { attributes, .. } | Self::EndTag { attributes, .. } = self
            && let Some(attr) = attributes.last_mut()
        {
            attr.name.push(c);
        }
    }

    /// [§ 13.2.5.36 Attribute value (double-quoted) state](https://html.spec.whatwg.org/multipage/parsing.html#attribute-value-(double-quoted)-state)
    ///
    /// "Append the current input character to the current attribute's value."
    pub fn append_to_current_attribute_value(&mut self, c: char) {
        if let Self::StartTag { attributes, .. } | Self::EndTag { attributes, .. } = self
            && let Some(attr) = attributes.last_mut()
        {
            attr.value.push(c);
        }
    }

    /// [§ 13.2.5.33 Attribute name state](https://html.spec.whatwg.org/multipage/parsing.html#attribute-name-state)
    ///
    /// "When the user agent leaves the attribute name state ... if there is
    /// already an attribute on the token with the exact same name, then this
    /// is a duplicate-attribute parse error"
    #[must_use]
    pub fn current_attribute_name_is_duplicate(&self) -> bool {
        match self {
            Self::StartTag { attributes, .. } | Self::EndTag { attributes, .. } => {
                attributes.split_last().is_some_and(|(current, rest)| {
                    rest.iter().any(|attr| attr.name == current.name)
                })
            }
            _ => false,
        }
    }

    /// Remove the current (last) attribute from the token.
    /// Used when a duplicate attribute is detected.
    pub fn remove_current_attribute(&mut self) {
        if let Self::StartTag { attributes, .. } | Self::EndTag { attributes, .. } = self {
            let _ = attributes.pop();
        }
    }

    /// Append a character to a comment token's data.
    pub fn append_to_comment(&mut self, c: char) {
        if let Self::Comment { data } = self {
            data.push(c);
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Doctype { name, force_quirks } => {
                write!(f, "DOCTYPE {}", name.as_deref().unwrap_or("(missing)"))?;
                if *force_quirks {
                    write!(f, " (force-quirks)")?;
                }
                Ok(())
            }
            Self::StartTag {
                name,
                self_closing,
                attributes,
            } => {
                write!(f, "StartTag <{name}")?;
                for attr in attributes {
                    write!(f, " {}=\"{}\"", attr.name, attr.value)?;
                }
                if *self_closing {
                    write!(f, " /")?;
                }
                write!(f, ">")
            }
            Self::EndTag { name, .. } => write!(f, "EndTag </{name}>"),
            Self::Comment { data } => write!(f, "Comment <!--{data}-->"),
            Self::Character { data } => write!(f, "Character {data:?}"),
            Self::EndOfFile => write!(f, "EOF"),
        }
    }
}
