//! Outline configuration.
//!
//! Every field has a default, so a JSON file only needs the keys it changes:
//!
//! ```json
//! { "container_id": "toc", "list_style": "ul", "title": null }
//! ```

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::anchors::DEFAULT_ID_PREFIX;
use crate::builder::NestingPolicy;
use crate::headings::SearchStrategy;
use crate::render::ListStyle;

/// Errors raised while loading options.
#[derive(Debug, Error)]
pub enum OptionsError {
    /// The file could not be read.
    #[error("failed to read {}", .path.display())]
    Io {
        /// The file that was read.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: io::Error,
    },
    /// The contents are not valid options JSON.
    #[error("invalid options: {0}")]
    Json(#[from] serde_json::Error),
}

/// Where to read headings from, where to put the outline, and how to shape it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutlineOptions {
    /// `id` of the element whose headings are outlined.
    pub source_id: String,
    /// `id` of the element the outline is appended to.
    pub container_id: String,
    /// Text of the `h1` placed above the list; `None` for no title.
    pub title: Option<String>,
    /// `ol` or `ul`.
    pub list_style: ListStyle,
    /// Prefix for generated heading ids.
    pub id_prefix: String,
    /// Direct children only, or the whole subtree.
    pub search: SearchStrategy,
    /// Behaviour when a heading climbs past the top level.
    pub nesting: NestingPolicy,
}

impl Default for OutlineOptions {
    fn default() -> Self {
        Self {
            source_id: "doc".to_string(),
            container_id: "outline".to_string(),
            title: Some("Outline".to_string()),
            list_style: ListStyle::default(),
            id_prefix: DEFAULT_ID_PREFIX.to_string(),
            search: SearchStrategy::default(),
            nesting: NestingPolicy::default(),
        }
    }
}

impl OutlineOptions {
    /// Parse options from JSON. Missing keys keep their defaults.
    ///
    /// # Errors
    ///
    /// [`OptionsError::Json`] for malformed JSON, unknown keys or bad values.
    pub fn from_json(json: &str) -> Result<Self, OptionsError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read options from a JSON file.
    ///
    /// # Errors
    ///
    /// [`OptionsError::Io`] if the file cannot be read, otherwise as
    /// [`Self::from_json`].
    pub fn load(path: &Path) -> Result<Self, OptionsError> {
        let json = fs::read_to_string(path).map_err(|source| OptionsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }
}
