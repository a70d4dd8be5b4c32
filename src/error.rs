//! Structured error types for the Folio layout engine.
//!
//! Layout and pagination never fail. The two real error sources are
//! JSON input (the record or the configuration) and writing the artifact.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// The unified error type returned by the fallible public Folio API.
#[derive(Debug, Error)]
pub enum FolioError {
    /// JSON input failed to parse as a CV record or layout configuration.
    #[error("Failed to parse input: {source}{}", format_hint(.hint))]
    Parse {
        #[source]
        source: serde_json::Error,
        hint: String,
    },
    /// Laid-out pages could not be written out as JSON.
    #[error("Failed to serialize layout: {source}")]
    Serialize {
        #[source]
        source: serde_json::Error,
    },
    /// The destination could not be created, written, or persisted.
    #[error("Failed to write {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

fn format_hint(hint: &str) -> String {
    if hint.is_empty() {
        String::new()
    } else {
        format!("\n  Hint: {}", hint)
    }
}

impl FolioError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        FolioError::Io {
            path: path.into(),
            source,
        }
    }
}

impl FolioError {
    pub fn serialize(source: serde_json::Error) -> Self {
        FolioError::Serialize { source }
    }
}

impl From<serde_json::Error> for FolioError {
    fn from(e: serde_json::Error) -> Self {
        let hint = match e.classify() {
            serde_json::error::Category::Syntax => {
                "Check for trailing commas, missing quotes, or unescaped characters.".to_string()
            }
            serde_json::error::Category::Data => {
                "The JSON is valid but doesn't match the expected schema. Check field names and types.".to_string()
            }
            serde_json::error::Category::Eof => {
                "Unexpected end of input. Is the JSON truncated?".to_string()
            }
            serde_json::error::Category::Io => String::new(),
        };
        FolioError::Parse { source: e, hint }
    }
}
