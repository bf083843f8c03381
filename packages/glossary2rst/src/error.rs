//! Error types for the glossary converter.
//!
//! Every condition that would otherwise produce an incomplete glossary is an
//! error: the converter rejects unknown markup rather than dropping it.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the glossary converter.
#[derive(Debug, Error)]
pub enum GlossaryError {
    /// Element with no handler that is not in the skip set.
    #[error(
        "Tag <{tag_name}> not handled{}{}",
        .context.as_ref().map(|c| format!(" in {c}")).unwrap_or_default(),
        .text.as_ref().map(|t| format!(" (text: {t:?})")).unwrap_or_default()
    )]
    UnsupportedElement {
        tag_name: String,
        text: Option<String>,
        context: Option<String>,
    },

    /// Link whose target has no known rendering.
    #[error("Link not handled: {href}")]
    UnsupportedLink { href: String },

    /// Required attribute is absent.
    #[error("Missing attribute {attribute} on <{element}>")]
    MissingAttribute { attribute: String, element: String },

    /// Required child element is absent.
    #[error("Missing required element <{element}> in <{context}>")]
    MissingElement { element: String, context: String },

    /// Child element that may appear at most once appears again.
    #[error("Duplicate element <{element}> in <{context}>")]
    DuplicateElement { element: String, context: String },

    /// XML parsing failed.
    #[error("XML parsing failed: {0}")]
    XmlParse(#[from] roxmltree::Error),

    /// Failed to read the input document.
    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write the rendered document.
    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for converter operations.
pub type Result<T> = std::result::Result<T, GlossaryError>;
