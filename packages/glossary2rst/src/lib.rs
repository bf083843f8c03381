//! glossary2rst - Convert a DocBook glossary to reStructuredText.
//!
//! This crate reads a DocBook XML glossary (`glossary`, `glossdiv`,
//! `glossentry`, `glossterm`, `glossdef`, `para` and a handful of inline
//! elements) and renders it as an RST `.. glossary::` block behind a
//! generated-file banner.
//!
//! # Example
//!
//! ```
//! use glossary2rst::GlossaryConverter;
//!
//! let xml = r#"<glossary xmlns="http://docbook.org/ns/docbook">
//!   <glossdiv>
//!     <glossentry>
//!       <glossterm>API</glossterm>
//!       <glossdef><para>Application programming interface.</para></glossdef>
//!     </glossentry>
//!   </glossdiv>
//! </glossary>"#;
//!
//! let rst = GlossaryConverter::new().convert_str(xml).unwrap();
//! assert!(rst.contains(".. glossary::"));
//! assert!(rst.contains("   API\n\n      Application programming interface."));
//! ```
//!
//! # Architecture
//!
//! - [`config`]: Namespaces, indent widths, the supported link and the banner
//! - [`error`]: Error types and Result alias
//! - [`xml`]: Typed element view over the parsed document
//! - [`text`]: Indentation and blank-line helpers
//! - [`registry`]: Tag dispatch and element handlers
//! - [`converter`]: Document assembly
//! - [`output`]: Writing the rendered document
//! - [`cli`]: Command-line interface

pub mod cli;
pub mod config;
pub mod converter;
pub mod error;
pub mod output;
pub mod registry;
pub mod text;
pub mod xml;

pub use converter::{render_document, GlossaryConverter, ParseMode, Rendered};
pub use error::{GlossaryError, Result};
pub use xml::Element;
