//! Document assembly: parse, convert, normalize and add the banner.

use std::fs;
use std::path::Path;

use crate::config::banner;
use crate::error::{GlossaryError, Result};
use crate::registry::{create_docbook_registry, ConvertContext, ConvertEngine};
use crate::text::collapse_blank_lines;
use crate::xml::{parse_document, Element};

/// How malformed input XML is treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParseMode {
    /// Log a warning and render an empty glossary.
    #[default]
    Lenient,
    /// Fail with `XmlParse`.
    Strict,
}

/// A rendered RST document and the non-fatal problems met on the way.
#[derive(Debug, Clone, Default)]
pub struct Rendered {
    /// The complete RST document, banner included.
    pub content: String,

    /// Warnings for the user, e.g. malformed XML in lenient mode.
    pub warnings: Vec<String>,
}

/// Converter from DocBook glossaries to RST.
///
/// Each conversion runs with its own [`ConvertContext`], so one converter
/// can render any number of documents.
pub struct GlossaryConverter {
    engine: ConvertEngine,
}

impl GlossaryConverter {
    /// Create a converter for the DocBook glossary tag set.
    #[must_use]
    pub fn new() -> Self {
        Self::with_engine(ConvertEngine::new(create_docbook_registry()))
    }

    /// Create a converter around a custom engine.
    #[must_use]
    pub fn with_engine(engine: ConvertEngine) -> Self {
        Self { engine }
    }

    /// Convert a document root to the RST body, without the banner.
    ///
    /// Runs of blank lines are collapsed to a single blank line.
    ///
    /// # Errors
    /// Returns the first unsupported element, unsupported link or malformed
    /// glossary entry found in the tree.
    pub fn convert_element(&self, root: Element<'_, '_>) -> Result<String> {
        let root_tag = root.tag_name();
        if root_tag != "glossary" {
            tracing::warn!(root = %root_tag, "Document root is not a glossary");
        }

        let mut context = ConvertContext::new();
        let body = self.engine.convert(root, &mut context)?;

        tracing::info!(
            divisions = context.divisions,
            entries = context.entries,
            "Converted glossary"
        );

        Ok(collapse_blank_lines(&body))
    }

    /// Parse and convert an XML string to the RST body, without the banner.
    ///
    /// # Errors
    /// Returns `XmlParse` for malformed XML, otherwise as
    /// [`convert_element`](Self::convert_element).
    pub fn convert_str(&self, xml: &str) -> Result<String> {
        let doc = parse_document(xml)?;
        self.convert_element(Element::root(&doc))
    }

    /// Render a complete RST document from an XML string.
    ///
    /// # Arguments
    /// * `xml` - DocBook glossary source
    /// * `source` - Name of the master file, shown in the banner and in warnings
    /// * `mode` - Treatment of malformed XML
    ///
    /// In lenient mode malformed XML renders the banner only and is reported
    /// in [`Rendered::warnings`].
    pub fn render(&self, xml: &str, source: &str, mode: ParseMode) -> Result<Rendered> {
        let mut warnings = Vec::new();
        let body = match self.convert_str(xml) {
            Ok(body) => body,
            Err(GlossaryError::XmlParse(e)) if mode == ParseMode::Lenient => {
                tracing::debug!(error = %e, "Rendering empty glossary for malformed XML");
                warnings.push(format!("file {source} is invalid XML: {e}"));
                String::new()
            }
            Err(e) => return Err(e),
        };
        Ok(Rendered {
            content: render_document(&body, source),
            warnings,
        })
    }

    /// Read a DocBook glossary from disk and render a complete RST document.
    pub fn render_file(&self, path: &Path, mode: ParseMode) -> Result<Rendered> {
        let xml = fs::read_to_string(path).map_err(|source| GlossaryError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        self.render(&xml, &path.display().to_string(), mode)
    }
}

impl Default for GlossaryConverter {
    fn default() -> Self {
        Self::new()
    }
}

/// Put the generated-file banner in front of a converted body.
///
/// The body is separated from the banner by one blank line and the
/// document ends with a single newline.
///
/// # Examples
/// ```
/// use glossary2rst::render_document;
///
/// let doc = render_document("\n\n.. glossary::\n\n   API\n", "glossary.xml");
/// assert!(doc.starts_with("========\nGlossary\n========\n"));
/// assert!(doc.ends_with("glossary.xml to update it.\n\n.. glossary::\n\n   API\n"));
/// ```
pub fn render_document(body: &str, source: &str) -> String {
    let banner = banner(source);
    let body = body.trim_start_matches('\n').trim_end();
    if body.is_empty() {
        banner
    } else {
        format!("{banner}\n{body}\n")
    }
}
