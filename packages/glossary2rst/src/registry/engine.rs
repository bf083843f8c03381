//! Conversion engine that dispatches elements through the registry.

use super::core::ElementRegistry;
use super::types::ConvertContext;
use crate::error::{GlossaryError, Result};
use crate::xml::Element;

/// Longest text snippet quoted in an unsupported-element error.
const SNIPPET_LEN: usize = 60;

/// Engine that walks the element tree and renders it as RST.
///
/// Every element is dispatched to its registered handler. Skipped tags
/// render as nothing; any other tag is an `UnsupportedElement` error that
/// aborts the whole conversion.
pub struct ConvertEngine {
    registry: ElementRegistry,
}

impl ConvertEngine {
    /// Create a new engine with the given registry.
    #[must_use]
    pub fn new(registry: ElementRegistry) -> Self {
        Self { registry }
    }

    /// Convert an element tree recursively.
    ///
    /// # Arguments
    /// * `element` - The element to convert
    /// * `context` - State of the current conversion run
    ///
    /// # Errors
    /// Returns `UnsupportedElement` for a tag that is neither handled nor
    /// skipped, and any error raised by a handler in the subtree.
    pub fn convert(&self, element: Element<'_, '_>, context: &mut ConvertContext) -> Result<String> {
        let tag_name = element.tag_name();

        if self.registry.should_skip(&tag_name) {
            tracing::trace!(tag = %tag_name, "Skipping element");
            return Ok(String::new());
        }

        if let Some(handler) = self.registry.get_handler(&tag_name) {
            tracing::trace!(tag = %tag_name, kind = ?handler.element_type(), "Converting element");
            let recurse = |child: Element<'_, '_>, ctx: &mut ConvertContext| -> Result<String> {
                self.convert(child, ctx)
            };
            return handler.handle(element, context, &recurse);
        }

        Err(GlossaryError::UnsupportedElement {
            tag_name: tag_name.into_owned(),
            text: element.text().as_deref().and_then(snippet),
            context: element.parent().map(|p| format!("<{}>", p.tag_name())),
        })
    }
}

/// Shorten text for diagnostics; `None` for whitespace-only text.
fn snippet(text: &str) -> Option<String> {
    let text = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if text.is_empty() {
        return None;
    }
    if text.chars().count() > SNIPPET_LEN {
        let short: String = text.chars().take(SNIPPET_LEN).collect();
        return Some(format!("{short}..."));
    }
    Some(text)
}
