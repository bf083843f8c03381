//! Inline element handlers for text-level elements.
//!
//! The span elements (command, code, filename, literal, phrase,
//! systemitem) are leaves in a glossary: they render their own direct
//! text only and never descend into children.

use crate::config::{known_link, XLINK_NS};
use crate::error::{GlossaryError, Result};
use crate::registry::handler::{ElementHandler, RecurseFn};
use crate::registry::types::{ConvertContext, ElementType};
use crate::xml::Element;

/// Direct text of a leaf span, empty when absent.
fn direct_text(element: Element<'_, '_>) -> String {
    element.text().unwrap_or_default()
}

/// Handler for `<command>` elements.
///
/// Renders as the `:command:` role.
pub struct CommandHandler;

impl ElementHandler for CommandHandler {
    fn element_type(&self) -> ElementType {
        ElementType::Inline
    }

    fn handle<'a, 'input>(
        &self,
        element: Element<'a, 'input>,
        _context: &mut ConvertContext,
        _recurse: &RecurseFn<'a, 'input>,
    ) -> Result<String> {
        Ok(format!(":command:`{}`", direct_text(element)))
    }
}

/// Handler for `<filename>` elements.
///
/// Renders as the `:file:` role.
pub struct FilenameHandler;

impl ElementHandler for FilenameHandler {
    fn element_type(&self) -> ElementType {
        ElementType::Inline
    }

    fn handle<'a, 'input>(
        &self,
        element: Element<'a, 'input>,
        _context: &mut ConvertContext,
        _recurse: &RecurseFn<'a, 'input>,
    ) -> Result<String> {
        Ok(format!(":file:`{}`", direct_text(element)))
    }
}

/// Handler for `<code>` and `<literal>` elements.
///
/// Renders the text between single backticks.
pub struct LiteralHandler;

impl ElementHandler for LiteralHandler {
    fn element_type(&self) -> ElementType {
        ElementType::Inline
    }

    fn handle<'a, 'input>(
        &self,
        element: Element<'a, 'input>,
        _context: &mut ConvertContext,
        _recurse: &RecurseFn<'a, 'input>,
    ) -> Result<String> {
        Ok(format!("`{}`", direct_text(element)))
    }
}

/// Handler for `<phrase>` and `<systemitem>` elements.
pub struct PhraseHandler;

impl ElementHandler for PhraseHandler {
    fn element_type(&self) -> ElementType {
        ElementType::Inline
    }

    fn handle<'a, 'input>(
        &self,
        element: Element<'a, 'input>,
        _context: &mut ConvertContext,
        _recurse: &RecurseFn<'a, 'input>,
    ) -> Result<String> {
        Ok(direct_text(element))
    }
}

/// Handler for `<link>` elements.
///
/// Only targets with a known rendering are accepted; any other
/// `xlink:href` is an `UnsupportedLink` error.
pub struct LinkHandler;

impl ElementHandler for LinkHandler {
    fn element_type(&self) -> ElementType {
        ElementType::Inline
    }

    fn handle<'a, 'input>(
        &self,
        element: Element<'a, 'input>,
        _context: &mut ConvertContext,
        _recurse: &RecurseFn<'a, 'input>,
    ) -> Result<String> {
        let href = element
            .attribute(Some(XLINK_NS), "href")
            .ok_or_else(|| GlossaryError::MissingAttribute {
                attribute: "xlink:href".to_string(),
                element: element.tag_name().into_owned(),
            })?
            .trim_start();

        known_link(href)
            .map(str::to_string)
            .ok_or_else(|| GlossaryError::UnsupportedLink {
                href: href.to_string(),
            })
    }
}
