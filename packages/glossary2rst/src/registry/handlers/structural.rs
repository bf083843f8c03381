//! Structural and block element handlers.
//!
//! These handlers process the glossary skeleton: the glossary itself, its
//! divisions, its entries, and the paragraphs inside definitions.

use crate::config::{DEFINITION_INDENT, GLOSSARY_DIRECTIVE, TERM_INDENT};
use crate::error::{GlossaryError, Result};
use crate::registry::handler::{concat, indent, ElementHandler, RecurseFn};
use crate::registry::types::{ConvertContext, ElementType};
use crate::xml::Element;

/// Handler for `<para>` elements.
///
/// Starts with a blank line so consecutive paragraphs stay separated.
pub struct ParaHandler;

impl ElementHandler for ParaHandler {
    fn element_type(&self) -> ElementType {
        ElementType::Block
    }

    fn handle<'a, 'input>(
        &self,
        element: Element<'a, 'input>,
        context: &mut ConvertContext,
        recurse: &RecurseFn<'a, 'input>,
    ) -> Result<String> {
        Ok(format!("\n\n{}", concat(element, context, recurse)?))
    }
}

/// Handler for the `<glossary>` root element.
pub struct GlossaryHandler;

impl ElementHandler for GlossaryHandler {
    fn element_type(&self) -> ElementType {
        ElementType::Structural
    }

    fn handle<'a, 'input>(
        &self,
        element: Element<'a, 'input>,
        context: &mut ConvertContext,
        recurse: &RecurseFn<'a, 'input>,
    ) -> Result<String> {
        concat(element, context, recurse)
    }
}

/// Handler for `<glossdiv>` (glossary division) elements.
///
/// All divisions render under a single `.. glossary::` directive, emitted
/// in front of the first division of the run.
pub struct GlossDivHandler;

impl ElementHandler for GlossDivHandler {
    fn element_type(&self) -> ElementType {
        ElementType::Structural
    }

    fn handle<'a, 'input>(
        &self,
        element: Element<'a, 'input>,
        context: &mut ConvertContext,
        recurse: &RecurseFn<'a, 'input>,
    ) -> Result<String> {
        context.divisions += 1;

        let mut out = String::new();
        if context.open_glossary() {
            out.push_str(GLOSSARY_DIRECTIVE);
        }
        out.push_str(&concat(element, context, recurse)?);
        Ok(out)
    }
}

/// Handler for `<glossentry>` elements.
///
/// Renders the term indented under the directive and the definition, when
/// present, one level deeper. Children other than `glossterm` and
/// `glossdef` are ignored.
pub struct GlossEntryHandler;

impl GlossEntryHandler {
    /// Find the single child with `tag`, rejecting duplicates.
    fn single_child<'a, 'input>(
        element: Element<'a, 'input>,
        tag: &str,
    ) -> Result<Option<Element<'a, 'input>>> {
        let mut matches = element.find_children(tag);
        let first = matches.next();
        if matches.next().is_some() {
            return Err(GlossaryError::DuplicateElement {
                element: tag.to_string(),
                context: element.tag_name().into_owned(),
            });
        }
        Ok(first)
    }
}

impl ElementHandler for GlossEntryHandler {
    fn element_type(&self) -> ElementType {
        ElementType::Structural
    }

    fn handle<'a, 'input>(
        &self,
        element: Element<'a, 'input>,
        context: &mut ConvertContext,
        recurse: &RecurseFn<'a, 'input>,
    ) -> Result<String> {
        let term = Self::single_child(element, "glossterm")?.ok_or_else(|| {
            GlossaryError::MissingElement {
                element: "glossterm".to_string(),
                context: element.tag_name().into_owned(),
            }
        })?;
        let definition = Self::single_child(element, "glossdef")?;

        context.entries += 1;

        let mut out = String::from("\n");

        let term_text = term
            .text()
            .map(|t| t.trim().to_string())
            .unwrap_or_default();
        if term_text.is_empty() {
            tracing::debug!("Glossary entry without term text");
        } else {
            out.push_str(&" ".repeat(TERM_INDENT));
            out.push_str(&term_text);
            out.push('\n');
        }

        if let Some(definition) = definition {
            out.push_str(&indent(definition, DEFINITION_INDENT, context, recurse)?);
        }

        Ok(out)
    }
}
