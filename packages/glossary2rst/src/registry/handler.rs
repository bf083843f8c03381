//! Element handler trait and the shared text extraction helpers.

use super::types::{ConvertContext, ElementType};
use crate::error::Result;
use crate::text::{indent_lines, remove_indent};
use crate::xml::Element;

/// Function type for recursive conversion of child elements.
pub type RecurseFn<'a, 'input> =
    dyn Fn(Element<'a, 'input>, &mut ConvertContext) -> Result<String> + 'a;

/// Trait for element handlers.
///
/// Handlers render one kind of DocBook element as RST. They receive a
/// `recurse` function to convert child elements; errors from children
/// propagate unchanged.
pub trait ElementHandler: Send + Sync {
    /// Return the type classification of this element.
    fn element_type(&self) -> ElementType;

    /// Render the element.
    ///
    /// # Arguments
    /// * `element` - The DocBook element to render
    /// * `context` - State of the current conversion run
    /// * `recurse` - Function to call for recursive child conversion
    fn handle<'a, 'input>(
        &self,
        element: Element<'a, 'input>,
        context: &mut ConvertContext,
        recurse: &RecurseFn<'a, 'input>,
    ) -> Result<String>;
}

/// Concatenate an element's text with its converted children.
///
/// Leading text and every tail have their per-line indentation stripped.
/// When the output so far ends in a non-whitespace character and a tail
/// starts with a space or tab, that one character is kept so adjacent
/// inline spans stay separated.
pub fn concat<'a, 'input>(
    element: Element<'a, 'input>,
    context: &mut ConvertContext,
    recurse: &RecurseFn<'a, 'input>,
) -> Result<String> {
    let mut out = String::new();

    if let Some(text) = element.text() {
        out.push_str(&remove_indent(&text));
    }

    for child in element.children() {
        out.push_str(&recurse(child, context)?);

        if let Some(tail) = child.tail() {
            let ends_in_word = out.chars().last().is_some_and(|c| !c.is_whitespace());
            if let Some(sep @ (' ' | '\t')) = tail.chars().next() {
                if ends_in_word {
                    out.push(sep);
                }
            }
            out.push_str(&remove_indent(&tail));
        }
    }

    Ok(out)
}

/// Render an element as a block indented by `width` spaces.
///
/// See [`indent_lines`] for the block shape.
pub fn indent<'a, 'input>(
    element: Element<'a, 'input>,
    width: usize,
    context: &mut ConvertContext,
    recurse: &RecurseFn<'a, 'input>,
) -> Result<String> {
    Ok(indent_lines(&concat(element, context, recurse)?, width))
}

#[cfg(test)]
mod tests {
    use super::*;
    use roxmltree::Document;

    /// Renders every child as its direct text in brackets.
    fn bracket_children(xml: &str) -> String {
        let doc = Document::parse(xml).unwrap();
        let element = Element::new(doc.root_element()).unwrap();
        let mut context = ConvertContext::new();
        let recurse = |child: Element<'_, '_>, _: &mut ConvertContext| -> Result<String> {
            Ok(format!("[{}]", child.text().unwrap_or_default()))
        };
        concat(element, &mut context, &recurse).unwrap()
    }

    #[test]
    fn test_concat_strips_indentation() {
        let xml = "<para>\n      First line\n      second line</para>";
        assert_eq!(bracket_children(xml), "\nFirst line\nsecond line");
    }

    #[test]
    fn test_concat_keeps_separator_after_span() {
        let xml = "<para>Run <command>ls</command> to list.</para>";
        assert_eq!(bracket_children(xml), "Run [ls] to list.");
    }

    #[test]
    fn test_concat_keeps_tab_separator() {
        let xml = "<para><code>a</code>\tb</para>";
        assert_eq!(bracket_children(xml), "[a]\tb");
    }

    #[test]
    fn test_concat_no_separator_after_whitespace() {
        let xml = "<para>x\n<code>a</code>\n   b</para>";
        assert_eq!(bracket_children(xml), "x\n[a]\nb");
    }

    #[test]
    fn test_concat_separator_before_wrapped_tail() {
        // The space survives even though the stripped tail starts on a new line.
        let xml = "<para><code>a</code> \n   b</para>";
        assert_eq!(bracket_children(xml), "[a] \nb");
    }

    #[test]
    fn test_concat_propagates_child_errors() {
        let doc = Document::parse("<para>a<foo/>b</para>").unwrap();
        let element = Element::new(doc.root_element()).unwrap();
        let mut context = ConvertContext::new();
        let recurse = |child: Element<'_, '_>, _: &mut ConvertContext| -> Result<String> {
            Err(crate::GlossaryError::UnsupportedElement {
                tag_name: child.tag_name().into_owned(),
                text: None,
                context: None,
            })
        };
        assert!(concat(element, &mut context, &recurse).is_err());
    }

    #[test]
    fn test_indent_element() {
        let doc = Document::parse("<glossdef>  line1\n\n   line2  </glossdef>").unwrap();
        let element = Element::new(doc.root_element()).unwrap();
        let mut context = ConvertContext::new();
        let recurse = |_: Element<'_, '_>, _: &mut ConvertContext| -> Result<String> {
            Ok(String::new())
        };
        let block = indent(element, 4, &mut context, &recurse).unwrap();
        assert_eq!(block, "\n\n    line1\n    line2  ");
    }
}
