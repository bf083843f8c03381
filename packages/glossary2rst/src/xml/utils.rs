//! XML utility functions for parsing and naming nodes.

use std::borrow::Cow;

use roxmltree::{Document, Node, ParsingOptions};

use crate::config::DOCBOOK_NS;
use crate::error::Result;

/// Parse an XML document.
///
/// DTDs are allowed so that glossaries declaring internal entities parse.
/// Comments and processing instructions stay in the tree but are never
/// visited by [`Element`](super::Element).
///
/// # Examples
/// ```
/// use glossary2rst::xml::parse_document;
///
/// assert!(parse_document("<glossary/>").is_ok());
/// assert!(parse_document("<glossary>").is_err());
/// ```
pub fn parse_document(xml: &str) -> Result<Document<'_>> {
    let options = ParsingOptions {
        allow_dtd: true,
        ..ParsingOptions::default()
    };
    Ok(Document::parse_with_options(xml, options)?)
}

/// Get the tag name of a node with the DocBook namespace stripped.
///
/// Elements in the DocBook namespace, and elements without a namespace,
/// are named by their local name. Elements in any other namespace keep
/// the `{namespace}local` form so they never match a DocBook tag.
///
/// # Examples
/// ```
/// use roxmltree::Document;
/// use glossary2rst::xml::qualified_name;
///
/// let xml = r#"<para xmlns="http://docbook.org/ns/docbook"/>"#;
/// let doc = Document::parse(xml).unwrap();
/// assert_eq!(qualified_name(doc.root_element()), "para");
///
/// let xml = r#"<h:p xmlns:h="http://www.w3.org/1999/xhtml"/>"#;
/// let doc = Document::parse(xml).unwrap();
/// assert_eq!(qualified_name(doc.root_element()), "{http://www.w3.org/1999/xhtml}p");
/// ```
pub fn qualified_name<'a>(node: Node<'a, '_>) -> Cow<'a, str> {
    let tag = node.tag_name();
    match tag.namespace() {
        None | Some(DOCBOOK_NS) => Cow::Borrowed(tag.name()),
        Some(ns) => Cow::Owned(format!("{{{ns}}}{}", tag.name())),
    }
}

/// Concatenate the character data of a run of sibling nodes.
///
/// Stops at the first element. Comments and processing instructions inside
/// the run are skipped, so text split by a comment is rejoined. Returns
/// `None` when the run holds no text node at all.
pub(crate) fn collect_text<'a, 'input: 'a>(
    nodes: impl Iterator<Item = Node<'a, 'input>>,
) -> Option<String> {
    let mut text: Option<String> = None;
    for node in nodes.take_while(|n| !n.is_element()) {
        if let Some(chunk) = node.is_text().then(|| node.text()).flatten() {
            text.get_or_insert_with(String::new).push_str(chunk);
        }
    }
    text
}
