//! Typed view of a DocBook element.

use std::borrow::Cow;
use std::fmt;

use roxmltree::{Document, Node};

use super::utils::{collect_text, qualified_name};

/// An element of the parsed document.
///
/// Wraps a `roxmltree` element node and exposes the shape the converter
/// works with: a namespace-stripped tag name, leading text, element
/// children, the tail text following each child, and attribute lookup.
/// Comments and processing instructions are never exposed.
#[derive(Clone, Copy)]
pub struct Element<'a, 'input> {
    node: Node<'a, 'input>,
}

impl<'a, 'input: 'a> Element<'a, 'input> {
    /// Wrap a node, returning `None` unless it is an element.
    #[must_use]
    pub fn new(node: Node<'a, 'input>) -> Option<Self> {
        node.is_element().then_some(Self { node })
    }

    /// The root element of a document.
    #[must_use]
    pub fn root(document: &'a Document<'input>) -> Self {
        Self {
            node: document.root_element(),
        }
    }

    /// Tag name with the DocBook namespace stripped.
    #[must_use]
    pub fn tag_name(&self) -> Cow<'a, str> {
        qualified_name(self.node)
    }

    /// Text before the first child element.
    #[must_use]
    pub fn text(&self) -> Option<String> {
        collect_text(self.node.children())
    }

    /// Text following this element, up to the next sibling element or the
    /// end of the parent.
    #[must_use]
    pub fn tail(&self) -> Option<String> {
        collect_text(std::iter::successors(self.node.next_sibling(), |n| {
            n.next_sibling()
        }))
    }

    /// Child elements in document order.
    pub fn children(&self) -> impl Iterator<Item = Element<'a, 'input>> + 'a {
        self.node.children().filter_map(Element::new)
    }

    /// Child elements with the given (namespace-stripped) tag name.
    pub fn find_children<'t>(
        &self,
        tag: &'t str,
    ) -> impl Iterator<Item = Element<'a, 'input>> + 't
    where
        'a: 't,
    {
        self.children().filter(move |child| child.tag_name() == tag)
    }

    /// Attribute value, optionally qualified by a namespace URI.
    ///
    /// Without a namespace only unqualified attributes match.
    #[must_use]
    pub fn attribute(&self, namespace: Option<&str>, name: &str) -> Option<&'a str> {
        match namespace {
            Some(ns) => self.node.attribute((ns, name)),
            None => self
                .node
                .attributes()
                .find(|a| a.namespace().is_none() && a.name() == name)
                .map(|a| a.value()),
        }
    }

    /// The parent element, if any.
    #[must_use]
    pub fn parent(&self) -> Option<Element<'a, 'input>> {
        self.node.parent_element().and_then(Element::new)
    }
}

impl fmt::Debug for Element<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Element")
            .field("tag_name", &self.tag_name())
            .field("children", &self.children().count())
            .finish()
    }
}
