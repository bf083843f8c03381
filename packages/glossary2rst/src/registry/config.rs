//! Registry configuration for DocBook glossaries.

use super::core::ElementRegistry;
use super::handlers::{
    CommandHandler, FilenameHandler, GlossDivHandler, GlossEntryHandler, GlossaryHandler,
    LinkHandler, LiteralHandler, ParaHandler, PhraseHandler,
};

/// Create a registry configured for DocBook glossaries.
///
/// Only this fixed set of tags is recognized. `glossterm` and `glossdef`
/// are read by the `glossentry` handler directly and are not registered.
#[must_use]
pub fn create_docbook_registry() -> ElementRegistry {
    let mut registry = ElementRegistry::new();

    // Inline handlers
    registry.register("command", CommandHandler);
    registry.register("code", LiteralHandler);
    registry.register("filename", FilenameHandler);
    registry.register("literal", LiteralHandler);
    registry.register("phrase", PhraseHandler);
    registry.register("systemitem", PhraseHandler);
    registry.register("link", LinkHandler);

    // Block handlers
    registry.register("para", ParaHandler);

    // Structural handlers
    registry.register("glossary", GlossaryHandler);
    registry.register("glossdiv", GlossDivHandler);
    registry.register("glossentry", GlossEntryHandler);

    // Skip tags - recognized but rendered as nothing
    //   - indexterm/primary: index markers
    //   - info: metadata block
    //   - title: glossary and division headings
    registry.skip(["indexterm", "info", "primary", "title"]);

    registry
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_docbook_registry() {
        let registry = create_docbook_registry();

        for tag in ["command", "code", "filename", "literal", "phrase", "systemitem", "link"] {
            assert!(registry.has_handler(tag), "missing inline handler for {tag}");
        }
        for tag in ["para", "glossary", "glossdiv", "glossentry"] {
            assert!(registry.has_handler(tag), "missing handler for {tag}");
        }
        for tag in ["indexterm", "info", "primary", "title"] {
            assert!(registry.should_skip(tag));
        }
    }

    #[test]
    fn test_gloss_children_not_dispatched() {
        let registry = create_docbook_registry();
        for tag in ["glossterm", "glossdef", "emphasis"] {
            assert!(!registry.has_handler(tag) && !registry.should_skip(tag));
        }
    }
}
