//! Configuration constants for the glossary converter.

/// DocBook 5 namespace. Tags in this namespace are dispatched by local name.
pub const DOCBOOK_NS: &str = "http://docbook.org/ns/docbook";

/// XLink namespace, used for `link` targets.
pub const XLINK_NS: &str = "http://www.w3.org/1999/xlink";

/// Conventional location of the master glossary.
pub const DEFAULT_INPUT_PATH: &str = "doc/glossary/glossary-terms.xml";

/// Indent width of a glossary term under `.. glossary::`.
pub const TERM_INDENT: usize = 3;

/// Indent width of a definition, one level deeper than its term.
pub const DEFINITION_INDENT: usize = 6;

/// The RST directive that opens the glossary block.
pub const GLOSSARY_DIRECTIVE: &str = ".. glossary::\n\n";

/// The only link target the converter knows how to render.
pub const SUPPORTED_LINK_HREF: &str = "https://git.openstack.org/cgit/openstack/openstack-manuals";

/// RST rendering of [`SUPPORTED_LINK_HREF`].
pub const SUPPORTED_LINK_RST: &str = "`openstack/openstack-manuals repository \
     <https://git.openstack.org/cgit/openstack/openstack-manuals>`__";

/// Look up the RST rendering for a link target.
///
/// # Examples
/// ```
/// use glossary2rst::config::{known_link, SUPPORTED_LINK_HREF};
///
/// assert!(known_link(SUPPORTED_LINK_HREF).is_some());
/// assert!(known_link("https://example.com").is_none());
/// ```
pub fn known_link(href: &str) -> Option<&'static str> {
    (href == SUPPORTED_LINK_HREF).then_some(SUPPORTED_LINK_RST)
}

/// Build the generated-file banner.
///
/// The banner carries the RST title and a comment pointing readers at the
/// master file they should edit instead of the generated output.
///
/// # Arguments
/// * `source` - Path of the master DocBook file, as shown to the reader
pub fn banner(source: &str) -> String {
    format!(
        "========\n\
         Glossary\n\
         ========\n\
         \n\
         .. comments\n   \
         This file is automatically generated, edit the master\n   \
         {source} to update it.\n"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supported_link_rst() {
        assert_eq!(
            SUPPORTED_LINK_RST,
            "`openstack/openstack-manuals repository \
             <https://git.openstack.org/cgit/openstack/openstack-manuals>`__"
        );
    }

    #[test]
    fn test_known_link_exact_match_only() {
        assert_eq!(known_link(SUPPORTED_LINK_HREF), Some(SUPPORTED_LINK_RST));
        assert!(known_link("https://git.openstack.org/cgit/openstack/openstack-manuals/").is_none());
        assert!(known_link("").is_none());
    }

    #[test]
    fn test_banner() {
        let banner = banner("doc/glossary/glossary-terms.xml");
        assert_eq!(
            banner,
            "========\nGlossary\n========\n\n.. comments\n   \
             This file is automatically generated, edit the master\n   \
             doc/glossary/glossary-terms.xml to update it.\n"
        );
    }
}
