//! End-to-end tests for the glossary converter.
//!
//! Converts a DocBook glossary fixture in the shape of the OpenStack
//! manuals glossary and checks the RST output.

use std::fs;
use std::path::{Path, PathBuf};

use glossary2rst::{GlossaryConverter, GlossaryError, ParseMode};
use pretty_assertions::assert_eq;

/// Path of a fixture file.
fn fixture_path(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// Render the glossary fixture.
fn render_fixture() -> String {
    GlossaryConverter::new()
        .render_file(&fixture_path("glossary-terms.xml"), ParseMode::Strict)
        .unwrap_or_else(|e| panic!("Failed to render fixture: {e}"))
        .content
}

#[test]
fn test_banner_names_source() {
    let rst = render_fixture();
    let source = fixture_path("glossary-terms.xml");

    assert!(rst.starts_with("========\nGlossary\n========\n\n.. comments\n"));
    assert!(rst.contains(&format!("   {} to update it.\n", source.display())));
}

#[test]
fn test_intro_paragraph_with_link() {
    let rst = render_fixture();

    assert!(rst.contains(
        "To add to the OpenStack glossary, clone the \
         `openstack/openstack-manuals repository \
         <https://git.openstack.org/cgit/openstack/openstack-manuals>`__ \
         and update the source file\n:file:`doc/glossary/glossary-terms.xml` through the\n\
         OpenStack contribution process.\n"
    ));
}

#[test]
fn test_single_glossary_directive() {
    let rst = render_fixture();
    assert_eq!(rst.matches(".. glossary::").count(), 1);
}

#[test]
fn test_no_blank_line_runs() {
    let rst = render_fixture();
    assert!(!rst.contains("\n\n\n"));
    assert!(rst.ends_with('\n'));
    assert!(!rst.ends_with("\n\n"));
}

#[test]
fn test_skipped_elements_absent() {
    let rst = render_fixture();
    assert!(!rst.contains("This glossary offers"));
    assert!(!rst.contains(".B"));
    assert_eq!(rst.matches("absolute limit").count(), 1);
}

#[test]
fn test_entry_absolute_limit() {
    let rst = render_fixture();
    assert!(rst.contains(
        "   absolute limit\n\n\
         \x20     Impassable limits for guest VMs. Settings include total RAM\n\
         \x20     size, maximum number of vCPUs, and maximum disk size.\n"
    ));
}

#[test]
fn test_entry_with_systemitems() {
    let rst = render_fixture();
    assert!(rst.contains(
        "      (keystone) or can be\n      a subset of another API (nova).\n"
    ));
}

#[test]
fn test_definition_paragraphs_are_tight() {
    let rst = render_fixture();
    assert!(rst.contains(
        "   bare\n\n\
         \x20     An Image service container format that indicates that no\n\
         \x20     container exists for the VM image.\n\
         \x20     Use :command:`glance image-create` with\n\
         \x20     `--container-format bare` or set\n\
         \x20     `container_format` in :file:`glance-api.conf`.\n"
    ));
}

#[test]
fn test_term_only_entry() {
    let rst = render_fixture();
    assert!(rst.ends_with("   block device\n"));
}

#[test]
fn test_every_definition_line_indented() {
    let rst = render_fixture();
    let body = rst
        .split(".. glossary::\n")
        .nth(1)
        .unwrap_or_else(|| panic!("missing glossary directive"));

    for line in body.lines().filter(|l| !l.is_empty()) {
        assert!(
            (line.starts_with("   ") && !line.starts_with("    "))
                || line.starts_with("      "),
            "unexpected indentation: {line:?}"
        );
    }
}

#[test]
fn test_unsupported_link_in_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("terms.xml");
    fs::write(
        &input,
        r#"<glossary xmlns="http://docbook.org/ns/docbook"
             xmlns:xlink="http://www.w3.org/1999/xlink">
             <para>See <link xlink:href="https://docs.openstack.org">docs</link>.</para>
           </glossary>"#,
    )
    .unwrap();

    let result = GlossaryConverter::new().render_file(&input, ParseMode::Lenient);
    match result {
        Err(GlossaryError::UnsupportedLink { href }) => {
            assert_eq!(href, "https://docs.openstack.org");
        }
        other => panic!("expected UnsupportedLink, got {other:?}"),
    }
}

#[test]
fn test_foreign_namespace_is_unsupported() {
    let xml = r#"<glossary xmlns="http://docbook.org/ns/docbook"
        xmlns:h="http://www.w3.org/1999/xhtml"><h:p>x</h:p></glossary>"#;

    let err = GlossaryConverter::new().convert_str(xml).unwrap_err();
    assert!(err.to_string().contains("{http://www.w3.org/1999/xhtml}p"));
}
