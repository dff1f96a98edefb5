//! Canonical serialization and targeted mutation of the settings document.
//!
//! # Responsibility
//! - Render a parsed tree back to text in the single canonical form the
//!   platform accepts: UTF-8/1.0/standalone declaration, 4-space
//!   indentation, source attribute order.
//! - Apply a value update to every record matching a package name.
//!
//! # Invariants
//! - A zero-match update still renders a complete document; matching is
//!   reported, never an error.
//! - The trailing fragment is re-appended verbatim when the source carried
//!   it and never introduced when it did not.

use crate::xml::parser::{parse_document, XmlElement};
use crate::xml::{
    split_trailing_fragment, XmlResult, ATTR_DEFAULT_VALUE, ATTR_PACKAGE, ATTR_VALUE,
    NAMESPACE_HASHES, SETTING_ELEMENT,
};
use quick_xml::escape::escape;

const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#;
const INDENT: &str = "    ";

/// Result of a document update: the full canonical text plus what happened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdatedDocument {
    /// Complete re-rendered document, ready for the sink.
    pub text: String,
    /// Number of `setting` elements whose value fields were rewritten.
    pub records_updated: usize,
    /// Whether the source carried the trailing fragment (re-appended).
    pub fragment_preserved: bool,
}

/// Renders `root` to canonical text, appending the trailing-fragment
/// literal when `with_fragment` is set.
pub fn render_document(root: &XmlElement, with_fragment: bool) -> String {
    let mut out = String::new();
    out.push_str(XML_DECLARATION);
    out.push('\n');
    render_element(root, 0, &mut out);
    if with_fragment {
        out.push_str(NAMESPACE_HASHES);
    }
    out
}

/// Applies a value update to every matching record and re-renders.
///
/// Re-parses `raw` from scratch; the tree never outlives this call. Both
/// the `value` and `defaultValue` attributes of every `setting` element
/// whose `package` equals `package_name` are set to `new_value`; no other
/// attribute or element changes. The candidate value is assumed to be
/// already validated by the caller.
pub fn update_document(
    raw: &str,
    package_name: &str,
    new_value: &str,
) -> XmlResult<UpdatedDocument> {
    let (body, has_fragment) = split_trailing_fragment(raw);
    let mut root = parse_document(body)?;
    let records_updated = apply_value(&mut root, package_name, new_value);

    Ok(UpdatedDocument {
        text: render_document(&root, has_fragment),
        records_updated,
        fragment_preserved: has_fragment,
    })
}

fn apply_value(element: &mut XmlElement, package_name: &str, new_value: &str) -> usize {
    let mut updated = 0;

    if element.name == SETTING_ELEMENT && element.attribute(ATTR_PACKAGE) == Some(package_name) {
        element.set_attribute(ATTR_VALUE, new_value);
        element.set_attribute(ATTR_DEFAULT_VALUE, new_value);
        updated += 1;
    }

    for child in &mut element.children {
        updated += apply_value(child, package_name, new_value);
    }

    updated
}

fn render_element(element: &XmlElement, depth: usize, out: &mut String) {
    for _ in 0..depth {
        out.push_str(INDENT);
    }
    out.push('<');
    out.push_str(&element.name);
    for (key, value) in &element.attributes {
        out.push(' ');
        out.push_str(key);
        out.push_str("=\"");
        out.push_str(&escape(value.as_str()));
        out.push('"');
    }

    if element.children.is_empty() {
        out.push_str(" />\n");
        return;
    }

    out.push_str(">\n");
    for child in &element.children {
        render_element(child, depth + 1, out);
    }
    for _ in 0..depth {
        out.push_str(INDENT);
    }
    out.push_str("</");
    out.push_str(&element.name);
    out.push_str(">\n");
}
