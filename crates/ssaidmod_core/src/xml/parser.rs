//! Structural parse of the settings document.
//!
//! # Responsibility
//! - Tokenize raw markup into a minimal ordered element tree.
//! - Extract `setting` records in document order.
//!
//! # Invariants
//! - Element order and per-element attribute order are preserved exactly.
//! - The tree is rebuilt fresh on every call; nothing is cached between
//!   operations.

use crate::model::setting::{bool_from_attr, tag_from_attr, SettingRecord};
use crate::xml::{
    split_trailing_fragment, XmlError, XmlResult, ATTR_DEFAULT_SYS_SET, ATTR_DEFAULT_VALUE,
    ATTR_ID, ATTR_NAME, ATTR_PACKAGE, ATTR_TAG, ATTR_VALUE, SETTING_ELEMENT,
};
use quick_xml::escape::unescape;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

/// One element of the parsed tree: name, attributes in document order,
/// child elements in document order. Text nodes are not part of the
/// settings schema and are not represented.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XmlElement {
    pub name: String,
    pub attributes: Vec<(String, String)>,
    pub children: Vec<XmlElement>,
}

impl XmlElement {
    /// Looks up an attribute value by name.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Replaces an attribute value in place, keeping its position; appends
    /// the attribute when it was not present.
    pub fn set_attribute(&mut self, name: &str, value: &str) {
        for (key, slot) in &mut self.attributes {
            if key == name {
                *slot = value.to_string();
                return;
            }
        }
        self.attributes.push((name.to_string(), value.to_string()));
    }
}

/// Parses `text` into its single root element.
///
/// Declarations, comments, processing instructions and text nodes are
/// skipped. Anything that does not form exactly one well-nested element
/// tree is an error; the caller decides how to degrade.
pub fn parse_document(text: &str) -> XmlResult<XmlElement> {
    let mut reader = Reader::from_str(text);
    reader.config_mut().trim_text(true);

    let mut stack: Vec<XmlElement> = Vec::new();
    let mut root: Option<XmlElement> = None;

    loop {
        match reader.read_event() {
            Ok(Event::Start(start)) => {
                stack.push(element_from_start(&start)?);
            }
            Ok(Event::Empty(start)) => {
                let element = element_from_start(&start)?;
                attach(&mut stack, &mut root, element)?;
            }
            Ok(Event::End(end)) => {
                let end_name = String::from_utf8_lossy(end.name().as_ref()).into_owned();
                let element = stack.pop().ok_or_else(|| {
                    XmlError::Structure(format!(
                        "closing tag `{end_name}` without a matching opening tag"
                    ))
                })?;
                if element.name != end_name {
                    return Err(XmlError::Structure(format!(
                        "closing tag `{end_name}` does not match opening tag `{}`",
                        element.name
                    )));
                }
                attach(&mut stack, &mut root, element)?;
            }
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(err) => return Err(XmlError::Syntax(err)),
        }
    }

    if let Some(open) = stack.last() {
        return Err(XmlError::Structure(format!(
            "element `{}` is never closed",
            open.name
        )));
    }

    root.ok_or_else(|| XmlError::Structure("document has no root element".to_string()))
}

/// Extracts every `setting` element of the tree, in document order.
pub fn collect_settings(root: &XmlElement) -> Vec<SettingRecord> {
    let mut records = Vec::new();
    collect_into(root, &mut records);
    records
}

/// Full read path: fragment split, structural parse, record extraction.
///
/// The boolean reports trailing-fragment presence so a later write can
/// reproduce it.
pub fn parse_settings(raw: &str) -> XmlResult<(Vec<SettingRecord>, bool)> {
    let (body, has_fragment) = split_trailing_fragment(raw);
    let root = parse_document(body)?;
    Ok((collect_settings(&root), has_fragment))
}

fn element_from_start(start: &BytesStart<'_>) -> XmlResult<XmlElement> {
    let name = String::from_utf8_lossy(start.name().as_ref()).into_owned();
    let mut attributes = Vec::new();

    for attr in start.attributes() {
        let attr = attr?;
        let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
        let raw_value = String::from_utf8_lossy(&attr.value);
        let value = unescape(raw_value.as_ref())?.into_owned();
        attributes.push((key, value));
    }

    Ok(XmlElement {
        name,
        attributes,
        children: Vec::new(),
    })
}

fn attach(
    stack: &mut Vec<XmlElement>,
    root: &mut Option<XmlElement>,
    element: XmlElement,
) -> XmlResult<()> {
    if let Some(parent) = stack.last_mut() {
        parent.children.push(element);
        return Ok(());
    }
    if root.is_some() {
        return Err(XmlError::Structure(
            "document has more than one root element".to_string(),
        ));
    }
    *root = Some(element);
    Ok(())
}

fn collect_into(element: &XmlElement, records: &mut Vec<SettingRecord>) {
    if element.name == SETTING_ELEMENT {
        records.push(record_from_element(element));
    }
    for child in &element.children {
        collect_into(child, records);
    }
}

fn record_from_element(element: &XmlElement) -> SettingRecord {
    SettingRecord {
        id: element.attribute(ATTR_ID).unwrap_or("").to_string(),
        name: element.attribute(ATTR_NAME).unwrap_or("").to_string(),
        value: element.attribute(ATTR_VALUE).unwrap_or("").to_string(),
        package_name: element.attribute(ATTR_PACKAGE).unwrap_or("").to_string(),
        default_value: element
            .attribute(ATTR_DEFAULT_VALUE)
            .unwrap_or("")
            .to_string(),
        default_sys_set: bool_from_attr(element.attribute(ATTR_DEFAULT_SYS_SET).unwrap_or("")),
        tag: tag_from_attr(element.attribute(ATTR_TAG)),
    }
}
