//! Settings-document XML layer: parse, mutate, canonical serialization.
//!
//! # Responsibility
//! - Split off the opaque trailing fragment before structural work.
//! - Own the XML error taxonomy for both the read and write paths.
//!
//! # Invariants
//! - The only recognized trailing fragment is the fixed
//!   `<namespaceHashes />` literal; its presence is state, its text is not.
//! - Fragment detection is an exact suffix comparison, never a pattern
//!   match against structural content.

use quick_xml::escape::EscapeError;
use quick_xml::events::attributes::AttrError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod parser;
pub mod writer;

pub use parser::{collect_settings, parse_document, parse_settings, XmlElement};
pub use writer::{render_document, update_document, UpdatedDocument};

/// Fixed trailing-fragment literal appended by newer platform versions
/// after the record list. Preserved by presence, reproduced verbatim.
pub const NAMESPACE_HASHES: &str = "<namespaceHashes />";

pub(crate) const SETTING_ELEMENT: &str = "setting";
pub(crate) const ATTR_ID: &str = "id";
pub(crate) const ATTR_NAME: &str = "name";
pub(crate) const ATTR_VALUE: &str = "value";
pub(crate) const ATTR_PACKAGE: &str = "package";
pub(crate) const ATTR_DEFAULT_VALUE: &str = "defaultValue";
pub(crate) const ATTR_DEFAULT_SYS_SET: &str = "defaultSysSet";
pub(crate) const ATTR_TAG: &str = "tag";

/// Result type for XML parse and render APIs.
pub type XmlResult<T> = Result<T, XmlError>;

/// Error for structural parsing and document mutation.
#[derive(Debug)]
pub enum XmlError {
    /// Markup could not be tokenized.
    Syntax(quick_xml::Error),
    /// An element carried unreadable attribute syntax.
    Attribute(AttrError),
    /// An attribute value carried an invalid character reference.
    Escape(EscapeError),
    /// Tokenized markup does not form a single well-nested element tree.
    Structure(String),
}

impl Display for XmlError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Syntax(err) => write!(f, "malformed markup: {err}"),
            Self::Attribute(err) => write!(f, "malformed attribute: {err}"),
            Self::Escape(err) => write!(f, "malformed attribute value: {err}"),
            Self::Structure(message) => write!(f, "malformed document: {message}"),
        }
    }
}

impl Error for XmlError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Syntax(err) => Some(err),
            Self::Attribute(err) => Some(err),
            Self::Escape(err) => Some(err),
            Self::Structure(_) => None,
        }
    }
}

impl From<quick_xml::Error> for XmlError {
    fn from(value: quick_xml::Error) -> Self {
        Self::Syntax(value)
    }
}

impl From<AttrError> for XmlError {
    fn from(value: AttrError) -> Self {
        Self::Attribute(value)
    }
}

impl From<EscapeError> for XmlError {
    fn from(value: EscapeError) -> Self {
        Self::Escape(value)
    }
}

/// Splits the fixed trailing fragment off `raw`, reporting its presence.
///
/// The check is an exact suffix comparison after trailing-whitespace trim.
/// The returned text is what the structural parser must consume; the
/// fragment itself is reproduced as [`NAMESPACE_HASHES`] on write.
pub fn split_trailing_fragment(raw: &str) -> (&str, bool) {
    let trimmed = raw.trim_end();
    match trimmed.strip_suffix(NAMESPACE_HASHES) {
        Some(body) => (body, true),
        None => (raw, false),
    }
}
