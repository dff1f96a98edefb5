//! SSAID setting record and attribute conversion rules.
//!
//! # Responsibility
//! - Define the canonical per-application identity record.
//! - Convert textual document attributes to typed fields and back.
//! - Validate candidate SSAID values before any document work starts.
//!
//! # Invariants
//! - `package_name` is the lookup key for updates; it is not assumed unique.
//! - The literal tag text `"null"` means absence of a tag, never a tag.
//! - A valid SSAID value is exactly 16 ASCII hex digits, either case.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

static SSAID_VALUE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9a-fA-F]{16}$").expect("valid ssaid value regex"));

/// Sentinel text the settings document stores for an absent tag.
pub const TAG_ABSENT_SENTINEL: &str = "null";

/// One persisted identity entry of the settings document.
///
/// Serde names mirror the document's attribute names, so exported records
/// keep the external schema vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettingRecord {
    /// Opaque identifier, unique within the document, stable across edits.
    pub id: String,
    /// Setting name; informational only.
    pub name: String,
    /// Current value; the field mutated by an update.
    pub value: String,
    /// Owning application's package identifier; the update lookup key.
    #[serde(rename = "package")]
    pub package_name: String,
    /// Mirrors `value` after an edit.
    #[serde(rename = "defaultValue")]
    pub default_value: String,
    /// Parsed from the textual true/false attribute.
    #[serde(rename = "defaultSysSet")]
    pub default_sys_set: bool,
    /// Optional tag; the `"null"` sentinel in the source reads as `None`.
    pub tag: Option<String>,
}

/// Rejection of a candidate SSAID value that is not 16 hex characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SsaidValueError {
    pub value: String,
}

impl Display for SsaidValueError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "invalid ssaid value `{}`: expected exactly 16 hexadecimal characters",
            self.value
        )
    }
}

impl Error for SsaidValueError {}

/// Returns whether `value` has the accepted SSAID shape.
pub fn is_ssaid_value(value: &str) -> bool {
    SSAID_VALUE_RE.is_match(value)
}

/// Validates a candidate SSAID value, keeping the rejected text for
/// diagnostics.
pub fn validate_ssaid_value(value: &str) -> Result<(), SsaidValueError> {
    if is_ssaid_value(value) {
        return Ok(());
    }
    Err(SsaidValueError {
        value: value.to_string(),
    })
}

/// Converts a textual boolean attribute.
///
/// Case-insensitive `"true"` is true; any other text, including empty, is
/// false.
pub fn bool_from_attr(text: &str) -> bool {
    text.eq_ignore_ascii_case("true")
}

/// Converts a tag attribute, mapping both a missing attribute and the
/// case-sensitive `"null"` sentinel to absence.
pub fn tag_from_attr(text: Option<&str>) -> Option<String> {
    match text {
        None => None,
        Some(TAG_ABSENT_SENTINEL) => None,
        Some(tag) => Some(tag.to_string()),
    }
}
