//! Core round-trip editor for the per-application SSAID settings document.
//!
//! Parses the persisted settings XML into records, applies targeted value
//! updates, and re-serializes the document losslessly, including the
//! opaque trailing fragment. All access to the protected file goes
//! through the injected [`SettingsDocumentIo`] capability; this crate
//! never touches privileged storage itself.

pub mod io;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod xml;

pub use io::{IoError, IoResult, MemorySettingsIo, SettingsDocumentIo};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::setting::{
    bool_from_attr, is_ssaid_value, tag_from_attr, validate_ssaid_value, SettingRecord,
    SsaidValueError, TAG_ABSENT_SENTINEL,
};
pub use repo::ssaid_repo::{
    RepoError, RepoResult, SsaidRepository, UpdateReport, XmlSsaidRepository,
};
pub use service::ssaid_service::SsaidService;
pub use xml::{
    parse_settings, render_document, split_trailing_fragment, update_document, UpdatedDocument,
    XmlElement, XmlError, XmlResult, NAMESPACE_HASHES,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
