//! SSAID repository contract and its XML-document implementation.
//!
//! # Responsibility
//! - Provide stable load/update APIs over the persisted settings document.
//! - Map each failing pipeline step to one semantic error class.
//!
//! # Invariants
//! - Every operation parses fresh from the transport; no document state
//!   survives a call.
//! - Update steps run in a fixed order: value check, read, mutate, write;
//!   a failing step prevents all later ones.

use crate::io::{IoError, SettingsDocumentIo};
use crate::model::setting::{validate_ssaid_value, SettingRecord, SsaidValueError};
use crate::xml::{parse_settings, update_document, XmlError};
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, RepoError>;

/// Why an update was not applied. Every class is recoverable; callers
/// treat any of them as "no change performed" and never retry on their
/// own.
#[derive(Debug)]
pub enum RepoError {
    /// The candidate value failed the 16-hex-character check; rejected
    /// before any I/O.
    InvalidValue(SsaidValueError),
    /// The raw document could not be obtained.
    Source(IoError),
    /// The raw document did not parse as a settings tree.
    Malformed(XmlError),
    /// The updated document could not be persisted.
    Sink(IoError),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidValue(err) => write!(f, "{err}"),
            Self::Source(err) => write!(f, "{err}"),
            Self::Malformed(err) => write!(f, "{err}"),
            Self::Sink(err) => write!(f, "{err}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidValue(err) => Some(err),
            Self::Source(err) => Some(err),
            Self::Malformed(err) => Some(err),
            Self::Sink(err) => Some(err),
        }
    }
}

/// What a successful update did. A zero-match update is a success with
/// `records_updated == 0`, distinct from any [`RepoError`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateReport {
    /// Records whose `value`/`defaultValue` were rewritten.
    pub records_updated: usize,
    /// Whether the trailing fragment was carried through the write.
    pub fragment_preserved: bool,
}

/// Record-level contract over the persisted settings document.
pub trait SsaidRepository {
    /// Loads all records in document order.
    ///
    /// Degrades to an empty list when the source is unavailable or the
    /// document is malformed; both conditions are logged, neither crashes
    /// the caller.
    fn load(&self) -> Vec<SettingRecord>;

    /// Sets the value (and mirrored default value) of every record owned
    /// by `package_name`, persisting the re-rendered document.
    fn update_value(&self, package_name: &str, new_value: &str) -> RepoResult<UpdateReport>;
}

/// Repository over the XML settings document, reached through an injected
/// transport.
pub struct XmlSsaidRepository<'io, I: SettingsDocumentIo> {
    io: &'io I,
}

impl<'io, I: SettingsDocumentIo> XmlSsaidRepository<'io, I> {
    pub fn new(io: &'io I) -> Self {
        Self { io }
    }
}

impl<I: SettingsDocumentIo> SsaidRepository for XmlSsaidRepository<'_, I> {
    fn load(&self) -> Vec<SettingRecord> {
        let raw = match self.io.read() {
            Ok(raw) => raw,
            Err(err) => {
                warn!("event=settings_load module=repo status=degraded error={err}");
                return Vec::new();
            }
        };

        match parse_settings(&raw) {
            Ok((records, _)) => records,
            Err(err) => {
                warn!("event=settings_load module=repo status=degraded error={err}");
                Vec::new()
            }
        }
    }

    fn update_value(&self, package_name: &str, new_value: &str) -> RepoResult<UpdateReport> {
        if let Err(err) = validate_ssaid_value(new_value) {
            warn!("event=ssaid_update module=repo status=rejected package={package_name}");
            return Err(RepoError::InvalidValue(err));
        }

        let raw = self.io.read().map_err(|err| {
            warn!("event=ssaid_update module=repo status=failed package={package_name} error={err}");
            RepoError::Source(err)
        })?;

        let updated = update_document(&raw, package_name, new_value).map_err(|err| {
            warn!("event=ssaid_update module=repo status=failed package={package_name} error={err}");
            RepoError::Malformed(err)
        })?;

        self.io.write(&updated.text).map_err(|err| {
            warn!("event=ssaid_update module=repo status=failed package={package_name} error={err}");
            RepoError::Sink(err)
        })?;

        info!(
            "event=ssaid_update module=repo status=ok package={package_name} records={} fragment={}",
            updated.records_updated, updated.fragment_preserved
        );

        Ok(UpdateReport {
            records_updated: updated.records_updated,
            fragment_preserved: updated.fragment_preserved,
        })
    }
}
