//! SSAID use-case service.
//!
//! # Responsibility
//! - Provide stable entry points for host callers (list, pick, update).
//! - Delegate document work to the repository contract.
//!
//! # Invariants
//! - Service APIs never bypass repository validation or failure policy.
//! - The service holds no document state between calls.

use crate::model::setting::SettingRecord;
use crate::repo::ssaid_repo::{RepoResult, SsaidRepository, UpdateReport};

/// Use-case wrapper over an [`SsaidRepository`] implementation.
pub struct SsaidService<R: SsaidRepository> {
    repo: R,
}

impl<R: SsaidRepository> SsaidService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Lists all records in document order.
    pub fn list_settings(&self) -> Vec<SettingRecord> {
        self.repo.load()
    }

    /// Returns the records owned by one package.
    ///
    /// Package names are treated as the matching key even though the
    /// document does not guarantee uniqueness, so this can return more
    /// than one record.
    pub fn settings_for_package(&self, package_name: &str) -> Vec<SettingRecord> {
        self.repo
            .load()
            .into_iter()
            .filter(|record| record.package_name == package_name)
            .collect()
    }

    /// Updates the value of every record owned by `package_name`.
    ///
    /// An `Err` means "update not applied"; callers reload state rather
    /// than retrying automatically.
    pub fn update_value(&self, package_name: &str, new_value: &str) -> RepoResult<UpdateReport> {
        self.repo.update_value(package_name, new_value)
    }
}
