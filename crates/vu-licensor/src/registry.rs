//! # License Registry
//!
//! Issue, look up, and transfer licenses held in a `RecordStore<License>`.
//!
//! ## Transfer Rule
//!
//! A transfer applies iff the license exists and was issued transferable.
//! The check and the owner change run under the store's lock as one step.
//! [`LicenseRegistry::transfer_license`] reports only `success`;
//! [`LicenseRegistry::try_transfer_license`] says which rule failed.

use vu_core::{Outcome, RecordId, RecordStore, StoreError, Timestamp, UniverseId};

use crate::license::{License, LicenseError};

/// Registry of issued licenses. Cloning yields a handle to the same registry.
#[derive(Debug, Clone, Default)]
pub struct LicenseRegistry {
    store: RecordStore<License>,
}

impl LicenseRegistry {
    /// Create an empty registry. The first license issued gets id 1.
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a license to `recipient`, expiring `duration_secs` from now.
    ///
    /// The outcome is always successful and carries the new license id.
    ///
    /// # Errors
    ///
    /// Returns [`LicenseError::Expiration`] if now plus `duration_secs`
    /// is not a representable instant. No id is consumed in that case.
    pub fn issue_license(
        &self,
        universe_id: UniverseId,
        recipient: impl Into<String>,
        duration_secs: u64,
        transferable: bool,
    ) -> Result<Outcome<RecordId>, LicenseError> {
        self.issue_license_at(
            universe_id,
            recipient,
            duration_secs,
            transferable,
            Timestamp::now(),
        )
    }

    /// Issue a license as of `issued_at` instead of the current time.
    ///
    /// # Errors
    ///
    /// Returns [`LicenseError::Expiration`] if `issued_at` plus
    /// `duration_secs` is not a representable instant.
    pub fn issue_license_at(
        &self,
        universe_id: UniverseId,
        recipient: impl Into<String>,
        duration_secs: u64,
        transferable: bool,
        issued_at: Timestamp,
    ) -> Result<Outcome<RecordId>, LicenseError> {
        let license = License::issue(
            universe_id,
            recipient,
            duration_secs,
            transferable,
            issued_at,
        )?;
        let expiration = license.expiration;
        let id = self.store.create(license);
        tracing::info!(
            license_id = %id,
            universe_id = %universe_id,
            %expiration,
            transferable,
            "license issued"
        );
        Ok(Outcome::ok(id))
    }

    /// Look up a license. Unknown ids yield `None`.
    pub fn get_license(&self, license_id: RecordId) -> Option<License> {
        self.store.get(license_id)
    }

    /// Hand a transferable license to `new_owner`.
    ///
    /// Fails with `success: false`, leaving the owner unchanged, if the
    /// license does not exist or is not transferable.
    pub fn transfer_license(
        &self,
        license_id: RecordId,
        new_owner: impl Into<String>,
    ) -> Outcome<()> {
        Outcome::from_success(self.try_transfer_license(license_id, new_owner).is_ok())
    }

    /// Like [`LicenseRegistry::transfer_license`], returning the updated
    /// license or the reason the transfer was refused.
    pub fn try_transfer_license(
        &self,
        license_id: RecordId,
        new_owner: impl Into<String>,
    ) -> Result<License, LicenseError> {
        let new_owner = new_owner.into();
        let result = self.store.try_update(
            license_id,
            |license| license.transferable,
            |license| license.owner = new_owner,
        );
        match result {
            Ok(license) => {
                tracing::info!(
                    license_id = %license_id,
                    owner = %license.owner,
                    "license transferred"
                );
                Ok(license)
            }
            Err(e) => {
                tracing::debug!(
                    license_id = %license_id,
                    reason = %e,
                    "license transfer refused"
                );
                Err(match e {
                    StoreError::NotFound(id) => LicenseError::NotFound(id),
                    StoreError::PreconditionFailed(id) => LicenseError::NotTransferable(id),
                })
            }
        }
    }

    /// All licenses over `universe_id`, ordered by id.
    pub fn licenses_for_universe(&self, universe_id: UniverseId) -> Vec<(RecordId, License)> {
        self.store.select(|license| license.universe_id == universe_id)
    }

    /// All licenses currently held by `owner`, ordered by id.
    pub fn licenses_held_by(&self, owner: &str) -> Vec<(RecordId, License)> {
        self.store.select(|license| license.owner == owner)
    }

    /// Number of licenses ever issued.
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// Whether no license has been issued.
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }
}
