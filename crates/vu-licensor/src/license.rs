//! # License Record

use serde::{Deserialize, Serialize};
use thiserror::Error;

use vu_core::{RecordId, Timestamp, UniverseId, VuError};

/// A license over a universe, held by `owner` until `expiration`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct License {
    /// Universe the license applies to.
    pub universe_id: UniverseId,
    /// Current holder.
    pub owner: String,
    /// Issue time plus the granted duration, in epoch milliseconds.
    pub expiration: Timestamp,
    /// Whether `owner` may ever change. Fixed at issue.
    pub transferable: bool,
}

impl License {
    /// Build a license issued at `issued_at` for `duration_secs` seconds.
    ///
    /// # Errors
    ///
    /// Returns an error if the expiration instant is not representable.
    pub fn issue(
        universe_id: UniverseId,
        recipient: impl Into<String>,
        duration_secs: u64,
        transferable: bool,
        issued_at: Timestamp,
    ) -> Result<Self, LicenseError> {
        let expiration = issued_at
            .checked_add_secs(duration_secs)
            .map_err(LicenseError::Expiration)?;
        Ok(Self {
            universe_id,
            owner: recipient.into(),
            expiration,
            transferable,
        })
    }
}

/// Errors from license operations.
///
/// The `{ success }` form of a transfer folds `NotFound` and
/// `NotTransferable` into a single `false`.
#[derive(Error, Debug)]
pub enum LicenseError {
    /// No license has been issued under this id.
    #[error("license {0} not found")]
    NotFound(RecordId),

    /// The license was issued as non-transferable.
    #[error("license {0} is not transferable")]
    NotTransferable(RecordId),

    /// The requested duration pushes the expiration out of range.
    #[error("invalid expiration: {0}")]
    Expiration(#[source] VuError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expiration_is_issue_time_plus_duration_in_millis() {
        let issued_at = Timestamp::from_epoch_millis(1_768_478_400_000).unwrap();
        let license = License::issue(UniverseId(1), "recipient", 100, true, issued_at).unwrap();
        assert_eq!(license.expiration.epoch_millis(), 1_768_478_400_000 + 100_000);
        assert_eq!(license.owner, "recipient");
        assert!(license.transferable);
    }

    #[test]
    fn overflowing_duration_is_rejected() {
        let issued_at = Timestamp::from_epoch_millis(0).unwrap();
        let err = License::issue(UniverseId(1), "r", u64::MAX, false, issued_at).unwrap_err();
        assert!(matches!(err, LicenseError::Expiration(_)));
    }

    #[test]
    fn serializes_with_snake_case_fields() {
        let issued_at = Timestamp::from_epoch_millis(1_000).unwrap();
        let license = License::issue(UniverseId(4), "alice", 2, false, issued_at).unwrap();
        assert_eq!(
            serde_json::to_value(&license).unwrap(),
            serde_json::json!({
                "universe_id": 4,
                "owner": "alice",
                "expiration": 3_000,
                "transferable": false,
            })
        );
    }
}
