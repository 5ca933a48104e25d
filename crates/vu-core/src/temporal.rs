//! # Temporal Types — Millisecond UTC Timestamps
//!
//! Defines `Timestamp`, a UTC-only instant truncated to millisecond
//! precision. License expirations and report submission times are both
//! recorded as epoch milliseconds, so that is the unit this type stores,
//! serializes, and does arithmetic in.
//!
//! ## Units
//!
//! Durations handed to the licensor are in **seconds**; the resulting
//! expiration is stored in **milliseconds**. [`Timestamp::checked_add_secs`]
//! performs that conversion (`secs * 1000`) and reports overflow as an error
//! rather than wrapping.
//!
//! ## Wire Format
//!
//! Serializes as a signed integer of milliseconds since the Unix epoch.
//! `Display` renders RFC 3339 with a millisecond fraction and `Z` suffix,
//! e.g. `2026-01-15T12:00:00.250Z`.

use chrono::{DateTime, Timelike, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::VuError;

/// A UTC-only timestamp, truncated to milliseconds.
///
/// # Construction
///
/// - [`Timestamp::now()`] — current UTC time, truncated.
/// - [`Timestamp::from_epoch_millis()`] — from milliseconds since the epoch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Create a timestamp from the current UTC time, truncated to milliseconds.
    pub fn now() -> Self {
        Self(truncate_to_millis(Utc::now()))
    }

    /// Create a timestamp from milliseconds since the Unix epoch.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is outside chrono's representable range.
    pub fn from_epoch_millis(millis: i64) -> Result<Self, VuError> {
        DateTime::<Utc>::from_timestamp_millis(millis)
            .map(Self)
            .ok_or_else(|| VuError::Timestamp(format!("epoch millis out of range: {millis}")))
    }

    /// Milliseconds since the Unix epoch.
    pub fn epoch_millis(&self) -> i64 {
        self.0.timestamp_millis()
    }

    /// The instant `secs` seconds after this one.
    ///
    /// # Errors
    ///
    /// Returns an error if `secs * 1000` or the resulting instant overflows.
    pub fn checked_add_secs(&self, secs: u64) -> Result<Self, VuError> {
        let offset = secs
            .checked_mul(1000)
            .and_then(|ms| i64::try_from(ms).ok())
            .ok_or_else(|| VuError::Timestamp(format!("duration of {secs}s overflows")))?;
        let millis = self.epoch_millis().checked_add(offset).ok_or_else(|| {
            VuError::Timestamp(format!("{self} plus {secs}s overflows"))
        })?;
        Self::from_epoch_millis(millis)
    }

    /// Render as RFC 3339 with millisecond fraction and Z suffix.
    pub fn to_rfc3339(&self) -> String {
        self.0.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string()
    }
}

impl std::fmt::Display for Timestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_rfc3339())
    }
}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i64(self.epoch_millis())
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let millis = i64::deserialize(deserializer)?;
        Self::from_epoch_millis(millis).map_err(serde::de::Error::custom)
    }
}

fn truncate_to_millis(dt: DateTime<Utc>) -> DateTime<Utc> {
    let nanos = dt.nanosecond() / 1_000_000 * 1_000_000;
    dt.with_nanosecond(nanos).unwrap_or(dt)
}
