//! # Identifier Newtypes
//!
//! Integer identifiers kept apart at the type level: a store-issued
//! [`RecordId`] cannot be passed where a [`UniverseId`] is expected.
//! Both serialize as bare integers.

use serde::{Deserialize, Serialize};

/// Identifier issued by a [`RecordStore`](crate::RecordStore).
///
/// The first id a store issues is `1`; every later id is strictly greater
/// than the one before it. Ids are never reused within a store's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RecordId(pub u64);

/// Opaque identifier of a universe.
///
/// Owned by an external universe registry. Nothing in this stack checks
/// that the universe exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct UniverseId(pub u64);

impl std::fmt::Display for RecordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::fmt::Display for UniverseId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "universe:{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_serialize_as_bare_integers() {
        assert_eq!(serde_json::to_string(&RecordId(42)).unwrap(), "42");
        assert_eq!(serde_json::to_string(&UniverseId(1)).unwrap(), "1");
        let id: RecordId = serde_json::from_str("5").unwrap();
        assert_eq!(id, RecordId(5));
    }

    #[test]
    fn display_formats() {
        assert_eq!(RecordId(3).to_string(), "3");
        assert_eq!(UniverseId(12).to_string(), "universe:12");
    }

    #[test]
    fn record_ids_order_numerically() {
        assert!(RecordId(1) < RecordId(2));
        assert!(RecordId(10) > RecordId(9));
    }
}
