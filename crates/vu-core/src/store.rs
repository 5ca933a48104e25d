//! # Generic Record Store
//!
//! `RecordStore<T>` owns records of one type keyed by store-issued
//! [`RecordId`]s. It is the single container behind both the license
//! registry and the stability monitor.
//!
//! ## Id Issuance
//!
//! The store keeps a counter of the last id issued. `create` assigns
//! `counter + 1`, advances the counter, and stores the payload. The first id
//! is 1. Ids are never reused: there is no delete operation, and the counter
//! only moves forward.
//!
//! ## Concurrency
//!
//! The counter and the record map sit behind ONE `parking_lot::Mutex`, so id
//! issuance and insertion are a single atomic step, and a conditional update
//! checks its predicate and applies its mutator under the same guard. The
//! handle is an `Arc`; clones share state. `parking_lot` locks are not
//! poisoned by a panicking holder.

use std::collections::BTreeMap;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::error::StoreError;
use crate::identity::RecordId;

#[derive(Debug)]
struct Inner<T> {
    last_id: u64,
    records: BTreeMap<RecordId, T>,
}

/// Thread-safe, cloneable in-memory record store with monotonic ids.
#[derive(Debug)]
pub struct RecordStore<T> {
    inner: Arc<Mutex<Inner<T>>>,
}

impl<T> Clone for RecordStore<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T> Default for RecordStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> RecordStore<T> {
    /// Create an empty store. The first `create` will return id 1.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inner {
                last_id: 0,
                records: BTreeMap::new(),
            })),
        }
    }

    /// Store `payload` under a freshly issued id and return that id.
    ///
    /// Always succeeds.
    pub fn create(&self, payload: T) -> RecordId {
        let mut guard = self.inner.lock();
        guard.last_id += 1;
        let id = RecordId(guard.last_id);
        guard.records.insert(id, payload);
        tracing::debug!(%id, "record created");
        id
    }

    /// Number of records held.
    pub fn len(&self) -> usize {
        self.inner.lock().records.len()
    }

    /// Whether the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Fold over every record in id order under a single lock.
    ///
    /// The closure must not call back into this store.
    pub fn fold<A>(&self, init: A, mut f: impl FnMut(A, RecordId, &T) -> A) -> A {
        let guard = self.inner.lock();
        guard
            .records
            .iter()
            .fold(init, |acc, (id, record)| f(acc, *id, record))
    }

    /// Conditionally update a record.
    ///
    /// Returns `true` if the record exists, `predicate` accepted it, and
    /// `mutator` was applied. Otherwise returns `false` and the store is
    /// unchanged. Missing records and rejected predicates are not told apart;
    /// use [`RecordStore::try_update`] for that.
    pub fn update(
        &self,
        id: RecordId,
        predicate: impl FnOnce(&T) -> bool,
        mutator: impl FnOnce(&mut T),
    ) -> bool {
        self.apply(id, predicate, mutator).is_ok()
    }

    fn apply(
        &self,
        id: RecordId,
        predicate: impl FnOnce(&T) -> bool,
        mutator: impl FnOnce(&mut T),
    ) -> Result<(), StoreError> {
        let mut guard = self.inner.lock();
        let record = guard.records.get_mut(&id).ok_or(StoreError::NotFound(id))?;
        if !predicate(record) {
            tracing::debug!(%id, "update rejected by predicate");
            return Err(StoreError::PreconditionFailed(id));
        }
        mutator(record);
        tracing::debug!(%id, "record updated");
        Ok(())
    }
}

impl<T: Clone> RecordStore<T> {
    /// Retrieve a copy of the record stored under `id`.
    ///
    /// An id that was never issued yields `None`; that is a valid answer,
    /// not a failure.
    pub fn get(&self, id: RecordId) -> Option<T> {
        self.inner.lock().records.get(&id).cloned()
    }

    /// Snapshot of the records matching `filter`, ordered by id.
    pub fn select(&self, mut filter: impl FnMut(&T) -> bool) -> Vec<(RecordId, T)> {
        self.inner
            .lock()
            .records
            .iter()
            .filter(|(_, record)| filter(record))
            .map(|(id, record)| (*id, record.clone()))
            .collect()
    }

    /// Conditionally update a record, reporting why it did not apply.
    ///
    /// Same semantics as [`RecordStore::update`]; on success returns the
    /// record as stored after the mutation.
    pub fn try_update(
        &self,
        id: RecordId,
        predicate: impl FnOnce(&T) -> bool,
        mutator: impl FnOnce(&mut T),
    ) -> Result<T, StoreError> {
        let mut updated = None;
        self.apply(id, predicate, |record| {
            mutator(record);
            updated = Some(record.clone());
        })?;
        updated.ok_or(StoreError::NotFound(id))
    }
}
