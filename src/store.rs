//! In-memory resource store.
//!
//! Holds the authoritative local copy of one resource's records plus the
//! load lifecycle around it. `load` always performs a full `list()` and
//! replaces the entire collection: the backend is the sole source of truth
//! and the client never attempts merge conflict resolution.

use chrono::{DateTime, Utc};
use std::collections::HashSet;
use tracing::debug;

use crate::error::GatewayError;
use crate::gateway::{Gateway, Routed};
use crate::models::Resource;

/// Load lifecycle of a collection. The states are mutually exclusive;
/// derived views may only be computed from `Ready`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadState {
    /// Nothing has been fetched yet.
    #[default]
    Unloaded,
    /// A full fetch is in flight.
    Loading,
    /// The collection mirrors the most recent `list()` response.
    Ready,
    /// The last fetch failed.
    Failed(String),
}

impl LoadState {
    /// Check whether derived views may be computed.
    pub fn is_ready(&self) -> bool {
        matches!(self, LoadState::Ready)
    }
}

/// Store for one resource collection.
///
/// Records are value-copied in and out; nothing holds references into the
/// store across await points.
#[derive(Debug, Clone)]
pub struct ResourceStore<R: Resource> {
    state: LoadState,
    records: Vec<R>,
    busy: HashSet<String>,
    loaded_at: Option<DateTime<Utc>>,
}

impl<R: Resource> Default for ResourceStore<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Resource> ResourceStore<R> {
    /// Create an empty, unloaded store.
    pub fn new() -> Self {
        Self {
            state: LoadState::Unloaded,
            records: Vec::new(),
            busy: HashSet::new(),
            loaded_at: None,
        }
    }

    /// Current load state.
    pub fn state(&self) -> &LoadState {
        &self.state
    }

    /// The held records, in server order.
    pub fn records(&self) -> &[R] {
        &self.records
    }

    /// Number of held records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check whether the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// When the last successful load completed.
    pub fn loaded_at(&self) -> Option<DateTime<Utc>> {
        self.loaded_at
    }

    /// Perform a full fetch through the gateway and replace the entire
    /// collection with the response.
    ///
    /// Transitions `Unloaded`/`Ready`/`Failed` -> `Loading` -> `Ready` on
    /// success or `Failed` on error. On failure the previous records are
    /// kept (the view decides what to show) but the state is `Failed`, so
    /// derived views render empty.
    pub async fn load(&mut self, gateway: &Gateway<R>) -> Result<(), GatewayError>
    where
        R: Routed,
    {
        self.begin_load();
        match gateway.list(None).await {
            Ok(records) => {
                debug!(kind = R::KIND, count = records.len(), "collection loaded");
                self.replace_all(records);
                Ok(())
            }
            Err(err) => {
                self.fail_load(err.user_message());
                Err(err)
            }
        }
    }

    /// Mark a full fetch as in flight.
    pub fn begin_load(&mut self) {
        self.state = LoadState::Loading;
    }

    /// Record a failed fetch. The previous records are kept but derived
    /// views render empty until the next successful load.
    pub fn fail_load(&mut self, message: impl Into<String>) {
        self.state = LoadState::Failed(message.into());
    }

    /// Replace the whole collection and mark the store `Ready`.
    ///
    /// Order is preserved exactly as given. Busy markers survive a
    /// replace: an in-flight mutation stays guarded across the refresh its
    /// sibling triggered.
    pub fn replace_all(&mut self, records: Vec<R>) {
        self.records = records;
        self.state = LoadState::Ready;
        self.loaded_at = Some(Utc::now());
    }

    /// Insert or overwrite one record.
    ///
    /// Overwrites preserve the record's position; inserts append.
    pub fn upsert(&mut self, record: R) {
        match self.records.iter_mut().find(|r| r.id() == record.id()) {
            Some(slot) => *slot = record,
            None => self.records.push(record),
        }
    }

    /// Remove a record by id. Returns whether a record was removed.
    pub fn remove_by_id(&mut self, id: &str) -> bool {
        let before = self.records.len();
        self.records.retain(|r| r.id() != id);
        self.busy.remove(id);
        self.records.len() != before
    }

    /// Look up a record by id.
    pub fn get(&self, id: &str) -> Option<&R> {
        self.records.iter().find(|r| r.id() == id)
    }

    /// Mark or unmark a record as having an in-flight mutation.
    pub fn mark_busy(&mut self, id: &str, busy: bool) {
        if busy {
            self.busy.insert(id.to_string());
        } else {
            self.busy.remove(id);
        }
    }

    /// Check whether a record has an in-flight mutation.
    pub fn is_busy(&self, id: &str) -> bool {
        self.busy.contains(id)
    }
}
