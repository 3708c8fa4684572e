//! Search History Manager for MyVacation.
//!
//! Owns the recent-search [`SearchHistoryState`] and persists it through a
//! [`KeyValueStore`] as a versioned JSON envelope:
//!
//! ```json
//! {"state": {"destination": [...], "video": [...]}, "version": 0}
//! ```
//!
//! Every mutator writes to the store before updating memory, and skips the
//! write entirely when it would not change anything.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::managers::history_store::KeyValueStore;
use crate::services::reconciler::reconcile;
use crate::types::errors::HistoryError;
use crate::types::history::{Category, SearchHistoryState};
use crate::types::result::{DestinationResult, HistoryItem, VideoResult};

/// Store key used when none is configured.
pub const DEFAULT_STORAGE_KEY: &str = "search-history";

/// Version written into the persisted envelope.
pub const STATE_VERSION: u32 = 0;

#[derive(Serialize)]
struct PersistedRef<'a> {
    state: &'a SearchHistoryState,
    version: u32,
}

#[derive(Deserialize)]
struct Persisted {
    state: SearchHistoryState,
    version: u32,
}

/// Trait defining search history operations.
pub trait SearchHistoryManagerTrait {
    fn state(&self) -> &SearchHistoryState;
    /// Merges `items` into their category's list. Returns whether anything was committed.
    fn add_to_history<T: HistoryItem>(&mut self, items: &[T]) -> Result<bool, HistoryError>;
    /// Removes the entry with `id`. Returns `false` when it was not there.
    fn remove_from_history(&mut self, category: Category, id: &str) -> Result<bool, HistoryError>;
    fn reset_history(&mut self, category: Category) -> Result<bool, HistoryError>;
    fn reset_all(&mut self) -> Result<bool, HistoryError>;
}

/// Search history backed by a key-value store.
pub struct SearchHistoryManager<S: KeyValueStore> {
    store: S,
    key: String,
    state: SearchHistoryState,
}

impl<S: KeyValueStore> SearchHistoryManager<S> {
    /// Loads the history stored under `key`.
    ///
    /// A missing, unreadable, or unrecognised payload yields an empty history;
    /// the browse page must still render when local storage is damaged.
    pub fn load(store: S, key: impl Into<String>) -> Self {
        let key = key.into();
        let state = match store.get(&key) {
            Ok(Some(raw)) => decode(&raw).unwrap_or_else(|reason| {
                warn!(%key, %reason, "discarding unreadable search history");
                SearchHistoryState::default()
            }),
            Ok(None) => SearchHistoryState::default(),
            Err(e) => {
                warn!(%key, error = %e, "search history store unavailable");
                SearchHistoryState::default()
            }
        };

        debug!(
            %key,
            destinations = state.destination.len(),
            videos = state.video.len(),
            "search history loaded"
        );

        Self { store, key, state }
    }

    /// History list of one category, oldest first.
    pub fn list<T: HistoryItem>(&self) -> &[T] {
        T::list(&self.state)
    }

    pub fn destinations(&self) -> &[DestinationResult] {
        &self.state.destination
    }

    pub fn videos(&self) -> &[VideoResult] {
        &self.state.video
    }

    pub fn is_empty(&self) -> bool {
        self.state.is_empty()
    }

    pub fn storage_key(&self) -> &str {
        &self.key
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    /// Persists `next` and, only once the write succeeded, makes it current.
    fn commit(&mut self, next: SearchHistoryState) -> Result<(), HistoryError> {
        let payload = serde_json::to_string(&PersistedRef {
            state: &next,
            version: STATE_VERSION,
        })
        .map_err(|e| HistoryError::SerializationError(e.to_string()))?;

        self.store.set(&self.key, &payload)?;
        self.state = next;
        Ok(())
    }
}

impl<S: KeyValueStore> SearchHistoryManagerTrait for SearchHistoryManager<S> {
    fn state(&self) -> &SearchHistoryState {
        &self.state
    }

    fn add_to_history<T: HistoryItem>(&mut self, items: &[T]) -> Result<bool, HistoryError> {
        let existing = T::list(&self.state);
        let merged = reconcile(existing, items);
        if merged.len() == existing.len() {
            return Ok(false);
        }

        let added = merged.len() - existing.len();
        let mut next = self.state.clone();
        *T::list_mut(&mut next) = merged;
        self.commit(next)?;

        debug!(category = %T::CATEGORY, added, "search history extended");
        Ok(true)
    }

    fn remove_from_history(&mut self, category: Category, id: &str) -> Result<bool, HistoryError> {
        let mut next = self.state.clone();
        let removed = match category {
            Category::Destination => remove_by_id(&mut next.destination, id),
            Category::Video => remove_by_id(&mut next.video, id),
        };
        if !removed {
            return Ok(false);
        }

        self.commit(next)?;
        debug!(%category, %id, "search history entry removed");
        Ok(true)
    }

    fn reset_history(&mut self, category: Category) -> Result<bool, HistoryError> {
        if self.state.len(category) == 0 {
            return Ok(false);
        }

        let mut next = self.state.clone();
        match category {
            Category::Destination => next.destination.clear(),
            Category::Video => next.video.clear(),
        }
        self.commit(next)?;
        debug!(%category, "search history category cleared");
        Ok(true)
    }

    fn reset_all(&mut self) -> Result<bool, HistoryError> {
        if self.state.is_empty() {
            return Ok(false);
        }

        self.commit(SearchHistoryState::default())?;
        debug!("search history cleared");
        Ok(true)
    }
}

fn remove_by_id<T: HistoryItem>(list: &mut Vec<T>, id: &str) -> bool {
    let before = list.len();
    list.retain(|item| item.id() != id);
    list.len() != before
}

/// Parses a stored envelope, repairing duplicate ids if an older writer left any.
fn decode(raw: &str) -> Result<SearchHistoryState, String> {
    let persisted: Persisted = serde_json::from_str(raw).map_err(|e| e.to_string())?;
    if persisted.version != STATE_VERSION {
        return Err(format!("unsupported history version {}", persisted.version));
    }

    let state = persisted.state;
    Ok(SearchHistoryState {
        destination: reconcile(&[], &state.destination),
        video: reconcile(&[], &state.video),
    })
}
