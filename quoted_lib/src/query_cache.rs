//! Descriptor-keyed query cache with newest-descriptor-wins semantics.
//!
//! Each key maps to an in-flight marker, a resolved value, or a failure. One
//! key is "current" at a time. Completions for a key that is no longer current,
//! or for a fetch that has since been superseded, are discarded so a slow
//! response can never overwrite fresher state. A fetch that is cancelled by
//! dropping its [`Ticket`] releases the key for the next `select`.

use std::fmt;
use std::hash::Hash;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use dashmap::mapref::entry::Entry as MapEntry;
use dashmap::DashMap;

/// Entries stay fresh for this long unless configured otherwise.
pub const DEFAULT_STALE_TIME: Duration = Duration::from_secs(600);

enum Entry<T, E> {
    InFlight { id: u64 },
    Resolved { value: Arc<T>, expires_at: Instant },
    Failed { error: E },
}

type Entries<K, T, E> = Arc<DashMap<K, Entry<T, E>>>;

/// Permission to fetch one key. Hand it back to [`QueryCache::complete`].
/// Dropping it instead clears the in-flight marker it was issued for.
pub struct Ticket<K: Eq + Hash, T, E> {
    key: K,
    id: u64,
    entries: Entries<K, T, E>,
}

impl<K: Eq + Hash, T, E> Ticket<K, T, E> {
    pub fn key(&self) -> &K {
        &self.key
    }
}

impl<K: Eq + Hash + fmt::Debug, T, E> fmt::Debug for Ticket<K, T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Ticket")
            .field("key", &self.key)
            .field("id", &self.id)
            .finish()
    }
}

impl<K: Eq + Hash, T, E> Drop for Ticket<K, T, E> {
    fn drop(&mut self) {
        let id = self.id;
        let released = self
            .entries
            .remove_if(&self.key, |_, entry| {
                matches!(entry, Entry::InFlight { id: current } if *current == id)
            })
            .is_some();
        if released {
            tracing::debug!("Released an in-flight query that was never completed");
        }
    }
}

/// What [`QueryCache::complete`] did with a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    Applied,
    Discarded,
}

/// The current key's state, as a view would render it.
#[derive(Debug)]
pub enum QueryState<T, E> {
    Idle,
    Loading,
    Ready(Arc<T>),
    Failed(E),
}

impl<T, E> QueryState<T, E> {
    pub fn is_loading(&self) -> bool {
        matches!(self, QueryState::Loading)
    }

    pub fn ready(&self) -> Option<&Arc<T>> {
        match self {
            QueryState::Ready(value) => Some(value),
            _ => None,
        }
    }
}

pub struct QueryCache<K, T, E> {
    entries: Entries<K, T, E>,
    current: Mutex<Option<K>>,
    next_id: AtomicU64,
    stale_time: Duration,
}

impl<K, T, E> Default for QueryCache<K, T, E>
where
    K: Eq + Hash + Clone,
    E: Clone,
{
    fn default() -> Self {
        Self::new(DEFAULT_STALE_TIME)
    }
}

impl<K, T, E> QueryCache<K, T, E>
where
    K: Eq + Hash + Clone,
    E: Clone,
{
    pub fn new(stale_time: Duration) -> Self {
        Self {
            entries: Arc::new(DashMap::new()),
            current: Mutex::new(None),
            next_id: AtomicU64::new(1),
            stale_time,
        }
    }

    /// Makes `key` current. Returns a ticket when a fetch is needed: the key
    /// is unknown, failed, or expired. A fresh value or a fetch already in
    /// flight yields `None`. Expired entries of other keys are pruned.
    pub fn select(&self, key: K) -> Option<Ticket<K, T, E>> {
        *self.current.lock().unwrap_or_else(|e| e.into_inner()) = Some(key.clone());
        self.prune_expired();

        let id = match self.entries.entry(key.clone()) {
            MapEntry::Occupied(mut occupied) => {
                let needs_fetch = match occupied.get() {
                    Entry::InFlight { .. } => false,
                    Entry::Resolved { expires_at, .. } => Instant::now() >= *expires_at,
                    Entry::Failed { .. } => true,
                };
                if !needs_fetch {
                    return None;
                }
                let id = self.next_id.fetch_add(1, Ordering::Relaxed);
                occupied.insert(Entry::InFlight { id });
                id
            }
            MapEntry::Vacant(vacant) => {
                let id = self.next_id.fetch_add(1, Ordering::Relaxed);
                vacant.insert(Entry::InFlight { id });
                id
            }
        };
        Some(Ticket {
            key,
            id,
            entries: Arc::clone(&self.entries),
        })
    }

    fn prune_expired(&self) {
        let now = Instant::now();
        self.entries.retain(|_, entry| match entry {
            Entry::Resolved { expires_at, .. } => now < *expires_at,
            _ => true,
        });
    }

    /// Records the outcome of a fetch, unless the ticket's key is no longer
    /// current or a newer fetch for the same key has started.
    pub fn complete(&self, ticket: Ticket<K, T, E>, result: Result<T, E>) -> Completion {
        let is_current = self
            .current
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .as_ref()
            .is_some_and(|current| *current == ticket.key);

        let Some(mut entry) = self.entries.get_mut(&ticket.key) else {
            return Completion::Discarded;
        };
        let is_latest = matches!(*entry, Entry::InFlight { id } if id == ticket.id);
        if !is_latest {
            return Completion::Discarded;
        }
        if !is_current {
            drop(entry);
            self.entries.remove(&ticket.key);
            tracing::debug!("Discarded completion for an abandoned query");
            return Completion::Discarded;
        }

        *entry = match result {
            Ok(value) => Entry::Resolved {
                value: Arc::new(value),
                expires_at: Instant::now() + self.stale_time,
            },
            Err(error) => Entry::Failed { error },
        };
        Completion::Applied
    }

    /// State of the current key.
    pub fn state(&self) -> QueryState<T, E> {
        let current = self
            .current
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone();
        match current {
            Some(key) => self.state_of(&key),
            None => QueryState::Idle,
        }
    }

    /// State of any key, current or not.
    pub fn state_of(&self, key: &K) -> QueryState<T, E> {
        match self.entries.get(key).as_deref() {
            None => QueryState::Idle,
            Some(Entry::InFlight { .. }) => QueryState::Loading,
            Some(Entry::Resolved { value, .. }) => QueryState::Ready(Arc::clone(value)),
            Some(Entry::Failed { error }) => QueryState::Failed(error.clone()),
        }
    }

    /// Removes all entries. The current key is kept.
    pub fn clear(&self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
