use futures::future::{BoxFuture, FutureExt, Shared};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use tokio::sync::watch;
use tracing::{debug, info};

use crate::modules::content::application::ports::outgoing::{RemoteError, TableClient};
use crate::modules::content::domain::entities::{Entity, Table};

//
// ──────────────────────────────────────────────────────────
// Keys
// ──────────────────────────────────────────────────────────
//

/// Who is reading. Public sections and the admin console keep separate
/// cache entries for the same table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Intent {
    Public,
    Admin,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct QueryKey {
    pub table: Table,
    pub intent: Intent,
}

impl QueryKey {
    pub fn new(table: Table, intent: Intent) -> Self {
        Self { table, intent }
    }

    pub fn public(table: Table) -> Self {
        Self::new(table, Intent::Public)
    }

    pub fn admin(table: Table) -> Self {
        Self::new(table, Intent::Admin)
    }
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QueryError {
    #[error(transparent)]
    Remote(#[from] RemoteError),

    #[error("Failed to decode {table} row: {message}")]
    Decode { table: Table, message: String },
}

//
// ──────────────────────────────────────────────────────────
// Cache state
// ──────────────────────────────────────────────────────────
//

type Rows = Arc<Vec<Value>>;
type Load = Shared<BoxFuture<'static, Result<Rows, RemoteError>>>;

enum Slot {
    Ready { rows: Rows, generation: u64 },
    Loading { load: Load, generation: u64 },
}

impl Slot {
    fn generation(&self) -> u64 {
        match self {
            Slot::Ready { generation, .. } | Slot::Loading { generation, .. } => *generation,
        }
    }
}

#[derive(Default)]
struct CacheState {
    slots: HashMap<QueryKey, Slot>,
    /// Bumped by every invalidation; a slot is fresh only while its
    /// generation matches its table's.
    generations: HashMap<Table, u64>,
}

impl CacheState {
    fn generation(&self, table: Table) -> u64 {
        self.generations.get(&table).copied().unwrap_or(0)
    }
}

enum Lookup {
    Hit(Rows),
    Wait(Load, u64),
}

/// Caches collection reads per (table, intent).
///
/// - A fresh entry is served without touching the backend.
/// - Concurrent reads of the same key share one in-flight request.
/// - `invalidate(table)` makes every entry of the table stale, including loads
///   still in flight, and notifies the table's subscribers.
/// - Failed loads are never cached.
///
/// The cache is mutated only here; callers get shared snapshots.
pub struct QueryClient {
    remote: Arc<dyn TableClient>,
    state: Mutex<CacheState>,
    subscribers: HashMap<Table, watch::Sender<u64>>,
}

impl QueryClient {
    pub fn new(remote: Arc<dyn TableClient>) -> Self {
        let subscribers = Table::ALL
            .into_iter()
            .map(|table| (table, watch::channel(0).0))
            .collect();

        Self {
            remote,
            state: Mutex::new(CacheState::default()),
            subscribers,
        }
    }

    fn lock(&self) -> MutexGuard<'_, CacheState> {
        // The guarded maps stay consistent even if a holder panicked.
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Raw rows for `key`, ordered by the table's read ordering.
    pub async fn fetch_rows(&self, key: QueryKey) -> Result<Rows, RemoteError> {
        let (load, generation) = match self.lookup(key) {
            Lookup::Hit(rows) => return Ok(rows),
            Lookup::Wait(load, generation) => (load, generation),
        };

        let result = load.await;

        let mut state = self.lock();
        let current = state.generation(key.table);
        let owns_slot = state
            .slots
            .get(&key)
            .is_some_and(|slot| slot.generation() == generation);

        match &result {
            Ok(rows) if generation == current => {
                state.slots.insert(
                    key,
                    Slot::Ready {
                        rows: Arc::clone(rows),
                        generation,
                    },
                );
            }
            Err(_) if owns_slot => {
                state.slots.remove(&key);
            }
            _ => {}
        }

        result
    }

    fn lookup(&self, key: QueryKey) -> Lookup {
        let mut state = self.lock();
        let generation = state.generation(key.table);

        match state.slots.get(&key) {
            Some(Slot::Ready { rows, generation: g }) if *g == generation => {
                debug!(table = %key.table, intent = ?key.intent, "cache hit");
                return Lookup::Hit(Arc::clone(rows));
            }
            Some(Slot::Loading { load, generation: g }) if *g == generation => {
                debug!(table = %key.table, intent = ?key.intent, "joining in-flight load");
                return Lookup::Wait(load.clone(), generation);
            }
            _ => {}
        }

        let remote = Arc::clone(&self.remote);
        let table = key.table;
        let load: Load = async move {
            remote
                .select(table, table.order())
                .await
                .map(Arc::new)
        }
        .boxed()
        .shared();

        state.slots.insert(
            key,
            Slot::Loading {
                load: load.clone(),
                generation,
            },
        );

        Lookup::Wait(load, generation)
    }

    /// Typed read of a whole collection.
    pub async fn fetch<T: Entity>(&self, intent: Intent) -> Result<Vec<T>, QueryError> {
        let rows = self.fetch_rows(QueryKey::new(T::TABLE, intent)).await?;

        rows.iter()
            .cloned()
            .map(serde_json::from_value::<T>)
            .collect::<Result<Vec<T>, _>>()
            .map_err(|e| QueryError::Decode {
                table: T::TABLE,
                message: e.to_string(),
            })
    }

    /// Marks every cached entry of `table` stale and wakes its subscribers.
    pub fn invalidate(&self, table: Table) {
        let generation = {
            let mut state = self.lock();
            let next = state.generation(table) + 1;
            state.generations.insert(table, next);
            next
        };

        info!(%table, generation, "invalidated collection");

        if let Some(tx) = self.subscribers.get(&table) {
            tx.send_replace(generation);
        }
    }

    /// Receives the table's generation after each invalidation.
    pub fn subscribe(&self, table: Table) -> watch::Receiver<u64> {
        match self.subscribers.get(&table) {
            Some(tx) => tx.subscribe(),
            // Every table gets a channel in `new`.
            None => watch::channel(0).1,
        }
    }

    pub fn is_fresh(&self, key: QueryKey) -> bool {
        let state = self.lock();
        let generation = state.generation(key.table);
        matches!(
            state.slots.get(&key),
            Some(Slot::Ready { generation: g, .. }) if *g == generation
        )
    }
}
