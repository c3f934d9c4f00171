use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::model::{League, Season};

pub const CACHE_DURATION: chrono::Duration = chrono::Duration::minutes(5);

pub const ALL_LEAGUES_KEY: &str = "all_leagues";

/// Cache key for one league's season-badge listing. Distinct league ids map
/// to distinct keys, and the prefix keeps them apart from [`ALL_LEAGUES_KEY`].
#[must_use]
pub fn season_badges_key(league_id: &str) -> String {
    format!("season_badges_{league_id}")
}

#[derive(Clone, Debug)]
pub enum CachedPayload {
    Leagues(Vec<League>),
    Seasons(Vec<Season>),
}

#[derive(Clone)]
struct CacheEntry {
    payload: CachedPayload,
    cached_time: DateTime<Utc>,
}

pub type Clock = Arc<dyn Fn() -> DateTime<Utc> + Send + Sync>;

/// Time-boxed response cache. Expired entries are not swept; they just read
/// as misses and get overwritten by the next successful fetch. The clock is
/// injected so TTL expiry is testable without sleeping.
pub struct ResponseCache {
    entries: RwLock<HashMap<String, CacheEntry>>,
    clock: Clock,
}

impl ResponseCache {
    #[must_use]
    pub fn new() -> Self {
        Self::with_clock(Arc::new(Utc::now))
    }

    #[must_use]
    pub fn with_clock(clock: Clock) -> Self {
        ResponseCache {
            entries: RwLock::new(HashMap::new()),
            clock,
        }
    }

    /// Returns the stored payload only while its age is strictly under
    /// [`CACHE_DURATION`]. Absent and expired entries look identical.
    pub async fn get(&self, key: &str) -> Option<CachedPayload> {
        let map = self.entries.read().await;
        let entry = map.get(key)?;
        let elapsed = (self.clock)() - entry.cached_time;
        if elapsed < CACHE_DURATION {
            Some(entry.payload.clone())
        } else {
            None
        }
    }

    /// Stores `payload` timestamped now, unconditionally replacing any prior
    /// entry under `key`.
    pub async fn set(&self, key: &str, payload: CachedPayload) {
        let mut map = self.entries.write().await;
        map.insert(
            key.to_string(),
            CacheEntry {
                payload,
                cached_time: (self.clock)(),
            },
        );
    }

    /// Drops every entry. Not part of normal request handling; exists for
    /// explicit invalidation and test isolation.
    pub async fn clear(&self) {
        let mut map = self.entries.write().await;
        map.clear();
    }
}

impl Default for ResponseCache {
    fn default() -> Self {
        Self::new()
    }
}
