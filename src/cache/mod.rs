//! In-memory dashboard cache with TTL freshness.
//!
//! Entries are never evicted: a stale entry stays in place until the next
//! successful fetch overwrites it. Freshness is evaluated lazily on read
//! against an injected [`Clock`], so tests can step time without sleeping.

use std::collections::HashMap;
use std::fmt;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use tracing::debug;

use crate::models::LeagueDashboard;

/// Time source for freshness checks.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time.
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Settable clock for tests, held as epoch milliseconds.
pub struct ManualClock {
    epoch_ms: AtomicI64,
}

impl ManualClock {
    pub fn new(start: DateTime<Utc>) -> Self {
        Self {
            epoch_ms: AtomicI64::new(start.timestamp_millis()),
        }
    }

    /// Step the clock forward.
    pub fn advance(&self, delta: Duration) {
        self.epoch_ms.fetch_add(delta.as_millis() as i64, Ordering::SeqCst);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        DateTime::from_timestamp_millis(self.epoch_ms.load(Ordering::SeqCst)).unwrap_or_default()
    }
}

/// Cache key: one dashboard per provider, league, and week.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    pub provider: String,
    pub league_id: String,
    pub week: u16,
}

impl CacheKey {
    pub fn new(provider: &str, league_id: &str, week: u16) -> Self {
        Self {
            provider: provider.to_string(),
            league_id: league_id.to_string(),
            week,
        }
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.provider, self.league_id, self.week)
    }
}

/// A cached dashboard and when it was stored.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    pub data: LeagueDashboard,
    pub fetched_at: DateTime<Utc>,
}

/// Shared TTL cache for normalized dashboards.
pub struct DashboardCache {
    ttl: Duration,
    clock: Arc<dyn Clock>,
    entries: RwLock<HashMap<CacheKey, CacheEntry>>,
}

impl DashboardCache {
    /// Create a cache with an explicit clock.
    pub fn new(ttl: Duration, clock: Arc<dyn Clock>) -> Self {
        Self {
            ttl,
            clock,
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// Create a cache driven by the system clock.
    pub fn with_system_clock(ttl: Duration) -> Self {
        Self::new(ttl, Arc::new(SystemClock))
    }

    /// Look up an entry. Staleness is the caller's call; see [`Self::is_fresh`].
    pub async fn get(&self, key: &CacheKey) -> Option<CacheEntry> {
        self.entries.read().await.get(key).cloned()
    }

    /// Store a dashboard, replacing any previous entry wholesale.
    pub async fn put(&self, key: CacheKey, data: LeagueDashboard) {
        let entry = CacheEntry {
            data,
            fetched_at: self.clock.now(),
        };
        debug!("Cache: storing {}", key);
        self.entries.write().await.insert(key, entry);
    }

    /// Whether an entry is younger than the TTL.
    pub fn is_fresh(&self, entry: &CacheEntry) -> bool {
        self.age_seconds(entry) < self.ttl.as_secs() as i64
    }

    /// Entry age in whole seconds.
    pub fn age_seconds(&self, entry: &CacheEntry) -> i64 {
        self.clock
            .now()
            .signed_duration_since(entry.fetched_at)
            .num_seconds()
    }

    /// Number of stored entries.
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}
