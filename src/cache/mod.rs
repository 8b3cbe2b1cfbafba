//! In-memory, time-bounded cache of derived data keyed by string.

pub mod keys;

use std::{
    collections::HashMap,
    sync::{Arc, Mutex, MutexGuard},
};

use chrono::{DateTime, Duration, Utc};
use regex::Regex;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use tracing::{debug, warn};

use crate::{
    errors::Result,
    time::{Clock, SystemClock},
};

pub use keys::CacheKeys;

pub const DEFAULT_TTL_HOURS: i64 = 48;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CacheEntry {
    pub value: serde_json::Value,
    pub stored_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl CacheEntry {
    fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now > self.expires_at
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CacheStats {
    pub entries: usize,
    pub keys: Vec<String>,
}

/// Key/value cache whose entries expire after a time-to-live.
///
/// Values are stored as JSON so one cache can hold heterogeneous payloads.
pub struct DataCache {
    clock: Arc<dyn Clock>,
    default_ttl: Duration,
    entries: Mutex<HashMap<String, CacheEntry>>,
}

impl Default for DataCache {
    fn default() -> Self {
        Self::new(Arc::new(SystemClock), Duration::hours(DEFAULT_TTL_HOURS))
    }
}

impl DataCache {
    pub fn new(clock: Arc<dyn Clock>, default_ttl: Duration) -> Self {
        Self {
            clock,
            default_ttl,
            entries: Mutex::new(HashMap::new()),
        }
    }

    pub fn default_ttl(&self) -> Duration {
        self.default_ttl
    }

    pub fn set<T: Serialize>(&self, key: &str, value: &T) -> Result<()> {
        self.set_with_ttl(key, value, self.default_ttl)
    }

    pub fn set_with_ttl<T: Serialize>(&self, key: &str, value: &T, ttl: Duration) -> Result<()> {
        let value = serde_json::to_value(value)?;
        let stored_at = self.clock.now();
        let entry = CacheEntry {
            value,
            stored_at,
            expires_at: stored_at
                .checked_add_signed(ttl)
                .unwrap_or(DateTime::<Utc>::MAX_UTC),
        };
        self.lock().insert(key.to_string(), entry);
        debug!("cached `{key}` for {}s", ttl.num_seconds());
        Ok(())
    }

    /// Returns the cached value, evicting it first if it has expired.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let now = self.clock.now();
        let value = {
            let mut entries = self.lock();
            let expired = entries.get(key)?.is_expired(now);
            if expired {
                entries.remove(key);
                debug!("evicted expired cache entry `{key}`");
                return None;
            }
            entries.get(key)?.value.clone()
        };
        match serde_json::from_value(value) {
            Ok(decoded) => Some(decoded),
            Err(err) => {
                warn!("cache entry `{key}` could not be decoded: {err}");
                None
            }
        }
    }

    pub fn contains(&self, key: &str) -> bool {
        let now = self.clock.now();
        self.lock()
            .get(key)
            .map(|entry| !entry.is_expired(now))
            .unwrap_or(false)
    }

    pub fn invalidate<I, K>(&self, keys: I) -> usize
    where
        I: IntoIterator<Item = K>,
        K: AsRef<str>,
    {
        let mut entries = self.lock();
        let mut removed = 0;
        for key in keys {
            let key: &str = key.as_ref();
            if entries.remove(key).is_some() {
                removed += 1;
            }
        }
        removed
    }

    /// Removes every key matching `pattern`; returns how many were dropped.
    pub fn invalidate_matching(&self, pattern: &Regex) -> usize {
        let mut entries = self.lock();
        let before = entries.len();
        entries.retain(|key, _| !pattern.is_match(key));
        let removed = before - entries.len();
        debug!("invalidated {removed} entries matching `{pattern}`");
        removed
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    pub fn purge_expired(&self) -> usize {
        let now = self.clock.now();
        let mut entries = self.lock();
        let before = entries.len();
        entries.retain(|_, entry| !entry.is_expired(now));
        before - entries.len()
    }

    pub fn stats(&self) -> CacheStats {
        let entries = self.lock();
        let mut keys: Vec<String> = entries.keys().cloned().collect();
        keys.sort();
        CacheStats {
            entries: keys.len(),
            keys,
        }
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, CacheEntry>> {
        self.entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
