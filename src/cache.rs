//! Time-bounded memo of the data source's readiness.
//!
//! Owned by whoever needs it (the HTTP state) rather than living in a
//! process-wide static. Entries expire after an explicit TTL and can be
//! dropped early with [`ReadinessCache::invalidate`].

use std::sync::Mutex;
use std::time::{Duration, Instant};

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Result of the last readiness probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Readiness {
    pub ready: bool,
    pub checked_at: DateTime<Utc>,
}

struct Entry {
    readiness: Readiness,
    stored: Instant,
}

pub struct ReadinessCache {
    ttl: Duration,
    entry: Mutex<Option<Entry>>,
}

impl ReadinessCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entry: Mutex::new(None),
        }
    }

    /// The cached probe result, or `None` if nothing was stored or it has
    /// outlived the TTL.
    pub fn get(&self) -> Option<Readiness> {
        let entry = self.entry.lock().unwrap_or_else(|p| p.into_inner());
        entry
            .as_ref()
            .filter(|e| e.stored.elapsed() < self.ttl)
            .map(|e| e.readiness)
    }

    /// Record a fresh probe result and return it.
    pub fn store(&self, ready: bool) -> Readiness {
        let readiness = Readiness {
            ready,
            checked_at: Utc::now(),
        };
        *self.entry.lock().unwrap_or_else(|p| p.into_inner()) = Some(Entry {
            readiness,
            stored: Instant::now(),
        });
        readiness
    }

    /// Forget the cached result so the next check probes again.
    pub fn invalidate(&self) {
        *self.entry.lock().unwrap_or_else(|p| p.into_inner()) = None;
        tracing::debug!("readiness cache invalidated");
    }
}
