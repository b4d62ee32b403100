use std::time::{Duration, Instant};

use dashmap::DashMap;
use sha2::{Digest, Sha256};

struct CachedPreview {
    value: String,
    stored_at: Instant,
}

/// In-memory TTL cache for rendered QR previews, keyed by the SHA-256 of
/// the source text
pub struct PreviewCache {
    entries: DashMap<String, CachedPreview>,
    ttl: Duration,
}

impl PreviewCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: DashMap::new(),
            ttl,
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    pub fn key_for(text: &str) -> String {
        hex::encode(Sha256::digest(text.as_bytes()))
    }

    /// Fresh entry for `key`; a stale one is evicted on the way
    pub fn get(&self, key: &str) -> Option<String> {
        let entry = self.entries.get(key)?;
        if entry.stored_at.elapsed() < self.ttl {
            return Some(entry.value.clone());
        }
        drop(entry);
        self.entries
            .remove_if(key, |_, cached| cached.stored_at.elapsed() >= self.ttl);
        None
    }

    pub fn insert(&self, key: String, value: String) {
        self.entries.insert(
            key,
            CachedPreview {
                value,
                stored_at: Instant::now(),
            },
        );
    }

    /// Drop every stale entry, returning how many were removed
    pub fn cleanup_expired(&self) -> usize {
        let before = self.entries.len();
        self.entries
            .retain(|_, cached| cached.stored_at.elapsed() < self.ttl);
        before.saturating_sub(self.entries.len())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
