use std::collections::BTreeMap;
use std::sync::RwLock;
use std::time::{Duration, Instant};

use crate::models::Post;

/// A bounded TTL cache for slug lookups. Expired entries are swept on every
/// insert, and once `capacity` live entries are held the oldest is dropped
/// before a new one goes in, so a crawl of unknown slugs cannot grow the
/// map without bound.
pub struct PostCache {
    ttl: Duration,
    capacity: usize,
    entries: RwLock<BTreeMap<String, CachedLookup>>,
}

struct CachedLookup {
    fetched_at: Instant,
    post: Option<Post>,
}

impl PostCache {
    pub fn new(ttl: Duration, capacity: usize) -> Self {
        Self {
            ttl,
            capacity,
            entries: RwLock::new(BTreeMap::new()),
        }
    }

    /// Returns the cached lookup for `slug` if it is still fresh. `Some(None)`
    /// is a cached miss; a poisoned lock degrades to a cache miss.
    pub fn get(&self, slug: &str) -> Option<Option<Post>> {
        let entries = self.entries.read().ok()?;
        let entry = entries.get(slug)?;

        if entry.fetched_at.elapsed() < self.ttl {
            Some(entry.post.clone())
        } else {
            None
        }
    }

    pub fn insert(&self, slug: String, post: Option<Post>) {
        let mut entries = match self.entries.write() {
            Ok(entries) => entries,
            Err(_) => return,
        };

        let ttl = self.ttl;
        entries.retain(|_, entry| entry.fetched_at.elapsed() < ttl);

        if entries.len() >= self.capacity {
            let oldest = entries
                .iter()
                .min_by_key(|(_, entry)| entry.fetched_at)
                .map(|(slug, _)| slug.clone());
            if let Some(slug) = oldest {
                entries.remove(&slug);
            }
        }

        entries.insert(
            slug,
            CachedLookup {
                fetched_at: Instant::now(),
                post,
            },
        );
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.entries.read().map(|e| e.len()).unwrap_or_default()
    }
}
