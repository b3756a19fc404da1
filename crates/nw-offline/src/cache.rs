//! Named response caches.

use std::collections::BTreeMap;

/// A fetched asset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    /// Request path the response answers.
    pub path: String,
    /// Response body.
    pub body: Vec<u8>,
}

/// One named cache of responses keyed by path.
#[derive(Debug, Clone, Default)]
pub struct Cache {
    entries: BTreeMap<String, Response>,
}

impl Cache {
    /// Store `response` under its path.
    pub fn put(&mut self, response: Response) {
        self.entries.insert(response.path.clone(), response);
    }

    /// The response cached for `path`.
    pub fn get(&self, path: &str) -> Option<&Response> {
        self.entries.get(path)
    }

    /// Cached paths in order.
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Number of cached responses.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// All caches, by name.
#[derive(Debug, Clone, Default)]
pub struct CacheStorage {
    caches: BTreeMap<String, Cache>,
}

impl CacheStorage {
    /// Empty storage.
    pub fn new() -> Self {
        Self::default()
    }

    /// The cache called `name`, created if missing.
    pub fn open(&mut self, name: &str) -> &mut Cache {
        self.caches.entry(name.to_string()).or_default()
    }

    /// Install `cache` under `name`, replacing any previous one.
    pub fn insert(&mut self, name: &str, cache: Cache) {
        self.caches.insert(name.to_string(), cache);
    }

    /// The cache called `name`, if present.
    pub fn get(&self, name: &str) -> Option<&Cache> {
        self.caches.get(name)
    }

    /// Names of all caches.
    pub fn keys(&self) -> Vec<String> {
        self.caches.keys().cloned().collect()
    }

    /// Delete the cache called `name`. Returns whether it existed.
    pub fn delete(&mut self, name: &str) -> bool {
        self.caches.remove(name).is_some()
    }

    /// The first cached response for `path` across all caches.
    pub fn match_path(&self, path: &str) -> Option<&Response> {
        self.caches.values().find_map(|cache| cache.get(path))
    }
}
