//! Configuration for the offline worker.

/// Name of the current cache version.
pub const CACHE_NAME: &str = "dice-roller-cache-v1";

/// Assets pre-fetched on install.
pub const MANIFEST: &[&str] = &[
    "/",
    "/index.html",
    "/style.css",
    "/app.js",
    "/manifest.json",
    "/icons/icon-192x192.png",
    "/icons/icon-512x512.png",
];

/// Configuration for an offline worker.
#[derive(Debug, Clone)]
pub struct OfflineConfig {
    /// Name of the cache this version owns.
    pub cache_name: String,
    /// Paths cached on install.
    pub manifest: Vec<String>,
}

impl Default for OfflineConfig {
    fn default() -> Self {
        Self {
            cache_name: CACHE_NAME.to_string(),
            manifest: MANIFEST.iter().map(|p| p.to_string()).collect(),
        }
    }
}

impl OfflineConfig {
    /// Set the cache name.
    pub fn with_cache_name(mut self, name: impl Into<String>) -> Self {
        self.cache_name = name.into();
        self
    }

    /// Replace the manifest.
    pub fn with_manifest<I, P>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<String>,
    {
        self.manifest = paths.into_iter().map(Into::into).collect();
        self
    }
}
