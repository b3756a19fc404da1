//! Offline asset worker for the Namewürfel front end.
//!
//! Mirrors a cache-first service worker: `install` pre-fetches a fixed
//! manifest into a versioned cache, `activate` drops caches from other
//! versions, and `fetch` answers from the cache before going to the network.

pub mod cache;
pub mod config;
pub mod error;
pub mod network;
pub mod worker;

pub use cache::{Cache, CacheStorage, Response};
pub use config::{CACHE_NAME, MANIFEST, OfflineConfig};
pub use error::{OfflineError, OfflineResult};
pub use network::{DirNetwork, Network};
pub use worker::{OfflineWorker, Served, ServedFrom, WorkerState};
