//! The offline worker lifecycle: install, activate, fetch.

use tracing::{debug, error, info};

use crate::cache::{Cache, CacheStorage, Response};
use crate::config::OfflineConfig;
use crate::error::{OfflineError, OfflineResult};
use crate::network::Network;

/// Lifecycle stage of the worker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkerState {
    /// Created, nothing cached yet.
    New,
    /// The manifest is cached.
    Installed,
    /// Stale caches are gone; the worker serves requests.
    Active,
}

/// Where a fetched response came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServedFrom {
    /// Answered from a cache.
    Cache,
    /// Forwarded to the network.
    Network,
}

/// A response plus its origin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Served {
    /// The response.
    pub response: Response,
    /// Where it came from.
    pub from: ServedFrom,
}

/// A cache-first asset worker.
#[derive(Debug)]
pub struct OfflineWorker<N> {
    config: OfflineConfig,
    network: N,
    storage: CacheStorage,
    state: WorkerState,
}

impl<N: Network> OfflineWorker<N> {
    /// Create a worker with empty cache storage.
    pub fn new(config: OfflineConfig, network: N) -> Self {
        Self::with_storage(config, network, CacheStorage::new())
    }

    /// Create a worker over existing cache storage, e.g. caches left by an
    /// earlier version.
    pub fn with_storage(config: OfflineConfig, network: N, storage: CacheStorage) -> Self {
        Self {
            config,
            network,
            storage,
            state: WorkerState::New,
        }
    }

    /// The lifecycle stage.
    pub fn state(&self) -> WorkerState {
        self.state
    }

    /// The cache storage.
    pub fn storage(&self) -> &CacheStorage {
        &self.storage
    }

    /// The configuration.
    pub fn config(&self) -> &OfflineConfig {
        &self.config
    }

    /// Fetch every manifest path into the current cache.
    ///
    /// All or nothing: if any path fails, no cache is written.
    pub fn install(&mut self) -> OfflineResult<()> {
        info!("installing offline cache '{}'", self.config.cache_name);
        let mut cache = Cache::default();
        for path in &self.config.manifest {
            match self.network.fetch(path) {
                Ok(response) => cache.put(response),
                Err(e) => {
                    error!("offline installation failed on {path}: {e}");
                    return Err(OfflineError::Install {
                        path: path.clone(),
                        source: Box::new(e),
                    });
                }
            }
        }
        debug!(assets = cache.len(), "caching app shell");
        self.storage.insert(&self.config.cache_name, cache);
        self.state = WorkerState::Installed;
        info!("offline installation complete");
        Ok(())
    }

    /// Delete every cache not named for the current version.
    ///
    /// Returns the names of the deleted caches.
    pub fn activate(&mut self) -> Vec<String> {
        info!("activating offline worker");
        let stale: Vec<String> = self
            .storage
            .keys()
            .into_iter()
            .filter(|name| *name != self.config.cache_name)
            .collect();
        for name in &stale {
            info!("deleting old cache '{name}'");
            self.storage.delete(name);
        }
        self.state = WorkerState::Active;
        stale
    }

    /// Serve `path` from any cache, falling back to the network.
    ///
    /// Network responses are not cached. A network failure is returned as
    /// is, with no fallback content.
    pub fn fetch(&self, path: &str) -> OfflineResult<Served> {
        if let Some(response) = self.storage.match_path(path) {
            debug!("serving {path} from cache");
            return Ok(Served {
                response: response.clone(),
                from: ServedFrom::Cache,
            });
        }
        debug!("{path} not cached, fetching from network");
        self.network
            .fetch(path)
            .map(|response| Served {
                response,
                from: ServedFrom::Network,
            })
            .inspect_err(|e| error!("fetch failed for {path}: {e}"))
    }
}
