//! Network access for the offline worker.

use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};

use crate::cache::Response;
use crate::error::{OfflineError, OfflineResult};

/// Fetches assets that are not cached.
pub trait Network {
    /// Fetch the asset at `path`.
    fn fetch(&self, path: &str) -> OfflineResult<Response>;
}

/// Serves assets from a directory, `/` mapping to `index.html`.
#[derive(Debug, Clone)]
pub struct DirNetwork {
    root: PathBuf,
}

impl DirNetwork {
    /// Serve files below `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn resolve(&self, path: &str) -> Option<PathBuf> {
        let relative = path.trim_start_matches('/');
        let relative = if relative.is_empty() {
            "index.html"
        } else {
            relative
        };
        let relative = Path::new(relative);
        if relative
            .components()
            .all(|c| matches!(c, Component::Normal(_)))
        {
            Some(self.root.join(relative))
        } else {
            None
        }
    }
}

impl Network for DirNetwork {
    fn fetch(&self, path: &str) -> OfflineResult<Response> {
        let file = self
            .resolve(path)
            .ok_or_else(|| OfflineError::NotFound(path.to_string()))?;
        match std::fs::read(&file) {
            Ok(body) => Ok(Response {
                path: path.to_string(),
                body,
            }),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                Err(OfflineError::NotFound(path.to_string()))
            }
            Err(source) => Err(OfflineError::Io { path: file, source }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serves_files_and_index() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("index.html"), "<html>").unwrap();
        std::fs::create_dir(dir.path().join("icons")).unwrap();
        std::fs::write(dir.path().join("icons").join("a.png"), [1u8, 2, 3]).unwrap();

        let net = DirNetwork::new(dir.path());
        assert_eq!(net.fetch("/").unwrap().body, b"<html>");
        assert_eq!(net.fetch("/index.html").unwrap().body, b"<html>");
        assert_eq!(net.fetch("/icons/a.png").unwrap().body, vec![1, 2, 3]);
        assert_eq!(net.fetch("/icons/a.png").unwrap().path, "/icons/a.png");
    }

    #[test]
    fn missing_and_escaping_paths() {
        let dir = tempfile::tempdir().unwrap();
        let net = DirNetwork::new(dir.path());
        assert!(matches!(net.fetch("/nope.css"), Err(OfflineError::NotFound(_))));
        assert!(matches!(net.fetch("/../secret"), Err(OfflineError::NotFound(_))));
    }
}
