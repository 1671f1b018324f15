//! Mock transport for development without backend access.
//!
//! Loads canned JSON files from a directory and serves them as if they were
//! live responses.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;

use super::client::Transport;
use super::error::HttpError;

/// Transport that serves response bodies from files.
///
/// The directory holds one sub-directory per system identifier, each with
/// `stations.json` and optionally `stations_nearby.json`:
///
/// ```text
/// data/mock_stations/
///   baywheels/stations.json
///   baywheels/stations_nearby.json
/// ```
///
/// A GET for `/api/v1/baywheels/stations/nearby` is answered with
/// `baywheels/stations_nearby.json`. Query parameters are ignored; the
/// canned data is static.
#[derive(Debug, Clone)]
pub struct MockTransport {
    /// Response bodies keyed by request path.
    bodies: Arc<HashMap<String, Vec<u8>>>,
}

impl MockTransport {
    /// Load the canned station files below `data_dir`.
    pub fn new(data_dir: impl AsRef<Path>) -> Result<Self, HttpError> {
        let data_dir = data_dir.as_ref();
        let mut bodies = HashMap::new();

        let systems = std::fs::read_dir(data_dir).map_err(|e| {
            HttpError::Unavailable(format!(
                "failed to read mock data directory {:?}: {}",
                data_dir, e
            ))
        })?;

        for system_dir in systems {
            let system_dir = system_dir
                .map_err(|e| HttpError::Unavailable(format!("failed to read entry: {}", e)))?
                .path();
            if !system_dir.is_dir() {
                continue;
            }
            let Some(system) = system_dir.file_name().and_then(|s| s.to_str()) else {
                continue;
            };

            for (file, suffix) in [
                ("stations.json", "stations"),
                ("stations_nearby.json", "stations/nearby"),
            ] {
                let path = system_dir.join(file);
                if !path.is_file() {
                    continue;
                }
                let body = std::fs::read(&path).map_err(|e| {
                    HttpError::Unavailable(format!("failed to read {:?}: {}", path, e))
                })?;
                bodies.insert(format!("/api/v1/{}/{}", system, suffix), body);
            }
        }

        if bodies.is_empty() {
            return Err(HttpError::Unavailable(format!(
                "no mock station files found in {:?}",
                data_dir
            )));
        }

        Ok(Self {
            bodies: Arc::new(bodies),
        })
    }

    /// Paths that have canned responses.
    pub fn available_paths(&self) -> Vec<&str> {
        let mut paths: Vec<_> = self.bodies.keys().map(String::as_str).collect();
        paths.sort();
        paths
    }

    fn lookup(&self, path: &str) -> Result<Vec<u8>, HttpError> {
        self.bodies
            .get(path)
            .cloned()
            .ok_or_else(|| HttpError::BadResponse {
                status: 404,
                body: format!("no mock data for {}", path),
            })
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn get_raw(&self, path: &str, _query: &[(&str, String)]) -> Result<Vec<u8>, HttpError> {
        self.lookup(path)
    }

    async fn post_raw(&self, path: &str, _form: &[(&str, String)]) -> Result<Vec<u8>, HttpError> {
        self.lookup(path)
    }
}
