//! Package discovery.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Default build-output locations, searched in order.
const DEFAULT_CANDIDATES: [(&str, &str); 2] = [
    (
        "androidApp/build/outputs/apk/release/androidApp-release.apk",
        "conductor-release.apk",
    ),
    (
        "androidApp/build/outputs/apk/debug/androidApp-debug.apk",
        "conductor-debug.apk",
    ),
];

/// A resolved installable package.
#[derive(Clone, Debug)]
pub struct PackageInfo {
    /// Location on disk.
    pub path: PathBuf,
    /// Name the file is served and downloaded as.
    pub download_name: String,
    /// Size on disk.
    pub size_bytes: u64,
}

impl PackageInfo {
    /// Resolve a package from an explicit path, or fall back to the default
    /// build-output locations (release first, then debug).
    pub fn resolve(explicit: Option<&Path>) -> Result<Self, ServerError> {
        if let Some(path) = explicit {
            return Self::from_path(path, None);
        }
        for (candidate, download_name) in DEFAULT_CANDIDATES {
            let path = Path::new(candidate);
            if path.is_file() {
                return Self::from_path(path, Some(download_name));
            }
        }
        Err(ServerError::PackageNotFound {
            searched: DEFAULT_CANDIDATES
                .iter()
                .map(|(candidate, _)| PathBuf::from(candidate))
                .collect(),
        })
    }

    fn from_path(path: &Path, download_name: Option<&str>) -> Result<Self, ServerError> {
        let metadata = std::fs::metadata(path).map_err(|_| ServerError::PackageNotFound {
            searched: vec![path.to_path_buf()],
        })?;
        let download_name = match download_name {
            Some(name) => name.to_owned(),
            None => path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|| "conductor.apk".to_owned()),
        };
        Ok(Self {
            path: path.to_path_buf(),
            download_name,
            size_bytes: metadata.len(),
        })
    }

    /// Package size in megabytes, for display.
    #[must_use]
    pub fn size_mb(&self) -> f64 {
        self.size_bytes as f64 / (1024.0 * 1024.0)
    }
}

/// Distribution server failure.
#[derive(Debug, Error)]
pub enum ServerError {
    /// No installable package at any searched location.
    #[error("no installable package found (searched {searched:?}); run the app build first")]
    PackageNotFound {
        /// Locations that were checked.
        searched: Vec<PathBuf>,
    },

    /// The listener could not be bound.
    #[error("failed to bind listener: {0}")]
    Bind(#[source] std::io::Error),

    /// The accept loop failed.
    #[error("server failed: {0}")]
    Serve(#[source] std::io::Error),
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
