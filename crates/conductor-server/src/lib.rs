//! # conductor-server
//!
//! LAN distribution server for the Conductor mobile package.
//!
//! A thin file-serving wrapper around two routes: a generated landing page
//! with install steps, and the installable package itself with the Android
//! package content type. Phones on the same network open
//! `http://<lan-ip>:<port>/` to download and install.
//!
//! This crate carries none of the event schema or codec contracts — it only
//! publishes bytes.

#![deny(unsafe_code)]

pub mod app;
pub mod net;
pub mod package;

pub use app::router;
pub use net::local_ip;
pub use package::{PackageInfo, ServerError};

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

/// Distribution server configuration.
#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// Explicit package path; when `None` the default build-output
    /// locations are searched (release first, then debug).
    pub package_path: Option<PathBuf>,
    /// Port to listen on, on all interfaces.
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            package_path: None,
            port: 8888,
        }
    }
}

impl ServerConfig {
    /// The URL phones on the LAN should open.
    #[must_use]
    pub fn lan_url(&self) -> String {
        match local_ip() {
            IpAddr::V4(ip) => format!("http://{ip}:{}", self.port),
            IpAddr::V6(ip) => format!("http://[{ip}]:{}", self.port),
        }
    }
}

/// Resolve the package, bind the listener, and serve until shutdown.
pub async fn run(config: ServerConfig) -> Result<(), ServerError> {
    let package = PackageInfo::resolve(config.package_path.as_deref())?;
    tracing::info!(
        package = %package.path.display(),
        size_bytes = package.size_bytes,
        "serving package"
    );

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(ServerError::Bind)?;
    tracing::info!(%addr, url = %config.lan_url(), "distribution server listening");

    axum::serve(listener, router(package))
        .await
        .map_err(ServerError::Serve)
}
