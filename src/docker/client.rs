use std::sync::Arc;

use bollard::Docker;
use tracing::{debug, info};

use crate::core::{ConnectionInfo, DockerError, Result};

const DEFAULT_SOCKET: &str = "unix:///var/run/docker.sock";

/// Docker client wrapper
#[derive(Clone)]
pub struct DockerClient {
    inner: Arc<Docker>,
    connection_info: ConnectionInfo,
}

impl DockerClient {
    /// Create a new client from environment (DOCKER_HOST, etc.)
    pub async fn from_env() -> Result<Self> {
        let host =
            std::env::var("DOCKER_HOST").unwrap_or_else(|_| DEFAULT_SOCKET.to_string());
        info!("Creating Docker client from environment ({})", host);

        let docker = Docker::connect_with_local_defaults()
            .map_err(|e| DockerError::Connection(e.to_string()))?;

        Self::new(docker, host).await
    }

    /// Create a new client with custom host
    pub async fn with_host(host: &str) -> Result<Self> {
        info!("Creating Docker client with host: {}", host);

        let docker = Docker::connect_with_http(host, 120, bollard::API_DEFAULT_VERSION)
            .map_err(|e| DockerError::Connection(e.to_string()))?;

        Self::new(docker, host.to_string()).await
    }

    /// Internal constructor; fetches engine version info up front
    async fn new(docker: Docker, host: String) -> Result<Self> {
        debug!("Fetching Docker version information");

        let version = docker
            .version()
            .await
            .map_err(|e| DockerError::Connection(e.to_string()))?;

        let info = ConnectionInfo {
            host,
            version: version.version.unwrap_or_else(|| "unknown".to_string()),
            api_version: version.api_version.unwrap_or_else(|| "unknown".to_string()),
            os: version.os.unwrap_or_else(|| "unknown".to_string()),
            arch: version.arch.unwrap_or_else(|| "unknown".to_string()),
        };

        info!(
            "Docker client initialized: {} (API: {}) on {}/{} via {}",
            info.version, info.api_version, info.os, info.arch, info.host
        );

        Ok(Self {
            inner: Arc::new(docker),
            connection_info: info,
        })
    }

    /// Get connection information
    pub fn connection_info(&self) -> &ConnectionInfo {
        &self.connection_info
    }

    /// Ping the Docker daemon
    pub async fn ping(&self) -> Result<String> {
        debug!("Pinging Docker daemon");

        let response = self
            .inner
            .ping()
            .await
            .map_err(|e| DockerError::Connection(e.to_string()))?;

        Ok(response)
    }

    /// Get the inner Docker client
    pub(crate) fn inner(&self) -> &Docker {
        &self.inner
    }
}
