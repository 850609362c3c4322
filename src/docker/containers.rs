//! Container operations

use bollard::container::{ListContainersOptions, StopContainerOptions};
use bollard::models::ContainerStateStatusEnum;
use tracing::{debug, info};

use crate::core::{ContainerRecord, ContainerState, DockerError, PortMapping, Result};
use crate::docker::DockerClient;

impl DockerClient {
    /// List containers, including stopped ones when `all` is set
    pub async fn list_containers(&self, all: bool) -> Result<Vec<ContainerRecord>> {
        debug!("Listing containers (all={})", all);

        let options = ListContainersOptions::<String> {
            all,
            ..Default::default()
        };

        let containers = self
            .inner()
            .list_containers(Some(options))
            .await
            .map_err(|e| DockerError::Container(e.to_string()))?;

        info!("Found {} containers", containers.len());

        Ok(containers.into_iter().map(Into::into).collect())
    }

    /// Look up a single container by id via engine inspect
    ///
    /// Used as an existence check before lifecycle calls, so a removed
    /// container surfaces as a not-found error rather than a start/stop
    /// failure.
    pub async fn get_container(&self, id: &str) -> Result<ContainerRecord> {
        debug!("Inspecting container {}", id);

        let inspect = self
            .inner()
            .inspect_container(id, None)
            .await
            .map_err(|e| container_error(id, e))?;

        let full_id = inspect.id.unwrap_or_else(|| id.to_string());
        let short_id = full_id.chars().take(12).collect();
        let state = inspect
            .state
            .as_ref()
            .map(|s| parse_inspect_state(s.status))
            .unwrap_or(ContainerState::Unknown);

        let ports = inspect
            .network_settings
            .and_then(|ns| ns.ports)
            .map(|ports| {
                ports
                    .into_iter()
                    .flat_map(|(container_port, bindings)| {
                        let (private_port, protocol) = split_port_key(&container_port);
                        match bindings {
                            Some(bindings) if !bindings.is_empty() => bindings
                                .into_iter()
                                .map(|b| PortMapping {
                                    ip: b.host_ip.clone(),
                                    private_port,
                                    public_port: b
                                        .host_port
                                        .as_deref()
                                        .and_then(|p| p.parse().ok()),
                                    protocol: protocol.clone(),
                                })
                                .collect(),
                            _ => vec![PortMapping {
                                ip: None,
                                private_port,
                                public_port: None,
                                protocol,
                            }],
                        }
                    })
                    .collect()
            })
            .unwrap_or_default();

        Ok(ContainerRecord {
            id: full_id,
            short_id,
            name: inspect
                .name
                .map(|n| n.trim_start_matches('/').to_string())
                .unwrap_or_default(),
            image: inspect
                .config
                .and_then(|c| c.image)
                .unwrap_or_else(|| "unknown".to_string()),
            state,
            status: state.to_string(),
            ports,
            created: inspect
                .created
                .and_then(|c| chrono::DateTime::parse_from_rfc3339(&c).ok())
                .map(|dt| dt.with_timezone(&chrono::Utc))
                .unwrap_or_else(chrono::Utc::now),
        })
    }

    /// Start a container
    pub async fn start_container(&self, id: &str) -> Result<()> {
        info!("Starting container: {}", id);

        self.inner()
            .start_container::<String>(id, None)
            .await
            .map_err(|e| container_error(id, e))?;

        info!("Container {} started successfully", id);
        Ok(())
    }

    /// Stop a container
    pub async fn stop_container(&self, id: &str, timeout: Option<i64>) -> Result<()> {
        let timeout = timeout.unwrap_or(10);
        info!("Stopping container: {} (timeout={}s)", id, timeout);

        let options = StopContainerOptions { t: timeout };

        self.inner()
            .stop_container(id, Some(options))
            .await
            .map_err(|e| container_error(id, e))?;

        info!("Container {} stopped successfully", id);
        Ok(())
    }
}

fn container_error(id: &str, e: bollard::errors::Error) -> DockerError {
    match e {
        bollard::errors::Error::DockerResponseServerError {
            status_code: 404, ..
        } => DockerError::NotFound {
            resource: format!("Container {}", id),
        },
        e => DockerError::Container(format!("{}: {}", id, e)),
    }
}

// Conversion implementations
impl From<bollard::models::ContainerSummary> for ContainerRecord {
    fn from(c: bollard::models::ContainerSummary) -> Self {
        let id = c.id.clone().unwrap_or_default();
        let short_id = id.chars().take(12).collect();

        let state = parse_container_state(c.state.as_deref());
        let status = c.status.clone().unwrap_or_default();

        // The engine reports names with a leading slash
        let name = c
            .names
            .unwrap_or_default()
            .first()
            .map(|n| n.trim_start_matches('/').to_string())
            .unwrap_or_default();

        let ports: Vec<_> = c
            .ports
            .unwrap_or_default()
            .into_iter()
            .map(|p| PortMapping {
                ip: p.ip,
                private_port: u16::try_from(p.private_port).unwrap_or(0),
                public_port: p.public_port.and_then(|p| u16::try_from(p).ok()),
                protocol: p
                    .typ
                    .map(|t| t.to_string())
                    .unwrap_or_else(|| "tcp".to_string()),
            })
            .collect();

        Self {
            id,
            short_id,
            name,
            image: c.image.filter(|i| !i.is_empty()).unwrap_or_else(|| "unknown".to_string()),
            state,
            status,
            ports,
            created: chrono::DateTime::from_timestamp(c.created.unwrap_or(0), 0)
                .unwrap_or_else(chrono::Utc::now),
        }
    }
}

fn parse_container_state(state: Option<&str>) -> ContainerState {
    match state {
        Some("created") => ContainerState::Created,
        Some("running") => ContainerState::Running,
        Some("paused") => ContainerState::Paused,
        Some("restarting") => ContainerState::Restarting,
        Some("removing") => ContainerState::Removing,
        Some("exited") => ContainerState::Exited,
        Some("dead") => ContainerState::Dead,
        _ => ContainerState::Unknown,
    }
}

fn parse_inspect_state(status: Option<ContainerStateStatusEnum>) -> ContainerState {
    match status {
        Some(ContainerStateStatusEnum::CREATED) => ContainerState::Created,
        Some(ContainerStateStatusEnum::RUNNING) => ContainerState::Running,
        Some(ContainerStateStatusEnum::PAUSED) => ContainerState::Paused,
        Some(ContainerStateStatusEnum::RESTARTING) => ContainerState::Restarting,
        Some(ContainerStateStatusEnum::REMOVING) => ContainerState::Removing,
        Some(ContainerStateStatusEnum::EXITED) => ContainerState::Exited,
        Some(ContainerStateStatusEnum::DEAD) => ContainerState::Dead,
        _ => ContainerState::Unknown,
    }
}

/// Parse an engine port key like "8080/tcp" into (port, protocol)
fn split_port_key(key: &str) -> (u16, String) {
    let mut parts = key.splitn(2, '/');
    let port = parts.next().and_then(|p| p.parse().ok()).unwrap_or(0);
    let protocol = parts.next().unwrap_or("tcp").to_string();
    (port, protocol)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_container_state() {
        assert_eq!(
            parse_container_state(Some("running")),
            ContainerState::Running
        );
        assert_eq!(parse_container_state(Some("exited")), ContainerState::Exited);
        assert_eq!(parse_container_state(Some("paused")), ContainerState::Paused);
        assert_eq!(parse_container_state(None), ContainerState::Unknown);
    }

    #[test]
    fn test_split_port_key() {
        assert_eq!(split_port_key("8080/tcp"), (8080, "tcp".to_string()));
        assert_eq!(split_port_key("53/udp"), (53, "udp".to_string()));
        assert_eq!(split_port_key("80"), (80, "tcp".to_string()));
    }

    #[test]
    fn test_summary_conversion() {
        let summary = bollard::models::ContainerSummary {
            id: Some("abc123def456789".to_string()),
            names: Some(vec!["/web".to_string()]),
            image: Some("nginx:latest".to_string()),
            state: Some("running".to_string()),
            status: Some("Up 2 hours".to_string()),
            ..Default::default()
        };

        let record: ContainerRecord = summary.into();
        assert_eq!(record.short_id, "abc123def456");
        assert_eq!(record.name, "web");
        assert_eq!(record.image, "nginx:latest");
        assert_eq!(record.state, ContainerState::Running);
        assert_eq!(record.status, "Up 2 hours");
    }

    #[test]
    fn test_summary_conversion_out_of_range_ports() {
        let summary = bollard::models::ContainerSummary {
            id: Some("abc123def456789".to_string()),
            ports: Some(vec![bollard::models::Port {
                ip: None,
                private_port: 70000,
                public_port: Some(-1),
                typ: None,
            }]),
            ..Default::default()
        };

        let record: ContainerRecord = summary.into();
        assert_eq!(record.ports.len(), 1);
        assert_eq!(record.ports[0].private_port, 0);
        assert_eq!(record.ports[0].public_port, None);
    }

    #[test]
    fn test_summary_conversion_missing_image() {
        let summary = bollard::models::ContainerSummary {
            id: Some("abc123def456789".to_string()),
            ..Default::default()
        };

        let record: ContainerRecord = summary.into();
        assert_eq!(record.image, "unknown");
        assert_eq!(record.state, ContainerState::Unknown);
    }

    // Integration tests require Docker daemon
    #[tokio::test]
    #[ignore = "requires Docker daemon"]
    async fn test_list_containers() {
        let client = DockerClient::from_env().await.unwrap();
        let containers = client.list_containers(true).await;
        assert!(containers.is_ok());
    }
}
