use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub mod errors;
pub mod types;

pub use errors::*;
pub use types::{ContainerId, Dialog, NotificationLevel};

/// Docker connection information
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectionInfo {
    pub host: String,
    pub version: String,
    pub api_version: String,
    pub os: String,
    pub arch: String,
}

impl Default for ConnectionInfo {
    fn default() -> Self {
        Self {
            host: "unknown".to_string(),
            version: "unknown".to_string(),
            api_version: "unknown".to_string(),
            os: "unknown".to_string(),
            arch: "unknown".to_string(),
        }
    }
}

/// Port mapping information
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortMapping {
    pub ip: Option<String>,
    pub private_port: u16,
    pub public_port: Option<u16>,
    pub protocol: String,
}

impl std::fmt::Display for PortMapping {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (self.public_port, &self.ip) {
            (Some(public), Some(ip)) => {
                write!(f, "{}:{}->{}/{}", ip, public, self.private_port, self.protocol)
            }
            (Some(public), None) => {
                write!(f, "{}->{}/{}", public, self.private_port, self.protocol)
            }
            _ => write!(f, "{}/{}", self.private_port, self.protocol),
        }
    }
}

/// Container runtime state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContainerState {
    Created,
    Running,
    Paused,
    Restarting,
    Removing,
    Exited,
    Dead,
    Unknown,
}

impl std::fmt::Display for ContainerState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ContainerState::Created => "Created",
            ContainerState::Running => "Running",
            ContainerState::Paused => "Paused",
            ContainerState::Restarting => "Restarting",
            ContainerState::Removing => "Removing",
            ContainerState::Exited => "Exited",
            ContainerState::Dead => "Dead",
            ContainerState::Unknown => "Unknown",
        };
        write!(f, "{}", s)
    }
}

/// Read-only snapshot of one container as reported by the engine
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContainerRecord {
    pub id: String,
    pub short_id: String,
    pub name: String,
    pub image: String,
    pub state: ContainerState,
    pub status: String,
    pub ports: Vec<PortMapping>,
    pub created: DateTime<Utc>,
}

impl Default for ContainerRecord {
    fn default() -> Self {
        Self {
            id: String::new(),
            short_id: String::new(),
            name: String::new(),
            image: String::new(),
            state: ContainerState::Unknown,
            status: String::new(),
            ports: vec![],
            created: Utc::now(),
        }
    }
}

impl ContainerRecord {
    /// Format the port mappings the way `docker ps` prints them
    pub fn ports_display(&self) -> String {
        if self.ports.is_empty() {
            return "-".to_string();
        }
        self.ports
            .iter()
            .map(|p| p.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Actions the UI asks the coordinator to execute
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiAction {
    /// No action
    None,
    /// Quit the application
    Quit,
    /// Start a container
    StartContainer(String),
    /// Stop a container
    StopContainer(String),
    /// Re-query the engine for the container list
    Refresh,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_container_state_display() {
        assert_eq!(ContainerState::Running.to_string(), "Running");
        assert_eq!(ContainerState::Exited.to_string(), "Exited");
    }

    #[test]
    fn test_default_container_record() {
        let record = ContainerRecord::default();
        assert_eq!(record.state, ContainerState::Unknown);
        assert!(record.name.is_empty());
    }

    #[test]
    fn test_port_display_published() {
        let port = PortMapping {
            ip: Some("0.0.0.0".to_string()),
            private_port: 80,
            public_port: Some(8080),
            protocol: "tcp".to_string(),
        };
        assert_eq!(port.to_string(), "0.0.0.0:8080->80/tcp");
    }

    #[test]
    fn test_port_display_unpublished() {
        let port = PortMapping {
            ip: None,
            private_port: 5432,
            public_port: None,
            protocol: "tcp".to_string(),
        };
        assert_eq!(port.to_string(), "5432/tcp");
    }

    #[test]
    fn test_ports_display_empty() {
        let record = ContainerRecord::default();
        assert_eq!(record.ports_display(), "-");
    }

    #[test]
    fn test_ports_display_joined() {
        let record = ContainerRecord {
            ports: vec![
                PortMapping {
                    ip: None,
                    private_port: 80,
                    public_port: Some(8080),
                    protocol: "tcp".to_string(),
                },
                PortMapping {
                    ip: None,
                    private_port: 443,
                    public_port: None,
                    protocol: "tcp".to_string(),
                },
            ],
            ..Default::default()
        };
        assert_eq!(record.ports_display(), "8080->80/tcp, 443/tcp");
    }
}
