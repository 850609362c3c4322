use thiserror::Error;

/// Main error type for Dockhand
#[derive(Error, Debug)]
pub enum DockhandError {
    /// Docker API errors
    #[error("Docker error: {0}")]
    Docker(#[from] DockerError),

    /// UI errors
    #[error("UI error: {0}")]
    Ui(#[from] UiError),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// General errors
    #[error("{0}")]
    Other(String),
}

/// Docker-specific errors
#[derive(Error, Debug)]
pub enum DockerError {
    /// Connection errors
    #[error("Failed to connect to Docker: {0}")]
    Connection(String),

    /// Resource not found
    #[error("{resource} not found")]
    NotFound { resource: String },

    /// Permission denied
    #[error("Permission denied accessing Docker")]
    PermissionDenied,

    /// Container errors
    #[error("Container error: {0}")]
    Container(String),
}

/// UI-related errors
#[derive(Error, Debug)]
pub enum UiError {
    /// Terminal errors
    #[error("Terminal error: {0}")]
    Terminal(String),

    /// Rendering errors
    #[error("Rendering error: {0}")]
    Render(String),

    /// Input handling errors
    #[error("Input error: {0}")]
    Input(String),
}

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Parse errors
    #[error("Failed to parse configuration: {0}")]
    Parse(String),

    /// Validation errors
    #[error("Configuration validation failed: {0}")]
    Validation(String),

    /// File not found
    #[error("Configuration file not found: {0}")]
    NotFound(String),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, DockhandError>;

impl DockhandError {
    /// Get a message suitable for the error dialog
    pub fn user_message(&self) -> String {
        match self {
            DockhandError::Docker(DockerError::Connection(_)) => {
                "Could not connect to Docker. Please ensure Docker is running.".to_string()
            }
            DockhandError::Docker(DockerError::PermissionDenied) => {
                "Permission denied. Please check your Docker permissions.".to_string()
            }
            DockhandError::Docker(DockerError::NotFound { resource }) => {
                format!("{} not found. It may have been removed.", resource)
            }
            DockhandError::Config(ConfigError::NotFound(_)) => {
                "Configuration file not found. Using defaults.".to_string()
            }
            _ => self.to_string(),
        }
    }
}

impl From<toml::de::Error> for DockhandError {
    fn from(err: toml::de::Error) -> Self {
        DockhandError::Config(ConfigError::Parse(err.to_string()))
    }
}

impl From<toml::ser::Error> for DockhandError {
    fn from(err: toml::ser::Error) -> Self {
        DockhandError::Config(ConfigError::Parse(err.to_string()))
    }
}
