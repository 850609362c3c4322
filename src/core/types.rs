//! Core type definitions and shared types

/// Type alias for container IDs
pub type ContainerId = String;

/// Notification level for status messages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Info,
    Success,
    Warning,
    Error,
}

impl std::fmt::Display for NotificationLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NotificationLevel::Info => write!(f, "INFO"),
            NotificationLevel::Success => write!(f, "SUCCESS"),
            NotificationLevel::Warning => write!(f, "WARNING"),
            NotificationLevel::Error => write!(f, "ERROR"),
        }
    }
}

/// Modal message box shown after an action completes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dialog {
    /// Success/informational message with a title
    Info { title: String, message: String },
    /// Error message from a failed engine call
    Error(String),
}

impl Dialog {
    pub fn info(title: impl Into<String>, message: impl Into<String>) -> Self {
        Dialog::Info {
            title: title.into(),
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Dialog::Error(message.into())
    }

    /// Title line for the dialog border
    pub fn title(&self) -> &str {
        match self {
            Dialog::Info { title, .. } => title,
            Dialog::Error(_) => "Error",
        }
    }

    /// Body text
    pub fn message(&self) -> &str {
        match self {
            Dialog::Info { message, .. } => message,
            Dialog::Error(message) => message,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Dialog::Error(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notification_level_display() {
        assert_eq!(NotificationLevel::Error.to_string(), "ERROR");
        assert_eq!(NotificationLevel::Success.to_string(), "SUCCESS");
    }

    #[test]
    fn test_dialog_accessors() {
        let info = Dialog::info("Container Start", "started");
        assert_eq!(info.title(), "Container Start");
        assert_eq!(info.message(), "started");
        assert!(!info.is_error());

        let err = Dialog::error("boom");
        assert_eq!(err.title(), "Error");
        assert_eq!(err.message(), "boom");
        assert!(err.is_error());
    }
}
