//! Application state management

use chrono::Utc;

use crate::core::{ConnectionInfo, ContainerRecord, Dialog, NotificationLevel};

/// Main application state
#[derive(Debug, Clone)]
pub struct AppState {
    // Docker data
    pub containers: Vec<ContainerRecord>,
    pub selected_container: Option<String>,
    pub container_list_selected: usize,

    // Connection
    pub docker_connected: bool,
    pub connection_info: ConnectionInfo,

    // UI state
    pub terminal_size: (u16, u16),
    pub show_help: bool,
    pub dialog: Option<Dialog>,
    pub notifications: Vec<Notification>,

    // Async operations tracking
    pub loading: bool,
}

/// Notification message
#[derive(Debug, Clone)]
pub struct Notification {
    pub id: uuid::Uuid,
    pub message: String,
    pub level: NotificationLevel,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

impl AppState {
    /// Create new app state
    pub fn new() -> Self {
        Self {
            containers: vec![],
            selected_container: None,
            container_list_selected: 0,
            docker_connected: false,
            connection_info: ConnectionInfo::default(),
            terminal_size: (80, 24),
            show_help: false,
            dialog: None,
            notifications: vec![],
            loading: false,
        }
    }

    /// Add a notification
    pub fn add_notification(&mut self, message: impl Into<String>, level: NotificationLevel) {
        let notification = Notification {
            id: uuid::Uuid::new_v4(),
            message: message.into(),
            level,
            timestamp: Utc::now(),
        };
        self.notifications.push(notification);

        // Keep only last 10 notifications
        if self.notifications.len() > 10 {
            self.notifications.remove(0);
        }
    }

    /// Clear old notifications (older than threshold)
    pub fn clear_old_notifications(&mut self, max_age_seconds: i64) {
        let cutoff = Utc::now() - chrono::Duration::seconds(max_age_seconds);
        self.notifications.retain(|n| n.timestamp > cutoff);
    }

    /// Show a modal dialog
    pub fn show_dialog(&mut self, dialog: Dialog) {
        self.dialog = Some(dialog);
    }

    /// Dismiss the active dialog
    pub fn dismiss_dialog(&mut self) {
        self.dialog = None;
    }

    /// Update containers list, keeping the selection on the same
    /// container when it still exists
    pub fn update_containers(&mut self, containers: Vec<ContainerRecord>) {
        let previous = self.selected_container.clone();
        self.containers = containers;

        if self.containers.is_empty() {
            self.container_list_selected = 0;
            self.selected_container = None;
            return;
        }

        if let Some(id) = previous {
            if let Some(idx) = self.containers.iter().position(|c| c.id == id) {
                self.container_list_selected = idx;
            }
        }

        if self.container_list_selected >= self.containers.len() {
            self.container_list_selected = self.containers.len() - 1;
        }
        self.selected_container = Some(self.containers[self.container_list_selected].id.clone());
    }

    /// Get the currently selected container
    pub fn selected(&self) -> Option<&ContainerRecord> {
        self.containers.get(self.container_list_selected)
    }

    /// Navigate to next container in list
    pub fn next_container(&mut self) {
        if self.containers.is_empty() {
            return;
        }
        self.container_list_selected = (self.container_list_selected + 1) % self.containers.len();
        self.selected_container = Some(self.containers[self.container_list_selected].id.clone());
    }

    /// Navigate to previous container in list
    pub fn previous_container(&mut self) {
        if self.containers.is_empty() {
            return;
        }
        if self.container_list_selected == 0 {
            self.container_list_selected = self.containers.len() - 1;
        } else {
            self.container_list_selected -= 1;
        }
        self.selected_container = Some(self.containers[self.container_list_selected].id.clone());
    }

    /// Set Docker connection status
    pub fn set_docker_connected(&mut self, connected: bool, info: ConnectionInfo) {
        self.docker_connected = connected;
        self.connection_info = info;
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
