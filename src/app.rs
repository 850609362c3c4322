//! Main application coordinator

use anyhow::Result;
use crossterm::event::{DisableMouseCapture, EnableMouseCapture, Event};
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::core::{ConnectionInfo, Dialog, DockerError, NotificationLevel, UiAction};
use crate::docker::DockerClient;
use crate::state::AppState;
use crate::ui::components::container_table::StatusColors;
use crate::ui::UiApp;

/// Main application struct
pub struct App {
    config: Config,
    state: AppState,
    docker_client: Option<DockerClient>,
}

impl App {
    /// Create a new application instance
    pub async fn new(config: Config) -> Result<Self> {
        info!("Creating new App instance");

        let mut state = AppState::new();

        // Try to connect to Docker; the UI still starts disconnected
        let docker_client = match Self::connect_docker(&config).await {
            Ok((client, info)) => {
                state.set_docker_connected(true, info);
                Some(client)
            }
            Err(e) => {
                warn!("Could not connect to Docker: {}", e);
                state.set_docker_connected(false, ConnectionInfo::default());
                None
            }
        };

        Ok(Self {
            config,
            state,
            docker_client,
        })
    }

    /// Connect to Docker
    async fn connect_docker(config: &Config) -> Result<(DockerClient, ConnectionInfo)> {
        let client = if let Some(host) = &config.docker.host {
            DockerClient::with_host(host).await?
        } else {
            DockerClient::from_env().await?
        };

        let info = client.connection_info().clone();
        Ok((client, info))
    }

    /// Run the main application loop
    pub async fn run(&mut self) -> Result<()> {
        info!("Starting main application loop");

        let mut terminal = setup_terminal(self.config.ui.mouse_enabled)?;

        // Initial data load; a failure here shows up as an empty table
        // and is reported once the user acts
        if let Err(e) = self.refresh_containers().await {
            warn!("Initial container load failed: {}", e);
        }

        let colors = StatusColors::from_config(&self.config.ui.colors);
        let mut ui_app = UiApp::new(self.state.clone(), colors);

        let result = self.run_event_loop(&mut terminal, &mut ui_app).await;

        // Terminal must be restored even when the loop errored
        restore_terminal(&mut terminal, self.config.ui.mouse_enabled)?;

        result
    }

    /// Run the event loop
    async fn run_event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
        ui_app: &mut UiApp,
    ) -> Result<()> {
        let tick_rate = Duration::from_millis(250);
        let poll_interval = Duration::from_millis(self.config.general.poll_interval_ms);
        let mut last_tick = Instant::now();
        let mut last_poll = Instant::now();

        loop {
            terminal.draw(|f| ui_app.draw(f))?;

            // Handle events with timeout
            let timeout = tick_rate
                .checked_sub(last_tick.elapsed())
                .unwrap_or_else(|| Duration::from_secs(0));

            if crossterm::event::poll(timeout)? {
                let event = crossterm::event::read()?;

                if let Event::Key(_) = event {
                    let action = ui_app.handle_event(event);
                    self.execute_action(action, ui_app).await;
                } else {
                    ui_app.handle_event(event);
                }
            }

            if ui_app.should_quit {
                info!("Quit signal received, exiting event loop");
                break;
            }

            // Periodic engine re-query; background failures only log,
            // the table keeps its last contents
            if last_tick.elapsed() >= tick_rate {
                if last_poll.elapsed() >= poll_interval {
                    match self.refresh_containers().await {
                        Ok(()) => {
                            ui_app.state.update_containers(self.state.containers.clone());
                        }
                        Err(e) => warn!("Periodic refresh failed: {}", e),
                    }
                    last_poll = Instant::now();
                }
                last_tick = Instant::now();
            }

            self.state = ui_app.state.clone();
        }

        Ok(())
    }

    /// Execute an action emitted by the UI
    async fn execute_action(&mut self, action: UiAction, ui_app: &mut UiApp) {
        match action {
            UiAction::StartContainer(id) => {
                self.start_container(&id, ui_app).await;
            }
            UiAction::StopContainer(id) => {
                self.stop_container(&id, ui_app).await;
            }
            UiAction::Refresh => {
                // User asked for the refresh, so a failure gets a dialog
                match self.refresh_containers().await {
                    Ok(()) => {
                        ui_app.state.update_containers(self.state.containers.clone());
                    }
                    Err(e) => {
                        warn!("Manual refresh failed: {}", e);
                        ui_app.state.show_dialog(Dialog::error(e.user_message()));
                        ui_app
                            .state
                            .add_notification(e.user_message(), NotificationLevel::Error);
                    }
                }
            }
            UiAction::Quit | UiAction::None => {}
        }
    }

    /// Start a container and report the outcome in a dialog
    async fn start_container(&mut self, id: &str, ui_app: &mut UiApp) {
        let Some(client) = self.docker_client.clone() else {
            report_disconnected(&mut ui_app.state);
            return;
        };

        // Resolve first so a removed container reports not-found
        let result = match client.get_container(id).await {
            Ok(record) => client.start_container(id).await.map(|_| record.short_id),
            Err(e) => Err(e),
        };

        report_outcome(&mut ui_app.state, "Container Start", "started", result);

        // The table is re-queried after every action, success or not
        if let Err(e) = self.refresh_containers().await {
            warn!("Refresh after start failed: {}", e);
        }
        ui_app.state.update_containers(self.state.containers.clone());
    }

    /// Stop a container and report the outcome in a dialog
    async fn stop_container(&mut self, id: &str, ui_app: &mut UiApp) {
        let Some(client) = self.docker_client.clone() else {
            report_disconnected(&mut ui_app.state);
            return;
        };

        let timeout = self.config.docker.stop_timeout_seconds;
        let result = match client.get_container(id).await {
            Ok(record) => client
                .stop_container(id, Some(timeout))
                .await
                .map(|_| record.short_id),
            Err(e) => Err(e),
        };

        report_outcome(&mut ui_app.state, "Container Stop", "stopped", result);

        if let Err(e) = self.refresh_containers().await {
            warn!("Refresh after stop failed: {}", e);
        }
        ui_app.state.update_containers(self.state.containers.clone());
    }

    /// Re-query the container list from the engine
    async fn refresh_containers(&mut self) -> crate::core::Result<()> {
        let Some(client) = &self.docker_client else {
            return Err(DockerError::Connection("not connected to Docker".to_string()).into());
        };

        debug!("Refreshing container list from Docker");
        let containers = client.list_containers(true).await?;
        self.state.update_containers(containers);
        debug!("Loaded {} containers", self.state.containers.len());
        Ok(())
    }
}

/// Report a lifecycle call outcome into the UI state
fn report_outcome(
    state: &mut AppState,
    title: &str,
    verb: &str,
    result: crate::core::Result<String>,
) {
    match result {
        Ok(short_id) => {
            state.show_dialog(Dialog::info(
                title,
                format!("Container {} has been {} successfully.", short_id, verb),
            ));
            state.add_notification(
                format!("Container {} {}", short_id, verb),
                NotificationLevel::Success,
            );
        }
        Err(e) => {
            warn!("Lifecycle action failed: {}", e);
            state.show_dialog(Dialog::error(e.user_message()));
            state.add_notification(e.user_message(), NotificationLevel::Error);
        }
    }
}

fn report_disconnected(state: &mut AppState) {
    state.show_dialog(Dialog::error("Not connected to Docker."));
}

/// Setup the terminal for TUI
fn setup_terminal(mouse: bool) -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    info!("Setting up terminal");

    terminal::enable_raw_mode()?;
    let mut stdout = io::stdout();
    if mouse {
        crossterm::execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    } else {
        crossterm::execute!(stdout, EnterAlternateScreen)?;
    }

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;

    info!("Terminal setup complete");
    Ok(terminal)
}

/// Restore terminal to original state
fn restore_terminal(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    mouse: bool,
) -> Result<()> {
    info!("Restoring terminal");

    terminal::disable_raw_mode()?;
    if mouse {
        crossterm::execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
    } else {
        crossterm::execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    }
    terminal.show_cursor()?;

    info!("Terminal restored");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::DockhandError;

    fn disconnected_app() -> App {
        App {
            config: Config::default(),
            state: AppState::new(),
            docker_client: None,
        }
    }

    fn ui_app() -> UiApp {
        UiApp::new(AppState::default(), StatusColors::default())
    }

    #[test]
    fn test_report_outcome_success_sets_info_dialog() {
        let mut state = AppState::default();

        report_outcome(
            &mut state,
            "Container Start",
            "started",
            Ok("abc123def456".to_string()),
        );

        let dialog = state.dialog.expect("dialog should be set");
        assert!(!dialog.is_error());
        assert_eq!(dialog.title(), "Container Start");
        assert!(dialog.message().contains("abc123def456"));
        assert!(dialog.message().contains("started"));
    }

    #[test]
    fn test_report_outcome_failure_sets_error_dialog() {
        let mut state = AppState::default();

        let err = DockhandError::Docker(DockerError::NotFound {
            resource: "Container abc123".to_string(),
        });
        report_outcome(&mut state, "Container Stop", "stopped", Err(err));

        let dialog = state.dialog.expect("dialog should be set");
        assert!(dialog.is_error());
        assert!(dialog.message().contains("not found"));
        assert_eq!(state.notifications.len(), 1);
        assert_eq!(
            state.notifications[0].level,
            crate::core::NotificationLevel::Error
        );
    }

    #[tokio::test]
    async fn test_start_while_disconnected_shows_error_dialog() {
        let mut app = disconnected_app();
        let mut ui = ui_app();

        app.execute_action(UiAction::StartContainer("abc123".to_string()), &mut ui)
            .await;

        let dialog = ui.state.dialog.expect("dialog should be set");
        assert!(dialog.is_error());
        assert!(dialog.message().contains("Not connected"));
    }

    #[tokio::test]
    async fn test_stop_while_disconnected_shows_error_dialog() {
        let mut app = disconnected_app();
        let mut ui = ui_app();

        app.execute_action(UiAction::StopContainer("abc123".to_string()), &mut ui)
            .await;

        let dialog = ui.state.dialog.expect("dialog should be set");
        assert!(dialog.is_error());
    }

    #[tokio::test]
    async fn test_manual_refresh_failure_shows_error_dialog() {
        let mut app = disconnected_app();
        let mut ui = ui_app();

        app.execute_action(UiAction::Refresh, &mut ui).await;

        let dialog = ui.state.dialog.expect("dialog should be set");
        assert!(dialog.is_error());
        assert!(dialog.message().contains("Docker"));
    }

    #[tokio::test]
    async fn test_refresh_without_client_is_error() {
        let mut app = disconnected_app();
        let result = app.refresh_containers().await;
        assert!(result.is_err());
    }
}
