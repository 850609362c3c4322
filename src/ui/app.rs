//! UI Application logic

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;
use tracing::{debug, info};

use crate::core::UiAction;
use crate::state::AppState;
use crate::ui::components::container_table::StatusColors;
use crate::ui::components::{render_dialog, ContainerTableWidget};

/// UI Application controller
///
/// Consumes terminal events and emits [`crate::core::UiAction`]s; it
/// never calls the engine itself.
pub struct UiApp {
    pub state: AppState,
    pub should_quit: bool,
    colors: StatusColors,
}

impl UiApp {
    /// Create a new UI app
    pub fn new(state: AppState, colors: StatusColors) -> Self {
        Self {
            state,
            should_quit: false,
            colors,
        }
    }

    /// Handle a terminal event, returning the action it maps to
    pub fn handle_event(&mut self, event: Event) -> UiAction {
        match event {
            Event::Key(key_event) => self.handle_key_event(key_event),
            Event::Resize(width, height) => {
                debug!("Terminal resized to {}x{}", width, height);
                self.state.terminal_size = (width, height);
                UiAction::None
            }
            _ => UiAction::None,
        }
    }

    /// Handle keyboard events
    pub fn handle_key_event(&mut self, key: KeyEvent) -> UiAction {
        // Only handle key press events (not release or repeat)
        if key.kind != KeyEventKind::Press {
            return UiAction::None;
        }

        // A dialog is modal: only dismissal keys are handled
        if self.state.dialog.is_some() {
            match key.code {
                KeyCode::Enter | KeyCode::Esc | KeyCode::Char('q') => {
                    self.state.dismiss_dialog();
                }
                _ => {}
            }
            return UiAction::None;
        }

        // If help is showing, any key closes it
        if self.state.show_help {
            self.state.show_help = false;
            return UiAction::None;
        }

        match key.code {
            // Quit
            KeyCode::Char('q') if key.modifiers.is_empty() => {
                info!("Quit key pressed");
                self.should_quit = true;
                UiAction::Quit
            }
            KeyCode::Char('c') if key.modifiers == KeyModifiers::CONTROL => {
                info!("Ctrl+C pressed");
                self.should_quit = true;
                UiAction::Quit
            }

            // List navigation
            KeyCode::Down | KeyCode::Char('j') => {
                self.state.next_container();
                UiAction::None
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.state.previous_container();
                UiAction::None
            }

            // Lifecycle actions on the selected container
            KeyCode::Char('s') => match self.state.selected() {
                Some(c) => {
                    info!("Start requested for container {}", c.short_id);
                    UiAction::StartContainer(c.id.clone())
                }
                None => UiAction::None,
            },
            KeyCode::Char('x') => match self.state.selected() {
                Some(c) => {
                    info!("Stop requested for container {}", c.short_id);
                    UiAction::StopContainer(c.id.clone())
                }
                None => UiAction::None,
            },

            // Manual refresh
            KeyCode::Char('r') => UiAction::Refresh,

            // Help
            KeyCode::Char('?') | KeyCode::Char('h') if key.modifiers.is_empty() => {
                self.state.show_help = !self.state.show_help;
                UiAction::None
            }

            _ => {
                debug!("Unhandled key: {:?}", key);
                UiAction::None
            }
        }
    }

    /// Render the UI
    pub fn draw(&self, frame: &mut Frame) {
        let area = frame.area();

        let main_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Header
                Constraint::Min(3),    // Container table
                Constraint::Length(1), // Footer
            ])
            .split(area);

        self.render_header(frame, main_layout[0]);
        self.render_container_table(frame, main_layout[1]);
        self.render_footer(frame, main_layout[2]);

        // Render modal overlays if active
        if let Some(dialog) = &self.state.dialog {
            render_dialog(frame, area, dialog);
        } else if self.state.show_help {
            self.render_help_overlay(frame, area);
        }
    }

    /// Render the header
    fn render_header(&self, frame: &mut Frame, area: Rect) {
        let status_indicator = if self.state.docker_connected {
            ("●", Color::Green)
        } else {
            ("○", Color::Red)
        };

        let mut header_spans = vec![
            Span::styled(
                " 🐳 Dockhand ",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("v{} ", env!("CARGO_PKG_VERSION")),
                Style::default().fg(Color::Gray),
            ),
            Span::raw("| "),
            Span::styled(status_indicator.0, Style::default().fg(status_indicator.1)),
            Span::styled(
                if self.state.docker_connected {
                    " Connected "
                } else {
                    " Disconnected "
                },
                Style::default().fg(status_indicator.1),
            ),
        ];

        if self.state.docker_connected {
            header_spans.push(Span::styled(
                format!("| Docker {} ", self.state.connection_info.version),
                Style::default().fg(Color::Gray),
            ));
        }

        let header = Line::from(header_spans);
        frame.render_widget(
            Paragraph::new(header).style(Style::default().bg(Color::Black)),
            area,
        );
    }

    /// Render the container table
    fn render_container_table(&self, frame: &mut Frame, area: Rect) {
        let mut table_state = ratatui::widgets::TableState::default();
        if !self.state.containers.is_empty() {
            table_state.select(Some(self.state.container_list_selected));
        }

        let widget = ContainerTableWidget::new(self.state.containers.clone(), self.colors);
        let table = widget.build_table();
        frame.render_stateful_widget(table, area, &mut table_state);
    }

    /// Render the footer
    fn render_footer(&self, frame: &mut Frame, area: Rect) {
        let help_text = if self.state.containers.is_empty() {
            " [r]:Refresh | [?]:Help | [q]:Quit "
        } else {
            " [↑/↓ or j/k]:Select | [s]:Start | [x]:Stop | [r]:Refresh | [?]:Help | [q]:Quit "
        };

        let footer =
            Paragraph::new(help_text).style(Style::default().fg(Color::Gray).bg(Color::Black));

        frame.render_widget(footer, area);
    }

    /// Render help overlay
    fn render_help_overlay(&self, frame: &mut Frame, area: Rect) {
        let popup_area = crate::ui::components::dialog::centered_rect(60, 70, area);

        frame.render_widget(Clear, popup_area);

        let help_text = r#"Keyboard Shortcuts

Containers:
  ↑ / ↓ or j / k    Select container in list
  s                 Start the selected container
  x                 Stop the selected container
  r                 Refresh the list from the engine

Global:
  q                 Quit application
  Ctrl+C            Force quit
  ? or h            Toggle this help screen

Press any key to close this help...
"#;

        let help = Paragraph::new(help_text)
            .block(
                Block::default()
                    .title(" Help (Press any key to close) ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Yellow)),
            )
            .style(Style::default().fg(Color::White))
            .wrap(Wrap { trim: true });

        frame.render_widget(help, popup_area);
    }
}
