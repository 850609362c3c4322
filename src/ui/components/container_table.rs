//! Container table widget

use ratatui::{
    layout::Constraint,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Row, Table, TableState},
};

use crate::config::CustomColors;
use crate::core::{ContainerRecord, ContainerState};

/// Status column colors, with optional config overrides
#[derive(Debug, Clone, Copy)]
pub struct StatusColors {
    pub running: Color,
    pub stopped: Color,
    pub paused: Color,
    pub selection: Color,
}

impl Default for StatusColors {
    fn default() -> Self {
        Self {
            running: Color::Green,
            stopped: Color::Red,
            paused: Color::Yellow,
            selection: Color::DarkGray,
        }
    }
}

impl StatusColors {
    /// Apply config overrides on top of the defaults
    pub fn from_config(colors: &CustomColors) -> Self {
        let defaults = Self::default();
        Self {
            running: parse_color(colors.running.as_deref()).unwrap_or(defaults.running),
            stopped: parse_color(colors.stopped.as_deref()).unwrap_or(defaults.stopped),
            paused: parse_color(colors.paused.as_deref()).unwrap_or(defaults.paused),
            selection: parse_color(colors.selection.as_deref()).unwrap_or(defaults.selection),
        }
    }

    fn for_state(&self, state: ContainerState) -> Color {
        match state {
            ContainerState::Running => self.running,
            ContainerState::Paused => self.paused,
            ContainerState::Exited | ContainerState::Dead => self.stopped,
            _ => Color::Gray,
        }
    }
}

fn parse_color(name: Option<&str>) -> Option<Color> {
    match name?.to_ascii_lowercase().as_str() {
        "black" => Some(Color::Black),
        "red" => Some(Color::Red),
        "green" => Some(Color::Green),
        "yellow" => Some(Color::Yellow),
        "blue" => Some(Color::Blue),
        "magenta" => Some(Color::Magenta),
        "cyan" => Some(Color::Cyan),
        "gray" | "grey" => Some(Color::Gray),
        "darkgray" | "darkgrey" => Some(Color::DarkGray),
        "white" => Some(Color::White),
        _ => None,
    }
}

/// Widget for displaying the container table
pub struct ContainerTableWidget {
    containers: Vec<ContainerRecord>,
    colors: StatusColors,
    state: TableState,
}

impl ContainerTableWidget {
    /// Create a new container table widget
    pub fn new(containers: Vec<ContainerRecord>, colors: StatusColors) -> Self {
        let mut state = TableState::default();
        if !containers.is_empty() {
            state.select(Some(0));
        }
        Self {
            containers,
            colors,
            state,
        }
    }

    /// Update the container list
    pub fn update_containers(&mut self, containers: Vec<ContainerRecord>) {
        // Preserve selection if possible
        let selected_id = self.selected_container_id();

        self.containers = containers;

        if let Some(id) = selected_id {
            if let Some(idx) = self.containers.iter().position(|c| c.id == id) {
                self.state.select(Some(idx));
            } else if !self.containers.is_empty() {
                self.state.select(Some(0));
            }
        } else if !self.containers.is_empty() && self.state.selected().is_none() {
            self.state.select(Some(0));
        }
    }

    /// Get the selected container ID
    pub fn selected_container_id(&self) -> Option<String> {
        self.state
            .selected()
            .and_then(|idx| self.containers.get(idx))
            .map(|c| c.id.clone())
    }

    /// Move selection down
    pub fn next(&mut self) {
        if self.containers.is_empty() {
            return;
        }
        let i = match self.state.selected() {
            Some(i) => {
                if i >= self.containers.len() - 1 {
                    0
                } else {
                    i + 1
                }
            }
            None => 0,
        };
        self.state.select(Some(i));
    }

    /// Move selection up
    pub fn previous(&mut self) {
        if self.containers.is_empty() {
            return;
        }
        let i = match self.state.selected() {
            Some(i) => {
                if i == 0 {
                    self.containers.len() - 1
                } else {
                    i - 1
                }
            }
            None => 0,
        };
        self.state.select(Some(i));
    }

    pub fn len(&self) -> usize {
        self.containers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.containers.is_empty()
    }

    /// Build the table widget
    pub fn build_table(&self) -> Table<'_> {
        let header = Row::new(vec!["ID", "NAME", "IMAGE", "STATUS", "PORTS"])
            .style(Style::default().add_modifier(Modifier::BOLD))
            .bottom_margin(0);

        let rows: Vec<Row> = self
            .containers
            .iter()
            .map(|c| {
                let status_style = Style::default().fg(self.colors.for_state(c.state));

                Row::new(vec![
                    Line::from(c.short_id.clone()),
                    Line::from(if c.name.is_empty() {
                        "-".to_string()
                    } else {
                        c.name.clone()
                    }),
                    Line::from(c.image.clone()),
                    Line::from(Span::styled(c.status.clone(), status_style)),
                    Line::from(c.ports_display()),
                ])
            })
            .collect();

        Table::new(
            rows,
            [
                Constraint::Length(12), // ID
                Constraint::Min(10),    // Name
                Constraint::Min(15),    // Image
                Constraint::Length(20), // Status
                Constraint::Min(15),    // Ports
            ],
        )
        .header(header)
        .block(
            Block::default()
                .title(format!(" Containers ({}) ", self.containers.len()))
                .borders(Borders::ALL),
        )
        .row_highlight_style(
            Style::default()
                .bg(self.colors.selection)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ")
    }

    /// Get the table state for rendering
    pub fn state(&mut self) -> &mut TableState {
        &mut self.state
    }

    /// Set the selected index
    pub fn set_selected(&mut self, index: Option<usize>) {
        self.state.select(index);
    }
}
