//! Modal message box rendering

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use crate::core::Dialog;

/// Render a centered message box over the current frame
pub fn render_dialog(frame: &mut Frame, area: Rect, dialog: &Dialog) {
    let popup_area = centered_rect(50, 30, area);

    // Clear the background
    frame.render_widget(Clear, popup_area);

    let border_color = if dialog.is_error() {
        Color::Red
    } else {
        Color::Green
    };

    let body = format!("{}\n\nPress Enter or Esc to close", dialog.message());

    let paragraph = Paragraph::new(body)
        .block(
            Block::default()
                .title(format!(" {} ", dialog.title()))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border_color)),
        )
        .style(Style::default().fg(Color::White))
        .wrap(Wrap { trim: true });

    frame.render_widget(paragraph, popup_area);
}

/// Calculate centered rectangle for popups
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect_is_contained() {
        let outer = Rect::new(0, 0, 100, 40);
        let inner = centered_rect(50, 30, outer);

        assert!(inner.width <= outer.width);
        assert!(inner.height <= outer.height);
        assert!(inner.x >= outer.x);
        assert!(inner.y >= outer.y);
    }

    #[test]
    fn test_dialog_render_does_not_panic() {
        use ratatui::backend::TestBackend;
        use ratatui::Terminal;

        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();

        let dialog = Dialog::info("Container Start", "Container abc123 has been started.");
        terminal
            .draw(|f| {
                let area = f.area();
                render_dialog(f, area, &dialog);
            })
            .unwrap();
    }
}
