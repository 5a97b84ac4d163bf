//! Shared UI components (status bar, modal helpers).
//!
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use crate::app::{AppState, InputMode};

/// Render the bottom status bar with mode and counts.
pub fn render_status_bar(f: &mut Frame, area: Rect, app: &AppState) {
    let mode = match app.input_mode {
        InputMode::Normal => "NORMAL",
        InputMode::Search => "SEARCH",
        InputMode::Modal => "MODAL",
    };
    let msg = format!(
        "mode: {mode}  faculty:{}/{}  requested:{}  rows/page:{}",
        app.faculty.len(),
        app.faculty_all.len(),
        app.accounts.submissions.len(),
        app.rows_per_page,
    );
    let p = Paragraph::new(msg).style(Style::default().fg(app.theme.status_fg).bg(app.theme.status_bg));
    f.render_widget(p, area);
}

/// Compute a rectangle centered within `area` with a maximum size.
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect {
        x,
        y,
        width: width.min(area.width),
        height: height.min(area.height),
    }
}

/// Render a generic informational modal dialog.
pub fn render_info_modal(f: &mut Frame, area: Rect, app: &AppState, message: &str) {
    let max_w = area.width.saturating_sub(6).max(30);
    let width = 50u16.min(max_w);
    let chars = message.chars().count().min(u16::MAX as usize) as u16;
    let approx_lines = (chars / width.saturating_sub(4).max(10)).max(1);
    let height = (approx_lines + 4).min(area.height.saturating_sub(2).max(5));
    let rect = centered_rect(width, height, area);
    let p = Paragraph::new(format!("{message}\n\nEnter/Esc to dismiss"))
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .title("Info")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(app.theme.border)),
        );
    f.render_widget(Clear, rect);
    f.render_widget(p, rect);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::Theme;
    use ratatui::{Terminal, backend::TestBackend};

    #[test]
    fn info_modal_sizes_long_multibyte_message() {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).expect("create terminal");
        let app = AppState::new(vec![], Theme::dark());
        let message = "é".repeat(70_000);
        terminal
            .draw(|f| {
                let area = f.area();
                render_info_modal(f, area, &app, &message);
            })
            .expect("render frame");
        let buf = terminal.backend().buffer();
        // clamped to the screen: top border on row 1, bottom border on row 22
        assert_eq!(buf[(15, 1)].symbol(), "┌");
        assert_eq!(buf[(15, 22)].symbol(), "└");
    }

    #[test]
    fn centered_rect_fits_inside_area() {
        let area = Rect::new(0, 0, 80, 24);
        let r = centered_rect(60, 12, area);
        assert_eq!(r, Rect::new(10, 6, 60, 12));

        let small = Rect::new(0, 0, 20, 5);
        let r = centered_rect(60, 12, small);
        assert_eq!((r.x, r.y, r.width, r.height), (0, 0, 20, 5));
    }
}
