pub mod account;
pub mod components;
pub mod faculty;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::Style;
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::app::{AppState, InputMode};

pub fn render(f: &mut Frame, app: &mut AppState) {
    let root = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(5), Constraint::Length(1)].as_ref())
        .split(f.area());
    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)].as_ref())
        .split(root[1]);

    let prompt = match app.input_mode {
        InputMode::Search => format!("  Search: {}", app.search_query),
        InputMode::Normal | InputMode::Modal => String::new(),
    };
    let p = Paragraph::new(format!(
        "admin: {}{prompt}  — Enter/n: create account; /: search; Esc: cancel; q: quit",
        app.admin_name
    ))
    .block(
        Block::default()
            .title("faculty-accounts")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(app.theme.border)),
    )
    .style(Style::default().fg(app.theme.header_fg).bg(app.theme.header_bg));
    f.render_widget(p, root[0]);

    faculty::render_faculty_table(f, body[0], app);
    faculty::render_faculty_details(f, body[1], app);
    components::render_status_bar(f, root[2], app);

    let area = f.area();
    account::render_account_modal(f, area, &app.theme, &app.account_modal, app.modal_props());
    if let Some(message) = app.accounts.info.as_deref() {
        components::render_info_modal(f, area, app, message);
    }
}
