use ratatui::Frame;
use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table};

use crate::app::AppState;

pub fn render_faculty_table(f: &mut Frame, area: Rect, app: &mut AppState) {
    let body_height = area.height.saturating_sub(3) as usize;
    if body_height > 0 { app.rows_per_page = body_height; }

    let start = (app.selected_index / app.rows_per_page) * app.rows_per_page;
    let end = (start + app.rows_per_page).min(app.faculty.len());
    let slice = &app.faculty[start.min(end)..end];

    let rows = slice.iter().enumerate().map(|(i, r)| {
        let style = if start + i == app.selected_index {
            Style::default().fg(app.theme.highlight_fg).bg(app.theme.highlight_bg).add_modifier(Modifier::BOLD)
        } else { Style::default().fg(app.theme.text) };
        let marker = if app.accounts.submission_for(&r.id).is_some() { "✓" } else { "" };
        Row::new(vec![
            Cell::from(r.employee_code.clone()),
            Cell::from(r.name.clone()),
            Cell::from(r.department_code.clone()),
            Cell::from(marker),
        ]).style(style)
    });

    let widths = [Constraint::Length(10), Constraint::Percentage(60), Constraint::Length(8), Constraint::Length(3)];

    let header = Row::new(vec!["CODE", "NAME", "DEPT", "ACC"]).style(
        Style::default().fg(app.theme.title).add_modifier(Modifier::BOLD),
    );

    let table = Table::new(rows, widths)
        .header(header)
        .block(Block::default().title("Faculty").borders(Borders::ALL).border_style(Style::default().fg(app.theme.border)))
        .column_spacing(1);

    f.render_widget(table, area);
}

pub fn render_faculty_details(f: &mut Frame, area: Rect, app: &AppState) {
    let text = match app.selected() {
        Some(r) => {
            let account = app
                .accounts
                .submission_for(&r.id)
                .map(|s| format!("requested as '{}'", s.username))
                .unwrap_or_else(|| "none".to_string());
            format!(
                "Name: {}\nEmployee code: {}\nDesignation: {}\nDepartment: {}\nId: {}\nAccount: {}",
                r.name, r.employee_code, r.designation, r.department_code, r.id, account
            )
        }
        None => "No faculty selected".to_string(),
    };
    let p = Paragraph::new(text).style(Style::default().fg(app.theme.text)).block(
        Block::default().title("Details").borders(Borders::ALL).border_style(Style::default().fg(app.theme.border)),
    );
    f.render_widget(p, area);
}
