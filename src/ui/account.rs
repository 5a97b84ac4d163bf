//! Rendering of the account creation modal.
//!
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::app::Theme;
use crate::app::account::{AccountCreationModal, Focus, ModalProps};
use crate::ui::components::centered_rect;

fn marker(focus: Focus, at: Focus) -> &'static str {
    if focus == at { "▶ " } else { "  " }
}

/// Draw the modal over `area`. Draws nothing unless the caller marked it open
/// and supplied a faculty record.
pub fn render_account_modal(f: &mut Frame, area: Rect, theme: &Theme, modal: &AccountCreationModal, props: ModalProps<'_>) {
    let Some(faculty) = props.visible_record() else {
        return;
    };
    let form = modal.form();
    let focus = modal.focus();
    let width = 60u16.min(area.width.saturating_sub(4)).max(40);
    let rect = centered_rect(width, 12, area);

    let label = Style::default().fg(theme.muted);
    let username = if form.username.is_empty() {
        Span::styled(faculty.employee_code.clone(), Style::default().fg(theme.muted).add_modifier(Modifier::ITALIC))
    } else {
        Span::styled(form.username.clone(), Style::default().fg(theme.text))
    };
    let button = |at: Focus, text: &'static str| {
        let style = if focus == at {
            Style::default().fg(theme.highlight_fg).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.text)
        };
        Span::styled(format!("{}{}", marker(focus, at), text), style)
    };

    let lines = vec![
        Line::from(vec![Span::styled("Name:        ", label), Span::raw(faculty.name.clone())]),
        Line::from(vec![Span::styled("Employee:    ", label), Span::raw(faculty.employee_code.clone())]),
        Line::from(vec![Span::styled("Designation: ", label), Span::raw(faculty.designation.clone())]),
        Line::from(vec![Span::styled("Department:  ", label), Span::raw(faculty.department_code.clone())]),
        Line::raw(""),
        Line::from(vec![Span::raw(marker(focus, Focus::Username)), Span::raw("Username:           "), username]),
        Line::from(vec![
            Span::raw(marker(focus, Focus::TempPassword)),
            Span::raw("Temporary password: "),
            Span::raw("*".repeat(form.temp_password.chars().count())),
        ]),
        Line::raw(""),
        Line::from(vec![button(Focus::Create, "[Create]"), Span::raw("    "), button(Focus::Cancel, "[Cancel]")]),
    ];

    let p = Paragraph::new(lines).block(
        Block::default()
            .title("Create account")
            .title_style(Style::default().fg(theme.title))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border)),
    );
    f.render_widget(Clear, rect);
    f.render_widget(p, rect);
}
