use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use std::time::Duration;
use tracing::debug;

use crate::app::account::ModalEvent;
use crate::app::{AppState, InputMode};
use crate::search::apply_search;
use crate::ui;

/// Outcome of a key press for the event loop.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub fn run_app(terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>, mut app: AppState) -> Result<()> {
    loop {
        terminal.draw(|f| {
            ui::render(f, &mut app);
        })?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press && handle_key(&mut app, key.code) == Flow::Quit {
                    break;
                }
            }
        }
    }
    Ok(())
}

/// Apply one key press to the application state.
pub fn handle_key(app: &mut AppState, code: KeyCode) -> Flow {
    match app.input_mode {
        InputMode::Normal => return handle_normal_key(app, code),
        InputMode::Modal => handle_modal_key(app, code),
        InputMode::Search => match code {
            KeyCode::Enter => {
                apply_search(app);
                app.input_mode = InputMode::Normal;
            }
            KeyCode::Esc => {
                app.search_query.clear();
                apply_search(app);
                app.input_mode = InputMode::Normal;
            }
            KeyCode::Backspace => { app.search_query.pop(); }
            KeyCode::Char(c) => { app.search_query.push(c); }
            _ => {}
        },
    }
    Flow::Continue
}

fn handle_normal_key(app: &mut AppState, code: KeyCode) -> Flow {
    let total = app.faculty.len();
    let rpp = app.rows_per_page.max(1);
    match code {
        KeyCode::Char('q') => return Flow::Quit,
        KeyCode::Char('/') => {
            app.search_query.clear();
            app.input_mode = InputMode::Search;
        }
        KeyCode::Enter | KeyCode::Char('n') => app.open_account_modal(),
        KeyCode::Up | KeyCode::Char('k') => { app.selected_index = app.selected_index.saturating_sub(1); }
        KeyCode::Down | KeyCode::Char('j') => { if app.selected_index + 1 < total { app.selected_index += 1; } }
        KeyCode::Left | KeyCode::Char('h') => { app.selected_index = app.selected_index.saturating_sub(rpp); }
        KeyCode::Right | KeyCode::Char('l') => {
            app.selected_index = app.selected_index.saturating_add(rpp).min(total.saturating_sub(1));
        }
        _ => {}
    }
    Flow::Continue
}

fn handle_modal_key(app: &mut AppState, code: KeyCode) {
    if app.accounts.info.is_some() {
        if matches!(code, KeyCode::Esc | KeyCode::Enter) {
            app.accounts.info = None;
        }
    } else {
        let target = app.accounts.target.clone();
        let props = crate::app::account::ModalProps::new(app.accounts.is_open, target.as_ref());
        let event = app.account_modal.handle_key(props, code, &mut app.accounts);
        debug!(?event, "account modal key");
        if event == ModalEvent::Submitted {
            app.account_modal.close(&mut app.accounts);
        }
    }
    sync_input_mode(app);
}

fn sync_input_mode(app: &mut AppState) {
    if app.accounts.is_open || app.accounts.info.is_some() {
        app.input_mode = InputMode::Modal;
    } else if app.input_mode == InputMode::Modal {
        app.input_mode = InputMode::Normal;
    }
}
