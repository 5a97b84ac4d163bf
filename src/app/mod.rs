//! Application state types and entry glue.
//!
//! Holds the faculty list, the account modal and the caller-side bookkeeping
//! that decides when the modal is visible. The event loop lives in `update`
//! and is re-exported as `run`.
//!
pub mod account;
pub mod theme;
pub mod update;

use std::path::Path;

use tracing::{info, warn};

use crate::roster;
use account::{AccountCreationModal, AccountHandler, FacultyRecord, ModalProps, SubmissionPayload};
pub use theme::Theme;

/// Current input mode for key handling.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Search,
    Modal,
}

/// Caller side of the account modal: owns visibility and receives submissions.
#[derive(Clone, Debug, Default)]
pub struct AccountBook {
    pub is_open: bool,
    pub target: Option<FacultyRecord>,
    pub submissions: Vec<SubmissionPayload>,
    pub info: Option<String>,
}

impl AccountBook {
    /// Show the modal for `record`.
    pub fn open(&mut self, record: FacultyRecord) {
        info!(faculty_id = %record.id, "account modal opened");
        self.target = Some(record);
        self.is_open = true;
    }

    pub fn props(&self) -> ModalProps<'_> {
        ModalProps::new(self.is_open, self.target.as_ref())
    }

    pub fn submission_for(&self, faculty_id: &str) -> Option<&SubmissionPayload> {
        self.submissions.iter().find(|s| s.faculty_id == faculty_id)
    }
}

impl AccountHandler for AccountBook {
    fn on_close(&mut self) {
        self.is_open = false;
        self.target = None;
    }

    fn on_submit(&mut self, payload: SubmissionPayload) {
        self.info = Some(format!(
            "Account '{}' requested for faculty {}",
            payload.username, payload.faculty_id
        ));
        match self.submissions.iter_mut().find(|s| s.faculty_id == payload.faculty_id) {
            Some(existing) => *existing = payload,
            None => self.submissions.push(payload),
        }
    }
}

/// Login name of the admin running the tool.
pub fn current_admin_name() -> Option<String> {
    users::get_current_username().map(|n| n.to_string_lossy().into_owned())
}

pub struct AppState {
    pub admin_name: String,
    pub faculty_all: Vec<FacultyRecord>,
    pub faculty: Vec<FacultyRecord>,
    pub selected_index: usize,
    pub rows_per_page: usize,
    pub input_mode: InputMode,
    pub search_query: String,
    pub theme: Theme,
    pub account_modal: AccountCreationModal,
    pub accounts: AccountBook,
}

impl AppState {
    /// Create state over `faculty`, sorted by employee code.
    pub fn new(mut faculty: Vec<FacultyRecord>, theme: Theme) -> Self {
        faculty.sort_by(|a, b| a.employee_code.cmp(&b.employee_code));
        Self {
            admin_name: current_admin_name().unwrap_or_else(|| "unknown".to_string()),
            faculty: faculty.clone(),
            faculty_all: faculty,
            selected_index: 0,
            rows_per_page: 10,
            input_mode: InputMode::Normal,
            search_query: String::new(),
            theme,
            account_modal: AccountCreationModal::new(),
            accounts: AccountBook::default(),
        }
    }

    /// Load roster and theme from disk. A roster that cannot be read leaves the
    /// list empty and shows the error in an info modal.
    pub fn load(roster_path: &Path, theme_path: &Path) -> Self {
        let theme = Theme::load_or_init(theme_path);
        match roster::load_roster(roster_path) {
            Ok(faculty) => {
                info!(count = faculty.len(), path = %roster_path.display(), "roster loaded");
                Self::new(faculty, theme)
            }
            Err(e) => {
                warn!(error = %e, "roster unavailable");
                let mut app = Self::new(Vec::new(), theme);
                app.accounts.info = Some(e.to_string());
                app.input_mode = InputMode::Modal;
                app
            }
        }
    }

    pub fn selected(&self) -> Option<&FacultyRecord> {
        self.faculty.get(self.selected_index)
    }

    /// Open the account modal for the selected record, if any.
    pub fn open_account_modal(&mut self) {
        if let Some(record) = self.selected().cloned() {
            self.accounts.open(record);
            self.input_mode = InputMode::Modal;
        }
    }

    pub fn modal_props(&self) -> ModalProps<'_> {
        self.accounts.props()
    }
}

/// Re-export the application event loop entry function.
pub use update::run_app as run;
