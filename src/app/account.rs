//! Account creation modal.
//!
//! Collects a username and a temporary password for a faculty record and
//! hands them to a caller-supplied [`AccountHandler`]. The caller owns
//! visibility (`is_open` and the target record); the modal owns only the
//! field-entry state.
//!
use crossterm::event::KeyCode;
use tracing::{debug, info};

/// Read-only description of the person an account is created for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FacultyRecord {
    pub id: String,
    pub name: String,
    pub employee_code: String,
    pub designation: String,
    pub department_code: String,
}

/// Text fields of the form, addressable by name.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FormField {
    Username,
    TempPassword,
}

impl FormField {
    /// Resolve a field from its input name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "username" => Some(FormField::Username),
            "tempPassword" | "temp_password" => Some(FormField::TempPassword),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            FormField::Username => "username",
            FormField::TempPassword => "tempPassword",
        }
    }
}

/// Values typed into the form. Never mutated in place; every edit yields a new value.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormState {
    pub username: String,
    pub temp_password: String,
}

impl FormState {
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Username => &self.username,
            FormField::TempPassword => &self.temp_password,
        }
    }

    /// Return a copy with `field` set to `value`; the other field is kept.
    #[must_use]
    pub fn with_field(&self, field: FormField, value: impl Into<String>) -> Self {
        let value = value.into();
        match field {
            FormField::Username => Self {
                username: value,
                ..self.clone()
            },
            FormField::TempPassword => Self {
                temp_password: value,
                ..self.clone()
            },
        }
    }
}

/// Data handed to the account-creation collaborator on a valid submit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubmissionPayload {
    pub faculty_id: String,
    pub username: String,
    pub temp_password: String,
}

/// Caller-side callbacks of the modal.
pub trait AccountHandler {
    /// The user dismissed the modal. The caller is expected to clear `is_open`.
    fn on_close(&mut self);
    /// A submission passed validation. Invoked once per accepted submit.
    fn on_submit(&mut self, payload: SubmissionPayload);
}

/// Caller-owned inputs that gate visibility.
#[derive(Copy, Clone, Debug)]
pub struct ModalProps<'a> {
    pub is_open: bool,
    pub faculty: Option<&'a FacultyRecord>,
}

impl<'a> ModalProps<'a> {
    pub fn new(is_open: bool, faculty: Option<&'a FacultyRecord>) -> Self {
        Self { is_open, faculty }
    }

    /// The record to show, or `None` when nothing should be rendered.
    pub fn visible_record(&self) -> Option<&'a FacultyRecord> {
        if self.is_open { self.faculty } else { None }
    }
}

/// Focus ring of the modal, in tab order.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Focus {
    #[default]
    Username,
    TempPassword,
    Create,
    Cancel,
}

impl Focus {
    const RING: [Focus; 4] = [Focus::Username, Focus::TempPassword, Focus::Create, Focus::Cancel];

    fn index(self) -> usize {
        Self::RING.iter().position(|f| *f == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::RING[(self.index() + 1) % Self::RING.len()]
    }

    pub fn prev(self) -> Self {
        Self::RING[(self.index() + Self::RING.len() - 1) % Self::RING.len()]
    }

    /// The text field under focus, if any.
    pub fn field(self) -> Option<FormField> {
        match self {
            Focus::Username => Some(FormField::Username),
            Focus::TempPassword => Some(FormField::TempPassword),
            Focus::Create | Focus::Cancel => None,
        }
    }
}

/// What a key press did to the modal.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ModalEvent {
    /// Modal not visible or key not bound.
    Ignored,
    Edited,
    FocusMoved,
    /// `on_submit` was invoked.
    Submitted,
    /// Submit attempted with an empty username; nothing happened.
    Rejected,
    /// Form reset and `on_close` invoked.
    Closed,
}

#[derive(Clone, Debug, Default)]
pub struct AccountCreationModal {
    form: FormState,
    focus: Focus,
}

impl AccountCreationModal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Merge a new value for the named field into the form.
    pub fn change(&mut self, field: FormField, value: impl Into<String>) {
        self.form = self.form.with_field(field, value);
    }

    /// Name-keyed variant of [`change`](Self::change). Unknown names are ignored.
    pub fn change_named(&mut self, name: &str, value: impl Into<String>) {
        if let Some(field) = FormField::from_name(name) {
            self.change(field, value);
        }
    }

    /// Validate and hand the form to `handler`.
    ///
    /// An empty username aborts silently. The employee code shown as a
    /// placeholder is never copied into the form, so an untouched username
    /// field is rejected as well. State is kept after a successful submit.
    pub fn submit<H: AccountHandler>(&mut self, props: ModalProps<'_>, handler: &mut H) -> ModalEvent {
        let Some(faculty) = props.visible_record() else {
            return ModalEvent::Ignored;
        };
        if self.form.username.is_empty() {
            debug!(faculty_id = %faculty.id, "submit rejected: empty username");
            return ModalEvent::Rejected;
        }
        let payload = SubmissionPayload {
            faculty_id: faculty.id.clone(),
            username: self.form.username.clone(),
            temp_password: self.form.temp_password.clone(),
        };
        info!(faculty_id = %payload.faculty_id, username = %payload.username, "account submission");
        handler.on_submit(payload);
        ModalEvent::Submitted
    }

    /// Reset the form, then notify `handler`.
    pub fn close<H: AccountHandler>(&mut self, handler: &mut H) -> ModalEvent {
        self.form = FormState::default();
        self.focus = Focus::default();
        handler.on_close();
        ModalEvent::Closed
    }

    /// Route a key press. Keys are ignored while the modal is not visible.
    pub fn handle_key<H: AccountHandler>(
        &mut self,
        props: ModalProps<'_>,
        code: KeyCode,
        handler: &mut H,
    ) -> ModalEvent {
        if props.visible_record().is_none() {
            return ModalEvent::Ignored;
        }
        match code {
            KeyCode::Esc => self.close(handler),
            KeyCode::Tab | KeyCode::Down => {
                self.focus = self.focus.next();
                ModalEvent::FocusMoved
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.focus = self.focus.prev();
                ModalEvent::FocusMoved
            }
            KeyCode::Enter => match self.focus {
                Focus::Cancel => self.close(handler),
                Focus::Username | Focus::TempPassword | Focus::Create => self.submit(props, handler),
            },
            KeyCode::Backspace => match self.focus.field() {
                Some(field) => {
                    let mut value = self.form.get(field).to_string();
                    value.pop();
                    self.change(field, value);
                    ModalEvent::Edited
                }
                None => ModalEvent::Ignored,
            },
            KeyCode::Char(c) => match self.focus.field() {
                Some(field) => {
                    let value = format!("{}{}", self.form.get(field), c);
                    self.change(field, value);
                    ModalEvent::Edited
                }
                None => ModalEvent::Ignored,
            },
            _ => ModalEvent::Ignored,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        closed: usize,
        submitted: Vec<SubmissionPayload>,
    }

    impl AccountHandler for Recorder {
        fn on_close(&mut self) {
            self.closed += 1;
        }
        fn on_submit(&mut self, payload: SubmissionPayload) {
            self.submitted.push(payload);
        }
    }

    fn record(id: &str) -> FacultyRecord {
        FacultyRecord {
            id: id.to_string(),
            name: "Jane Doe".to_string(),
            employee_code: "EMP042".to_string(),
            designation: "Lecturer".to_string(),
            department_code: "CS".to_string(),
        }
    }

    fn type_str(modal: &mut AccountCreationModal, props: ModalProps<'_>, rec: &mut Recorder, s: &str) {
        for c in s.chars() {
            modal.handle_key(props, KeyCode::Char(c), rec);
        }
    }

    #[test]
    fn changing_one_field_keeps_the_other() {
        let mut modal = AccountCreationModal::new();
        modal.change(FormField::TempPassword, "temp123");
        modal.change(FormField::Username, "jdoe");
        assert_eq!(modal.form().username, "jdoe");
        assert_eq!(modal.form().temp_password, "temp123");

        modal.change_named("tempPassword", "other");
        assert_eq!(modal.form().username, "jdoe");
        assert_eq!(modal.form().temp_password, "other");

        modal.change_named("nonexistent", "x");
        assert_eq!(modal.form().username, "jdoe");
    }

    #[test]
    fn with_field_leaves_original_untouched() {
        let before = FormState::default();
        let after = before.with_field(FormField::Username, "jdoe");
        assert_eq!(before.username, "");
        assert_eq!(after.username, "jdoe");
    }

    #[test]
    fn empty_username_is_rejected_silently() {
        let f = record("F1");
        let props = ModalProps::new(true, Some(&f));
        let mut modal = AccountCreationModal::new();
        let mut rec = Recorder::default();
        modal.change(FormField::TempPassword, "temp123");

        assert_eq!(modal.submit(props, &mut rec), ModalEvent::Rejected);
        assert!(rec.submitted.is_empty());
        assert_eq!(rec.closed, 0);
        assert_eq!(modal.form().temp_password, "temp123");
    }

    #[test]
    fn valid_submit_invokes_handler_once_with_payload() {
        let f = record("F1");
        let props = ModalProps::new(true, Some(&f));
        let mut modal = AccountCreationModal::new();
        let mut rec = Recorder::default();
        modal.change(FormField::Username, "jdoe");
        modal.change(FormField::TempPassword, "temp123");

        assert_eq!(modal.submit(props, &mut rec), ModalEvent::Submitted);
        assert_eq!(
            rec.submitted,
            vec![SubmissionPayload {
                faculty_id: "F1".to_string(),
                username: "jdoe".to_string(),
                temp_password: "temp123".to_string(),
            }]
        );
        // submit does not reset
        assert_eq!(modal.form().username, "jdoe");
    }

    #[test]
    fn placeholder_is_not_committed() {
        let f = record("F1");
        let props = ModalProps::new(true, Some(&f));
        let mut modal = AccountCreationModal::new();
        let mut rec = Recorder::default();
        modal.change(FormField::TempPassword, "temp123");
        modal.submit(props, &mut rec);
        assert!(rec.submitted.is_empty());
        assert_eq!(modal.form().username, "");
    }

    #[test]
    fn close_resets_and_notifies_once() {
        let mut modal = AccountCreationModal::new();
        let mut rec = Recorder::default();
        modal.change(FormField::Username, "jdoe");
        modal.change(FormField::TempPassword, "temp123");

        assert_eq!(modal.close(&mut rec), ModalEvent::Closed);
        assert_eq!(rec.closed, 1);
        assert_eq!(modal.form(), &FormState::default());
    }

    #[test]
    fn hidden_modal_ignores_everything() {
        let f = record("F1");
        let mut modal = AccountCreationModal::new();
        let mut rec = Recorder::default();
        modal.change(FormField::Username, "jdoe");

        for props in [ModalProps::new(false, Some(&f)), ModalProps::new(true, None)] {
            assert_eq!(modal.submit(props, &mut rec), ModalEvent::Ignored);
            assert_eq!(modal.handle_key(props, KeyCode::Char('x'), &mut rec), ModalEvent::Ignored);
            assert_eq!(modal.handle_key(props, KeyCode::Esc, &mut rec), ModalEvent::Ignored);
        }
        assert!(rec.submitted.is_empty());
        assert_eq!(rec.closed, 0);
        assert_eq!(modal.form().username, "jdoe");
    }

    #[test]
    fn keys_edit_the_focused_field() {
        let f = record("F1");
        let props = ModalProps::new(true, Some(&f));
        let mut modal = AccountCreationModal::new();
        let mut rec = Recorder::default();

        type_str(&mut modal, props, &mut rec, "jdoex");
        modal.handle_key(props, KeyCode::Backspace, &mut rec);
        assert_eq!(modal.handle_key(props, KeyCode::Tab, &mut rec), ModalEvent::FocusMoved);
        type_str(&mut modal, props, &mut rec, "temp123");

        assert_eq!(modal.form().username, "jdoe");
        assert_eq!(modal.form().temp_password, "temp123");

        assert_eq!(modal.handle_key(props, KeyCode::Enter, &mut rec), ModalEvent::Submitted);
        assert_eq!(rec.submitted.len(), 1);
        assert_eq!(rec.submitted[0].faculty_id, "F1");
    }

    #[test]
    fn typing_on_buttons_is_ignored() {
        let f = record("F1");
        let props = ModalProps::new(true, Some(&f));
        let mut modal = AccountCreationModal::new();
        let mut rec = Recorder::default();
        modal.handle_key(props, KeyCode::Tab, &mut rec);
        modal.handle_key(props, KeyCode::Tab, &mut rec);
        assert_eq!(modal.focus(), Focus::Create);
        assert_eq!(modal.handle_key(props, KeyCode::Char('a'), &mut rec), ModalEvent::Ignored);
        assert_eq!(modal.form(), &FormState::default());
    }

    #[test]
    fn enter_on_cancel_closes_and_reopen_is_blank() {
        let f = record("F1");
        let props = ModalProps::new(true, Some(&f));
        let mut modal = AccountCreationModal::new();
        let mut rec = Recorder::default();
        type_str(&mut modal, props, &mut rec, "jdoe");

        modal.handle_key(props, KeyCode::BackTab, &mut rec);
        assert_eq!(modal.focus(), Focus::Cancel);
        assert_eq!(modal.handle_key(props, KeyCode::Enter, &mut rec), ModalEvent::Closed);
        assert_eq!(rec.closed, 1);

        // reopened by the caller
        assert_eq!(modal.form(), &FormState::default());
        assert_eq!(modal.focus(), Focus::Username);
    }

    #[test]
    fn focus_ring_wraps_both_ways() {
        assert_eq!(Focus::Cancel.next(), Focus::Username);
        assert_eq!(Focus::Username.prev(), Focus::Cancel);
        assert_eq!(Focus::Username.next().next(), Focus::Create);
    }
}
