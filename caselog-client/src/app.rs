// caselog application state
//
// Explicit view-state machine for the terminal client. One view is
// active at a time and every transition is guarded, so rendering code
// can never observe an impossible combination (for instance a delete
// confirmation with no target note).

use caselog_utils::notification::Notification;
use uuid::Uuid;

/// Active screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    /// Default screen: the note list.
    List,
    /// Creation form, entered on explicit user action.
    CreateForm,
    /// Delete confirmation for one specific note.
    ConfirmDelete { id: Uuid, client_name: String },
}

/// Screen state owned by the run loop; mutated only through the guarded
/// transitions below. The notification slot holds the single current
/// status message (last write wins).
#[derive(Debug)]
pub struct AppState {
    view: View,
    notification: Option<Notification>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            view: View::List,
            notification: None,
        }
    }

    pub fn view(&self) -> &View {
        &self.view
    }

    /// Current status message (without consuming it)
    pub fn notification(&self) -> Option<&Notification> {
        self.notification.as_ref()
    }

    /// Replace the current status message (last write wins)
    pub fn notify(&mut self, notification: Notification) {
        self.notification = Some(notification);
    }

    pub fn clear_notification(&mut self) {
        self.notification = None;
    }

    /// List → CreateForm. Refused from any other view.
    pub fn open_form(&mut self) -> bool {
        if self.view == View::List {
            self.view = View::CreateForm;
            true
        } else {
            false
        }
    }

    /// CreateForm → List without creating anything.
    pub fn cancel_form(&mut self) -> bool {
        if self.view == View::CreateForm {
            self.view = View::List;
            true
        } else {
            false
        }
    }

    /// CreateForm → List after a successful submit.
    pub fn submit_succeeded(&mut self) -> bool {
        if self.view == View::CreateForm {
            self.view = View::List;
            true
        } else {
            false
        }
    }

    /// List → ConfirmDelete for one note. Refused from any other view.
    pub fn request_delete(&mut self, id: Uuid, client_name: impl Into<String>) -> bool {
        if self.view == View::List {
            self.view = View::ConfirmDelete {
                id,
                client_name: client_name.into(),
            };
            true
        } else {
            false
        }
    }

    /// ConfirmDelete → List, yielding the id the caller must now delete.
    pub fn confirm_delete(&mut self) -> Option<Uuid> {
        match &self.view {
            View::ConfirmDelete { id, .. } => {
                let id = *id;
                self.view = View::List;
                Some(id)
            }
            _ => None,
        }
    }

    /// ConfirmDelete → List with no effect.
    pub fn cancel_delete(&mut self) -> bool {
        if matches!(self.view, View::ConfirmDelete { .. }) {
            self.view = View::List;
            true
        } else {
            false
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
