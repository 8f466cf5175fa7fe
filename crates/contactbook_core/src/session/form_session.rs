//! Contact form session state.
//!
//! # Responsibility
//! - Hold the input fields, selected row, search keyword and rendered view
//!   that a contact form shows next to its store.
//! - Turn store failures into user-facing notices.
//!
//! # Invariants
//! - `view` always lists valid store positions after any session call.
//! - Selection refers to a row of `view` and is cleared after every add,
//!   update, delete, search and clear.
//! - Selection is revalidated against the store before it is used.

use crate::model::contact::Contact;
use crate::store::contact_store::{ContactStore, StoreError};
use log::{info, warn};
use std::fmt::{Display, Formatter};

const INCOMPLETE_DATA_TITLE: &str = "Incomplete Data";
const INCOMPLETE_DATA_MESSAGE: &str = "Name and Phone are required!";
const SELECT_CONTACT_TITLE: &str = "Select Contact";

/// Severity of a notice shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Warning,
    Info,
}

/// User-facing message produced by a rejected form action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: String,
    pub message: String,
}

impl Notice {
    /// Warning shown when add is attempted without name or phone.
    pub fn incomplete_data() -> Self {
        Self {
            kind: NoticeKind::Warning,
            title: INCOMPLETE_DATA_TITLE.to_string(),
            message: INCOMPLETE_DATA_MESSAGE.to_string(),
        }
    }

    /// Info shown when update/delete is attempted without a valid selection.
    ///
    /// `action` is the verb used in the message, e.g. `update`.
    pub fn select_contact(action: &str) -> Self {
        Self {
            kind: NoticeKind::Info,
            title: SELECT_CONTACT_TITLE.to_string(),
            message: format!("Please select a contact to {action}."),
        }
    }
}

impl Display for Notice {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.title, self.message)
    }
}

/// Input field bindings of the contact form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub address: String,
}

impl ContactForm {
    /// Snapshot of the current field values.
    pub fn to_contact(&self) -> Contact {
        Contact::new(
            self.name.clone(),
            self.phone.clone(),
            self.email.clone(),
            self.address.clone(),
        )
    }

    /// Overwrites every field from `contact`.
    pub fn fill_from(&mut self, contact: &Contact) {
        self.name.clone_from(&contact.name);
        self.phone.clone_from(&contact.phone);
        self.email.clone_from(&contact.email);
        self.address.clone_from(&contact.address);
    }

    pub fn clear(&mut self) {
        self.name.clear();
        self.phone.clear();
        self.email.clear();
        self.address.clear();
    }
}

/// Store plus the presentation state that drives it.
#[derive(Debug, Default)]
pub struct FormSession {
    store: ContactStore,
    /// Field bindings edited directly by the UI.
    pub form: ContactForm,
    selected: Option<usize>,
    active_filter: Option<String>,
    view: Vec<usize>,
}

impl FormSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn store(&self) -> &ContactStore {
        &self.store
    }

    /// Selected row of the current view.
    pub fn selected_row(&self) -> Option<usize> {
        self.selected
    }

    /// Most recent non-empty search keyword.
    pub fn active_filter(&self) -> Option<&str> {
        self.active_filter.as_deref()
    }

    /// Store positions of the rendered rows.
    pub fn view(&self) -> &[usize] {
        &self.view
    }

    /// Records of the rendered rows, in order.
    pub fn rows(&self) -> Vec<&Contact> {
        self.view
            .iter()
            .filter_map(|position| self.store.get(*position))
            .collect()
    }

    /// Selects one rendered row and copies its record into the form.
    ///
    /// Returns `None` and leaves state unchanged when `row` is not rendered.
    pub fn select_row(&mut self, row: usize) -> Option<&Contact> {
        let position = *self.view.get(row)?;
        let contact = self.store.get(position)?;
        self.form.fill_from(contact);
        self.selected = Some(row);
        Some(contact)
    }

    /// Adds the form contents as a new contact.
    ///
    /// On rejection the form and selection are kept so the user can fix them.
    pub fn add_contact(&mut self) -> Result<(), Notice> {
        match self.store.add(self.form.to_contact()) {
            Ok(()) => {
                self.after_mutation("add");
                Ok(())
            }
            Err(_) => Err(Notice::incomplete_data()),
        }
    }

    /// Replaces the selected contact with the form contents.
    pub fn update_contact(&mut self) -> Result<(), Notice> {
        let position = self
            .selected_position()
            .ok_or_else(|| Notice::select_contact("update"))?;
        self.store
            .replace_at(position, self.form.to_contact())
            .map_err(|err| stale_selection_notice(err, "update"))?;
        self.after_mutation("update");
        Ok(())
    }

    /// Removes the selected contact and returns it.
    pub fn delete_contact(&mut self) -> Result<Contact, Notice> {
        let position = self
            .selected_position()
            .ok_or_else(|| Notice::select_contact("delete"))?;
        let removed = self
            .store
            .remove_at(position)
            .map_err(|err| stale_selection_notice(err, "delete"))?;
        self.after_mutation("delete");
        Ok(removed)
    }

    /// Applies `keyword` as the active filter and re-renders.
    ///
    /// An empty keyword shows the full list again.
    pub fn search(&mut self, keyword: &str) {
        self.active_filter = if keyword.is_empty() {
            None
        } else {
            Some(keyword.to_string())
        };
        self.selected = None;
        self.refresh_view();
        info!(
            "event=contact_search module=session status=ok filtered={} rows={}",
            self.active_filter.is_some(),
            self.view.len()
        );
    }

    /// Empties the input fields and drops the selection.
    pub fn clear_form(&mut self) {
        self.form.clear();
        self.selected = None;
    }

    fn selected_position(&self) -> Option<usize> {
        let row = self.selected?;
        let position = *self.view.get(row)?;
        (position < self.store.len()).then_some(position)
    }

    fn after_mutation(&mut self, action: &str) {
        self.refresh_view();
        self.clear_form();
        info!(
            "event=contact_{action} module=session status=ok len={} rows={}",
            self.store.len(),
            self.view.len()
        );
    }

    fn refresh_view(&mut self) {
        self.view = self
            .store
            .filter_positions(self.active_filter.as_deref().unwrap_or(""));
    }
}

fn stale_selection_notice(err: StoreError, action: &str) -> Notice {
    warn!("event=contact_{action} module=session status=stale_selection error={err}");
    Notice::select_contact(action)
}

#[cfg(test)]
mod tests {
    use super::{ContactForm, FormSession, Notice, NoticeKind};

    fn fill(session: &mut FormSession, name: &str, phone: &str) {
        session.form = ContactForm {
            name: name.to_string(),
            phone: phone.to_string(),
            email: String::new(),
            address: String::new(),
        };
    }

    #[test]
    fn notice_display_joins_title_and_message() {
        let notice = Notice::select_contact("delete");
        assert_eq!(notice.kind, NoticeKind::Info);
        assert_eq!(
            notice.to_string(),
            "Select Contact: Please select a contact to delete."
        );
    }

    #[test]
    fn selected_position_follows_view_mapping() {
        let mut session = FormSession::new();
        fill(&mut session, "Alice", "1");
        session.add_contact().unwrap();
        fill(&mut session, "Bob", "2");
        session.add_contact().unwrap();

        session.search("bob");
        assert_eq!(session.view(), &[1]);
        session.select_row(0).unwrap();
        assert_eq!(session.selected_position(), Some(1));
    }
}
