//! In-memory ordered contact store.
//!
//! # Responsibility
//! - Own the contact sequence for one presentation session.
//! - Provide append, positional replace/remove, listing and keyword filter.
//!
//! # Invariants
//! - Insertion order is display order.
//! - Removing a record shifts every later position down by one.
//! - Failed operations leave the sequence untouched.
//! - Only `add` enforces the required-field rule.

use crate::model::contact::{Contact, ContactValidationError, RequiredField};
use log::{debug, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type StoreResult<T> = Result<T, StoreError>;

/// Store operation failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreError {
    /// `name` or `phone` was empty on add.
    MissingRequiredField(RequiredField),
    /// Target position is outside `[0, len)`.
    IndexOutOfRange { index: usize, len: usize },
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingRequiredField(field) => {
                write!(f, "missing required field: {}", field.as_str())
            }
            Self::IndexOutOfRange { index, len } => {
                write!(f, "contact index {index} out of range for length {len}")
            }
        }
    }
}

impl Error for StoreError {}

impl From<ContactValidationError> for StoreError {
    fn from(value: ContactValidationError) -> Self {
        match value {
            ContactValidationError::MissingRequiredField(field) => {
                Self::MissingRequiredField(field)
            }
        }
    }
}

/// Ordered collection of contacts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactStore {
    contacts: Vec<Contact>,
}

impl ContactStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a contact after checking required fields.
    ///
    /// # Errors
    /// - `MissingRequiredField` when `name` or `phone` is empty.
    pub fn add(&mut self, contact: Contact) -> StoreResult<()> {
        if let Err(err) = contact.validate() {
            warn!(
                "event=contact_add module=store status=rejected reason={}",
                StoreError::from(err)
            );
            return Err(err.into());
        }

        self.contacts.push(contact);
        debug!(
            "event=contact_add module=store status=ok len={}",
            self.contacts.len()
        );
        Ok(())
    }

    /// Overwrites the contact at `index`.
    ///
    /// Required fields are not re-checked, so an edit may blank them.
    pub fn replace_at(&mut self, index: usize, contact: Contact) -> StoreResult<()> {
        let len = self.contacts.len();
        let Some(slot) = self.contacts.get_mut(index) else {
            warn!("event=contact_replace module=store status=rejected index={index} len={len}");
            return Err(StoreError::IndexOutOfRange { index, len });
        };

        *slot = contact;
        debug!("event=contact_replace module=store status=ok index={index} len={len}");
        Ok(())
    }

    /// Removes and returns the contact at `index`.
    pub fn remove_at(&mut self, index: usize) -> StoreResult<Contact> {
        let len = self.contacts.len();
        if index >= len {
            warn!("event=contact_remove module=store status=rejected index={index} len={len}");
            return Err(StoreError::IndexOutOfRange { index, len });
        }

        let removed = self.contacts.remove(index);
        debug!(
            "event=contact_remove module=store status=ok index={index} len={}",
            self.contacts.len()
        );
        Ok(removed)
    }

    /// Full sequence in display order.
    pub fn all(&self) -> &[Contact] {
        &self.contacts
    }

    pub fn get(&self, index: usize) -> Option<&Contact> {
        self.contacts.get(index)
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    /// Returns contacts whose name contains `keyword` ignoring case, or whose
    /// phone contains the lowercased `keyword`.
    ///
    /// An empty keyword returns the full sequence.
    pub fn filter(&self, keyword: &str) -> Vec<&Contact> {
        self.filter_positions(keyword)
            .into_iter()
            .filter_map(|index| self.contacts.get(index))
            .collect()
    }

    /// Same match as [`ContactStore::filter`], returning store positions.
    pub fn filter_positions(&self, keyword: &str) -> Vec<usize> {
        let needle = keyword.to_lowercase();
        if needle.is_empty() {
            return (0..self.contacts.len()).collect();
        }

        self.contacts
            .iter()
            .enumerate()
            .filter(|(_, contact)| contact.matches_lowered(needle.as_str()))
            .map(|(index, _)| index)
            .collect()
    }
}
