//! Contact domain model.
//!
//! # Responsibility
//! - Define the record rendered as one row of the contact list.
//! - Own the required-field rule applied when a contact is created.
//!
//! # Invariants
//! - `name` and `phone` must be non-empty for a contact to be added.
//! - `email` and `address` are free-form and may be empty.
//! - Contacts carry no identity; duplicates are allowed.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Column labels in display order.
pub const CONTACT_COLUMNS: [&str; 4] = ["Name", "Phone", "Email", "Address"];

/// Fields checked by the required-field rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequiredField {
    Name,
    Phone,
}

impl RequiredField {
    /// Stable lowercase field name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Phone => "phone",
        }
    }
}

/// Validation errors for contact creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactValidationError {
    MissingRequiredField(RequiredField),
}

impl Display for ContactValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingRequiredField(field) => {
                write!(f, "required field `{}` is empty", field.as_str())
            }
        }
    }
}

impl Error for ContactValidationError {}

/// One contact record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub address: String,
}

impl Contact {
    /// Creates a contact from its four fields without validation.
    pub fn new(
        name: impl Into<String>,
        phone: impl Into<String>,
        email: impl Into<String>,
        address: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            phone: phone.into(),
            email: email.into(),
            address: address.into(),
        }
    }

    /// Checks the required-field rule used on add.
    ///
    /// Emptiness is tested on the raw value; whitespace-only input counts as
    /// present.
    ///
    /// # Errors
    /// - `MissingRequiredField(Name)` when `name` is empty.
    /// - `MissingRequiredField(Phone)` when `phone` is empty.
    pub fn validate(&self) -> Result<(), ContactValidationError> {
        if self.name.is_empty() {
            return Err(ContactValidationError::MissingRequiredField(
                RequiredField::Name,
            ));
        }
        if self.phone.is_empty() {
            return Err(ContactValidationError::MissingRequiredField(
                RequiredField::Phone,
            ));
        }
        Ok(())
    }

    /// Returns cell values in `CONTACT_COLUMNS` order.
    pub fn columns(&self) -> [&str; 4] {
        [
            self.name.as_str(),
            self.phone.as_str(),
            self.email.as_str(),
            self.address.as_str(),
        ]
    }

    /// Search match rule.
    ///
    /// `needle` must already be lowercased. Name is compared case-folded,
    /// phone is compared as stored.
    pub(crate) fn matches_lowered(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle) || self.phone.contains(needle)
    }
}

#[cfg(test)]
mod tests {
    use super::{Contact, ContactValidationError, RequiredField};

    #[test]
    fn validate_reports_first_missing_field() {
        let err = Contact::new("", "", "", "").validate().unwrap_err();
        assert_eq!(
            err,
            ContactValidationError::MissingRequiredField(RequiredField::Name)
        );

        let err = Contact::new("Bob", "", "", "").validate().unwrap_err();
        assert_eq!(
            err,
            ContactValidationError::MissingRequiredField(RequiredField::Phone)
        );
    }

    #[test]
    fn validate_accepts_blank_optional_fields() {
        assert!(Contact::new("Bob", "555", "", "").validate().is_ok());
    }

    #[test]
    fn phone_match_is_not_case_folded() {
        let contact = Contact::new("Desk", "EXT-12", "", "");
        assert!(!contact.matches_lowered("ext"));
        assert!(contact.matches_lowered("12"));
        assert!(contact.matches_lowered("des"));
    }
}
