//! Core domain logic for the contact book.
//! This crate is the single source of truth for contact rules; UI layers
//! only render what it returns.

pub mod logging;
pub mod model;
pub mod session;
pub mod store;

pub use logging::{default_log_level, init_logging, logging_status, LogLevel, LoggingError};
pub use model::contact::{Contact, ContactValidationError, RequiredField, CONTACT_COLUMNS};
pub use session::form_session::{ContactForm, FormSession, Notice, NoticeKind};
pub use store::contact_store::{ContactStore, StoreError, StoreResult};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
