//! Presentation session state.
//!
//! # Responsibility
//! - Keep form, selection and view state explicit instead of inside widgets.
//! - Let UI layers drive the store through user-level actions.

pub mod form_session;
