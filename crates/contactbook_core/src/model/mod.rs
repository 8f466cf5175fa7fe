//! Domain model for the contact book.
//!
//! # Responsibility
//! - Define the contact record shared by store, session and FFI layers.
//!
//! # Invariants
//! - Records are addressed by position only; there is no stable ID.

pub mod contact;
