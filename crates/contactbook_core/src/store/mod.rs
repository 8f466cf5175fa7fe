//! Contact storage.
//!
//! # Responsibility
//! - Hold contacts in memory for the lifetime of one session.
//! - Report failures as typed results instead of panicking.
//!
//! # Invariants
//! - Nothing is persisted; dropping the store drops every contact.

pub mod contact_store;
