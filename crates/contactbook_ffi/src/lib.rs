//! Flutter bridge for the contact book core.

pub mod api;
