//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `contactbook_core` linkage.
//! - Drive one scripted form session with deterministic output.

use contactbook_core::{FormSession, CONTACT_COLUMNS};

fn main() {
    println!("contactbook_core ping={}", contactbook_core::ping());
    println!("contactbook_core version={}", contactbook_core::core_version());

    let mut session = FormSession::new();
    for (name, phone) in [("Alice", "555-1111"), ("Bob", "555-2222"), ("", "555-3333")] {
        session.form.name = name.to_string();
        session.form.phone = phone.to_string();
        if let Err(notice) = session.add_contact() {
            println!("notice {notice}");
            session.clear_form();
        }
    }

    session.search("ali");
    println!("{}", CONTACT_COLUMNS.join(" | "));
    for contact in session.rows() {
        println!("{}", contact.columns().join(" | "));
    }
}
