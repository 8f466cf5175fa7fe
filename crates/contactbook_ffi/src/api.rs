//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose contact add/update/delete/list/search to Dart via FRB.
//! - Translate core results into flat response envelopes.
//!
//! # Invariants
//! - Exported functions must not panic across FFI boundary.
//! - One store lives for the whole process; nothing is persisted.
//! - Selection stays on the Dart side and is passed in as a store `index`.

use contactbook_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, ping as ping_inner,
    Contact, ContactStore, Notice, StoreError, CONTACT_COLUMNS,
};
use log::warn;
use std::sync::{Mutex, MutexGuard, OnceLock};

static CONTACT_STORE: OnceLock<Mutex<ContactStore>> = OnceLock::new();

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir`.
/// - Never panics; returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err.to_string(),
    }
}

/// One rendered contact row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactItem {
    /// Store position; pass back to update/delete.
    pub index: u32,
    pub name: String,
    pub phone: String,
    pub email: String,
    pub address: String,
}

/// Result of a list or search call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactListResponse {
    pub items: Vec<ContactItem>,
    /// Human-readable summary for diagnostics.
    pub message: String,
}

/// Result of a mutating call.
///
/// On failure `title` and `message` are the dialog to show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactActionResponse {
    pub ok: bool,
    pub title: String,
    pub message: String,
}

impl ContactActionResponse {
    fn success(message: impl Into<String>) -> Self {
        Self {
            ok: true,
            title: String::new(),
            message: message.into(),
        }
    }

    fn notice(notice: Notice) -> Self {
        Self {
            ok: false,
            title: notice.title,
            message: notice.message,
        }
    }
}

/// Column headers in display order.
#[flutter_rust_bridge::frb(sync)]
pub fn contact_columns() -> Vec<String> {
    CONTACT_COLUMNS.iter().map(|label| label.to_string()).collect()
}

/// Appends a contact.
///
/// # FFI contract
/// - Fails with the "Incomplete Data" notice when name or phone is empty.
#[flutter_rust_bridge::frb(sync)]
pub fn contact_add(
    name: String,
    phone: String,
    email: String,
    address: String,
) -> ContactActionResponse {
    let contact = Contact::new(name, phone, email, address);
    match lock_store().add(contact) {
        Ok(()) => ContactActionResponse::success("Contact added."),
        Err(_) => ContactActionResponse::notice(Notice::incomplete_data()),
    }
}

/// Overwrites the contact at store position `index`.
///
/// # FFI contract
/// - Negative or out-of-range `index` fails with the "Select Contact" notice.
/// - Blank name/phone are accepted on update.
#[flutter_rust_bridge::frb(sync)]
pub fn contact_update(
    index: i64,
    name: String,
    phone: String,
    email: String,
    address: String,
) -> ContactActionResponse {
    let Some(position) = to_position(index) else {
        return ContactActionResponse::notice(Notice::select_contact("update"));
    };
    let contact = Contact::new(name, phone, email, address);
    match lock_store().replace_at(position, contact) {
        Ok(()) => ContactActionResponse::success("Contact updated."),
        Err(err) => index_failure(err, "update"),
    }
}

/// Removes the contact at store position `index`.
///
/// # FFI contract
/// - Negative or out-of-range `index` fails with the "Select Contact" notice.
#[flutter_rust_bridge::frb(sync)]
pub fn contact_delete(index: i64) -> ContactActionResponse {
    let Some(position) = to_position(index) else {
        return ContactActionResponse::notice(Notice::select_contact("delete"));
    };
    match lock_store().remove_at(position) {
        Ok(_) => ContactActionResponse::success("Contact deleted."),
        Err(err) => index_failure(err, "delete"),
    }
}

/// Lists every contact in display order.
#[flutter_rust_bridge::frb(sync)]
pub fn contact_list() -> Vec<ContactItem> {
    let store = lock_store();
    (0..store.len())
        .filter_map(|position| to_item(&store, position))
        .collect()
}

/// Filters contacts by name (case-insensitive) or phone substring.
///
/// # FFI contract
/// - Empty keyword returns the full list.
/// - Item `index` values are store positions, not row numbers.
#[flutter_rust_bridge::frb(sync)]
pub fn contact_search(keyword: String) -> ContactListResponse {
    let store = lock_store();
    let items = store
        .filter_positions(keyword.as_str())
        .into_iter()
        .filter_map(|position| to_item(&store, position))
        .collect::<Vec<_>>();
    let message = if items.is_empty() {
        "No results.".to_string()
    } else {
        format!("Found {} contact(s).", items.len())
    };
    ContactListResponse { items, message }
}

fn lock_store() -> MutexGuard<'static, ContactStore> {
    let store = CONTACT_STORE.get_or_init(|| Mutex::new(ContactStore::new()));
    // Store operations are single-step, so a poisoned lock still holds a
    // consistent sequence.
    store.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

fn to_position(index: i64) -> Option<usize> {
    let position = usize::try_from(index).ok();
    if position.is_none() {
        warn!("event=contact_index module=ffi status=rejected reason=negative");
    }
    position
}

fn index_failure(err: StoreError, action: &str) -> ContactActionResponse {
    match err {
        StoreError::IndexOutOfRange { .. } => {
            ContactActionResponse::notice(Notice::select_contact(action))
        }
        other => ContactActionResponse {
            ok: false,
            title: String::new(),
            message: format!("contact_{action} failed: {other}"),
        },
    }
}

fn to_item(store: &ContactStore, position: usize) -> Option<ContactItem> {
    let contact = store.get(position)?;
    Some(ContactItem {
        index: u32::try_from(position).ok()?,
        name: contact.name.clone(),
        phone: contact.phone.clone(),
        email: contact.email.clone(),
        address: contact.address.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::{
        contact_add, contact_columns, contact_delete, contact_list, contact_search,
        contact_update, core_version, init_logging, ping,
    };
    use std::time::{SystemTime, UNIX_EPOCH};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }

    #[test]
    fn init_logging_rejects_empty_log_dir() {
        let error = init_logging("info".to_string(), String::new());
        assert!(!error.is_empty());
    }

    #[test]
    fn init_logging_rejects_unsupported_level() {
        let error = init_logging("verbose".to_string(), "tmp/logs".to_string());
        assert!(!error.is_empty());
    }

    #[test]
    fn contact_columns_match_headers() {
        assert_eq!(contact_columns(), vec!["Name", "Phone", "Email", "Address"]);
    }

    #[test]
    fn contact_add_requires_name_and_phone() {
        let response = contact_add(
            String::new(),
            "555".to_string(),
            String::new(),
            String::new(),
        );
        assert!(!response.ok);
        assert_eq!(response.title, "Incomplete Data");
        assert_eq!(response.message, "Name and Phone are required!");
    }

    #[test]
    fn negative_index_is_rejected() {
        let deleted = contact_delete(-1);
        assert!(!deleted.ok);
        assert_eq!(deleted.message, "Please select a contact to delete.");

        let updated = contact_update(
            -3,
            "x".to_string(),
            "1".to_string(),
            String::new(),
            String::new(),
        );
        assert!(!updated.ok);
        assert_eq!(updated.title, "Select Contact");
    }

    #[test]
    fn index_past_end_is_rejected() {
        let response = contact_delete(i64::from(u32::MAX));
        assert!(!response.ok);
        assert_eq!(response.message, "Please select a contact to delete.");
    }

    #[test]
    fn search_returns_store_positions_usable_for_update_and_delete() {
        let token = unique_token("ffi-contact");
        let added = contact_add(
            format!("{token}-Alice"),
            "555-0101".to_string(),
            String::new(),
            String::new(),
        );
        assert!(added.ok, "{}", added.message);

        let found = contact_search(token.to_uppercase());
        assert_eq!(found.items.len(), 1, "{}", found.message);
        let item = found.items[0].clone();
        assert!(contact_list().contains(&item));

        let updated = contact_update(
            i64::from(item.index),
            item.name.clone(),
            item.phone.clone(),
            "alice@x.com".to_string(),
            String::new(),
        );
        assert!(updated.ok, "{}", updated.message);
        let found = contact_search(token.clone());
        assert_eq!(found.items[0].email, "alice@x.com");

        let deleted = contact_delete(i64::from(found.items[0].index));
        assert!(deleted.ok, "{}", deleted.message);
        let found = contact_search(token);
        assert!(found.items.is_empty());
        assert_eq!(found.message, "No results.");
    }

    fn unique_token(prefix: &str) -> String {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("time went backwards")
            .as_nanos();
        format!("{prefix}-{nanos}")
    }
}
