use contactbook_core::{init_logging, logging_status, ContactStore, LoggingError};

#[test]
fn init_logging_is_idempotent_and_rejects_reconfiguration() {
    let log_dir = tempfile::tempdir().unwrap();
    let other_dir = tempfile::tempdir().unwrap();
    let log_dir_str = log_dir.path().to_str().unwrap().to_string();
    let other_dir_str = other_dir.path().to_str().unwrap().to_string();

    init_logging("info", &log_dir_str).unwrap();
    init_logging("INFO", &log_dir_str).unwrap();

    let level_err = init_logging("debug", &log_dir_str).unwrap_err();
    assert!(matches!(level_err, LoggingError::Reconfigure { .. }));
    assert!(level_err.to_string().contains("refusing to switch"));

    let dir_err = init_logging("info", &other_dir_str).unwrap_err();
    assert!(dir_err.to_string().contains("refusing to switch"));

    let (level, dir) = logging_status().unwrap();
    assert_eq!(level, "info");
    assert_eq!(dir, log_dir.path());

    let mut store = ContactStore::new();
    assert!(store.remove_at(0).is_err());
    log::logger().flush();

    let wrote_log = std::fs::read_dir(log_dir.path())
        .unwrap()
        .filter_map(Result::ok)
        .any(|entry| entry.file_name().to_string_lossy().starts_with("contactbook"));
    assert!(wrote_log);
}
