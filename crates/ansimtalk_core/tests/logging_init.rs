use ansimtalk_core::{init_logging, logging_status, LogLevel, LoggingError};

#[test]
fn init_logging_is_idempotent_and_rejects_conflicts() {
    let log_dir = tempfile::tempdir().unwrap().into_path();
    let log_dir_str = log_dir.to_str().unwrap().to_string();
    let other_dir = tempfile::tempdir().unwrap().into_path();
    let other_dir_str = other_dir.to_str().unwrap().to_string();

    init_logging("info", &log_dir_str).unwrap();
    init_logging("INFO", &log_dir_str).unwrap();

    let level_error = init_logging("debug", &log_dir_str).unwrap_err();
    assert!(matches!(level_error, LoggingError::LevelConflict { .. }));
    assert!(level_error.to_string().contains("refusing to switch"));

    let dir_error = init_logging("info", &other_dir_str).unwrap_err();
    assert!(matches!(dir_error, LoggingError::DirConflict { .. }));

    let (active_level, active_dir) = logging_status().unwrap();
    assert_eq!(active_level, LogLevel::Info);
    assert_eq!(active_dir, log_dir);
}
