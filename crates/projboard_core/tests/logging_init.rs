use projboard_core::{init_logging, init_stderr_logging, logging_status, LogTarget, ProjectStore};

#[test]
fn file_logging_is_idempotent_and_rejects_conflicts() {
    let log_dir = tempfile::tempdir().expect("temp dir");
    let log_dir_str = log_dir
        .path()
        .to_str()
        .expect("temp dir should be valid UTF-8")
        .to_string();

    init_logging("info", &log_dir_str).expect("first init should succeed");
    init_logging("INFO", &log_dir_str).expect("same config should be idempotent");

    let level_error = init_logging("debug", &log_dir_str).expect_err("level conflict");
    assert!(level_error.contains("refusing to switch"));
    let target_error = init_stderr_logging("info").expect_err("target conflict");
    assert!(target_error.contains("refusing to switch"));

    let (level, target) = logging_status().expect("logging should be active");
    assert_eq!(level, "info");
    assert_eq!(target, LogTarget::Directory(log_dir.path().to_path_buf()));

    ProjectStore::new().add_project("logged", "emits a store event", 1);
    log::logger().flush();
    let has_log_file = std::fs::read_dir(log_dir.path())
        .expect("log dir readable")
        .filter_map(Result::ok)
        .any(|entry| entry.file_name().to_string_lossy().starts_with("projboard"));
    assert!(has_log_file);
}
