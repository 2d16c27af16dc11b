// Integration test for logging: initializes the global subscriber, so it
// lives in its own test binary with a single test.

use std::fs;
use tempfile::TempDir;
use themeconf::infrastructure::logging::{LogConfig, LogFormat, LoggerImpl, RotationPolicy};
use themeconf::ConfigLoader;
use tracing::{info, instrument};

#[test]
fn test_logging_to_file() {
    let temp_dir = TempDir::new().unwrap();

    let config = LogConfig {
        level: "debug".to_string(),
        format: LogFormat::Json,
        log_dir: Some(temp_dir.path().to_path_buf()),
        rotation: RotationPolicy::Never,
    };

    let logger = LoggerImpl::init(&config).unwrap();

    info!("Test message 1");
    info!(key = "value", "Test message with fields");
    assert_eq!(instrumented_add(5, 7), 12);

    // loader events are emitted at debug level
    ConfigLoader::load_value(&serde_json::json!({
        "content": [],
        "theme": {"extend": {}},
        "plugins": []
    }))
    .unwrap();

    // dropping the guard flushes the non-blocking writer
    drop(logger);

    let contents = fs::read_to_string(temp_dir.path().join("themeconf.log")).unwrap();
    assert!(contents.contains("Test message 1"), "Log should contain basic message");
    assert!(
        contents.contains("Test message with fields"),
        "Log should contain message with fields"
    );
    assert!(
        contents.contains("entering instrumented function"),
        "Log should contain instrumented function traces"
    );
    assert!(
        contents.contains("configuration loaded"),
        "Log should contain loader events"
    );
}

#[instrument]
fn instrumented_add(a: i32, b: i32) -> i32 {
    info!("entering instrumented function");
    a + b
}
