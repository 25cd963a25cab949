use mdpreview::types::errors::*;

// === WatchError Tests ===

#[test]
fn watch_error_file_not_found_display() {
    let err = WatchError::FileNotFound("/tmp/notes.md".to_string());
    assert_eq!(err.to_string(), "Watched file not found: /tmp/notes.md");
}

#[test]
fn watch_error_read_failed_display() {
    let err = WatchError::ReadFailed("permission denied".to_string());
    assert_eq!(err.to_string(), "Watched file read failed: permission denied");
}

#[test]
fn watch_error_lifecycle_variants_display() {
    assert_eq!(WatchError::AlreadyRunning.to_string(), "Watcher is already running");
    assert_eq!(WatchError::NotRunning.to_string(), "Watcher is not running");
}

#[test]
fn watch_error_implements_error_trait() {
    let err: Box<dyn std::error::Error> = Box::new(WatchError::AlreadyRunning);
    assert!(err.source().is_none());
}

// === RenderError Tests ===

#[test]
fn render_error_display_variants() {
    assert_eq!(
        RenderError::ReadFailed("no such file".to_string()).to_string(),
        "Markdown source read failed: no such file"
    );
    assert_eq!(
        RenderError::InvalidUtf8("/tmp/binary.md".to_string()).to_string(),
        "Markdown source is not valid UTF-8: /tmp/binary.md"
    );
}

#[test]
fn render_error_implements_error_trait() {
    let err: Box<dyn std::error::Error> = Box::new(RenderError::InvalidUtf8("x".to_string()));
    assert!(err.source().is_none());
}

// === SettingsError Tests ===

#[test]
fn settings_error_display_variants() {
    assert_eq!(
        SettingsError::IoError("disk full".to_string()).to_string(),
        "Settings I/O error: disk full"
    );
    assert_eq!(
        SettingsError::SerializationError("bad json".to_string()).to_string(),
        "Settings serialization error: bad json"
    );
    assert_eq!(
        SettingsError::InvalidKey("nope".to_string()).to_string(),
        "Invalid settings key: nope"
    );
    assert_eq!(
        SettingsError::InvalidValue("type mismatch".to_string()).to_string(),
        "Invalid settings value: type mismatch"
    );
}

// === ThemeError Tests ===

#[test]
fn theme_error_invalid_color_display() {
    let err = ThemeError::InvalidColor("magenta".to_string());
    assert_eq!(err.to_string(), "Invalid color: magenta");
}
