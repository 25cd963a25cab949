use std::fmt;

// === WatchError ===

/// Errors related to the file-watching worker.
#[derive(Debug)]
pub enum WatchError {
    /// The watched file does not exist.
    FileNotFound(String),
    /// Reading the watched file failed.
    ReadFailed(String),
    /// The watcher was started while its worker thread was already running.
    AlreadyRunning,
    /// An operation required a running worker, but none was active.
    NotRunning,
}

impl fmt::Display for WatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WatchError::FileNotFound(path) => write!(f, "Watched file not found: {}", path),
            WatchError::ReadFailed(msg) => write!(f, "Watched file read failed: {}", msg),
            WatchError::AlreadyRunning => write!(f, "Watcher is already running"),
            WatchError::NotRunning => write!(f, "Watcher is not running"),
        }
    }
}

impl std::error::Error for WatchError {}

// === RenderError ===

/// Errors related to Markdown rendering.
#[derive(Debug)]
pub enum RenderError {
    /// Reading the source file failed.
    ReadFailed(String),
    /// The source file is not valid UTF-8 text.
    InvalidUtf8(String),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::ReadFailed(msg) => write!(f, "Markdown source read failed: {}", msg),
            RenderError::InvalidUtf8(path) => {
                write!(f, "Markdown source is not valid UTF-8: {}", path)
            }
        }
    }
}

impl std::error::Error for RenderError {}

// === SettingsError ===

/// Errors related to settings management.
#[derive(Debug)]
pub enum SettingsError {
    /// An I/O error occurred while reading or writing settings.
    IoError(String),
    /// Failed to serialize or deserialize settings.
    SerializationError(String),
    /// The provided settings key is invalid.
    InvalidKey(String),
    /// The provided settings value is invalid.
    InvalidValue(String),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::IoError(msg) => write!(f, "Settings I/O error: {}", msg),
            SettingsError::SerializationError(msg) => {
                write!(f, "Settings serialization error: {}", msg)
            }
            SettingsError::InvalidKey(key) => write!(f, "Invalid settings key: {}", key),
            SettingsError::InvalidValue(msg) => {
                write!(f, "Invalid settings value: {}", msg)
            }
        }
    }
}

impl std::error::Error for SettingsError {}

// === ThemeError ===

/// Errors related to theme engine operations.
#[derive(Debug)]
pub enum ThemeError {
    /// The provided color value is invalid.
    InvalidColor(String),
}

impl fmt::Display for ThemeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ThemeError::InvalidColor(color) => write!(f, "Invalid color: {}", color),
        }
    }
}

impl std::error::Error for ThemeError {}
