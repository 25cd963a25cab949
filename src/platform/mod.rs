// mdpreview platform abstraction
// Provides the platform-specific config path for Windows, macOS, and Linux.
//
// Uses `cfg(target_os)` for conditional compilation to select the correct
// platform-specific implementation at compile time.

use std::env;
use std::path::PathBuf;

/// Returns the platform-specific configuration directory for mdpreview.
///
/// - **Linux**: `~/.config/mdpreview` (or `$XDG_CONFIG_HOME/mdpreview`)
/// - **macOS**: `~/Library/Application Support/mdpreview`
/// - **Windows**: `%APPDATA%/mdpreview`
pub fn get_config_dir() -> PathBuf {
    #[cfg(target_os = "linux")]
    {
        if let Ok(xdg) = env::var("XDG_CONFIG_HOME") {
            PathBuf::from(xdg).join("mdpreview")
        } else {
            PathBuf::from(home_dir()).join(".config").join("mdpreview")
        }
    }
    #[cfg(target_os = "macos")]
    {
        PathBuf::from(home_dir())
            .join("Library")
            .join("Application Support")
            .join("mdpreview")
    }
    #[cfg(target_os = "windows")]
    {
        let appdata = env::var("APPDATA").unwrap_or_else(|_| String::from("C:\\Temp"));
        PathBuf::from(appdata).join("mdpreview")
    }
}

#[cfg(any(target_os = "linux", target_os = "macos"))]
fn home_dir() -> String {
    env::var("HOME").unwrap_or_else(|_| String::from("/tmp"))
}
