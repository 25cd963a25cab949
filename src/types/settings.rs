use serde::{Deserialize, Serialize};

/// Top-level previewer settings container.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct PreviewerSettings {
    pub appearance: AppearanceSettings,
    pub watcher: WatcherSettings,
    pub window: WindowSettings,
}

/// Appearance and visual settings for the rendered document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppearanceSettings {
    pub theme: ThemeMode,
    pub accent_color: String,
    pub font_size: u32,
    /// Maximum content width in pixels, GitHub-README style.
    pub max_content_width: u32,
}

impl Default for AppearanceSettings {
    fn default() -> Self {
        Self {
            theme: ThemeMode::System,
            accent_color: "#2ea44f".to_string(),
            font_size: 16,
            max_content_width: 900,
        }
    }
}

/// Theme mode selection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum ThemeMode {
    Dark,
    Light,
    System,
}

/// File-watching settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WatcherSettings {
    /// How long the polling worker sleeps between re-reads, in milliseconds.
    pub poll_interval_ms: u64,
}

impl Default for WatcherSettings {
    fn default() -> Self {
        Self {
            poll_interval_ms: 200,
        }
    }
}

/// Window chrome settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WindowSettings {
    pub title: String,
    pub width: u32,
    pub height: u32,
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            title: "Markdown preview".to_string(),
            width: 960,
            height: 720,
        }
    }
}
