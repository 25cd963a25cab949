//! App Core for mdpreview.
//!
//! Central struct holding the services and the previewed document state,
//! managing application lifecycle.

use std::fs;
use std::path::Path;
use std::time::Duration;

use crate::services::renderer::{MarkdownRenderer, MarkdownRendererTrait};
use crate::services::settings_engine::SettingsEngine;
use crate::services::theme_engine::{ThemeEngine, ThemeEngineTrait};
use crate::types::document::DocumentState;
use crate::types::errors::RenderError;
use crate::types::settings::ThemeMode;

/// Central application struct wiring settings, theme, renderer, and the
/// watched document together.
pub struct App {
    pub settings_engine: SettingsEngine,
    pub theme_engine: ThemeEngine,
    pub renderer: MarkdownRenderer,
    pub document: DocumentState,
}

impl App {
    /// Creates a new App for the given Markdown file.
    ///
    /// `config_override` redirects the settings file, which tests use to stay
    /// out of the real platform config directory.
    pub fn new(path: impl AsRef<Path>, config_override: Option<String>) -> Self {
        Self {
            settings_engine: SettingsEngine::new(config_override),
            theme_engine: ThemeEngine::new(ThemeMode::System),
            renderer: MarkdownRenderer::new(),
            document: DocumentState::new(path.as_ref()),
        }
    }

    /// Startup sequence: load settings, then apply the configured theme and
    /// accent to the theme engine.
    pub fn startup(&mut self) {
        use crate::services::settings_engine::SettingsEngineTrait;

        if let Err(e) = self.settings_engine.load() {
            log::warn!("settings load failed, using defaults: {}", e);
        }

        let appearance = self.settings_engine.get_settings().appearance.clone();
        self.theme_engine.set_theme(appearance.theme);
        if let Err(e) = self.theme_engine.set_accent_color(&appearance.accent_color) {
            log::warn!("ignoring configured accent color: {}", e);
        }
    }

    /// Shutdown hook. The watcher is owned by the UI layer, which stops it
    /// before calling this.
    pub fn shutdown(&mut self) {
        log::info!("shutting down after {} refresh(es)", self.document.revision());
    }

    /// The stylesheet for the active theme and appearance settings.
    pub fn current_style(&self) -> String {
        use crate::services::settings_engine::SettingsEngineTrait;

        let appearance = &self.settings_engine.get_settings().appearance;
        self.theme_engine
            .markdown_style(appearance.font_size, appearance.max_content_width)
    }

    /// The configured polling interval for the file watcher.
    pub fn poll_interval(&self) -> Duration {
        use crate::services::settings_engine::SettingsEngineTrait;

        Duration::from_millis(self.settings_engine.get_settings().watcher.poll_interval_ms)
    }

    /// Reads the watched file from disk and renders it as a styled document,
    /// recording the observed content in the document state.
    pub fn render_current(&mut self) -> Result<String, RenderError> {
        let path = self.document.path();
        let markdown = fs::read_to_string(path)
            .map_err(|e| RenderError::ReadFailed(format!("{}: {}", path.display(), e)))?;
        Ok(self.render_text(markdown))
    }

    /// Renders already-observed Markdown text (from a watcher notification)
    /// as a styled document, recording it in the document state.
    pub fn render_text(&mut self, markdown: String) -> String {
        let style = self.current_style();
        let doc = self.renderer.render_document(&markdown, &style);
        self.document.update(markdown);
        doc
    }
}
