//! Theme Engine — manages dark/light/system themes and produces the
//! GitHub-style stylesheet embedded in every rendered document.

use crate::types::errors::ThemeError;
use crate::types::settings::ThemeMode;

/// Trait defining the theme engine interface.
pub trait ThemeEngineTrait {
    fn set_theme(&mut self, mode: ThemeMode);
    fn get_theme(&self) -> &ThemeMode;
    fn set_accent_color(&mut self, color: &str) -> Result<(), ThemeError>;
    fn get_accent_color(&self) -> &str;
    fn detect_system_theme(&self) -> ThemeMode;
    fn markdown_style(&self, font_size: u32, max_content_width: u32) -> String;
}

/// GitHub-style dark theme colors.
struct DarkPalette;
impl DarkPalette {
    const BG: &'static str = "#0d1117";
    const BG_SUBTLE: &'static str = "#161b22";
    const TEXT: &'static str = "#c9d1d9";
    const TEXT_MUTED: &'static str = "#8b949e";
    const BORDER: &'static str = "#30363d";
    const LINK: &'static str = "#58a6ff";
}

/// GitHub-style light theme colors.
struct LightPalette;
impl LightPalette {
    const BG: &'static str = "#ffffff";
    const BG_SUBTLE: &'static str = "#f6f8fa";
    const TEXT: &'static str = "#24292f";
    const TEXT_MUTED: &'static str = "#57606a";
    const BORDER: &'static str = "#d0d7de";
    const LINK: &'static str = "#0969da";
}

/// Validates a hex color string (e.g. "#2ea44f" or "#fff").
fn is_valid_hex_color(color: &str) -> bool {
    if !color.starts_with('#') {
        return false;
    }
    let hex = &color[1..];
    matches!(hex.len(), 3 | 6) && hex.chars().all(|c| c.is_ascii_hexdigit())
}

/// The theme engine implementation.
pub struct ThemeEngine {
    current_theme: ThemeMode,
    accent_color: String,
}

impl ThemeEngine {
    /// Creates a new ThemeEngine with the given initial mode and default accent color.
    pub fn new(mode: ThemeMode) -> Self {
        Self {
            current_theme: mode,
            accent_color: "#2ea44f".to_string(),
        }
    }

    /// Returns the effective theme, resolving `System` to a concrete mode.
    fn effective_theme(&self) -> ThemeMode {
        match &self.current_theme {
            ThemeMode::System => self.detect_system_theme(),
            other => other.clone(),
        }
    }

    /// Builds the document stylesheet for a given palette.
    fn build_style(
        bg: &str,
        bg_subtle: &str,
        text: &str,
        text_muted: &str,
        border: &str,
        link: &str,
        accent: &str,
        font_size: u32,
        max_content_width: u32,
    ) -> String {
        let mut css = String::with_capacity(2048);
        css.push_str(&format!(
            "body{{background:{bg};color:{text};font-family:-apple-system,BlinkMacSystemFont,\
             'Segoe UI',Helvetica,Arial,sans-serif;font-size:{font_size}px;line-height:1.5;\
             margin:0;padding:32px}}"
        ));
        css.push_str(&format!(
            ".markdown-body{{max-width:{max_content_width}px;margin:0 auto}}"
        ));
        css.push_str(&format!(
            "h1,h2{{border-bottom:1px solid {border};padding-bottom:.3em}}"
        ));
        css.push_str("h1,h2,h3,h4,h5,h6{margin-top:24px;margin-bottom:16px;font-weight:600}");
        css.push_str(&format!("a{{color:{link};text-decoration:none}}"));
        css.push_str("a:hover{text-decoration:underline}");
        css.push_str(&format!(
            "code{{background:{bg_subtle};padding:.2em .4em;border-radius:6px;\
             font-family:ui-monospace,SFMono-Regular,'SF Mono',Menlo,Consolas,monospace;\
             font-size:85%}}"
        ));
        css.push_str(&format!(
            "pre{{background:{bg_subtle};padding:16px;border-radius:6px;overflow-x:auto}}"
        ));
        css.push_str("pre code{background:transparent;padding:0}");
        css.push_str(&format!(
            "blockquote{{border-left:.25em solid {border};color:{text_muted};\
             margin:0 0 16px;padding:0 1em}}"
        ));
        css.push_str("table{border-collapse:collapse;margin-bottom:16px}");
        css.push_str(&format!(
            "th,td{{border:1px solid {border};padding:6px 13px}}"
        ));
        css.push_str(&format!("tr:nth-child(2n){{background:{bg_subtle}}}"));
        css.push_str(&format!("hr{{border:0;border-top:1px solid {border};height:0}}"));
        css.push_str("img{max-width:100%}");
        css.push_str(&format!(
            "input[type=checkbox]{{accent-color:{accent};margin-right:.5em}}"
        ));
        css
    }
}

impl ThemeEngineTrait for ThemeEngine {
    fn set_theme(&mut self, mode: ThemeMode) {
        self.current_theme = mode;
    }

    fn get_theme(&self) -> &ThemeMode {
        &self.current_theme
    }

    fn set_accent_color(&mut self, color: &str) -> Result<(), ThemeError> {
        if !is_valid_hex_color(color) {
            return Err(ThemeError::InvalidColor(color.to_string()));
        }
        self.accent_color = color.to_string();
        Ok(())
    }

    fn get_accent_color(&self) -> &str {
        &self.accent_color
    }

    fn detect_system_theme(&self) -> ThemeMode {
        // In a full GTK build this would query gtk::Settings for
        // "gtk-application-prefer-dark-theme". Without the GTK runtime
        // we fall back to checking the GTK_THEME environment variable.
        if let Ok(gtk_theme) = std::env::var("GTK_THEME") {
            let lower = gtk_theme.to_lowercase();
            if lower.contains("dark") {
                return ThemeMode::Dark;
            }
            return ThemeMode::Light;
        }
        // Default to dark (GitHub-style default).
        ThemeMode::Dark
    }

    fn markdown_style(&self, font_size: u32, max_content_width: u32) -> String {
        let accent = &self.accent_color;
        match self.effective_theme() {
            ThemeMode::Dark => Self::build_style(
                DarkPalette::BG,
                DarkPalette::BG_SUBTLE,
                DarkPalette::TEXT,
                DarkPalette::TEXT_MUTED,
                DarkPalette::BORDER,
                DarkPalette::LINK,
                accent,
                font_size,
                max_content_width,
            ),
            ThemeMode::Light => Self::build_style(
                LightPalette::BG,
                LightPalette::BG_SUBTLE,
                LightPalette::TEXT,
                LightPalette::TEXT_MUTED,
                LightPalette::BORDER,
                LightPalette::LINK,
                accent,
                font_size,
                max_content_width,
            ),
            // System is already resolved by effective_theme()
            ThemeMode::System => unreachable!(),
        }
    }
}
