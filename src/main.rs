//! mdpreview — a live-updating Markdown preview widget.
//!
//! Entry point: renders the given Markdown file (first argument, default
//! `README.md`) in a webview window and refreshes it when the file changes.
//! When built without the `gui` feature, runs a console demo instead.

#[cfg(feature = "gui")]
fn main() {
    use std::path::PathBuf;

    mdpreview::logging::init();

    let path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("README.md"));

    mdpreview::ui::webview_app::run(&path);
}

#[cfg(not(feature = "gui"))]
fn main() {
    mdpreview::logging::init();

    println!();
    println!("mdpreview v{} — demo mode (built without `gui`)", env!("CARGO_PKG_VERSION"));
    println!();

    demo_renderer();
    demo_theme();
    demo_settings();
    demo_watcher();

    println!();
    println!("All components demonstrated successfully.");
}

#[cfg(not(feature = "gui"))]
fn section(name: &str) {
    println!("───────────────────────────────────────────────");
    println!("  {}", name);
    println!("───────────────────────────────────────────────");
}

#[cfg(not(feature = "gui"))]
fn demo_renderer() {
    use mdpreview::services::renderer::{MarkdownRenderer, MarkdownRendererTrait};
    section("Markdown Renderer");

    let renderer = MarkdownRenderer::new();
    let body = renderer.render_body("# Title\n\nSome *emphasis* and a [link](https://example.com).");
    println!("  Rendered body: {} bytes", body.len());

    let doc = renderer.render_document("- [x] task list item", "body{color:#c9d1d9}");
    println!("  Wrapped document: {} bytes, styled = {}", doc.len(), doc.contains("<style>"));
    println!("  ✓ MarkdownRenderer OK");
    println!();
}

#[cfg(not(feature = "gui"))]
fn demo_theme() {
    use mdpreview::services::theme_engine::{ThemeEngine, ThemeEngineTrait};
    use mdpreview::types::settings::ThemeMode;
    section("Theme Engine");

    let mut engine = ThemeEngine::new(ThemeMode::Dark);
    println!("  Current theme: {:?}", engine.get_theme());
    println!("  Accent color: {}", engine.get_accent_color());

    let css = engine.markdown_style(16, 900);
    println!("  Dark stylesheet: {} bytes", css.len());

    engine.set_theme(ThemeMode::Light);
    println!("  Switched to: {:?}", engine.get_theme());
    println!("  ✓ ThemeEngine OK");
    println!();
}

#[cfg(not(feature = "gui"))]
fn demo_settings() {
    use mdpreview::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
    section("Settings Engine");

    let mut engine = SettingsEngine::new(Some("demo_settings.json".to_string()));
    let settings = engine.load().unwrap();
    println!("  Theme: {:?}", settings.appearance.theme);
    println!("  Poll interval: {} ms", settings.watcher.poll_interval_ms);
    println!("  Window: {}x{}", settings.window.width, settings.window.height);

    engine.set_value("watcher.poll_interval_ms", serde_json::json!(100)).unwrap();
    println!("  Changed poll interval to: {} ms", engine.get_settings().watcher.poll_interval_ms);

    engine.reset().unwrap();
    let _ = std::fs::remove_file("demo_settings.json");
    println!("  ✓ SettingsEngine OK");
    println!();
}

#[cfg(not(feature = "gui"))]
fn demo_watcher() {
    use mdpreview::managers::file_watcher::{FileWatcher, FileWatcherTrait, WatchEvent};
    use std::sync::mpsc;
    use std::time::Duration;
    section("File Watcher");

    let dir = std::env::temp_dir();
    let path = dir.join("mdpreview_demo.md");
    std::fs::write(&path, "# before").unwrap();

    let mut watcher = FileWatcher::new(&path, Duration::from_millis(20));
    let (tx, rx) = mpsc::channel();
    watcher.start(tx).unwrap();
    println!("  Watching {} (running = {})", path.display(), watcher.is_running());

    std::fs::write(&path, "# after").unwrap();
    match rx.recv_timeout(Duration::from_secs(2)) {
        Ok(WatchEvent::Changed(text)) => println!("  Change observed: {:?}", text),
        other => println!("  Unexpected: {:?}", other),
    }

    watcher.stop();
    println!("  Stopped (running = {})", watcher.is_running());
    let _ = std::fs::remove_file(&path);
    println!("  ✓ FileWatcher OK");
}
