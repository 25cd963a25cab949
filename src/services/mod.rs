// mdpreview services
// Services provide core functionality: Markdown rendering, theming, settings.

pub mod renderer;
pub mod settings_engine;
pub mod theme_engine;
