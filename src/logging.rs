//! Terminal logging setup on top of the `log` facade.

use simplelog::{ColorChoice, CombinedLogger, Config, TermLogger, TerminalMode};

/// Initializes the global terminal logger.
///
/// Debug builds log at debug level, release builds at info level. Safely
/// no-ops if another logger has already been initialized, so tests and the
/// binary can both call it.
pub fn init() {
    let level = if cfg!(debug_assertions) {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    let _ = CombinedLogger::init(vec![TermLogger::new(
        level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )]);
}
