// mdpreview state managers
// Managers handle stateful operations: the file-watching worker lifecycle.

pub mod file_watcher;
