//! Integration-level unit tests for the FileWatcher public API.
//!
//! These exercise the watcher through its trait interface with real files in
//! temp directories: change notification, lifecycle errors, idempotent stop,
//! and survival across transient read failures.

use std::sync::mpsc;
use std::time::Duration;

use mdpreview::managers::file_watcher::{FileWatcher, FileWatcherTrait, WatchEvent};
use mdpreview::types::errors::WatchError;
use tempfile::TempDir;

const POLL: Duration = Duration::from_millis(10);
const WAIT: Duration = Duration::from_secs(5);

fn watched_file(dir: &TempDir, content: &str) -> std::path::PathBuf {
    let path = dir.path().join("watched.md");
    std::fs::write(&path, content).unwrap();
    path
}

/// Write-then-rename, so a poll never observes a half-written file. This is
/// also how most editors save.
fn write_atomic(path: &std::path::Path, content: &str) {
    let tmp = path.with_extension("tmp");
    std::fs::write(&tmp, content).unwrap();
    std::fs::rename(&tmp, path).unwrap();
}

/// Writing different content to the watched file must produce a `Changed`
/// event carrying the full new text.
#[test]
fn test_change_is_observed() {
    let dir = TempDir::new().unwrap();
    let path = watched_file(&dir, "# before");

    let mut watcher = FileWatcher::new(&path, POLL);
    let (tx, rx) = mpsc::channel();
    watcher.start(tx).unwrap();

    write_atomic(&path, "# after");

    let event = rx.recv_timeout(WAIT).expect("change should be observed");
    assert_eq!(event, WatchEvent::Changed("# after".to_string()));

    watcher.stop();
}

/// Consecutive edits are each observed, and the last event always carries the
/// most recent content ("the displayed HTML reflects the most recently
/// observed file content").
#[test]
fn test_successive_changes_arrive_in_order() {
    let dir = TempDir::new().unwrap();
    let path = watched_file(&dir, "v0");

    let mut watcher = FileWatcher::new(&path, POLL);
    let (tx, rx) = mpsc::channel();
    watcher.start(tx).unwrap();

    write_atomic(&path, "v1");
    let first = rx.recv_timeout(WAIT).unwrap();
    assert_eq!(first, WatchEvent::Changed("v1".to_string()));

    write_atomic(&path, "v2");
    let second = rx.recv_timeout(WAIT).unwrap();
    assert_eq!(second, WatchEvent::Changed("v2".to_string()));

    watcher.stop();
}

/// Rewriting the file with identical content must not produce an event:
/// detection is by content comparison, not by write activity.
#[test]
fn test_identical_rewrite_is_not_a_change() {
    let dir = TempDir::new().unwrap();
    let path = watched_file(&dir, "same");

    let mut watcher = FileWatcher::new(&path, POLL);
    let (tx, rx) = mpsc::channel();
    watcher.start(tx).unwrap();

    write_atomic(&path, "same");

    // Give the worker several poll cycles to (incorrectly) react.
    let result = rx.recv_timeout(Duration::from_millis(100));
    assert!(result.is_err(), "identical content must not notify: {:?}", result);

    watcher.stop();
}

/// Starting a watcher whose file does not exist is `FileNotFound`, reported
/// synchronously rather than from a dead worker thread.
#[test]
fn test_start_with_missing_file_fails() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("missing.md");

    let mut watcher = FileWatcher::new(&path, POLL);
    let (tx, _rx) = mpsc::channel();
    let result = watcher.start(tx);

    assert!(matches!(result, Err(WatchError::FileNotFound(_))));
    assert!(!watcher.is_running());
}

/// A second `start` while the worker is running is `AlreadyRunning`.
#[test]
fn test_double_start_fails() {
    let dir = TempDir::new().unwrap();
    let path = watched_file(&dir, "content");

    let mut watcher = FileWatcher::new(&path, POLL);
    let (tx, _rx) = mpsc::channel();
    watcher.start(tx).unwrap();
    assert!(watcher.is_running());

    let (tx2, _rx2) = mpsc::channel();
    assert!(matches!(watcher.start(tx2), Err(WatchError::AlreadyRunning)));

    watcher.stop();
}

/// `stop` joins the worker thread and is idempotent; the watcher can be
/// restarted afterwards.
#[test]
fn test_stop_joins_and_allows_restart() {
    let dir = TempDir::new().unwrap();
    let path = watched_file(&dir, "content");

    let mut watcher = FileWatcher::new(&path, POLL);
    let (tx, _rx) = mpsc::channel();
    watcher.start(tx).unwrap();

    watcher.stop();
    assert!(!watcher.is_running());
    watcher.stop(); // no-op

    let (tx2, rx2) = mpsc::channel();
    watcher.start(tx2).unwrap();
    assert!(watcher.is_running());

    write_atomic(&path, "changed after restart");
    let event = rx2.recv_timeout(WAIT).unwrap();
    assert_eq!(event, WatchEvent::Changed("changed after restart".to_string()));

    watcher.stop();
}

/// Deleting the file mid-watch reports an `Error` event but does not kill the
/// worker: recreating the file with new content is observed as a change.
#[test]
fn test_worker_survives_transient_missing_file() {
    let dir = TempDir::new().unwrap();
    let path = watched_file(&dir, "original");

    let mut watcher = FileWatcher::new(&path, POLL);
    let (tx, rx) = mpsc::channel();
    watcher.start(tx).unwrap();

    std::fs::remove_file(&path).unwrap();
    let event = rx.recv_timeout(WAIT).unwrap();
    assert!(matches!(event, WatchEvent::Error(_)), "expected Error, got {:?}", event);

    write_atomic(&path, "recreated");
    let event = rx.recv_timeout(WAIT).unwrap();
    assert_eq!(event, WatchEvent::Changed("recreated".to_string()));

    watcher.stop();
}

/// Accessors report the configuration the watcher was built with.
#[test]
fn test_accessors() {
    let dir = TempDir::new().unwrap();
    let path = watched_file(&dir, "x");

    let watcher = FileWatcher::new(&path, Duration::from_millis(250));
    assert_eq!(watcher.poll_interval(), Duration::from_millis(250));
    assert_eq!(watcher.path(), path.as_path());
    assert!(!watcher.is_running());
}
