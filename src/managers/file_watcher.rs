//! File Watcher for mdpreview.
//!
//! Runs one background worker thread that polls the watched file, compares
//! its content against the last-seen text, and sends a `WatchEvent::Changed`
//! notification over an mpsc channel whenever the content differs. Change
//! detection is by content comparison, not mtime, so touch-without-change
//! never triggers a refresh.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::Sender;
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use crate::types::errors::WatchError;

/// Notification sent from the worker thread to the consumer.
#[derive(Debug, Clone, PartialEq)]
pub enum WatchEvent {
    /// The file content changed; carries the full new text.
    Changed(String),
    /// A poll failed to read the file. The worker keeps polling.
    Error(String),
}

/// Trait defining the file watcher interface.
pub trait FileWatcherTrait {
    fn start(&mut self, tx: Sender<WatchEvent>) -> Result<(), WatchError>;
    fn stop(&mut self);
    fn is_running(&self) -> bool;
    fn poll_interval(&self) -> Duration;
    fn path(&self) -> &Path;
}

/// Polling file watcher with a single worker thread.
pub struct FileWatcher {
    path: PathBuf,
    poll_interval: Duration,
    stop_flag: Arc<AtomicBool>,
    worker: Option<JoinHandle<()>>,
}

impl FileWatcher {
    pub fn new(path: impl Into<PathBuf>, poll_interval: Duration) -> Self {
        Self {
            path: path.into(),
            poll_interval,
            stop_flag: Arc::new(AtomicBool::new(false)),
            worker: None,
        }
    }

    fn map_read_error(path: &Path, err: io::Error) -> WatchError {
        if err.kind() == io::ErrorKind::NotFound {
            WatchError::FileNotFound(path.display().to_string())
        } else {
            WatchError::ReadFailed(format!("{}: {}", path.display(), err))
        }
    }

    /// Worker loop: sleep, re-read, compare, notify. Exits when the stop flag
    /// is set or the receiver is dropped.
    fn poll_loop(
        path: PathBuf,
        interval: Duration,
        stop_flag: Arc<AtomicBool>,
        tx: Sender<WatchEvent>,
        mut last_seen: String,
    ) {
        // Tracks whether the previous poll failed, so a file that stays
        // unreadable for many intervals reports once, not once per poll.
        let mut in_error = false;

        while !stop_flag.load(Ordering::Relaxed) {
            thread::sleep(interval);
            if stop_flag.load(Ordering::Relaxed) {
                break;
            }

            match fs::read_to_string(&path) {
                Ok(text) => {
                    in_error = false;
                    if text != last_seen {
                        log::debug!("change detected in {}", path.display());
                        last_seen.clone_from(&text);
                        if tx.send(WatchEvent::Changed(text)).is_err() {
                            // Receiver gone; nothing left to notify.
                            break;
                        }
                    }
                }
                Err(e) => {
                    // Editors that save via rename briefly expose a missing
                    // file; keep polling and keep the last-seen text.
                    if !in_error {
                        in_error = true;
                        log::warn!("poll failed for {}: {}", path.display(), e);
                        if tx.send(WatchEvent::Error(e.to_string())).is_err() {
                            break;
                        }
                    }
                }
            }
        }
        log::debug!("watcher stopped for {}", path.display());
    }
}

impl FileWatcherTrait for FileWatcher {
    /// Starts the worker thread.
    ///
    /// Reads the file once up front so the baseline for comparison is the
    /// content visible at start; a file that cannot be read at start is an
    /// error rather than a silent dead watcher.
    fn start(&mut self, tx: Sender<WatchEvent>) -> Result<(), WatchError> {
        if self.worker.is_some() {
            return Err(WatchError::AlreadyRunning);
        }

        let initial =
            fs::read_to_string(&self.path).map_err(|e| Self::map_read_error(&self.path, e))?;

        self.stop_flag.store(false, Ordering::Relaxed);

        let path = self.path.clone();
        let interval = self.poll_interval;
        let stop_flag = self.stop_flag.clone();
        log::info!(
            "watching {} every {}ms",
            path.display(),
            interval.as_millis()
        );

        self.worker = Some(thread::spawn(move || {
            Self::poll_loop(path, interval, stop_flag, tx, initial);
        }));

        Ok(())
    }

    /// Stops the worker and joins it. The join is bounded by one poll
    /// interval. Idempotent: stopping a stopped watcher is a no-op.
    fn stop(&mut self) {
        self.stop_flag.store(true, Ordering::Relaxed);
        if let Some(handle) = self.worker.take() {
            if handle.join().is_err() {
                log::error!("watcher worker panicked for {}", self.path.display());
            }
        }
    }

    fn is_running(&self) -> bool {
        self.worker.is_some()
    }

    fn poll_interval(&self) -> Duration {
        self.poll_interval
    }

    fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for FileWatcher {
    fn drop(&mut self) {
        self.stop();
    }
}
