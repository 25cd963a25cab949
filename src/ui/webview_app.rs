//! WebView-based preview window using `wry` + `tao`.
//!
//! Architecture:
//! - The rendered document is served via the `mdp://` custom protocol; every
//!   refresh navigates to `mdp://localhost/preview?rev=N` so the webview never
//!   caches a stale revision.
//! - The file watcher's channel is drained by a forwarder thread that renders
//!   off the UI thread and posts `UserEvent::Refresh` through the
//!   `EventLoopProxy`, which is how a cross-thread notification reaches the
//!   tao event loop.
//! - Window close stops the watcher (joining its worker) before exiting.

use std::path::Path;
use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread;

use tao::event::{Event, WindowEvent};
use tao::event_loop::{ControlFlow, EventLoop, EventLoopBuilder};
use tao::window::WindowBuilder;
use wry::WebViewBuilder;

use crate::app::App;
use crate::managers::file_watcher::{FileWatcher, FileWatcherTrait, WatchEvent};

#[derive(Debug)]
enum UserEvent {
    /// The document was re-rendered; reload the given revision.
    Refresh(u64),
}

/// Shared between the UI thread, the protocol handler, and the forwarder.
struct PreviewState {
    app: App,
    html: String,
}

pub fn run(path: &Path) {
    let mut app = App::new(path, None);
    app.startup();

    let window_cfg = {
        use crate::services::settings_engine::SettingsEngineTrait;
        app.settings_engine.get_settings().window.clone()
    };
    let poll_interval = app.poll_interval();

    let html = app
        .render_current()
        .expect("Failed to render the Markdown file");
    let state = Arc::new(Mutex::new(PreviewState { app, html }));

    let event_loop: EventLoop<UserEvent> = EventLoopBuilder::with_user_event().build();
    let proxy = event_loop.create_proxy();

    let window = WindowBuilder::new()
        .with_title(&window_cfg.title)
        .with_inner_size(tao::dpi::LogicalSize::new(
            window_cfg.width as f64,
            window_cfg.height as f64,
        ))
        .build(&event_loop)
        .expect("Failed to create window");

    // Background polling worker plus a forwarder that turns channel messages
    // into user events on the UI thread.
    let mut watcher = FileWatcher::new(path, poll_interval);
    let (tx, rx) = mpsc::channel::<WatchEvent>();
    watcher.start(tx).expect("Failed to start file watcher");

    let fwd_state = state.clone();
    thread::spawn(move || {
        for event in rx {
            match event {
                WatchEvent::Changed(text) => {
                    let revision = {
                        let mut s = fwd_state.lock().unwrap();
                        s.html = s.app.render_text(text);
                        s.app.document.revision()
                    };
                    if proxy.send_event(UserEvent::Refresh(revision)).is_err() {
                        // Event loop is gone; stop forwarding.
                        break;
                    }
                }
                WatchEvent::Error(msg) => {
                    log::warn!("watch error, keeping last render: {}", msg);
                }
            }
        }
    });

    let protocol_state = state.clone();
    let builder = WebViewBuilder::new()
        .with_custom_protocol("mdp".into(), move |_wv_id, _request| {
            let html = protocol_state.lock().unwrap().html.clone();
            wry::http::Response::builder()
                .header("Content-Type", "text/html; charset=utf-8")
                .body(html.into_bytes().into())
                .unwrap()
        })
        .with_url("mdp://localhost/preview?rev=0")
        .with_devtools(cfg!(debug_assertions));

    #[cfg(target_os = "linux")]
    let webview = {
        use tao::platform::unix::WindowExtUnix;
        use wry::WebViewBuilderExtUnix;
        let vbox = window.default_vbox().expect("Failed to get GTK vbox");
        builder.build_gtk(vbox).expect("Failed to create WebView")
    };

    #[cfg(not(target_os = "linux"))]
    let webview = builder.build(&window).expect("Failed to create WebView");

    event_loop.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::Wait;

        match event {
            Event::WindowEvent {
                event: WindowEvent::CloseRequested,
                ..
            } => {
                watcher.stop();
                state.lock().unwrap().app.shutdown();
                *control_flow = ControlFlow::Exit;
            }

            Event::UserEvent(UserEvent::Refresh(revision)) => {
                log::debug!("refreshing preview, revision {}", revision);
                let _ = webview.load_url(&format!("mdp://localhost/preview?rev={}", revision));
            }

            _ => {}
        }
    });
}
