// mdpreview UI layer (wry + tao), only built with the `gui` feature.

pub mod webview_app;
