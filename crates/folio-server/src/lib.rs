//! Development server with live reload for folio portfolios.
//!
//! Renders the page on every request from the current data document and
//! skeleton, and reloads connected browsers when either changes.

pub mod livereload;
pub mod server;
pub mod watcher;

pub use livereload::{reload_client_script, ReloadHub, ReloadMessage};
pub use server::{DevServer, DevServerConfig, ServerError};
pub use watcher::{FileWatcher, WatchEvent};
