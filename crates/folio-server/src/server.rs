//! Development server implementation.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        State,
    },
    response::{Html, IntoResponse},
    routing::get,
    Router,
};
use tokio::sync::RwLock;
use tower_http::services::ServeDir;

use folio_static::{BuildConfig, StaticBuilder};

use crate::livereload::{reload_client_script, ReloadHub, ReloadMessage};
use crate::watcher::{FileWatcher, WatchEvent};

/// Configuration for the development server.
#[derive(Debug, Clone)]
pub struct DevServerConfig {
    /// Build settings (skeleton, data document, assets)
    pub build: BuildConfig,

    /// Port to listen on
    pub port: u16,

    /// Host to bind to
    pub host: String,

    /// Open browser on start
    pub open: bool,
}

impl Default for DevServerConfig {
    fn default() -> Self {
        Self {
            build: BuildConfig::default(),
            port: 7777,
            host: "127.0.0.1".to_string(),
            open: true,
        }
    }
}

/// Errors that can occur with the server.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Failed to bind to {0}: {1}")]
    BindError(SocketAddr, String),

    #[error("File watch error: {0}")]
    WatchError(String),
}

/// Shared server state.
struct ServerState {
    builder: StaticBuilder,
    hub: ReloadHub,
}

/// Development server.
pub struct DevServer {
    config: DevServerConfig,
}

impl DevServer {
    pub fn new(config: DevServerConfig) -> Self {
        Self { config }
    }

    /// Start the development server.
    pub async fn start(self) -> Result<(), ServerError> {
        let addr: SocketAddr = format!("{}:{}", self.config.host, self.config.port)
            .parse()
            .expect("Invalid address");

        let build = self.config.build.clone();
        let state = Arc::new(RwLock::new(ServerState {
            builder: StaticBuilder::new(build.clone()),
            hub: ReloadHub::new(),
        }));

        // Watch the skeleton, the data document, and the asset directories.
        let mut watch_paths = Vec::new();
        if let Some(parent) = build.skeleton.parent() {
            watch_paths.push(parent.to_path_buf());
        }
        if let Some(parent) = build.data.parent() {
            watch_paths.push(parent.to_path_buf());
        }
        watch_paths.extend(build.assets.iter().cloned());

        let (watcher, mut rx) =
            FileWatcher::new(&watch_paths).map_err(|e| ServerError::WatchError(e.to_string()))?;

        let state_clone = Arc::clone(&state);
        tokio::spawn(async move {
            while let Some(event) = rx.recv().await {
                handle_watch_event(&state_clone, event).await;
            }
            // Keep watcher alive
            drop(watcher);
        });

        // Build router
        let mut app = Router::new()
            .route("/", get(page_handler))
            .route("/assets/folio.css", get(stylesheet_handler))
            .route("/assets/effects.js", get(effects_handler))
            .route("/__reload", get(ws_handler))
            .route("/__reload.js", get(reload_script_handler));

        for dir in &build.assets {
            if let Some(name) = dir.file_name().and_then(|n| n.to_str()) {
                app = app.nest_service(&format!("/{}", name), ServeDir::new(dir));
            }
        }

        let app = app.with_state(state);

        tracing::info!("Starting dev server at http://{}", addr);

        if self.config.open {
            let url = format!("http://{}", addr);
            let _ = open::that(&url);
        }

        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .map_err(|e| ServerError::BindError(addr, e.to_string()))?;

        axum::serve(listener, app)
            .await
            .map_err(|e| ServerError::BindError(addr, e.to_string()))?;

        Ok(())
    }
}

/// Handle file watch events by reloading connected browsers.
async fn handle_watch_event(state: &Arc<RwLock<ServerState>>, event: WatchEvent) {
    let state = state.read().await;

    match event {
        WatchEvent::DataModified(path) => {
            tracing::info!("Data document modified: {}", path.display());
            state.hub.send(ReloadMessage::Reload);
        }

        WatchEvent::SkeletonModified(path) => {
            tracing::info!("Skeleton modified: {}", path.display());
            state.hub.send(ReloadMessage::Reload);
        }

        WatchEvent::Created(_) | WatchEvent::Deleted(_) | WatchEvent::Modified(_) => {
            state.hub.send(ReloadMessage::Reload);
        }
    }
}

/// Render the page from the current skeleton and data document.
async fn page_handler(State(state): State<Arc<RwLock<ServerState>>>) -> impl IntoResponse {
    let state = state.read().await;

    let skeleton = match std::fs::read_to_string(&state.builder.config().skeleton) {
        Ok(s) => s,
        Err(e) => {
            return Html(format!(
                "<p>Error reading skeleton {}: {}. Run 'folio init' to scaffold one.</p>",
                state.builder.config().skeleton.display(),
                e
            ))
        }
    };

    let (data, used_fallback) = state.builder.load_data();

    let page = match state.builder.render_page(&skeleton, &data, used_fallback) {
        Ok((page, _)) => page,
        Err(e) => format!("<p>Render error: {}</p>", e),
    };

    Html(inject_reload_script(&page))
}

async fn stylesheet_handler(State(state): State<Arc<RwLock<ServerState>>>) -> impl IntoResponse {
    let state = state.read().await;
    ([("content-type", "text/css")], state.builder.stylesheet())
}

async fn effects_handler(State(state): State<Arc<RwLock<ServerState>>>) -> impl IntoResponse {
    let state = state.read().await;
    let (data, _) = state.builder.load_data();
    (
        [("content-type", "application/javascript")],
        state.builder.effects(&data),
    )
}

/// Handler for the live reload WebSocket endpoint.
async fn ws_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<RwLock<ServerState>>>,
) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_ws(socket, state))
}

/// Handle a WebSocket connection.
async fn handle_ws(mut socket: WebSocket, state: Arc<RwLock<ServerState>>) {
    let mut rx = {
        let state = state.read().await;
        state.hub.subscribe()
    };

    let msg = serde_json::to_string(&ReloadMessage::Connected).unwrap();
    if socket.send(Message::Text(msg.into())).await.is_err() {
        return;
    }

    while let Ok(reload_msg) = rx.recv().await {
        let json = serde_json::to_string(&reload_msg).unwrap();
        if socket.send(Message::Text(json.into())).await.is_err() {
            break;
        }
    }
}

/// Handler for the reload client script.
async fn reload_script_handler() -> impl IntoResponse {
    (
        [("content-type", "application/javascript")],
        reload_client_script("/__reload"),
    )
}

/// Inject the reload client into a rendered page.
fn inject_reload_script(page: &str) -> String {
    const TAG: &str = "<script src=\"/__reload.js\"></script>";

    match page.rfind("</body>") {
        Some(pos) => {
            let mut out = String::with_capacity(page.len() + TAG.len() + 1);
            out.push_str(&page[..pos]);
            out.push_str(TAG);
            out.push('\n');
            out.push_str(&page[pos..]);
            out
        }
        None => format!("{}{}\n", page, TAG),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creates_server_with_default_config() {
        let server = DevServer::new(DevServerConfig::default());
        assert_eq!(server.config.port, 7777);
    }

    #[test]
    fn injects_reload_script_before_body_close() {
        let page = "<html><body><p>hi</p></body></html>";

        let out = inject_reload_script(page);

        assert!(out.contains("__reload.js"));
        assert!(out.find("__reload.js").unwrap() < out.find("</body>").unwrap());
    }

    #[test]
    fn appends_reload_script_without_body() {
        let out = inject_reload_script("<p>fragment</p>");
        assert!(out.contains("__reload.js"));
    }
}
