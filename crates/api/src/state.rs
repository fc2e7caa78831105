use std::sync::Arc;

use crate::config::ServerConfig;
use crate::session::EditorSession;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// The in-memory editor (reference data + scenes).
    pub session: Arc<EditorSession>,
}
