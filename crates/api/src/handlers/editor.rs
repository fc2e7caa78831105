//! Handler for the combined editor view.

use axum::extract::State;
use axum::Json;
use scene_editor_core::reference::EditorStatus;
use scene_editor_core::scene::Scene;
use scene_editor_core::types::{Character, Location};
use serde::Serialize;

use crate::response::DataResponse;
use crate::state::AppState;

/// Everything the editor page shows, as JSON.
///
/// Catalogs are empty unless the status is `ready`.
#[derive(Debug, Serialize)]
pub struct EditorView {
    #[serde(flatten)]
    pub status: EditorStatus,
    pub characters: Vec<Character>,
    pub locations: Vec<Location>,
    pub scenes: Vec<Scene>,
}

/// GET /api/v1/editor
pub async fn get_editor(State(state): State<AppState>) -> Json<DataResponse<EditorView>> {
    let editor = state.session.snapshot().await;
    let status = editor.status();
    let ready = status == EditorStatus::Ready;

    let view = EditorView {
        characters: if ready { editor.characters().to_vec() } else { Vec::new() },
        locations: if ready { editor.locations().to_vec() } else { Vec::new() },
        scenes: editor.scenes().to_vec(),
        status,
    };
    Json(DataResponse { data: view })
}
