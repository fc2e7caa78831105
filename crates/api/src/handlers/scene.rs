//! JSON handlers for the `/scenes` resource.
//!
//! Every mutation returns the complete scene list after the change, except
//! `create` (the new scene) and `delete` (no body).

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use scene_editor_core::scene::Scene;
use serde::Deserialize;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// Body for attaching or detaching a character.
#[derive(Debug, Deserialize)]
pub struct CharacterInput {
    pub character_id: String,
}

/// Body for choosing a scene's location.
#[derive(Debug, Deserialize)]
pub struct LocationInput {
    pub location_id: String,
}

/// Body for replacing a scene's description.
#[derive(Debug, Deserialize)]
pub struct DescriptionInput {
    #[serde(default)]
    pub description: String,
}

type ScenesResponse = Json<DataResponse<Vec<Scene>>>;

fn scenes_response(scenes: Vec<Scene>) -> ScenesResponse {
    Json(DataResponse { data: scenes })
}

/// GET /api/v1/scenes
pub async fn list(State(state): State<AppState>) -> ScenesResponse {
    let editor = state.session.snapshot().await;
    scenes_response(editor.scenes().to_vec())
}

/// POST /api/v1/scenes
pub async fn create(
    State(state): State<AppState>,
) -> AppResult<(StatusCode, Json<DataResponse<Scene>>)> {
    let scene = state.session.apply_with(|e| e.create_scene()).await?;
    tracing::info!(scene_id = %scene.id, location_id = %scene.location.id, "Scene created");
    Ok((StatusCode::CREATED, Json(DataResponse { data: scene })))
}

/// DELETE /api/v1/scenes/{id}
///
/// Returns 204 whether or not the scene existed.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    state.session.apply(|e| e.remove_scene(&id)).await?;
    tracing::info!(scene_id = %id, "Scene removed");
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/scenes/{id}/characters
pub async fn add_character(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(input): Json<CharacterInput>,
) -> AppResult<ScenesResponse> {
    let editor = state
        .session
        .apply(|e| e.add_character(&id, &input.character_id))
        .await?;
    Ok(scenes_response(editor.scenes().to_vec()))
}

/// DELETE /api/v1/scenes/{id}/characters/{character_id}
pub async fn remove_character(
    State(state): State<AppState>,
    Path((id, character_id)): Path<(String, String)>,
) -> AppResult<ScenesResponse> {
    let editor = state
        .session
        .apply(|e| e.remove_character(&id, &character_id))
        .await?;
    Ok(scenes_response(editor.scenes().to_vec()))
}

/// POST /api/v1/scenes/{id}/characters/remove
///
/// Same as the DELETE form, with the character id in the body so ids that
/// are awkward in a path need no encoding.
pub async fn detach_character(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(input): Json<CharacterInput>,
) -> AppResult<ScenesResponse> {
    let editor = state
        .session
        .apply(|e| e.remove_character(&id, &input.character_id))
        .await?;
    Ok(scenes_response(editor.scenes().to_vec()))
}

/// PUT /api/v1/scenes/{id}/location
pub async fn set_location(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(input): Json<LocationInput>,
) -> AppResult<ScenesResponse> {
    let editor = state
        .session
        .apply(|e| e.set_location(&id, &input.location_id))
        .await?;
    Ok(scenes_response(editor.scenes().to_vec()))
}

/// PUT /api/v1/scenes/{id}/description
pub async fn set_description(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(input): Json<DescriptionInput>,
) -> AppResult<ScenesResponse> {
    let editor = state
        .session
        .apply(|e| e.set_description(&id, &input.description))
        .await?;
    Ok(scenes_response(editor.scenes().to_vec()))
}
