//! HTML form handlers for the editor page.
//!
//! Each form posts to one of these handlers, which applies the change and
//! redirects back to `/` (303 See Other) so a reload never re-submits.
//! A rejected action answers with an HTML error page carrying the same
//! status code the JSON API would use.

use axum::extract::{Path, State};
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::Form;
use scene_editor_core::error::CoreError;

use crate::error::AppError;
use crate::handlers::scene::{CharacterInput, DescriptionInput, LocationInput};
use crate::state::AppState;
use crate::view;

/// Error type for form handlers, rendered as HTML.
#[derive(Debug)]
pub struct PageError(AppError);

impl From<CoreError> for PageError {
    fn from(err: CoreError) -> Self {
        Self(AppError::Core(err))
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        let (status, code) = self.0.status_and_code();
        tracing::warn!(code, reason = %self.0.message(), "Form action rejected");
        (status, Html(view::render_action_error(self.0.message()))).into_response()
    }
}

pub type PageResult<T> = Result<T, PageError>;

/// GET /
pub async fn index(State(state): State<AppState>) -> Html<String> {
    let editor = state.session.snapshot().await;
    Html(view::render_page(&editor))
}

/// POST /scenes
pub async fn create_scene(State(state): State<AppState>) -> PageResult<Redirect> {
    let scene = state.session.apply_with(|e| e.create_scene()).await?;
    tracing::info!(scene_id = %scene.id, "Scene created");
    Ok(Redirect::to("/"))
}

/// POST /scenes/{id}/remove
pub async fn remove_scene(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> PageResult<Redirect> {
    state.session.apply(|e| e.remove_scene(&id)).await?;
    tracing::info!(scene_id = %id, "Scene removed");
    Ok(Redirect::to("/"))
}

/// POST /scenes/{id}/characters
pub async fn add_character(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Form(input): Form<CharacterInput>,
) -> PageResult<Redirect> {
    state
        .session
        .apply(|e| e.add_character(&id, &input.character_id))
        .await?;
    Ok(Redirect::to("/"))
}

/// POST /scenes/{id}/characters/remove
pub async fn remove_character(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Form(input): Form<CharacterInput>,
) -> PageResult<Redirect> {
    state
        .session
        .apply(|e| e.remove_character(&id, &input.character_id))
        .await?;
    Ok(Redirect::to("/"))
}

/// POST /scenes/{id}/location
pub async fn set_location(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Form(input): Form<LocationInput>,
) -> PageResult<Redirect> {
    state
        .session
        .apply(|e| e.set_location(&id, &input.location_id))
        .await?;
    Ok(Redirect::to("/"))
}

/// POST /scenes/{id}/description
pub async fn set_description(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Form(input): Form<DescriptionInput>,
) -> PageResult<Redirect> {
    state
        .session
        .apply(|e| e.set_description(&id, &input.description))
        .await?;
    Ok(Redirect::to("/"))
}
