pub mod health;
pub mod page;
pub mod scene;

use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /editor                                          status, catalogs, scenes (GET)
///
/// /scenes                                          list, create
/// /scenes/{id}                                     delete
/// /scenes/{id}/characters                          attach character (POST)
/// /scenes/{id}/characters/{character_id}           detach character (DELETE)
/// /scenes/{id}/characters/remove                   detach character, id in body (POST)
/// /scenes/{id}/location                            set location (PUT)
/// /scenes/{id}/description                         set description (PUT)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/editor", get(handlers::editor::get_editor))
        .nest("/scenes", scene::router())
}
