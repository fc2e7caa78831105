//! HTML page and form routes, mounted at the root.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::page;
use crate::state::AppState;

/// ```text
/// GET  /                                     index
/// POST /scenes                               create_scene
/// POST /scenes/{id}/remove                   remove_scene
/// POST /scenes/{id}/characters               add_character
/// POST /scenes/{id}/characters/remove        remove_character
/// POST /scenes/{id}/location                 set_location
/// POST /scenes/{id}/description              set_description
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(page::index))
        .route("/scenes", post(page::create_scene))
        .route("/scenes/{id}/remove", post(page::remove_scene))
        .route("/scenes/{id}/characters", post(page::add_character))
        .route("/scenes/{id}/characters/remove", post(page::remove_character))
        .route("/scenes/{id}/location", post(page::set_location))
        .route("/scenes/{id}/description", post(page::set_description))
}
