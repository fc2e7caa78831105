//! JSON routes for the scene collection, mounted at `/api/v1/scenes`.

use axum::routing::{delete, get, post, put};
use axum::Router;

use crate::handlers::scene;
use crate::state::AppState;

/// Routes mounted at `/scenes`.
///
/// ```text
/// GET    /                                   list
/// POST   /                                   create
/// DELETE /{id}                               delete
/// POST   /{id}/characters                    add_character
/// DELETE /{id}/characters/{character_id}     remove_character (id percent-encoded)
/// POST   /{id}/characters/remove             detach_character (id in body)
/// PUT    /{id}/location                      set_location
/// PUT    /{id}/description                   set_description
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(scene::list).post(scene::create))
        .route("/{id}", delete(scene::delete))
        .route("/{id}/characters", post(scene::add_character))
        .route("/{id}/characters/remove", post(scene::detach_character))
        .route(
            "/{id}/characters/{character_id}",
            delete(scene::remove_character),
        )
        .route("/{id}/location", put(scene::set_location))
        .route("/{id}/description", put(scene::set_description))
}
