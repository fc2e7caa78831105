//! Tests for the startup reference data fetch.

mod common;

use std::sync::Arc;

use assert_matches::assert_matches;
use async_trait::async_trait;
use axum::http::StatusCode;
use tokio::sync::Notify;

use scene_editor_api::loader::spawn_reference_fetch;
use scene_editor_api::session::EditorSession;
use scene_editor_core::reference::EditorStatus;
use scene_editor_core::types::{Character, Location};
use scene_editor_graphql::api::GraphqlError;
use scene_editor_graphql::provider::ReferenceDataProvider;

/// Serves fixed catalogs, or fails the location query.
struct StubProvider {
    fail_locations: bool,
}

#[async_trait]
impl ReferenceDataProvider for StubProvider {
    async fn characters(&self) -> Result<Vec<Character>, GraphqlError> {
        Ok(vec![Character::new("1", "Rick"), Character::new("2", "Morty")])
    }

    async fn locations(&self) -> Result<Vec<Location>, GraphqlError> {
        if self.fail_locations {
            return Err(GraphqlError::Query("locations offline".to_string()));
        }
        Ok(vec![Location::new("L1", "Earth")])
    }
}

/// Holds the character query until released.
struct GatedProvider {
    gate: Arc<Notify>,
}

#[async_trait]
impl ReferenceDataProvider for GatedProvider {
    async fn characters(&self) -> Result<Vec<Character>, GraphqlError> {
        self.gate.notified().await;
        Ok(vec![Character::new("1", "Rick")])
    }

    async fn locations(&self) -> Result<Vec<Location>, GraphqlError> {
        Ok(vec![Location::new("L1", "Earth")])
    }
}

/// Panics instead of answering the character query.
struct PanickingProvider;

#[async_trait]
impl ReferenceDataProvider for PanickingProvider {
    async fn characters(&self) -> Result<Vec<Character>, GraphqlError> {
        panic!("character decoder exploded");
    }

    async fn locations(&self) -> Result<Vec<Location>, GraphqlError> {
        Ok(vec![Location::new("L1", "Earth")])
    }
}

#[tokio::test]
async fn both_fetches_make_editor_ready() {
    let session = Arc::new(EditorSession::default());
    let provider = Arc::new(StubProvider {
        fail_locations: false,
    });

    spawn_reference_fetch(provider, Arc::clone(&session))
        .join()
        .await;

    let editor = session.snapshot().await;
    assert_eq!(editor.status(), EditorStatus::Ready);
    assert_eq!(editor.characters().len(), 2);
    assert_eq!(editor.locations(), &[Location::new("L1", "Earth")]);
}

#[tokio::test]
async fn failed_fetch_is_recorded() {
    let session = Arc::new(EditorSession::default());
    let provider = Arc::new(StubProvider {
        fail_locations: true,
    });

    spawn_reference_fetch(provider, Arc::clone(&session))
        .join()
        .await;

    let editor = session.snapshot().await;
    assert_matches!(
        editor.status(),
        EditorStatus::Failed { message } if message == "GraphQL error: locations offline"
    );
}

#[tokio::test]
async fn editor_stays_loading_until_both_complete() {
    let session = Arc::new(EditorSession::default());
    let gate = Arc::new(Notify::new());
    let provider = Arc::new(GatedProvider {
        gate: Arc::clone(&gate),
    });

    let fetch = spawn_reference_fetch(provider, Arc::clone(&session));

    // Wait for the location fetch to land while characters are still held.
    while session.snapshot().await.locations().is_empty() {
        tokio::task::yield_now().await;
    }
    assert_eq!(session.snapshot().await.status(), EditorStatus::Loading);

    gate.notify_one();
    fetch.join().await;
    assert_eq!(session.snapshot().await.status(), EditorStatus::Ready);
}

#[tokio::test]
async fn failed_fetch_shows_error_page() {
    let session = Arc::new(EditorSession::default());
    let provider = Arc::new(StubProvider {
        fail_locations: true,
    });
    spawn_reference_fetch(provider, Arc::clone(&session))
        .join()
        .await;

    let (app, _) = common::build_test_app((*session.snapshot().await).clone());
    let response = common::get(app, "/").await;

    assert_eq!(response.status(), StatusCode::OK);
    let html = common::body_text(response).await;
    assert!(html.contains("<p>Error: GraphQL error: locations offline</p>"));
}

#[tokio::test]
async fn panicking_provider_records_failure() {
    let session = Arc::new(EditorSession::default());

    spawn_reference_fetch(Arc::new(PanickingProvider), Arc::clone(&session))
        .join()
        .await;

    let editor = session.snapshot().await;
    assert_matches!(
        editor.status(),
        EditorStatus::Failed { message } if message.starts_with("characters fetch did not complete")
    );

    let (app, _) = common::build_test_app((*editor).clone());
    let html = common::body_text(common::get(app, "/").await).await;
    assert!(html.contains("<p>Error: characters fetch did not complete"));
    assert!(!html.contains("Loading..."));
}
