//! Fire-once reference data loading.
//!
//! Characters and locations are fetched by two independent tasks. Each
//! records its own [`FetchState`] in the session as soon as it completes,
//! so the two may finish in either order. There is no retry.

use std::sync::Arc;

use scene_editor_core::reference::{CharacterCatalog, FetchState, LocationCatalog};
use scene_editor_graphql::api::GraphqlError;
use scene_editor_graphql::provider::ReferenceDataProvider;
use tokio::task::JoinHandle;

use crate::session::EditorSession;

/// Handles for the two in-flight fetches.
pub struct ReferenceFetch {
    pub characters: JoinHandle<()>,
    pub locations: JoinHandle<()>,
}

impl ReferenceFetch {
    /// Wait for both fetches to record their outcome.
    pub async fn join(self) {
        let (characters, locations) = tokio::join!(self.characters, self.locations);
        if let Err(e) = characters {
            tracing::error!(error = %e, "Character fetch task failed");
        }
        if let Err(e) = locations {
            tracing::error!(error = %e, "Location fetch task failed");
        }
    }

    pub fn abort(&self) {
        self.characters.abort();
        self.locations.abort();
    }
}

/// Spawn both reference data fetches against `provider`.
///
/// Each provider call runs in its own inner task, so a panicking provider
/// still records a `Failed` state instead of leaving the editor loading.
pub fn spawn_reference_fetch(
    provider: Arc<dyn ReferenceDataProvider>,
    session: Arc<EditorSession>,
) -> ReferenceFetch {
    let characters = {
        let provider = Arc::clone(&provider);
        let session = Arc::clone(&session);
        tokio::spawn(async move {
            let call = tokio::spawn(async move { provider.characters().await });
            let state: FetchState<CharacterCatalog> = settle("characters", call).await;
            session.record(|editor| editor.with_characters(state)).await;
        })
    };

    let locations = tokio::spawn(async move {
        let call = tokio::spawn(async move { provider.locations().await });
        let state: FetchState<LocationCatalog> = settle("locations", call).await;
        session.record(|editor| editor.with_locations(state)).await;
    });

    ReferenceFetch {
        characters,
        locations,
    }
}

/// Wait for one provider call and turn its outcome into a fetch state.
async fn settle<T>(
    kind: &'static str,
    call: JoinHandle<Result<Vec<T>, GraphqlError>>,
) -> FetchState<Arc<[T]>> {
    match call.await {
        Ok(Ok(records)) => {
            tracing::info!(kind, count = records.len(), "Reference data loaded");
            FetchState::Loaded(Arc::from(records))
        }
        Ok(Err(e)) => {
            tracing::error!(kind, error = %e, "Failed to load reference data");
            FetchState::Failed(e.to_string())
        }
        Err(e) => {
            tracing::error!(kind, error = %e, "Reference data task did not complete");
            FetchState::Failed(format!("{kind} fetch did not complete: {e}"))
        }
    }
}
