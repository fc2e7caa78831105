//! Reference data provider trait and its GraphQL implementation.

use async_trait::async_trait;
use scene_editor_core::types::{Character, Location};

use crate::api::{GraphqlApi, GraphqlError};
use crate::queries::{
    into_characters, into_locations, CharactersData, LocationsData, CHARACTERS_QUERY,
    LOCATIONS_QUERY,
};

/// Source of the character and location catalogs.
///
/// Implementations return records that have already passed boundary
/// validation (non-blank, unique ids).
#[async_trait]
pub trait ReferenceDataProvider: Send + Sync {
    async fn characters(&self) -> Result<Vec<Character>, GraphqlError>;
    async fn locations(&self) -> Result<Vec<Location>, GraphqlError>;
}

#[async_trait]
impl ReferenceDataProvider for GraphqlApi {
    async fn characters(&self) -> Result<Vec<Character>, GraphqlError> {
        let data: CharactersData = self.query(CHARACTERS_QUERY).await?;
        let characters = into_characters(data)?;
        tracing::debug!(count = characters.len(), endpoint = %self.endpoint(), "Fetched characters");
        Ok(characters)
    }

    async fn locations(&self) -> Result<Vec<Location>, GraphqlError> {
        let data: LocationsData = self.query(LOCATIONS_QUERY).await?;
        let locations = into_locations(data)?;
        tracing::debug!(count = locations.len(), endpoint = %self.endpoint(), "Fetched locations");
        Ok(locations)
    }
}
