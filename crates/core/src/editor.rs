//! The editor aggregate: reference data fetch states plus the scene collection.
//!
//! An [`Editor`] is an immutable value. Mutations return a new editor, which
//! the session layer swaps in as a whole. Operations that need reference data
//! fail with [`CoreError::NotReady`] until both fetches have loaded; an
//! absent scene id is always a silent no-op.

use crate::error::CoreError;
use crate::reference::{resolve_status, CharacterCatalog, EditorStatus, FetchState, LocationCatalog};
use crate::scene::{Scene, SceneCollection};
use crate::types::{Character, Location};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Editor {
    characters: FetchState<CharacterCatalog>,
    locations: FetchState<LocationCatalog>,
    scenes: SceneCollection,
}

impl Default for Editor {
    fn default() -> Self {
        Self::new()
    }
}

impl Editor {
    /// A fresh editor with both fetches in flight and no scenes.
    pub fn new() -> Self {
        Self {
            characters: FetchState::Loading,
            locations: FetchState::Loading,
            scenes: SceneCollection::new(),
        }
    }

    /// An editor whose reference data is already available.
    pub fn loaded(characters: Vec<Character>, locations: Vec<Location>) -> Self {
        Self::new()
            .with_characters(FetchState::Loaded(characters.into()))
            .with_locations(FetchState::Loaded(locations.into()))
    }

    pub fn with_characters(&self, characters: FetchState<CharacterCatalog>) -> Self {
        Self {
            characters,
            ..self.clone()
        }
    }

    pub fn with_locations(&self, locations: FetchState<LocationCatalog>) -> Self {
        Self {
            locations,
            ..self.clone()
        }
    }

    pub fn status(&self) -> EditorStatus {
        resolve_status(&self.characters, &self.locations)
    }

    pub fn scenes(&self) -> &SceneCollection {
        &self.scenes
    }

    /// Loaded characters, or an empty slice while not loaded.
    pub fn characters(&self) -> &[Character] {
        self.characters.loaded().map(|c| &c[..]).unwrap_or_default()
    }

    /// Loaded locations, or an empty slice while not loaded.
    pub fn locations(&self) -> &[Location] {
        self.locations.loaded().map(|l| &l[..]).unwrap_or_default()
    }

    /// Create an empty scene at the first available location.
    pub fn create_scene(&self) -> Result<(Self, Scene), CoreError> {
        self.ensure_ready()?;
        let location = self.locations().first().cloned().ok_or_else(|| {
            CoreError::NotReady("no locations available to create a scene".to_string())
        })?;

        let (scenes, scene) = self.scenes.create_scene(location);
        Ok((self.with_scenes(scenes), scene))
    }

    pub fn remove_scene(&self, scene_id: &str) -> Result<Self, CoreError> {
        self.ensure_ready()?;
        Ok(self.with_scenes(self.scenes.remove_scene(scene_id)))
    }

    /// Attach a character from the loaded catalog to a scene.
    pub fn add_character(&self, scene_id: &str, character_id: &str) -> Result<Self, CoreError> {
        self.ensure_ready()?;
        let character = self
            .characters()
            .iter()
            .find(|c| c.id == character_id)
            .cloned()
            .ok_or_else(|| {
                CoreError::Validation(format!("unknown character id '{character_id}'"))
            })?;

        Ok(self.with_scenes(self.scenes.add_character(scene_id, character)))
    }

    pub fn remove_character(&self, scene_id: &str, character_id: &str) -> Result<Self, CoreError> {
        self.ensure_ready()?;
        Ok(self.with_scenes(self.scenes.remove_character(scene_id, character_id)))
    }

    /// Point a scene at a location from the loaded catalog.
    pub fn set_location(&self, scene_id: &str, location_id: &str) -> Result<Self, CoreError> {
        self.ensure_ready()?;
        let location = self
            .locations()
            .iter()
            .find(|l| l.id == location_id)
            .cloned()
            .ok_or_else(|| CoreError::Validation(format!("unknown location id '{location_id}'")))?;

        Ok(self.with_scenes(self.scenes.set_location(scene_id, location)))
    }

    pub fn set_description(&self, scene_id: &str, description: &str) -> Result<Self, CoreError> {
        self.ensure_ready()?;
        Ok(self.with_scenes(self.scenes.set_description(scene_id, description)))
    }

    // ---- private helpers ----

    fn with_scenes(&self, scenes: SceneCollection) -> Self {
        Self {
            scenes,
            ..self.clone()
        }
    }

    fn ensure_ready(&self) -> Result<(), CoreError> {
        match self.status() {
            EditorStatus::Ready => Ok(()),
            EditorStatus::Loading => Err(CoreError::NotReady(
                "reference data is still loading".to_string(),
            )),
            EditorStatus::Failed { message } => Err(CoreError::NotReady(format!(
                "reference data failed to load: {message}"
            ))),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
