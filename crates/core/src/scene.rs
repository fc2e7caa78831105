//! Scene records and the scene collection.
//!
//! [`SceneCollection`] is a persistent value: every operation returns a new
//! collection that shares structure with the old one. Operations on an id
//! that is not in the collection return an unchanged copy.

use im::Vector;
use serde::ser::{Serialize, Serializer};

use crate::types::{Character, Location, SceneId};

/// A user-assembled scene.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Scene {
    pub id: SceneId,
    /// Insertion order is preserved and duplicates are allowed.
    pub characters: Vec<Character>,
    pub location: Location,
    pub description: String,
}

/// Ordered collection of scenes with collection-assigned identifiers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SceneCollection {
    scenes: Vector<Scene>,
    /// Next sequential id. Only ever grows, so removed ids are never reissued.
    next_id: u64,
}

impl SceneCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.scenes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scenes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Scene> {
        self.scenes.iter()
    }

    pub fn get(&self, scene_id: &str) -> Option<&Scene> {
        self.scenes.iter().find(|scene| scene.id == scene_id)
    }

    pub fn to_vec(&self) -> Vec<Scene> {
        self.scenes.iter().cloned().collect()
    }

    /// Append an empty scene at `location` and return it with the new collection.
    pub fn create_scene(&self, location: Location) -> (Self, Scene) {
        let scene = Scene {
            id: self.next_id.to_string(),
            characters: Vec::new(),
            location,
            description: String::new(),
        };

        let mut scenes = self.scenes.clone();
        scenes.push_back(scene.clone());

        let next = Self {
            scenes,
            next_id: self.next_id + 1,
        };
        (next, scene)
    }

    pub fn remove_scene(&self, scene_id: &str) -> Self {
        let Some(index) = self.position(scene_id) else {
            return self.clone();
        };

        let mut scenes = self.scenes.clone();
        scenes.remove(index);
        Self {
            scenes,
            next_id: self.next_id,
        }
    }

    /// Append `character` to the scene. No uniqueness check.
    pub fn add_character(&self, scene_id: &str, character: Character) -> Self {
        self.update_scene(scene_id, |scene| {
            let mut characters = scene.characters.clone();
            characters.push(character);
            Scene {
                characters,
                ..scene.clone()
            }
        })
    }

    /// Remove the most recently added character with `character_id`.
    ///
    /// Removing the latest occurrence makes add followed by remove restore
    /// the previous sequence even when the character was already present.
    pub fn remove_character(&self, scene_id: &str, character_id: &str) -> Self {
        let Some(scene) = self.get(scene_id) else {
            return self.clone();
        };
        let Some(index) = scene.characters.iter().rposition(|c| c.id == character_id) else {
            return self.clone();
        };

        self.update_scene(scene_id, |scene| {
            let mut characters = scene.characters.clone();
            characters.remove(index);
            Scene {
                characters,
                ..scene.clone()
            }
        })
    }

    pub fn set_location(&self, scene_id: &str, location: Location) -> Self {
        self.update_scene(scene_id, |scene| Scene {
            location,
            ..scene.clone()
        })
    }

    /// Replace the description verbatim.
    pub fn set_description(&self, scene_id: &str, description: impl Into<String>) -> Self {
        let description = description.into();
        self.update_scene(scene_id, |scene| Scene {
            description,
            ..scene.clone()
        })
    }

    // ---- private helpers ----

    fn position(&self, scene_id: &str) -> Option<usize> {
        self.scenes.iter().position(|scene| scene.id == scene_id)
    }

    fn update_scene(&self, scene_id: &str, f: impl FnOnce(&Scene) -> Scene) -> Self {
        let Some(index) = self.position(scene_id) else {
            return self.clone();
        };

        let mut scenes = self.scenes.clone();
        let updated = f(&scenes[index]);
        scenes.set(index, updated);
        Self {
            scenes,
            next_id: self.next_id,
        }
    }
}

impl Serialize for SceneCollection {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.scenes.iter())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn earth() -> Location {
        Location::new("L1", "Earth")
    }

    fn rick() -> Character {
        Character::new("1", "Rick")
    }

    fn morty() -> Character {
        Character::new("2", "Morty")
    }

    #[test]
    fn create_scene_starts_empty_at_given_location() {
        let (scenes, scene) = SceneCollection::new().create_scene(earth());

        assert_eq!(scenes.len(), 1);
        assert_eq!(scene.location.id, "L1");
        assert!(scene.characters.is_empty());
        assert_eq!(scene.description, "");
        assert_eq!(scenes.get(&scene.id), Some(&scene));
    }

    #[test]
    fn create_scene_appends_to_the_end() {
        let (scenes, first) = SceneCollection::new().create_scene(earth());
        let (scenes, second) = scenes.create_scene(earth());

        let ids: Vec<_> = scenes.iter().map(|s| s.id.clone()).collect();
        assert_eq!(ids, vec![first.id, second.id]);
    }

    #[test]
    fn ids_are_not_reused_after_removal() {
        let (scenes, first) = SceneCollection::new().create_scene(earth());
        let (scenes, second) = scenes.create_scene(earth());
        let scenes = scenes.remove_scene(&first.id);
        let (scenes, third) = scenes.create_scene(earth());

        assert_ne!(third.id, first.id);
        assert_ne!(third.id, second.id);
        assert_eq!(scenes.len(), 2);
    }

    #[test]
    fn mutation_leaves_previous_snapshot_untouched() {
        let (before, scene) = SceneCollection::new().create_scene(earth());
        let after = before.set_description(&scene.id, "Garage");

        assert_eq!(before.get(&scene.id).unwrap().description, "");
        assert_eq!(after.get(&scene.id).unwrap().description, "Garage");
    }

    #[test]
    fn add_character_allows_duplicates_in_order() {
        let (scenes, scene) = SceneCollection::new().create_scene(earth());
        let scenes = scenes
            .add_character(&scene.id, rick())
            .add_character(&scene.id, morty())
            .add_character(&scene.id, rick());

        assert_eq!(
            scenes.get(&scene.id).unwrap().characters,
            vec![rick(), morty(), rick()]
        );
    }

    #[test]
    fn remove_character_drops_latest_occurrence() {
        let (scenes, scene) = SceneCollection::new().create_scene(earth());
        let scenes = scenes
            .add_character(&scene.id, rick())
            .add_character(&scene.id, morty())
            .add_character(&scene.id, rick())
            .remove_character(&scene.id, "1");

        assert_eq!(
            scenes.get(&scene.id).unwrap().characters,
            vec![rick(), morty()]
        );
    }

    #[test]
    fn remove_unknown_character_is_noop() {
        let (scenes, scene) = SceneCollection::new().create_scene(earth());
        let scenes = scenes.add_character(&scene.id, rick());

        assert_eq!(scenes.remove_character(&scene.id, "99"), scenes);
    }

    #[test]
    fn set_location_replaces_reference() {
        let (scenes, scene) = SceneCollection::new().create_scene(earth());
        let citadel = Location::new("L3", "Citadel of Ricks");
        let scenes = scenes.set_location(&scene.id, citadel.clone());

        assert_eq!(scenes.get(&scene.id).unwrap().location, citadel);
    }

    #[test]
    fn set_description_keeps_text_verbatim() {
        let (scenes, scene) = SceneCollection::new().create_scene(earth());
        let text = "  <b>Pickle</b> \n Rick  ";
        let scenes = scenes.set_description(&scene.id, text);

        assert_eq!(scenes.get(&scene.id).unwrap().description, text);
    }

    #[test]
    fn operations_on_missing_scene_are_noops() {
        let (scenes, _) = SceneCollection::new().create_scene(earth());

        assert_eq!(scenes.remove_scene("missing"), scenes);
        assert_eq!(scenes.add_character("missing", rick()), scenes);
        assert_eq!(scenes.remove_character("missing", "1"), scenes);
        assert_eq!(scenes.set_location("missing", earth()), scenes);
        assert_eq!(scenes.set_description("missing", "x"), scenes);
    }

    #[test]
    fn serializes_as_plain_list() {
        let (scenes, _) = SceneCollection::new().create_scene(earth());
        let json = serde_json::to_value(&scenes).unwrap();

        assert_eq!(
            json,
            serde_json::json!([{
                "id": "0",
                "characters": [],
                "location": {"id": "L1", "name": "Earth"},
                "description": ""
            }])
        );
    }
}
