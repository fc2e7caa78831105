//! Reference data fetch states and boundary validation.
//!
//! Characters and locations are fetched independently. Each fetch is
//! tracked as a [`FetchState`]; the editor combines both into a single
//! [`EditorStatus`].

use std::collections::HashSet;
use std::sync::Arc;

use serde::Serialize;

use crate::error::CoreError;
use crate::types::{Character, Location};

/// Outcome of a single fire-once fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchState<T> {
    Loading,
    Failed(String),
    Loaded(T),
}

impl<T> FetchState<T> {
    /// Map a fetch result, keeping only the human-readable error message.
    pub fn from_result<E: std::fmt::Display>(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Loaded(value),
            Err(e) => Self::Failed(e.to_string()),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn loaded(&self) -> Option<&T> {
        match self {
            Self::Loaded(value) => Some(value),
            _ => None,
        }
    }
}

/// Combined status of both fetches, as shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum EditorStatus {
    Loading,
    Failed { message: String },
    Ready,
}

impl EditorStatus {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Loading => "loading",
            Self::Failed { .. } => "failed",
            Self::Ready => "ready",
        }
    }
}

pub type CharacterCatalog = Arc<[Character]>;
pub type LocationCatalog = Arc<[Location]>;

/// Resolve the editor status from the two fetch states.
///
/// Loading wins over failure, and a character failure is reported before a
/// location failure.
pub fn resolve_status(
    characters: &FetchState<CharacterCatalog>,
    locations: &FetchState<LocationCatalog>,
) -> EditorStatus {
    if characters.is_loading() || locations.is_loading() {
        return EditorStatus::Loading;
    }
    if let FetchState::Failed(message) = characters {
        return EditorStatus::Failed {
            message: message.clone(),
        };
    }
    if let FetchState::Failed(message) = locations {
        return EditorStatus::Failed {
            message: message.clone(),
        };
    }
    EditorStatus::Ready
}

// ---------------------------------------------------------------------------
// Validation functions
// ---------------------------------------------------------------------------

/// Validate fetched characters: non-blank ids, unique within the set.
pub fn validate_characters(characters: &[Character]) -> Result<(), CoreError> {
    validate_ids("character", characters.iter().map(|c| c.id.as_str()))
}

/// Validate fetched locations: non-blank ids, unique within the set.
pub fn validate_locations(locations: &[Location]) -> Result<(), CoreError> {
    validate_ids("location", locations.iter().map(|l| l.id.as_str()))
}

fn validate_ids<'a>(kind: &str, ids: impl Iterator<Item = &'a str>) -> Result<(), CoreError> {
    let mut seen = HashSet::new();
    for (index, id) in ids.enumerate() {
        if id.trim().is_empty() {
            return Err(CoreError::Validation(format!(
                "{kind} at position {index} has an empty id"
            )));
        }
        if !seen.insert(id) {
            return Err(CoreError::Validation(format!(
                "duplicate {kind} id '{id}'"
            )));
        }
    }
    Ok(())
}
