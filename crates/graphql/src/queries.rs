//! The two reference data queries and their response shapes.
//!
//! Every field in the remote schema is nullable, so the raw types are all
//! `Option`s. [`into_characters`] and [`into_locations`] map them into
//! validated core records; anything missing is an error rather than a
//! silently dropped row.

use serde::Deserialize;
use scene_editor_core::reference::{validate_characters, validate_locations};
use scene_editor_core::types::{Character, Location};

use crate::api::GraphqlError;

pub const CHARACTERS_QUERY: &str = r#"
  query Characters {
    characters {
      results {
        id
        name
      }
    }
  }
"#;

pub const LOCATIONS_QUERY: &str = r#"
  query Locations {
    locations {
      results {
        id
        name
      }
    }
  }
"#;

/// `data` member of the `Characters` query.
#[derive(Debug, Deserialize)]
pub struct CharactersData {
    pub characters: Option<Page>,
}

/// `data` member of the `Locations` query.
#[derive(Debug, Deserialize)]
pub struct LocationsData {
    pub locations: Option<Page>,
}

/// A paginated result wrapper. Only `results` is requested.
#[derive(Debug, Deserialize)]
pub struct Page {
    pub results: Option<Vec<Option<RawRecord>>>,
}

/// An `{ id name }` selection as returned on the wire.
#[derive(Debug, Deserialize)]
pub struct RawRecord {
    pub id: Option<String>,
    pub name: Option<String>,
}

pub fn into_characters(data: CharactersData) -> Result<Vec<Character>, GraphqlError> {
    let records = records(data.characters, "characters")?;
    let characters: Vec<Character> = records
        .into_iter()
        .map(|(id, name)| Character { id, name })
        .collect();
    validate_characters(&characters)?;
    Ok(characters)
}

pub fn into_locations(data: LocationsData) -> Result<Vec<Location>, GraphqlError> {
    let records = records(data.locations, "locations")?;
    let locations: Vec<Location> = records
        .into_iter()
        .map(|(id, name)| Location { id, name })
        .collect();
    validate_locations(&locations)?;
    Ok(locations)
}

fn records(page: Option<Page>, field: &'static str) -> Result<Vec<(String, String)>, GraphqlError> {
    let results = page
        .ok_or(GraphqlError::MissingField(field))?
        .results
        .ok_or(GraphqlError::MissingField("results"))?;

    results
        .into_iter()
        .map(|record| {
            let record = record.ok_or(GraphqlError::MissingField("result entry"))?;
            let id = record.id.ok_or(GraphqlError::MissingField("id"))?;
            let name = record.name.ok_or(GraphqlError::MissingField("name"))?;
            Ok((id, name))
        })
        .collect()
}
