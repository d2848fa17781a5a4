//! JSON fixtures
//!
//! Loads inventory snapshots and recipe packs exported from the document
//! store, so an analysis can run against a saved bar state.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{InventoryItem, Recipe};

/// Fixture loading errors
#[derive(Debug, Error)]
pub enum FixtureError {
    #[error("Failed to read fixture {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse fixture {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to parse snapshot: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

/// Result type for fixture operations
pub type FixtureResult<T> = Result<T, FixtureError>;

/// One analysis input: what is on the shelf and what could be made
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BarSnapshot {
    #[serde(default)]
    pub inventory: Vec<InventoryItem>,
    #[serde(default)]
    pub recipes: Vec<Recipe>,
}

/// Sample snapshot shipped in the fixture directory
pub const SAMPLE_SNAPSHOT: &str = "sample_bar.json";

/// Get the fixture directory from environment or use default
pub fn fixture_dir() -> PathBuf {
    resolve_fixture_dir(std::env::var_os("BARCART_FIXTURE_DIR"))
}

fn resolve_fixture_dir(configured: Option<OsString>) -> PathBuf {
    configured
        .filter(|dir| !dir.is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("fixtures"))
}

fn load_json<T: DeserializeOwned>(path: &Path) -> FixtureResult<T> {
    let contents = std::fs::read_to_string(path).map_err(|source| FixtureError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&contents).map_err(|source| FixtureError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Parse a snapshot held in memory
pub fn parse_snapshot(json: &str) -> FixtureResult<BarSnapshot> {
    Ok(serde_json::from_str(json)?)
}

/// Load a snapshot file containing both inventory and recipes
pub fn load_snapshot<P: AsRef<Path>>(path: P) -> FixtureResult<BarSnapshot> {
    let path = path.as_ref();
    let snapshot: BarSnapshot = load_json(path)?;
    tracing::debug!(
        path = %path.display(),
        inventory = snapshot.inventory.len(),
        recipes = snapshot.recipes.len(),
        "Loaded bar snapshot"
    );
    Ok(snapshot)
}

/// Load the sample snapshot from the fixture directory
pub fn load_sample() -> FixtureResult<BarSnapshot> {
    load_snapshot(fixture_dir().join(SAMPLE_SNAPSHOT))
}

/// Load an inventory file (a JSON array of items)
pub fn load_inventory<P: AsRef<Path>>(path: P) -> FixtureResult<Vec<InventoryItem>> {
    let path = path.as_ref();
    let items: Vec<InventoryItem> = load_json(path)?;
    tracing::debug!(path = %path.display(), count = items.len(), "Loaded inventory");
    Ok(items)
}

/// Load a recipe pack (a JSON array of recipes)
pub fn load_recipes<P: AsRef<Path>>(path: P) -> FixtureResult<Vec<Recipe>> {
    let path = path.as_ref();
    let recipes: Vec<Recipe> = load_json(path)?;
    tracing::debug!(path = %path.display(), count = recipes.len(), "Loaded recipe pack");
    Ok(recipes)
}
