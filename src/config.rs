// ⚙️ Catalog Config - source paths and load policy
//
// Everything is optional; a missing `catalog.json` means the defaults below.

use crate::error::{CatalogError, CatalogResult};
use crate::item::ItemKind;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Config file looked up in the working directory.
pub const CONFIG_FILE: &str = "catalog.json";

// ============================================================================
// CATALOG CONFIG
// ============================================================================

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Paths of the three sources.
    #[serde(default)]
    pub sources: SourcePaths,

    /// Abort on the first malformed line instead of skipping it.
    #[serde(default = "default_strict")]
    pub strict: bool,

    /// What to do when a source cannot be opened.
    #[serde(default)]
    pub on_missing_source: SourcePolicy,

    /// Format used when printing the catalog.
    #[serde(default)]
    pub output: OutputFormat,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            sources: SourcePaths::default(),
            strict: default_strict(),
            on_missing_source: SourcePolicy::default(),
            output: OutputFormat::default(),
        }
    }
}

fn default_strict() -> bool {
    true
}

impl CatalogConfig {
    /// Load config from a JSON file.
    pub fn load(path: &Path) -> CatalogResult<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| CatalogError::config(path, format!("cannot read: {}", e)))?;

        serde_json::from_str(&content)
            .map_err(|e| CatalogError::config(path, format!("cannot parse: {}", e)))
    }

    /// Load `path` if it exists, otherwise fall back to the defaults.
    pub fn load_or_default(path: &Path) -> CatalogResult<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }
}

// ============================================================================
// SOURCE PATHS
// ============================================================================

/// One path per item kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourcePaths {
    #[serde(default = "default_food_path")]
    pub food: PathBuf,

    #[serde(default = "default_electronic_path")]
    pub electronic: PathBuf,

    #[serde(default = "default_service_path")]
    pub service: PathBuf,
}

impl Default for SourcePaths {
    fn default() -> Self {
        Self {
            food: default_food_path(),
            electronic: default_electronic_path(),
            service: default_service_path(),
        }
    }
}

impl SourcePaths {
    pub fn for_kind(&self, kind: ItemKind) -> &Path {
        match kind {
            ItemKind::Food => &self.food,
            ItemKind::Electronic => &self.electronic,
            ItemKind::Service => &self.service,
        }
    }
}

fn default_food_path() -> PathBuf {
    PathBuf::from("./data/FoodItemCSV.txt")
}

fn default_electronic_path() -> PathBuf {
    PathBuf::from("./data/ElectronicItemCSV.txt")
}

fn default_service_path() -> PathBuf {
    PathBuf::from("./data/ServiceItemCSV.txt")
}

// ============================================================================
// POLICIES
// ============================================================================

/// Handling of a source that cannot be opened.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourcePolicy {
    /// Log a warning and continue with zero items from that source.
    #[default]
    Skip,
    /// Fail the whole load.
    Abort,
}

/// Rendering format for the catalog listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Csv,
}

// ============================================================================
// TESTS
// ============================================================================
