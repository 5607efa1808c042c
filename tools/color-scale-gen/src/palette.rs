//! Palette dataset loading
//!
//! The dataset is the palette library's exports dumped to JSON: palette
//! export name → (step key → color entry). Both levels keep document order.

use anyhow::{Context, Result};
use indexmap::IndexMap;
use serde::Deserialize;
use std::path::Path;

/// Ordered step key → raw color entry (e.g. `"gray1" => "#fcfcfc"`).
pub type Scale = IndexMap<String, String>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PaletteError {
    /// A scale referenced by the group table is missing from the dataset
    #[error("scale '{key}' not found in palette dataset")]
    MissingScale { key: String },
}

/// A loaded palette dataset.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct Palette {
    scales: IndexMap<String, Scale>,
}

impl Palette {
    /// Parse a dataset from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to parse palette dataset JSON")
    }

    /// Read and parse a dataset file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read palette dataset {}", path.display()))?;
        Self::from_json_str(&content)
            .with_context(|| format!("Invalid palette dataset {}", path.display()))
    }

    /// Look up one scale by its export name (`grayDarkA`, `blackA`, ...).
    pub fn scale(&self, key: &str) -> Result<&Scale, PaletteError> {
        self.scales.get(key).ok_or_else(|| PaletteError::MissingScale {
            key: key.to_string(),
        })
    }

    /// Export names in document order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.scales.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.scales.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scales.is_empty()
    }
}
