//! Color scale generator library
//!
//! Reads a palette dataset (light/dark scales plus alpha variants), normalizes
//! every entry to `#rrggbbaa` and renders one declaration per scale group.

pub mod color;
pub mod emitter;
pub mod generators;
pub mod model;
pub mod palette;

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use generators::rust::DeclarationGenerator;
use model::{ScaleGroup, SCALE_GROUPS};
use palette::Palette;

/// Inputs for one generator run.
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// JSON palette dataset
    pub dataset: PathBuf,
    /// Replacement handlebars template; the built-in Rust template otherwise
    pub template: Option<PathBuf>,
}

impl GenerateOptions {
    pub fn new(dataset: impl Into<PathBuf>) -> Self {
        Self {
            dataset: dataset.into(),
            template: None,
        }
    }

    pub fn with_template(mut self, template: impl Into<PathBuf>) -> Self {
        self.template = Some(template.into());
        self
    }
}

/// Load the dataset and render every group of [`SCALE_GROUPS`].
pub fn generate(options: &GenerateOptions) -> Result<String> {
    let palette = Palette::load(&options.dataset)?;
    if palette.is_empty() {
        warn!("Palette dataset {} is empty", options.dataset.display());
    } else {
        info!(
            "Loaded {} palette scales from {}",
            palette.len(),
            options.dataset.display()
        );
    }
    let generator = load_generator(options.template.as_deref())?;
    generate_from_palette(&palette, SCALE_GROUPS, &generator)
}

/// Render `groups` from an already loaded palette.
///
/// Everything is rendered in memory first, so a bad entry anywhere means no
/// output at all.
pub fn generate_from_palette(
    palette: &Palette,
    groups: &[ScaleGroup],
    generator: &DeclarationGenerator<'_>,
) -> Result<String> {
    let sets = emitter::build_scale_sets(groups, palette)?;
    info!("Normalized {} scale groups", sets.len());
    generator.render(&sets)
}

fn load_generator(template: Option<&Path>) -> Result<DeclarationGenerator<'static>> {
    match template {
        Some(path) => {
            let source = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read template {}", path.display()))?;
            DeclarationGenerator::with_template(&source)
        }
        None => DeclarationGenerator::new(),
    }
}

/// Generate and write the result to `output`.
pub fn write_output(options: &GenerateOptions, output: &Path) -> Result<()> {
    let generated = generate(options)?;

    std::fs::write(output, generated)
        .with_context(|| format!("Failed to write {}", output.display()))?;

    info!("Generated color scales: {}", output.display());
    Ok(())
}

/// Check whether `output` matches what would be generated now.
pub fn check_output(options: &GenerateOptions, output: &Path) -> Result<bool> {
    let fresh = generate(options)?;
    let existing = std::fs::read_to_string(output)
        .with_context(|| format!("Failed to read {}", output.display()))?;

    let in_sync = fresh == existing;
    if in_sync {
        info!("✓ Color scales in sync: {}", output.display());
    } else {
        info!("✗ Color scales out of sync: {}", output.display());
    }

    Ok(in_sync)
}
