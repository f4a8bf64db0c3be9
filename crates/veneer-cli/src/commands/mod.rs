//! CLI subcommands.

pub mod check;
pub mod generate;

use std::path::Path;

use anyhow::Context;
use veneer_model::Manifest;

/// Load a manifest, picking the format by file extension: `.json` is
/// parsed as JSON, everything else as TOML.
pub fn load_manifest(path: &Path) -> anyhow::Result<Manifest> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading manifest {}", path.display()))?;
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => serde_json::from_str(&text)
            .with_context(|| format!("parsing JSON manifest {}", path.display())),
        _ => toml::from_str(&text)
            .with_context(|| format!("parsing TOML manifest {}", path.display())),
    }
}
