pub mod info;
pub mod relate;

use std::path::Path;

use anyhow::{Context, Result};

use crate::feature::parse_shape;
use crate::shape::Shape;

/// Read and decode a GeoJSON file.
pub fn load(path: &Path, index_threshold: usize) -> Result<Shape> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let shape = parse_shape(&text, index_threshold)
        .with_context(|| format!("failed to decode {}", path.display()))?;
    tracing::debug!(path = %path.display(), rect = ?shape.rect(), "loaded geometry");
    Ok(shape)
}
