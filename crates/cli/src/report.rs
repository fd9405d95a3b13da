//! JSON run summaries, printed or written next to other outputs.

use anyhow::{Context, Result};
use serde::Serialize;
use std::fs;
use std::path::Path;

use cuboids::api::{Cuboid, SearchStats};

/// Outcome of one enumeration.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Summary {
    pub dims: String,
    pub surface_area: usize,
    pub connections: usize,
    pub unique: usize,
    pub generated: u64,
    pub elapsed_ms: u64,
}

impl Summary {
    pub fn new(cuboid: &Cuboid, stats: &SearchStats) -> Self {
        Self {
            dims: cuboid.dims().to_string(),
            surface_area: cuboid.surface_area(),
            connections: cuboid.connections(),
            unique: stats.unique,
            generated: stats.generated,
            elapsed_ms: u64::try_from(stats.elapsed.as_millis()).unwrap_or(u64::MAX),
        }
    }

    pub fn line(&self) -> String {
        format!(
            "{}: surface area {}, {} connections, {} unique nets from {} generated in {} ms",
            self.dims,
            self.surface_area,
            self.connections,
            self.unique,
            self.generated,
            self.elapsed_ms
        )
    }
}

/// Pretty-print `value` as JSON into `path`, creating parent directories.
pub fn write_json<T: Serialize, P: AsRef<Path>>(path: P, value: &T) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    fs::write(path, serde_json::to_vec_pretty(value)?)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}
