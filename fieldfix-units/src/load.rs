use crate::unit::UnitFile;
use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use fieldfix_types::schema::FIELDFIX_UNIT_V1;
use fs_err as fs;
use glob::glob;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Clone)]
pub struct LoadedUnit {
    /// Location of the unit file itself.
    pub path: Utf8PathBuf,
    pub unit: Result<UnitFile, UnitLoadError>,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum UnitLoadError {
    #[error("io error: {message}")]
    Io { message: String },

    #[error("json parse error: {message}")]
    Json { message: String },

    #[error("unsupported schema '{found}', expected 'fieldfix.unit.v1'")]
    Schema { found: String },
}

/// Find and parse every `*.unit.json` below `units_dir`, sorted by path.
///
/// A missing directory yields an empty list.
pub fn load_units(units_dir: &Utf8Path) -> anyhow::Result<Vec<LoadedUnit>> {
    let pattern = units_dir.join("**/*.unit.json");
    let pattern_str = pattern.as_str();

    debug!(pattern = %pattern_str, "scanning for unit files");

    let mut out = Vec::new();
    for entry in glob(pattern_str).context("glob **/*.unit.json")? {
        let path = entry
            .map_err(|e| anyhow::anyhow!("glob error: {e}"))?
            .to_string_lossy()
            .to_string();
        let path = Utf8PathBuf::from(path);

        let unit = read_unit(&path);
        if let Err(err) = &unit {
            debug!(path = %path, error = %err, "unit file failed to load");
        }
        out.push(LoadedUnit { path, unit });
    }

    out.sort_by(|a, b| a.path.cmp(&b.path));
    Ok(out)
}

/// Read and validate a single unit file.
pub fn read_unit(path: &Utf8Path) -> Result<UnitFile, UnitLoadError> {
    let contents = fs::read_to_string(path).map_err(|e| UnitLoadError::Io {
        message: e.to_string(),
    })?;
    let unit: UnitFile = serde_json::from_str(&contents).map_err(|e| UnitLoadError::Json {
        message: e.to_string(),
    })?;
    if unit.schema != FIELDFIX_UNIT_V1 {
        return Err(UnitLoadError::Schema { found: unit.schema });
    }
    Ok(unit)
}
