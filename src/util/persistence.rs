use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde_json::Error as SerdeError;

use crate::domain::{PricingError, RateTables, RatesSource};

const APP_QUALIFIER: &str = "ar";
const APP_ORG: &str = "PrecioJusto";
const APP_NAME: &str = "PrecioJusto";

pub const RATES_FILE: &str = "rates.json";

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from(APP_QUALIFIER, APP_ORG, APP_NAME)
}

/// `<config dir>/rates.json`, if the platform exposes a config directory.
pub fn rates_file() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().join(RATES_FILE))
}

/// Where exported reports land when the caller gives no directory.
pub fn reports_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.data_dir().join("reportes"))
}

pub fn read_rate_tables(path: &Path) -> Result<RateTables, StorageError> {
    let raw = fs::read_to_string(path)?;
    Ok(RateTables::from_json(&raw)?)
}

/// Active rate tables: the override file when present and valid, otherwise
/// the built-in schedule.
pub fn load_rate_tables() -> (RateTables, RatesSource) {
    let Some(path) = rates_file() else {
        tracing::warn!(target: "rates", "no config directory available, using built-in rates");
        return (RateTables::default(), RatesSource::BuiltIn);
    };
    load_rate_tables_from(&path)
}

pub fn load_rate_tables_from(path: &Path) -> (RateTables, RatesSource) {
    if !path.exists() {
        tracing::info!(target: "rates", path = %path.display(), "no override file, using built-in rates");
        return (RateTables::default(), RatesSource::BuiltIn);
    }
    match read_rate_tables(path) {
        Ok(tables) => {
            tracing::info!(target: "rates", path = %path.display(), "loaded rate override");
            (tables, RatesSource::File(path.to_path_buf()))
        }
        Err(err) => {
            tracing::warn!(target: "rates", path = %path.display(), error = %err, "ignoring rate override");
            (RateTables::default(), RatesSource::BuiltIn)
        }
    }
}

/// Writes `tables` as pretty JSON, creating parent directories.
pub fn save_rate_tables(tables: &RateTables, path: &Path) -> Result<(), StorageError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(tables)?;
    fs::write(path, json)?;
    Ok(())
}

/// Writes the built-in schedule to the config location so it can be edited.
pub fn write_rates_template() -> Result<PathBuf, StorageError> {
    let path = rates_file().ok_or(StorageError::StorageUnavailable)?;
    save_rate_tables(&RateTables::default(), &path)?;
    tracing::info!(target: "rates", path = %path.display(), "wrote rate template");
    Ok(path)
}

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("storage directory unavailable")]
    StorageUnavailable,
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Serde(#[from] SerdeError),
    #[error(transparent)]
    Rates(#[from] PricingError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let (tables, source) = load_rate_tables_from(&dir.path().join(RATES_FILE));
        assert_eq!(tables, RateTables::default());
        assert_eq!(source, RatesSource::BuiltIn);
    }

    #[test]
    fn saved_tables_load_back_as_file_source() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join(RATES_FILE);
        let mut tables = RateTables::default();
        tables.marketplace.shipping_cost = 7_200.0;
        save_rate_tables(&tables, &path).unwrap();

        let (loaded, source) = load_rate_tables_from(&path);
        assert_eq!(loaded.marketplace.shipping_cost, 7_200.0);
        assert_eq!(source, RatesSource::File(path));
    }

    #[test]
    fn invalid_override_is_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(RATES_FILE);
        fs::write(&path, r#"{ "general_withholding_pct": -1.0 }"#).unwrap();

        assert!(matches!(
            read_rate_tables(&path),
            Err(StorageError::Rates(PricingError::InvalidRateTable(_)))
        ));
        let (tables, source) = load_rate_tables_from(&path);
        assert_eq!(tables, RateTables::default());
        assert_eq!(source, RatesSource::BuiltIn);
    }

    #[test]
    fn unreadable_json_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(RATES_FILE);
        fs::write(&path, "not json").unwrap();
        assert!(read_rate_tables(&path).is_err());
    }
}
