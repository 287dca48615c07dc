use std::fs;
use std::io;
use std::path::PathBuf;

use directories::ProjectDirs;
use serde_json::Error as SerdeError;
use tracing::debug;

use crate::domain::Preferences;

const APP_QUALIFIER: &str = "com";
const APP_ORG: &str = "PricingScout";
const APP_NAME: &str = "PricingScout";

fn data_file() -> Option<PathBuf> {
    ProjectDirs::from(APP_QUALIFIER, APP_ORG, APP_NAME)
        .map(|dirs| dirs.config_dir().join("state.json"))
}

pub fn load_preferences() -> Option<Preferences> {
    let path = data_file()?;
    let data = fs::read_to_string(&path).ok()?;
    let prefs = serde_json::from_str(&data).ok()?;
    debug!(path = %path.display(), "loaded saved preferences");
    Some(prefs)
}

pub fn save_preferences(prefs: &Preferences) -> Result<(), PersistSaveError> {
    let path = data_file().ok_or(PersistSaveError::StorageUnavailable)?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(prefs)?;
    fs::write(path, json)?;
    Ok(())
}

pub fn clear_preferences() -> Result<(), PersistSaveError> {
    let path = data_file().ok_or(PersistSaveError::StorageUnavailable)?;
    match fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(err) => Err(err.into()),
    }
}

#[derive(Debug, thiserror::Error)]
pub enum PersistSaveError {
    #[error("storage directory unavailable")]
    StorageUnavailable,
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Serde(#[from] SerdeError),
}
