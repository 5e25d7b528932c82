//! User preferences: which data file to use.
//!
//! `fn_at(home, …)` takes an explicit home for tests; the no-arg forms derive
//! it from `dirs::home_dir()`.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{io_err, StorageError};
use crate::storage::{data_root_at, default_address_book_path_at, home};

pub const PREFS_FILE: &str = "preferences.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPrefs {
    pub address_book_file_path: PathBuf,
}

impl UserPrefs {
    pub fn default_at(home: &Path) -> Self {
        Self {
            address_book_file_path: default_address_book_path_at(home),
        }
    }
}

/// `<home>/.tablebook/preferences.json`
pub fn prefs_path_at(home: &Path) -> PathBuf {
    data_root_at(home).join(PREFS_FILE)
}

/// Load prefs, falling back to defaults when the file does not exist.
pub fn load_at(home: &Path) -> Result<UserPrefs, StorageError> {
    let path = prefs_path_at(home);
    if !path.exists() {
        return Ok(UserPrefs::default_at(home));
    }
    let contents = std::fs::read_to_string(&path).map_err(|e| io_err(&path, e))?;
    serde_json::from_str(&contents).map_err(|source| StorageError::Parse { path, source })
}

pub fn load() -> Result<UserPrefs, StorageError> {
    load_at(&home()?)
}

pub fn save_at(home: &Path, prefs: &UserPrefs) -> Result<(), StorageError> {
    let path = prefs_path_at(home);
    let dir = data_root_at(home);
    std::fs::create_dir_all(&dir).map_err(|e| io_err(&dir, e))?;
    let json = serde_json::to_string_pretty(prefs)?;
    let tmp = path.with_extension("json.tmp");
    std::fs::write(&tmp, json).map_err(|e| io_err(&tmp, e))?;
    std::fs::rename(&tmp, &path).map_err(|e| io_err(&path, e))?;
    Ok(())
}

pub fn save(prefs: &UserPrefs) -> Result<(), StorageError> {
    save_at(&home()?, prefs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn defaults_when_missing() {
        let home = TempDir::new().unwrap();
        let prefs = load_at(home.path()).unwrap();
        assert_eq!(prefs, UserPrefs::default_at(home.path()));
        assert!(!prefs_path_at(home.path()).exists(), "loading must not create the file");
    }

    #[test]
    fn save_and_load_roundtrip() {
        let home = TempDir::new().unwrap();
        let prefs = UserPrefs {
            address_book_file_path: PathBuf::from("/srv/bistro/bookings.json"),
        };
        save_at(home.path(), &prefs).unwrap();
        assert_eq!(load_at(home.path()).unwrap(), prefs);
    }

    #[test]
    fn corrupt_prefs_is_parse_error() {
        let home = TempDir::new().unwrap();
        std::fs::create_dir_all(data_root_at(home.path())).unwrap();
        std::fs::write(prefs_path_at(home.path()), "{ not json").unwrap();
        let err = load_at(home.path()).unwrap_err();
        assert!(matches!(err, StorageError::Parse { .. }), "got: {err}");
        assert!(err.to_string().contains("preferences.json"));
    }
}
