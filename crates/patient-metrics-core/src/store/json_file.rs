//! JSON file-backed record store.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::{RecordStore, Roster, StoreResult};

/// Whole-file JSON persistence.
///
/// Saves go to a sibling temp file first and are renamed into place, so a
/// crashed save never leaves a half-written roster behind for the next load.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Create a store backed by the file at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn tmp_path(&self) -> PathBuf {
        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        PathBuf::from(tmp)
    }
}

impl RecordStore for JsonFileStore {
    fn load(&self) -> StoreResult<Roster> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            // First run: no file yet reads as an empty roster.
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Roster::new()),
            Err(e) => return Err(e.into()),
        };
        Ok(serde_json::from_str(&raw)?)
    }

    fn save(&self, roster: &Roster) -> StoreResult<()> {
        let tmp = self.tmp_path();
        fs::write(&tmp, serde_json::to_vec_pretty(roster)?)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}
