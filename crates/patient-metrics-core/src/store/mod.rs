//! Record persistence for the patient roster.

mod json_file;
mod memory;

pub use json_file::*;
pub use memory::*;

use std::collections::BTreeMap;

use thiserror::Error;

use crate::models::PatientFields;

/// Storage errors.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed roster data: {0}")]
    Json(#[from] serde_json::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// The full record collection, keyed by patient id.
pub type Roster = BTreeMap<String, PatientFields>;

/// Whole-collection persistence.
///
/// `load` and `save` always move the entire roster; there is no incremental
/// write path. Concurrent save pairs are last-save-wins.
pub trait RecordStore: Send + Sync {
    /// Read the current roster from the backing resource.
    fn load(&self) -> StoreResult<Roster>;

    /// Replace the backing resource with `roster` in full.
    fn save(&self, roster: &Roster) -> StoreResult<()>;
}
