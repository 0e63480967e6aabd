//! Validation & merge engine for patient records.
//!
//! Every operation here is pure: rosters go in by reference and come back as
//! new values, and derived metrics are recomputed after any mutation so a
//! stored record can never drift out of step with its raw fields.

mod sort;
mod validate;

pub use sort::*;
pub use validate::*;

use thiserror::Error;

use crate::models::{NewPatient, Patient, PatientUpdate};
use crate::store::{Roster, StoreError};

/// Engine errors. Each variant maps to a distinct failure at the request
/// boundary.
#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("Validation failed: {0}")]
    Validation(Violations),

    #[error("Patient '{0}' already exists")]
    DuplicateId(String),

    #[error("Patient '{0}' not found")]
    NotFound(String),

    #[error("Invalid sort key '{0}': expected height, weight or bmi")]
    InvalidSortKey(String),

    #[error("Invalid sort order '{0}': expected asc or desc")]
    InvalidSortOrder(String),

    #[error("Storage error: {0}")]
    Storage(#[from] StoreError),
}

pub type RegistryResult<T> = Result<T, RegistryError>;

/// Insert a validated record into the roster.
///
/// Fails without touching the input if the id is already taken.
pub fn create(roster: &Roster, patient: &Patient) -> RegistryResult<Roster> {
    if roster.contains_key(&patient.id) {
        return Err(RegistryError::DuplicateId(patient.id.clone()));
    }

    let mut next = roster.clone();
    next.insert(patient.id.clone(), patient.fields());
    Ok(next)
}

/// Look up a single record, materializing its derived metrics.
pub fn lookup(roster: &Roster, id: &str) -> RegistryResult<Patient> {
    roster
        .get(id)
        .map(|fields| Patient::from_fields(id, fields))
        .ok_or_else(|| RegistryError::NotFound(id.to_string()))
}

/// Remove a record from the roster.
pub fn delete(roster: &Roster, id: &str) -> RegistryResult<Roster> {
    if !roster.contains_key(id) {
        return Err(RegistryError::NotFound(id.to_string()));
    }

    let mut next = roster.clone();
    next.remove(id);
    Ok(next)
}

/// Apply a partial patch to an existing record.
///
/// Every field present in the patch overwrites the copy; absent fields keep
/// their current value. The whole patch is applied before derived metrics are
/// recomputed, and the full result is re-validated so a single-field patch can
/// never leave the record internally inconsistent.
pub fn merge(existing: &Patient, patch: &PatientUpdate) -> RegistryResult<Patient> {
    let candidate = NewPatient {
        id: existing.id.clone(),
        name: patch.name.clone().unwrap_or_else(|| existing.name.clone()),
        city: patch.city.clone().unwrap_or_else(|| existing.city.clone()),
        age: patch.age.unwrap_or(existing.age),
        gender: patch.gender.unwrap_or(existing.gender),
        height: patch.height.unwrap_or(existing.height),
        weight: patch.weight.unwrap_or(existing.weight),
    };

    validate(candidate)
}

/// Merge `patch` into the record at `id` and return the new roster together
/// with the updated record.
pub fn update(roster: &Roster, id: &str, patch: &PatientUpdate) -> RegistryResult<(Roster, Patient)> {
    let existing = lookup(roster, id)?;
    let updated = merge(&existing, patch)?;

    let mut next = roster.clone();
    next.insert(id.to_string(), updated.fields());
    Ok((next, updated))
}
