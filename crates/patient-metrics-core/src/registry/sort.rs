//! Ordered views over the roster.

use std::cmp::Ordering;
use std::str::FromStr;

use crate::models::Patient;
use crate::store::Roster;

use super::{RegistryError, RegistryResult};

/// Numeric field a roster view can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Height,
    Weight,
    Bmi,
}

impl SortKey {
    fn value(&self, patient: &Patient) -> f64 {
        match self {
            SortKey::Height => patient.height,
            SortKey::Weight => patient.weight,
            SortKey::Bmi => patient.bmi,
        }
    }
}

impl FromStr for SortKey {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "height" => Ok(SortKey::Height),
            "weight" => Ok(SortKey::Weight),
            "bmi" => Ok(SortKey::Bmi),
            other => Err(RegistryError::InvalidSortKey(other.to_string())),
        }
    }
}

/// Direction of an ordered view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl FromStr for SortOrder {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(SortOrder::Asc),
            "desc" => Ok(SortOrder::Desc),
            other => Err(RegistryError::InvalidSortOrder(other.to_string())),
        }
    }
}

/// Materialize the roster ordered by `key` in the given direction.
///
/// The sort is stable; ties keep the roster's id order. Values that do not
/// compare (cannot happen on validated records) count as equal instead of
/// erroring.
pub fn sort(roster: &Roster, key: &str, order: &str) -> RegistryResult<Vec<Patient>> {
    let key: SortKey = key.parse()?;
    let order: SortOrder = order.parse()?;

    let mut patients: Vec<Patient> = roster
        .iter()
        .map(|(id, fields)| Patient::from_fields(id.clone(), fields))
        .collect();

    patients.sort_by(|a, b| {
        let ordering = key
            .value(a)
            .partial_cmp(&key.value(b))
            .unwrap_or(Ordering::Equal);
        match order {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    });

    Ok(patients)
}
