//! Patient models.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Patient gender.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Other,
}

/// Health classification derived from BMI.
///
/// Band lower bounds are inclusive: exactly 18.5 is `Normal`, exactly 25.0 is
/// `Overweight`, exactly 30.0 is `Obese`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl Verdict {
    /// Classify a rounded BMI value.
    pub fn from_bmi(bmi: f64) -> Self {
        if bmi < 18.5 {
            Verdict::Underweight
        } else if bmi < 25.0 {
            Verdict::Normal
        } else if bmi < 30.0 {
            Verdict::Overweight
        } else {
            Verdict::Obese
        }
    }

    /// Label as it appears on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::Underweight => "Underweight",
            Verdict::Normal => "Normal",
            Verdict::Overweight => "Overweight",
            Verdict::Obese => "Obese",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Body mass index: weight (kg) / height (m) squared, rounded to two decimal
/// places with ties going to the even digit.
pub fn bmi(weight_kg: f64, height_m: f64) -> f64 {
    let raw = weight_kg / (height_m * height_m);
    (raw * 100.0).round_ties_even() / 100.0
}

/// Raw per-patient fields as persisted, keyed by patient id in the roster.
///
/// Derived metrics are never stored; they are recomputed whenever a record is
/// materialized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatientFields {
    /// Patient name
    pub name: String,
    /// City of residence
    pub city: String,
    /// Age in years
    pub age: u32,
    /// Gender
    pub gender: Gender,
    /// Height in meters
    pub height: f64,
    /// Weight in kilograms
    pub weight: f64,
}

/// A fully validated patient record with derived metrics materialized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Patient {
    /// Unique record id, immutable once created
    pub id: String,
    pub name: String,
    pub city: String,
    pub age: u32,
    pub gender: Gender,
    pub height: f64,
    pub weight: f64,
    /// Derived: weight / height², rounded to 2 decimals
    pub bmi: f64,
    /// Derived: classification of `bmi`
    pub verdict: Verdict,
}

impl Patient {
    /// Materialize a record from its stored fields, recomputing the derived
    /// metrics from the current height and weight.
    pub fn from_fields(id: impl Into<String>, fields: &PatientFields) -> Self {
        let bmi = bmi(fields.weight, fields.height);
        Self {
            id: id.into(),
            name: fields.name.clone(),
            city: fields.city.clone(),
            age: fields.age,
            gender: fields.gender,
            height: fields.height,
            weight: fields.weight,
            bmi,
            verdict: Verdict::from_bmi(bmi),
        }
    }

    /// The persisted subset of this record.
    pub fn fields(&self) -> PatientFields {
        PatientFields {
            name: self.name.clone(),
            city: self.city.clone(),
            age: self.age,
            gender: self.gender,
            height: self.height,
            weight: self.weight,
        }
    }
}

/// Incoming shape for record creation: the raw fields plus the id.
///
/// Derived fields are not accepted; a body carrying one is rejected at
/// deserialization.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NewPatient {
    pub id: String,
    pub name: String,
    pub city: String,
    pub age: u32,
    pub gender: Gender,
    pub height: f64,
    pub weight: f64,
}

/// Partial patch for an existing record.
///
/// Absent fields keep their current value. The record id is not patchable and
/// is rejected as an unknown field.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PatientUpdate {
    pub name: Option<String>,
    pub city: Option<String>,
    pub age: Option<u32>,
    pub gender: Option<Gender>,
    pub height: Option<f64>,
    pub weight: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_bmi_rounds_to_two_decimals() {
        assert_eq!(bmi(55.0, 1.6), 21.48);
        assert_eq!(bmi(55.0, 1.5), 24.44);
        assert_eq!(bmi(70.0, 1.5), 31.11);
    }

    #[test]
    fn test_bmi_ties_round_to_even() {
        // 21.125 and 21.375 are exactly representable, so both hit a true tie.
        assert_eq!(bmi(21.125, 1.0), 21.12);
        assert_eq!(bmi(21.375, 1.0), 21.38);
    }

    #[test]
    fn test_verdict_band_boundaries() {
        assert_eq!(Verdict::from_bmi(18.49), Verdict::Underweight);
        assert_eq!(Verdict::from_bmi(18.5), Verdict::Normal);
        assert_eq!(Verdict::from_bmi(24.99), Verdict::Normal);
        assert_eq!(Verdict::from_bmi(25.0), Verdict::Overweight);
        assert_eq!(Verdict::from_bmi(29.99), Verdict::Overweight);
        assert_eq!(Verdict::from_bmi(30.0), Verdict::Obese);
    }

    #[test]
    fn test_from_fields_materializes_derived_metrics() {
        let fields = PatientFields {
            name: "Asha".into(),
            city: "Pune".into(),
            age: 30,
            gender: Gender::Female,
            height: 1.6,
            weight: 55.0,
        };

        let patient = Patient::from_fields("P001", &fields);
        assert_eq!(patient.id, "P001");
        assert_eq!(patient.bmi, 21.48);
        assert_eq!(patient.verdict, Verdict::Normal);
        assert_eq!(patient.fields(), fields);
    }

    #[test]
    fn test_gender_serializes_lowercase() {
        assert_eq!(serde_json::to_value(Gender::Male).unwrap(), "male");
        assert_eq!(serde_json::to_value(Gender::Other).unwrap(), "other");
        let parsed: Gender = serde_json::from_str("\"female\"").unwrap();
        assert_eq!(parsed, Gender::Female);
    }

    #[test]
    fn test_verdict_serializes_as_label() {
        assert_eq!(serde_json::to_value(Verdict::Obese).unwrap(), "Obese");
        assert_eq!(Verdict::Underweight.to_string(), "Underweight");
    }

    #[test]
    fn test_update_rejects_id_field() {
        let err = serde_json::from_str::<PatientUpdate>(r#"{"id":"P002"}"#);
        assert!(err.is_err());
    }

    proptest! {
        #[test]
        fn prop_bmi_has_at_most_two_decimals(
            height in 0.5f64..2.5,
            weight in 2.0f64..300.0,
        ) {
            let b = bmi(weight, height);
            prop_assert!((b * 100.0 - (b * 100.0).round()).abs() < 1e-6);
            // Rounding never moves the value more than half a hundredth.
            let raw = weight / (height * height);
            prop_assert!((b - raw).abs() <= 0.005 + 1e-9);
        }

        #[test]
        fn prop_bmi_monotonic_in_weight(
            height in 0.5f64..2.5,
            weight in 2.0f64..290.0,
        ) {
            prop_assert!(bmi(weight + 10.0, height) >= bmi(weight, height));
        }
    }
}
