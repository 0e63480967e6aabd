//! Field validation for incoming records.

use std::fmt;

use crate::models::{NewPatient, Patient, PatientFields};

use super::{RegistryError, RegistryResult};

/// Age must stay inside the open interval (0, MAX_AGE).
const MAX_AGE: u32 = 120;

/// A single field constraint violation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// Field the constraint applies to.
    pub field: &'static str,
    /// What the constraint requires.
    pub message: &'static str,
}

/// Every violation found in one candidate, in field declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violations(pub Vec<Violation>);

impl fmt::Display for Violations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, v) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{} {}", v.field, v.message)?;
        }
        Ok(())
    }
}

/// Check every field constraint and materialize the derived metrics.
///
/// Violations are accumulated rather than short-circuited, and reported in
/// field declaration order, so the outcome is deterministic and nothing is
/// silently dropped.
pub fn validate(candidate: NewPatient) -> RegistryResult<Patient> {
    let mut violations = Vec::new();

    if candidate.id.trim().is_empty() {
        violations.push(Violation {
            field: "id",
            message: "must not be empty",
        });
    }
    if candidate.name.trim().is_empty() {
        violations.push(Violation {
            field: "name",
            message: "must not be empty",
        });
    }
    if candidate.age == 0 || candidate.age >= MAX_AGE {
        violations.push(Violation {
            field: "age",
            message: "must be greater than 0 and less than 120",
        });
    }
    if !(candidate.height > 0.0 && candidate.height.is_finite()) {
        violations.push(Violation {
            field: "height",
            message: "must be greater than 0",
        });
    }
    if !(candidate.weight > 0.0 && candidate.weight.is_finite()) {
        violations.push(Violation {
            field: "weight",
            message: "must be greater than 0",
        });
    }

    if !violations.is_empty() {
        return Err(RegistryError::Validation(Violations(violations)));
    }

    let fields = PatientFields {
        name: candidate.name,
        city: candidate.city,
        age: candidate.age,
        gender: candidate.gender,
        height: candidate.height,
        weight: candidate.weight,
    };
    Ok(Patient::from_fields(candidate.id, &fields))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Gender, Verdict};

    fn candidate() -> NewPatient {
        NewPatient {
            id: "P001".into(),
            name: "Asha".into(),
            city: "Pune".into(),
            age: 30,
            gender: Gender::Female,
            height: 1.6,
            weight: 55.0,
        }
    }

    #[test]
    fn test_valid_candidate_materializes_metrics() {
        let patient = validate(candidate()).unwrap();
        assert_eq!(patient.bmi, 21.48);
        assert_eq!(patient.verdict, Verdict::Normal);
    }

    #[test]
    fn test_empty_name_is_rejected() {
        let err = validate(NewPatient {
            name: "  ".into(),
            ..candidate()
        })
        .unwrap_err();

        match err {
            RegistryError::Validation(violations) => {
                assert_eq!(violations.0.len(), 1);
                assert_eq!(violations.0[0].field, "name");
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_age_bounds_are_exclusive() {
        assert!(validate(NewPatient { age: 1, ..candidate() }).is_ok());
        assert!(validate(NewPatient { age: 119, ..candidate() }).is_ok());
        assert!(validate(NewPatient { age: 0, ..candidate() }).is_err());
        assert!(validate(NewPatient { age: 120, ..candidate() }).is_err());
    }

    #[test]
    fn test_nonpositive_height_and_weight_are_rejected() {
        assert!(validate(NewPatient { height: 0.0, ..candidate() }).is_err());
        assert!(validate(NewPatient { height: -1.7, ..candidate() }).is_err());
        assert!(validate(NewPatient { weight: 0.0, ..candidate() }).is_err());
        assert!(validate(NewPatient { weight: f64::NAN, ..candidate() }).is_err());
    }

    #[test]
    fn test_violations_accumulate_in_declaration_order() {
        let err = validate(NewPatient {
            id: "".into(),
            age: 0,
            height: -1.0,
            ..candidate()
        })
        .unwrap_err();

        match err {
            RegistryError::Validation(violations) => {
                let fields: Vec<&str> = violations.0.iter().map(|v| v.field).collect();
                assert_eq!(fields, vec!["id", "age", "height"]);
                assert_eq!(
                    violations.to_string(),
                    "id must not be empty; age must be greater than 0 and less than 120; \
                     height must be greater than 0"
                );
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }
}
