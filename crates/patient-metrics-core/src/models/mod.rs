//! Domain models for the patient metrics system.

mod patient;

pub use patient::*;
