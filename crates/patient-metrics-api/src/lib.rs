//! HTTP surface for the patient metrics service.
//!
//! Thin routing over [`patient_metrics_core`]: each request loads the roster,
//! runs one engine operation, and saves the roster back in full. Two requests
//! mutating at the same time race on that load/save pair and the last save
//! wins; the store makes no stronger promise.

pub mod config;
pub mod error;
pub mod handlers;
pub mod routes;

pub use config::ApiConfig;
pub use error::ApiError;
pub use handlers::AppState;
pub use routes::app;
