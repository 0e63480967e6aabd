//! Route handlers.
//!
//! Every mutating handler runs exactly one load → engine operation → one save.
//! A load failure aborts the request before any computation.

use std::collections::BTreeMap;
use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};

use patient_metrics_core::registry;
use patient_metrics_core::{NewPatient, Patient, PatientUpdate, RecordStore};

use crate::error::ApiError;

/// Shared handler state.
#[derive(Clone)]
pub struct AppState {
    store: Arc<dyn RecordStore>,
}

impl AppState {
    /// Wrap a record store for the router.
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }
}

/// GET /
pub async fn root() -> Json<Value> {
    Json(json!({ "message": "Patient management system." }))
}

/// GET /about
pub async fn about() -> Json<Value> {
    Json(json!({ "message": "A fully functional API for patient management system." }))
}

/// GET /view returns the full roster with derived metrics materialized.
pub async fn view(
    State(state): State<AppState>,
) -> Result<Json<BTreeMap<String, Patient>>, ApiError> {
    let roster = state.store.load()?;
    let patients = roster
        .iter()
        .map(|(id, fields)| (id.clone(), Patient::from_fields(id.clone(), fields)))
        .collect();
    Ok(Json(patients))
}

/// GET /patient/{id}
pub async fn view_patient(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Patient>, ApiError> {
    let roster = state.store.load()?;
    let patient = registry::lookup(&roster, &id)?;
    Ok(Json(patient))
}

/// Query parameters for the sorted view.
#[derive(Debug, Deserialize)]
pub struct SortParams {
    pub sort_by: String,
    #[serde(default = "default_order")]
    pub order: String,
}

fn default_order() -> String {
    "asc".to_string()
}

/// GET /sort?sort_by=height&order=asc
pub async fn sort_patients(
    State(state): State<AppState>,
    Query(params): Query<SortParams>,
) -> Result<Json<Vec<Patient>>, ApiError> {
    let roster = state.store.load()?;
    let ordered = registry::sort(&roster, &params.sort_by, &params.order)?;
    Ok(Json(ordered))
}

/// POST /create
pub async fn create_patient(
    State(state): State<AppState>,
    Json(body): Json<NewPatient>,
) -> Result<(StatusCode, Json<Patient>), ApiError> {
    let roster = state.store.load()?;
    let patient = registry::validate(body)?;
    let next = registry::create(&roster, &patient)?;
    state.store.save(&next)?;

    tracing::info!(id = %patient.id, "patient created");
    Ok((StatusCode::CREATED, Json(patient)))
}

/// PUT /edit/{id} applies the whole patch, then saves once.
pub async fn update_patient(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(patch): Json<PatientUpdate>,
) -> Result<Json<Patient>, ApiError> {
    let roster = state.store.load()?;
    let (next, updated) = registry::update(&roster, &id, &patch)?;
    state.store.save(&next)?;

    tracing::info!(id = %updated.id, "patient updated");
    Ok(Json(updated))
}

/// DELETE /delete/{id}
pub async fn delete_patient(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let roster = state.store.load()?;
    let next = registry::delete(&roster, &id)?;
    state.store.save(&next)?;

    tracing::info!(%id, "patient deleted");
    Ok(Json(json!({ "message": "patient deleted" })))
}
