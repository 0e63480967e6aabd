//! Router assembly.

use axum::routing::{delete, get, post, put};
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::handlers::{self, AppState};

/// Build the application router.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route("/about", get(handlers::about))
        .route("/view", get(handlers::view))
        .route("/patient/:id", get(handlers::view_patient))
        .route("/sort", get(handlers::sort_patients))
        .route("/create", post(handlers::create_patient))
        .route("/edit/:id", put(handlers::update_patient))
        .route("/delete/:id", delete(handlers::delete_patient))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
