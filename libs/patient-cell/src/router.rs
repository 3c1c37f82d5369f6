use std::sync::Arc;
use axum::{routing::get, Router};

use crate::context::PatientContext;
use crate::handlers::*;

pub fn create_patient_router(context: Arc<PatientContext>) -> Router {
    Router::new()
        .route("/", get(get_patient_list))
        .route("/{id}", get(get_patient))
        .with_state(context)
}
