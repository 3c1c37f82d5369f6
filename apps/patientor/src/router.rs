use std::sync::Arc;

use axum::Router;

use patient_cell::{create_patient_router, PatientContext};

pub fn create_router(context: Arc<PatientContext>) -> Router {
    Router::new().merge(create_patient_router(context))
}
