use std::sync::Arc;
use axum::{
    extract::{Path, State},
    Json,
};
use tracing::debug;

use crate::context::PatientContext;
use crate::models::{PatientListView, PatientPage};
use crate::services::{patient_list_view, patient_page};

#[axum::debug_handler]
pub async fn get_patient_list(
    State(context): State<Arc<PatientContext>>,
) -> Json<PatientListView> {
    let state = context.store.state();
    Json(patient_list_view(&state))
}

#[axum::debug_handler]
pub async fn get_patient(
    State(context): State<Arc<PatientContext>>,
    Path(patient_id): Path<String>,
) -> Json<PatientPage> {
    // A failed detail fetch is already logged and leaves the store as it was.
    if context.sync.load_patient(&patient_id).await.is_err() {
        debug!("Rendering patient {} from existing state", patient_id);
    }

    let state = context.store.state();
    Json(patient_page(&state, &patient_id))
}
