use entry_cell::render_entries;
use shared_models::{Gender, Patient};
use state_cell::StoreState;

use crate::models::{
    DiagnosisLine, EntryDetailView, PatientDetailView, PatientListView, PatientPage,
    PatientSummary,
};

pub fn gender_icon(gender: Gender) -> &'static str {
    match gender {
        Gender::Male => "male",
        Gender::Female => "female",
        Gender::Other => "other gender",
    }
}

/// Patients ordered by name, then id, since the store itself keeps no order.
pub fn patient_list_view(state: &StoreState) -> PatientListView {
    let mut patients: Vec<PatientSummary> = state
        .patients()
        .map(|patient| PatientSummary {
            id: patient.id.clone(),
            name: patient.name.clone(),
            gender: patient.gender,
            occupation: patient.occupation.clone(),
        })
        .collect();
    patients.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.id.cmp(&b.id)));

    let total = patients.len();
    PatientListView { patients, total }
}

pub fn patient_page(state: &StoreState, patient_id: &str) -> PatientPage {
    match state.patient(patient_id) {
        Some(patient) => PatientPage::Available(patient_detail_view(state, patient)),
        None => PatientPage::unavailable(),
    }
}

/// Every entry goes through the entry dispatch, in chronology order as received.
pub fn patient_detail_view(state: &StoreState, patient: &Patient) -> PatientDetailView {
    let entries = render_entries(&patient.entries)
        .into_iter()
        .map(|entry| {
            let diagnoses = entry
                .diagnosis_codes
                .iter()
                .map(|code| DiagnosisLine {
                    code: code.clone(),
                    name: state.diagnosis(code).map(|diagnosis| diagnosis.name.clone()),
                })
                .collect();
            EntryDetailView { entry, diagnoses }
        })
        .collect();

    PatientDetailView {
        id: patient.id.clone(),
        name: patient.name.clone(),
        gender: patient.gender,
        gender_icon: gender_icon(patient.gender),
        ssn: patient.ssn.clone(),
        date_of_birth: patient.date_of_birth,
        occupation: patient.occupation.clone(),
        entries,
    }
}
