use std::fmt;

use shared_models::{Diagnosis, Patient};

/// The closed set of store mutations. There is no delete and no field-level patch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Replaces the whole patients collection.
    SetPatientList(Vec<Patient>),
    /// Replaces the whole diagnoses collection.
    SetDiagnosisList(Vec<Diagnosis>),
    /// Inserts the patient, or replaces the record with the same id in full.
    UpdatePatient(Patient),
}

impl Action {
    pub fn name(&self) -> &'static str {
        match self {
            Action::SetPatientList(_) => "SET_PATIENT_LIST",
            Action::SetDiagnosisList(_) => "SET_DIAGNOSIS_LIST",
            Action::UpdatePatient(_) => "UPDATE_PATIENT",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

pub fn set_patient_list(patients: Vec<Patient>) -> Action {
    Action::SetPatientList(patients)
}

pub fn set_diagnosis_list(diagnoses: Vec<Diagnosis>) -> Action {
    Action::SetDiagnosisList(diagnoses)
}

pub fn update_patient(patient: Patient) -> Action {
    Action::UpdatePatient(patient)
}
