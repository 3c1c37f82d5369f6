use std::collections::HashMap;
use std::hash::Hash;
use std::sync::Arc;

use shared_models::{Diagnosis, DiagnosisCode, Patient, PatientId};

use crate::actions::Action;

/// Snapshot of everything fetched so far. Both collections start empty.
///
/// Each collection sits behind its own `Arc`, so a reduction that touches only one of them
/// shares the other with the previous snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoreState {
    patients: Arc<HashMap<PatientId, Patient>>,
    diagnoses: Arc<HashMap<DiagnosisCode, Diagnosis>>,
}

impl StoreState {
    pub fn patient(&self, id: &str) -> Option<&Patient> {
        self.patients.get(id)
    }

    pub fn patients(&self) -> impl Iterator<Item = &Patient> {
        self.patients.values()
    }

    pub fn patient_count(&self) -> usize {
        self.patients.len()
    }

    pub fn diagnosis(&self, code: &str) -> Option<&Diagnosis> {
        self.diagnoses.get(code)
    }

    pub fn diagnoses(&self) -> impl Iterator<Item = &Diagnosis> {
        self.diagnoses.values()
    }

    pub fn diagnosis_count(&self) -> usize {
        self.diagnoses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patients.is_empty() && self.diagnoses.is_empty()
    }
}

/// Pure reduction of one action over a snapshot.
pub fn reducer(state: StoreState, action: Action) -> StoreState {
    match action {
        Action::SetPatientList(patients) => StoreState {
            patients: Arc::new(key_by(patients, |patient| patient.id.clone())),
            ..state
        },
        Action::SetDiagnosisList(diagnoses) => StoreState {
            diagnoses: Arc::new(key_by(diagnoses, |diagnosis| diagnosis.code.clone())),
            ..state
        },
        Action::UpdatePatient(patient) => {
            let mut state = state;
            Arc::make_mut(&mut state.patients).insert(patient.id.clone(), patient);
            state
        }
    }
}

// Later items overwrite earlier ones with the same key.
fn key_by<K, V, F>(items: Vec<V>, key: F) -> HashMap<K, V>
where
    K: Eq + Hash,
    F: Fn(&V) -> K,
{
    items.into_iter().map(|item| (key(&item), item)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::{set_diagnosis_list, set_patient_list, update_patient};
    use shared_utils::test_utils::{MockPatientorResponses, TestPatient};

    #[test]
    fn test_initial_state_is_empty() {
        let state = StoreState::default();
        assert!(state.is_empty());
        assert_eq!(state.patient("99"), None);
        assert_eq!(state.diagnosis("Z57.1"), None);
    }

    #[test]
    fn test_set_patient_list_last_duplicate_wins() {
        let first = TestPatient::new("1", "Alice", "female").to_list_patient();
        let other = TestPatient::new("2", "Bob", "male").to_list_patient();
        let last = TestPatient::new("1", "Alice Cooper", "female").to_list_patient();

        let state = reducer(
            StoreState::default(),
            set_patient_list(vec![first, other.clone(), last.clone()]),
        );

        assert_eq!(state.patient_count(), 2);
        assert_eq!(state.patient("1"), Some(&last));
        assert_eq!(state.patient("2"), Some(&other));
    }

    #[test]
    fn test_set_patient_list_replaces_wholesale() {
        let state = reducer(
            StoreState::default(),
            set_patient_list(vec![TestPatient::new("1", "Alice", "female").to_list_patient()]),
        );
        let state = reducer(
            state,
            set_patient_list(vec![TestPatient::new("2", "Bob", "male").to_list_patient()]),
        );

        assert_eq!(state.patient("1"), None);
        assert!(state.patient("2").is_some());
    }

    #[test]
    fn test_update_patient_replaces_not_merges() {
        let detailed = TestPatient::new("1", "Alice", "female")
            .with_ssn("010190-123A")
            .with_entry(MockPatientorResponses::hospital_entry("e1"))
            .to_patient();
        let partial = TestPatient::new("1", "Alice", "female").to_list_patient();

        let state = reducer(StoreState::default(), update_patient(detailed));
        let state = reducer(state, update_patient(partial.clone()));

        let stored = state.patient("1").unwrap();
        assert_eq!(stored, &partial);
        assert_eq!(stored.ssn, None);
        assert!(stored.entries.is_empty());
    }

    #[test]
    fn test_update_patient_inserts_when_absent() {
        let state = reducer(
            StoreState::default(),
            set_patient_list(vec![TestPatient::new("1", "Alice", "female").to_list_patient()]),
        );
        let bob = TestPatient::new("2", "Bob", "male").to_patient();

        let state = reducer(state, update_patient(bob.clone()));

        assert_eq!(state.patient_count(), 2);
        assert_eq!(state.patient("2"), Some(&bob));
    }

    #[test]
    fn test_actions_leave_the_other_collection_alone() {
        let diagnoses: Vec<Diagnosis> =
            serde_json::from_value(MockPatientorResponses::diagnoses()).unwrap();
        let state = reducer(StoreState::default(), set_diagnosis_list(diagnoses));
        let before = state.clone();

        let state = reducer(
            state,
            set_patient_list(vec![TestPatient::new("1", "Alice", "female").to_list_patient()]),
        );

        assert_eq!(state.diagnosis_count(), before.diagnosis_count());
        assert!(Arc::ptr_eq(&state.diagnoses, &before.diagnoses));
    }

    #[test]
    fn test_reducer_does_not_touch_previous_snapshot() {
        let previous = reducer(
            StoreState::default(),
            set_patient_list(vec![TestPatient::new("1", "Alice", "female").to_list_patient()]),
        );

        let next = reducer(
            previous.clone(),
            update_patient(TestPatient::new("2", "Bob", "male").to_patient()),
        );

        assert_eq!(previous.patient_count(), 1);
        assert_eq!(next.patient_count(), 2);
    }
}
