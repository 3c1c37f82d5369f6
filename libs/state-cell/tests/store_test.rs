use std::collections::HashSet;

use entry_cell::{dispatch, render_entry, EntryDetailsView, EntryHandler, Severity};
use shared_models::{
    Diagnosis, HealthCheckEntry, HospitalEntry, OccupationalHealthcareEntry, Patient,
};
use shared_utils::test_utils::{parse_diagnoses, MockPatientorResponses, TestPatient};
use state_cell::*;

struct SeverityProbe;

impl EntryHandler for SeverityProbe {
    type Output = Option<Severity>;

    fn hospital(&mut self, _entry: &HospitalEntry) -> Option<Severity> {
        None
    }

    fn health_check(&mut self, entry: &HealthCheckEntry) -> Option<Severity> {
        Some(Severity::from_rating(entry.health_check_rating))
    }

    fn occupational_healthcare(&mut self, _entry: &OccupationalHealthcareEntry) -> Option<Severity> {
        None
    }
}

#[test]
fn test_read_before_any_dispatch_is_absent() {
    let store = Store::new();
    let state = store.state();

    assert!(state.patient("99").is_none());
    assert!(state.is_empty());
}

#[test]
fn test_set_patient_list_keys_by_distinct_ids() {
    let store = Store::new();
    let list: Vec<Patient> = vec![
        TestPatient::new("1", "Alice", "female").to_list_patient(),
        TestPatient::new("2", "Bob", "male").to_list_patient(),
        TestPatient::new("3", "Carol", "other").to_list_patient(),
        TestPatient::new("2", "Robert", "male").to_list_patient(),
        TestPatient::new("1", "Alicia", "female").to_list_patient(),
    ];
    let distinct: HashSet<&str> = list.iter().map(|p| p.id.as_str()).collect();

    store.dispatch(set_patient_list(list.clone()));
    let state = store.state();

    assert_eq!(state.patient_count(), distinct.len());
    for id in distinct {
        let last = list.iter().rev().find(|p| p.id == id).unwrap();
        assert_eq!(state.patient(id), Some(last));
    }
    assert_eq!(state.patient("1").unwrap().name, "Alicia");
    assert_eq!(state.patient("2").unwrap().name, "Robert");
}

#[test]
fn test_update_patient_returns_exactly_the_record() {
    let store = Store::new();
    store.dispatch(set_patient_list(vec![TestPatient::new("1", "Alice", "female")
        .with_ssn("010190-123A")
        .to_patient()]));

    let replacement = TestPatient::new("1", "Alice", "female")
        .with_entry(MockPatientorResponses::occupational_entry("e1", "HyPD"))
        .to_patient();
    store.dispatch(update_patient(replacement.clone()));

    assert_eq!(store.state().patient("1"), Some(&replacement));
    assert_eq!(store.state().patient("1").unwrap().ssn, None);
}

#[test]
fn test_second_diagnosis_list_leaves_no_residue() {
    let store = Store::new();
    store.dispatch(set_diagnosis_list(parse_diagnoses(MockPatientorResponses::diagnoses())));
    assert_eq!(store.state().diagnosis_count(), 4);

    let second = vec![
        Diagnosis::new("J10.1", "Influenza with other respiratory manifestations"),
        Diagnosis::new("H54.7", "Unspecified visual loss"),
    ];
    store.dispatch(set_diagnosis_list(second.clone()));

    let state = store.state();
    assert_eq!(state.diagnosis_count(), 2);
    assert!(state.diagnosis("M24.2").is_none());
    assert!(state.diagnosis("Z57.1").is_none());
    for diagnosis in &second {
        assert_eq!(state.diagnosis(&diagnosis.code), Some(diagnosis));
    }
}

#[test]
fn test_list_then_detail_scenario() {
    let store = Store::new();
    let alice = TestPatient::new("1", "Alice", "female");

    store.dispatch(set_patient_list(vec![alice.to_list_patient()]));
    let state = store.state();
    let listed = state.patient("1").unwrap();
    assert_eq!(listed.name, "Alice");
    assert!(listed.entries.is_empty());

    let detailed = alice
        .with_entry(MockPatientorResponses::health_check_entry("e1", 2))
        .to_patient();
    store.dispatch(update_patient(detailed));

    let state = store.state();
    let patient = state.patient("1").unwrap();
    assert_eq!(patient.entries.len(), 1);
    assert_eq!(dispatch(&patient.entries[0], &mut SeverityProbe), Some(Severity::Medium));
    assert_eq!(
        render_entry(&patient.entries[0]).details,
        EntryDetailsView::HealthCheck {
            severity: Severity::Medium,
            heart_color: "orange",
        }
    );
}

#[test]
fn test_snapshots_are_immutable() {
    let store = Store::new();
    let (before, dispatcher) = store.state_value();

    dispatcher.dispatch(set_patient_list(vec![
        TestPatient::new("1", "Alice", "female").to_list_patient()
    ]));

    assert!(before.patient("1").is_none());
    assert!(store.state().patient("1").is_some());
}

#[test]
fn test_cloned_handles_share_state() {
    let store = Store::new();
    let other = store.clone();

    other.dispatch(update_patient(TestPatient::new("7", "Grace", "female").to_patient()));

    assert!(store.state().patient("7").is_some());
}

#[tokio::test]
async fn test_subscribers_see_every_dispatch() {
    let store = Store::new();
    let mut receiver = store.subscribe();
    assert!(!receiver.has_changed().unwrap());

    store.dispatch(set_patient_list(vec![
        TestPatient::new("1", "Alice", "female").to_list_patient()
    ]));

    receiver.changed().await.unwrap();
    assert_eq!(receiver.borrow_and_update().patient_count(), 1);

    store.dispatch(update_patient(TestPatient::new("2", "Bob", "male").to_patient()));

    receiver.changed().await.unwrap();
    assert_eq!(receiver.borrow_and_update().patient_count(), 2);
}

#[tokio::test]
async fn test_concurrent_dispatches_do_not_interleave() {
    let store = Store::new();

    let handles: Vec<_> = (0..50)
        .map(|i| {
            let dispatcher = store.dispatcher();
            tokio::spawn(async move {
                let patient = TestPatient::new(&i.to_string(), "Patient", "other").to_patient();
                dispatcher.dispatch(update_patient(patient));
            })
        })
        .collect();

    for handle in handles {
        handle.await.unwrap();
    }

    assert_eq!(store.state().patient_count(), 50);
}
