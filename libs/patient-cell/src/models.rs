use chrono::NaiveDate;
use serde::Serialize;

use entry_cell::EntryView;
use shared_models::Gender;

pub const NO_INFO_MESSAGE: &str = "No info available";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientSummary {
    pub id: String,
    pub name: String,
    pub gender: Gender,
    pub occupation: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PatientListView {
    pub patients: Vec<PatientSummary>,
    pub total: usize,
}

/// A diagnosis code as referenced by an entry, with its name once diagnoses are loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiagnosisLine {
    pub code: String,
    pub name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntryDetailView {
    #[serde(flatten)]
    pub entry: EntryView,
    pub diagnoses: Vec<DiagnosisLine>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientDetailView {
    pub id: String,
    pub name: String,
    pub gender: Gender,
    pub gender_icon: &'static str,
    pub ssn: Option<String>,
    pub date_of_birth: NaiveDate,
    pub occupation: String,
    pub entries: Vec<EntryDetailView>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum PatientPage {
    Available(PatientDetailView),
    Unavailable { message: String },
}

impl PatientPage {
    pub fn unavailable() -> Self {
        PatientPage::Unavailable {
            message: NO_INFO_MESSAGE.to_string(),
        }
    }
}
