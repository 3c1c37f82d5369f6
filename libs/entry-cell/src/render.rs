use chrono::NaiveDate;
use serde::Serialize;
use tracing::trace;

use shared_models::{BaseEntry, Entry, HealthCheckEntry, HospitalEntry, OccupationalHealthcareEntry};

use crate::dispatch::{dispatch, dispatch_all, EntryHandler};
use crate::severity::Severity;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryView {
    pub id: String,
    pub date: NaiveDate,
    pub icon: &'static str,
    pub description: String,
    pub specialist: String,
    pub diagnosis_codes: Vec<String>,
    #[serde(flatten)]
    pub details: EntryDetailsView,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all_fields = "camelCase")]
pub enum EntryDetailsView {
    Hospital {
        discharge: String,
    },
    HealthCheck {
        severity: Severity,
        heart_color: &'static str,
    },
    OccupationalHealthcare {
        employer_name: String,
        sick_leave: Option<String>,
    },
}

/// Builds the display model of an entry.
#[derive(Debug, Default, Clone, Copy)]
pub struct EntryRenderer;

impl EntryRenderer {
    fn view(base: &BaseEntry, icon: &'static str, details: EntryDetailsView) -> EntryView {
        trace!(entry_id = %base.id, icon, "Rendering entry");
        EntryView {
            id: base.id.clone(),
            date: base.date,
            icon,
            description: base.description.clone(),
            specialist: base.specialist.clone(),
            diagnosis_codes: base.diagnosis_codes.clone().unwrap_or_default(),
            details,
        }
    }
}

impl EntryHandler for EntryRenderer {
    type Output = EntryView;

    fn hospital(&mut self, entry: &HospitalEntry) -> EntryView {
        let discharge = format!(
            "Discharged on {}: {}",
            entry.discharge.date, entry.discharge.criteria
        );
        Self::view(&entry.base, "hospital", EntryDetailsView::Hospital { discharge })
    }

    fn health_check(&mut self, entry: &HealthCheckEntry) -> EntryView {
        let severity = Severity::from_rating(entry.health_check_rating);
        Self::view(
            &entry.base,
            "heartbeat",
            EntryDetailsView::HealthCheck {
                severity,
                heart_color: severity.color(),
            },
        )
    }

    fn occupational_healthcare(&mut self, entry: &OccupationalHealthcareEntry) -> EntryView {
        let sick_leave = entry
            .sick_leave
            .as_ref()
            .map(|leave| format!("{} to {}", leave.start_date, leave.end_date));
        Self::view(
            &entry.base,
            "doctor",
            EntryDetailsView::OccupationalHealthcare {
                employer_name: entry.employer_name.clone(),
                sick_leave,
            },
        )
    }
}

pub fn render_entry(entry: &Entry) -> EntryView {
    dispatch(entry, &mut EntryRenderer)
}

pub fn render_entries(entries: &[Entry]) -> Vec<EntryView> {
    dispatch_all(entries, &mut EntryRenderer)
}
