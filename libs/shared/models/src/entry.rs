use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::diagnosis::DiagnosisCode;
use crate::error::EntryError;

pub type EntryId = String;

/// Discriminant of a medical entry, carried on the wire as the `type` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntryType {
    Hospital,
    HealthCheck,
    OccupationalHealthcare,
}

impl EntryType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hospital => "Hospital",
            Self::HealthCheck => "HealthCheck",
            Self::OccupationalHealthcare => "OccupationalHealthcare",
        }
    }

    pub fn from_discriminant(s: &str) -> Option<Self> {
        match s {
            "Hospital" => Some(Self::Hospital),
            "HealthCheck" => Some(Self::HealthCheck),
            "OccupationalHealthcare" => Some(Self::OccupationalHealthcare),
            _ => None,
        }
    }

    pub fn all() -> &'static [EntryType] {
        &[Self::Hospital, Self::HealthCheck, Self::OccupationalHealthcare]
    }
}

impl fmt::Display for EntryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Envelope fields shared by every entry variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseEntry {
    pub id: EntryId,
    pub date: NaiveDate,
    pub description: String,
    pub specialist: String,
    /// Weak references into the diagnosis collection.
    pub diagnosis_codes: Option<Vec<DiagnosisCode>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Discharge {
    pub date: NaiveDate,
    pub criteria: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SickLeave {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

/// Health check rating, nominally 0 (healthy) to 3 (critical risk).
///
/// Values outside the nominal range are kept as received rather than rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HealthCheckRating(pub i64);

impl HealthCheckRating {
    pub const HEALTHY: Self = Self(0);
    pub const LOW_RISK: Self = Self(1);
    pub const HIGH_RISK: Self = Self(2);
    pub const CRITICAL_RISK: Self = Self(3);

    pub fn value(self) -> i64 {
        self.0
    }

    pub fn is_nominal(self) -> bool {
        (0..=3).contains(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HospitalEntry {
    pub base: BaseEntry,
    pub discharge: Discharge,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HealthCheckEntry {
    pub base: BaseEntry,
    pub health_check_rating: HealthCheckRating,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OccupationalHealthcareEntry {
    pub base: BaseEntry,
    pub employer_name: String,
    pub sick_leave: Option<SickLeave>,
}

/// One dated medical event. Each variant owns exactly its own fields, so a record whose
/// discriminant disagrees with its payload cannot be represented.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawEntry", into = "RawEntry")]
pub enum Entry {
    Hospital(HospitalEntry),
    HealthCheck(HealthCheckEntry),
    OccupationalHealthcare(OccupationalHealthcareEntry),
}

impl Entry {
    /// Parses a wire record, rejecting unknown discriminants and mixed-variant payloads.
    pub fn from_value(value: serde_json::Value) -> Result<Self, EntryError> {
        let raw: RawEntry = serde_json::from_value(value)?;
        Entry::try_from(raw)
    }

    pub fn base(&self) -> &BaseEntry {
        match self {
            Entry::Hospital(entry) => &entry.base,
            Entry::HealthCheck(entry) => &entry.base,
            Entry::OccupationalHealthcare(entry) => &entry.base,
        }
    }

    pub fn id(&self) -> &str {
        &self.base().id
    }

    pub fn date(&self) -> NaiveDate {
        self.base().date
    }

    pub fn entry_type(&self) -> EntryType {
        match self {
            Entry::Hospital(_) => EntryType::Hospital,
            Entry::HealthCheck(_) => EntryType::HealthCheck,
            Entry::OccupationalHealthcare(_) => EntryType::OccupationalHealthcare,
        }
    }

    pub fn diagnosis_codes(&self) -> &[DiagnosisCode] {
        self.base().diagnosis_codes.as_deref().unwrap_or_default()
    }
}

/// Flat wire shape of an entry before the discriminant has been checked against the payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawEntry {
    id: EntryId,
    date: NaiveDate,
    description: String,
    specialist: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    diagnosis_codes: Option<Vec<DiagnosisCode>>,
    #[serde(rename = "type")]
    kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    discharge: Option<Discharge>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    health_check_rating: Option<HealthCheckRating>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    employer_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    sick_leave: Option<SickLeave>,
}

impl RawEntry {
    fn payload(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| format!("{:?}", self))
    }

    fn reject_foreign_fields(&self, entry_type: EntryType) -> Result<(), EntryError> {
        let variant_fields = [
            ("discharge", self.discharge.is_some(), EntryType::Hospital),
            ("healthCheckRating", self.health_check_rating.is_some(), EntryType::HealthCheck),
            ("employerName", self.employer_name.is_some(), EntryType::OccupationalHealthcare),
            ("sickLeave", self.sick_leave.is_some(), EntryType::OccupationalHealthcare),
        ];

        match variant_fields
            .into_iter()
            .find(|(_, present, owner)| *present && *owner != entry_type)
        {
            Some((field, _, owner)) => Err(EntryError::ForeignField { entry_type, field, owner }),
            None => Ok(()),
        }
    }
}

impl TryFrom<RawEntry> for Entry {
    type Error = EntryError;

    fn try_from(raw: RawEntry) -> Result<Self, Self::Error> {
        let entry_type = EntryType::from_discriminant(&raw.kind).ok_or_else(|| {
            EntryError::UnknownType {
                discriminant: raw.kind.clone(),
                payload: raw.payload(),
            }
        })?;
        raw.reject_foreign_fields(entry_type)?;

        let missing = |field: &'static str| EntryError::MissingField { entry_type, field };

        let RawEntry {
            id,
            date,
            description,
            specialist,
            diagnosis_codes,
            discharge,
            health_check_rating,
            employer_name,
            sick_leave,
            ..
        } = raw;

        let base = BaseEntry {
            id,
            date,
            description,
            specialist,
            diagnosis_codes,
        };

        let entry = match entry_type {
            EntryType::Hospital => Entry::Hospital(HospitalEntry {
                base,
                discharge: discharge.ok_or_else(|| missing("discharge"))?,
            }),
            EntryType::HealthCheck => Entry::HealthCheck(HealthCheckEntry {
                base,
                health_check_rating: health_check_rating
                    .ok_or_else(|| missing("healthCheckRating"))?,
            }),
            EntryType::OccupationalHealthcare => {
                Entry::OccupationalHealthcare(OccupationalHealthcareEntry {
                    base,
                    employer_name: employer_name.ok_or_else(|| missing("employerName"))?,
                    sick_leave,
                })
            }
        };

        Ok(entry)
    }
}

impl From<Entry> for RawEntry {
    fn from(entry: Entry) -> Self {
        let kind = entry.entry_type().as_str().to_string();
        let (base, discharge, health_check_rating, employer_name, sick_leave) = match entry {
            Entry::Hospital(e) => (e.base, Some(e.discharge), None, None, None),
            Entry::HealthCheck(e) => (e.base, None, Some(e.health_check_rating), None, None),
            Entry::OccupationalHealthcare(e) => {
                (e.base, None, None, Some(e.employer_name), e.sick_leave)
            }
        };

        RawEntry {
            id: base.id,
            date: base.date,
            description: base.description,
            specialist: base.specialist,
            diagnosis_codes: base.diagnosis_codes,
            kind,
            discharge,
            health_check_rating,
            employer_name,
            sick_leave,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_type_discriminants() {
        for entry_type in EntryType::all() {
            assert_eq!(EntryType::from_discriminant(entry_type.as_str()), Some(*entry_type));
        }
        assert_eq!(EntryType::from_discriminant("hospital"), None);
        assert_eq!(EntryType::from_discriminant("Dental"), None);
    }

    #[test]
    fn test_rating_nominal_range() {
        assert!(HealthCheckRating::HEALTHY.is_nominal());
        assert!(HealthCheckRating::CRITICAL_RISK.is_nominal());
        assert!(!HealthCheckRating(5).is_nominal());
        assert!(!HealthCheckRating(-1).is_nominal());
    }
}
