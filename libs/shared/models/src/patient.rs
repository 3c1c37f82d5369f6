use std::collections::HashSet;

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

use crate::entry::Entry;
use crate::error::EntryError;

pub type PatientId = String;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
            Gender::Other => "other",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Patient {
    pub id: PatientId,
    pub name: String,
    pub gender: Gender,
    /// Withheld by the list view.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ssn: Option<String>,
    pub date_of_birth: NaiveDate,
    pub occupation: String,
    /// Medical chronology as received. Empty until the detail view has been fetched.
    #[serde(default, deserialize_with = "deserialize_entries")]
    pub entries: Vec<Entry>,
}

impl Patient {
    pub fn entry(&self, entry_id: &str) -> Option<&Entry> {
        self.entries.iter().find(|entry| entry.id() == entry_id)
    }

    pub fn validate(&self) -> Result<(), EntryError> {
        ensure_unique_entry_ids(&self.entries)
    }
}

pub fn ensure_unique_entry_ids(entries: &[Entry]) -> Result<(), EntryError> {
    let mut seen = HashSet::with_capacity(entries.len());
    for entry in entries {
        if !seen.insert(entry.id()) {
            return Err(EntryError::DuplicateId(entry.id().to_string()));
        }
    }
    Ok(())
}

fn deserialize_entries<'de, D>(deserializer: D) -> Result<Vec<Entry>, D::Error>
where
    D: Deserializer<'de>,
{
    let entries = Vec::<Entry>::deserialize(deserializer)?;
    ensure_unique_entry_ids(&entries).map_err(serde::de::Error::custom)?;
    Ok(entries)
}
