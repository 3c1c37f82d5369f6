use std::sync::Arc;
use serde_json::{json, Value};
use uuid::Uuid;

use shared_config::AppConfig;
use shared_models::{Diagnosis, Entry, Patient};

pub struct TestConfig {
    pub api_base_url: String,
}

impl Default for TestConfig {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:3001/api".to_string(),
        }
    }
}

impl TestConfig {
    /// Points the config at a mock server, e.g. `wiremock::MockServer::uri()`.
    pub fn with_base_url(url: impl Into<String>) -> Self {
        Self {
            api_base_url: url.into(),
        }
    }

    pub fn to_app_config(&self) -> AppConfig {
        AppConfig::new(self.api_base_url.clone())
    }

    pub fn to_arc(&self) -> Arc<AppConfig> {
        Arc::new(self.to_app_config())
    }
}

pub struct TestPatient {
    pub id: String,
    pub name: String,
    pub gender: String,
    pub occupation: String,
    pub ssn: Option<String>,
    pub entries: Vec<Value>,
}

impl Default for TestPatient {
    fn default() -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: "Test Patient".to_string(),
            gender: "other".to_string(),
            occupation: "Tester".to_string(),
            ssn: None,
            entries: Vec::new(),
        }
    }
}

impl TestPatient {
    pub fn new(id: &str, name: &str, gender: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            gender: gender.to_string(),
            ..Self::default()
        }
    }

    pub fn with_ssn(mut self, ssn: &str) -> Self {
        self.ssn = Some(ssn.to_string());
        self
    }

    pub fn with_entry(mut self, entry: Value) -> Self {
        self.entries.push(entry);
        self
    }

    /// List-view shape: no SSN, no entries.
    pub fn list_json(&self) -> Value {
        json!({
            "id": self.id,
            "name": self.name,
            "dateOfBirth": "1990-01-01",
            "gender": self.gender,
            "occupation": self.occupation
        })
    }

    /// Detail-view shape with SSN and entries.
    pub fn detail_json(&self) -> Value {
        let mut value = self.list_json();
        if let Some(ssn) = &self.ssn {
            value["ssn"] = json!(ssn);
        }
        value["entries"] = Value::Array(self.entries.clone());
        value
    }

    pub fn to_list_patient(&self) -> Patient {
        serde_json::from_value(self.list_json()).expect("fixture patient must parse")
    }

    pub fn to_patient(&self) -> Patient {
        serde_json::from_value(self.detail_json()).expect("fixture patient must parse")
    }
}

pub struct MockPatientorResponses;

impl MockPatientorResponses {
    pub fn hospital_entry(id: &str) -> Value {
        json!({
            "id": id,
            "date": "2015-01-02",
            "type": "Hospital",
            "specialist": "MD House",
            "diagnosisCodes": ["S62.5"],
            "description": "Healing time appr. 2 weeks.",
            "discharge": {
                "date": "2015-01-16",
                "criteria": "Thumb has healed."
            }
        })
    }

    pub fn health_check_entry(id: &str, rating: i64) -> Value {
        json!({
            "id": id,
            "date": "2019-10-20",
            "type": "HealthCheck",
            "specialist": "MD House",
            "description": "Yearly control visit.",
            "healthCheckRating": rating
        })
    }

    pub fn occupational_entry(id: &str, employer: &str) -> Value {
        json!({
            "id": id,
            "date": "2019-08-05",
            "type": "OccupationalHealthcare",
            "specialist": "MD House",
            "employerName": employer,
            "diagnosisCodes": ["Z57.1", "M51.2"],
            "description": "Nuclear plant waste site exposure.",
            "sickLeave": {
                "startDate": "2019-08-05",
                "endDate": "2019-08-28"
            }
        })
    }

    pub fn diagnoses() -> Value {
        json!([
            { "code": "M24.2", "name": "Disorder of ligament", "latin": "Morbositas ligamenti" },
            { "code": "M51.2", "name": "Other specified intervertebral disc displacement", "latin": "Alia dislocatio disci intervertebralis specificata" },
            { "code": "S62.5", "name": "Fracture of thumb", "latin": "Fractura [ossis] pollicis" },
            { "code": "Z57.1", "name": "Occupational exposure to radiation" }
        ])
    }

    pub fn error_response(message: &str) -> Value {
        json!({ "error": message })
    }
}

pub fn parse_entry(value: Value) -> Entry {
    Entry::from_value(value).expect("fixture entry must parse")
}

pub fn parse_diagnoses(value: Value) -> Vec<Diagnosis> {
    serde_json::from_value(value).expect("fixture diagnoses must parse")
}
