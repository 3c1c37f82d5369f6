use reqwest::{
    header::{HeaderMap, HeaderValue, ACCEPT},
    Client, Method, StatusCode,
};
use serde::de::DeserializeOwned;
use tracing::{debug, error, instrument};

use shared_config::AppConfig;
use shared_models::{Diagnosis, Patient};

use crate::error::FetchError;

/// Read-only client for the remote patient service.
#[derive(Debug, Clone)]
pub struct PatientorClient {
    client: Client,
    base_url: String,
}

impl PatientorClient {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            client: Client::new(),
            base_url: config.api_base_url.clone(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn get_headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers
    }

    async fn send(&self, path: &str) -> Result<reqwest::Response, FetchError> {
        let url = format!("{}{}", self.base_url, path);
        debug!("Making request to {}", url);

        let response = self
            .client
            .request(Method::GET, &url)
            .headers(self.get_headers())
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await?;
            error!("API error ({}): {}", status, error_text);

            return Err(match status {
                StatusCode::NOT_FOUND => FetchError::NotFound(path.to_string()),
                _ => FetchError::Api {
                    status,
                    body: error_text,
                },
            });
        }

        Ok(response)
    }

    async fn get<T>(&self, path: &str) -> Result<T, FetchError>
    where
        T: DeserializeOwned,
    {
        let response = self.send(path).await?;
        let data = response.json::<T>().await?;
        Ok(data)
    }

    /// Liveness check. The response body is never inspected.
    #[instrument(skip(self))]
    pub async fn ping(&self) -> Result<(), FetchError> {
        self.send("/ping").await?;
        Ok(())
    }

    /// List view: entries are usually omitted by the service.
    #[instrument(skip(self))]
    pub async fn get_patients(&self) -> Result<Vec<Patient>, FetchError> {
        self.get("/patients").await
    }

    #[instrument(skip(self))]
    pub async fn get_patient(&self, patient_id: &str) -> Result<Patient, FetchError> {
        let path = format!("/patients/{}", urlencoding::encode(patient_id));
        self.get(&path).await
    }

    #[instrument(skip(self))]
    pub async fn get_diagnoses(&self) -> Result<Vec<Diagnosis>, FetchError> {
        self.get("/diagnoses").await
    }
}
