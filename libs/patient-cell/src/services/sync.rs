use tokio::task::JoinHandle;
use tracing::{debug, error, info, instrument, warn};

use shared_client::{FetchError, PatientorClient};
use shared_config::AppConfig;
use state_cell::{set_diagnosis_list, set_patient_list, update_patient, Dispatcher, Store};

/// Outcome of the start-up fetches. `None` means the fetch failed and nothing was dispatched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadSummary {
    pub patients: Option<usize>,
    pub diagnoses: Option<usize>,
}

/// Fetches from the remote patient service and feeds results into the store.
///
/// A failed fetch is logged here and dispatches nothing, so the store never holds a
/// partially applied result.
#[derive(Debug, Clone)]
pub struct PatientSyncService {
    client: PatientorClient,
    dispatcher: Dispatcher,
}

impl PatientSyncService {
    pub fn new(config: &AppConfig, store: &Store) -> Self {
        Self::with_client(PatientorClient::new(config), store.dispatcher())
    }

    pub fn with_client(client: PatientorClient, dispatcher: Dispatcher) -> Self {
        Self { client, dispatcher }
    }

    #[instrument(skip(self))]
    pub async fn ping(&self) {
        match self.client.ping().await {
            Ok(()) => debug!("Patient service is reachable at {}", self.client.base_url()),
            Err(e) => warn!("Patient service ping failed: {}", e),
        }
    }

    #[instrument(skip(self))]
    pub async fn load_patient_list(&self) -> Result<usize, FetchError> {
        let patients = self.client.get_patients().await.map_err(|e| {
            error!("Failed to fetch patient list: {}", e);
            e
        })?;

        let count = patients.len();
        self.dispatcher.dispatch(set_patient_list(patients));
        info!("Fetched {} patients", count);
        Ok(count)
    }

    /// Promotes the stored list-view record to the full detail record.
    #[instrument(skip(self))]
    pub async fn load_patient(&self, patient_id: &str) -> Result<(), FetchError> {
        let patient = self.client.get_patient(patient_id).await.map_err(|e| {
            error!("Failed to fetch patient {}: {}", patient_id, e);
            e
        })?;

        debug!("Fetched patient {} with {} entries", patient.id, patient.entries.len());
        self.dispatcher.dispatch(update_patient(patient));
        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn load_diagnosis_list(&self) -> Result<usize, FetchError> {
        let diagnoses = self.client.get_diagnoses().await.map_err(|e| {
            error!("Failed to fetch diagnosis list: {}", e);
            e
        })?;

        let count = diagnoses.len();
        self.dispatcher.dispatch(set_diagnosis_list(diagnoses));
        info!("Fetched {} diagnoses", count);
        Ok(count)
    }

    /// Ping plus both list fetches, issued concurrently. Each list dispatches on its own as
    /// soon as it arrives.
    pub async fn load_initial(&self) -> LoadSummary {
        let ((), patients, diagnoses) = tokio::join!(
            self.ping(),
            self.load_patient_list(),
            self.load_diagnosis_list()
        );

        LoadSummary {
            patients: patients.ok(),
            diagnoses: diagnoses.ok(),
        }
    }

    pub fn spawn_initial_load(&self) -> JoinHandle<LoadSummary> {
        let service = self.clone();
        tokio::spawn(async move { service.load_initial().await })
    }
}
