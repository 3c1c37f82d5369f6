use shared_config::AppConfig;
use state_cell::Store;

use crate::services::PatientSyncService;

/// Shared by every patient view: the store to read from and the service that fills it.
#[derive(Debug, Clone)]
pub struct PatientContext {
    pub store: Store,
    pub sync: PatientSyncService,
}

impl PatientContext {
    pub fn new(config: &AppConfig) -> Self {
        Self::with_store(config, Store::new())
    }

    pub fn with_store(config: &AppConfig, store: Store) -> Self {
        let sync = PatientSyncService::new(config, &store);
        Self { store, sync }
    }
}
