use std::env;
use tracing::warn;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3001/api";
pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:3000";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api_base_url: String,
    pub bind_address: String,
    api_base_url_set: bool,
}

impl AppConfig {
    /// Builds a config pointing at an explicit patient service, e.g. a mock server in tests.
    pub fn new(api_base_url: impl Into<String>) -> Self {
        Self {
            api_base_url: normalize_base_url(api_base_url.into()),
            bind_address: DEFAULT_BIND_ADDRESS.to_string(),
            api_base_url_set: true,
        }
    }

    pub fn from_env() -> Self {
        let (api_base_url, api_base_url_set) = match env::var("PATIENTOR_API_BASE_URL") {
            Ok(url) if !url.trim().is_empty() => (url, true),
            _ => {
                warn!("PATIENTOR_API_BASE_URL not set, using default");
                (DEFAULT_API_BASE_URL.to_string(), false)
            }
        };

        let bind_address = env::var("PATIENTOR_BIND_ADDRESS")
            .unwrap_or_else(|_| {
                warn!("PATIENTOR_BIND_ADDRESS not set, using default");
                DEFAULT_BIND_ADDRESS.to_string()
            });

        let config = Self {
            api_base_url: normalize_base_url(api_base_url),
            bind_address,
            api_base_url_set,
        };

        if !config.is_configured() {
            warn!("Application not fully configured - falling back to local patient service");
        }

        config
    }

    pub fn with_bind_address(mut self, bind_address: impl Into<String>) -> Self {
        self.bind_address = bind_address.into();
        self
    }

    pub fn is_configured(&self) -> bool {
        self.api_base_url_set && !self.api_base_url.is_empty()
    }
}

fn normalize_base_url(url: String) -> String {
    url.trim().trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_trims_trailing_slashes() {
        let config = AppConfig::new("http://localhost:3001/api//");
        assert_eq!(config.api_base_url, "http://localhost:3001/api");
        assert!(config.is_configured());
    }

    #[test]
    fn test_with_bind_address() {
        let config = AppConfig::new("http://localhost:3001/api").with_bind_address("127.0.0.1:8080");
        assert_eq!(config.bind_address, "127.0.0.1:8080");
    }
}
