pub mod error;
pub mod patientor;

pub use error::FetchError;
pub use patientor::PatientorClient;
