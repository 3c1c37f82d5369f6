pub mod diagnosis;
pub mod entry;
pub mod error;
pub mod patient;

pub use diagnosis::*;
pub use entry::*;
pub use error::*;
pub use patient::*;
