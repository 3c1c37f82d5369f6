pub mod context;
pub mod handlers;
pub mod models;
pub mod router;
pub mod services;

pub use context::*;
pub use handlers::*;
pub use models::*;
pub use router::*;
