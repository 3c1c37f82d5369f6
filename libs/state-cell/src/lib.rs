pub mod actions;
pub mod reducer;
pub mod store;

pub use actions::*;
pub use reducer::*;
pub use store::*;
