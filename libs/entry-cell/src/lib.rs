// =====================================================================================
// ENTRY CELL - PER-VARIANT DISPATCH OVER MEDICAL ENTRIES
// =====================================================================================

pub mod dispatch;
pub mod render;
pub mod severity;

pub use dispatch::*;
pub use render::*;
pub use severity::*;
