pub mod sync;
pub mod view;

pub use sync::*;
pub use view::*;
