pub mod color;
pub mod model;
pub mod presets;

pub use color::*;
pub use model::*;
pub use presets::*;
