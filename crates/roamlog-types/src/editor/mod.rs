pub mod block;
pub mod content;
pub mod data;
pub mod location;

pub use block::*;
pub use content::*;
pub use data::*;
pub use location::*;
