pub mod resolver;
pub mod typography;

pub use resolver::*;
pub use typography::*;
