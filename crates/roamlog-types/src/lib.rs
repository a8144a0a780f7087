pub mod api;
pub mod block;
pub mod editor;
pub mod error;
pub mod journal;
pub mod theme;

pub use api::*;
pub use block::*;
pub use editor::*;
pub use error::{Error, Result};
pub use journal::*;
pub use theme::*;
