//! Host-side services for roamlog: configuration, the theme catalog and
//! local draft sessions.

pub mod catalog;
pub mod config;
pub mod error;
pub mod session;

pub use catalog::{BundledFonts, ThemeCatalog};
pub use config::{resolve_config_path, Config};
pub use error::{Error, Result};
pub use session::DraftSession;
