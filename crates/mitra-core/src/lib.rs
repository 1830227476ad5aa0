pub mod catalog;
pub mod config;
pub mod error;
pub mod i18n;
pub mod types;

pub use config::MitraConfig;
pub use error::{MitraError, Result};
pub use i18n::TextKey;
pub use types::*;
