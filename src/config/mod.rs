//! Application configuration: TOML file with tolerant loading.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{Config, SheetConfig};
