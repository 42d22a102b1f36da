//! TOML configuration: API endpoint, lookup policy, UI and logging.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{ApiConfig, Config, LoggingConfig, LookupConfig, UiConfig};
