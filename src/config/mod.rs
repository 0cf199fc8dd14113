mod loader;
mod types;

pub use loader::{ConfigError, MAX_SLOTS};
pub use types::{CompanionConfig, Config, DisplayConfig};
