mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{CliOverrides, Config, ServiceConfig, TriggerConfig, TriggerModeKind};
