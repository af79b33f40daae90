use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::trigger::TriggerMode;

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub service: ServiceConfig,
    #[serde(default)]
    pub trigger: TriggerConfig,
}

/// Where the classification service lives and how long to wait for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Root used to build the endpoint URL (e.g., "http://localhost:8000").
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    /// Path of the classification endpoint ("/predict" or "/sentiment").
    #[serde(default = "default_endpoint_path")]
    pub endpoint_path: String,
    /// Whole-request deadline in milliseconds (default: 10000).
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
    /// Connection deadline in milliseconds (default: 3000).
    #[serde(default = "default_connect_timeout_ms")]
    pub connect_timeout_ms: u64,
}

/// When edits turn into classification requests.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TriggerConfig {
    #[serde(default)]
    pub mode: TriggerModeKind,
    /// Quiet period before a debounced dispatch (default: 500).
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TriggerModeKind {
    Immediate,
    #[default]
    Debounced,
}

/// Values supplied on the command line; `None` keeps the file value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CliOverrides {
    pub api_base_url: Option<String>,
    pub endpoint_path: Option<String>,
    pub trigger_mode: Option<TriggerModeKind>,
    pub debounce_ms: Option<u64>,
    pub timeout_ms: Option<u64>,
}

fn default_api_base_url() -> String {
    "http://localhost:8000".to_string()
}

fn default_endpoint_path() -> String {
    "/predict".to_string()
}

fn default_timeout_ms() -> u64 {
    10_000
}

fn default_connect_timeout_ms() -> u64 {
    3_000
}

fn default_debounce_ms() -> u64 {
    500
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            endpoint_path: default_endpoint_path(),
            timeout_ms: default_timeout_ms(),
            connect_timeout_ms: default_connect_timeout_ms(),
        }
    }
}

impl Default for TriggerConfig {
    fn default() -> Self {
        Self {
            mode: TriggerModeKind::default(),
            debounce_ms: default_debounce_ms(),
        }
    }
}

impl ServiceConfig {
    /// Full URL of the classification endpoint.
    pub fn endpoint_url(&self) -> String {
        format!(
            "{}/{}",
            self.api_base_url.trim_end_matches('/'),
            self.endpoint_path.trim_start_matches('/')
        )
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_millis(self.connect_timeout_ms)
    }
}

impl Config {
    pub fn trigger_mode(&self) -> TriggerMode {
        match self.trigger.mode {
            TriggerModeKind::Immediate => TriggerMode::Immediate,
            TriggerModeKind::Debounced => TriggerMode::Debounced {
                window: Duration::from_millis(self.trigger.debounce_ms),
            },
        }
    }

    /// Layer command-line values over the loaded file.
    pub fn apply_overrides(&mut self, overrides: &CliOverrides) {
        if let Some(url) = &overrides.api_base_url {
            self.service.api_base_url = url.clone();
        }
        if let Some(path) = &overrides.endpoint_path {
            self.service.endpoint_path = path.clone();
        }
        if let Some(mode) = overrides.trigger_mode {
            self.trigger.mode = mode;
        }
        if let Some(ms) = overrides.debounce_ms {
            self.trigger.debounce_ms = ms;
        }
        if let Some(ms) = overrides.timeout_ms {
            self.service.timeout_ms = ms;
        }
    }
}
