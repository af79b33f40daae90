//! Command-line interface.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::config::{CliOverrides, TriggerModeKind};

/// Live sentiment analysis in the terminal.
#[derive(Debug, Parser)]
#[command(name = "sentiscope", version, about)]
pub struct Cli {
    /// Config file (default: <config dir>/sentiscope/config.toml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Root URL of the classification service
    #[arg(long, value_name = "URL")]
    pub api_base_url: Option<String>,

    /// Endpoint path, e.g. /predict or /sentiment
    #[arg(long, value_name = "PATH")]
    pub endpoint: Option<String>,

    /// When edits trigger a request
    #[arg(long, value_enum)]
    pub trigger: Option<TriggerArg>,

    /// Quiet period before a debounced request
    #[arg(long, value_name = "MS")]
    pub debounce_ms: Option<u64>,

    /// Per-request timeout
    #[arg(long, value_name = "MS")]
    pub timeout_ms: Option<u64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TriggerArg {
    Immediate,
    Debounced,
}

impl From<TriggerArg> for TriggerModeKind {
    fn from(arg: TriggerArg) -> Self {
        match arg {
            TriggerArg::Immediate => TriggerModeKind::Immediate,
            TriggerArg::Debounced => TriggerModeKind::Debounced,
        }
    }
}

impl Cli {
    pub fn overrides(&self) -> CliOverrides {
        CliOverrides {
            api_base_url: self.api_base_url.clone(),
            endpoint_path: self.endpoint.clone(),
            trigger_mode: self.trigger.map(Into::into),
            debounce_ms: self.debounce_ms,
            timeout_ms: self.timeout_ms,
        }
    }
}
