use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObservabilityConfig {
    /// "trace" | "debug" | "info" | "warn" | "error"
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// How much of each chat reply is echoed into the request log
    #[serde(default = "default_reply_log_chars")]
    pub reply_log_chars: usize,
}

fn default_log_level() -> String {
    "info".into()
}

fn default_reply_log_chars() -> usize {
    150
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            reply_log_chars: default_reply_log_chars(),
        }
    }
}

impl ObservabilityConfig {
    pub fn level(&self) -> Result<tracing::Level, ConfigError> {
        tracing::Level::from_str(self.log_level.trim()).map_err(|_| {
            ConfigError::Validation(format!("unknown log level {:?}", self.log_level))
        })
    }
}
