use super::super::{ChatConfig, GatewayConfig, MetricsConfig, ObservabilityConfig};
use crate::core::metrics::BloodPressure;
use crate::error::ConfigError;
use directories::UserDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Path to config.toml - computed from home, not serialized
    #[serde(skip)]
    pub config_path: PathBuf,

    #[serde(default)]
    pub gateway: GatewayConfig,

    #[serde(default)]
    pub chat: ChatConfig,

    #[serde(default)]
    pub metrics: MetricsConfig,

    #[serde(default)]
    pub observability: ObservabilityConfig,
}

impl Default for Config {
    fn default() -> Self {
        let home =
            UserDirs::new().map_or_else(|| PathBuf::from("."), |u| u.home_dir().to_path_buf());

        Self {
            config_path: home.join(".virtum").join("config.toml"),
            gateway: GatewayConfig::default(),
            chat: ChatConfig::default(),
            metrics: MetricsConfig::default(),
            observability: ObservabilityConfig::default(),
        }
    }
}

impl Config {
    /// Reject settings the engine cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let baseline = &self.metrics.baseline;
        baseline
            .blood_pressure
            .parse::<BloodPressure>()
            .map_err(|e| ConfigError::Validation(format!("metrics.baseline: {e}")))?;

        for (name, value) in [
            ("metrics.baseline.water_intake_liters", baseline.water_intake_liters),
            ("metrics.baseline.oxygen", baseline.oxygen),
            ("metrics.baseline.temperature", baseline.temperature),
            ("metrics.jitter.heart_rate_width", self.metrics.jitter.heart_rate_width),
            ("metrics.jitter.steps_width", self.metrics.jitter.steps_width),
            ("metrics.jitter.water_max_added", self.metrics.jitter.water_max_added),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::Validation(format!(
                    "{name} must be a non-negative number, got {value}"
                )));
            }
        }

        let threshold = self.chat.similarity_threshold;
        if !(0.0..=1.0).contains(&threshold) {
            return Err(ConfigError::Validation(format!(
                "chat.similarity_threshold must be within [0, 1], got {threshold}"
            )));
        }

        self.observability.level()?;
        Ok(())
    }
}
