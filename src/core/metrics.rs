//! Vital-sign snapshots.
//!
//! There is no sensor behind this demo: every snapshot is the configured
//! baseline with a little bounded noise applied to heart rate, steps and
//! water intake so consecutive readings look alive.

use crate::config::MetricsConfig;
use crate::error::ChatError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use super::entropy::{Entropy, ThreadEntropy};

/// One immutable reading of every tracked metric.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsSnapshot {
    pub heart_rate: u32,
    pub blood_pressure: String,
    pub steps: u32,
    pub water_intake_liters: f64,
    pub oxygen: f64,
    pub temperature: f64,
    pub insight: String,
}

impl MetricsSnapshot {
    pub fn blood_pressure(&self) -> Result<BloodPressure, ChatError> {
        self.blood_pressure.parse()
    }
}

/// Parsed "systolic/diastolic" reading in mmHg.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BloodPressure {
    pub systolic: u32,
    pub diastolic: u32,
}

impl FromStr for BloodPressure {
    type Err = ChatError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let malformed = || ChatError::MalformedBloodPressure(raw.to_string());
        let (systolic, diastolic) = raw.split_once('/').ok_or_else(malformed)?;
        Ok(Self {
            systolic: systolic.trim().parse().map_err(|_| malformed())?,
            diastolic: diastolic.trim().parse().map_err(|_| malformed())?,
        })
    }
}

impl fmt::Display for BloodPressure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.systolic, self.diastolic)
    }
}

/// Anything that can hand out a current reading.
pub trait MetricsSource: Send + Sync {
    fn snapshot(&self) -> MetricsSnapshot;
}

/// A fixed snapshot is a source that never changes.
impl MetricsSource for MetricsSnapshot {
    fn snapshot(&self) -> MetricsSnapshot {
        self.clone()
    }
}

/// Baseline plus bounded random jitter.
pub struct JitteredMetrics {
    config: MetricsConfig,
    entropy: Arc<dyn Entropy>,
}

impl JitteredMetrics {
    pub fn new(config: MetricsConfig) -> Self {
        Self::with_entropy(config, Arc::new(ThreadEntropy))
    }

    pub fn with_entropy(config: MetricsConfig, entropy: Arc<dyn Entropy>) -> Self {
        Self { config, entropy }
    }

    /// `value` shifted by a uniform offset in `[-width/2, width/2)`, rounded,
    /// floored at zero.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn jitter(&self, value: u32, width: f64) -> u32 {
        let offset = self.entropy.unit() * width - width / 2.0;
        (f64::from(value) + offset).round().max(0.0) as u32
    }
}

impl MetricsSource for JitteredMetrics {
    fn snapshot(&self) -> MetricsSnapshot {
        let baseline = &self.config.baseline;
        let jitter = &self.config.jitter;

        // Draw order is heart rate, steps, water.
        let heart_rate = self.jitter(baseline.heart_rate, jitter.heart_rate_width);
        let steps = self.jitter(baseline.steps, jitter.steps_width);
        let water = baseline.water_intake_liters + self.entropy.unit() * jitter.water_max_added;
        let water = ((water * 10.0).round() / 10.0).max(0.0);

        MetricsSnapshot {
            heart_rate,
            blood_pressure: baseline.blood_pressure.clone(),
            steps,
            water_intake_liters: water,
            oxygen: baseline.oxygen,
            temperature: baseline.temperature,
            insight: baseline.insight.clone(),
        }
    }
}
