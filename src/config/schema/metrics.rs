use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MetricsConfig {
    #[serde(default)]
    pub baseline: MetricsBaseline,
    #[serde(default)]
    pub jitter: JitterConfig,
}

/// Reading every snapshot starts from before jitter is applied.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricsBaseline {
    #[serde(default = "default_heart_rate")]
    pub heart_rate: u32,
    /// "systolic/diastolic" in mmHg
    #[serde(default = "default_blood_pressure")]
    pub blood_pressure: String,
    #[serde(default = "default_steps")]
    pub steps: u32,
    #[serde(default = "default_water_intake_liters")]
    pub water_intake_liters: f64,
    #[serde(default = "default_oxygen")]
    pub oxygen: f64,
    #[serde(default = "default_temperature")]
    pub temperature: f64,
    #[serde(default = "default_insight")]
    pub insight: String,
}

fn default_heart_rate() -> u32 {
    74
}

fn default_blood_pressure() -> String {
    "118/76".into()
}

fn default_steps() -> u32 {
    6500
}

fn default_water_intake_liters() -> f64 {
    1.8
}

fn default_oxygen() -> f64 {
    97.0
}

fn default_temperature() -> f64 {
    36.6
}

fn default_insight() -> String {
    "Your health metrics are within normal ranges.".into()
}

impl Default for MetricsBaseline {
    fn default() -> Self {
        Self {
            heart_rate: default_heart_rate(),
            blood_pressure: default_blood_pressure(),
            steps: default_steps(),
            water_intake_liters: default_water_intake_liters(),
            oxygen: default_oxygen(),
            temperature: default_temperature(),
            insight: default_insight(),
        }
    }
}

/// Full widths of the symmetric jitter windows (a width of 8 gives ±4).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JitterConfig {
    #[serde(default = "default_heart_rate_width")]
    pub heart_rate_width: f64,
    #[serde(default = "default_steps_width")]
    pub steps_width: f64,
    /// Water only ever drifts upwards, by up to this many litres.
    #[serde(default = "default_water_max_added")]
    pub water_max_added: f64,
}

fn default_heart_rate_width() -> f64 {
    8.0
}

fn default_steps_width() -> f64 {
    1200.0
}

fn default_water_max_added() -> f64 {
    0.3
}

impl Default for JitterConfig {
    fn default() -> Self {
        Self {
            heart_rate_width: default_heart_rate_width(),
            steps_width: default_steps_width(),
            water_max_added: default_water_max_added(),
        }
    }
}
