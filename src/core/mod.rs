// Chat engine core: metrics snapshots, intent matching and reply rendering.
// Nothing in here performs I/O; the gateway and CLI drive it.

pub mod chat;
pub mod entropy;
pub mod metrics;

pub use chat::ChatEngine;
pub use entropy::{Entropy, ScriptedEntropy, ThreadEntropy};
pub use metrics::{BloodPressure, JitteredMetrics, MetricsSnapshot, MetricsSource};
