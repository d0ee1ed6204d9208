mod chat;
mod core;
mod gateway;
mod metrics;
mod observability;

pub use chat::ChatConfig;
pub use self::core::Config;
pub use gateway::GatewayConfig;
pub use metrics::{JitterConfig, MetricsBaseline, MetricsConfig};
pub use observability::ObservabilityConfig;
