pub mod schema;

pub use schema::{
    ChatConfig, Config, GatewayConfig, JitterConfig, MetricsBaseline, MetricsConfig,
    ObservabilityConfig,
};
