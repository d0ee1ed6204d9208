//! Rule-based health chat.
//!
//! A message is classified into independent topic flags, the first raised
//! topic in [`ROUTES`] renders the reply, and anything unmatched falls
//! through to a rotating summary that avoids echoing the previous reply.

pub mod history;
pub mod intent;
pub mod similarity;
mod templates;

pub use history::RecentReplies;
pub use intent::{IntentFlags, classify};
pub use similarity::similarity;
pub use templates::{HeartTier, PressureTier};

use crate::config::ChatConfig;
use crate::error::ChatError;
use std::sync::Arc;

use super::entropy::{Entropy, ThreadEntropy};
use super::metrics::MetricsSnapshot;

/// Reply branch, in priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum Topic {
    Greeting,
    BloodPressure,
    HeartRate,
    Steps,
    Water,
    Oxygen,
    Temperature,
    GeneralHealth,
    AllMetrics,
    Recommendation,
    Fallback,
}

impl Topic {
    /// Whether `flags` raise this topic. The fallback is never raised
    /// directly; it is what remains when nothing else is.
    pub fn is_raised(self, flags: &IntentFlags) -> bool {
        match self {
            Self::Greeting => flags.greeting,
            Self::BloodPressure => flags.blood_pressure,
            Self::HeartRate => flags.heart_rate,
            Self::Steps => flags.steps,
            Self::Water => flags.water,
            Self::Oxygen => flags.oxygen,
            Self::Temperature => flags.temperature,
            Self::GeneralHealth => flags.general_health,
            Self::AllMetrics => flags.all_metrics,
            Self::Recommendation => flags.recommendation,
            Self::Fallback => false,
        }
    }
}

type Render = fn(&MetricsSnapshot, &dyn Entropy) -> Result<String, ChatError>;

/// First raised entry wins.
static ROUTES: [(Topic, Render); 10] = [
    (Topic::Greeting, templates::greeting),
    (Topic::BloodPressure, templates::blood_pressure),
    (Topic::HeartRate, templates::heart_rate),
    (Topic::Steps, templates::steps),
    (Topic::Water, templates::water),
    (Topic::Oxygen, templates::oxygen),
    (Topic::Temperature, templates::temperature),
    (Topic::GeneralHealth, templates::general_health),
    (Topic::AllMetrics, templates::all_metrics),
    (Topic::Recommendation, templates::recommendation),
];

fn lookup(flags: &IntentFlags) -> Option<&'static (Topic, Render)> {
    ROUTES.iter().find(|(topic, _)| topic.is_raised(flags))
}

/// The topic that will answer a message with these flags.
pub fn route(flags: &IntentFlags) -> Topic {
    lookup(flags).map_or(Topic::Fallback, |(topic, _)| *topic)
}

/// Pick one of `candidates`, steering away from text too close to `last`.
///
/// With an empty `last` or a first pick at or under `threshold`, the first
/// pick stands. Otherwise the pick is redrawn from the candidates strictly
/// under `threshold`; if none qualify the first pick is kept, so a reply is
/// always returned.
pub fn avoid_repetition(
    candidates: &[String],
    last: &str,
    threshold: f64,
    entropy: &dyn Entropy,
) -> String {
    let Some(first) = candidates.get(entropy.index(candidates.len())) else {
        return String::new();
    };
    if last.is_empty() || similarity(first, last) <= threshold {
        return first.clone();
    }

    let fresh: Vec<&String> = candidates
        .iter()
        .filter(|c| similarity(c, last) < threshold)
        .collect();
    if fresh.is_empty() {
        return first.clone();
    }
    fresh[entropy.index(fresh.len())].clone()
}

/// Turns messages into replies and remembers what it said.
pub struct ChatEngine {
    history: RecentReplies,
    entropy: Arc<dyn Entropy>,
    similarity_threshold: f64,
}

impl ChatEngine {
    pub fn new(config: &ChatConfig) -> Self {
        Self::with_entropy(config, Arc::new(ThreadEntropy))
    }

    pub fn with_entropy(config: &ChatConfig, entropy: Arc<dyn Entropy>) -> Self {
        Self {
            history: RecentReplies::new(config.max_recent_responses),
            entropy,
            similarity_threshold: config.similarity_threshold,
        }
    }

    pub fn history(&self) -> &RecentReplies {
        &self.history
    }

    /// Answer `message` against `metrics`.
    ///
    /// The reply is appended to the recent-reply history. Fails only when
    /// the snapshot's blood pressure reading cannot be parsed and the
    /// blood pressure topic was chosen; nothing is recorded in that case.
    pub fn respond(&self, message: &str, metrics: &MetricsSnapshot) -> Result<String, ChatError> {
        let flags = classify(message);
        tracing::debug!(topics = ?flags.topics(), "Classified chat message");

        let topic = route(&flags);
        tracing::info!(topic = %topic, "Answering chat message");

        let entropy = self.entropy.as_ref();
        self.history.record(|last| match lookup(&flags) {
            Some((_, render)) => render(metrics, entropy),
            None => Ok(avoid_repetition(
                &templates::summaries(metrics),
                last,
                self.similarity_threshold,
                entropy,
            )),
        })
    }
}
