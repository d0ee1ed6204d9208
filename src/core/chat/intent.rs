//! Keyword intent matching.
//!
//! Every flag is an independent case-insensitive pattern test, so one
//! message can raise several at once ("heart rate and steps"). Choosing
//! between them is the responder's job, not ours.

use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

use super::Topic;

struct IntentPatterns {
    greeting: Regex,
    general_health: Regex,
    heart_rate: Regex,
    steps: Regex,
    water: Regex,
    blood_pressure: Regex,
    oxygen: Regex,
    temperature: Regex,
    all_metrics: Regex,
    recommendation: Regex,
}

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|e| panic!("intent pattern {pattern:?} is invalid: {e}"))
}

static PATTERNS: LazyLock<IntentPatterns> = LazyLock::new(|| IntentPatterns {
    greeting: compile(r"(?i)^(hi|hello|hey|greetings)$"),
    general_health: compile(r"(?i)how (am i|are my)|my health|overall|status|summary|doing"),
    heart_rate: compile(r"(?i)heart|pulse|bpm|heartbeat"),
    steps: compile(r"(?i)steps|walk|activity|exercise|movement"),
    water: compile(r"(?i)water|hydrat|drink"),
    blood_pressure: compile(r"(?i)blood pressure|pressure|bp"),
    oxygen: compile(r"(?i)oxygen|spo2|o2"),
    temperature: compile(r"(?i)temperature|temp|fever"),
    all_metrics: compile(r"(?i)all metrics|everything|full report|complete"),
    recommendation: compile(r"(?i)recommend|advice|suggest|tip|should i|what to do"),
});

/// Topic flags raised by one message. Recomputed per message.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct IntentFlags {
    pub greeting: bool,
    pub general_health: bool,
    pub heart_rate: bool,
    pub steps: bool,
    pub water: bool,
    pub blood_pressure: bool,
    pub oxygen: bool,
    pub temperature: bool,
    pub all_metrics: bool,
    pub recommendation: bool,
}

impl IntentFlags {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Raised topics in priority order.
    pub fn topics(&self) -> Vec<Topic> {
        [
            (self.greeting, Topic::Greeting),
            (self.blood_pressure, Topic::BloodPressure),
            (self.heart_rate, Topic::HeartRate),
            (self.steps, Topic::Steps),
            (self.water, Topic::Water),
            (self.oxygen, Topic::Oxygen),
            (self.temperature, Topic::Temperature),
            (self.general_health, Topic::GeneralHealth),
            (self.all_metrics, Topic::AllMetrics),
            (self.recommendation, Topic::Recommendation),
        ]
        .into_iter()
        .filter_map(|(raised, topic)| raised.then_some(topic))
        .collect()
    }
}

/// Classify free text into topic flags. Never fails; empty input raises
/// nothing.
pub fn classify(message: &str) -> IntentFlags {
    let p = &*PATTERNS;
    let text = message.to_lowercase();

    IntentFlags {
        greeting: p.greeting.is_match(text.trim()),
        general_health: p.general_health.is_match(&text),
        heart_rate: p.heart_rate.is_match(&text),
        steps: p.steps.is_match(&text),
        water: p.water.is_match(&text),
        blood_pressure: p.blood_pressure.is_match(&text),
        oxygen: p.oxygen.is_match(&text),
        temperature: p.temperature.is_match(&text),
        all_metrics: p.all_metrics.is_match(&text),
        recommendation: p.recommendation.is_match(&text),
    }
}
