use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatConfig {
    /// How many generated replies are kept for repetition avoidance (default: 5)
    #[serde(default = "default_max_recent_responses")]
    pub max_recent_responses: usize,
    /// Fallback candidates scoring above this against the last reply are
    /// considered repeats (default: 0.6)
    #[serde(default = "default_similarity_threshold")]
    pub similarity_threshold: f64,
}

fn default_max_recent_responses() -> usize {
    5
}

fn default_similarity_threshold() -> f64 {
    0.6
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            max_recent_responses: default_max_recent_responses(),
            similarity_threshold: default_similarity_threshold(),
        }
    }
}
