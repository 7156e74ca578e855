use std::env;

use serde::{Deserialize, Serialize};

fn default_swipe_threshold() -> f32 {
    100.0
}

fn default_shuffle() -> bool {
    true
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct ReviewConfig {
    /// Minimum horizontal drag, in points, that counts as a swipe
    #[serde(default = "default_swipe_threshold")]
    pub swipe_threshold: f32,
    /// Shuffle the deck when a review session starts
    #[serde(default = "default_shuffle")]
    pub shuffle: bool,
}

impl Default for ReviewConfig {
    fn default() -> Self {
        Self {
            swipe_threshold: default_swipe_threshold(),
            shuffle: default_shuffle(),
        }
    }
}

impl ReviewConfig {
    pub fn new() -> Self {
        let swipe_threshold = env::var("SWIPE_THRESHOLD")
            .ok()
            .and_then(|v| v.parse::<f32>().ok())
            .filter(|v| v.is_finite() && *v > 0.0)
            .unwrap_or_else(default_swipe_threshold);

        let shuffle = env::var("SHUFFLE_CARDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_shuffle);

        Self {
            swipe_threshold,
            shuffle,
        }
    }
}
