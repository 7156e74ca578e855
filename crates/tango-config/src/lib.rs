use std::env;

use serde::{Deserialize, Serialize};

use self::backend::BackendConfig;
use self::review::ReviewConfig;
use self::word_list::WordListConfig;

pub mod backend;
pub mod review;
pub mod word_list;

pub use word_list::RefreshPolicy;

fn default_channel_capacity() -> usize {
    64
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct Config {
    pub backend: BackendConfig,
    pub word_list: WordListConfig,
    pub review: ReviewConfig,

    /// Capacity of each UI <-> event loop channel
    #[serde(default = "default_channel_capacity")]
    pub channel_capacity: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            backend: BackendConfig::default(),
            word_list: WordListConfig::default(),
            review: ReviewConfig::default(),
            channel_capacity: default_channel_capacity(),
        }
    }
}

impl Config {
    /// Build the config from environment variables, falling back to defaults
    pub fn new() -> Self {
        let channel_capacity = env::var("CHANNEL_CAPACITY")
            .ok()
            .and_then(|v| v.parse().ok())
            .filter(|v| *v > 0)
            .unwrap_or_else(default_channel_capacity);

        Config {
            backend: BackendConfig::new(),
            word_list: WordListConfig::new(),
            review: ReviewConfig::new(),

            channel_capacity,
        }
    }
}
