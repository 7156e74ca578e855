use std::env;

use serde::{Deserialize, Serialize};

/// What happens to the active sort when the list is reloaded
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RefreshPolicy {
    /// Back to "Original" order
    #[default]
    Reset,
    /// Keep key and direction and reorder the fresh records
    Preserve,
}

impl RefreshPolicy {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "reset" => Some(RefreshPolicy::Reset),
            "preserve" | "keep" => Some(RefreshPolicy::Preserve),
            _ => None,
        }
    }
}

#[derive(Debug, Default, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct WordListConfig {
    pub refresh: RefreshPolicy,
}

impl WordListConfig {
    pub fn new() -> Self {
        let refresh = env::var("REFRESH_SORT")
            .ok()
            .and_then(|v| RefreshPolicy::parse(&v))
            .unwrap_or_default();

        Self { refresh }
    }
}
