use std::env;

use serde::{Deserialize, Serialize};

fn default_url() -> String {
    "http://localhost:5000".to_string()
}

fn default_timeout_seconds() -> u64 {
    10
}

fn default_source_lang() -> String {
    "auto".to_string()
}

fn default_target_lang() -> String {
    "auto".to_string()
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct BackendConfig {
    /// Base URL of the word service, without trailing slash
    #[serde(default = "default_url")]
    pub url: String,
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
    /// Sent as `source` on `/translate`; "auto" lets the service detect it
    #[serde(default = "default_source_lang")]
    pub source_lang: String,
    /// Sent as `target` on `/translate`; "auto" picks ja<->en
    #[serde(default = "default_target_lang")]
    pub target_lang: String,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
            timeout_seconds: default_timeout_seconds(),
            source_lang: default_source_lang(),
            target_lang: default_target_lang(),
        }
    }
}

impl BackendConfig {
    pub fn new() -> Self {
        let url = env::var("BACKEND_URL").unwrap_or_else(|_| default_url());

        let timeout_seconds = env::var("REQUEST_TIMEOUT_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_timeout_seconds);

        Self {
            url: url.trim_end_matches('/').to_string(),
            timeout_seconds,
            ..Self::default()
        }
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}
