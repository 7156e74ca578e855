use serde::{Deserialize, Serialize};

/// Result of a `/translate` call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Translation {
    pub text: String,
    /// Language the service detected or was told, e.g. "ja"
    pub from_lang: Option<String>,
    pub to_lang: Option<String>,
}

/// Body of `/save_word`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewWord {
    pub source_text: String,
    pub translated_text: String,
    pub source_lang: String,
    pub target_lang: String,
}
