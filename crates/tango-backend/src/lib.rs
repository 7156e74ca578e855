mod client;
mod error;
mod wire;

pub use client::HttpBackend;
pub use error::BackendError;

use tango_types::{NewWord, Translation, WordRecord};

/// Word service interface
#[async_trait::async_trait]
pub trait WordBackend: Send + Sync {
    /// All saved words, in storage order
    async fn fetch_words(&self) -> Result<Vec<WordRecord>, BackendError>;

    /// Translate text; `None` or "auto" lets the service pick the languages
    async fn translate(
        &self,
        text: &str,
        source: Option<&str>,
        target: Option<&str>,
    ) -> Result<Translation, BackendError>;

    /// Store a word pair and return the id the service assigned
    async fn save_word(&self, word: &NewWord) -> Result<i64, BackendError>;

    /// Mark a word as memorised or not
    async fn update_known(&self, id: i64, known: bool) -> Result<(), BackendError>;

    async fn delete_word(&self, id: i64) -> Result<(), BackendError>;
}
