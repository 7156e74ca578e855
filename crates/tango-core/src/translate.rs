use tango_types::{NewWord, Translation};

use crate::error::FormError;
use crate::preprocess::{DefaultPreprocessor, Preprocessor};

const FALLBACK_SOURCE_LANG: &str = "en";
const FALLBACK_TARGET_LANG: &str = "ja";

/// State of the translate screen. The last translation is kept together
/// with the text it was made from, so a later request that fails can never
/// pair new input with an old result.
#[derive(Debug, Clone, Default)]
pub struct TranslateForm {
    /// Text of the request in flight
    pending: Option<String>,
    last: Option<(String, Translation)>,
}

impl TranslateForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a translation of `raw`. Returns the cleaned text to send, or
    /// `None` when there is nothing to translate.
    pub fn begin(&mut self, raw: &str) -> Option<String> {
        let text = DefaultPreprocessor.process(raw);
        if text.is_empty() {
            return None;
        }

        self.pending = Some(text.clone());
        Some(text)
    }

    pub fn complete(&mut self, translation: Translation) {
        if let Some(source) = self.pending.take() {
            self.last = Some((source, translation));
        }
    }

    /// The previous pair, if any, stays saveable
    pub fn fail(&mut self) {
        self.pending = None;
    }

    pub fn is_loading(&self) -> bool {
        self.pending.is_some()
    }

    pub fn translation(&self) -> Option<&Translation> {
        self.last.as_ref().map(|(_, t)| t)
    }

    /// Body for `/save_word` built from the last translated pair
    pub fn save_request(&self) -> Result<NewWord, FormError> {
        let (source, translation) = self
            .last
            .as_ref()
            .filter(|(s, t)| !s.trim().is_empty() && !t.text.trim().is_empty())
            .ok_or(FormError::NothingToSave)?;

        Ok(NewWord {
            source_text: source.clone(),
            translated_text: translation.text.clone(),
            source_lang: translation
                .from_lang
                .clone()
                .unwrap_or_else(|| FALLBACK_SOURCE_LANG.to_string()),
            target_lang: translation
                .to_lang
                .clone()
                .unwrap_or_else(|| FALLBACK_TARGET_LANG.to_string()),
        })
    }
}
