use unicode_normalization::UnicodeNormalization;

pub trait Preprocessor {
    // Default input cleanup before translation
    fn process(&self, text: &str) -> String {
        let text = text.trim();

        if text.is_empty() {
            return String::new();
        }

        // Canonical composition only; NFKC would rewrite full-width and
        // half-width kana the user typed on purpose
        text.nfc().collect()
    }
}

pub struct DefaultPreprocessor;
impl Preprocessor for DefaultPreprocessor {}
