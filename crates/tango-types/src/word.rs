use serde::{Deserialize, Deserializer, Serialize};

/// A saved word pair as stored by the backend.
///
/// Neither text field carries a language tag; which one is English and which
/// is Japanese is decided per record at display time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordRecord {
    pub id: i64,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub source_text: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub translated_text: String,
    /// `None` when the backend did not report the flag
    #[serde(
        default,
        deserialize_with = "known_flag",
        skip_serializing_if = "Option::is_none"
    )]
    pub known: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_lang: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_lang: Option<String>,
}

impl WordRecord {
    pub fn new(
        id: i64,
        source_text: impl Into<String>,
        translated_text: impl Into<String>,
    ) -> Self {
        Self {
            id,
            source_text: source_text.into(),
            translated_text: translated_text.into(),
            known: Some(false),
            source_lang: None,
            target_lang: None,
        }
    }

    pub fn with_known(mut self, known: Option<bool>) -> Self {
        self.known = known;
        self
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Shapes the backend has been seen to use for the `known` column
#[derive(Deserialize)]
#[serde(untagged)]
enum KnownFlag {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

fn known_flag<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    let flag = Option::<KnownFlag>::deserialize(deserializer)?;

    Ok(flag.and_then(|flag| match flag {
        KnownFlag::Bool(value) => Some(value),
        KnownFlag::Int(value) => Some(value != 0),
        KnownFlag::Float(value) => Some(value != 0.0),
        KnownFlag::Text(text) => match text.trim() {
            "1" | "true" => Some(true),
            "0" | "false" => Some(false),
            _ => None,
        },
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(json: &str) -> WordRecord {
        serde_json::from_str(json).expect("record should decode")
    }

    #[test]
    fn test_known_accepts_integer_and_bool() {
        let record = decode(r#"{"id":1,"source_text":"a","translated_text":"b","known":1}"#);
        assert_eq!(record.known, Some(true));

        let record = decode(r#"{"id":1,"source_text":"a","translated_text":"b","known":false}"#);
        assert_eq!(record.known, Some(false));

        let record = decode(r#"{"id":1,"source_text":"a","translated_text":"b","known":"0"}"#);
        assert_eq!(record.known, Some(false));
    }

    #[test]
    fn test_missing_known_is_absent() {
        // `/words` does not select the column
        let record = decode(
            r#"{"id":7,"source_text":"猫","translated_text":"cat",
                "source_lang":"ja","target_lang":"en"}"#,
        );
        assert_eq!(record.known, None);
        assert_eq!(record.source_lang.as_deref(), Some("ja"));

        let record = decode(r#"{"id":7,"source_text":"猫","translated_text":"cat","known":null}"#);
        assert_eq!(record.known, None);
    }

    #[test]
    fn test_null_text_becomes_empty() {
        let record = decode(r#"{"id":3,"source_text":null}"#);
        assert_eq!(record.source_text, "");
        assert_eq!(record.translated_text, "");
    }
}
