//! Request and response bodies of the word service

use serde::{Deserialize, Serialize};
use tango_types::Translation;

use crate::error::BackendError;

#[derive(Debug, Serialize)]
pub(crate) struct TranslateRequest<'a> {
    pub text: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<&'a str>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TranslateResponse {
    source_language: Option<String>,
    target_language: Option<String>,
    translated_text: Option<String>,
    error: Option<String>,
}

impl TranslateResponse {
    pub fn into_translation(self) -> Result<Translation, BackendError> {
        if let Some(error) = self.error {
            return Err(BackendError::Rejected(error));
        }

        let text = self
            .translated_text
            .ok_or_else(|| BackendError::InvalidResponse("No translated_text".to_string()))?;

        Ok(Translation {
            text,
            from_lang: self.source_language,
            to_lang: self.target_language,
        })
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct SaveResponse {
    status: Option<String>,
    message: Option<String>,
    id: Option<i64>,
}

impl SaveResponse {
    pub fn into_id(self) -> Result<i64, BackendError> {
        if self.status.as_deref() != Some("success") {
            return Err(BackendError::Rejected(
                self.message.unwrap_or_else(|| "Fail to save the word".to_string()),
            ));
        }

        self.id
            .ok_or_else(|| BackendError::InvalidResponse("Saved word has no id".to_string()))
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct IdRequest {
    pub id: i64,
}

#[derive(Debug, Serialize)]
pub(crate) struct KnownRequest {
    pub id: i64,
    /// Stored as an integer column
    pub known: u8,
}

/// `/update_known` answers with `status`, `/delete_word` with `success`
#[derive(Debug, Deserialize)]
pub(crate) struct AckResponse {
    status: Option<String>,
    success: Option<bool>,
    message: Option<String>,
}

impl AckResponse {
    pub fn into_result(self) -> Result<(), BackendError> {
        let accepted = match (self.status.as_deref(), self.success) {
            (Some(status), _) => status == "success",
            (None, Some(success)) => success,
            (None, None) => {
                return Err(BackendError::InvalidResponse(
                    "Neither status nor success in response".to_string(),
                ));
            }
        };

        if accepted {
            Ok(())
        } else {
            Err(BackendError::Rejected(
                self.message.unwrap_or_else(|| "Request failed".to_string()),
            ))
        }
    }
}

/// Body of a non-success response
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    error: Option<String>,
    message: Option<String>,
}

impl ErrorBody {
    pub fn message(self) -> Option<String> {
        self.error.or(self.message)
    }
}
