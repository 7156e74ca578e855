use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tango_config::backend::BackendConfig;
use tango_types::{NewWord, Translation, WordRecord};

use crate::error::BackendError;
use crate::wire::{
    AckResponse, ErrorBody, IdRequest, KnownRequest, SaveResponse, TranslateRequest,
    TranslateResponse,
};
use crate::WordBackend;

const TRACE_HEADER: &str = "X-ClientTraceId";

/// [`WordBackend`] over the service's HTTP/JSON API
#[derive(Clone)]
pub struct HttpBackend {
    config: BackendConfig,
    client: reqwest::Client,
}

impl HttpBackend {
    pub fn new(config: BackendConfig) -> Result<Self, BackendError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()?;

        Ok(Self { config, client })
    }

    async fn get<T>(&self, path: &str) -> Result<T, BackendError>
    where
        T: DeserializeOwned,
    {
        let trace_id = uuid::Uuid::new_v4();
        tracing::debug!(%trace_id, "GET {}", path);

        let response = self
            .client
            .get(self.config.endpoint(path))
            .header(TRACE_HEADER, trace_id.to_string())
            .send()
            .await?;

        Self::read(path, response).await
    }

    async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, BackendError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let trace_id = uuid::Uuid::new_v4();
        tracing::debug!(%trace_id, "POST {}", path);

        let response = self
            .client
            .post(self.config.endpoint(path))
            .header(TRACE_HEADER, trace_id.to_string())
            .json(body)
            .send()
            .await?;

        Self::read(path, response).await
    }

    async fn read<T>(path: &str, response: reqwest::Response) -> Result<T, BackendError>
    where
        T: DeserializeOwned,
    {
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ErrorBody>(&body)
                .ok()
                .and_then(ErrorBody::message)
                .unwrap_or_else(|| {
                    status
                        .canonical_reason()
                        .unwrap_or("request failed")
                        .to_string()
                });

            tracing::warn!("{} failed with HTTP {}: {}", path, status, message);
            return Err(BackendError::StatusError {
                status: status.as_u16(),
                message,
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|e| BackendError::InvalidResponse(format!("{path}: {e}")))
    }
}

/// "auto" and blank mean "let the service decide" and are not sent
fn explicit_lang(lang: Option<&str>) -> Option<&str> {
    lang.map(str::trim)
        .filter(|l| !l.is_empty() && !l.eq_ignore_ascii_case("auto"))
}

#[async_trait]
impl WordBackend for HttpBackend {
    async fn fetch_words(&self) -> Result<Vec<WordRecord>, BackendError> {
        let words: Vec<WordRecord> = self.get("/words").await?;
        tracing::debug!("Fetched {} words", words.len());
        Ok(words)
    }

    async fn translate(
        &self,
        text: &str,
        source: Option<&str>,
        target: Option<&str>,
    ) -> Result<Translation, BackendError> {
        let request = TranslateRequest {
            text,
            source: explicit_lang(source),
            target: explicit_lang(target),
        };

        let response: TranslateResponse = self.post("/translate", &request).await?;
        response.into_translation()
    }

    async fn save_word(&self, word: &NewWord) -> Result<i64, BackendError> {
        let response: SaveResponse = self.post("/save_word", word).await?;
        response.into_id()
    }

    async fn update_known(&self, id: i64, known: bool) -> Result<(), BackendError> {
        let request = KnownRequest {
            id,
            known: u8::from(known),
        };

        let response: AckResponse = self.post("/update_known", &request).await?;
        response.into_result()
    }

    async fn delete_word(&self, id: i64) -> Result<(), BackendError> {
        let response: AckResponse = self.post("/delete_word", &IdRequest { id }).await?;
        response.into_result()
    }
}
