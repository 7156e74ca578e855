use kanal::AsyncSender;
use tango_backend::{BackendError, WordBackend};
use tango_core::TranslateForm;
use tango_types::{AppEvent, WordRecord};

use super::{Screens, notify, notify_error};
use crate::state::AppState;

pub async fn handle_translate(
    state: &AppState,
    backend: &dyn WordBackend,
    form: &mut TranslateForm,
    text: String,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let Some(text) = form.begin(&text) else {
        tracing::debug!("Empty input, nothing to translate");
        return Ok(());
    };

    app_to_ui_tx.send(AppEvent::TranslationPending).await?;

    let (source, target) = {
        let config = state.config.read().await;
        (
            config.backend.source_lang.clone(),
            config.backend.target_lang.clone(),
        )
    };

    match backend.translate(&text, Some(&source), Some(&target)).await {
        Ok(translation) => {
            tracing::info!(
                "Translated {} chars ({:?} -> {:?})",
                text.chars().count(),
                translation.from_lang,
                translation.to_lang
            );

            app_to_ui_tx
                .send(AppEvent::ShowTranslation {
                    source_text: text,
                    translated_text: translation.text.clone(),
                    from_lang: translation.from_lang.clone().unwrap_or_default(),
                    to_lang: translation.to_lang.clone().unwrap_or_default(),
                })
                .await?;
            form.complete(translation);
        }
        Err(e) => {
            tracing::error!("Translation failed: {}", e);
            form.fail();
            notify_error(app_to_ui_tx, "Translation failed").await?;
        }
    }

    Ok(())
}

pub async fn handle_save_word(
    backend: &dyn WordBackend,
    screens: &mut Screens,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let word = match screens.translate.save_request() {
        Ok(word) => word,
        Err(e) => return notify_error(app_to_ui_tx, e.to_string()).await,
    };

    match backend.save_word(&word).await {
        Ok(id) => {
            tracing::info!("Saved word id={}", id);

            if screens.word_list_loaded {
                let record = WordRecord {
                    id,
                    source_text: word.source_text,
                    translated_text: word.translated_text,
                    known: Some(false),
                    source_lang: Some(word.source_lang),
                    target_lang: Some(word.target_lang),
                };
                if !screens.word_list.append(record) {
                    tracing::warn!("Word id={} already in list", id);
                }
            }

            app_to_ui_tx.send(AppEvent::WordSaved { id }).await?;
            notify(app_to_ui_tx, "Saved!", "Success to save the word").await?;
        }
        Err(BackendError::Rejected(message)) => {
            tracing::warn!("Backend refused to save word: {}", message);
            notify_error(app_to_ui_tx, "Fail to save the word").await?;
        }
        Err(e) => {
            tracing::error!("Failed to save word: {}", e);
            notify_error(app_to_ui_tx, "Can't save!").await?;
        }
    }

    Ok(())
}
