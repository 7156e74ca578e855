use kanal::AsyncSender;
use tango_backend::WordBackend;
use tango_core::WordList;
use tango_types::{AppEvent, SortKey};

use super::{Screens, notify_error};
use crate::state::AppState;

/// Fetch the list. A first load starts in original order; a refresh of an
/// already loaded list follows the configured refresh policy.
pub async fn handle_words_load(
    state: &AppState,
    backend: &dyn WordBackend,
    screens: &mut Screens,
    refresh: bool,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let records = match backend.fetch_words().await {
        Ok(records) => records,
        Err(e) => {
            tracing::error!("Failed to load words: {}", e);
            return notify_error(app_to_ui_tx, "Failed to load words").await;
        }
    };

    tracing::info!("Loaded {} words", records.len());

    if refresh && screens.word_list_loaded {
        let policy = state.config.read().await.word_list.refresh;
        tracing::debug!("Refreshing word list with {:?} policy", policy);
        screens.word_list.refresh(records, policy);
    } else {
        screens.word_list.load(records);
        screens.word_list_loaded = true;
    }

    app_to_ui_tx
        .send(AppEvent::ShowWordList(screens.word_list.view()))
        .await?;

    Ok(())
}

pub async fn handle_word_sort(
    word_list: &mut WordList,
    key: SortKey,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let sort = word_list.sort_by(key);
    tracing::debug!("Sorted {} words by {:?}", word_list.len(), sort);

    app_to_ui_tx
        .send(AppEvent::ShowWordList(word_list.view()))
        .await?;

    Ok(())
}

pub async fn handle_word_delete(
    backend: &dyn WordBackend,
    word_list: &mut WordList,
    id: i64,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    if let Err(e) = backend.delete_word(id).await {
        tracing::error!("Error deleting word {}: {}", id, e);
        return notify_error(app_to_ui_tx, "Failed to delete").await;
    }

    match word_list.remove(id) {
        Some(_) => tracing::info!("Deleted word id={}", id),
        None => tracing::warn!("Deleted word id={} was not in the list", id),
    }

    app_to_ui_tx
        .send(AppEvent::ShowWordList(word_list.view()))
        .await?;

    Ok(())
}
