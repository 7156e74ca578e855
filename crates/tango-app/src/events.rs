use std::sync::Arc;

use kanal::{AsyncReceiver, AsyncSender};
use tango_backend::WordBackend;
use tango_core::{FlashcardDeck, TranslateForm, WordList};
use tango_types::{AppEvent, Notice, UiEvent};
use tokio_util::sync::CancellationToken;

use crate::state::AppState;

pub mod flashcard;
pub mod translate;
pub mod word_list;

use flashcard::{handle_card_flip, handle_card_swipe, handle_cards_load};
use translate::{handle_save_word, handle_translate};
use word_list::{handle_word_delete, handle_word_sort, handle_words_load};

/// Screen state owned by the event loop
#[derive(Default)]
pub struct Screens {
    pub translate: TranslateForm,
    pub word_list: WordList,
    /// Set once the list has been fetched, so saved words can be appended
    pub word_list_loaded: bool,
    pub deck: Option<FlashcardDeck>,
}

/// App's main loop
pub async fn event_loop(
    state: Arc<AppState>,
    backend: Arc<dyn WordBackend>,
    ui_to_app_rx: AsyncReceiver<AppEvent>,
    app_to_ui_tx: AsyncSender<AppEvent>,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    let mut screens = Screens::default();

    app_to_ui_tx.send(AppEvent::BackendReady).await?;

    tracing::info!("[EVENT_LOOP] Starting main loop, waiting for events");
    loop {
        let event = tokio::select! {
            _ = cancel.cancelled() => break,
            event = ui_to_app_rx.recv() => event?,
        };

        if matches!(event, AppEvent::UiEvent(UiEvent::Close)) {
            tracing::info!("[EVENT_LOOP] Close requested");
            cancel.cancel();
            break;
        }

        handle_events(&state, backend.as_ref(), &mut screens, &app_to_ui_tx, event).await?;
    }

    Ok(())
}

pub async fn handle_events(
    state: &AppState,
    backend: &dyn WordBackend,
    screens: &mut Screens,
    app_to_ui_tx: &AsyncSender<AppEvent>,
    event: AppEvent,
) -> anyhow::Result<()> {
    let AppEvent::UiEvent(event) = event else {
        tracing::debug!("Ignoring non-UI event in event loop");
        return Ok(());
    };

    tracing::debug!("Handling {:?}", event);
    match event {
        UiEvent::Translate(text) => {
            handle_translate(state, backend, &mut screens.translate, text, app_to_ui_tx).await?;
        }
        UiEvent::SaveWord => {
            handle_save_word(backend, screens, app_to_ui_tx).await?;
        }
        UiEvent::LoadWords => {
            handle_words_load(state, backend, screens, false, app_to_ui_tx).await?;
        }
        UiEvent::RefreshWords => {
            handle_words_load(state, backend, screens, true, app_to_ui_tx).await?;
        }
        UiEvent::SortWords(key) => {
            handle_word_sort(&mut screens.word_list, key, app_to_ui_tx).await?;
        }
        UiEvent::DeleteWord(id) => {
            handle_word_delete(backend, &mut screens.word_list, id, app_to_ui_tx).await?;
        }
        UiEvent::LoadCards => {
            handle_cards_load(state, backend, &mut screens.deck, app_to_ui_tx).await?;
        }
        UiEvent::FlipCard => {
            handle_card_flip(&mut screens.deck, app_to_ui_tx).await?;
        }
        UiEvent::SwipeCard(displacement) => {
            handle_card_swipe(state, backend, &mut screens.deck, displacement, app_to_ui_tx)
                .await?;
        }
        UiEvent::Close => {}
    }

    Ok(())
}

pub(crate) async fn notify(
    app_to_ui_tx: &AsyncSender<AppEvent>,
    title: &str,
    message: impl Into<String>,
) -> anyhow::Result<()> {
    app_to_ui_tx
        .send(AppEvent::Notice(Notice::new(title, message)))
        .await?;
    Ok(())
}

pub(crate) async fn notify_error(
    app_to_ui_tx: &AsyncSender<AppEvent>,
    message: impl Into<String>,
) -> anyhow::Result<()> {
    app_to_ui_tx
        .send(AppEvent::Notice(Notice::error(message)))
        .await?;
    Ok(())
}
