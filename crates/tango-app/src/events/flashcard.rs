use kanal::AsyncSender;
use tango_backend::WordBackend;
use tango_core::FlashcardDeck;
use tango_types::AppEvent;

use super::{notify, notify_error};
use crate::state::AppState;

const NO_DECK: &str = "Open the flashcards first";

pub async fn handle_cards_load(
    state: &AppState,
    backend: &dyn WordBackend,
    deck: &mut Option<FlashcardDeck>,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let cards = match backend.fetch_words().await {
        Ok(cards) => cards,
        Err(e) => {
            tracing::error!("Failed to load cards: {}", e);
            return notify_error(app_to_ui_tx, "Failed to load cards").await;
        }
    };

    let shuffle = state.config.read().await.review.shuffle;
    tracing::info!("Starting review of {} cards (shuffle={})", cards.len(), shuffle);

    let new_deck = if shuffle {
        FlashcardDeck::shuffled(cards, &mut rand::rng())
    } else {
        FlashcardDeck::new(cards)
    };

    let view = new_deck.current();
    *deck = Some(new_deck);

    app_to_ui_tx.send(AppEvent::ShowReview(view)).await?;
    Ok(())
}

pub async fn handle_card_flip(
    deck: &mut Option<FlashcardDeck>,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let Some(deck) = deck.as_mut() else {
        return notify(app_to_ui_tx, "Flashcards", NO_DECK).await;
    };

    deck.flip();
    app_to_ui_tx.send(AppEvent::ShowReview(deck.current())).await?;
    Ok(())
}

/// Counted swipes advance right away; the `known` update is sent afterwards
/// and a failure only produces a notice.
pub async fn handle_card_swipe(
    state: &AppState,
    backend: &dyn WordBackend,
    deck: &mut Option<FlashcardDeck>,
    displacement: f32,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let Some(deck) = deck.as_mut() else {
        return notify(app_to_ui_tx, "Flashcards", NO_DECK).await;
    };

    let threshold = state.config.read().await.review.swipe_threshold;

    let Some(update) = deck.swipe(displacement, threshold) else {
        tracing::debug!("Drag of {} below threshold {}", displacement, threshold);
        app_to_ui_tx.send(AppEvent::ShowReview(deck.current())).await?;
        return Ok(());
    };

    app_to_ui_tx.send(AppEvent::ShowReview(deck.current())).await?;

    if let Err(e) = backend.update_known(update.id, update.known).await {
        tracing::error!("Failed to update known for {}: {}", update.id, e);
        notify_error(app_to_ui_tx, "Failed to update the card").await?;
    } else {
        tracing::debug!("Word id={} known={}", update.id, update.known);
    }

    Ok(())
}
