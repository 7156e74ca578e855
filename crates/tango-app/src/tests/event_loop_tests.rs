use std::sync::Arc;
use std::time::Duration;

use kanal::AsyncReceiver;
use tango_backend::WordBackend;
use tango_config::Config;
use tango_types::{AppEvent, SortKey, UiEvent, WordRecord};
use tokio::time::timeout;
use tokio_util::sync::CancellationToken;

use super::mock_backend::MockBackend;
use crate::events::event_loop;
use crate::state::AppState;

const WAIT: Duration = Duration::from_secs(2);

async fn next_event(rx: &AsyncReceiver<AppEvent>) -> AppEvent {
    timeout(WAIT, rx.recv())
        .await
        .expect("timed out waiting for event")
        .expect("channel closed")
}

#[tokio::test]
async fn test_event_loop_round_trip_and_close() {
    let backend: Arc<dyn WordBackend> = Arc::new(MockBackend::with_words(vec![
        WordRecord::new(1, "Zebra", "シマウマ"),
        WordRecord::new(2, "犬", "Dog"),
    ]));
    let state = Arc::new(AppState::new(Config::default()));
    let (ui_tx, app_rx) = kanal::unbounded_async();
    let (app_tx, ui_rx) = kanal::unbounded_async();
    let cancel = CancellationToken::new();

    let handle = tokio::spawn(event_loop(state, backend, app_rx, app_tx, cancel.clone()));

    assert!(matches!(next_event(&ui_rx).await, AppEvent::BackendReady));

    ui_tx.send(AppEvent::UiEvent(UiEvent::LoadWords)).await.unwrap();
    let AppEvent::ShowWordList(view) = next_event(&ui_rx).await else {
        panic!("expected word list");
    };
    assert_eq!(view.rows.len(), 2);

    ui_tx
        .send(AppEvent::UiEvent(UiEvent::SortWords(SortKey::English)))
        .await
        .unwrap();
    let AppEvent::ShowWordList(view) = next_event(&ui_rx).await else {
        panic!("expected word list");
    };
    let english: Vec<_> = view.rows.iter().map(|r| r.english.as_str()).collect();
    assert_eq!(english, vec!["Dog", "Zebra"]);

    ui_tx.send(AppEvent::UiEvent(UiEvent::Close)).await.unwrap();
    let result = timeout(WAIT, handle)
        .await
        .expect("event loop did not stop")
        .unwrap();
    assert!(result.is_ok());
    assert!(cancel.is_cancelled());
}

#[tokio::test]
async fn test_event_loop_stops_on_cancel() {
    let backend: Arc<dyn WordBackend> = Arc::new(MockBackend::failing());
    let state = Arc::new(AppState::new(Config::default()));
    let (ui_tx, app_rx) = kanal::unbounded_async();
    let (app_tx, ui_rx) = kanal::unbounded_async();
    let cancel = CancellationToken::new();

    let handle = tokio::spawn(event_loop(state, backend, app_rx, app_tx, cancel.clone()));
    assert!(matches!(next_event(&ui_rx).await, AppEvent::BackendReady));

    // Failures are reported, not fatal
    ui_tx.send(AppEvent::UiEvent(UiEvent::LoadWords)).await.unwrap();
    assert!(matches!(next_event(&ui_rx).await, AppEvent::Notice(_)));

    cancel.cancel();
    let result = timeout(WAIT, handle)
        .await
        .expect("event loop did not stop")
        .unwrap();
    assert!(result.is_ok());
}
