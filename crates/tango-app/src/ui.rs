use std::sync::Arc;

use kanal::{AsyncReceiver, AsyncSender};
use tango_config::Config;
use tango_types::{AppEvent, UiEvent};
use tokio::sync::RwLock;
use tokio_util::sync::CancellationToken;

use crate::commands::{Command, HELP, is_confirmation, parse_command};
use crate::render::{render_notice, render_review, render_translation, render_word_list};

/// What the UI does with one input line
#[derive(Debug, PartialEq)]
pub enum Step {
    Send(UiEvent),
    Print(String),
    Quit,
    Nothing,
}

/// Turn an input line into a step. A pending delete consumes the next line
/// as its confirmation.
pub fn interpret(line: &str, pending_delete: &mut Option<i64>, swipe_threshold: f32) -> Step {
    if let Some(id) = pending_delete.take() {
        return if is_confirmation(line) {
            Step::Send(UiEvent::DeleteWord(id))
        } else {
            Step::Print("Cancelled".to_string())
        };
    }

    match parse_command(line) {
        None => Step::Nothing,
        Some(Command::Send(event)) => Step::Send(event),
        Some(Command::Delete(id)) => {
            *pending_delete = Some(id);
            Step::Print(format!("Delete card {id}? [y/N]"))
        }
        Some(Command::SwipeRight) => Step::Send(UiEvent::SwipeCard(swipe_threshold)),
        Some(Command::SwipeLeft) => Step::Send(UiEvent::SwipeCard(-swipe_threshold)),
        Some(Command::Help) => Step::Print(HELP.to_string()),
        Some(Command::Quit) => Step::Quit,
        Some(Command::Invalid(message)) => Step::Print(message),
    }
}

/// Text to show for an event coming from the app, if any
pub fn render_event(event: &AppEvent) -> Option<String> {
    match event {
        AppEvent::BackendReady => Some("Ready. Type 'help' for commands.".to_string()),
        AppEvent::TranslationPending => Some("Translating...".to_string()),
        AppEvent::ShowTranslation {
            translated_text,
            from_lang,
            to_lang,
            ..
        } => Some(render_translation(translated_text, from_lang, to_lang)),
        AppEvent::WordSaved { .. } => None,
        AppEvent::ShowWordList(view) => Some(render_word_list(view)),
        AppEvent::ShowReview(state) => Some(render_review(state)),
        AppEvent::Notice(notice) => Some(render_notice(notice)),
        AppEvent::UiEvent(_) => None,
    }
}

/// Read stdin on a plain thread so a pending read never holds up runtime
/// shutdown. The channel closes at end of input.
fn spawn_stdin_reader() -> AsyncReceiver<String> {
    let (tx, rx) = kanal::bounded::<String>(16);

    std::thread::spawn(move || {
        for line in std::io::stdin().lines() {
            match line {
                Ok(line) => {
                    if tx.send(line).is_err() {
                        break;
                    }
                }
                Err(e) => {
                    tracing::error!("Failed to read stdin: {}", e);
                    break;
                }
            }
        }
    });

    rx.to_async()
}

/// Line based terminal front end
pub async fn ui_loop(
    app_to_ui_rx: AsyncReceiver<AppEvent>,
    ui_to_app_tx: AsyncSender<AppEvent>,
    config: Arc<RwLock<Config>>,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    let lines = spawn_stdin_reader();
    let mut pending_delete = None;

    loop {
        tokio::select! {
            _ = cancel.cancelled() => break,
            event = app_to_ui_rx.recv() => {
                if let Some(text) = render_event(&event?) {
                    println!("{text}");
                }
            }
            line = lines.recv() => {
                let Ok(line) = line else {
                    tracing::debug!("stdin closed");
                    ui_to_app_tx.send(AppEvent::UiEvent(UiEvent::Close)).await?;
                    break;
                };

                let threshold = config.read().await.review.swipe_threshold;
                match interpret(&line, &mut pending_delete, threshold) {
                    Step::Send(event) => ui_to_app_tx.send(AppEvent::UiEvent(event)).await?,
                    Step::Print(text) => println!("{text}"),
                    Step::Quit => {
                        ui_to_app_tx.send(AppEvent::UiEvent(UiEvent::Close)).await?;
                        break;
                    }
                    Step::Nothing => {}
                }
            }
        }
    }

    Ok(())
}
