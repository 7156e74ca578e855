use crate::sort::SortKey;
use crate::view::{Notice, ReviewState, WordListView};

#[derive(Debug, Clone)]
pub enum AppEvent {
    UiEvent(UiEvent),
    ShowTranslation {
        source_text: String,
        translated_text: String,
        from_lang: String,
        to_lang: String,
    },
    TranslationPending,
    WordSaved {
        id: i64,
    },
    ShowWordList(WordListView),
    ShowReview(ReviewState),
    Notice(Notice),
    BackendReady,
}

/// Actions requested by the user from one of the three screens
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    // Translate screen
    Translate(String),
    SaveWord,

    // Word list screen
    LoadWords,
    RefreshWords,
    SortWords(SortKey),
    DeleteWord(i64),

    // Flashcard screen
    LoadCards,
    FlipCard,
    /// Horizontal drag distance at release
    SwipeCard(f32),

    Close,
}
