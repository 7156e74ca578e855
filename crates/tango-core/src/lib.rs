pub mod columns;
pub mod deck;
pub mod error;
pub mod gesture;
pub mod preprocess;
pub mod script;
pub mod sort;
pub mod translate;
pub mod word_list;

pub use columns::{Columns, resolve_columns};
pub use deck::{FlashcardDeck, KnownUpdate};
pub use error::FormError;
pub use gesture::{DEFAULT_SWIPE_THRESHOLD, Swipe, classify_swipe};
pub use script::{is_japanese, is_japanese_opt};
pub use sort::{describe_sort_state, next_state, sort_by, sort_glyph, sort_records};
pub use translate::TranslateForm;
pub use word_list::WordList;
