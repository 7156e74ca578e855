mod events;
mod sort;
mod translation;
mod view;
mod word;

pub use events::{AppEvent, UiEvent};
pub use sort::{SortDirection, SortKey, SortState};
pub use translation::{NewWord, Translation};
pub use view::{CardView, ColumnGlyph, Notice, ReviewState, WordListView, WordRow};
pub use word::WordRecord;
