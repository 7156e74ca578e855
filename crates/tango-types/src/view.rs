use crate::sort::SortKey;

/// One word list row with both text fields placed in their display column
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordRow {
    pub id: i64,
    pub english: String,
    pub japanese: String,
    pub known: Option<bool>,
}

/// Direction glyph shown next to a column header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnGlyph {
    pub key: SortKey,
    pub glyph: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordListView {
    pub rows: Vec<WordRow>,
    /// "Current order" label
    pub sort_label: String,
    pub glyphs: Vec<ColumnGlyph>,
}

impl WordListView {
    pub fn glyph(&self, key: SortKey) -> Option<&'static str> {
        self.glyphs.iter().find(|g| g.key == key).map(|g| g.glyph)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    pub id: i64,
    /// Front (`source_text`) or back (`translated_text`) of the card
    pub text: String,
    pub showing_answer: bool,
    /// Zero based
    pub position: usize,
    pub total: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReviewState {
    Card(CardView),
    Finished,
}

/// Recoverable message for the user, e.g. a failed backend call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub message: String,
}

impl Notice {
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new("Error", message)
    }
}
