use serde::{Deserialize, Serialize};

/// Sortable columns of the word list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    Id,
    English,
    Japanese,
    Known,
}

impl SortKey {
    pub const ALL: [SortKey; 4] = [
        SortKey::Id,
        SortKey::English,
        SortKey::Japanese,
        SortKey::Known,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SortKey::Id => "ID",
            SortKey::English => "English",
            SortKey::Japanese => "Japanese",
            SortKey::Known => "Known",
        }
    }

    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "id" => Some(SortKey::Id),
            "english" | "en" => Some(SortKey::English),
            "japanese" | "ja" => Some(SortKey::Japanese),
            "known" | "memorised" | "memorized" => Some(SortKey::Known),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

/// Active sort of the word list. Both fields are `None` while the list is
/// in the order it was loaded in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortState {
    pub key: Option<SortKey>,
    pub direction: Option<SortDirection>,
}

impl SortState {
    pub fn original() -> Self {
        Self::default()
    }

    pub fn new(key: SortKey, direction: SortDirection) -> Self {
        Self {
            key: Some(key),
            direction: Some(direction),
        }
    }
}
