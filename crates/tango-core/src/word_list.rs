use tango_config::RefreshPolicy;
use tango_types::{ColumnGlyph, SortKey, SortState, WordListView, WordRecord, WordRow};

use crate::columns::resolve_columns;
use crate::sort::{describe_sort_state, next_state, sort_glyph, sort_records};

/// State of the word list screen: the loaded records in display order and
/// the active sort.
#[derive(Debug, Clone, Default)]
pub struct WordList {
    records: Vec<WordRecord>,
    sort: SortState,
}

impl WordList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(records: Vec<WordRecord>) -> Self {
        let mut list = Self::new();
        list.load(records);
        list
    }

    /// Replace the collection with a freshly fetched one in "Original" order
    pub fn load(&mut self, records: Vec<WordRecord>) {
        self.records = records;
        self.sort = SortState::original();
    }

    /// Replace the collection after a reload
    pub fn refresh(&mut self, records: Vec<WordRecord>, policy: RefreshPolicy) {
        match (policy, self.sort.key, self.sort.direction) {
            (RefreshPolicy::Preserve, Some(key), Some(direction)) => {
                self.records = records;
                sort_records(&mut self.records, key, direction);
            }
            _ => self.load(records),
        }
    }

    /// Apply a click on the `key` column header
    pub fn sort_by(&mut self, key: SortKey) -> SortState {
        self.sort = next_state(self.sort, key);

        if let Some(direction) = self.sort.direction {
            sort_records(&mut self.records, key, direction);
        }

        self.sort
    }

    /// Drop the record with `id`, keeping everything else where it is
    pub fn remove(&mut self, id: i64) -> Option<WordRecord> {
        let index = self.records.iter().position(|r| r.id == id)?;
        Some(self.records.remove(index))
    }

    /// Add a record the backend has just stored. Returns false if a record
    /// with the same id is already in the list.
    pub fn append(&mut self, record: WordRecord) -> bool {
        if self.contains(record.id) {
            return false;
        }

        self.records.push(record);
        true
    }

    pub fn contains(&self, id: i64) -> bool {
        self.records.iter().any(|r| r.id == id)
    }

    pub fn records(&self) -> &[WordRecord] {
        &self.records
    }

    pub fn sort_state(&self) -> SortState {
        self.sort
    }

    pub fn sort_label(&self) -> String {
        describe_sort_state(self.sort)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Project the current state for rendering
    pub fn view(&self) -> WordListView {
        let rows = self
            .records
            .iter()
            .map(|record| {
                let columns = resolve_columns(record);
                WordRow {
                    id: record.id,
                    english: columns.english.to_string(),
                    japanese: columns.japanese.to_string(),
                    known: record.known,
                }
            })
            .collect();

        let glyphs = SortKey::ALL
            .iter()
            .map(|&key| ColumnGlyph {
                key,
                glyph: sort_glyph(self.sort, key),
            })
            .collect();

        WordListView {
            rows,
            sort_label: self.sort_label(),
            glyphs,
        }
    }
}
