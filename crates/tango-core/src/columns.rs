use tango_types::WordRecord;

use crate::script::is_japanese;

/// The two text fields of a record placed in their display columns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Columns<'a> {
    pub english: &'a str,
    pub japanese: &'a str,
}

/// Decide per record which field is English and which is Japanese.
///
/// The backend stores pairs without a language tag, and a list can mix
/// Japanese->English and English->Japanese entries, so the source text is
/// classified every time the record is shown.
pub fn resolve_columns(record: &WordRecord) -> Columns<'_> {
    if is_japanese(&record.source_text) {
        Columns {
            english: &record.translated_text,
            japanese: &record.source_text,
        }
    } else {
        Columns {
            english: &record.source_text,
            japanese: &record.translated_text,
        }
    }
}
