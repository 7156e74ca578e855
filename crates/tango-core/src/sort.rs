use std::cmp::Ordering;

use tango_types::{SortDirection, SortKey, SortState, WordRecord};

use crate::columns::resolve_columns;

/// State after the user activates the `key` column.
///
/// Only a second activation of an ascending column flips it to descending.
/// Anything else, including a descending column or the original order,
/// starts ascending again. The list never goes back to "Original" this way.
pub fn next_state(previous: SortState, key: SortKey) -> SortState {
    let direction = match (previous.key, previous.direction) {
        (Some(current), Some(SortDirection::Asc)) if current == key => SortDirection::Desc,
        _ => SortDirection::Asc,
    };

    SortState::new(key, direction)
}

/// Compare two records on one column, always ascending.
///
/// A missing `known` flag is the smallest value.
pub fn compare_on(key: SortKey, left: &WordRecord, right: &WordRecord) -> Ordering {
    match key {
        SortKey::Id => left.id.cmp(&right.id),
        SortKey::English => resolve_columns(left)
            .english
            .cmp(resolve_columns(right).english),
        SortKey::Japanese => resolve_columns(left)
            .japanese
            .cmp(resolve_columns(right).japanese),
        SortKey::Known => left.known.cmp(&right.known),
    }
}

/// Reorder `records` in place. Ties on the column fall back to ascending id,
/// whatever the direction, so the result does not depend on input order.
pub fn sort_records(records: &mut [WordRecord], key: SortKey, direction: SortDirection) {
    records.sort_by(|left, right| {
        let ordering = compare_on(key, left, right);
        let ordering = match direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        };

        ordering.then_with(|| left.id.cmp(&right.id))
    });
}

/// Sort a copy of `records` for a click on `key` given the previous state
pub fn sort_by(
    records: &[WordRecord],
    key: SortKey,
    previous: SortState,
) -> (Vec<WordRecord>, SortState) {
    let state = next_state(previous, key);
    let mut sorted = records.to_vec();

    if let Some(direction) = state.direction {
        sort_records(&mut sorted, key, direction);
    }

    (sorted, state)
}

/// "Current order" label, e.g. "Original" or "Known (Up)"
pub fn describe_sort_state(state: SortState) -> String {
    let Some(key) = state.key else {
        return "Original".to_string();
    };

    let direction = match state.direction {
        Some(SortDirection::Desc) => "Down",
        _ => "Up",
    };

    format!("{} ({})", key.label(), direction)
}

/// Header glyph for `key`: unsorted, ascending or descending
pub fn sort_glyph(state: SortState, key: SortKey) -> &'static str {
    if state.key != Some(key) {
        return "⇅";
    }

    match state.direction {
        Some(SortDirection::Desc) => "↓",
        _ => "↑",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<WordRecord> {
        vec![
            WordRecord::new(1, "こんにちは", "Hello").with_known(Some(false)),
            WordRecord::new(2, "Goodbye", "さようなら").with_known(Some(true)),
        ]
    }

    fn pairs(records: &[WordRecord]) -> Vec<(&str, &str)> {
        records
            .iter()
            .map(|r| {
                let c = resolve_columns(r);
                (c.english, c.japanese)
            })
            .collect()
    }

    fn ids(records: &[WordRecord]) -> Vec<i64> {
        records.iter().map(|r| r.id).collect()
    }

    #[test]
    fn test_english_sort_uses_resolved_values() {
        let (sorted, state) = sort_by(&sample(), SortKey::English, SortState::original());

        assert_eq!(state, SortState::new(SortKey::English, SortDirection::Asc));
        assert_eq!(
            pairs(&sorted),
            vec![("Goodbye", "さようなら"), ("Hello", "こんにちは")]
        );
    }

    #[test]
    fn test_japanese_sort_uses_resolved_values() {
        let (sorted, _) = sort_by(&sample(), SortKey::Japanese, SortState::original());
        // こ (U+3053) < さ (U+3055)
        assert_eq!(ids(&sorted), vec![1, 2]);
    }

    #[test]
    fn test_same_key_toggles_asc_desc_asc() {
        let records = sample();
        let (first, s1) = sort_by(&records, SortKey::Id, SortState::original());
        let (second, s2) = sort_by(&first, SortKey::Id, s1);
        let (third, s3) = sort_by(&second, SortKey::Id, s2);

        assert_eq!(s1.direction, Some(SortDirection::Asc));
        assert_eq!(s2.direction, Some(SortDirection::Desc));
        assert_eq!(s3.direction, Some(SortDirection::Asc));
        assert_eq!(ids(&first), vec![1, 2]);
        assert_eq!(ids(&second), vec![2, 1]);
        assert_eq!(ids(&third), vec![1, 2]);
    }

    #[test]
    fn test_other_key_resets_to_asc() {
        let previous = SortState::new(SortKey::Id, SortDirection::Desc);
        assert_eq!(
            next_state(previous, SortKey::Known),
            SortState::new(SortKey::Known, SortDirection::Asc)
        );

        let previous = SortState::new(SortKey::Id, SortDirection::Asc);
        assert_eq!(
            next_state(previous, SortKey::English).direction,
            Some(SortDirection::Asc)
        );
    }

    #[test]
    fn test_empty_collection_still_updates_state() {
        let (sorted, state) = sort_by(&[], SortKey::Known, SortState::original());
        assert!(sorted.is_empty());
        assert_eq!(describe_sort_state(state), "Known (Up)");
    }

    #[test]
    fn test_ties_fall_back_to_id() {
        let records = vec![
            WordRecord::new(5, "b", "x").with_known(Some(true)),
            WordRecord::new(3, "a", "y").with_known(Some(true)),
            WordRecord::new(4, "c", "z").with_known(Some(false)),
        ];

        let (asc, state) = sort_by(&records, SortKey::Known, SortState::original());
        assert_eq!(ids(&asc), vec![4, 3, 5]);

        let (desc, _) = sort_by(&asc, SortKey::Known, state);
        assert_eq!(ids(&desc), vec![3, 5, 4]);
    }

    #[test]
    fn test_missing_known_orders_first_then_last() {
        let records = vec![
            WordRecord::new(1, "a", "x").with_known(Some(true)),
            WordRecord::new(2, "b", "y").with_known(None),
            WordRecord::new(3, "c", "z").with_known(Some(false)),
        ];

        let (asc, state) = sort_by(&records, SortKey::Known, SortState::original());
        assert_eq!(ids(&asc), vec![2, 3, 1]);

        let (desc, _) = sort_by(&asc, SortKey::Known, state);
        assert_eq!(ids(&desc), vec![1, 3, 2]);
    }

    #[test]
    fn test_sort_does_not_change_records() {
        let records = sample();
        let (mut sorted, _) = sort_by(&records, SortKey::English, SortState::original());
        sorted.sort_by_key(|r| r.id);
        assert_eq!(sorted, records);
    }

    #[test]
    fn test_describe_sort_state() {
        assert_eq!(describe_sort_state(SortState::original()), "Original");
        assert_eq!(
            describe_sort_state(SortState::new(SortKey::Known, SortDirection::Asc)),
            "Known (Up)"
        );
        assert_eq!(
            describe_sort_state(SortState::new(SortKey::English, SortDirection::Desc)),
            "English (Down)"
        );
        assert_eq!(
            describe_sort_state(SortState::new(SortKey::Japanese, SortDirection::Asc)),
            "Japanese (Up)"
        );
        assert_eq!(
            describe_sort_state(SortState::new(SortKey::Id, SortDirection::Desc)),
            "ID (Down)"
        );
    }

    #[test]
    fn test_sort_glyph() {
        let state = SortState::new(SortKey::English, SortDirection::Desc);
        assert_eq!(sort_glyph(state, SortKey::English), "↓");
        assert_eq!(sort_glyph(state, SortKey::Id), "⇅");
        assert_eq!(sort_glyph(SortState::original(), SortKey::Known), "⇅");
        assert_eq!(
            sort_glyph(SortState::new(SortKey::Known, SortDirection::Asc), SortKey::Known),
            "↑"
        );
    }
}
