use std::fmt::Write;

use tango_types::{Notice, ReviewState, SortKey, WordListView};

pub const REVIEW_HINT: &str = "Tap:Answer / Right:Memorised / Left:Not yet";

fn header_label(key: SortKey) -> &'static str {
    match key {
        SortKey::Known => "Memorised",
        other => other.label(),
    }
}

pub fn render_word_list(view: &WordListView) -> String {
    let mut out = String::new();

    let header: Vec<String> = SortKey::ALL
        .iter()
        .map(|&key| format!("{}{}", header_label(key), view.glyph(key).unwrap_or("⇅")))
        .collect();
    let _ = writeln!(out, "{}", header.join(" | "));

    if view.rows.is_empty() {
        let _ = writeln!(out, "(no words)");
    }

    for row in &view.rows {
        let known = if row.known == Some(true) { "✓" } else { "✗" };
        let _ = writeln!(
            out,
            "{} | {} | {} | {}",
            row.id, row.english, row.japanese, known
        );
    }

    let _ = write!(out, "Current order: {}", view.sort_label);
    out
}

pub fn render_review(state: &ReviewState) -> String {
    match state {
        ReviewState::Finished => "Finish All Cards!".to_string(),
        ReviewState::Card(card) => {
            let side = if card.showing_answer { "answer" } else { "question" };
            format!(
                "[{}/{}] {} ({})\n{}",
                card.position + 1,
                card.total,
                card.text,
                side,
                REVIEW_HINT
            )
        }
    }
}

pub fn render_translation(translated_text: &str, from_lang: &str, to_lang: &str) -> String {
    if from_lang.is_empty() || to_lang.is_empty() {
        format!("Translation:\n{translated_text}")
    } else {
        format!("Translation ({from_lang} -> {to_lang}):\n{translated_text}")
    }
}

pub fn render_notice(notice: &Notice) -> String {
    format!("[{}] {}", notice.title, notice.message)
}

#[cfg(test)]
mod tests {
    use tango_core::WordList;
    use tango_types::{CardView, WordRecord};

    use super::*;

    #[test]
    fn test_word_list_table() {
        let mut list = WordList::with_records(vec![
            WordRecord::new(1, "こんにちは", "Hello"),
            WordRecord::new(2, "Goodbye", "さようなら").with_known(Some(true)),
        ]);
        list.sort_by(SortKey::English);

        let text = render_word_list(&list.view());
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "ID⇅ | English↑ | Japanese⇅ | Memorised⇅");
        assert_eq!(lines[1], "2 | Goodbye | さようなら | ✓");
        assert_eq!(lines[2], "1 | Hello | こんにちは | ✗");
        assert_eq!(lines[3], "Current order: English (Up)");
    }

    #[test]
    fn test_empty_word_list() {
        let text = render_word_list(&WordList::new().view());
        assert!(text.contains("(no words)"));
        assert!(text.ends_with("Current order: Original"));
    }

    #[test]
    fn test_review() {
        let card = ReviewState::Card(CardView {
            id: 4,
            text: "犬".to_string(),
            showing_answer: false,
            position: 0,
            total: 3,
        });
        assert!(render_review(&card).starts_with("[1/3] 犬 (question)"));
        assert_eq!(render_review(&ReviewState::Finished), "Finish All Cards!");
    }

    #[test]
    fn test_translation_and_notice() {
        assert_eq!(
            render_translation("cat", "ja", "en"),
            "Translation (ja -> en):\ncat"
        );
        assert_eq!(render_translation("cat", "", ""), "Translation:\ncat");
        assert_eq!(
            render_notice(&Notice::new("Saved!", "Success to save the word")),
            "[Saved!] Success to save the word"
        );
    }
}
