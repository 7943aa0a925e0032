#[cfg(test)]
mod tests {
    use super::super::list_item::*;
    use crate::schemas::FacultyRecord;
    use ratatui::text::Line;

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    fn record(bio: &str) -> FacultyRecord {
        FacultyRecord::new(
            "Dr. Alice Smith",
            "Machine Learning",
            bio,
            "https://example.edu/alice",
        )
    }

    #[test]
    fn test_faculty_record_fields() {
        let record = record("Works on kernels.");

        assert_eq!(record.title(), "Dr. Alice Smith");
        assert_eq!(record.subtitle(), "Machine Learning");
        assert_eq!(record.body(), "Works on kernels.");
        assert_eq!(record.link(), "https://example.edu/alice");
    }

    #[test]
    fn test_card_lines_layout() {
        let lines = record("Works on kernels.").create_card_lines(1, 60, None);
        let texts: Vec<String> = lines.iter().map(line_text).collect();

        assert_eq!(
            texts,
            vec![
                " 1. Dr. Alice Smith",
                "    Machine Learning",
                "    Works on kernels.",
                "    View Profile → https://example.edu/alice",
                "",
            ]
        );
    }

    #[test]
    fn test_card_without_bio_skips_body() {
        let lines = record("").create_card_lines(2, 60, None);
        let texts: Vec<String> = lines.iter().map(line_text).collect();

        assert_eq!(texts.len(), 4);
        assert_eq!(texts[0], " 2. Dr. Alice Smith");
        assert!(texts[2].contains("View Profile"));
    }

    #[test]
    fn test_card_body_limit_adds_ellipsis() {
        let bio = "one two three four five six seven eight nine ten";
        let full = record(bio).create_card_lines(1, 10, None);
        let limited = record(bio).create_card_lines(1, 10, Some(2));

        assert!(full.len() > limited.len());
        let body: Vec<String> = limited[2..4].iter().map(line_text).collect();
        assert!(body[1].ends_with("..."));
        assert!(body[1].chars().count() <= 4 + 10);
    }

    #[test]
    fn test_body_limit_not_reached_keeps_text() {
        let lines = record("short bio").create_card_lines(1, 40, Some(2));

        assert_eq!(line_text(&lines[2]), "    short bio");
    }

    #[test]
    fn test_truncate_message() {
        assert_eq!(truncate_message("short", 10), "short");
        assert_eq!(truncate_message("exactly10!", 10), "exactly10!");
        assert_eq!(truncate_message("this is longer", 10), "this is...");
        assert_eq!(truncate_message("line\nbreak", 20), "line break");
        assert_eq!(truncate_message("abcdef", 2), "ab");
    }

    #[test]
    fn test_truncate_message_unicode() {
        assert_eq!(truncate_message("日本語のテキスト", 6), "日本語...");
    }

    #[test]
    fn test_wrap_text() {
        assert_eq!(
            wrap_text("the quick brown fox jumps", 10),
            vec!["the quick", "brown fox", "jumps"]
        );
        assert_eq!(wrap_text("", 10), vec![String::new()]);
        assert!(wrap_text("anything", 0).is_empty());
    }

    #[test]
    fn test_wrap_text_long_word_gets_own_line() {
        assert_eq!(
            wrap_text("a supercalifragilistic b", 8),
            vec!["a", "supercalifragilistic", "b"]
        );
    }

    #[test]
    fn test_wrap_text_collapses_newlines() {
        assert_eq!(wrap_text("first\nsecond", 20), vec!["first second"]);
    }
}
