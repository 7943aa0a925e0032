#[cfg(test)]
mod tests {
    use super::super::Component;
    use super::super::result_detail::ResultDetail;
    use crate::interactive::ui::events::Message;
    use crate::schemas::FacultyRecord;
    use crate::test_support::{faculty, render_to_string};
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn create_key_event(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    fn detail_for(record: FacultyRecord) -> ResultDetail {
        let mut detail = ResultDetail::new();
        detail.set_record(record);
        detail
    }

    #[test]
    fn test_render_shows_full_record() {
        let mut record = faculty("Grace Hopper");
        record.score = Some(0.87654);
        let mut detail = detail_for(record);

        let content = render_to_string(90, 24, |f| detail.render(f, f.area()));

        assert!(content.contains("Grace Hopper"));
        assert!(content.contains("Grace Hopper specialization"));
        assert!(content.contains("https://example.edu/faculty/grace-hopper"));
        assert!(content.contains("Grace Hopper bio"));
        assert!(content.contains("0.877"));
        assert!(content.contains("o: Open profile"));
    }

    #[test]
    fn test_render_without_bio_or_score() {
        let record = FacultyRecord::new("Ada", "Analysis", "", "https://example.edu/ada");
        let mut detail = detail_for(record);

        let content = render_to_string(90, 24, |f| detail.render(f, f.area()));

        assert!(content.contains("No biography available."));
        assert!(!content.contains("Match score"));
    }

    #[test]
    fn test_render_status_message_replaces_hints() {
        let mut detail = detail_for(faculty("Ada"));
        detail.set_message(Some("✓ Copied profile URL".to_string()));

        let content = render_to_string(90, 24, |f| detail.render(f, f.area()));

        assert!(content.contains("Copied profile URL"));
        assert!(!content.contains("o: Open profile"));
    }

    #[test]
    fn test_render_without_record_draws_nothing() {
        let mut detail = ResultDetail::new();

        let content = render_to_string(40, 10, |f| detail.render(f, f.area()));

        assert!(content.trim().is_empty());
    }

    #[test]
    fn test_scrolling() {
        let mut detail = detail_for(faculty("Ada"));

        assert!(detail.handle_key(create_key_event(KeyCode::Down)).is_none());
        detail.handle_key(create_key_event(KeyCode::Down));
        assert_eq!(detail.scroll_offset(), 2);

        detail.handle_key(create_key_event(KeyCode::PageUp));
        assert_eq!(detail.scroll_offset(), 0);

        detail.handle_key(create_key_event(KeyCode::Up));
        assert_eq!(detail.scroll_offset(), 0);
    }

    #[test]
    fn test_same_record_keeps_scroll() {
        let mut detail = detail_for(faculty("Ada"));
        detail.handle_key(create_key_event(KeyCode::Down));

        detail.set_record(faculty("Ada"));
        assert_eq!(detail.scroll_offset(), 1);

        detail.set_record(faculty("Grace"));
        assert_eq!(detail.scroll_offset(), 0);
    }

    #[test]
    fn test_profile_actions() {
        let mut detail = detail_for(faculty("Ada"));

        assert!(matches!(
            detail.handle_key(create_key_event(KeyCode::Char('o'))),
            Some(Message::OpenProfile)
        ));
        assert!(matches!(
            detail.handle_key(create_key_event(KeyCode::Char('c'))),
            Some(Message::CopyProfileUrl)
        ));
    }

    #[test]
    fn test_profile_actions_need_a_record() {
        let mut detail = ResultDetail::new();

        assert!(detail.handle_key(create_key_event(KeyCode::Char('o'))).is_none());
        assert!(detail.handle_key(create_key_event(KeyCode::Char('c'))).is_none());
    }

    #[test]
    fn test_back_keys() {
        let mut detail = detail_for(faculty("Ada"));

        for code in [KeyCode::Esc, KeyCode::Backspace] {
            assert!(matches!(
                detail.handle_key(create_key_event(code)),
                Some(Message::ExitToSearch)
            ));
        }
    }

    #[test]
    fn test_clear() {
        let mut detail = detail_for(faculty("Ada"));
        detail.handle_key(create_key_event(KeyCode::Down));

        detail.clear();

        assert_eq!(detail.scroll_offset(), 0);
        let content = render_to_string(40, 10, |f| detail.render(f, f.area()));
        assert!(content.trim().is_empty());
    }

    #[test]
    fn test_scroll_stops_at_end_of_bio() {
        let bio = (1..=30)
            .map(|i| format!("Paragraph {i}"))
            .collect::<Vec<_>>()
            .join("\n");
        let record = FacultyRecord::new("Ada", "Analysis", bio, "https://example.edu/ada");
        let mut detail = detail_for(record);

        // 40x20: title 3, footer 1, header 5, bio block 11 with 9 inner rows
        render_to_string(40, 20, |f| detail.render(f, f.area()));
        for _ in 0..10 {
            detail.handle_key(create_key_event(KeyCode::PageDown));
        }
        assert_eq!(detail.scroll_offset(), 21);

        let content = render_to_string(40, 20, |f| detail.render(f, f.area()));
        assert!(content.contains("Paragraph 30"));
        assert!(!content.contains("Paragraph 21 "));

        detail.handle_key(create_key_event(KeyCode::Up));
        assert_eq!(detail.scroll_offset(), 20);
    }

    #[test]
    fn test_short_bio_does_not_scroll() {
        let mut detail = detail_for(faculty("Ada"));
        render_to_string(90, 24, |f| detail.render(f, f.area()));

        detail.handle_key(create_key_event(KeyCode::Down));
        detail.handle_key(create_key_event(KeyCode::PageDown));

        assert_eq!(detail.scroll_offset(), 0);
    }

    #[test]
    fn test_scroll_before_first_render_is_bounded() {
        let mut detail = detail_for(faculty("Ada"));

        for _ in 0..10_000 {
            detail.handle_key(create_key_event(KeyCode::PageDown));
        }

        assert_eq!(detail.scroll_offset(), u16::MAX as usize);

        render_to_string(90, 24, |f| detail.render(f, f.area()));
        assert_eq!(detail.scroll_offset(), 0);
    }
}
