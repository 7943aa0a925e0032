#[cfg(test)]
mod tests {
    use crate::output::*;
    use crate::schemas::FacultyRecord;
    use crate::test_support::{faculty, faculty_list};
    use clap::ValueEnum;
    use std::time::Duration;

    fn options(format: OutputFormat) -> OutputOptions {
        OutputOptions {
            format,
            use_color: false,
            full_text: false,
        }
    }

    fn render(records: &[FacultyRecord], format: OutputFormat) -> String {
        let mut out = Vec::new();
        write_results(
            &mut out,
            "Machine Learning",
            records,
            Duration::from_millis(42),
            &options(format),
        )
        .unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_format_plain_record() {
        let formatted = format_faculty_record(1, &faculty("Ada"), false, false);

        assert_eq!(
            formatted,
            " 1. Ada [Ada specialization]\n    Ada bio\n    View Profile → https://example.edu/faculty/ada"
        );
    }

    #[test]
    fn test_format_record_with_score_and_no_bio() {
        let mut record = FacultyRecord::new("Bob", "Robotics", "", "https://example.edu/bob");
        record.score = Some(0.9123);

        let formatted = format_faculty_record(3, &record, false, false);

        assert_eq!(
            formatted,
            " 3. Bob [Robotics] (score 0.912)\n    View Profile → https://example.edu/bob"
        );
    }

    #[test]
    fn test_long_bio_is_previewed_unless_full_text() {
        let bio = "word ".repeat(100);
        let record = FacultyRecord::new("Cy", "Vision", bio.clone(), "https://example.edu/cy");

        let short = format_faculty_record(1, &record, false, false);
        let full = format_faculty_record(1, &record, false, true);

        assert!(short.contains("..."));
        assert!(short.len() < full.len());
        assert!(full.contains(bio.trim()));
    }

    #[test]
    fn test_colored_output_keeps_content() {
        colored::control::set_override(true);
        let formatted = format_faculty_record(1, &faculty("Ada"), true, false);
        colored::control::unset_override();

        assert!(formatted.contains("Ada"));
        assert!(formatted.contains("https://example.edu/faculty/ada"));
        assert!(formatted.contains("\u{1b}["));
    }

    #[test]
    fn test_text_output_lists_in_rank_order() {
        let output = render(&faculty_list(&["Carol", "Alice"]), OutputFormat::Text);

        assert!(output.starts_with("Recommended Faculty for \"Machine Learning\":"));
        let carol = output.find(" 1. Carol").unwrap();
        let alice = output.find(" 2. Alice").unwrap();
        assert!(carol < alice);
    }

    #[test]
    fn test_text_output_without_results() {
        let output = render(&[], OutputFormat::Text);

        assert_eq!(output, "No matching faculty found.\n");
    }

    #[test]
    fn test_json_output() {
        let output = render(&faculty_list(&["Ada", "Bob"]), OutputFormat::Json);
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(value["query"], "Machine Learning");
        assert_eq!(value["returned_count"], 2);
        assert_eq!(value["duration_ms"], 42);
        assert_eq!(value["results"][0]["name"], "Ada");
        assert_eq!(value["results"][1]["profile_url"], "https://example.edu/faculty/bob");
    }

    #[test]
    fn test_jsonl_output() {
        let output = render(&faculty_list(&["Ada", "Bob"]), OutputFormat::JsonL);
        let lines: Vec<serde_json::Value> = output
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0]["name"], "Ada");
        assert_eq!(lines[1]["name"], "Bob");
        assert_eq!(lines[2]["_metadata"]["returned_count"], 2);
    }

    #[test]
    fn test_format_value_names() {
        let names: Vec<String> = OutputFormat::value_variants()
            .iter()
            .filter_map(|format| format.to_possible_value())
            .map(|value| value.get_name().to_string())
            .collect();

        assert_eq!(names, ["text", "json", "jsonl"]);
        assert_eq!(
            OutputFormat::from_str("jsonl", false),
            Ok(OutputFormat::JsonL)
        );
    }
}
