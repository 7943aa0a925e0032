use crate::interactive::constants::CARD_INDENT;
use crate::schemas::FacultyRecord;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

/// Trait for items that can be displayed as cards in a generic list viewer
pub trait ListItem: Clone {
    /// Headline of the card
    fn title(&self) -> &str;

    /// One-line summary shown under the title
    fn subtitle(&self) -> &str;

    /// Free text, wrapped to the card width
    fn body(&self) -> &str;

    /// Link shown at the bottom of the card
    fn link(&self) -> &str;

    /// Creates the display lines of one card.
    ///
    /// `max_width` is the text width after the indent. With `body_limit` set,
    /// at most that many body lines are shown and the last one is marked
    /// with an ellipsis when text was cut.
    fn create_card_lines(
        &self,
        rank: usize,
        max_width: usize,
        body_limit: Option<usize>,
    ) -> Vec<Line<'static>> {
        let indent = " ".repeat(CARD_INDENT);
        let mut lines = vec![Line::from(vec![
            Span::styled(
                format!("{rank:>2}. "),
                Style::default().fg(Color::DarkGray),
            ),
            Span::styled(
                truncate_message(self.title(), max_width),
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
        ])];

        if !self.subtitle().is_empty() {
            lines.push(Line::from(vec![
                Span::raw(indent.clone()),
                Span::styled(
                    truncate_message(self.subtitle(), max_width),
                    Style::default().fg(Color::Cyan),
                ),
            ]));
        }

        if !self.body().trim().is_empty() {
            let mut body = wrap_text(self.body(), max_width);
            if let Some(limit) = body_limit {
                if body.len() > limit {
                    body.truncate(limit);
                    if let Some(last) = body.last_mut() {
                        *last = truncate_message(&format!("{last}..."), max_width);
                    }
                }
            }
            for line in body {
                lines.push(Line::from(vec![Span::raw(indent.clone()), Span::raw(line)]));
            }
        }

        lines.push(Line::from(vec![
            Span::raw(indent),
            Span::styled(
                truncate_message(&format!("View Profile → {}", self.link()), max_width),
                Style::default().fg(Color::Green),
            ),
        ]));
        lines.push(Line::default());

        lines
    }
}

impl ListItem for FacultyRecord {
    fn title(&self) -> &str {
        &self.name
    }

    fn subtitle(&self) -> &str {
        &self.specialization
    }

    fn body(&self) -> &str {
        &self.bio
    }

    fn link(&self) -> &str {
        &self.profile_url
    }
}

pub fn truncate_message(text: &str, max_width: usize) -> String {
    let text = text.replace('\n', " ");
    let chars: Vec<char> = text.chars().collect();

    if chars.len() <= max_width {
        text
    } else if max_width <= 3 {
        chars.into_iter().take(max_width).collect()
    } else {
        let truncated: String = chars.into_iter().take(max_width - 3).collect();
        format!("{truncated}...")
    }
}

pub fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    if max_width == 0 {
        return vec![];
    }

    let mut lines = Vec::new();
    let mut current_line = String::new();
    let mut current_width = 0;

    for word in text.split_whitespace() {
        let word_width = word.chars().count();

        if current_width > 0 && current_width + 1 + word_width > max_width {
            lines.push(std::mem::take(&mut current_line));
            current_width = 0;
        }
        if current_width > 0 {
            current_line.push(' ');
            current_width += 1;
        }
        current_line.push_str(word);
        current_width += word_width;
    }

    if !current_line.is_empty() {
        lines.push(current_line);
    }

    if lines.is_empty() {
        vec![String::new()]
    } else {
        lines
    }
}
