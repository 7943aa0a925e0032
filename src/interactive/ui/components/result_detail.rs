use crate::interactive::constants::{PAGE_SIZE, RESULT_DETAIL_HEADER_HEIGHT};
use crate::interactive::ui::components::{
    Component,
    list_item::wrap_text,
    view_layout::{KeyHint, Styles, ViewLayout, hint_line, status_line},
};
use crate::interactive::ui::events::Message;
use crate::schemas::FacultyRecord;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

const DETAIL_HINTS: &[KeyHint] = &[
    ("↑/↓", "Scroll"),
    ("o", "Open profile"),
    ("c", "Copy URL"),
    ("Esc/Backspace", "Back"),
    ("?", "Help"),
];

/// Full-screen view of one faculty record.
#[derive(Default)]
pub struct ResultDetail {
    record: Option<FacultyRecord>,
    scroll_offset: usize,
    /// Last scrollable line offset, known once the bio has been drawn.
    max_scroll: Option<usize>,
    message: Option<String>,
}

impl ResultDetail {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_record(&mut self, record: FacultyRecord) {
        if self.record.as_ref() != Some(&record) {
            self.record = Some(record);
            self.scroll_offset = 0;
            self.max_scroll = None;
        }
    }

    pub fn set_message(&mut self, message: Option<String>) {
        self.message = message;
    }

    pub fn clear(&mut self) {
        self.record = None;
        self.scroll_offset = 0;
        self.max_scroll = None;
    }

    #[cfg(test)]
    pub(crate) fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    fn scroll_by(&mut self, delta: isize) {
        let limit = self.max_scroll.unwrap_or(u16::MAX as usize);
        self.scroll_offset = self.scroll_offset.saturating_add_signed(delta).min(limit);
    }

    fn bio_lines(record: &FacultyRecord, width: usize) -> Vec<Line<'static>> {
        if record.bio.trim().is_empty() {
            return vec![Line::styled("No biography available.", Styles::dimmed())];
        }
        record
            .bio
            .lines()
            .flat_map(|paragraph| wrap_text(paragraph, width))
            .map(|line| Line::styled(line, Styles::normal()))
            .collect()
    }

    fn header_lines(record: &FacultyRecord) -> Vec<Line<'_>> {
        let mut lines = vec![Line::from(vec![
            Span::styled("Specialization: ", Styles::label()),
            Span::styled(record.specialization.as_str(), Styles::normal()),
        ])];

        if let Some(score) = record.score {
            lines.push(Line::from(vec![
                Span::styled("Match score:    ", Styles::label()),
                Span::styled(format!("{score:.3}"), Styles::normal()),
            ]));
        }

        lines.push(Line::from(vec![
            Span::styled("Profile:        ", Styles::label()),
            Span::styled(record.profile_url.as_str(), Styles::link()),
        ]));
        lines
    }
}

impl Component for ResultDetail {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        let Some(record) = &self.record else {
            return;
        };

        let footer = match &self.message {
            Some(message) => status_line(message),
            None => hint_line(DETAIL_HINTS),
        };
        let layout = ViewLayout::new(record.name.as_str())
            .subtitle("Faculty profile")
            .footer(footer);

        let mut scroll_offset = self.scroll_offset;
        let mut max_scroll = 0;
        layout.render(f, area, |f, content_area| {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(RESULT_DETAIL_HEADER_HEIGHT),
                    Constraint::Min(0),
                ])
                .split(content_area);

            let header = Paragraph::new(Self::header_lines(record))
                .block(Block::default().borders(Borders::BOTTOM));
            f.render_widget(header, chunks[0]);

            let block = Block::default().title("Biography").borders(Borders::ALL);
            let inner = block.inner(chunks[1]);
            let lines = Self::bio_lines(record, inner.width as usize);

            max_scroll = lines
                .len()
                .saturating_sub(inner.height as usize)
                .min(u16::MAX as usize);
            scroll_offset = scroll_offset.min(max_scroll);

            let bio = Paragraph::new(lines)
                .block(block)
                .scroll((scroll_offset as u16, 0));
            f.render_widget(bio, chunks[1]);
        });

        self.scroll_offset = scroll_offset;
        self.max_scroll = Some(max_scroll);
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<Message> {
        match key.code {
            KeyCode::Up => {
                self.scroll_by(-1);
                None
            }
            KeyCode::Down => {
                self.scroll_by(1);
                None
            }
            KeyCode::PageUp => {
                self.scroll_by(-((PAGE_SIZE * 3) as isize));
                None
            }
            KeyCode::PageDown => {
                self.scroll_by((PAGE_SIZE * 3) as isize);
                None
            }
            KeyCode::Char('o') => self.record.as_ref().map(|_| Message::OpenProfile),
            KeyCode::Char('c') => self.record.as_ref().map(|_| Message::CopyProfileUrl),
            KeyCode::Char('?') => Some(Message::ShowHelp),
            KeyCode::Backspace | KeyCode::Esc => Some(Message::ExitToSearch),
            _ => None,
        }
    }
}
