use crate::interactive::constants::{
    SEARCH_BUTTON_WIDTH, SEARCH_LABEL, SEARCH_PLACEHOLDER, SEARCHING_LABEL,
};
use crate::interactive::ui::components::Component;
use crate::interactive::ui::components::text_input::TextInput;
use crate::interactive::ui::events::Message;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};

/// Query input plus the clickable search button.
#[derive(Default)]
pub struct SearchBar {
    text_input: TextInput,
    is_searching: bool,
    focused: bool,
    button_area: Option<Rect>,
}

impl SearchBar {
    pub fn new() -> Self {
        Self {
            focused: true,
            ..Self::default()
        }
    }

    /// Sync the displayed query with state. The cursor is left alone unless
    /// the text actually differs.
    pub fn set_query(&mut self, query: &str) {
        if self.text_input.text() != query {
            self.text_input.set_text(query.to_string());
        }
    }

    pub fn set_searching(&mut self, is_searching: bool) {
        self.is_searching = is_searching;
    }

    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    pub fn query(&self) -> &str {
        self.text_input.text()
    }

    pub fn cursor_position(&self) -> usize {
        self.text_input.cursor_position()
    }

    pub fn is_searching(&self) -> bool {
        self.is_searching
    }

    pub fn button_label(&self) -> &'static str {
        if self.is_searching {
            SEARCHING_LABEL
        } else {
            SEARCH_LABEL
        }
    }

    /// Where the button was drawn in the last frame, if it was drawn.
    pub fn button_area(&self) -> Option<Rect> {
        self.button_area
    }

    pub fn clear_button_area(&mut self) {
        self.button_area = None;
    }

    /// A left click on the button submits exactly like Enter does.
    pub fn handle_click(&self, column: u16, row: u16) -> Option<Message> {
        self.button_area
            .filter(|area| area.contains(Position::new(column, row)))
            .map(|_| Message::SubmitRequested)
    }
}

impl Component for SearchBar {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(10), Constraint::Length(SEARCH_BUTTON_WIDTH)])
            .split(area);

        let border_style = if self.focused {
            Style::default().fg(Color::Green)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let input = Paragraph::new(Line::from(
            self.text_input
                .render_spans_with_placeholder(SEARCH_PLACEHOLDER),
        ))
        .block(
            Block::default()
                .title("Research interest")
                .borders(Borders::ALL)
                .border_style(border_style),
        );
        f.render_widget(input, chunks[0]);

        let button_style = if self.is_searching {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD)
        };
        let button = Paragraph::new(self.button_label())
            .alignment(Alignment::Center)
            .style(button_style)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(button, chunks[1]);

        self.button_area = Some(chunks[1]);
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<Message> {
        match key.code {
            KeyCode::Enter => Some(Message::SubmitRequested),
            KeyCode::Esc => Some(Message::Quit),
            _ => {
                if self.text_input.handle_key(key) {
                    Some(Message::QueryChanged(self.text_input.text().to_string()))
                } else {
                    None
                }
            }
        }
    }
}
