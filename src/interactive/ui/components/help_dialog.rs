use crate::interactive::constants::{HELP_DIALOG_MARGIN, HELP_DIALOG_MAX_WIDTH};
use crate::interactive::ui::components::Component;
use crate::interactive::ui::components::view_layout::Styles;
use crate::interactive::ui::events::Message;
use crossterm::event::KeyEvent;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

#[derive(Default)]
pub struct HelpDialog;

impl HelpDialog {
    pub fn new() -> Self {
        Self
    }

    fn section(title: &'static str) -> Line<'static> {
        Line::from(Span::styled(title, Styles::label()))
    }

    pub fn get_help_text() -> Vec<Line<'static>> {
        vec![
            Line::from(Span::styled("Faculty Finder - Interactive Mode", Styles::title())),
            Line::from(""),
            Self::section("Search:"),
            Line::from("  Type        - Edit the research interest"),
            Line::from("  Enter       - Search (or click [ Search ])"),
            Line::from("  Tab         - Switch focus between input and results"),
            Line::from("  ↑/↓ PgUp/PgDn - Navigate results"),
            Line::from("  Ctrl+O      - Open the selected profile"),
            Line::from("  Ctrl+Y      - Copy the selected profile URL"),
            Line::from("  Ctrl+T      - Toggle full biographies"),
            Line::from("  Esc         - Quit"),
            Line::from(""),
            Self::section("Results (focused):"),
            Line::from("  Enter       - View faculty details"),
            Line::from("  o / c       - Open profile / copy URL"),
            Line::from("  ?           - Show this help"),
            Line::from(""),
            Self::section("Faculty Details:"),
            Line::from("  ↑/↓         - Scroll biography"),
            Line::from("  o / c       - Open profile / copy URL"),
            Line::from("  Esc         - Back to results"),
            Line::from(""),
            Line::from("  F1 shows this help anywhere; Ctrl+C twice exits."),
            Line::from(""),
            Line::from("Press any key to close this help..."),
        ]
    }
}

impl Component for HelpDialog {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        let help_text = Self::get_help_text();

        let width = HELP_DIALOG_MAX_WIDTH.min(area.width.saturating_sub(HELP_DIALOG_MARGIN));
        let height =
            (help_text.len() as u16 + 2).min(area.height.saturating_sub(HELP_DIALOG_MARGIN));

        let x = area.x + (area.width - width) / 2;
        let y = area.y + (area.height - height) / 2;
        let dialog_area = Rect::new(x, y, width, height);

        f.render_widget(Clear, dialog_area);

        let help = Paragraph::new(help_text)
            .block(
                Block::default()
                    .title(" Help ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Green)),
            )
            .style(Styles::normal())
            .alignment(Alignment::Left);

        f.render_widget(help, dialog_area);
    }

    fn handle_key(&mut self, _key: KeyEvent) -> Option<Message> {
        // Any key closes the help dialog
        Some(Message::CloseHelp)
    }
}
