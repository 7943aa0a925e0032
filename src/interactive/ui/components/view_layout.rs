use crate::interactive::ui::components::is_exit_prompt;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// A key and what it does, shown in footers as `key: description`.
pub type KeyHint = (&'static str, &'static str);

/// Footer line listing `hints`, separated by `|`.
pub fn hint_line(hints: &[KeyHint]) -> Line<'static> {
    let mut spans = Vec::with_capacity(hints.len() * 3);
    for (i, (key, description)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" | ", Styles::dimmed()));
        }
        spans.push(Span::styled(format!("{key}:"), Styles::action_key()));
        spans.push(Span::styled(format!(" {description}"), Styles::action_description()));
    }
    Line::from(spans)
}

/// Footer line for a transient status message.
pub fn status_line(message: &str) -> Line<'static> {
    let style = if is_exit_prompt(message) {
        Styles::label()
    } else {
        Styles::success()
    };
    Line::from(Span::styled(message.to_string(), style))
}

/// Frame for full-screen views: a title block, the content, and an optional
/// one-line footer.
pub struct ViewLayout {
    title: String,
    subtitle: Option<String>,
    footer: Option<Line<'static>>,
}

impl ViewLayout {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            subtitle: None,
            footer: None,
        }
    }

    pub fn subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    pub fn footer(mut self, footer: Line<'static>) -> Self {
        self.footer = Some(footer);
        self
    }

    pub fn render(self, f: &mut Frame, area: Rect, render_content: impl FnOnce(&mut Frame, Rect)) {
        let footer_height = if self.footer.is_some() { 1 } else { 0 };
        let [title_area, content_area, footer_area] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(footer_height),
        ])
        .areas(area);

        let mut heading = vec![Line::from(Span::styled(self.title, Styles::title()))];
        if let Some(subtitle) = self.subtitle {
            heading.push(Line::from(Span::styled(subtitle, Styles::subtitle())));
        }
        f.render_widget(
            Paragraph::new(heading).block(Block::default().borders(Borders::BOTTOM)),
            title_area,
        );

        render_content(f, content_area);

        if let Some(footer) = self.footer {
            f.render_widget(Paragraph::new(footer).alignment(Alignment::Center), footer_area);
        }
    }
}

pub struct ColorScheme;

impl ColorScheme {
    pub const PRIMARY: Color = Color::Green;
    pub const SECONDARY: Color = Color::Yellow;
    pub const ACCENT: Color = Color::Cyan;
    pub const TEXT: Color = Color::White;
    pub const TEXT_DIM: Color = Color::DarkGray;
    pub const SELECTION: Color = Color::DarkGray;
    pub const ERROR: Color = Color::Red;
}

pub struct Styles;

impl Styles {
    pub fn title() -> Style {
        Style::default()
            .fg(ColorScheme::PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    pub fn subtitle() -> Style {
        Style::default().fg(ColorScheme::TEXT_DIM)
    }

    pub fn label() -> Style {
        Style::default().fg(ColorScheme::SECONDARY)
    }

    /// Profile URLs.
    pub fn link() -> Style {
        Style::default()
            .fg(ColorScheme::ACCENT)
            .add_modifier(Modifier::UNDERLINED)
    }

    pub fn selected() -> Style {
        Style::default()
            .bg(ColorScheme::SELECTION)
            .add_modifier(Modifier::BOLD)
    }

    pub fn normal() -> Style {
        Style::default().fg(ColorScheme::TEXT)
    }

    pub fn dimmed() -> Style {
        Style::default().fg(ColorScheme::TEXT_DIM)
    }

    pub fn loading() -> Style {
        Style::default()
            .fg(ColorScheme::SECONDARY)
            .add_modifier(Modifier::ITALIC)
    }

    pub fn action_key() -> Style {
        Style::default()
            .fg(ColorScheme::SECONDARY)
            .add_modifier(Modifier::BOLD)
    }

    pub fn action_description() -> Style {
        Style::default().fg(ColorScheme::TEXT_DIM)
    }

    pub fn success() -> Style {
        Style::default()
            .fg(ColorScheme::PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    pub fn error() -> Style {
        Style::default()
            .fg(ColorScheme::ERROR)
            .add_modifier(Modifier::BOLD)
    }
}
