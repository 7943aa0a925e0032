use crate::interactive::constants::*;
use crate::interactive::domain::models::Focus;
use crate::interactive::ui::app_state::{AppState, Mode};
use crate::interactive::ui::components::{
    Component,
    help_dialog::HelpDialog,
    result_detail::ResultDetail,
    result_list::ResultList,
    search_bar::SearchBar,
    view_layout::{KeyHint, Styles, hint_line, status_line},
};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

const TITLE: &str = "Faculty Finder";
const TAGLINE: &str = "Find the right faculty for your research";
const DESCRIPTION: &str = "Discover faculty expertise beyond titles using semantic search.";

const INPUT_HINTS: &[KeyHint] = &[
    ("Enter", "Search"),
    ("Tab", "Results"),
    ("Ctrl+O", "Open"),
    ("Ctrl+Y", "Copy"),
    ("F1", "Help"),
    ("Esc", "Quit"),
];

const RESULTS_HINTS: &[KeyHint] = &[
    ("↑/↓", "Navigate"),
    ("Enter", "Details"),
    ("o", "Open"),
    ("c", "Copy"),
    ("Tab", "Input"),
    ("?", "Help"),
    ("Esc", "Quit"),
];

/// Draws the whole screen from `AppState`. Components keep only view state
/// (cursor, scroll, last drawn areas); everything else is read from state
/// on every frame.
pub struct Renderer {
    search_bar: SearchBar,
    result_list: ResultList,
    result_detail: ResultDetail,
    help_dialog: HelpDialog,
    hero_collapsed: bool,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer {
    pub fn new() -> Self {
        Self {
            search_bar: SearchBar::new(),
            result_list: ResultList::new(),
            result_detail: ResultDetail::new(),
            help_dialog: HelpDialog::new(),
            hero_collapsed: false,
        }
    }

    pub fn render(&mut self, f: &mut Frame, state: &AppState) {
        self.result_list.begin_frame();
        self.search_bar.clear_button_area();

        match state.mode {
            Mode::Search => self.render_search_mode(f, state),
            Mode::ResultDetail => self.render_detail_mode(f, state),
            Mode::Help => self.render_help_mode(f, state),
        }
    }

    /// Scroll the results region into view: reset the card viewport and
    /// collapse the hero so the cards get the space. Returns false when the
    /// region is not on screen.
    pub fn scroll_results_into_view(&mut self) -> bool {
        if !self.result_list.scroll_into_view() {
            tracing::debug!("results region not mounted, skipping scroll");
            return false;
        }
        self.hero_collapsed = true;
        true
    }

    pub fn is_hero_collapsed(&self) -> bool {
        self.hero_collapsed
    }

    fn render_search_mode(&mut self, f: &mut Frame, state: &AppState) {
        let hero_height = if self.hero_collapsed {
            COLLAPSED_HERO_HEIGHT
        } else {
            HERO_HEIGHT
        };
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(hero_height),
                Constraint::Length(SEARCH_BAR_HEIGHT),
                Constraint::Length(NOTICE_HEIGHT),
                Constraint::Min(0),
                Constraint::Length(FOOTER_HEIGHT),
            ])
            .split(f.area());

        self.render_hero(f, chunks[0]);

        self.search_bar.set_query(state.search.query.text());
        self.search_bar.set_searching(state.is_loading());
        self.search_bar.set_focused(state.search.focus == Focus::Input);
        self.search_bar.render(f, chunks[1]);

        let error = state.error_message();
        if !error.is_empty() {
            f.render_widget(Paragraph::new(error).style(Styles::error()), chunks[2]);
        }

        self.result_list
            .sync(&state.search.phase, state.search.selected_index);
        self.result_list
            .set_truncation_enabled(state.ui.truncation_enabled);
        self.result_list.render(f, chunks[3]);

        self.render_footer(f, chunks[4], state);
    }

    fn render_hero(&self, f: &mut Frame, area: Rect) {
        let title = Line::from(Span::styled(TITLE, Styles::title()));

        if self.hero_collapsed {
            f.render_widget(Paragraph::new(title), area);
            return;
        }

        let hero = Paragraph::new(vec![
            title,
            Line::from(Span::styled(TAGLINE, Styles::normal())),
            Line::from(Span::styled(DESCRIPTION, Styles::subtitle())),
        ])
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::BOTTOM));
        f.render_widget(hero, area);
    }

    fn render_footer(&self, f: &mut Frame, area: Rect, state: &AppState) {
        let footer = match (&state.ui.message, state.search.focus) {
            (Some(message), _) => status_line(message),
            (None, Focus::Input) => hint_line(INPUT_HINTS),
            (None, Focus::Results) => hint_line(RESULTS_HINTS),
        };
        f.render_widget(Paragraph::new(footer).alignment(Alignment::Center), area);
    }

    fn render_detail_mode(&mut self, f: &mut Frame, state: &AppState) {
        match &state.ui.selected_record {
            Some(record) => {
                self.result_detail.set_record(record.clone());
                self.result_detail.set_message(state.ui.message.clone());
                self.result_detail.render(f, f.area());
            }
            None => self.result_detail.clear(),
        }
    }

    fn render_help_mode(&mut self, f: &mut Frame, state: &AppState) {
        // First render the screen the help was opened from
        match state.ui.help_return_mode {
            Mode::ResultDetail => self.render_detail_mode(f, state),
            _ => self.render_search_mode(f, state),
        }

        // Then render the help dialog on top
        self.help_dialog.render(f, f.area());
    }

    pub fn get_search_bar_mut(&mut self) -> &mut SearchBar {
        &mut self.search_bar
    }

    pub fn get_result_list_mut(&mut self) -> &mut ResultList {
        &mut self.result_list
    }

    pub fn get_result_detail_mut(&mut self) -> &mut ResultDetail {
        &mut self.result_detail
    }

    pub fn get_help_dialog_mut(&mut self) -> &mut HelpDialog {
        &mut self.help_dialog
    }
}
