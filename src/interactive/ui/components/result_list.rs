use crate::interactive::constants::{LOADING_MESSAGE, NO_RESULTS_MESSAGE};
use crate::interactive::domain::models::SearchPhase;
use crate::interactive::ui::components::{
    Component, list_viewer::ListViewer, view_layout::Styles,
};
use crate::interactive::ui::events::Message;
use crate::schemas::FacultyRecord;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    widgets::Paragraph,
};

/// The results region of the search screen.
///
/// Shows nothing before the first search and after a failure, a loading
/// indicator while a search is pending, and the ranked cards once one
/// succeeds.
pub struct ResultList {
    list_viewer: ListViewer<FacultyRecord>,
    loading: bool,
    settled: bool,
    mounted: bool,
}

impl Default for ResultList {
    fn default() -> Self {
        Self::new()
    }
}

impl ResultList {
    pub fn new() -> Self {
        Self {
            list_viewer: ListViewer::new(
                "Recommended Faculty".to_string(),
                NO_RESULTS_MESSAGE.to_string(),
            ),
            loading: false,
            settled: false,
            mounted: false,
        }
    }

    /// Mirror the search phase. Cards are only replaced when the records
    /// differ, so scrolling survives redraws.
    pub fn sync(&mut self, phase: &SearchPhase, selected_index: usize) {
        self.loading = phase.is_loading();
        self.settled = matches!(phase, SearchPhase::Success(_));

        let records = phase.results();
        if self.list_viewer.items != records {
            self.list_viewer.set_items(records.to_vec());
        }
        self.list_viewer.set_selected_index(selected_index);
    }

    pub fn set_truncation_enabled(&mut self, enabled: bool) {
        self.list_viewer.set_truncation_enabled(enabled);
    }

    pub fn selected_result(&self) -> Option<&FacultyRecord> {
        self.list_viewer.get_selected_item()
    }

    pub fn get_selected_index(&self) -> usize {
        self.list_viewer.selected_index()
    }

    pub fn get_scroll_offset(&self) -> usize {
        self.list_viewer.scroll_offset
    }

    /// Called before each frame; `render` marks the region mounted again
    /// when it is drawn.
    pub fn begin_frame(&mut self) {
        self.mounted = false;
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Bring the top-ranked card into view and select it. Returns false,
    /// doing nothing, when the region was not drawn in the last frame.
    pub fn scroll_into_view(&mut self) -> bool {
        if !self.mounted {
            return false;
        }
        self.list_viewer.move_to_start();
        true
    }

    fn selection_message(&self, moved: bool) -> Option<Message> {
        moved.then(|| Message::SelectResult(self.list_viewer.selected_index()))
    }
}

impl Component for ResultList {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        self.mounted = area.height > 0;

        if self.loading {
            let indicator = Paragraph::new(LOADING_MESSAGE)
                .style(Styles::loading())
                .alignment(Alignment::Center);
            f.render_widget(indicator, area);
            return;
        }

        if self.settled {
            self.list_viewer.render(f, area);
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<Message> {
        match key.code {
            KeyCode::Up => {
                let moved = self.list_viewer.move_up();
                self.selection_message(moved)
            }
            KeyCode::Down => {
                let moved = self.list_viewer.move_down();
                self.selection_message(moved)
            }
            KeyCode::Char('p') if key.modifiers == KeyModifiers::CONTROL => {
                let moved = self.list_viewer.move_up();
                self.selection_message(moved)
            }
            KeyCode::Char('n') if key.modifiers == KeyModifiers::CONTROL => {
                let moved = self.list_viewer.move_down();
                self.selection_message(moved)
            }
            KeyCode::PageUp => {
                let moved = self.list_viewer.page_up();
                self.selection_message(moved)
            }
            KeyCode::PageDown => {
                let moved = self.list_viewer.page_down();
                self.selection_message(moved)
            }
            KeyCode::Home => {
                let moved = self.list_viewer.move_to_start();
                self.selection_message(moved)
            }
            KeyCode::End => {
                let moved = self.list_viewer.move_to_end();
                self.selection_message(moved)
            }
            KeyCode::Enter => Some(Message::EnterResultDetail),
            KeyCode::Char('o') => Some(Message::OpenProfile),
            KeyCode::Char('c') => Some(Message::CopyProfileUrl),
            KeyCode::Char('?') => Some(Message::ShowHelp),
            KeyCode::Esc => Some(Message::Quit),
            _ => None,
        }
    }
}
