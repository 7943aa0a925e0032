use crate::config::{DEFAULT_TOP_K, ResponseOrdering};
use crate::interactive::constants::*;
use crate::interactive::domain::models::{
    Focus, SearchOutcome, SearchPhase, SearchRequest, SearchResponse,
};
use crate::interactive::domain::query::{Query, normalize};
use crate::interactive::ui::commands::Command;
use crate::interactive::ui::events::Message;
use crate::schemas::FacultyRecord;

// Re-export Mode
pub use crate::interactive::domain::models::Mode;

pub struct AppState {
    pub mode: Mode,
    pub search: SearchState,
    pub ui: UiState,
}

pub struct SearchState {
    pub query: Query,
    pub phase: SearchPhase,
    pub selected_index: usize,
    pub focus: Focus,
    pub top_k: usize,
    pub ordering: ResponseOrdering,
    /// Id of the most recently dispatched request; 0 before the first one.
    pub latest_request_id: u64,
}

pub struct UiState {
    pub message: Option<String>,
    pub selected_record: Option<FacultyRecord>,
    pub truncation_enabled: bool,
    /// Mode to return to when the help overlay closes.
    pub help_return_mode: Mode,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(DEFAULT_TOP_K, ResponseOrdering::default())
    }
}

impl AppState {
    pub fn new(top_k: usize, ordering: ResponseOrdering) -> Self {
        Self {
            mode: Mode::Search,
            search: SearchState {
                query: Query::new(),
                phase: SearchPhase::Idle,
                selected_index: 0,
                focus: Focus::Input,
                top_k,
                ordering,
                latest_request_id: 0,
            },
            ui: UiState {
                message: None,
                selected_record: None,
                truncation_enabled: true,
                help_return_mode: Mode::Search,
            },
        }
    }

    pub fn is_loading(&self) -> bool {
        self.search.phase.is_loading()
    }

    pub fn results(&self) -> &[FacultyRecord] {
        self.search.phase.results()
    }

    pub fn error_message(&self) -> &str {
        self.search.phase.error_message()
    }

    /// Start a search for `query`.
    ///
    /// A query that is empty after trimming changes nothing and dispatches
    /// nothing. Otherwise the phase becomes `Loading` (dropping any earlier
    /// results or error) and exactly one request is returned for the runtime
    /// to send.
    pub fn search(&mut self, query: &str) -> Command {
        let Some(query) = normalize(query) else {
            return Command::None;
        };

        self.search.latest_request_id += 1;
        self.search.phase = SearchPhase::Loading;
        self.search.selected_index = 0;

        Command::DispatchSearch(SearchRequest {
            id: self.search.latest_request_id,
            query,
            top_k: self.search.top_k,
        })
    }

    pub fn update(&mut self, msg: Message) -> Command {
        match msg {
            Message::QueryChanged(q) => {
                self.search.query.set(q);
                Command::None
            }
            Message::SubmitRequested => match self.search.query.submission() {
                Some(query) => self.search(&query),
                None => Command::None,
            },
            Message::SearchSettled(response) => self.settle(response),
            Message::SelectResult(index) => {
                if index < self.results().len() {
                    self.search.selected_index = index;
                }
                Command::None
            }
            Message::ToggleFocus => {
                self.search.focus = match self.search.focus {
                    Focus::Input => Focus::Results,
                    Focus::Results => Focus::Input,
                };
                Command::None
            }
            Message::EnterResultDetail => {
                if let Some(record) = self.results().get(self.search.selected_index).cloned() {
                    self.ui.selected_record = Some(record);
                    self.mode = Mode::ResultDetail;
                }
                Command::None
            }
            Message::ExitToSearch => {
                self.mode = Mode::Search;
                self.ui.selected_record = None;
                Command::None
            }
            Message::ShowHelp => {
                if self.mode != Mode::Help {
                    self.ui.help_return_mode = self.mode;
                    self.mode = Mode::Help;
                }
                Command::None
            }
            Message::CloseHelp => {
                if self.mode == Mode::Help {
                    self.mode = self.ui.help_return_mode;
                }
                Command::None
            }
            Message::OpenProfile => match self.current_record() {
                Some(record) => Command::OpenUrl(record.profile_url.clone()),
                None => Command::None,
            },
            Message::CopyProfileUrl => match self.current_record() {
                Some(record) => Command::CopyToClipboard(record.profile_url.clone()),
                None => Command::None,
            },
            Message::ToggleTruncation => {
                self.ui.truncation_enabled = !self.ui.truncation_enabled;
                let status = if self.ui.truncation_enabled {
                    "Bio display: Truncated"
                } else {
                    "Bio display: Full Text"
                };
                self.ui.message = Some(status.to_string());
                Command::ScheduleClearMessage(MESSAGE_CLEAR_DELAY_MS)
            }
            Message::SetStatus(msg) => {
                self.ui.message = Some(msg);
                Command::None
            }
            Message::ClearStatus => {
                self.ui.message = None;
                Command::None
            }
            Message::Quit => Command::Quit,
        }
    }

    /// The record profile actions apply to: the one open in the detail view,
    /// otherwise the selected card.
    pub fn current_record(&self) -> Option<&FacultyRecord> {
        match self.mode {
            Mode::ResultDetail => self.ui.selected_record.as_ref(),
            _ => self.results().get(self.search.selected_index),
        }
    }

    fn settle(&mut self, response: SearchResponse) -> Command {
        if self.is_stale(response.id) {
            tracing::debug!(
                id = response.id,
                latest = self.search.latest_request_id,
                "discarding stale search response"
            );
            return Command::None;
        }

        match response.outcome {
            SearchOutcome::Records(mut records) => {
                records.truncate(self.search.top_k);
                self.search.phase = SearchPhase::Success(records);
                self.search.selected_index = 0;
                Command::ScrollResultsIntoView
            }
            SearchOutcome::Failed => {
                self.search.phase = SearchPhase::Error(BACKEND_UNAVAILABLE_MESSAGE.to_string());
                Command::None
            }
        }
    }

    fn is_stale(&self, id: u64) -> bool {
        match self.search.ordering {
            ResponseOrdering::LatestRequest => id != self.search.latest_request_id,
            ResponseOrdering::Arrival => false,
        }
    }
}
