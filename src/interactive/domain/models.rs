use crate::recommend::RecommendRequest;
use crate::schemas::FacultyRecord;

#[derive(Clone, Copy, PartialEq, Debug)]
pub enum Mode {
    Search,
    ResultDetail,
    Help,
}

/// Which part of the search screen receives plain key presses.
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum Focus {
    Input,
    Results,
}

/// Lifecycle of the current search. Exactly one phase holds at a time, so
/// stale results can never be displayed next to a loading indicator or an
/// error.
#[derive(Clone, Debug, PartialEq)]
pub enum SearchPhase {
    Idle,
    Loading,
    Success(Vec<FacultyRecord>),
    Error(String),
}

impl SearchPhase {
    pub fn is_loading(&self) -> bool {
        matches!(self, SearchPhase::Loading)
    }

    /// Records of a successful search; empty in every other phase.
    pub fn results(&self) -> &[FacultyRecord] {
        match self {
            SearchPhase::Success(records) => records,
            _ => &[],
        }
    }

    /// User-facing error text; empty unless the phase is `Error`.
    pub fn error_message(&self) -> &str {
        match self {
            SearchPhase::Error(message) => message,
            _ => "",
        }
    }
}

// Search request and response for async communication
#[derive(Clone, Debug, PartialEq)]
pub struct SearchRequest {
    pub id: u64,
    pub query: String,
    pub top_k: usize,
}

impl SearchRequest {
    pub fn to_wire(&self) -> RecommendRequest {
        RecommendRequest::new(self.query.clone(), self.top_k)
    }
}

/// What the UI learns about a settled request. Failure causes are logged by
/// the search service and deliberately not carried here.
#[derive(Clone, Debug, PartialEq)]
pub enum SearchOutcome {
    Records(Vec<FacultyRecord>),
    Failed,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SearchResponse {
    pub id: u64,
    pub query: String,
    pub outcome: SearchOutcome,
}
