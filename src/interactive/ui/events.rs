use crate::interactive::domain::models::SearchResponse;

#[derive(Clone, Debug)]
pub enum Message {
    // Search events
    QueryChanged(String),
    SubmitRequested,
    SearchSettled(SearchResponse),
    SelectResult(usize),
    ToggleFocus,

    // Mode changes
    EnterResultDetail,
    ExitToSearch,
    ShowHelp,
    CloseHelp,

    // Profile actions
    OpenProfile,
    CopyProfileUrl,

    // Display options
    ToggleTruncation,

    // UI events
    SetStatus(String),
    ClearStatus,

    // Terminal events
    Quit,
}
