use crate::interactive::domain::models::SearchRequest;

/// Side effects requested by a state transition. The runtime executes them;
/// `AppState::update` itself never touches the network or the terminal.
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    None,
    DispatchSearch(SearchRequest),
    ScrollResultsIntoView,
    OpenUrl(String),
    CopyToClipboard(String),
    ShowMessage(String),
    ClearMessage,
    ScheduleClearMessage(u64), // delay in milliseconds
    Quit,
}
