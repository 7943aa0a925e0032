//! Fakes shared by unit tests across modules.

use crate::recommend::{RecommendBackend, RecommendRequest, TransportError};
use crate::schemas::FacultyRecord;
use ratatui::{Frame, Terminal, backend::TestBackend, buffer::Buffer};
use std::collections::HashMap;
use std::sync::Mutex;
use std::thread;
use std::time::Duration;

pub(crate) fn faculty(name: &str) -> FacultyRecord {
    FacultyRecord::new(
        name,
        format!("{name} specialization"),
        format!("{name} bio"),
        format!("https://example.edu/faculty/{}", name.to_lowercase().replace(' ', "-")),
    )
}

pub(crate) fn faculty_list(names: &[&str]) -> Vec<FacultyRecord> {
    names.iter().map(|name| faculty(name)).collect()
}

#[derive(Clone)]
pub(crate) enum Reply {
    Records(Vec<FacultyRecord>),
    Status(u16),
    Timeout,
    Delayed(Duration, Box<Reply>),
}

impl Reply {
    fn resolve(self) -> Result<Vec<FacultyRecord>, TransportError> {
        match self {
            Reply::Records(records) => Ok(records),
            Reply::Status(code) => Err(TransportError::Status(code)),
            Reply::Timeout => Err(TransportError::Timeout { timeout_ms: 15_000 }),
            Reply::Delayed(delay, reply) => {
                thread::sleep(delay);
                reply.resolve()
            }
        }
    }
}

/// Backend that answers each query with a canned reply and remembers what it
/// was asked.
pub(crate) struct ScriptedBackend {
    replies: HashMap<String, Reply>,
    fallback: Reply,
    calls: Mutex<Vec<RecommendRequest>>,
}

impl ScriptedBackend {
    pub(crate) fn new() -> Self {
        Self {
            replies: HashMap::new(),
            fallback: Reply::Records(Vec::new()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn on(mut self, query: &str, reply: Reply) -> Self {
        self.replies.insert(query.to_string(), reply);
        self
    }

    pub(crate) fn otherwise(mut self, reply: Reply) -> Self {
        self.fallback = reply;
        self
    }

    pub(crate) fn calls(&self) -> Vec<RecommendRequest> {
        self.calls.lock().unwrap().clone()
    }
}

impl RecommendBackend for ScriptedBackend {
    fn recommend(&self, request: &RecommendRequest) -> Result<Vec<FacultyRecord>, TransportError> {
        self.calls.lock().unwrap().push(request.clone());
        let reply = self
            .replies
            .get(&request.query)
            .cloned()
            .unwrap_or_else(|| self.fallback.clone());
        reply.resolve()
    }
}

pub(crate) fn buffer_to_string(buffer: &Buffer) -> String {
    let mut output = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            let cell = buffer.cell((x, y)).unwrap();
            output.push_str(cell.symbol());
        }
        output.push('\n');
    }
    output
}

/// Draw one frame on a `TestBackend` and return its text content.
pub(crate) fn render_to_string(width: u16, height: u16, draw: impl FnOnce(&mut Frame)) -> String {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(draw).unwrap();
    buffer_to_string(terminal.backend().buffer())
}
