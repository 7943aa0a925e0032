/// The raw text of the search input.
///
/// Edits are stored verbatim; trimming only happens when the query is
/// submitted.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Query {
    text: String,
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// The value a submission would send, or `None` when there is nothing to
    /// search for.
    pub fn submission(&self) -> Option<String> {
        normalize(&self.text)
    }
}

/// Trim surrounding whitespace; an empty result means "do not search".
pub fn normalize(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
