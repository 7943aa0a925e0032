//! Client side of the recommendation backend's wire contract.
//!
//! `POST {base_url}/recommend` with `{"query": ..., "top_k": ...}` answers
//! with a ranked JSON array of faculty records. [`RecommendBackend`] is the
//! seam the interactive controller and the one-shot CLI talk to, so tests can
//! swap the HTTP client for an in-process fake.

pub mod error;
pub mod http;

#[cfg(test)]
mod http_test;

use crate::schemas::FacultyRecord;
use serde::{Deserialize, Serialize};

pub use error::TransportError;
pub use http::HttpRecommendClient;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendRequest {
    pub query: String,
    pub top_k: usize,
}

impl RecommendRequest {
    pub fn new(query: impl Into<String>, top_k: usize) -> Self {
        Self {
            query: query.into(),
            top_k,
        }
    }
}

/// Anything that can turn a query into a ranked list of faculty records.
///
/// Implementations block until the backend answers or the configured timeout
/// elapses; callers run them off the UI thread.
pub trait RecommendBackend: Send + Sync {
    fn recommend(&self, request: &RecommendRequest) -> Result<Vec<FacultyRecord>, TransportError>;
}
