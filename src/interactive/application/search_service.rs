use crate::interactive::domain::models::{SearchOutcome, SearchRequest, SearchResponse};
use crate::recommend::{RecommendBackend, TransportError};
use crate::schemas::FacultyRecord;
use std::sync::Arc;
use std::time::Instant;

pub struct SearchService {
    backend: Arc<dyn RecommendBackend>,
}

impl SearchService {
    pub fn new(backend: Arc<dyn RecommendBackend>) -> Self {
        Self { backend }
    }

    /// Run one request against the backend, keeping at most `top_k` records
    /// in backend order.
    pub fn fetch(&self, request: &SearchRequest) -> Result<Vec<FacultyRecord>, TransportError> {
        let mut records = self.backend.recommend(&request.to_wire())?;

        if records.len() > request.top_k {
            tracing::warn!(
                request_id = request.id,
                received = records.len(),
                top_k = request.top_k,
                "backend returned more records than requested; truncating"
            );
            records.truncate(request.top_k);
        }

        Ok(records)
    }

    /// Like [`fetch`](Self::fetch), but collapses every failure into
    /// [`SearchOutcome::Failed`] after logging the cause.
    pub fn search(&self, request: SearchRequest) -> SearchResponse {
        let started = Instant::now();

        let outcome = match self.fetch(&request) {
            Ok(records) => {
                tracing::info!(
                    request_id = request.id,
                    results = records.len(),
                    elapsed_ms = started.elapsed().as_millis() as u64,
                    "search settled"
                );
                SearchOutcome::Records(records)
            }
            Err(e) => {
                tracing::warn!(
                    request_id = request.id,
                    query = %request.query,
                    error = %e,
                    elapsed_ms = started.elapsed().as_millis() as u64,
                    "recommendation request failed"
                );
                SearchOutcome::Failed
            }
        };

        SearchResponse {
            id: request.id,
            query: request.query,
            outcome,
        }
    }
}
