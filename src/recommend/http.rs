use crate::config::ClientConfig;
use crate::recommend::{RecommendBackend, RecommendRequest, TransportError};
use crate::schemas::FacultyRecord;
use reqwest::blocking::Client;
use std::time::Duration;
use url::Url;

/// Blocking HTTP implementation of [`RecommendBackend`].
///
/// A single `reqwest` client is reused for every request so connections to
/// the backend are pooled. The timeout covers the whole exchange, from
/// connect to the last byte of the body.
pub struct HttpRecommendClient {
    client: Client,
    endpoint: Url,
    timeout: Duration,
}

impl HttpRecommendClient {
    pub fn new(config: &ClientConfig) -> Result<Self, TransportError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(concat!("faculty-finder/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(TransportError::Request)?;

        Ok(Self {
            client,
            endpoint: config.recommend_endpoint().clone(),
            timeout: config.timeout,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    fn timeout_ms(&self) -> u64 {
        u64::try_from(self.timeout.as_millis()).unwrap_or(u64::MAX)
    }
}

impl RecommendBackend for HttpRecommendClient {
    fn recommend(&self, request: &RecommendRequest) -> Result<Vec<FacultyRecord>, TransportError> {
        let timeout_ms = self.timeout_ms();

        tracing::debug!(
            endpoint = %self.endpoint,
            query = %request.query,
            top_k = request.top_k,
            "posting recommendation request"
        );

        let response = self
            .client
            .post(self.endpoint.clone())
            .json(request)
            .send()
            .map_err(|e| TransportError::from_reqwest(e, timeout_ms))?;

        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::Status(status.as_u16()));
        }

        let body = response
            .text()
            .map_err(|e| TransportError::from_reqwest(e, timeout_ms))?;

        serde_json::from_str::<Vec<FacultyRecord>>(&body)
            .map_err(|e| TransportError::Decode(e.to_string()))
    }
}
