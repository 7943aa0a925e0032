use thiserror::Error;

/// Why a recommendation request did not produce a result set.
///
/// The interactive controller never branches on the variant; it only logs it
/// and shows a fixed message. The distinction exists for diagnostics and for
/// the one-shot CLI's log output.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("request timed out after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },

    #[error("could not connect to recommendation backend: {0}")]
    Connect(#[source] reqwest::Error),

    #[error("recommendation backend answered with HTTP {0}")]
    Status(u16),

    #[error("malformed recommendation response: {0}")]
    Decode(String),

    #[error("recommendation request failed: {0}")]
    Request(#[source] reqwest::Error),
}

impl TransportError {
    /// Classify a reqwest failure, folding timeouts and connect errors into
    /// their own variants.
    pub fn from_reqwest(err: reqwest::Error, timeout_ms: u64) -> Self {
        if err.is_timeout() {
            TransportError::Timeout { timeout_ms }
        } else if err.is_connect() {
            TransportError::Connect(err)
        } else if err.is_decode() {
            TransportError::Decode(err.to_string())
        } else if let Some(status) = err.status() {
            TransportError::Status(status.as_u16())
        } else {
            TransportError::Request(err)
        }
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, TransportError::Timeout { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            TransportError::Timeout { timeout_ms: 15000 }.to_string(),
            "request timed out after 15000ms"
        );
        assert_eq!(
            TransportError::Status(500).to_string(),
            "recommendation backend answered with HTTP 500"
        );
        assert_eq!(
            TransportError::Decode("expected array".to_string()).to_string(),
            "malformed recommendation response: expected array"
        );
    }

    #[test]
    fn test_is_timeout() {
        assert!(TransportError::Timeout { timeout_ms: 1 }.is_timeout());
        assert!(!TransportError::Status(503).is_timeout());
    }
}
