// Summary service client
//
// The wizard only knows the SummaryService trait; HttpSummaryClient is the
// production implementation talking to `sparkup serve`.

mod http;

pub use http::HttpSummaryClient;

use async_trait::async_trait;
use thiserror::Error;

use crate::brand::{FormState, SummaryText};

/// Turns a complete form into a generated summary. Implementations keep no
/// state between calls.
#[async_trait]
pub trait SummaryService: Send + Sync {
    async fn generate(&self, form: &FormState) -> Result<SummaryText, SummaryError>;
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SummaryError {
    /// Connection refused, DNS failure, timeout, broken transport
    #[error("could not reach the summary service at {url}: {reason}")]
    Unreachable { url: String, reason: String },

    #[error("summary service returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("failed to parse summary service response: {0}")]
    Decode(String),
}

impl SummaryError {
    /// Whether trying the same request again may succeed
    pub fn is_retryable(&self) -> bool {
        match self {
            SummaryError::Unreachable { .. } => true,
            SummaryError::Status { status, .. } => *status >= 500 || *status == 429,
            SummaryError::Decode(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retryable_classification() {
        let unreachable = SummaryError::Unreachable {
            url: "http://localhost:4000/brand".into(),
            reason: "connection refused".into(),
        };
        assert!(unreachable.is_retryable());

        let server_error = SummaryError::Status {
            status: 503,
            body: String::new(),
        };
        assert!(server_error.is_retryable());

        let bad_request = SummaryError::Status {
            status: 400,
            body: String::new(),
        };
        assert!(!bad_request.is_retryable());

        assert!(!SummaryError::Decode("eof".into()).is_retryable());
    }
}
