// Wire types for the summary endpoint
//
// The request body is the FormState itself; the response wraps the rendered
// summary in a single `result` field.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Body returned by `POST /brand`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryResponse {
    pub result: String,
}

/// Generated summary text, displayed verbatim
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SummaryText(String);

impl SummaryText {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SummaryText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<SummaryResponse> for SummaryText {
    fn from(response: SummaryResponse) -> Self {
        Self(response.result)
    }
}
