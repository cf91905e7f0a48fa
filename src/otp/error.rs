use thiserror::Error;

/// Maximum number of error body characters carried into an error.
pub const MAX_ERROR_CHARS: usize = 200;

/// Why a backend call did not produce a usable response.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OtpError {
    #[error("Config error: {0}")]
    Config(String),
    #[error("Network error: {0}")]
    Network(String),
    #[error("Request failed ({status}): {message}")]
    Http { status: u16, message: String },
    #[error("Response error: {0}")]
    Parse(String),
    #[error("{0} is not available on the current screen")]
    OutOfStep(&'static str),
}

impl OtpError {
    /// Build an `Http` error from a non-2xx body.
    ///
    /// The backend reports failures as `{"detail": "<reason>"}`; when that shape is
    /// present only the reason is kept, otherwise the raw body is used.
    #[must_use]
    pub fn from_body(status: u16, body: &str) -> Self {
        let detail = serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|json| json.get("detail").and_then(|d| d.as_str()).map(str::to_string));

        Self::Http {
            status,
            message: sanitize_body(detail.as_deref().unwrap_or(body)),
        }
    }

    /// HTTP status of the failed response, if the backend answered at all.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for OtpError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::Parse(format!("Failed to decode response: {err}"))
        } else if err.is_builder() {
            Self::Config(format!("Failed to build request: {err}"))
        } else {
            Self::Network(format!("Unable to reach the server: {err}"))
        }
    }
}

/// Trim and truncate an error body.
fn sanitize_body(body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        "Request failed.".to_string()
    } else {
        trimmed.chars().take(MAX_ERROR_CHARS).collect()
    }
}
