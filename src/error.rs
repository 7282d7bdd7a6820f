// src/error.rs
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PortfolioError {
    #[error("HTTP request failed: {0}")]
    ReqwestError(#[from] reqwest::Error),

    #[error("URL parsing failed: {0}")]
    UrlParseError(#[from] url::ParseError),

    #[error("JSON processing error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("JSON deserialization failed: {0}")]
    JsonDeserializationFailed(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Operation forbidden: {0}")]
    OperationForbidden(String),

    #[error("Internal server error: {0}")]
    InternalServerError(String),

    #[error("Unexpected response (HTTP {status}): {body}")]
    UnexpectedResponse { status: u16, body: String },
}

impl PortfolioError {
    /// Creates a `PortfolioError` from an HTTP status code and the raw
    /// response body. The backend reports failures as plain text or HTML,
    /// so only a snippet of the body is carried along for context.
    pub(crate) fn from_response(status_code: u16, response_body: &str) -> Self {
        let snippet: String = response_body.chars().take(200).collect();

        if status_code >= 500 {
            PortfolioError::InternalServerError(format!("HTTP {}: {}", status_code, snippet))
        } else if status_code == 401 || status_code == 403 {
            PortfolioError::OperationForbidden(format!("HTTP {}: {}", status_code, snippet))
        } else if status_code == 404 {
            PortfolioError::NotFound(format!("HTTP {}: {}", status_code, snippet))
        } else {
            PortfolioError::UnexpectedResponse {
                status: status_code,
                body: snippet,
            }
        }
    }
}
