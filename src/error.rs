/// All errors that can occur while talking to the registration service.
#[derive(thiserror::Error, Debug)]
pub enum RegistrarError {
    /// HTTP request failed (network, DNS, TLS, timeout, etc.).
    #[error("http request failed for {url}: {source}")]
    Http {
        url: String,
        source: reqwest::Error,
    },

    /// Server returned a non-success HTTP status code.
    #[error("unexpected status {status} for {url}")]
    UnexpectedStatus {
        url: String,
        status: reqwest::StatusCode,
    },

    /// Failed to read the response body as text.
    #[error("failed to read response body from {url}: {source}")]
    ResponseBody {
        url: String,
        source: reqwest::Error,
    },

    /// Response body was not valid JSON for the expected shape.
    #[error("failed to decode response from {url}: {source}")]
    Json {
        url: String,
        source: serde_json::Error,
    },

    /// The session record file could not be read or written.
    #[error("session store i/o failed: {0}")]
    SessionIo(#[from] std::io::Error),

    /// The persisted session record could not be encoded or decoded.
    #[error("invalid session record: {0}")]
    SessionRecord(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, RegistrarError>;
