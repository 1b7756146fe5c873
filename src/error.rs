use thiserror::Error;

/// The one message the user ever sees for a failed request.
pub const ALERT_MESSAGE: &str = "Unable to load questions. Please try your request again";

/// Any failed call to the trivia service. The variants only matter for the
/// log; the user gets [`ALERT_MESSAGE`] regardless.
#[derive(Error, Debug)]
pub enum RequestError {
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("server responded with HTTP {0}")]
    Status(u16),
    #[error("malformed response body: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("server reported failure")]
    Rejected,
}
