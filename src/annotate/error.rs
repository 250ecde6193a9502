use std::time::Duration;

use thiserror::Error;

/// Failure taxonomy for one submission run. Nothing here is retried: every
/// variant propagates to the process boundary.
#[derive(Error, Debug)]
pub enum AnnotateError {
    /// Credential load, parse, or token-exchange failure. Fatal.
    #[error("credential failure: {0}")]
    Credentials(String),

    /// Transport-level failure talking to the service.
    #[error("network error: {0}")]
    Http(#[from] reqwest::Error),

    /// The service rejected the call synchronously (bad request, auth, quota).
    #[error("service rejected the call ({status}): {message}")]
    Api { status: u16, message: String },

    /// The operation did not resolve within the hard deadline. The server
    /// keeps processing and will still write the output object; this process
    /// just stops observing it.
    #[error("operation {name} did not resolve within {waited:?}")]
    Timeout { name: String, waited: Duration },

    /// The operation resolved, but with an error status instead of a result.
    #[error("remote processing failed (code {code}): {message}")]
    Remote { code: i32, message: String },
}
