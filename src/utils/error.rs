use std::fmt;

#[derive(Debug)]
pub enum AppError {
    /// Transport failure or timeout talking to the statistics API.
    UpstreamUnavailable(String),
    /// Upstream answered, but not with the JSON shape we expect.
    UpstreamMalformed(String),
    MissingParameter(String),
    NotFound(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::UpstreamUnavailable(msg) => write!(f, "Upstream unavailable: {}", msg),
            AppError::UpstreamMalformed(msg) => write!(f, "Upstream malformed: {}", msg),
            AppError::MissingParameter(msg) => write!(f, "Missing parameter: {}", msg),
            AppError::NotFound(msg) => write!(f, "Not found: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}
