use thiserror::Error;

/// Ways a question fetch can fail.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SourceError {
    /// Response code 1: not enough questions for the requested amount and category.
    #[error("the trivia API has no questions for this request")]
    NoResults,

    /// Response code 2.
    #[error("the trivia API rejected the request parameters")]
    InvalidParameter,

    /// Response code 3.
    #[error("the trivia API session token does not exist")]
    TokenNotFound,

    /// Response code 4.
    #[error("the trivia API session token has no questions left")]
    TokenEmpty,

    /// Response code 5.
    #[error("rate limited by the trivia API")]
    RateLimited,

    #[error("unknown trivia API response code {0}")]
    UnknownResponseCode(u8),

    #[error("trivia API returned HTTP {status}")]
    Http { status: u16 },

    #[error("request timed out after {0}s")]
    Timeout(u64),

    #[error("network error: {0}")]
    Network(String),
}

impl SourceError {
    pub fn from_response_code(code: u8) -> Option<SourceError> {
        match code {
            0 => None,
            1 => Some(SourceError::NoResults),
            2 => Some(SourceError::InvalidParameter),
            3 => Some(SourceError::TokenNotFound),
            4 => Some(SourceError::TokenEmpty),
            5 => Some(SourceError::RateLimited),
            other => Some(SourceError::UnknownResponseCode(other)),
        }
    }
}
