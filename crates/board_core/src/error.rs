use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ResolveError {
    /// No recognized board URL shape matched. Retrying will not help.
    #[error("unparseable careers url: {url}")]
    UnparseableUrl { url: String },
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum KeywordError {
    /// The combined keyword pattern exceeded the regex engine's size limits.
    #[error("keyword pattern too large for {count} keywords: {message}")]
    PatternTooLarge { count: usize, message: String },
}
