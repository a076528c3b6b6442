use std::fmt;

/// Error types for urlextract operations
#[derive(Debug)]
pub enum UrlExtractError {
    /// IO error (reading files, stdin)
    Io(std::io::Error),

    /// Configuration error
    Config(String),

    /// Include/exclude pattern failed to compile
    Regex(regex::Error),

    /// TOML parsing error
    TomlParsing(toml::de::Error),

    /// JSON serialization error
    Json(serde_json::Error),

    /// Path expansion error
    PathExpansion(String),

    /// File not found error
    FileNotFound(String),

    /// Invalid argument error
    InvalidArgument(String),

    /// File walking/ignore error
    FileWalking(ignore::Error),
}

impl fmt::Display for UrlExtractError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UrlExtractError::Io(err) => write!(f, "IO error: {err}"),
            UrlExtractError::Config(msg) => write!(f, "Configuration error: {msg}"),
            UrlExtractError::Regex(err) => write!(f, "Regex error: {err}"),
            UrlExtractError::TomlParsing(err) => write!(f, "TOML parsing error: {err}"),
            UrlExtractError::Json(err) => write!(f, "JSON error: {err}"),
            UrlExtractError::PathExpansion(msg) => write!(f, "Path expansion error: {msg}"),
            UrlExtractError::FileNotFound(path) => write!(f, "File not found: {path}"),
            UrlExtractError::InvalidArgument(msg) => write!(f, "Invalid argument: {msg}"),
            UrlExtractError::FileWalking(err) => write!(f, "File walking error: {err}"),
        }
    }
}

impl std::error::Error for UrlExtractError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            UrlExtractError::Io(err) => Some(err),
            UrlExtractError::Regex(err) => Some(err),
            UrlExtractError::TomlParsing(err) => Some(err),
            UrlExtractError::Json(err) => Some(err),
            UrlExtractError::FileWalking(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for UrlExtractError {
    fn from(err: std::io::Error) -> Self {
        UrlExtractError::Io(err)
    }
}

impl From<regex::Error> for UrlExtractError {
    fn from(err: regex::Error) -> Self {
        UrlExtractError::Regex(err)
    }
}

impl From<toml::de::Error> for UrlExtractError {
    fn from(err: toml::de::Error) -> Self {
        UrlExtractError::TomlParsing(err)
    }
}

impl From<serde_json::Error> for UrlExtractError {
    fn from(err: serde_json::Error) -> Self {
        UrlExtractError::Json(err)
    }
}

impl From<ignore::Error> for UrlExtractError {
    fn from(err: ignore::Error) -> Self {
        UrlExtractError::FileWalking(err)
    }
}

/// Type alias for Results using UrlExtractError
pub type Result<T> = std::result::Result<T, UrlExtractError>;
