use serde::Serialize;
use std::fmt;

/// A URL found in an input source.
///
/// Tracks where the URL was extracted from so the CLI can report file and
/// line next to each match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UrlLocation {
    /// The extracted URL
    pub url: String,
    /// Line number where the URL was found (1-indexed)
    pub line: u64,
    /// Name of the file (or `<stdin>`) the URL came from
    #[serde(rename = "file")]
    pub file_name: String,
}

/// Errors that can occur when creating a `UrlLocation`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UrlLocationError {
    /// URL is empty
    MissingUrl,
    /// File name is empty
    MissingFileName,
    /// Line number is zero
    InvalidLineNumber,
}

impl fmt::Display for UrlLocationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingUrl => write!(f, "URL is required and cannot be empty"),
            Self::MissingFileName => write!(f, "File name is required and cannot be empty"),
            Self::InvalidLineNumber => write!(f, "Line number must be greater than 0"),
        }
    }
}

impl std::error::Error for UrlLocationError {}

impl UrlLocation {
    /// Create a new UrlLocation with validation.
    ///
    /// The URL is stored exactly as extracted; it is never trimmed or
    /// normalized.
    ///
    /// # Examples
    /// ```
    /// use urlextract::UrlLocation;
    ///
    /// let location = UrlLocation::new(
    ///     "https://example.com".to_string(),
    ///     42,
    ///     "README.md".to_string()
    /// ).unwrap();
    /// assert_eq!(location.url(), "https://example.com");
    /// assert_eq!(location.line(), 42);
    /// ```
    pub fn new(url: String, line: u64, file_name: String) -> Result<Self, UrlLocationError> {
        if url.is_empty() {
            return Err(UrlLocationError::MissingUrl);
        }
        if line == 0 {
            return Err(UrlLocationError::InvalidLineNumber);
        }
        if file_name.is_empty() {
            return Err(UrlLocationError::MissingFileName);
        }

        Ok(Self {
            url,
            line,
            file_name,
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn line(&self) -> u64 {
        self.line
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }
}
