//! URL extraction
//!
//! Scanning finds `http://` and `https://` tokens in free-form text and
//! filtering applies the include (whitelist) and exclude (blacklist)
//! patterns. `UrlExtractor` composes the two.

pub mod filter;
pub mod scanner;

pub use filter::{PatternMatcher, UrlFilter};
pub use scanner::{URL_PATTERN, scan, scan_iter};

use log::debug;
use regex::Regex;
use serde_json::Value;

use crate::config::Config;
use crate::core::error::Result;

/// Extracts HTTP(S) URLs from text and filters them.
///
/// The include and exclude patterns are fixed at construction, so a single
/// extractor can be shared between threads and reused for any number of
/// inputs.
///
/// # Examples
/// ```
/// use urlextract::UrlExtractor;
///
/// let extractor = UrlExtractor::builder()
///     .include(r"google\.com")
///     .build()
///     .unwrap();
///
/// let urls = extractor.extract_text("see http://google.com and http://potato.com#top");
/// assert_eq!(urls, vec!["http://google.com"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct UrlExtractor {
    filter: UrlFilter<Regex>,
}

impl UrlExtractor {
    /// Extractor without include or exclude patterns
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_patterns(include: Vec<Regex>, exclude: Vec<Regex>) -> Self {
        Self {
            filter: UrlFilter::new(include, exclude),
        }
    }

    pub fn builder() -> UrlExtractorBuilder {
        UrlExtractorBuilder::default()
    }

    /// Build an extractor from the `include` and `exclude` lists of a config.
    pub fn from_config(config: &Config) -> Result<Self> {
        let include = config.compile_include_patterns()?;
        let exclude = config.compile_exclude_patterns()?;
        debug!(
            "Extractor patterns: {} include, {} exclude",
            include.len(),
            exclude.len()
        );
        Ok(Self::with_patterns(include, exclude))
    }

    pub fn include_patterns(&self) -> &[Regex] {
        self.filter.include_patterns()
    }

    pub fn exclude_patterns(&self) -> &[Regex] {
        self.filter.exclude_patterns()
    }

    /// Extract URLs from a dynamically typed value.
    ///
    /// Returns `None` when `input` is not a string. For string input the
    /// result is always `Some`, possibly empty.
    pub fn extract(&self, input: &Value) -> Option<Vec<String>> {
        input.as_str().map(|text| self.extract_text(text))
    }

    /// Extract URLs from text, in order of appearance.
    ///
    /// Duplicates are kept. Every returned URL is a candidate produced by
    /// [`scan`] that passed the include stage and then the exclude stage.
    pub fn extract_text(&self, text: &str) -> Vec<String> {
        self.filter.apply(scan_iter(text))
    }
}

/// Builder accepting pattern strings, compiled when `build` is called.
#[derive(Debug, Default)]
pub struct UrlExtractorBuilder {
    include: Vec<String>,
    exclude: Vec<String>,
    include_compiled: Vec<Regex>,
    exclude_compiled: Vec<Regex>,
}

impl UrlExtractorBuilder {
    /// Add a whitelist pattern.
    pub fn include<S: Into<String>>(mut self, pattern: S) -> Self {
        self.include.push(pattern.into());
        self
    }

    /// Add a blacklist pattern.
    pub fn exclude<S: Into<String>>(mut self, pattern: S) -> Self {
        self.exclude.push(pattern.into());
        self
    }

    pub fn includes<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.include.extend(patterns.into_iter().map(Into::into));
        self
    }

    pub fn excludes<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclude.extend(patterns.into_iter().map(Into::into));
        self
    }

    /// Add an already compiled whitelist pattern.
    pub fn include_regex(mut self, pattern: Regex) -> Self {
        self.include_compiled.push(pattern);
        self
    }

    /// Add an already compiled blacklist pattern.
    pub fn exclude_regex(mut self, pattern: Regex) -> Self {
        self.exclude_compiled.push(pattern);
        self
    }

    /// Compile the pattern strings and build the extractor.
    ///
    /// Compiled patterns come first, then string patterns in the order they
    /// were added.
    pub fn build(self) -> Result<UrlExtractor> {
        let mut include = self.include_compiled;
        for pattern in &self.include {
            include.push(Regex::new(pattern)?);
        }

        let mut exclude = self.exclude_compiled;
        for pattern in &self.exclude {
            exclude.push(Regex::new(pattern)?);
        }

        Ok(UrlExtractor::with_patterns(include, exclude))
    }
}
