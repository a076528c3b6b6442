//! # urlextract
//!
//! Extract HTTP(S) URLs from free-form text and filter them with include
//! (whitelist) and exclude (blacklist) regular expressions.
//!
//! A URL starts at a case-sensitive `http://` or `https://` and runs until
//! the first whitespace character or `#`. Results keep the order in which
//! the URLs appear and are never deduplicated.
//!
//! ```
//! use urlextract::UrlExtractor;
//!
//! let extractor = UrlExtractor::builder()
//!     .include(r"google\.(com|ca)")
//!     .exclude(r"calendar\.google\.com")
//!     .build()
//!     .unwrap();
//!
//! let text = "https://www.google.com http://calendar.google.com ftp://google.com http://google.ca#x";
//! assert_eq!(
//!     extractor.extract_text(text),
//!     vec!["https://www.google.com", "http://google.ca"]
//! );
//! ```
//!
//! ## Module Organization
//!
//! - [`extractor`] - Scanning and include/exclude filtering
//! - [`config`] - TOML configuration and CLI merging
//! - [`core`] - Error type, constants and `UrlLocation`
//! - [`discovery`] - Path expansion and URL finding in files
//! - [`output`] - Text, minimal and JSON rendering
//! - [`ui`] - Command-line interface

pub mod config;
pub mod core;
pub mod discovery;
pub mod extractor;
pub mod logging;
pub mod output;
pub mod ui;

pub use config::{CliConfig, Config};
pub use crate::core::{Result, UrlExtractError, UrlLocation};
pub use discovery::{Finder, UrlFinder};
pub use extractor::{PatternMatcher, UrlExtractor, UrlExtractorBuilder, UrlFilter};
