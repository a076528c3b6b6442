//! Core types and foundational components
//!
//! This module contains the error type, shared constants and the
//! `UrlLocation` record used throughout the application.

pub mod constants;
pub mod error;
pub mod types;

// Re-export commonly used items for convenience
pub use error::{Result, UrlExtractError};
pub use types::{UrlLocation, UrlLocationError};
