//! URL discovery in files
//!
//! This module expands file and directory arguments and runs the
//! extractor over their contents.

pub mod finder;
pub mod path_utils;

// Re-export commonly used items
pub use finder::{Finder, UrlFinder};
pub use path_utils::expand_paths;
