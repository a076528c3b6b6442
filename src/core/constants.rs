//! Application-wide constants.
//!
//! Output format names, configuration file lookup and limits shared by the
//! CLI, config validation and output rendering.

/// Output format constants
pub mod output_formats {
    /// Numbered list with file and line information
    pub const TEXT: &str = "text";
    /// Structured output for automation
    pub const JSON: &str = "json";
    /// One URL per line, nothing else
    pub const MINIMAL: &str = "minimal";

    /// Default output format
    pub const DEFAULT: &str = TEXT;

    /// All valid output formats
    pub const ALL: [&str; 3] = [TEXT, JSON, MINIMAL];
}

/// Configuration file lookup
pub mod config_files {
    /// File name searched in the current directory and its parents
    pub const FILE_NAME: &str = ".urlextract.toml";
    /// How many parent directories are searched
    pub const MAX_PARENT_DEPTH: usize = 3;
}

/// Limits enforced by config validation
pub mod limits {
    /// Upper bound for the worker thread count
    pub const MAX_THREADS: usize = 1000;
}

/// Input source constants
pub mod sources {
    /// Path argument meaning "read standard input"
    pub const STDIN_ARG: &str = "-";
    /// Display name used for text read from standard input
    pub const STDIN_NAME: &str = "<stdin>";
}

/// File processing constants
pub mod files {
    /// Default capacity hint for matched lines per file
    pub const DEFAULT_LINE_CAPACITY_PER_FILE: usize = 20;
}
