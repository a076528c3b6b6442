//! Configuration management
//!
//! This module handles loading configuration from `.urlextract.toml`
//! files and merging it with CLI arguments.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::core::constants::{config_files, limits, output_formats};
use crate::core::error::{Result, UrlExtractError};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// URL patterns to keep (regex); empty or missing keeps everything
    pub include: Option<Vec<String>>,

    /// URL patterns to drop (regex)
    pub exclude: Option<Vec<String>>,

    /// File extensions to process when walking directories
    pub file_types: Option<Vec<String>>,

    /// Number of worker threads for reading files
    pub threads: Option<usize>,

    /// Output format (text, json, minimal)
    pub output_format: Option<String>,

    /// Enable verbose logging
    pub verbose: Option<bool>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            include: None,
            exclude: None,
            file_types: None,
            threads: None, // rayon picks the CPU core count
            output_format: Some(output_formats::DEFAULT.to_string()),
            verbose: Some(false),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file and validate it
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            UrlExtractError::Config(format!(
                "Could not read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| {
            UrlExtractError::Config(format!(
                "Invalid TOML in config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Try to find and load a config file in standard locations
    pub fn load_from_standard_locations() -> Result<Self> {
        Self::load_from_dir(Path::new("."))
    }

    /// Look for the config file in `dir` and up to three of its parents,
    /// falling back to defaults when none exists.
    ///
    /// The first file found is loaded; a broken one is an error, not skipped.
    pub fn load_from_dir(dir: &Path) -> Result<Self> {
        for depth in 0..=config_files::MAX_PARENT_DEPTH {
            let candidate = dir
                .join("../".repeat(depth))
                .join(config_files::FILE_NAME);
            if !candidate.is_file() {
                continue;
            }

            let config = Self::load_from_file(&candidate)?;
            log::debug!("Loaded config from {}", candidate.display());
            return Ok(config);
        }

        Ok(Self::default())
    }

    /// Merge this config with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli_config: &CliConfig) {
        // Filtering
        if let Some(ref include) = cli_config.include {
            self.include = Some(include.clone());
        }
        if let Some(ref exclude) = cli_config.exclude {
            self.exclude = Some(exclude.clone());
        }
        if let Some(ref file_types) = cli_config.file_types {
            self.file_types = Some(file_types.clone());
        }

        // Performance
        if let Some(threads) = cli_config.threads {
            self.threads = Some(threads);
        }

        // Output
        if let Some(ref output_format) = cli_config.output_format {
            self.output_format = Some(output_format.clone());
        }
        if cli_config.verbose {
            self.verbose = Some(true);
        }
    }

    /// Compile include patterns into regex objects
    pub fn compile_include_patterns(&self) -> Result<Vec<Regex>> {
        compile_patterns(self.include.as_deref())
    }

    /// Compile exclude patterns into regex objects
    pub fn compile_exclude_patterns(&self) -> Result<Vec<Regex>> {
        compile_patterns(self.exclude.as_deref())
    }

    /// Convert file_types to HashSet for path expansion
    pub fn file_types_as_set(&self) -> Option<HashSet<String>> {
        self.file_types
            .as_ref()
            .map(|types| types.iter().cloned().collect())
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if let Some(threads) = self.threads {
            if threads == 0 {
                return Err(UrlExtractError::Config(
                    "Thread count cannot be 0. Expected a positive integer.".to_string(),
                ));
            }
            if threads > limits::MAX_THREADS {
                return Err(UrlExtractError::Config(format!(
                    "Thread count of {threads} is extremely high. Expected at most {}.",
                    limits::MAX_THREADS
                )));
            }
        }

        if let Some(ref format) = self.output_format
            && !output_formats::ALL.contains(&format.as_str())
        {
            return Err(UrlExtractError::Config(format!(
                "Invalid output format '{format}'. Expected one of: {}.",
                output_formats::ALL.join(", ")
            )));
        }

        self.compile_include_patterns()?;
        self.compile_exclude_patterns()?;

        Ok(())
    }
}

fn compile_patterns(patterns: Option<&[String]>) -> Result<Vec<Regex>> {
    let mut compiled = Vec::new();
    for pattern in patterns.unwrap_or_default() {
        compiled.push(Regex::new(pattern)?);
    }
    Ok(compiled)
}

/// Configuration options that can come from CLI
#[derive(Debug, Default)]
pub struct CliConfig {
    // Filtering
    pub include: Option<Vec<String>>,    // --include
    pub exclude: Option<Vec<String>>,    // --exclude
    pub file_types: Option<Vec<String>>, // --file-types

    // Performance
    pub threads: Option<usize>, // --threads

    // Output
    pub quiet: bool,                   // --quiet
    pub verbose: bool,                 // --verbose
    pub output_format: Option<String>, // --format

    // Configuration
    pub config_file: Option<String>, // --config
    pub no_config: bool,             // --no-config
}
