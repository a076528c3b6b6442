// Command-line interface definitions and parsing for urlextract

use crate::config::CliConfig;
use crate::core::constants::output_formats;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Files or directories to scan; reads stdin when empty or "-"
    pub files: Vec<String>,

    // Input
    /// Recursively process directories
    #[arg(short = 'r', long, help_heading = "Input")]
    pub recursive: bool,

    /// File extensions to process (e.g., md,html,txt)
    #[arg(long, value_name = "EXTENSIONS", help_heading = "Input")]
    pub file_types: Option<String>,

    // Filtering
    /// Keep only URLs matching at least one of these patterns (regex, repeatable)
    #[arg(short = 'i', long, value_name = "REGEX", help_heading = "Filtering")]
    pub include: Vec<String>,

    /// Drop URLs matching any of these patterns (regex, repeatable)
    #[arg(short = 'e', long, value_name = "REGEX", help_heading = "Filtering")]
    pub exclude: Vec<String>,

    // Output & Verbosity
    /// Output format
    #[arg(long, value_name = "FORMAT", value_parser = output_formats::ALL, help_heading = "Output & Verbosity")]
    pub format: Option<String>,

    /// Suppress log output
    #[arg(short = 'q', long, help_heading = "Output & Verbosity")]
    pub quiet: bool,

    /// Enable verbose logging
    #[arg(short = 'v', long, help_heading = "Output & Verbosity")]
    pub verbose: bool,

    // Performance
    /// Worker threads for reading files (default: CPU cores)
    #[arg(long, value_name = "COUNT", help_heading = "Performance")]
    pub threads: Option<usize>,

    // Configuration
    /// Use specific config file
    #[arg(long, value_name = "FILE", help_heading = "Configuration")]
    pub config: Option<String>,

    /// Ignore config files
    #[arg(long, help_heading = "Configuration")]
    pub no_config: bool,
}

/// Convert parsed arguments into the config overlay merged over file config.
///
/// Pattern flags only override the config file when at least one is given.
pub fn cli_to_config(cli: &Cli) -> CliConfig {
    let file_types = cli.file_types.as_ref().map(|types| {
        types
            .split(',')
            .map(|s| s.trim().trim_start_matches('.').to_string())
            .collect()
    });

    CliConfig {
        include: non_empty(&cli.include),
        exclude: non_empty(&cli.exclude),
        file_types,
        threads: cli.threads,
        quiet: cli.quiet,
        verbose: cli.verbose,
        output_format: cli.format.clone(),
        config_file: cli.config.clone(),
        no_config: cli.no_config,
    }
}

fn non_empty(patterns: &[String]) -> Option<Vec<String>> {
    if patterns.is_empty() {
        None
    } else {
        Some(patterns.to_vec())
    }
}
