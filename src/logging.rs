use crate::config::Config;
use log::{debug, error, info, warn};
use std::io::Write;
use std::path::Path;

/// Initialize the logger with appropriate level based on verbosity.
///
/// `RUST_LOG` is read first; the verbosity flags override its level.
pub fn init_logger(verbose: bool, quiet: bool) {
    let level = if quiet {
        log::LevelFilter::Off
    } else if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };

    // Ignore the error when a logger is already installed (tests)
    let _ = env_logger::Builder::from_default_env()
        .filter_level(level)
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .try_init();

    debug!("Logger initialized with level: {level:?}");
}

/// Log configuration information
pub fn log_config_info(config: &Config) {
    let include = config.include.as_deref().unwrap_or_default();
    let exclude = config.exclude.as_deref().unwrap_or_default();
    let threads = config
        .threads
        .map_or_else(|| "auto".to_string(), |t| t.to_string());
    let format = config.output_format.as_deref().unwrap_or_default();

    info!("Configuration: threads={threads}, format={format}");
    info!("Include patterns ({}): {include:?}", include.len());
    info!("Exclude patterns ({}): {exclude:?}", exclude.len());
}

/// Log file processing information
pub fn log_file_info<P: AsRef<Path>>(file_count: usize, files: &[P]) {
    info!("Processing {file_count} file(s)");
    for (i, file) in files.iter().enumerate() {
        debug!("  {}. {}", i + 1, file.as_ref().display());
    }
}

/// Log extraction summary
pub fn log_extraction_summary(total: usize, unique: usize, sources: usize) {
    info!("Extracted {total} URL(s), {unique} unique, from {sources} source(s)");
}

/// Log error information
pub fn log_error(message: &str, source: Option<&dyn std::error::Error>) {
    match source {
        Some(err) => error!("{message}: {err}"),
        None => error!("{message}"),
    }
}

/// Log warning information
pub fn log_warning(message: &str) {
    warn!("{message}");
}
