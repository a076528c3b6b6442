use clap::Parser;
use urlextract::config::{CliConfig, Config};
use urlextract::core::constants::{output_formats, sources};
use urlextract::discovery::{Finder, UrlFinder, expand_paths};
use urlextract::logging;
use urlextract::output::{self, Summary};
use urlextract::ui::{Cli, cli_to_config};
use urlextract::{UrlExtractError, UrlExtractor, UrlLocation};

use std::io::Read;
use std::path::{Path, PathBuf};

fn main() {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(exit_code) => std::process::exit(exit_code),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}

/// Where the text to scan comes from
#[derive(Debug, PartialEq, Eq)]
pub enum Input {
    Stdin,
    Paths(Vec<PathBuf>),
}

pub fn run(cli: &Cli) -> Result<i32, Box<dyn std::error::Error>> {
    let cli_config = cli_to_config(cli);
    let config = load_and_merge_config(&cli_config)?;

    logging::init_logger(config.verbose.unwrap_or(false), cli_config.quiet);
    logging::log_config_info(&config);

    let extractor = UrlExtractor::from_config(&config).inspect_err(|e| {
        logging::log_error("Could not compile URL patterns", Some(e));
    })?;
    let finder = Finder::new(extractor);

    let (url_locations, source_count) = match select_input(&cli.files)? {
        Input::Stdin => {
            let text = read_stdin_lossy(std::io::stdin())?;
            let found = finder.find_urls_in_text(&text, sources::STDIN_NAME)?;
            (found, 1)
        }
        Input::Paths(paths) => {
            let expanded = expand_input_paths(&paths, cli.recursive, &config)?;
            let found = find_urls_in_files(&finder, &expanded, config.threads)?;
            (found, expanded.len())
        }
    };

    let summary = Summary::new(&url_locations, source_count);
    logging::log_extraction_summary(summary.total, summary.unique, summary.sources);

    let format = config
        .output_format
        .as_deref()
        .unwrap_or(output_formats::DEFAULT);
    output::display_results(&url_locations, &summary, format)?;

    Ok(0)
}

/// Load configuration from file or standard locations and merge with CLI config
pub fn load_and_merge_config(cli_config: &CliConfig) -> Result<Config, UrlExtractError> {
    let mut config = if cli_config.no_config {
        Config::default()
    } else if let Some(ref config_file) = cli_config.config_file {
        Config::load_from_file(config_file)?
    } else {
        Config::load_from_standard_locations()?
    };

    // CLI takes precedence; its patterns have not been checked yet
    config.merge_with_cli(cli_config);
    config.validate()?;
    Ok(config)
}

/// Stdin is read when no files are given or the only file is "-".
pub fn select_input(files: &[String]) -> Result<Input, UrlExtractError> {
    match files {
        [] => Ok(Input::Stdin),
        [only] if only == sources::STDIN_ARG => Ok(Input::Stdin),
        _ if files.iter().any(|f| f == sources::STDIN_ARG) => Err(
            UrlExtractError::InvalidArgument("'-' (stdin) cannot be combined with file paths".to_string()),
        ),
        _ => Ok(Input::Paths(files.iter().map(PathBuf::from).collect())),
    }
}

/// Read all of `reader`, replacing invalid UTF-8 instead of failing.
pub fn read_stdin_lossy<R: Read>(mut reader: R) -> Result<String, UrlExtractError> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Expand directories to file paths using configuration
pub fn expand_input_paths(
    paths: &[PathBuf],
    recursive: bool,
    config: &Config,
) -> Result<Vec<PathBuf>, UrlExtractError> {
    let paths: Vec<&Path> = paths.iter().map(PathBuf::as_path).collect();

    let expanded = expand_paths(paths, recursive, config.file_types_as_set().as_ref())
        .inspect_err(|e| {
            logging::log_error("Could not expand file paths", Some(e));
        })?;

    if expanded.is_empty() {
        logging::log_warning("No files matched the given paths and file types");
    }
    logging::log_file_info(expanded.len(), &expanded);

    Ok(expanded)
}

/// Run the finder over files, on a dedicated pool when a thread count is set
pub fn find_urls_in_files(
    finder: &Finder,
    paths: &[PathBuf],
    threads: Option<usize>,
) -> Result<Vec<UrlLocation>, UrlExtractError> {
    let paths: Vec<&Path> = paths.iter().map(PathBuf::as_path).collect();

    match threads {
        Some(count) => rayon::ThreadPoolBuilder::new()
            .num_threads(count)
            .build()
            .map_err(|e| {
                UrlExtractError::Config(format!("Could not start {count} worker threads: {e}"))
            })?
            .install(|| finder.find_urls(paths)),
        None => finder.find_urls(paths),
    }
}
