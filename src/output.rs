//! Rendering of extraction results for the CLI.

use rustc_hash::FxHashSet;
use serde::Serialize;

use crate::core::constants::output_formats;
use crate::core::error::Result;
use crate::core::types::UrlLocation;

/// Counts shown next to the URL list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub sources: usize,
    pub total: usize,
    pub unique: usize,
}

impl Summary {
    pub fn new(url_locations: &[UrlLocation], sources: usize) -> Self {
        let unique: FxHashSet<&str> = url_locations.iter().map(UrlLocation::url).collect();
        Self {
            sources,
            total: url_locations.len(),
            unique: unique.len(),
        }
    }
}

#[derive(Serialize)]
struct JsonReport<'a> {
    #[serde(flatten)]
    summary: &'a Summary,
    urls: &'a [UrlLocation],
}

/// Render results in the requested format.
///
/// Unknown formats fall back to text; config validation rejects them
/// before this point.
pub fn render(url_locations: &[UrlLocation], summary: &Summary, format: &str) -> Result<String> {
    match format {
        output_formats::MINIMAL => Ok(render_minimal(url_locations)),
        output_formats::JSON => render_json(url_locations, summary),
        _ => Ok(render_text(url_locations, summary)),
    }
}

/// One URL per line
pub fn render_minimal(url_locations: &[UrlLocation]) -> String {
    url_locations
        .iter()
        .map(|ul| format!("{}\n", ul.url()))
        .collect()
}

/// Numbered list with source and line
pub fn render_text(url_locations: &[UrlLocation], summary: &Summary) -> String {
    if url_locations.is_empty() {
        return format!("No URLs found in {} source(s)\n", summary.sources);
    }

    let mut out = format!(
        "Found {} URL(s), {} unique, in {} source(s)\n\n",
        summary.total, summary.unique, summary.sources
    );
    for (i, ul) in url_locations.iter().enumerate() {
        out.push_str(&format!(
            "{:4}. {} - {} - L{}\n",
            i + 1,
            ul.url(),
            ul.file_name(),
            ul.line()
        ));
    }
    out
}

pub fn render_json(url_locations: &[UrlLocation], summary: &Summary) -> Result<String> {
    let report = JsonReport {
        summary,
        urls: url_locations,
    };
    let mut json = serde_json::to_string_pretty(&report)?;
    json.push('\n');
    Ok(json)
}

/// Print results to stdout
pub fn display_results(
    url_locations: &[UrlLocation],
    summary: &Summary,
    format: &str,
) -> Result<()> {
    print!("{}", render(url_locations, summary, format)?);
    Ok(())
}
