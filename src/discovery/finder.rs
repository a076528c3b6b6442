use grep::regex::RegexMatcher;
use grep::searcher::Searcher;
use grep::searcher::sinks::Lossy;
use once_cell::sync::Lazy;
use rayon::prelude::*;

use crate::{
    UrlLocation,
    core::constants::files,
    core::error::{Result, UrlExtractError},
    extractor::{URL_PATTERN, UrlExtractor},
};

use std::path::Path;

static LINE_MATCHER: Lazy<RegexMatcher> = Lazy::new(|| {
    RegexMatcher::new(URL_PATTERN).expect("Failed to compile URL regex pattern")
});

pub trait UrlFinder {
    fn find_urls(&self, paths: Vec<&Path>) -> Result<Vec<UrlLocation>>;
}

/// Finds URLs in files and in-memory text using a `UrlExtractor`.
#[derive(Debug, Default, Clone)]
pub struct Finder {
    extractor: UrlExtractor,
}

impl UrlFinder for Finder {
    /// Files are read in parallel; the result keeps path order, then line
    /// order, then position within the line.
    fn find_urls(&self, paths: Vec<&Path>) -> Result<Vec<UrlLocation>> {
        let per_file: Vec<Vec<UrlLocation>> = paths
            .par_iter()
            .map(|path| -> Result<Vec<UrlLocation>> {
                let mut file_urls = Vec::new();
                for url_match in Self::parse_lines_with_urls(path)? {
                    file_urls.extend(self.parse_urls(url_match)?);
                }
                Ok(file_urls)
            })
            .collect::<Result<_>>()?;

        Ok(per_file.into_iter().flatten().collect())
    }
}

type UrlMatch = (String, String, u64);

impl Finder {
    pub fn new(extractor: UrlExtractor) -> Self {
        Self { extractor }
    }

    pub fn extractor(&self) -> &UrlExtractor {
        &self.extractor
    }

    /// Find URLs in text that did not come from a file, e.g. stdin.
    pub fn find_urls_in_text(&self, text: &str, source_name: &str) -> Result<Vec<UrlLocation>> {
        let mut url_locations = Vec::new();
        for (index, line) in text.lines().enumerate() {
            let url_match = (line.to_string(), source_name.to_string(), index as u64 + 1);
            url_locations.extend(self.parse_urls(url_match)?);
        }
        Ok(url_locations)
    }

    /// Select the lines of a file that contain at least one URL candidate.
    ///
    /// Invalid UTF-8 is replaced with U+FFFD; every URL delimiter is ASCII.
    fn parse_lines_with_urls(path: &Path) -> Result<Vec<UrlMatch>> {
        let mut matches = Vec::with_capacity(files::DEFAULT_LINE_CAPACITY_PER_FILE);
        let file_name = path.display().to_string();

        Searcher::new().search_path(
            &*LINE_MATCHER,
            path,
            Lossy(|line_number, line| {
                matches.push((line.to_string(), file_name.clone(), line_number));
                Ok(true)
            }),
        )?;

        Ok(matches)
    }

    /// Extract and filter the URLs of a single line.
    fn parse_urls(&self, url_match: UrlMatch) -> Result<Vec<UrlLocation>> {
        let (line_content, file_name, line) = url_match;

        self.extractor
            .extract_text(&line_content)
            .into_iter()
            .map(|url| {
                UrlLocation::new(url, line, file_name.clone()).map_err(|e| {
                    UrlExtractError::InvalidArgument(format!("{file_name}:{line}: {e}"))
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    #![allow(non_snake_case)]

    use super::*;
    use std::io::Write;

    type TestResult = std::result::Result<(), Box<dyn std::error::Error>>;

    fn urls(locations: &[UrlLocation]) -> Vec<&str> {
        locations.iter().map(|ul| ul.url()).collect()
    }

    #[test]
    fn test_parse_urls() -> TestResult {
        let finder = Finder::default();
        let line = "arbitrary http://foo.bar arbitrary http://foo2.bar#section arbitrary".to_string();
        let url_match = (line, "this-file-name".to_string(), 99);

        let expected = vec![
            UrlLocation::new("http://foo.bar".to_string(), 99, "this-file-name".to_string())?,
            UrlLocation::new("http://foo2.bar".to_string(), 99, "this-file-name".to_string())?,
        ];

        assert_eq!(finder.parse_urls(url_match)?, expected);
        Ok(())
    }

    #[test]
    fn test_parse_urls__applies_filter() -> TestResult {
        let finder = Finder::new(UrlExtractor::builder().exclude("potato").build()?);
        let line = "http://google.com http://potato.com https://google.ca".to_string();

        let result = finder.parse_urls((line, "f.txt".to_string(), 1))?;

        assert_eq!(urls(&result), vec!["http://google.com", "https://google.ca"]);
        Ok(())
    }

    #[test]
    fn test_parse_lines_with_urls__from_file() -> TestResult {
        let mut file = tempfile::NamedTempFile::new()?;
        let file_name = file.path().display().to_string();
        file.write_all(
            "first http://specific-link.one arbitrary\n\
             no links here\n\
             ftp://not-a-match.example\n\
             last https://specific-link.two"
                .as_bytes(),
        )?;

        let actual = Finder::parse_lines_with_urls(file.path())?;

        assert_eq!(
            actual,
            vec![
                (
                    "first http://specific-link.one arbitrary\n".to_string(),
                    file_name.clone(),
                    1
                ),
                (
                    "last https://specific-link.two".to_string(),
                    file_name.clone(),
                    4
                ),
            ]
        );
        Ok(())
    }

    #[test]
    fn test_parse_lines_with_urls__when_non_existing_file() {
        let result = Finder::parse_lines_with_urls(Path::new("non_existing_file.txt"));
        assert!(matches!(result, Err(UrlExtractError::Io(_))));
    }

    #[test]
    fn test_find_urls__multiple_files_keep_order() -> TestResult {
        let mut file1 = tempfile::NamedTempFile::new()?;
        let mut file2 = tempfile::NamedTempFile::new()?;
        file1.write_all(b"First file with https://example.com\nand http://example.com/2")?;
        file2.write_all(b"Second file with https://test.org and https://demo.net")?;

        let finder = Finder::default();
        let result = finder.find_urls(vec![file2.path(), file1.path()])?;

        assert_eq!(
            urls(&result),
            vec![
                "https://test.org",
                "https://demo.net",
                "https://example.com",
                "http://example.com/2"
            ]
        );
        assert_eq!(result[3].line(), 2);
        assert_eq!(result[3].file_name(), file1.path().display().to_string());
        Ok(())
    }

    #[test]
    fn test_find_urls__duplicates_are_kept() -> TestResult {
        let mut file = tempfile::NamedTempFile::new()?;
        file.write_all(b"https://a.com\nhttps://a.com https://a.com")?;

        let result = Finder::default().find_urls(vec![file.path()])?;

        assert_eq!(result.len(), 3);
        assert_eq!(
            result.iter().map(UrlLocation::line).collect::<Vec<_>>(),
            vec![1, 2, 2]
        );
        Ok(())
    }

    #[test]
    fn test_find_urls__invalid_utf8_does_not_abort() -> TestResult {
        let mut good = tempfile::NamedTempFile::new()?;
        let mut latin1 = tempfile::NamedTempFile::new()?;
        good.write_all(b"see https://google.com")?;
        latin1.write_all(b"caf\xe9 http://potato.com\nna\xefve https://google.ca#x")?;

        let result = Finder::default().find_urls(vec![good.path(), latin1.path()])?;

        assert_eq!(
            urls(&result),
            vec!["https://google.com", "http://potato.com", "https://google.ca"]
        );
        assert_eq!(result[2].line(), 2);
        Ok(())
    }

    #[test]
    fn test_find_urls__file_named_with_spaces() -> TestResult {
        let temp_dir = tempfile::tempdir()?;
        let path = temp_dir.path().join("   ");
        std::fs::write(&path, "https://a.com")?;

        let result = Finder::default().find_urls(vec![path.as_path()])?;

        assert_eq!(urls(&result), vec!["https://a.com"]);
        assert_eq!(result[0].file_name(), path.display().to_string());
        Ok(())
    }

    #[test]
    fn test_find_urls__empty_file() -> TestResult {
        let file = tempfile::NamedTempFile::new()?;
        let result = Finder::default().find_urls(vec![file.path()])?;
        assert!(result.is_empty());
        Ok(())
    }

    #[test]
    fn test_find_urls__nonexistent_file_is_an_error() {
        let result = Finder::default().find_urls(vec![Path::new("/definitely/does/not/exist.md")]);
        assert!(result.is_err());
    }

    #[test]
    fn test_find_urls_in_text() -> TestResult {
        let finder = Finder::new(UrlExtractor::builder().include(r"google\.com").build()?);
        let text = "This url should be accepted http://google.com\n\
                    This url is not whitelisted http://potato.com\n\
                    This url should be accepted https://calendar.google.com#top";

        let result = finder.find_urls_in_text(text, "<stdin>")?;

        assert_eq!(
            urls(&result),
            vec!["http://google.com", "https://calendar.google.com"]
        );
        assert_eq!(result[0].line(), 1);
        assert_eq!(result[1].line(), 3);
        assert_eq!(result[1].file_name(), "<stdin>");
        Ok(())
    }

    #[test]
    fn test_find_urls_in_text__matches_whole_text_extraction() -> TestResult {
        let finder = Finder::new(UrlExtractor::builder().exclude(r"\.org").build()?);
        let text = "a https://x.com\r\nb http://y.org c https://z.net/p?q=1#f\n\nhttp://w.io";

        let per_line = finder.find_urls_in_text(text, "mem")?;
        let whole = finder.extractor().extract_text(text);

        assert_eq!(urls(&per_line), whole);
        Ok(())
    }
}
