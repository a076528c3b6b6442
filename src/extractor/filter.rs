use log::trace;
use regex::Regex;

/// A compiled pattern that can be tested against a candidate URL.
///
/// Matching uses substring search semantics: a pattern matches when it
/// matches anywhere inside the candidate, not only the whole string.
pub trait PatternMatcher {
    fn matches(&self, candidate: &str) -> bool;
}

impl PatternMatcher for Regex {
    fn matches(&self, candidate: &str) -> bool {
        self.is_match(candidate)
    }
}

/// Two-stage include/exclude filter applied to scanned candidates.
///
/// Stage 1 keeps a candidate when the include list is empty or any include
/// pattern matches it. Stage 2 drops a candidate when any exclude pattern
/// matches it.
#[derive(Debug, Clone)]
pub struct UrlFilter<P = Regex> {
    include: Vec<P>,
    exclude: Vec<P>,
}

impl<P> Default for UrlFilter<P> {
    fn default() -> Self {
        Self {
            include: Vec::new(),
            exclude: Vec::new(),
        }
    }
}

impl<P: PatternMatcher> UrlFilter<P> {
    pub fn new(include: Vec<P>, exclude: Vec<P>) -> Self {
        Self { include, exclude }
    }

    pub fn include_patterns(&self) -> &[P] {
        &self.include
    }

    pub fn exclude_patterns(&self) -> &[P] {
        &self.exclude
    }

    /// Whitelist stage
    pub fn is_included(&self, candidate: &str) -> bool {
        self.include.is_empty() || self.include.iter().any(|p| p.matches(candidate))
    }

    /// Blacklist stage
    pub fn is_excluded(&self, candidate: &str) -> bool {
        self.exclude.iter().any(|p| p.matches(candidate))
    }

    pub fn accepts(&self, candidate: &str) -> bool {
        if !self.is_included(candidate) {
            trace!("Not included: {candidate}");
            return false;
        }
        if self.is_excluded(candidate) {
            trace!("Excluded: {candidate}");
            return false;
        }
        true
    }

    /// Keep the accepted candidates, preserving their order.
    pub fn apply<'a, I>(&self, candidates: I) -> Vec<String>
    where
        I: IntoIterator<Item = &'a str>,
    {
        candidates
            .into_iter()
            .filter(|candidate| self.accepts(candidate))
            .map(str::to_string)
            .collect()
    }
}
