use crate::matcher::LiteralMatcher;

/// Filter mode - include or exclude matching lines.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum FilterMode {
    /// Include only lines matching the pattern.
    #[default]
    Include,
    /// Exclude lines matching the pattern.
    Exclude,
}

/// A single filter pattern.
#[derive(Debug, Clone)]
pub struct FilterPattern {
    /// Compiled case-insensitive literal matcher for the pattern.
    matcher: LiteralMatcher,
    /// Whether to include or exclude matching lines.
    pub mode: FilterMode,
    /// Whether this pattern is currently active.
    pub enabled: bool,
}

impl FilterPattern {
    /// Creates a new, enabled filter pattern.
    pub fn new(pattern: &str, mode: FilterMode) -> Result<Self, regex::Error> {
        Ok(Self {
            matcher: LiteralMatcher::new(pattern)?,
            mode,
            enabled: true,
        })
    }

    /// The literal text this filter looks for.
    pub fn pattern(&self) -> &str {
        self.matcher.pattern()
    }

    /// Returns true if the pattern occurs in the content, ignoring case.
    pub fn is_match(&self, content: &str) -> bool {
        self.matcher.is_match(content)
    }
}

/// Ordered set of filter patterns without duplicates.
#[derive(Debug, Default)]
pub struct Filter {
    patterns: Vec<FilterPattern>,
}

impl Filter {
    /// Adds a new filter pattern if the same pattern and mode isn't already present.
    ///
    /// Returns whether the pattern was added.
    pub fn add_filter(
        &mut self,
        pattern: &str,
        mode: FilterMode,
        enabled: bool,
    ) -> Result<bool, regex::Error> {
        if self.pattern_exists(pattern, mode) {
            return Ok(false);
        }

        let mut filter_pattern = FilterPattern::new(pattern, mode)?;
        filter_pattern.enabled = enabled;
        self.patterns.push(filter_pattern);
        Ok(true)
    }

    /// Returns all filter patterns.
    pub fn get_filter_patterns(&self) -> &[FilterPattern] {
        &self.patterns
    }

    /// Returns whether no enabled pattern is present.
    pub fn is_empty(&self) -> bool {
        !self.patterns.iter().any(|p| p.enabled)
    }

    fn pattern_exists(&self, pattern: &str, mode: FilterMode) -> bool {
        self.patterns
            .iter()
            .any(|fp| fp.pattern() == pattern && fp.mode == mode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_pattern_matches_literally_ignoring_case() {
        let pattern = FilterPattern::new("Id=(42)", FilterMode::Include).unwrap();
        assert!(pattern.enabled);
        assert!(pattern.is_match("request ID=(42) done"));
        assert!(!pattern.is_match("request id=42 done"));
    }

    #[test]
    fn test_add_filter_skips_duplicates() {
        let mut filter = Filter::default();
        assert!(filter.add_filter("error", FilterMode::Include, true).unwrap());
        assert!(!filter.add_filter("error", FilterMode::Include, true).unwrap());
        assert!(filter.add_filter("error", FilterMode::Exclude, true).unwrap());
        assert_eq!(filter.get_filter_patterns().len(), 2);
    }

    #[test]
    fn test_add_filter_keeps_insertion_order() {
        let mut filter = Filter::default();
        filter.add_filter("b", FilterMode::Include, true).unwrap();
        filter.add_filter("a", FilterMode::Exclude, true).unwrap();

        let patterns: Vec<&str> = filter.get_filter_patterns().iter().map(|p| p.pattern()).collect();
        assert_eq!(patterns, vec!["b", "a"]);
    }

    #[test]
    fn test_is_empty_ignores_disabled_patterns() {
        let mut filter = Filter::default();
        assert!(filter.is_empty());
        filter.add_filter("a", FilterMode::Include, false).unwrap();
        assert!(filter.is_empty());
        filter.add_filter("b", FilterMode::Include, true).unwrap();
        assert!(!filter.is_empty());
    }
}
