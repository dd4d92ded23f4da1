use crate::utils::contains_ignore_case;
use regex::{Regex, RegexBuilder};
use tracing::error;

/// Characters with a special meaning in a regular expression.
///
/// The backslash is part of the set so an escaped pattern never picks up a
/// stray escape from the input.
const REGEX_META_CHARS: &[char] = &[
    '.', '*', '+', '?', '^', '$', '{', '}', '(', ')', '|', '[', ']', '\\',
];

/// Prefixes every regex metacharacter in `pattern` with a backslash.
///
/// The result, compiled as a regular expression, matches exactly the literal
/// text of `pattern`.
pub fn escape_pattern(pattern: &str) -> String {
    let mut escaped = String::with_capacity(pattern.len());
    for c in pattern.chars() {
        if REGEX_META_CHARS.contains(&c) {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// Case-insensitive literal substring matcher.
///
/// The pattern is escaped and compiled once, so a matcher can be reused
/// across many haystacks and shared between threads.
#[derive(Debug, Clone)]
pub struct LiteralMatcher {
    /// The pattern as given by the caller
    pattern: String,
    /// Compiled, escaped, case-insensitive form of the pattern
    regex: Regex,
}

impl LiteralMatcher {
    /// Compiles a matcher for the literal text of `pattern`.
    ///
    /// Escaping rules out syntax errors. An error here means the compiled
    /// program hit an engine limit such as the size limit.
    pub fn new(pattern: &str) -> Result<Self, regex::Error> {
        let regex = RegexBuilder::new(&escape_pattern(pattern))
            .case_insensitive(true)
            .build()?;

        Ok(Self {
            pattern: pattern.to_string(),
            regex,
        })
    }

    /// Returns the pattern this matcher was built from.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Returns true if the pattern occurs anywhere in the haystack, ignoring case.
    pub fn is_match(&self, haystack: &str) -> bool {
        self.regex.is_match(haystack)
    }

    /// Finds all non-overlapping occurrences of the pattern in the haystack.
    ///
    /// Returns a list of (start, end) byte positions for each match. An empty
    /// pattern has nothing to highlight and yields no ranges.
    pub fn find_all(&self, haystack: &str) -> Vec<(usize, usize)> {
        if self.pattern.is_empty() {
            return Vec::new();
        }

        self.regex
            .find_iter(haystack)
            .map(|m| (m.start(), m.end()))
            .collect()
    }
}

/// Returns whether `input` contains the literal text of `pattern`, ignoring case.
///
/// Fails only if the matcher cannot be built, see [`LiteralMatcher::new`].
pub fn try_fuzzy_match(input: &str, pattern: &str) -> Result<bool, regex::Error> {
    LiteralMatcher::new(pattern).map(|matcher| matcher.is_match(input))
}

/// Returns whether `input` contains the literal text of `pattern`, ignoring case.
///
/// Despite the name this is literal substring containment, not approximate
/// matching. An empty pattern matches every input.
pub fn fuzzy_match(input: &str, pattern: &str) -> bool {
    match try_fuzzy_match(input, pattern) {
        Ok(matched) => matched,
        Err(e) => {
            error!(
                "Failed to compile literal matcher for pattern of {} bytes: {}",
                pattern.len(),
                e
            );
            contains_ignore_case(input, pattern)
        }
    }
}
