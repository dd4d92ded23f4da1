use crate::filter::FilterMode;
use crate::filter::FilterPattern;
use rayon::prelude::*;

/// Checks if content passes the given filter patterns.
///
/// Any enabled exclude pattern that matches rejects the content. When enabled
/// include patterns exist, at least one of them has to match.
pub fn apply_filters(content: &str, filter_patterns: &[FilterPattern]) -> bool {
    if filter_patterns.is_empty() {
        return true;
    }

    let mut has_include_filters = false;
    let mut include_matched = false;

    for filter in filter_patterns.iter().filter(|f| f.enabled) {
        match filter.mode {
            FilterMode::Exclude => {
                if filter.is_match(content) {
                    return false;
                }
            }
            FilterMode::Include => {
                has_include_filters = true;
                if !include_matched && filter.is_match(content) {
                    include_matched = true;
                }
            }
        }
    }

    if has_include_filters {
        include_matched
    } else {
        true
    }
}

/// Returns the indices of the lines that pass the filters, in ascending order.
///
/// With `invert` set, returns the lines that do not pass instead.
pub fn filter_lines<S>(lines: &[S], filter_patterns: &[FilterPattern], invert: bool) -> Vec<usize>
where
    S: AsRef<str> + Sync,
{
    lines
        .par_iter()
        .enumerate()
        .filter_map(|(index, line)| {
            (apply_filters(line.as_ref(), filter_patterns) != invert).then_some(index)
        })
        .collect()
}
