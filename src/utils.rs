/// Returns true if the haystack contains the needle, ignoring case.
///
/// ASCII input uses a sliding byte window. Anything else is case folded one
/// character at a time first.
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }

    if haystack.is_ascii() && needle.is_ascii() {
        if needle.len() > haystack.len() {
            return false;
        }
        return haystack
            .as_bytes()
            .windows(needle.len())
            .any(|window| window.eq_ignore_ascii_case(needle.as_bytes()));
    }

    fold_case(haystack).contains(&fold_case(needle))
}

/// Lowercases each character on its own.
///
/// `str::to_lowercase` picks `ς` or `σ` for `Σ` depending on the neighbouring
/// letters, so the same text could fold differently in haystack and needle.
fn fold_case(text: &str) -> String {
    text.chars()
        .flat_map(char::to_lowercase)
        .map(|c| if c == 'ς' { 'σ' } else { c })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_ignore_case_finds_different_cases() {
        assert!(contains_ignore_case("ERROR: foo", "error"));
        assert!(contains_ignore_case("error: foo", "ERROR"));
        assert!(contains_ignore_case("Error: foo", "eRrOr"));
    }

    #[test]
    fn test_contains_ignore_case_returns_false_for_no_match() {
        assert!(!contains_ignore_case("INFO: foo", "error"));
    }

    #[test]
    fn test_contains_ignore_case_handles_empty_needle() {
        assert!(contains_ignore_case("foo", ""));
        assert!(contains_ignore_case("", ""));
    }

    #[test]
    fn test_contains_ignore_case_handles_needle_longer_than_haystack() {
        assert!(!contains_ignore_case("foo", "foobar"));
    }

    #[test]
    fn test_contains_ignore_case_handles_non_ascii() {
        assert!(contains_ignore_case("Ærø Straße", "ærø"));
        assert!(contains_ignore_case("ΣΟΦΙΑ", "σοφ"));
        assert!(!contains_ignore_case("Ærø", "aero"));
    }

    #[test]
    fn test_contains_ignore_case_folds_sigma_without_context() {
        assert!(contains_ignore_case("ΟΣ", "Σ"));
        assert!(contains_ignore_case("ΟΣΑ", "ος"));
        assert!(contains_ignore_case("λόγος", "ΓΟΣ"));
        assert!(contains_ignore_case("ΟΔΟΣ ΑΒ", "οσ α"));
    }
}
