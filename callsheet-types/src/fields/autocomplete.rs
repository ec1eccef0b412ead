//! Comma-separated multi-value text with suggestions for the trailing entry.

/// The entry being typed: text after the last comma, trimmed.
pub fn current_segment(value: &str) -> &str {
    match value.rfind(',') {
        Some(idx) => value[idx + 1..].trim(),
        None => value.trim(),
    }
}

/// Options containing the current segment, case-insensitively.
/// An empty segment matches every option.
pub fn filter_options<'a>(value: &str, options: &'a [String]) -> Vec<&'a str> {
    let needle = current_segment(value).to_lowercase();
    options
        .iter()
        .filter(|opt| opt.to_lowercase().contains(&needle))
        .map(String::as_str)
        .collect()
}

/// Replace only the trailing segment with `option`, keeping earlier entries.
pub fn apply_selection(value: &str, option: &str) -> String {
    match value.rfind(',') {
        Some(idx) => format!("{} {}", &value[..=idx], option),
        None => option.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opts(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn segment_after_last_comma() {
        assert_eq!(current_segment("Alice, Bo"), "Bo");
        assert_eq!(current_segment("  Carol "), "Carol");
        assert_eq!(current_segment("Alice,"), "");
    }

    #[test]
    fn filter_is_case_insensitive_substring() {
        let options = opts(&["Bob - Grip", "Alice - Lead", "bobby - Extra"]);
        assert_eq!(filter_options("Alice, BO", &options), vec!["Bob - Grip", "bobby - Extra"]);
    }

    #[test]
    fn empty_segment_matches_all() {
        let options = opts(&["Camera", "Sound"]);
        assert_eq!(filter_options("", &options).len(), 2);
        assert_eq!(filter_options("Grip, ", &options).len(), 2);
    }

    #[test]
    fn selection_replaces_trailing_segment() {
        assert_eq!(apply_selection("Alice, Bo", "Bob"), "Alice, Bob");
        assert_eq!(apply_selection("Bo", "Bob"), "Bob");
        assert_eq!(apply_selection("A,B,c", "Carl"), "A,B, Carl");
    }
}
