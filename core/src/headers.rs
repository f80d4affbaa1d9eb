//! Header sets for JSON requests.
//!
//! Headers are plain `(name, value)` pairs. Names compare ASCII
//! case-insensitively, matching HTTP semantics.

/// Sent with every request built by this crate.
pub const JSON_HEADERS: &[(&str, &str)] = &[
    ("Accept", "application/json"),
    ("Content-Type", "application/json"),
];

/// Layer `overrides` on top of `base`, returning a new header list.
///
/// A name present in both keeps its position from `base` but takes the
/// override's spelling and value. Names only in `overrides` are appended in
/// order; a repeated override name resolves to its last value.
pub fn merge_headers(base: &[(&str, &str)], overrides: &[(&str, &str)]) -> Vec<(String, String)> {
    let mut merged: Vec<(String, String)> = base
        .iter()
        .map(|(name, value)| (name.to_string(), value.to_string()))
        .collect();

    for (name, value) in overrides {
        match merged
            .iter_mut()
            .find(|(existing, _)| existing.eq_ignore_ascii_case(name))
        {
            Some(entry) => *entry = (name.to_string(), value.to_string()),
            None => merged.push((name.to_string(), value.to_string())),
        }
    }

    merged
}

/// Find the value of `name`, ignoring ASCII case.
pub fn find_header<'a>(headers: &'a [(String, String)], name: &str) -> Option<&'a str> {
    headers
        .iter()
        .find(|(existing, _)| existing.eq_ignore_ascii_case(name))
        .map(|(_, value)| value.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_overrides_yields_base() {
        let merged = merge_headers(JSON_HEADERS, &[]);
        assert_eq!(
            merged,
            vec![
                ("Accept".to_string(), "application/json".to_string()),
                ("Content-Type".to_string(), "application/json".to_string()),
            ]
        );
    }

    #[test]
    fn override_replaces_case_insensitively() {
        let merged = merge_headers(JSON_HEADERS, &[("content-type", "text/plain")]);
        assert_eq!(merged.len(), 2);
        assert_eq!(find_header(&merged, "Content-Type"), Some("text/plain"));
        assert_eq!(merged[1].0, "content-type");
    }

    #[test]
    fn new_names_are_appended() {
        let merged = merge_headers(JSON_HEADERS, &[("Authorization", "Bearer abc")]);
        assert_eq!(merged.len(), 3);
        assert_eq!(merged[2], ("Authorization".to_string(), "Bearer abc".to_string()));
    }

    #[test]
    fn last_duplicate_override_wins() {
        let merged = merge_headers(JSON_HEADERS, &[("X-Trace", "1"), ("x-trace", "2")]);
        assert_eq!(merged.len(), 3);
        assert_eq!(find_header(&merged, "X-TRACE"), Some("2"));
    }

    #[test]
    fn base_is_untouched() {
        let _ = merge_headers(JSON_HEADERS, &[("Accept", "text/html")]);
        assert_eq!(JSON_HEADERS[0], ("Accept", "application/json"));
    }
}
