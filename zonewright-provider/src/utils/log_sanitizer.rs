//! Log truncation utilities
//!
//! Keeps large or sensitive response bodies (TXT payloads, signed request
//! dumps) from landing in debug logs in full.

/// Maximum number of bytes of a payload to include in log output.
const TRUNCATE_LIMIT: usize = 256;

/// Largest index `<= index` that falls on a char boundary of `s`.
fn floor_char_boundary(s: &str, index: usize) -> usize {
    if index >= s.len() {
        return s.len();
    }
    let mut i = index;
    while i > 0 && !s.is_char_boundary(i) {
        i -= 1;
    }
    i
}

/// Truncate a payload for logging.
///
/// Strings within the limit pass through unchanged; longer ones are cut at
/// a char boundary and annotated with the original byte length.
pub fn truncate_for_log(s: &str) -> String {
    if s.len() <= TRUNCATE_LIMIT {
        s.to_string()
    } else {
        let cut = floor_char_boundary(s, TRUNCATE_LIMIT);
        format!("{}... [truncated, total {} bytes]", &s[..cut], s.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_string_unchanged() {
        assert_eq!(truncate_for_log("ok"), "ok");
    }

    #[test]
    fn long_string_annotated() {
        let s = "x".repeat(TRUNCATE_LIMIT * 2);
        let out = truncate_for_log(&s);
        assert!(out.ends_with(&format!("[truncated, total {} bytes]", s.len())));
        assert!(out.len() < s.len());
    }

    #[test]
    fn truncation_respects_char_boundaries() {
        let s = "ü".repeat(TRUNCATE_LIMIT);
        let out = truncate_for_log(&s);
        assert!(out.contains("... [truncated"));
    }
}
