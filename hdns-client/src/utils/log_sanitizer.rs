//! Keeps response bodies and credentials from flooding or leaking into logs.

/// Longest body excerpt written to a log line, in bytes.
const TRUNCATE_LIMIT: usize = 256;

/// Cuts `s` down to at most [`TRUNCATE_LIMIT`] bytes on a char boundary,
/// noting the original length.
pub fn truncate_for_log(s: &str) -> String {
    if s.len() <= TRUNCATE_LIMIT {
        return s.to_string();
    }
    let cut = s
        .char_indices()
        .map(|(i, _)| i)
        .take_while(|&i| i <= TRUNCATE_LIMIT)
        .last()
        .unwrap_or(0);
    format!("{}... [truncated, total {} bytes]", &s[..cut], s.len())
}

/// Shows only the first two characters of a secret.
pub fn mask_secret(secret: &str) -> String {
    if secret.is_empty() {
        return String::new();
    }
    let visible: String = secret.chars().take(2).collect();
    format!("{visible}***")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_string_unchanged() {
        assert_eq!(truncate_for_log("{\"zones\":[]}"), "{\"zones\":[]}");
    }

    #[test]
    fn long_string_truncated() {
        let s = "x".repeat(TRUNCATE_LIMIT * 2);
        let out = truncate_for_log(&s);
        assert!(out.starts_with(&"x".repeat(TRUNCATE_LIMIT)));
        assert!(out.ends_with(&format!("total {} bytes]", TRUNCATE_LIMIT * 2)));
    }

    #[test]
    fn multibyte_boundary_respected() {
        let s = "ü".repeat(TRUNCATE_LIMIT);
        let out = truncate_for_log(&s);
        assert!(out.contains("... [truncated"));
    }

    #[test]
    fn secrets_masked() {
        assert_eq!(mask_secret("abcdef"), "ab***");
        assert_eq!(mask_secret("a"), "a***");
        assert_eq!(mask_secret(""), "");
    }
}
