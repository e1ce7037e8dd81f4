//! Text normalization

use regex::Regex;
use std::sync::OnceLock;

fn non_letter_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[^a-zA-Z\s]").expect("Invalid non-letter regex"))
}

fn whitespace_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\s+").expect("Invalid whitespace regex"))
}

/// Normalize raw text for keyword analysis.
///
/// Lowercases the input, replaces every character outside the ASCII letter
/// and whitespace ranges with a single space, collapses whitespace runs and
/// trims the ends. Total over all inputs; the empty string maps to itself.
pub fn normalize(text: &str) -> String {
    let lowered = text.to_lowercase();
    let letters_only = non_letter_regex().replace_all(&lowered, " ");
    whitespace_regex()
        .replace_all(&letters_only, " ")
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercases_and_strips_punctuation() {
        let result = normalize("Hello, World! C++ & SQL (5 yrs).");
        assert_eq!(result, "hello world c sql yrs");
    }

    #[test]
    fn test_collapses_whitespace() {
        let result = normalize("  python \t\n  sql\r\n backend  ");
        assert_eq!(result, "python sql backend");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   \t\n"), "");
        assert_eq!(normalize("123 456 !!!"), "");
    }

    #[test]
    fn test_output_alphabet_property() {
        let samples = [
            "Développé à Paris — résumé!",
            "email@example.com | (555) 123-4567",
            "Rust/Python/SQL, 3+ years",
        ];
        for sample in samples {
            let result = normalize(sample);
            assert!(!result.starts_with(' ') && !result.ends_with(' '));
            assert!(!result.contains("  "));
            assert!(result
                .chars()
                .all(|c| c.is_ascii_lowercase() || c == ' '));
        }
    }
}
