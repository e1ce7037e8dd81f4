//! Tokenization and stopword filtering

use crate::error::{Result, ResumeAnalyzerError};
use std::collections::HashSet;
use std::path::Path;
use std::sync::OnceLock;
use unicode_segmentation::UnicodeSegmentation;

/// Tokens shorter than this carry no keyword signal.
const MIN_TOKEN_CHARS: usize = 3;

const ENGLISH_STOPWORDS: &str = include_str!("../../data/stopwords/english.txt");

static ENGLISH_LEXICON: OnceLock<std::result::Result<Lexicon, String>> = OnceLock::new();

/// Read-only stopword reference data, shared process-wide once loaded.
#[derive(Debug, Clone)]
pub struct Lexicon {
    stop_words: HashSet<String>,
}

impl Lexicon {
    /// Shared English lexicon, parsed exactly once per process. Safe under
    /// concurrent first use; subsequent calls return the cached set.
    pub fn english() -> Result<&'static Lexicon> {
        ENGLISH_LEXICON
            .get_or_init(|| Self::parse(ENGLISH_STOPWORDS))
            .as_ref()
            .map_err(|e| ResumeAnalyzerError::ResourceUnavailable(e.clone()))
    }

    /// Load a custom stopword list, one word per line, `#` for comments.
    pub fn from_file(path: &Path) -> Result<Lexicon> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ResumeAnalyzerError::ResourceUnavailable(format!(
                "Failed to read stopword file '{}': {}",
                path.display(),
                e
            ))
        })?;
        Self::parse(&content).map_err(ResumeAnalyzerError::ResourceUnavailable)
    }

    fn parse(content: &str) -> std::result::Result<Lexicon, String> {
        let stop_words: HashSet<String> = content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(|line| line.to_lowercase())
            .collect();

        if stop_words.is_empty() {
            return Err("Stopword list contains no entries".to_string());
        }

        Ok(Lexicon { stop_words })
    }

    pub fn is_stop_word(&self, token: &str) -> bool {
        self.stop_words.contains(token)
    }

    pub fn len(&self) -> usize {
        self.stop_words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stop_words.is_empty()
    }
}

/// Splits normalized text into filtered word tokens.
pub struct Tokenizer {
    lexicon: Lexicon,
}

impl Tokenizer {
    pub fn english() -> Result<Self> {
        Ok(Self {
            lexicon: Lexicon::english()?.clone(),
        })
    }

    pub fn with_lexicon(lexicon: Lexicon) -> Self {
        Self { lexicon }
    }

    /// Tokenize normalized text into word tokens, dropping stopwords and
    /// tokens shorter than three characters. Duplicates are retained and
    /// source order is preserved; frequency counting depends on both.
    pub fn tokenize(&self, normalized: &str) -> Vec<String> {
        normalized
            .unicode_words()
            .filter(|word| word.chars().count() >= MIN_TOKEN_CHARS)
            .filter(|word| !self.lexicon.is_stop_word(word))
            .map(|word| word.to_string())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::normalizer::normalize;

    #[test]
    fn test_english_lexicon_loads() {
        let lexicon = Lexicon::english().unwrap();
        assert!(lexicon.len() > 100);
        assert!(lexicon.is_stop_word("the"));
        assert!(lexicon.is_stop_word("and"));
        assert!(!lexicon.is_stop_word("python"));
    }

    #[test]
    fn test_filters_stopwords_and_short_tokens() {
        let tokenizer = Tokenizer::english().unwrap();
        let tokens = tokenizer.tokenize(&normalize("The cat sat on a SQL database"));

        assert_eq!(tokens, vec!["cat", "sat", "sql", "database"]);
    }

    #[test]
    fn test_duplicates_and_order_preserved() {
        let tokenizer = Tokenizer::english().unwrap();
        let tokens = tokenizer.tokenize("python backend python sql python");

        assert_eq!(tokens, vec!["python", "backend", "python", "sql", "python"]);
    }

    #[test]
    fn test_empty_and_stopword_only_input() {
        let tokenizer = Tokenizer::english().unwrap();
        assert!(tokenizer.tokenize("").is_empty());
        assert!(tokenizer.tokenize("the and was were been").is_empty());
    }

    #[test]
    fn test_filter_property() {
        let tokenizer = Tokenizer::english().unwrap();
        let lexicon = Lexicon::english().unwrap();
        let text = normalize("Looking for a Python developer with strong SQL and backend experience");

        for token in tokenizer.tokenize(&text) {
            assert!(token.chars().count() > 2);
            assert!(!lexicon.is_stop_word(&token));
        }
    }

    #[test]
    fn test_rejects_empty_stopword_list() {
        let result = Lexicon::parse("# comment only\n\n");
        assert!(result.is_err());
    }
}
