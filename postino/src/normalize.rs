//! Message text normalization.

use regex::Regex;

use crate::lemma::Lemmatizer;

/// Normalizes raw message text into lowercase, lemmatized, single-spaced
/// tokens.
///
/// The cleanup steps run in a fixed order: non-word characters become
/// spaces, isolated single letters are dropped, whitespace runs collapse,
/// a leading `b ` byte-string artifact is stripped, and the lowercased
/// tokens are lemmatized and rejoined. Normalization is pure and stateless
/// per message.
///
/// # Examples
///
/// ```
/// use postino::TextNormalizer;
///
/// let normalizer = TextNormalizer::new();
/// assert_eq!(
///     "win money now click here",
///     normalizer.normalize("WIN money now click here"),
/// );
/// ```
pub struct TextNormalizer {
    non_word: Regex,
    isolated_letter: Regex,
    caret_letter: Regex,
    whitespace: Regex,
    bytes_prefix: Regex,
    lemmatizer: Lemmatizer,
}

impl TextNormalizer {
    /// Creates a new TextNormalizer.
    pub fn new() -> Self {
        Self {
            non_word: Regex::new(r"\W").unwrap(),
            isolated_letter: Regex::new(r"\s+[a-zA-Z]\s+").unwrap(),
            caret_letter: Regex::new(r"\^[a-zA-Z]\s+").unwrap(),
            whitespace: Regex::new(r"\s+").unwrap(),
            bytes_prefix: Regex::new(r"^b\s+").unwrap(),
            lemmatizer: Lemmatizer::new(),
        }
    }

    /// Normalizes one message.
    ///
    /// # Arguments
    ///
    /// * `text` - Raw message text.
    ///
    /// # Returns
    ///
    /// The normalized message.
    pub fn normalize(&self, text: &str) -> String {
        let text = self.non_word.replace_all(text, " ");
        let text = self.isolated_letter.replace_all(&text, " ");
        let text = self.caret_letter.replace_all(&text, " ");
        let text = self.whitespace.replace_all(&text, " ");
        // The byte-string artifact is case-sensitive and stripped before
        // lowercasing.
        let text = self.bytes_prefix.replace(&text, "");
        let text = text.to_lowercase();
        let tokens: Vec<String> = text
            .split_whitespace()
            .map(|token| self.lemmatizer.lemmatize(token))
            .collect();
        tokens.join(" ")
    }

    /// Normalizes every document in a corpus, preserving order.
    pub fn normalize_all<S>(&self, documents: &[S]) -> Vec<String>
    where
        S: AsRef<str>,
    {
        documents
            .iter()
            .map(|document| self.normalize(document.as_ref()))
            .collect()
    }
}

impl Default for TextNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_lowercases_and_lemmatizes() {
        let normalizer = TextNormalizer::new();

        assert_eq!(
            "win money now click here",
            normalizer.normalize("WIN money now click here"),
        );
        assert_eq!(
            "free prize waiting",
            normalizer.normalize("FREE prizes waiting!!!"),
        );
    }

    #[test]
    fn test_normalize_strips_punctuation() {
        let normalizer = TextNormalizer::new();

        assert_eq!(
            "hello friend how are you",
            normalizer.normalize("Hello, friend! How are you?"),
        );
    }

    #[test]
    fn test_normalize_drops_isolated_letters() {
        let normalizer = TextNormalizer::new();

        assert_eq!("this is test", normalizer.normalize("this is a test"));
    }

    #[test]
    fn test_normalize_strips_byte_string_prefix() {
        let normalizer = TextNormalizer::new();

        assert_eq!("free entry", normalizer.normalize("b'FREE entry'"));
    }

    #[test]
    fn test_normalize_collapses_whitespace() {
        let normalizer = TextNormalizer::new();

        assert_eq!("call me later", normalizer.normalize("call\t me \n  later"));
    }

    #[test]
    fn test_normalize_idempotent() {
        let normalizer = TextNormalizer::new();

        for text in [
            "win money now click here",
            "hello friend how are you",
            "this is test",
        ] {
            let once = normalizer.normalize(text);
            let twice = normalizer.normalize(&once);
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn test_normalize_empty() {
        let normalizer = TextNormalizer::new();

        assert_eq!("", normalizer.normalize(""));
        assert_eq!("", normalizer.normalize("  !!! "));
    }
}
