//! English noun lemmatization.
//!
//! Reduces tokens to their dictionary base form with a small irregular-form
//! table and suffix detachment rules. The tables are compiled into the
//! binary; no runtime resource loading is involved.

/// Irregular inflections, sorted by the inflected form.
const IRREGULAR: &[(&str, &str)] = &[
    ("bonuses", "bonus"),
    ("buses", "bus"),
    ("children", "child"),
    ("dice", "die"),
    ("feet", "foot"),
    ("gases", "gas"),
    ("geese", "goose"),
    ("knives", "knife"),
    ("leaves", "leaf"),
    ("lives", "life"),
    ("loaves", "loaf"),
    ("men", "man"),
    ("mice", "mouse"),
    ("movies", "movie"),
    ("oxen", "ox"),
    ("pence", "penny"),
    ("teeth", "tooth"),
    ("viruses", "virus"),
    ("wives", "wife"),
    ("women", "woman"),
];

/// Words ending in `s` that are already base forms, sorted.
const INVARIANT: &[&str] = &[
    "alias", "always", "atlas", "bias", "canvas", "news", "perhaps", "series", "species",
    "whereas",
];

/// Reduces English nouns to their dictionary base form.
///
/// # Examples
///
/// ```
/// use postino::Lemmatizer;
///
/// let lemmatizer = Lemmatizer::new();
/// assert_eq!("message", lemmatizer.lemmatize("messages"));
/// assert_eq!("study", lemmatizer.lemmatize("studies"));
/// assert_eq!("money", lemmatizer.lemmatize("money"));
/// ```
pub struct Lemmatizer;

impl Lemmatizer {
    /// Creates a new Lemmatizer.
    pub fn new() -> Self {
        Self {}
    }

    /// Returns the dictionary base form of a token.
    ///
    /// Tokens that match no table entry and no detachment rule are returned
    /// unchanged.
    pub fn lemmatize(&self, word: &str) -> String {
        if let Ok(i) = IRREGULAR.binary_search_by(|(k, _)| (*k).cmp(word)) {
            return IRREGULAR[i].1.to_string();
        }
        if INVARIANT.binary_search(&word).is_ok() {
            return word.to_string();
        }

        // Suffix detachment. Sibilant stems pluralize with "-es", so those
        // endings are resolved before the plain "-s" strip; "-aches" comes
        // first so "headaches" is not treated as a "-ches" plural.
        if word.ends_with("sses")
            || word.ends_with("ches") && !word.ends_with("aches")
            || word.ends_with("shes")
            || word.ends_with("zzes")
            || word.ends_with("xes")
        {
            return word[..word.len() - 2].to_string();
        }
        if let Some(stem) = word.strip_suffix("ies") {
            // Four-letter words such as "ties" singularize to "-ie".
            if word.len() <= 4 {
                return format!("{}ie", stem);
            }
            return format!("{}y", stem);
        }
        if let Some(stem) = word.strip_suffix("men") {
            return format!("{}man", stem);
        }
        if let Some(stem) = word.strip_suffix('s') {
            if stem.len() >= 3
                && !word.ends_with("ss")
                && !word.ends_with("us")
                && !word.ends_with("is")
                && !word.ends_with("os")
            {
                return stem.to_string();
            }
        }
        word.to_string()
    }
}

impl Default for Lemmatizer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lemma_tables_sorted() {
        assert!(IRREGULAR.windows(2).all(|w| w[0].0 < w[1].0));
        assert!(INVARIANT.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_lemma_regular_plural() {
        let lemmatizer = Lemmatizer::new();

        assert_eq!("message", lemmatizer.lemmatize("messages"));
        assert_eq!("winner", lemmatizer.lemmatize("winners"));
        assert_eq!("prize", lemmatizer.lemmatize("prizes"));
        assert_eq!("house", lemmatizer.lemmatize("houses"));
        assert_eq!("day", lemmatizer.lemmatize("days"));
    }

    #[test]
    fn test_lemma_suffix_rules() {
        let lemmatizer = Lemmatizer::new();

        assert_eq!("study", lemmatizer.lemmatize("studies"));
        assert_eq!("box", lemmatizer.lemmatize("boxes"));
        assert_eq!("church", lemmatizer.lemmatize("churches"));
        assert_eq!("wish", lemmatizer.lemmatize("wishes"));
        assert_eq!("class", lemmatizer.lemmatize("classes"));
        assert_eq!("headache", lemmatizer.lemmatize("headaches"));
        assert_eq!("tie", lemmatizer.lemmatize("ties"));
    }

    #[test]
    fn test_lemma_irregular() {
        let lemmatizer = Lemmatizer::new();

        assert_eq!("man", lemmatizer.lemmatize("men"));
        assert_eq!("child", lemmatizer.lemmatize("children"));
        assert_eq!("workman", lemmatizer.lemmatize("workmen"));
        assert_eq!("virus", lemmatizer.lemmatize("viruses"));
        assert_eq!("bus", lemmatizer.lemmatize("buses"));
    }

    #[test]
    fn test_lemma_unchanged() {
        let lemmatizer = Lemmatizer::new();

        assert_eq!("money", lemmatizer.lemmatize("money"));
        assert_eq!("win", lemmatizer.lemmatize("win"));
        assert_eq!("news", lemmatizer.lemmatize("news"));
        assert_eq!("class", lemmatizer.lemmatize("class"));
        assert_eq!("this", lemmatizer.lemmatize("this"));
        assert_eq!("was", lemmatizer.lemmatize("was"));
        assert_eq!("gas", lemmatizer.lemmatize("gas"));
        assert_eq!("always", lemmatizer.lemmatize("always"));
    }

    #[test]
    fn test_lemma_idempotent() {
        let lemmatizer = Lemmatizer::new();

        for word in [
            "messages", "studies", "boxes", "churches", "men", "money", "houses", "buses",
        ] {
            let once = lemmatizer.lemmatize(word);
            let twice = lemmatizer.lemmatize(&once);
            assert_eq!(once, twice);
        }
    }
}
