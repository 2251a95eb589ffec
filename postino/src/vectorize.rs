//! Count and TF-IDF vectorization.
//!
//! [`CountVectorizer`] learns a bag-of-words vocabulary over a corpus and
//! produces dense count matrices; [`TfidfTransform`] reweights counts by
//! smoothed inverse document frequency
//! (`idf(t) = ln((1 + n) / (1 + df(t))) + 1`) and L2-normalizes each row.
//! Vocabulary construction is deterministic: terms are pruned by document
//! frequency, capped by corpus frequency with a lexicographic tie-break,
//! and the surviving terms are ordered lexicographically.

use std::collections::{HashMap, HashSet};

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::errors::{PostinoError, Result};
use crate::stopwords;

/// Vocabulary construction parameters.
///
/// The document-frequency bounds and n-gram range are configuration rather
/// than constants; their defaults follow the shipped spam model.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct VectorizerConfig {
    /// Maximum vocabulary size.
    pub max_features: usize,

    /// A term must appear in at least this many documents.
    pub min_df: usize,

    /// A term must appear in at most this fraction of documents.
    pub max_df: f64,

    /// Shortest n-gram length.
    pub ngram_min: usize,

    /// Longest n-gram length.
    pub ngram_max: usize,

    /// Whether English stop words are removed before counting.
    pub filter_stop_words: bool,
}

impl Default for VectorizerConfig {
    fn default() -> Self {
        Self {
            max_features: 10_000,
            min_df: 1,
            max_df: 0.6,
            ngram_min: 1,
            ngram_max: 2,
            filter_stop_words: true,
        }
    }
}

impl VectorizerConfig {
    /// Checks that the parameters are consistent.
    ///
    /// # Errors
    ///
    /// [`PostinoError::InvalidArgument`] will be returned for a zero
    /// `max_features`, an empty or reversed n-gram range, or a `max_df`
    /// outside `(0, 1]`.
    pub fn validate(&self) -> Result<()> {
        if self.max_features == 0 {
            return Err(PostinoError::invalid_argument(
                "max_features",
                "must be at least 1",
            ));
        }
        if self.ngram_min == 0 || self.ngram_min > self.ngram_max {
            return Err(PostinoError::invalid_argument(
                "ngram_range",
                format!("invalid range ({}, {})", self.ngram_min, self.ngram_max),
            ));
        }
        if !(self.max_df > 0.0 && self.max_df <= 1.0) {
            return Err(PostinoError::invalid_argument(
                "max_df",
                format!("{} is not within (0, 1]", self.max_df),
            ));
        }
        Ok(())
    }
}

/// A dense row-major matrix of feature values, one row per document.
#[derive(Clone, Debug, PartialEq)]
pub struct FeatureMatrix {
    n_rows: usize,
    n_cols: usize,
    data: Vec<f64>,
}

impl FeatureMatrix {
    pub(crate) fn zeros(n_rows: usize, n_cols: usize) -> Self {
        Self {
            n_rows,
            n_cols,
            data: vec![0.0; n_rows * n_cols],
        }
    }

    /// Gets the number of rows.
    pub fn n_rows(&self) -> usize {
        self.n_rows
    }

    /// Gets the number of columns.
    pub fn n_cols(&self) -> usize {
        self.n_cols
    }

    /// Gets one row as a slice.
    ///
    /// # Panics
    ///
    /// Panics if `i` is out of range.
    pub fn row(&self, i: usize) -> &[f64] {
        &self.data[i * self.n_cols..(i + 1) * self.n_cols]
    }

    pub(crate) fn row_mut(&mut self, i: usize) -> &mut [f64] {
        &mut self.data[i * self.n_cols..(i + 1) * self.n_cols]
    }
}

/// Bag-of-words vectorizer with document-frequency pruning.
///
/// # Examples
///
/// ```
/// use postino::{CountVectorizer, VectorizerConfig};
///
/// let documents = vec![
///     "win money click".to_string(),
///     "hello friend".to_string(),
/// ];
/// let mut vectorizer = CountVectorizer::new(VectorizerConfig::default()).unwrap();
/// let counts = vectorizer.fit_transform(&documents).unwrap();
/// assert_eq!(2, counts.n_rows());
/// ```
pub struct CountVectorizer {
    config: VectorizerConfig,
    token_pattern: Regex,
    vocabulary: Vec<String>,
    vocabulary_index: HashMap<String, usize>,
}

impl CountVectorizer {
    /// Creates an unfitted vectorizer.
    ///
    /// # Errors
    ///
    /// [`PostinoError::InvalidArgument`] will be returned if the
    /// configuration is inconsistent.
    pub fn new(config: VectorizerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            token_pattern: Regex::new(r"\b\w\w+\b").unwrap(),
            vocabulary: vec![],
            vocabulary_index: HashMap::new(),
        })
    }

    /// Rebuilds a fitted vectorizer from a stored vocabulary.
    ///
    /// # Errors
    ///
    /// [`PostinoError::InvalidArgument`] will be returned if the
    /// configuration is inconsistent.
    pub fn from_vocabulary(config: VectorizerConfig, vocabulary: Vec<String>) -> Result<Self> {
        let mut vectorizer = Self::new(config)?;
        vectorizer.vocabulary_index = vocabulary
            .iter()
            .enumerate()
            .map(|(i, term)| (term.clone(), i))
            .collect();
        vectorizer.vocabulary = vocabulary;
        Ok(vectorizer)
    }

    /// Gets the learned vocabulary in column order.
    pub fn vocabulary(&self) -> &[String] {
        &self.vocabulary
    }

    /// Extracts the counted terms of one document: tokens of two or more
    /// word characters, stop words removed, then n-grams over what remains.
    fn terms_of(&self, document: &str) -> Vec<String> {
        let tokens: Vec<&str> = self
            .token_pattern
            .find_iter(document)
            .map(|m| m.as_str())
            .filter(|token| !self.config.filter_stop_words || !stopwords::is_stop_word(token))
            .collect();
        let mut terms = vec![];
        for n in self.config.ngram_min..=self.config.ngram_max {
            for ngram in tokens.windows(n) {
                terms.push(ngram.join(" "));
            }
        }
        terms
    }

    /// Learns the vocabulary of a corpus.
    ///
    /// # Arguments
    ///
    /// * `documents` - Normalized corpus, one entry per document.
    ///
    /// # Errors
    ///
    /// [`PostinoError::Vectorization`] will be returned if the corpus is
    /// empty, if the document-frequency bounds cannot be satisfied (for
    /// the default bounds this rejects a single-document corpus), or if
    /// pruning leaves no vocabulary.
    pub fn fit<S>(&mut self, documents: &[S]) -> Result<()>
    where
        S: AsRef<str>,
    {
        if documents.is_empty() {
            return Err(PostinoError::vectorization("cannot fit an empty corpus"));
        }
        let n_docs = documents.len();
        let max_df_count = (self.config.max_df * n_docs as f64) as usize;
        if max_df_count < self.config.min_df {
            return Err(PostinoError::vectorization(format!(
                "max_df={} retains terms from at most {} of {} documents, \
                 fewer than min_df={}",
                self.config.max_df, max_df_count, n_docs, self.config.min_df,
            )));
        }

        let mut term_freq: HashMap<String, usize> = HashMap::new();
        let mut doc_freq: HashMap<String, usize> = HashMap::new();
        for document in documents {
            let mut seen = HashSet::new();
            for term in self.terms_of(document.as_ref()) {
                *term_freq.entry(term.clone()).or_insert(0) += 1;
                if seen.insert(term.clone()) {
                    *doc_freq.entry(term).or_insert(0) += 1;
                }
            }
        }

        let mut ranked: Vec<(String, usize)> = term_freq
            .into_iter()
            .filter(|(term, _)| {
                let df = doc_freq[term];
                df >= self.config.min_df && df <= max_df_count
            })
            .collect();
        if ranked.is_empty() {
            return Err(PostinoError::vectorization(
                "empty vocabulary; the corpus contains no countable terms \
                 within the document-frequency bounds",
            ));
        }
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        ranked.truncate(self.config.max_features);

        let mut vocabulary: Vec<String> = ranked.into_iter().map(|(term, _)| term).collect();
        vocabulary.sort();
        self.vocabulary_index = vocabulary
            .iter()
            .enumerate()
            .map(|(i, term)| (term.clone(), i))
            .collect();
        self.vocabulary = vocabulary;
        Ok(())
    }

    /// Counts the terms of each document over the learned vocabulary.
    ///
    /// Terms outside the vocabulary are ignored.
    ///
    /// # Errors
    ///
    /// [`PostinoError::Vectorization`] will be returned if the vectorizer
    /// has not been fitted.
    pub fn transform<S>(&self, documents: &[S]) -> Result<FeatureMatrix>
    where
        S: AsRef<str>,
    {
        if self.vocabulary.is_empty() {
            return Err(PostinoError::vectorization(
                "the vocabulary is empty; fit the vectorizer first",
            ));
        }
        let mut matrix = FeatureMatrix::zeros(documents.len(), self.vocabulary.len());
        for (i, document) in documents.iter().enumerate() {
            let row = matrix.row_mut(i);
            for term in self.terms_of(document.as_ref()) {
                if let Some(&j) = self.vocabulary_index.get(&term) {
                    row[j] += 1.0;
                }
            }
        }
        Ok(matrix)
    }

    /// Learns the vocabulary and counts the corpus in one pass.
    pub fn fit_transform<S>(&mut self, documents: &[S]) -> Result<FeatureMatrix>
    where
        S: AsRef<str>,
    {
        self.fit(documents)?;
        self.transform(documents)
    }

    /// Counts the terms of a single document.
    ///
    /// # Errors
    ///
    /// [`PostinoError::Vectorization`] will be returned if the vectorizer
    /// has not been fitted.
    pub fn transform_one(&self, document: &str) -> Result<Vec<f64>> {
        let matrix = self.transform(&[document])?;
        Ok(matrix.row(0).to_vec())
    }
}

/// TF-IDF reweighting of a count matrix.
pub struct TfidfTransform {
    idf: Vec<f64>,
}

impl TfidfTransform {
    /// Computes smoothed inverse document frequencies from a count matrix.
    ///
    /// # Errors
    ///
    /// [`PostinoError::Vectorization`] will be returned for a matrix with
    /// no rows.
    pub fn fit(counts: &FeatureMatrix) -> Result<Self> {
        if counts.n_rows() == 0 {
            return Err(PostinoError::vectorization(
                "cannot fit inverse document frequencies on an empty matrix",
            ));
        }
        let n = counts.n_rows() as f64;
        let idf = (0..counts.n_cols())
            .map(|j| {
                let df = (0..counts.n_rows())
                    .filter(|&i| counts.row(i)[j] > 0.0)
                    .count() as f64;
                ((1.0 + n) / (1.0 + df)).ln() + 1.0
            })
            .collect();
        Ok(Self { idf })
    }

    /// Rebuilds a fitted transform from stored weights.
    pub fn from_idf(idf: Vec<f64>) -> Self {
        Self { idf }
    }

    /// Gets the inverse document frequencies in column order.
    pub fn idf(&self) -> &[f64] {
        &self.idf
    }

    /// Reweights a count matrix and L2-normalizes each row.
    ///
    /// All-zero rows stay zero.
    ///
    /// # Errors
    ///
    /// [`PostinoError::Vectorization`] will be returned on a column-count
    /// mismatch.
    pub fn transform(&self, counts: &FeatureMatrix) -> Result<FeatureMatrix> {
        if counts.n_cols() != self.idf.len() {
            return Err(PostinoError::vectorization(format!(
                "count matrix has {} columns but {} inverse document \
                 frequencies are fitted",
                counts.n_cols(),
                self.idf.len(),
            )));
        }
        let mut weighted = counts.clone();
        for i in 0..weighted.n_rows() {
            let row = weighted.row_mut(i);
            Self::weight_row(&self.idf, row);
        }
        Ok(weighted)
    }

    /// Reweights a single count vector in place.
    ///
    /// # Errors
    ///
    /// [`PostinoError::Vectorization`] will be returned on a length
    /// mismatch.
    pub fn transform_vector(&self, counts: &mut [f64]) -> Result<()> {
        if counts.len() != self.idf.len() {
            return Err(PostinoError::vectorization(format!(
                "count vector has {} entries but {} inverse document \
                 frequencies are fitted",
                counts.len(),
                self.idf.len(),
            )));
        }
        Self::weight_row(&self.idf, counts);
        Ok(())
    }

    fn weight_row(idf: &[f64], row: &mut [f64]) {
        for (value, idf) in row.iter_mut().zip(idf) {
            *value *= idf;
        }
        let norm = row.iter().map(|v| v * v).sum::<f64>().sqrt();
        if norm > 0.0 {
            for value in row.iter_mut() {
                *value /= norm;
            }
        }
    }
}
