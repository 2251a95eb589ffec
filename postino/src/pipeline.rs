//! The joint-fit classification pipeline.
//!
//! [`classify`] reproduces the classic call shape: the query message is
//! appended to the dataset, the vectorizer is refitted over the combined
//! corpus, and the caller-supplied classifier is invoked once on the final
//! matrix row. Refitting per call means the feature space depends on the
//! whole batch; vocabulary construction here is deterministic, so repeated
//! calls with identical inputs see identical feature vectors, but a frozen
//! [`Predictor`](crate::Predictor) should be preferred for serving.

use crate::classifier::Classifier;
use crate::corpus::Corpus;
use crate::dataset::Dataset;
use crate::errors::Result;
use crate::normalize::TextNormalizer;
use crate::vectorize::{CountVectorizer, TfidfTransform, VectorizerConfig};

/// Classifies one message against a labeled dataset.
///
/// # Arguments
///
/// * `message` - Raw message text to classify.
/// * `classifier` - A pre-trained classifier; invoked exactly once.
/// * `dataset` - The labeled dataset the vectorizer is fitted over.
/// * `config` - Vocabulary construction parameters.
///
/// # Returns
///
/// The predicted label.
///
/// # Errors
///
/// [`PostinoError::Vectorization`] will be returned if the combined corpus
/// cannot satisfy the document-frequency bounds (an empty dataset leaves a
/// single-document corpus, which the default bounds reject). Classifier
/// failures propagate as is.
///
/// [`PostinoError::Vectorization`]: crate::PostinoError::Vectorization
pub fn classify<C>(
    message: &str,
    classifier: &C,
    dataset: &Dataset,
    config: &VectorizerConfig,
) -> Result<String>
where
    C: Classifier,
{
    let corpus = Corpus::assemble(dataset.messages(), message);
    let normalizer = TextNormalizer::new();
    let documents = normalizer.normalize_all(corpus.documents());

    let mut vectorizer = CountVectorizer::new(config.clone())?;
    let counts = vectorizer.fit_transform(&documents)?;
    let weighted = TfidfTransform::fit(&counts)?.transform(&counts)?;

    classifier.predict(weighted.row(corpus.query_index()))
}
