//! Message classification against a frozen model.

use crate::classifier::{Classifier, LinearClassifier};
use crate::errors::Result;
use crate::model::Model;
use crate::normalize::TextNormalizer;
use crate::vectorize::{CountVectorizer, TfidfTransform};

/// Predictor.
///
/// Wraps a [`Model`] and classifies one message at a time. The message is
/// normalized and transformed against the frozen vocabulary and inverse
/// document frequencies; nothing is refitted, so identical messages always
/// produce identical feature vectors and labels.
///
/// # Examples
///
/// ```no_run
/// use std::fs::File;
/// use std::io::BufReader;
///
/// use postino::{Model, Predictor};
///
/// let mut f = BufReader::new(File::open("model.bin").unwrap());
/// let model = Model::read(&mut f).unwrap();
/// let predictor = Predictor::new(model).unwrap();
/// let label = predictor.predict("WIN a free prize, click here!").unwrap();
/// println!("{}", label);
/// ```
pub struct Predictor {
    normalizer: TextNormalizer,
    vectorizer: CountVectorizer,
    tfidf: TfidfTransform,
    classifier: LinearClassifier,
}

impl Predictor {
    /// Creates a new predictor.
    ///
    /// # Arguments
    ///
    /// * `model` - A model data.
    ///
    /// # Errors
    ///
    /// [`PostinoError::InvalidArgument`] will be returned if the model's
    /// vectorizer configuration is inconsistent.
    ///
    /// [`PostinoError::InvalidArgument`]: crate::PostinoError::InvalidArgument
    pub fn new(model: Model) -> Result<Self> {
        let Model {
            config,
            vocabulary,
            idf,
            classifier,
        } = model;
        Ok(Self {
            normalizer: TextNormalizer::new(),
            vectorizer: CountVectorizer::from_vocabulary(config, vocabulary)?,
            tfidf: TfidfTransform::from_idf(idf),
            classifier,
        })
    }

    /// Computes the feature vector of one message.
    ///
    /// # Errors
    ///
    /// [`PostinoError::Vectorization`] will be returned if the message
    /// cannot be transformed against the frozen vocabulary.
    ///
    /// [`PostinoError::Vectorization`]: crate::PostinoError::Vectorization
    pub fn features(&self, message: &str) -> Result<Vec<f64>> {
        let normalized = self.normalizer.normalize(message);
        let mut counts = self.vectorizer.transform_one(&normalized)?;
        self.tfidf.transform_vector(&mut counts)?;
        Ok(counts)
    }

    /// Predicts the label of one message.
    ///
    /// # Arguments
    ///
    /// * `message` - Raw message text.
    ///
    /// # Returns
    ///
    /// The predicted label.
    pub fn predict(&self, message: &str) -> Result<String> {
        let features = self.features(message)?;
        self.classifier.predict(&features)
    }

    /// Gets the label names the predictor can return.
    pub fn labels(&self) -> &[String] {
        self.classifier.labels()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::LinearClassifier;
    use crate::vectorize::VectorizerConfig;

    fn spam_model() -> Model {
        // Vocabulary in column order; spam-leaning terms carry positive
        // spam weights.
        let vocabulary = vec![
            "click".to_string(),
            "free".to_string(),
            "money".to_string(),
            "win".to_string(),
        ];
        let classifier = LinearClassifier::new(
            vec!["ham".to_string(), "spam".to_string()],
            vec![
                vec![-1.0, -1.0, -1.0, -1.0],
                vec![1.0, 1.0, 1.0, 1.0],
            ],
            vec![0.0, 0.0],
        )
        .unwrap();
        Model::new(
            VectorizerConfig::default(),
            vocabulary,
            vec![1.0, 1.0, 1.0, 1.0],
            classifier,
        )
        .unwrap()
    }

    #[test]
    fn test_predictor_classifies_spam_terms() {
        let predictor = Predictor::new(spam_model()).unwrap();

        assert_eq!("spam", predictor.predict("FREE money!!!").unwrap());
    }

    #[test]
    fn test_predictor_unknown_terms_fall_back_to_first_label() {
        let predictor = Predictor::new(spam_model()).unwrap();

        // Every term is outside the vocabulary, so the feature vector is
        // zero and the tie resolves to the first label.
        assert_eq!("ham", predictor.predict("good evening dear").unwrap());
    }

    #[test]
    fn test_predictor_is_deterministic() {
        let predictor = Predictor::new(spam_model()).unwrap();
        let message = "WIN free money, click here";

        assert_eq!(
            predictor.features(message).unwrap(),
            predictor.features(message).unwrap(),
        );
        assert_eq!(
            predictor.predict(message).unwrap(),
            predictor.predict(message).unwrap(),
        );
    }

    #[test]
    fn test_predictor_feature_vector_is_normalized() {
        let predictor = Predictor::new(spam_model()).unwrap();
        let features = predictor.features("free money").unwrap();
        let norm = features.iter().map(|v| v * v).sum::<f64>().sqrt();

        assert!((norm - 1.0).abs() < 1e-12);
    }
}
