//! The classifier seam and the linear classifier the trainer produces.

use serde::{Deserialize, Serialize};

use crate::errors::{PostinoError, Result};

/// A pre-trained classifier.
///
/// The pipeline owns nothing about the model behind this trait: it is
/// supplied by the caller, invoked once per classification with a single
/// feature vector, and any failure it reports propagates unchanged.
pub trait Classifier {
    /// Predicts the label of one feature vector.
    fn predict(&self, features: &[f64]) -> Result<String>;
}

/// A dense linear classifier with one weight row and bias per label.
///
/// The predicted label is the argmax of the per-label decision scores;
/// ties resolve to the earlier label, so prediction is deterministic.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct LinearClassifier {
    labels: Vec<String>,
    weights: Vec<Vec<f64>>,
    biases: Vec<f64>,
}

impl LinearClassifier {
    /// Creates a classifier from per-label weight rows.
    ///
    /// # Arguments
    ///
    /// * `labels` - Label names, one per class.
    /// * `weights` - One weight row per label, all of equal length.
    /// * `biases` - One bias per label.
    ///
    /// # Errors
    ///
    /// [`PostinoError::InvalidArgument`] will be returned if the shapes
    /// are inconsistent or fewer than two labels are given.
    pub fn new(labels: Vec<String>, weights: Vec<Vec<f64>>, biases: Vec<f64>) -> Result<Self> {
        if labels.len() < 2 {
            return Err(PostinoError::invalid_argument(
                "labels",
                "a classifier needs at least two labels",
            ));
        }
        if weights.len() != labels.len() || biases.len() != labels.len() {
            return Err(PostinoError::invalid_argument(
                "weights",
                format!(
                    "{} labels, {} weight rows, {} biases",
                    labels.len(),
                    weights.len(),
                    biases.len(),
                ),
            ));
        }
        let n_features = weights[0].len();
        if weights.iter().any(|row| row.len() != n_features) {
            return Err(PostinoError::invalid_argument(
                "weights",
                "weight rows have differing lengths",
            ));
        }
        Ok(Self {
            labels,
            weights,
            biases,
        })
    }

    /// Gets the label names.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Gets the expected feature vector length.
    pub fn n_features(&self) -> usize {
        self.weights[0].len()
    }

    /// Computes the per-label decision scores of one feature vector.
    ///
    /// # Errors
    ///
    /// [`PostinoError::Prediction`] will be returned on a length mismatch.
    pub fn decision_scores(&self, features: &[f64]) -> Result<Vec<f64>> {
        if features.len() != self.n_features() {
            return Err(PostinoError::prediction(format!(
                "feature vector has {} entries but the classifier expects {}",
                features.len(),
                self.n_features(),
            )));
        }
        Ok(self
            .weights
            .iter()
            .zip(&self.biases)
            .map(|(row, bias)| {
                row.iter()
                    .zip(features)
                    .map(|(w, x)| w * x)
                    .sum::<f64>()
                    + bias
            })
            .collect())
    }
}

impl Classifier for LinearClassifier {
    fn predict(&self, features: &[f64]) -> Result<String> {
        let scores = self.decision_scores(features)?;
        let mut best = 0;
        for (i, score) in scores.iter().enumerate() {
            if *score > scores[best] {
                best = i;
            }
        }
        Ok(self.labels[best].clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spam_ham() -> LinearClassifier {
        LinearClassifier::new(
            vec!["ham".to_string(), "spam".to_string()],
            vec![vec![-1.0, -1.0], vec![1.0, 1.0]],
            vec![0.0, 0.0],
        )
        .unwrap()
    }

    #[test]
    fn test_linear_classifier_predicts_argmax() {
        let classifier = spam_ham();

        assert_eq!("spam", classifier.predict(&[0.7, 0.7]).unwrap());
        assert_eq!("ham", classifier.predict(&[-0.5, -0.2]).unwrap());
    }

    #[test]
    fn test_linear_classifier_tie_takes_first_label() {
        let classifier = spam_ham();

        assert_eq!("ham", classifier.predict(&[0.0, 0.0]).unwrap());
    }

    #[test]
    fn test_linear_classifier_dimension_mismatch() {
        let classifier = spam_ham();
        let result = classifier.predict(&[1.0]);

        assert!(matches!(
            result,
            Err(crate::errors::PostinoError::Prediction(_))
        ));
    }

    #[test]
    fn test_linear_classifier_rejects_inconsistent_shapes() {
        let result = LinearClassifier::new(
            vec!["ham".to_string(), "spam".to_string()],
            vec![vec![1.0], vec![1.0, 2.0]],
            vec![0.0, 0.0],
        );

        assert!(result.is_err());
    }

    #[test]
    fn test_linear_classifier_rejects_single_label() {
        let result = LinearClassifier::new(
            vec!["ham".to_string()],
            vec![vec![1.0]],
            vec![0.0],
        );

        assert!(result.is_err());
    }
}
