//! Model data.

use std::io::{Read, Write};

use serde::{Deserialize, Serialize};

use crate::classifier::LinearClassifier;
use crate::errors::{PostinoError, Result};
use crate::vectorize::VectorizerConfig;

/// A trained classification artifact.
///
/// One immutable bundle of everything prediction needs: the vectorizer
/// configuration, the fitted vocabulary, the fitted inverse document
/// frequencies, and the trained classifier. Nothing is refitted at
/// prediction time.
#[derive(Deserialize, Serialize)]
pub struct Model {
    pub(crate) config: VectorizerConfig,
    pub(crate) vocabulary: Vec<String>,
    pub(crate) idf: Vec<f64>,
    pub(crate) classifier: LinearClassifier,
}

impl Model {
    /// Bundles fitted parts into a model.
    ///
    /// # Errors
    ///
    /// [`PostinoError::InvalidModel`] will be returned if the parts
    /// disagree on the feature space size.
    pub fn new(
        config: VectorizerConfig,
        vocabulary: Vec<String>,
        idf: Vec<f64>,
        classifier: LinearClassifier,
    ) -> Result<Self> {
        let model = Self {
            config,
            vocabulary,
            idf,
            classifier,
        };
        model.validate()?;
        Ok(model)
    }

    fn validate(&self) -> Result<()> {
        if self.vocabulary.len() != self.idf.len()
            || self.vocabulary.len() != self.classifier.n_features()
        {
            return Err(PostinoError::invalid_model(format!(
                "inconsistent feature space: {} vocabulary terms, {} inverse \
                 document frequencies, classifier expects {}",
                self.vocabulary.len(),
                self.idf.len(),
                self.classifier.n_features(),
            )));
        }
        self.config.validate()
    }

    /// Exports the model data.
    ///
    /// # Arguments
    ///
    /// * `wtr` - Byte-oriented sink object.
    ///
    /// # Errors
    ///
    /// When `wtr` generates an error, it will be returned as is.
    pub fn write<W>(&self, wtr: &mut W) -> Result<()>
    where
        W: Write,
    {
        bincode::serialize_into(wtr, self)?;
        Ok(())
    }

    /// Creates a model from a reader.
    ///
    /// # Arguments
    ///
    /// * `rdr` - A data source.
    ///
    /// # Errors
    ///
    /// When `rdr` generates an error, it will be returned as is.
    /// [`PostinoError::InvalidModel`] will be returned if the decoded
    /// model fails validation.
    pub fn read<R>(rdr: &mut R) -> Result<Self>
    where
        R: Read,
    {
        let model: Self = bincode::deserialize_from(rdr)?;
        model.validate()?;
        Ok(model)
    }

    /// Gets the vectorizer configuration.
    pub fn config(&self) -> &VectorizerConfig {
        &self.config
    }

    /// Gets the vocabulary in column order.
    pub fn vocabulary(&self) -> &[String] {
        &self.vocabulary
    }

    /// Gets the inverse document frequencies in column order.
    pub fn idf(&self) -> &[f64] {
        &self.idf
    }

    /// Gets the label names the classifier can predict.
    pub fn labels(&self) -> &[String] {
        self.classifier.labels()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tiny_model() -> Model {
        let classifier = LinearClassifier::new(
            vec!["ham".to_string(), "spam".to_string()],
            vec![vec![-0.5, 0.25], vec![0.5, -0.25]],
            vec![0.1, -0.1],
        )
        .unwrap();
        Model::new(
            VectorizerConfig::default(),
            vec!["money".to_string(), "win".to_string()],
            vec![1.0, 1.4],
            classifier,
        )
        .unwrap()
    }

    #[test]
    fn test_model_write_read_roundtrip() {
        let model = tiny_model();
        let mut buf: Vec<u8> = vec![];
        model.write(&mut buf).unwrap();
        let decoded = Model::read(&mut buf.as_slice()).unwrap();

        assert_eq!(model.vocabulary(), decoded.vocabulary());
        assert_eq!(model.idf(), decoded.idf());
        assert_eq!(model.labels(), decoded.labels());
        assert_eq!(model.config().max_features, decoded.config().max_features);
    }

    #[test]
    fn test_model_rejects_inconsistent_feature_space() {
        let classifier = LinearClassifier::new(
            vec!["ham".to_string(), "spam".to_string()],
            vec![vec![1.0, 2.0], vec![2.0, 1.0]],
            vec![0.0, 0.0],
        )
        .unwrap();
        let result = Model::new(
            VectorizerConfig::default(),
            vec!["money".to_string()],
            vec![1.0],
            classifier,
        );

        assert!(matches!(
            result,
            Err(crate::errors::PostinoError::InvalidModel(_))
        ));
    }

    #[test]
    fn test_model_read_rejects_garbage() {
        let mut garbage: &[u8] = &[0xff; 16];

        assert!(Model::read(&mut garbage).is_err());
    }
}
