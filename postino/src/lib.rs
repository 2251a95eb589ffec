#![cfg_attr(docsrs, feature(doc_cfg))]

//! # Postino
//!
//! Postino is a bag-of-words spam filter for short text messages.
//!
//! Messages are normalized (punctuation cleanup, lowercasing, English noun
//! lemmatization), vectorized with document-frequency-pruned unigram and
//! bigram counts reweighted by TF-IDF, and classified by a linear model.
//!
//! ## Examples
//!
//! Classifying against a trained model file:
//!
//! ```no_run
//! use std::fs::File;
//! use std::io::{prelude::*, stdin, BufReader};
//!
//! use postino::{Model, Predictor};
//!
//! let mut f = BufReader::new(File::open("model.bin").unwrap());
//! let model = Model::read(&mut f).unwrap();
//! let predictor = Predictor::new(model).unwrap();
//!
//! for line in stdin().lock().lines() {
//!     let message = line.unwrap();
//!     let label = predictor.predict(&message).unwrap();
//!     println!("{}\t{}", label, message);
//! }
//! ```
//!
//! One-shot classification with a caller-supplied classifier, refitting the
//! vectorizer over dataset plus message:
//!
//! ```no_run
//! use postino::{classify, Dataset, LinearClassifier, VectorizerConfig};
//!
//! # fn classifier() -> LinearClassifier { unimplemented!() }
//! let dataset = Dataset::from_path("spam.csv").unwrap();
//! let classifier: LinearClassifier = classifier();
//! let label = classify(
//!     "WIN a free prize, click here!",
//!     &classifier,
//!     &dataset,
//!     &VectorizerConfig::default(),
//! )
//! .unwrap();
//! ```
//!
//! Training requires **crate feature** `train`. For more details, see
//! [`Trainer`].

mod classifier;
mod corpus;
mod dataset;
mod errors;
mod lemma;
mod model;
mod normalize;
mod pipeline;
mod predictor;
mod stopwords;
mod vectorize;

#[cfg(feature = "train")]
mod trainer;

pub use classifier::{Classifier, LinearClassifier};
pub use corpus::Corpus;
pub use dataset::{Dataset, DatasetEncoding};
pub use errors::{PostinoError, Result};
pub use lemma::Lemmatizer;
pub use model::Model;
pub use normalize::TextNormalizer;
pub use pipeline::classify;
pub use predictor::Predictor;
pub use stopwords::ENGLISH_STOP_WORDS;
pub use vectorize::{CountVectorizer, FeatureMatrix, TfidfTransform, VectorizerConfig};

#[cfg(feature = "train")]
pub use trainer::{SolverType, Trainer};
