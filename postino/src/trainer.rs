//! Model training.

use std::collections::HashMap;
use std::str::FromStr;

use liblinear::LibLinearModel;

use crate::classifier::LinearClassifier;
use crate::dataset::Dataset;
use crate::errors::{PostinoError, Result};
use crate::model::Model;
use crate::normalize::TextNormalizer;
use crate::vectorize::{CountVectorizer, TfidfTransform, VectorizerConfig};

/// Maps label names to dense class ids in first-seen order.
pub(crate) struct LabelIndexer {
    ids: HashMap<String, usize>,
    names: Vec<String>,
}

impl LabelIndexer {
    pub(crate) fn new() -> Self {
        Self {
            ids: HashMap::new(),
            names: vec![],
        }
    }

    pub(crate) fn get_id(&mut self, name: &str) -> usize {
        if let Some(&id) = self.ids.get(name) {
            id
        } else {
            let id = self.names.len();
            self.names.push(name.to_string());
            self.ids.insert(name.to_string(), id);
            id
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.names.len()
    }

    pub(crate) fn into_names(self) -> Vec<String> {
        self.names
    }
}

/// Solver type.
#[derive(Clone, Copy, Debug)]
pub enum SolverType {
    /// L2-regularized logistic regression (primal).
    L2RegularizedLogistic = 0,

    /// L2-regularized L2-loss support vector classification (dual).
    L2RegularizedL2LossSVCDual = 1,

    /// L2-regularized L2-loss support vector classification (primal).
    L2RegularizedL2LossSVC = 2,

    /// L2-regularized L1-loss support vector classification (dual)
    L2RegularizedL1LossSVCDual = 3,

    /// support vector classification by Crammer and Singer
    CrammerSingerSVC = 4,

    /// L1-regularized L2-loss support vector classification
    L1RegularizedL2LossSVC = 5,

    /// L1-regularized logistic regression
    L1RegularizedLogistic = 6,

    /// L2-regularized logistic regression (dual).
    L2RegularizedLogisticDual = 7,
}

impl FromStr for SolverType {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "0" => Ok(Self::L2RegularizedLogistic),
            "1" => Ok(Self::L2RegularizedL2LossSVCDual),
            "2" => Ok(Self::L2RegularizedL2LossSVC),
            "3" => Ok(Self::L2RegularizedL1LossSVCDual),
            "4" => Ok(Self::CrammerSingerSVC),
            "5" => Ok(Self::L1RegularizedL2LossSVC),
            "6" => Ok(Self::L1RegularizedLogistic),
            "7" => Ok(Self::L2RegularizedLogisticDual),
            _ => Err("Unsupported solver type."),
        }
    }
}

impl From<SolverType> for liblinear::SolverType {
    fn from(solver: SolverType) -> Self {
        match solver {
            SolverType::L2RegularizedLogistic => Self::L2R_LR,
            SolverType::L2RegularizedL2LossSVCDual => Self::L2R_L2LOSS_SVC_DUAL,
            SolverType::L2RegularizedL2LossSVC => Self::L2R_L2LOSS_SVC,
            SolverType::L2RegularizedL1LossSVCDual => Self::L2R_L1LOSS_SVC_DUAL,
            SolverType::CrammerSingerSVC => Self::MCSVM_CS,
            SolverType::L1RegularizedL2LossSVC => Self::L1R_L2LOSS_SVC,
            SolverType::L1RegularizedLogistic => Self::L1R_LR,
            SolverType::L2RegularizedLogisticDual => Self::L2R_LR_DUAL,
        }
    }
}

/// Trainer.
///
/// Fits the vectorizer over the dataset, trains a linear model, and bundles
/// everything prediction needs into a [`Model`].
///
/// # Examples
///
/// ```no_run
/// use std::fs::File;
/// use std::io::BufWriter;
///
/// use postino::{Dataset, SolverType, Trainer, VectorizerConfig};
///
/// let dataset = Dataset::from_path("spam.csv").unwrap();
/// let trainer = Trainer::new(VectorizerConfig::default()).unwrap();
/// let model = trainer.train(&dataset, 0.01, 1.0, SolverType::L2RegularizedL2LossSVCDual).unwrap();
///
/// let mut f = BufWriter::new(File::create("model.bin").unwrap());
/// model.write(&mut f).unwrap();
/// ```
#[cfg_attr(docsrs, doc(cfg(feature = "train")))]
pub struct Trainer {
    config: VectorizerConfig,
    normalizer: TextNormalizer,
}

impl Trainer {
    /// Creates a new trainer.
    ///
    /// # Errors
    ///
    /// [`PostinoError::InvalidArgument`] will be returned if the
    /// configuration is inconsistent.
    pub fn new(config: VectorizerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            normalizer: TextNormalizer::new(),
        })
    }

    /// Trains a model on a labeled dataset.
    ///
    /// # Arguments
    ///
    /// * `dataset` - Labeled messages.
    /// * `epsilon` - The tolerance of the termination criterion.
    /// * `cost` - The parameter C.
    /// * `solver` - Solver type.
    ///
    /// # Returns
    ///
    /// A trained model.
    ///
    /// # Errors
    ///
    /// [`PostinoError::InvalidArgument`] will be returned for an empty
    /// dataset or one with fewer than two distinct labels;
    /// [`PostinoError::Vectorization`] if the document-frequency bounds
    /// cannot be satisfied; [`PostinoError::InvalidModel`] if solving
    /// fails.
    pub fn train(
        &self,
        dataset: &Dataset,
        epsilon: f64,
        cost: f64,
        solver: SolverType,
    ) -> Result<Model> {
        if dataset.is_empty() {
            return Err(PostinoError::invalid_argument("dataset", "is empty"));
        }
        let mut label_ids = LabelIndexer::new();
        let ys: Vec<f64> = dataset
            .labels()
            .iter()
            .map(|label| label_ids.get_id(label) as f64)
            .collect();
        if label_ids.len() < 2 {
            return Err(PostinoError::invalid_argument(
                "dataset",
                "needs at least two distinct labels",
            ));
        }

        let documents = self.normalizer.normalize_all(dataset.messages());
        let mut vectorizer = CountVectorizer::new(self.config.clone())?;
        let counts = vectorizer.fit_transform(&documents)?;
        let tfidf = TfidfTransform::fit(&counts)?;
        let weighted = tfidf.transform(&counts)?;

        // liblinear features are 1-based.
        let xs: Vec<Vec<(u32, f64)>> = (0..weighted.n_rows())
            .map(|i| {
                weighted
                    .row(i)
                    .iter()
                    .enumerate()
                    .filter(|(_, &value)| value != 0.0)
                    .map(|(j, &value)| (j as u32 + 1, value))
                    .collect()
            })
            .collect();

        let mut builder = liblinear::Builder::new();
        let training_input = liblinear::util::TrainingInput::from_sparse_features(ys, xs)
            .map_err(|e| PostinoError::invalid_model(format!("liblinear error: {:?}", e)))?;
        builder.problem().input_data(training_input).bias(1.0);
        builder
            .parameters()
            .solver_type(solver.into())
            .stopping_criterion(epsilon)
            .constraints_violation_cost(cost);
        let linear_model = builder
            .build_model()
            .map_err(|e| PostinoError::invalid_model(e.to_string()))?;

        let n_features = vectorizer.vocabulary().len();
        let n_classes = label_ids.len();
        let class_order: Vec<i32> = linear_model.labels().to_vec();

        let mut weights = vec![vec![0.0; n_features]; n_classes];
        let mut biases = vec![0.0; n_classes];
        if n_classes == 2 {
            // A two-class model stores a single decision vector oriented
            // toward the first stored class; the other class takes its
            // negation.
            let first = usize::try_from(class_order[0])?;
            let second = usize::try_from(class_order[1])?;
            for (fid, weight) in weights_of(&linear_model, n_features, 0).into_iter().enumerate() {
                weights[first][fid] = weight;
                weights[second][fid] = -weight;
            }
            biases[first] = linear_model.label_bias(0);
            biases[second] = -linear_model.label_bias(0);
        } else {
            for (idx, &class) in class_order.iter().enumerate() {
                let class = usize::try_from(class)?;
                weights[class] = weights_of(&linear_model, n_features, idx as i32);
                biases[class] = linear_model.label_bias(idx as i32);
            }
        }

        let classifier = LinearClassifier::new(label_ids.into_names(), weights, biases)?;
        Model::new(
            self.config.clone(),
            vectorizer.vocabulary().to_vec(),
            tfidf.idf().to_vec(),
            classifier,
        )
    }
}

fn weights_of(model: &impl LibLinearModel, n_features: usize, label_idx: i32) -> Vec<f64> {
    (0..n_features)
        .map(|fid| model.feature_coefficient(fid as i32 + 1, label_idx))
        .collect()
}
