//! Definition of errors.

use std::error::Error;
use std::fmt;

pub type Result<T, E = PostinoError> = std::result::Result<T, E>;

#[derive(Debug)]
pub enum PostinoError {
    DataLoad(DataLoadError),
    Tokenization(TokenizationError),
    Vectorization(VectorizationError),
    Prediction(PredictionError),
    InvalidModel(InvalidModelError),
    InvalidArgument(InvalidArgumentError),
    CastError(std::num::TryFromIntError),
    IOError(std::io::Error),
    SerializeError(bincode::Error),
}

impl PostinoError {
    pub(crate) fn data_load<S>(msg: S) -> Self
    where
        S: Into<String>,
    {
        Self::DataLoad(DataLoadError { msg: msg.into() })
    }

    pub(crate) fn tokenization<S>(msg: S) -> Self
    where
        S: Into<String>,
    {
        Self::Tokenization(TokenizationError { msg: msg.into() })
    }

    pub(crate) fn vectorization<S>(msg: S) -> Self
    where
        S: Into<String>,
    {
        Self::Vectorization(VectorizationError { msg: msg.into() })
    }

    pub(crate) fn prediction<S>(msg: S) -> Self
    where
        S: Into<String>,
    {
        Self::Prediction(PredictionError { msg: msg.into() })
    }

    pub(crate) fn invalid_model<S>(msg: S) -> Self
    where
        S: Into<String>,
    {
        Self::InvalidModel(InvalidModelError { msg: msg.into() })
    }

    pub(crate) fn invalid_argument<S>(arg: &'static str, msg: S) -> Self
    where
        S: Into<String>,
    {
        Self::InvalidArgument(InvalidArgumentError {
            arg,
            msg: msg.into(),
        })
    }
}

impl fmt::Display for PostinoError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::DataLoad(e) => e.fmt(f),
            Self::Tokenization(e) => e.fmt(f),
            Self::Vectorization(e) => e.fmt(f),
            Self::Prediction(e) => e.fmt(f),
            Self::InvalidModel(e) => e.fmt(f),
            Self::InvalidArgument(e) => e.fmt(f),
            Self::CastError(e) => e.fmt(f),
            Self::IOError(e) => e.fmt(f),
            Self::SerializeError(e) => e.fmt(f),
        }
    }
}

impl Error for PostinoError {}

/// Error used when the dataset file is missing, unreadable, or malformed.
#[derive(Debug)]
pub struct DataLoadError {
    /// Error message.
    pub(crate) msg: String,
}

impl fmt::Display for DataLoadError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "DataLoadError: {}", self.msg)
    }
}

impl Error for DataLoadError {}

/// Error used when text cannot be decoded under the configured encoding.
#[derive(Debug)]
pub struct TokenizationError {
    /// Error message.
    pub(crate) msg: String,
}

impl fmt::Display for TokenizationError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "TokenizationError: {}", self.msg)
    }
}

impl Error for TokenizationError {}

/// Error used when vocabulary constraints cannot be satisfied.
#[derive(Debug)]
pub struct VectorizationError {
    /// Error message.
    pub(crate) msg: String,
}

impl fmt::Display for VectorizationError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "VectorizationError: {}", self.msg)
    }
}

impl Error for VectorizationError {}

/// Error used when the classifier rejects a feature vector.
#[derive(Debug)]
pub struct PredictionError {
    /// Error message.
    pub(crate) msg: String,
}

impl fmt::Display for PredictionError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "PredictionError: {}", self.msg)
    }
}

impl Error for PredictionError {}

/// Error used when the model is invalid.
#[derive(Debug)]
pub struct InvalidModelError {
    /// Error message.
    pub(crate) msg: String,
}

impl fmt::Display for InvalidModelError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "InvalidModelError: {}", self.msg)
    }
}

impl Error for InvalidModelError {}

/// Error used when the argument is invalid.
#[derive(Debug)]
pub struct InvalidArgumentError {
    /// Name of the argument.
    pub(crate) arg: &'static str,

    /// Error message.
    pub(crate) msg: String,
}

impl fmt::Display for InvalidArgumentError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "InvalidArgumentError: {}: {}", self.arg, self.msg)
    }
}

impl Error for InvalidArgumentError {}

impl From<std::num::TryFromIntError> for PostinoError {
    fn from(error: std::num::TryFromIntError) -> Self {
        Self::CastError(error)
    }
}

impl From<std::io::Error> for PostinoError {
    fn from(error: std::io::Error) -> Self {
        Self::IOError(error)
    }
}

impl From<bincode::Error> for PostinoError {
    fn from(error: bincode::Error) -> Self {
        Self::SerializeError(error)
    }
}

impl From<csv::Error> for PostinoError {
    fn from(error: csv::Error) -> Self {
        Self::data_load(error.to_string())
    }
}
