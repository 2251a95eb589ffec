//! Labeled dataset loading.

use std::fs;
use std::path::Path;

use crate::errors::{PostinoError, Result};

/// Text encoding of a dataset file.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DatasetEncoding {
    /// Single-byte Latin-1. Every byte maps to the Unicode scalar value of
    /// the same number, so decoding never fails.
    Latin1,

    /// Strict UTF-8. Invalid sequences are rejected.
    Utf8,
}

/// A labeled dataset of (label, message) pairs.
///
/// The source file is a delimited text file with a header row. The first
/// column is the label and the second column is the message text; any
/// further columns are ignored.
///
/// # Examples
///
/// ```no_run
/// use postino::Dataset;
///
/// let dataset = Dataset::from_path("spam.csv").unwrap();
/// for (label, message) in dataset.labels().iter().zip(dataset.messages()) {
///     println!("{}\t{}", label, message);
/// }
/// ```
pub struct Dataset {
    labels: Vec<String>,
    messages: Vec<String>,
}

impl Dataset {
    /// Reads a dataset file, decoding it as Latin-1.
    ///
    /// # Arguments
    ///
    /// * `path` - Path of the dataset file.
    ///
    /// # Errors
    ///
    /// [`PostinoError::DataLoad`] will be returned if the file is missing,
    /// unreadable, or a record lacks the label and message columns.
    pub fn from_path<P>(path: P) -> Result<Self>
    where
        P: AsRef<Path>,
    {
        Self::from_path_with_encoding(path, DatasetEncoding::Latin1)
    }

    /// Reads a dataset file with an explicit encoding.
    ///
    /// # Errors
    ///
    /// [`PostinoError::DataLoad`] will be returned if the file is missing,
    /// unreadable, or a record lacks the label and message columns.
    /// [`PostinoError::Tokenization`] will be returned if the bytes do not
    /// decode under `encoding`.
    pub fn from_path_with_encoding<P>(path: P, encoding: DatasetEncoding) -> Result<Self>
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        let bytes = fs::read(path)
            .map_err(|e| PostinoError::data_load(format!("{}: {}", path.display(), e)))?;
        Self::from_bytes(&bytes, encoding)
    }

    /// Parses dataset bytes with an explicit encoding.
    ///
    /// # Errors
    ///
    /// [`PostinoError::DataLoad`] will be returned if a record lacks the
    /// label and message columns. [`PostinoError::Tokenization`] will be
    /// returned if the bytes do not decode under `encoding`.
    pub fn from_bytes(bytes: &[u8], encoding: DatasetEncoding) -> Result<Self> {
        let text = match encoding {
            DatasetEncoding::Latin1 => bytes.iter().map(|&b| char::from(b)).collect(),
            DatasetEncoding::Utf8 => std::str::from_utf8(bytes)
                .map_err(|e| PostinoError::tokenization(format!("invalid UTF-8: {}", e)))?
                .to_string(),
        };
        Self::from_text(&text)
    }

    fn from_text(text: &str) -> Result<Self> {
        let mut rdr = csv::ReaderBuilder::new()
            .flexible(true)
            .from_reader(text.as_bytes());
        let mut labels = vec![];
        let mut messages = vec![];
        for (i, record) in rdr.records().enumerate() {
            let record = record?;
            let label = record
                .get(0)
                .ok_or_else(|| PostinoError::data_load(format!("record {}: no label column", i)))?;
            let message = record.get(1).ok_or_else(|| {
                PostinoError::data_load(format!("record {}: no message column", i))
            })?;
            labels.push(label.to_string());
            messages.push(message.to_string());
        }
        Ok(Self { labels, messages })
    }

    /// Gets the number of records.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Checks if the dataset has no records.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Gets the labels, in file order.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Gets the messages, in file order.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dataset_from_bytes() {
        let data = b"v1,v2\nham,Hello there\nspam,WIN cash now\n";
        let dataset = Dataset::from_bytes(data, DatasetEncoding::Latin1).unwrap();

        assert_eq!(2, dataset.len());
        assert_eq!(&["ham".to_string(), "spam".to_string()], dataset.labels());
        assert_eq!("WIN cash now", dataset.messages()[1]);
    }

    #[test]
    fn test_dataset_ignores_extra_columns() {
        let data = b"v1,v2,,\nham,Hi,,\nspam,Call now,x,\n";
        let dataset = Dataset::from_bytes(data, DatasetEncoding::Latin1).unwrap();

        assert_eq!(2, dataset.len());
        assert_eq!("Call now", dataset.messages()[1]);
    }

    #[test]
    fn test_dataset_latin1_high_bytes() {
        let data = b"v1,v2\nham,caf\xe9 tomorrow\n";
        let dataset = Dataset::from_bytes(data, DatasetEncoding::Latin1).unwrap();

        assert_eq!("café tomorrow", dataset.messages()[0]);
    }

    #[test]
    fn test_dataset_strict_utf8_rejects_invalid_bytes() {
        let data = b"v1,v2\nham,caf\xe9 tomorrow\n";
        let result = Dataset::from_bytes(data, DatasetEncoding::Utf8);

        assert!(matches!(
            result,
            Err(crate::errors::PostinoError::Tokenization(_))
        ));
    }

    #[test]
    fn test_dataset_missing_message_column() {
        let data = b"v1,v2\nham\n";
        let result = Dataset::from_bytes(data, DatasetEncoding::Latin1);

        assert!(matches!(
            result,
            Err(crate::errors::PostinoError::DataLoad(_))
        ));
    }

    #[test]
    fn test_dataset_missing_file() {
        let result = Dataset::from_path("no-such-dataset.csv");

        assert!(matches!(
            result,
            Err(crate::errors::PostinoError::DataLoad(_))
        ));
    }

    #[test]
    fn test_dataset_header_only() {
        let dataset = Dataset::from_bytes(b"v1,v2\n", DatasetEncoding::Latin1).unwrap();

        assert!(dataset.is_empty());
    }
}
