//! Corpus assembly.

/// An ordered sequence of documents whose final entry is the query message.
///
/// Dataset messages keep their original order; exactly one query message is
/// appended last, so `len()` is always the dataset length plus one and
/// downstream stages can locate the prediction target by `query_index()`.
pub struct Corpus {
    documents: Vec<String>,
}

impl Corpus {
    /// Assembles a corpus from dataset messages and one query message.
    ///
    /// # Arguments
    ///
    /// * `messages` - Dataset messages, in order.
    /// * `query` - The message to classify, appended last.
    pub fn assemble<S>(messages: &[S], query: &str) -> Self
    where
        S: AsRef<str>,
    {
        let mut documents = Vec::with_capacity(messages.len() + 1);
        for message in messages {
            documents.push(message.as_ref().to_string());
        }
        documents.push(query.to_string());
        Self { documents }
    }

    /// Gets the number of documents, including the query.
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// Always false: the query is present even for an empty dataset.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Gets the index of the query message, always the final index.
    pub fn query_index(&self) -> usize {
        self.documents.len() - 1
    }

    /// Gets the documents, query last.
    pub fn documents(&self) -> &[String] {
        &self.documents
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corpus_appends_query_last() {
        let messages = vec!["first", "second"];
        let corpus = Corpus::assemble(&messages, "the query");

        assert_eq!(3, corpus.len());
        assert_eq!(2, corpus.query_index());
        assert_eq!("the query", corpus.documents()[corpus.query_index()]);
    }

    #[test]
    fn test_corpus_len_is_dataset_len_plus_one() {
        let messages: Vec<String> = (0..17).map(|i| format!("message {}", i)).collect();
        let corpus = Corpus::assemble(&messages, "query");

        assert_eq!(messages.len() + 1, corpus.len());
    }

    #[test]
    fn test_corpus_empty_dataset() {
        let messages: Vec<&str> = vec![];
        let corpus = Corpus::assemble(&messages, "query");

        assert_eq!(1, corpus.len());
        assert_eq!(0, corpus.query_index());
        assert!(!corpus.is_empty());
    }
}
