//! Glue between document sources and model ingestion

use super::model::BayesModel;
use super::types::{Document, Label};

/// Feeds labeled document collections into a model.
///
/// Performs no I/O itself; documents come already tokenized from a
/// [`crate::corpus::DocumentSource`].
pub struct Trainer<'a> {
    model: &'a mut BayesModel,
}

impl<'a> Trainer<'a> {
    pub fn new(model: &'a mut BayesModel) -> Self {
        Self { model }
    }

    /// Ingest both labeled collections
    pub fn train(&mut self, ham: &[Document], spam: &[Document]) {
        self.model.train(ham, Label::Ham);
        self.model.train(spam, Label::Spam);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_train_routes_documents_to_both_tables() {
        let mut model = BayesModel::default();
        Trainer::new(&mut model).train(
            &[Document::from_text("ham hello ham")],
            &[Document::from_text("spam viagra")],
        );

        let stats = model.stats();
        assert_eq!(stats.ham_total, 3);
        assert_eq!(stats.spam_total, 2);
        assert_eq!(stats.ham_tokens, 2);
        assert_eq!(stats.spam_tokens, 2);
    }
}
