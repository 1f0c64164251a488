//! Document scoring and the spam decision

use super::model::BayesModel;
use super::token::normalize;
use super::types::{Document, Label};
use crate::error::Result;

/// Scores documents against a frozen model.
///
/// The shared borrow keeps training and calibration locked out for as long
/// as any scorer exists.
pub struct Scorer<'a> {
    model: &'a BayesModel,
}

impl<'a> Scorer<'a> {
    pub fn new(model: &'a BayesModel) -> Self {
        Self { model }
    }

    /// Combined spam ratio for a whole document.
    ///
    /// Multiplies the per-token posterior ratios directly. The product can
    /// underflow to zero on very long documents; that saturation is part of
    /// the observable contract, so no log-space rewrite. An empty document
    /// scores exactly 0.5.
    pub fn score(&self, document: &Document) -> Result<f64> {
        let mut numerator = 1.0;
        let mut denominator = 1.0;
        for word in document.words() {
            let token = normalize(word);
            if token.is_empty() {
                continue;
            }
            numerator *= self.model.spam_ratio(&token)?;
            denominator *= self.model.ham_ratio(&token)?;
        }
        denominator += numerator;
        Ok(numerator / denominator)
    }

    /// Label a document by comparing its score against the model threshold
    pub fn classify(&self, document: &Document) -> Result<Label> {
        if self.score(document)? >= self.model.threshold() {
            Ok(Label::Spam)
        } else {
            Ok(Label::Ham)
        }
    }
}
