//! Word-frequency model shared by training, scoring and calibration

use super::table::FrequencyTable;
use super::token::normalize;
use super::types::{Document, Label, ModelStats};
use crate::error::Result;

pub const DEFAULT_ALPHA: f64 = 1.0;
pub const DEFAULT_THRESHOLD: f64 = 0.5;

/// Two-class word-frequency model with additive smoothing.
///
/// Mutated only by training and calibration; scoring and evaluation take it
/// by shared reference.
#[derive(Debug, Clone)]
pub struct BayesModel {
    alpha: f64,
    threshold: f64,
    ham: FrequencyTable,
    spam: FrequencyTable,
}

impl BayesModel {
    /// Create a model with explicit parameters.
    ///
    /// Out-of-range values are clamped, not rejected: alpha stays positive,
    /// threshold stays within [0, 1].
    pub fn new(alpha: f64, threshold: f64) -> Self {
        Self {
            alpha: clamp_alpha(alpha),
            threshold: clamp_threshold(threshold),
            ham: FrequencyTable::new(Label::Ham),
            spam: FrequencyTable::new(Label::Spam),
        }
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub(crate) fn set_params(&mut self, alpha: f64, threshold: f64) {
        self.alpha = clamp_alpha(alpha);
        self.threshold = clamp_threshold(threshold);
    }

    /// Record one normalized, non-blank token under the given label
    pub fn observe(&mut self, token: &str, label: Label) {
        self.table_mut(label).add(token);
    }

    /// Ingest a labeled document collection
    pub fn train<'a, I>(&mut self, documents: I, label: Label)
    where
        I: IntoIterator<Item = &'a Document>,
    {
        for document in documents {
            for word in document.words() {
                let token = normalize(word);
                if token.is_empty() {
                    continue;
                }
                self.observe(&token, label);
            }
        }
    }

    /// Frequency of `token` within the given class
    pub fn likelihood(&self, token: &str, label: Label) -> Result<f64> {
        self.table(label).frequency(token, self.alpha)
    }

    /// Share of the token's frequency mass in the spam class
    pub fn spam_ratio(&self, token: &str) -> Result<f64> {
        let spam = self.likelihood(token, Label::Spam)?;
        let ham = self.likelihood(token, Label::Ham)?;
        Ok(spam / (spam + ham))
    }

    /// Share of the token's frequency mass in the ham class; complements
    /// [`Self::spam_ratio`] to 1
    pub fn ham_ratio(&self, token: &str) -> Result<f64> {
        let spam = self.likelihood(token, Label::Spam)?;
        let ham = self.likelihood(token, Label::Ham)?;
        Ok(ham / (spam + ham))
    }

    pub fn stats(&self) -> ModelStats {
        ModelStats {
            ham_tokens: self.ham.distinct(),
            spam_tokens: self.spam.distinct(),
            ham_total: self.ham.total(),
            spam_total: self.spam.total(),
        }
    }

    fn table(&self, label: Label) -> &FrequencyTable {
        match label {
            Label::Ham => &self.ham,
            Label::Spam => &self.spam,
        }
    }

    fn table_mut(&mut self, label: Label) -> &mut FrequencyTable {
        match label {
            Label::Ham => &mut self.ham,
            Label::Spam => &mut self.spam,
        }
    }
}

impl Default for BayesModel {
    fn default() -> Self {
        Self::new(DEFAULT_ALPHA, DEFAULT_THRESHOLD)
    }
}

fn clamp_alpha(alpha: f64) -> f64 {
    if alpha <= 0.0 {
        f64::MIN_POSITIVE
    } else {
        alpha
    }
}

fn clamp_threshold(threshold: f64) -> f64 {
    threshold.clamp(0.0, 1.0)
}
