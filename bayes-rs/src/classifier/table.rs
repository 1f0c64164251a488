//! Per-class word occurrence accounting

use std::collections::HashMap;

use super::types::Label;
use crate::error::{BayesError, Result};

/// Occurrence counts for one document class.
///
/// `total` counts add operations, repeats included, so a token seen N times
/// raises both its own count and `total` by N.
#[derive(Debug, Clone)]
pub struct FrequencyTable {
    label: Label,
    counts: HashMap<String, u64>,
    total: u64,
}

impl FrequencyTable {
    pub fn new(label: Label) -> Self {
        Self {
            label,
            counts: HashMap::new(),
            total: 0,
        }
    }

    /// Record one occurrence of an already-normalized, non-blank token
    pub fn add(&mut self, token: &str) {
        *self.counts.entry(token.to_string()).or_insert(0) += 1;
        self.total += 1;
    }

    /// Relative frequency of `token` within this class.
    ///
    /// For unseen tokens `alpha` stands in for the numerator. It is never
    /// added to observed counts, a pseudo-count fallback rather than
    /// classical Laplace smoothing.
    pub fn frequency(&self, token: &str, alpha: f64) -> Result<f64> {
        if self.total == 0 {
            return Err(BayesError::EmptyTrainingSet(self.label));
        }
        match self.counts.get(token) {
            Some(&count) => Ok(count as f64 / self.total as f64),
            None => Ok(alpha / self.total as f64),
        }
    }

    /// Number of add operations performed, repeats included
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Number of distinct tokens recorded
    pub fn distinct(&self) -> usize {
        self.counts.len()
    }
}
