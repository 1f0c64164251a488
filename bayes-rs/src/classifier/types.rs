//! Classifier types and data structures

use std::fmt;

/// The two mutually exclusive document classes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Label {
    /// Legitimate mail
    Ham,
    /// Unsolicited mail
    Spam,
}

impl Label {
    pub fn is_spam(self) -> bool {
        matches!(self, Label::Spam)
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Label::Ham => write!(f, "ham"),
            Label::Spam => write!(f, "spam"),
        }
    }
}

/// One mail body as an ordered sequence of raw, not yet normalized words
#[derive(Debug, Clone, Default)]
pub struct Document {
    words: Vec<String>,
}

impl Document {
    pub fn new(words: Vec<String>) -> Self {
        Self { words }
    }

    /// Split one raw mail body on whitespace
    pub fn from_text(text: &str) -> Self {
        Self {
            words: text.split_whitespace().map(str::to_string).collect(),
        }
    }

    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Vocabulary snapshot of a trained model
#[derive(Debug, Clone, serde::Serialize)]
pub struct ModelStats {
    /// Distinct tokens seen in ham mails
    pub ham_tokens: usize,
    /// Distinct tokens seen in spam mails
    pub spam_tokens: usize,
    /// Total token occurrences recorded for ham
    pub ham_total: u64,
    /// Total token occurrences recorded for spam
    pub spam_total: u64,
}
