//! bayes-rs: Naive Bayes mail spam filter
//!
//! A word-frequency spam classifier for mail corpora.
//!
//! # Features
//!
//! - **Frequency model**: Per-class token counts with additive smoothing
//! - **Scoring**: Multiplicative posterior-ratio combination with a
//!   configurable decision threshold
//! - **Calibration**: Grid search over the smoothing/threshold space on a
//!   held-out corpus
//! - **Corpus access**: Zip archives of plain-text mails, one mail per entry
//!
//! # Example
//!
//! ```no_run
//! use bayes_rs::classifier::{BayesModel, Scorer, Trainer};
//! use bayes_rs::corpus::{DocumentSource, ZipMailSource};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let ham = ZipMailSource::new("data/ham-train.zip").documents()?;
//!     let spam = ZipMailSource::new("data/spam-train.zip").documents()?;
//!
//!     let mut model = BayesModel::new(1.0, 0.5);
//!     Trainer::new(&mut model).train(&ham, &spam);
//!
//!     let scorer = Scorer::new(&model);
//!     let label = scorer.classify(&ham[0])?;
//!     println!("classified as {}", label);
//!
//!     Ok(())
//! }
//! ```
//!
//! # Modules
//!
//! - [`classifier`]: Frequency tables, model, scoring, training, calibration
//! - [`corpus`]: Document sources turning mail archives into word sequences
//! - [`config`]: Configuration management
//! - [`error`]: Error types and handling

pub mod classifier;
pub mod config;
pub mod corpus;
pub mod error;

// Re-export commonly used types
pub use classifier::{BayesModel, Document, Label};
pub use config::Config;
pub use error::{BayesError, Result};
