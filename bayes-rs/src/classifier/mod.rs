//! Naive Bayes classification core
//!
//! Word-frequency accounting, posterior-ratio scoring, training and
//! calibration. No I/O and no logging happen here; corpora arrive as
//! already-tokenized documents from the [`crate::corpus`] layer.

pub mod evaluator;
pub mod model;
pub mod scorer;
pub mod table;
pub mod token;
pub mod trainer;
pub mod types;

pub use evaluator::{calibrate, evaluate, Calibration};
pub use model::BayesModel;
pub use scorer::Scorer;
pub use table::FrequencyTable;
pub use trainer::Trainer;
pub use types::*;
