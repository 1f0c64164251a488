use thiserror::Error;

use crate::classifier::Label;

#[derive(Error, Debug)]
pub enum BayesError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Archive error: {0}")]
    Archive(#[from] zip::result::ZipError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("No training data recorded for the {0} class")]
    EmptyTrainingSet(Label),

    #[error("Evaluation requires at least one labeled document")]
    EmptyTestSet,
}

pub type Result<T> = std::result::Result<T, BayesError>;
