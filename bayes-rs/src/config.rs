use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub model: ModelConfig,
    pub corpus: CorpusConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ModelConfig {
    pub alpha: f64,
    pub threshold: f64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CorpusConfig {
    pub train_ham: String,
    pub train_spam: String,
    pub calibration_ham: String,
    pub calibration_spam: String,
    pub test_ham: String,
    pub test_spam: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

impl Config {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| crate::error::BayesError::Config(e.to_string()))?;

        toml::from_str(&content).map_err(|e| crate::error::BayesError::Config(e.to_string()))
    }

    pub fn default() -> Self {
        Self {
            model: ModelConfig {
                alpha: 1.0,
                threshold: 0.5,
            },
            corpus: CorpusConfig {
                train_ham: "data/ham-train.zip".to_string(),
                train_spam: "data/spam-train.zip".to_string(),
                calibration_ham: "data/ham-calibration.zip".to_string(),
                calibration_spam: "data/spam-calibration.zip".to_string(),
                test_ham: "data/ham-test.zip".to_string(),
                test_spam: "data/spam-test.zip".to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                format: "pretty".to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_file_parses_toml() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
[model]
alpha = 0.01
threshold = 0.6

[corpus]
train_ham = "corpora/ham.zip"
train_spam = "corpora/spam.zip"
calibration_ham = "corpora/ham-cal.zip"
calibration_spam = "corpora/spam-cal.zip"
test_ham = "corpora/ham-test.zip"
test_spam = "corpora/spam-test.zip"

[logging]
level = "debug"
format = "compact"
"#,
        )
        .unwrap();

        let config = Config::from_file(&path).unwrap();
        assert_eq!(config.model.alpha, 0.01);
        assert_eq!(config.model.threshold, 0.6);
        assert_eq!(config.corpus.train_ham, "corpora/ham.zip");
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_invalid_toml_is_a_config_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "not valid toml [").unwrap();

        assert!(matches!(
            Config::from_file(&path),
            Err(crate::error::BayesError::Config(_))
        ));
    }
}
