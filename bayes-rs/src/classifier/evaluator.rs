//! Accuracy measurement and parameter calibration

use super::model::BayesModel;
use super::scorer::Scorer;
use super::types::{Document, Label};
use crate::error::{BayesError, Result};

/// Smoothing constants tried by the calibration search
const ALPHA_GRID: [f64; 6] = [0.0001, 0.001, 0.01, 0.1, 0.5, 1.0];

/// Number of threshold steps tried per alpha, spaced 0.05 apart
const THRESHOLD_STEPS: u32 = 19;

/// Outcome of a calibration search
#[derive(Debug, Clone, Copy)]
pub struct Calibration {
    pub alpha: f64,
    pub threshold: f64,
    /// Accuracy reached on the calibration corpus
    pub accuracy: f64,
}

/// Share of correctly classified documents over both labeled test sets
pub fn evaluate(model: &BayesModel, ham: &[Document], spam: &[Document]) -> Result<f64> {
    let total = ham.len() + spam.len();
    if total == 0 {
        return Err(BayesError::EmptyTestSet);
    }

    let scorer = Scorer::new(model);
    let mut correct = 0usize;
    for document in ham {
        if scorer.classify(document)? == Label::Ham {
            correct += 1;
        }
    }
    for document in spam {
        if scorer.classify(document)? == Label::Spam {
            correct += 1;
        }
    }
    Ok(correct as f64 / total as f64)
}

/// Search the (alpha, threshold) grid for the pair with the best accuracy on
/// the calibration corpus and apply it to the model.
///
/// The current parameters seed the search, so calibration never leaves the
/// model less accurate on the calibration corpus than it started. Ties keep
/// the earlier candidate.
pub fn calibrate(
    model: &mut BayesModel,
    ham: &[Document],
    spam: &[Document],
) -> Result<Calibration> {
    let mut best = Calibration {
        alpha: model.alpha(),
        threshold: model.threshold(),
        accuracy: evaluate(model, ham, spam)?,
    };

    for &alpha in &ALPHA_GRID {
        for step in 1..=THRESHOLD_STEPS {
            let threshold = f64::from(step) * 0.05;
            model.set_params(alpha, threshold);
            let accuracy = evaluate(model, ham, spam)?;
            if accuracy > best.accuracy {
                best = Calibration {
                    alpha,
                    threshold,
                    accuracy,
                };
            }
        }
    }

    model.set_params(best.alpha, best.threshold);
    Ok(best)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::Trainer;

    fn trained_model() -> BayesModel {
        let mut model = BayesModel::default();
        Trainer::new(&mut model).train(
            &[Document::from_text("ham ham hello meeting tomorrow")],
            &[Document::from_text("spam spam viagra offer winner")],
        );
        model
    }

    #[test]
    fn test_evaluate_counts_correct_labels() {
        let model = trained_model();
        let test_ham = vec![
            Document::from_text("ham hello"),
            Document::from_text("ham tomorrow"),
        ];
        let test_spam = vec![
            Document::from_text("spam viagra"),
            // Misclassified on purpose: pure ham vocabulary under a spam label
            Document::from_text("ham hello"),
        ];

        let accuracy = evaluate(&model, &test_ham, &test_spam).unwrap();
        assert_eq!(accuracy, 3.0 / 4.0);
    }

    #[test]
    fn test_evaluate_fails_without_documents() {
        let model = trained_model();
        assert!(matches!(
            evaluate(&model, &[], &[]),
            Err(BayesError::EmptyTestSet)
        ));
    }

    #[test]
    fn test_calibrate_never_worsens_calibration_accuracy() {
        let mut model = trained_model();
        let cal_ham = vec![
            Document::from_text("hello meeting"),
            Document::from_text("ham ham tomorrow"),
        ];
        let cal_spam = vec![
            Document::from_text("viagra winner"),
            Document::from_text("spam offer"),
        ];

        let baseline = evaluate(&model, &cal_ham, &cal_spam).unwrap();
        let calibration = calibrate(&mut model, &cal_ham, &cal_spam).unwrap();

        assert!(calibration.accuracy >= baseline);
        assert_eq!(model.alpha(), calibration.alpha);
        assert_eq!(model.threshold(), calibration.threshold);
    }
}
