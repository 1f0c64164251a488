//! CLI entry point for the bayes spam filter
//!
//! # Usage
//!
//! ```bash
//! # Train, evaluate, calibrate, then evaluate again
//! bayes run --config config.toml
//!
//! # Train, then classify a single mail file
//! bayes classify suspicious-mail.txt
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use bayes_rs::classifier::{calibrate, evaluate, BayesModel, Document, Scorer, Trainer};
use bayes_rs::config::Config;
use bayes_rs::corpus::{DocumentSource, MailFileSource, ZipMailSource};

#[derive(Parser)]
#[command(name = "bayes")]
#[command(about = "Naive Bayes mail spam filter", long_about = None)]
struct Cli {
    /// Configuration file
    #[arg(short, long, default_value = "config.toml")]
    config: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Train on the training corpora, evaluate, calibrate, evaluate again
    Run,
    /// Train, then classify a single plain-text mail file
    Classify {
        /// Path to the mail file
        file: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = if std::path::Path::new(&cli.config).exists() {
        Config::from_file(&cli.config)?
    } else {
        Config::default()
    };

    init_logging(&config);

    match cli.command {
        Commands::Run => run(&config),
        Commands::Classify { file } => classify(&config, &file),
    }
}

fn init_logging(config: &Config) {
    let level: Level = config.logging.level.parse().unwrap_or(Level::INFO);

    if config.logging.format == "pretty" {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(level)
            .pretty()
            .finish();
        tracing::subscriber::set_global_default(subscriber)
            .expect("Failed to set tracing subscriber");
    } else {
        let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
        tracing::subscriber::set_global_default(subscriber)
            .expect("Failed to set tracing subscriber");
    }
}

fn run(config: &Config) -> Result<()> {
    info!("Starting bayes spam filter");

    let mut model = train_model(config)?;

    let stats = model.stats();
    info!("Training complete");
    info!("  Ham tokens: {} distinct, {} total", stats.ham_tokens, stats.ham_total);
    info!("  Spam tokens: {} distinct, {} total", stats.spam_tokens, stats.spam_total);

    let test_ham = read_corpus(&config.corpus.test_ham)?;
    let test_spam = read_corpus(&config.corpus.test_spam)?;

    let accuracy = evaluate(&model, &test_ham, &test_spam)?;
    info!("Threshold: {}", model.threshold());
    info!("Alpha: {}", model.alpha());
    info!("Accuracy: {:.4}", accuracy);

    let cal_ham = read_corpus(&config.corpus.calibration_ham)?;
    let cal_spam = read_corpus(&config.corpus.calibration_spam)?;
    let calibration = calibrate(&mut model, &cal_ham, &cal_spam)?;
    info!(
        "Calibration settled on alpha {} / threshold {} at {:.4} accuracy",
        calibration.alpha, calibration.threshold, calibration.accuracy
    );

    let accuracy = evaluate(&model, &test_ham, &test_spam)?;
    info!("--- after calibration ---");
    info!("Threshold: {}", model.threshold());
    info!("Alpha: {}", model.alpha());
    info!("Accuracy: {:.4}", accuracy);

    Ok(())
}

fn classify(config: &Config, file: &str) -> Result<()> {
    let model = train_model(config)?;
    let scorer = Scorer::new(&model);

    let documents = MailFileSource::new(file)
        .documents()
        .with_context(|| format!("reading mail file {}", file))?;

    for document in &documents {
        let score = scorer.score(document)?;
        let label = scorer.classify(document)?;
        println!("{}: {} (score {:.4})", file, label, score);
    }

    Ok(())
}

fn train_model(config: &Config) -> Result<BayesModel> {
    let train_ham = read_corpus(&config.corpus.train_ham)?;
    let train_spam = read_corpus(&config.corpus.train_spam)?;

    let mut model = BayesModel::new(config.model.alpha, config.model.threshold);
    Trainer::new(&mut model).train(&train_ham, &train_spam);
    Ok(model)
}

fn read_corpus(path: &str) -> Result<Vec<Document>> {
    ZipMailSource::new(path)
        .documents()
        .with_context(|| format!("reading corpus archive {}", path))
}
