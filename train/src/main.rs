use std::fs::File;
use std::path::PathBuf;

use clap::Parser;
use postino::{Dataset, DatasetEncoding, SolverType, Trainer, VectorizerConfig};

#[derive(Parser, Debug)]
#[command(about = "A program to train spam filter models of Postino.")]
struct Args {
    /// A labeled training dataset (CSV: label, message)
    #[arg(long)]
    data: PathBuf,

    /// The file to write the trained model to
    #[arg(long)]
    model: PathBuf,

    /// Decode the dataset as strict UTF-8 instead of Latin-1
    #[arg(long)]
    utf8: bool,

    /// The maximum vocabulary size
    #[arg(long, default_value = "10000")]
    max_features: usize,

    /// The minimum number of documents a term must appear in
    #[arg(long, default_value = "1")]
    min_df: usize,

    /// The maximum fraction of documents a term may appear in
    #[arg(long, default_value = "0.6")]
    max_df: f64,

    /// The shortest n-gram length
    #[arg(long, default_value = "1")]
    ngram_min: usize,

    /// The longest n-gram length
    #[arg(long, default_value = "2")]
    ngram_max: usize,

    /// Keep English stop words in the vocabulary
    #[arg(long)]
    keep_stop_words: bool,

    /// The epsilon stopping criterion for classifier training
    #[arg(long, default_value = "0.01")]
    eps: f64,

    /// The cost hyperparameter for classifier training
    #[arg(long, default_value = "1.0")]
    cost: f64,

    /// The solver. {0, 1, 2, 3, 4, 5, 6, 7} (see LIBLINEAR documentation for more details)
    #[arg(long, default_value = "1")]
    solver: SolverType,

    /// The number of workers for zstd (0 means multithreaded will be disabled)
    #[arg(long, default_value = "0")]
    zstd_workers: u32,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    eprintln!("Loading dataset...");
    let encoding = if args.utf8 {
        DatasetEncoding::Utf8
    } else {
        DatasetEncoding::Latin1
    };
    let dataset = Dataset::from_path_with_encoding(&args.data, encoding)?;
    eprintln!("# of messages: {}", dataset.len());

    let config = VectorizerConfig {
        max_features: args.max_features,
        min_df: args.min_df,
        max_df: args.max_df,
        ngram_min: args.ngram_min,
        ngram_max: args.ngram_max,
        filter_stop_words: !args.keep_stop_words,
    };
    let trainer = Trainer::new(config)?;

    eprintln!("Start training...");
    let model = trainer.train(&dataset, args.eps, args.cost, args.solver)?;
    eprintln!("Finish training.");
    eprintln!("Vocabulary size: {}", model.vocabulary().len());
    eprintln!("Labels: {}", model.labels().join(", "));

    let mut f = zstd::Encoder::new(File::create(args.model)?, 19)?;
    f.multithread(args.zstd_workers)?;
    model.write(&mut f)?;
    f.finish()?;

    Ok(())
}
