use std::fs::File;
use std::path::PathBuf;

use clap::Parser;
use postino::{Dataset, DatasetEncoding, Model, Predictor};

#[derive(Parser, Debug)]
#[command(about = "A program to evaluate the accuracy of Postino.")]
struct Args {
    /// The model file to use when classifying messages
    #[arg(long)]
    model: PathBuf,

    /// A labeled evaluation dataset (CSV: label, message)
    #[arg(long)]
    data: PathBuf,

    /// Decode the dataset as strict UTF-8 instead of Latin-1
    #[arg(long)]
    utf8: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    eprintln!("Loading model file...");
    let mut f = zstd::Decoder::new(File::open(args.model)?)?;
    let model = Model::read(&mut f)?;
    let predictor = Predictor::new(model)?;

    eprintln!("Loading dataset...");
    let encoding = if args.utf8 {
        DatasetEncoding::Utf8
    } else {
        DatasetEncoding::Latin1
    };
    let dataset = Dataset::from_path_with_encoding(&args.data, encoding)?;
    eprintln!("# of messages: {}", dataset.len());

    eprintln!("Start classification");
    let mut results = vec![];
    for (reference, message) in dataset.labels().iter().zip(dataset.messages()) {
        let predicted = predictor.predict(message)?;
        results.push((reference.clone(), predicted));
    }

    let n_correct = results.iter().filter(|(r, h)| r == h).count();
    println!("Accuracy: {}", n_correct as f64 / results.len() as f64);

    for label in predictor.labels() {
        let mut n_tp = 0;
        let mut n_fp = 0;
        let mut n_fn = 0;
        for (reference, predicted) in &results {
            if predicted == label {
                if reference == label {
                    n_tp += 1;
                } else {
                    n_fp += 1;
                }
            } else if reference == label {
                n_fn += 1;
            }
        }
        let precision = n_tp as f64 / (n_tp + n_fp) as f64;
        let recall = n_tp as f64 / (n_tp + n_fn) as f64;
        let f1 = 2. * precision * recall / (precision + recall);
        println!("{}: Precision: {}", label, precision);
        println!("{}: Recall: {}", label, recall);
        println!("{}: F1: {}", label, f1);
        println!("{}: TP: {}, FP: {}, FN: {}", label, n_tp, n_fp, n_fn);
    }

    Ok(())
}
