use std::fs::File;
use std::io::{prelude::*, stdin};
use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;
use postino::{Model, Predictor};

#[derive(Parser, Debug)]
#[command(about = "A program to classify messages as spam or ham.")]
struct Args {
    /// The model file to use when classifying messages
    #[arg(long)]
    model: PathBuf,

    /// Print only the label, without echoing the message
    #[arg(long)]
    label_only: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    eprintln!("Loading model file...");
    let mut f = zstd::Decoder::new(File::open(args.model)?)?;
    let model = Model::read(&mut f)?;
    let predictor = Predictor::new(model)?;

    eprintln!("Start classification");
    let mut n_messages = 0;
    let start = Instant::now();
    for line in stdin().lock().lines() {
        let message = line?;
        let label = predictor.predict(&message)?;
        if args.label_only {
            println!("{}", label);
        } else {
            println!("{}\t{}", label, message);
        }
        n_messages += 1;
    }
    let duration = start.elapsed();
    eprintln!("Elapsed: {} [sec]", duration.as_secs_f64());
    eprintln!(
        "Speed: {} [messages/sec]",
        n_messages as f64 / duration.as_secs_f64()
    );

    Ok(())
}
