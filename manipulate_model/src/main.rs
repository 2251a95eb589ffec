use std::fs;
use std::path::PathBuf;

use clap::Parser;
use postino::Model;

#[derive(Parser, Debug)]
#[command(about = "A program to inspect trained models.")]
struct Args {
    /// Input path of the model file
    #[arg(long)]
    model_in: PathBuf,

    /// Output path of the model file
    #[arg(long)]
    model_out: Option<PathBuf>,

    /// Output the vocabulary and inverse document frequencies as CSV.
    #[arg(long)]
    dump_vocab: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    eprintln!("Loading model file...");
    let mut f = zstd::Decoder::new(fs::File::open(args.model_in)?)?;
    let model = Model::read(&mut f)?;

    eprintln!("Labels: {}", model.labels().join(", "));
    eprintln!("Vocabulary size: {}", model.vocabulary().len());

    if let Some(path) = args.dump_vocab {
        eprintln!("Saving vocabulary file...");
        let file = fs::File::create(path)?;
        let mut wtr = csv::Writer::from_writer(file);
        wtr.write_record(["term", "idf"])?;
        for (term, idf) in model.vocabulary().iter().zip(model.idf()) {
            let idf = idf.to_string();
            wtr.write_record([term.as_str(), idf.as_str()])?;
        }
        wtr.flush()?;
    }

    if let Some(path) = args.model_out {
        eprintln!("Saving model file...");
        let mut f = zstd::Encoder::new(fs::File::create(path)?, 19)?;
        model.write(&mut f)?;
        f.finish()?;
    }

    Ok(())
}
