use std::fs::File;
use std::io::{self, BufRead, Write};

use clap::Parser;
use porter2::stem;

#[derive(Parser, Debug)]
struct Args {
    /// Path to target CSV file, whose first column holds the words
    #[arg(long)]
    path: Option<String>,

    /// Words to stem. Read from stdin, one per line, if none are given
    word: Vec<String>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    if let Some(path) = &args.path {
        let file = File::open(path)?;
        let mut reader = simd_csv::Reader::from_reader(file);
        let mut writer = simd_csv::Writer::from_writer(io::stdout());

        let mut record = reader.byte_headers()?.clone();
        record.push_field(b"stem");

        writer.write_byte_record(&record)?;

        while reader.read_byte_record(&mut record)? {
            let stemmed = stem(std::str::from_utf8(&record[0])?);
            record.push_field(stemmed.as_bytes());

            writer.write_byte_record(&record)?;
        }

        writer.flush()?;
    } else if !args.word.is_empty() {
        for word in args.word {
            println!("{} => {}", &word, stem(&word));
        }
    } else {
        let stdout = io::stdout();
        let mut output = stdout.lock();

        for line in io::stdin().lock().lines() {
            writeln!(output, "{}", stem(line?.trim()))?;
        }

        output.flush()?;
    }

    Ok(())
}
