use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use tilemc_meminit::{HexTable, DEFAULT_DIGITS};

/// Converts a grayscale image into a Verilog memory-init hex include file.
#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// Input image (single-channel TIFF or PNG)
    input: PathBuf,
    /// Hex digits per pixel
    #[arg(short, long, default_value_t = DEFAULT_DIGITS)]
    digits: usize,
    /// Output file [default: the input path with a `vh` extension]
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let args = Args::parse();
    let table = HexTable::new(&args.input).with_digits(args.digits);
    let output = args.output.unwrap_or_else(|| table.output_path());
    table.write_to(&output)?;

    println!("All done!");
    Ok(())
}
