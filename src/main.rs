use std::env;
use std::fs::File;
use std::io;

use anyhow::{Context, Result};
use rewards_engine::process_purchases;

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    anyhow::ensure!(
        args.len() == 2,
        "Usage: {} <purchases.csv>",
        args.first().unwrap_or(&"rewards-engine".to_string())
    );

    let filename = &args[1];

    let file = File::open(filename)
        .with_context(|| format!("Failed to open input file '{}'", filename))?;

    process_purchases(file, io::stdout())
        .context("Failed to process purchases and write output")?;

    Ok(())
}
