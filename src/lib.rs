pub mod account_link;
mod clock;
pub mod engine;
pub mod error;
pub mod identity;
pub mod ledger;
pub mod models;
pub mod profile;
pub mod progress;
pub mod rewards;
pub mod session;
pub mod storage;
pub mod validate;

use std::io::{Read, Write};

use engine::RewardsEngine;
use error::Result;

/// Process purchase entries from a CSV reader and write the awarded
/// transactions, newest first, to a CSV writer
pub fn process_purchases<R: Read, W: Write>(reader: R, writer: W) -> Result<()> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut engine = RewardsEngine::new();

    for result in csv_reader.deserialize() {
        match result {
            Ok(entry) => {
                // Invalid entries are recovered locally: warn and move on
                if let Err(err) = engine.submit_purchase(entry) {
                    eprintln!("Warning: skipping purchase: {}", err);
                }
            }
            Err(_) => {
                // Silently skip malformed rows
            }
        }
    }

    // Write results
    write_ledger(engine, writer)?;

    Ok(())
}

/// Write the awarded transactions to CSV
fn write_ledger<W: Write>(engine: RewardsEngine, writer: W) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    for tx in engine.ledger().iter() {
        csv_writer.serialize(tx)?;
    }

    csv_writer.flush()?;
    Ok(())
}
