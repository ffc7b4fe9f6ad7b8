//! Planet data loading
//!
//! The data source is a CSV file with a header row naming at least
//! `name, mass, radius, positionX, positionY, positionZ, velocityX,
//! velocityY, velocityZ`. Positions are in meters, velocities in m/s.
//! Extra columns are ignored.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::body::BodyRecord;
use crate::error::SimResult;

/// Read planet records from any CSV source
pub fn read_csv<R: Read>(reader: R) -> SimResult<Vec<BodyRecord>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut records = Vec::new();
    for result in reader.deserialize() {
        let record: BodyRecord = result?;
        log::trace!("read planet record {:?}", record.name);
        records.push(record);
    }

    Ok(records)
}

/// Load planet records from a CSV file
pub fn load_csv(path: &Path) -> SimResult<Vec<BodyRecord>> {
    log::info!("Loading planet data from {:?}", path);

    let file = File::open(path)?;
    let records = read_csv(file)?;

    log::info!("Loaded {} planet records", records.len());
    Ok(records)
}
