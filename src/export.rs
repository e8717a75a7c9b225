//! CSV export and re-import of projection rows
//!
//! One row per year, header row from the field names, numerics at full
//! precision. Rounding for display is the shell's job.

use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use crate::engine::ProjectionRow;

/// Write rows as CSV to any writer
pub fn write_rows<W: Write>(writer: W, rows: &[ProjectionRow]) -> Result<(), csv::Error> {
    let mut wtr = csv::Writer::from_writer(writer);
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Write rows as CSV to a file
pub fn write_rows_to_path(path: &Path, rows: &[ProjectionRow]) -> Result<(), csv::Error> {
    let file = File::create(path)?;
    write_rows(file, rows)
}

/// Read rows back from CSV
pub fn read_rows<R: Read>(reader: R) -> Result<Vec<ProjectionRow>, csv::Error> {
    let mut rdr = csv::Reader::from_reader(reader);
    rdr.deserialize().collect()
}
