//! Destinations for decoded `gps0` rows.

use std::io::Write;

use crate::Gps0Error;

/// Receives rows of text fields, one per GPS fix.
pub trait RowSink {
    fn write_row(&mut self, row: &[String]) -> Result<(), Gps0Error>;

    /// Called after each `gps0` atom.
    fn flush(&mut self) -> Result<(), Gps0Error>;
}

/// Comma separated rows, no header.
impl<W: Write> RowSink for csv::Writer<W> {
    fn write_row(&mut self, row: &[String]) -> Result<(), Gps0Error> {
        Ok(self.write_record(row)?)
    }

    fn flush(&mut self) -> Result<(), Gps0Error> {
        Ok(csv::Writer::flush(self)?)
    }
}

/// Collects rows in memory.
impl RowSink for Vec<Vec<String>> {
    fn write_row(&mut self, row: &[String]) -> Result<(), Gps0Error> {
        self.push(row.to_vec());
        Ok(())
    }

    fn flush(&mut self) -> Result<(), Gps0Error> {
        Ok(())
    }
}
