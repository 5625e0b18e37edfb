use crate::domain::technician::Technician;
use crate::error::{BillingError, Result};
use std::io::Read;

/// Reads roster entries from a CSV source.
///
/// This reader wraps `csv::Reader` and provides an iterator over
/// `Result<Technician>`. It handles whitespace trimming and flexible record
/// lengths automatically.
pub struct TechnicianReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> TechnicianReader<R> {
    /// Creates a new `TechnicianReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Returns an iterator that lazily reads and deserializes roster entries.
    pub fn technicians(self) -> impl Iterator<Item = Result<Technician>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(BillingError::from))
    }
}
