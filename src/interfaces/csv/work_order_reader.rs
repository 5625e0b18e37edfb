use crate::domain::work_order::WorkOrder;
use crate::error::{BillingError, Result};
use std::io::Read;

/// Reads work orders from a CSV source.
///
/// Hour values are validated during deserialization; a negative value yields
/// an error for that record rather than a silently clamped order.
pub struct WorkOrderReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> WorkOrderReader<R> {
    /// Creates a new `WorkOrderReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Returns an iterator that lazily reads and deserializes work orders.
    ///
    /// This allows for processing large files in a streaming fashion without
    /// loading the entire dataset into memory.
    pub fn orders(self) -> impl Iterator<Item = Result<WorkOrder>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(BillingError::from))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reader_valid_stream() {
        let data = "id, technician, hours, created_at\n1, 1, 5, 2024-01-10T09:00:00Z\n2, 2, 3, ";
        let reader = WorkOrderReader::new(data.as_bytes());
        let results: Vec<Result<WorkOrder>> = reader.orders().collect();

        assert_eq!(results.len(), 2);
        let first = results[0].as_ref().unwrap();
        assert_eq!(first.technician, Some(1));
        assert_eq!(first.hours.value(), 5);
    }

    #[test]
    fn test_reader_malformed_line() {
        let data = "id, technician, hours, created_at\n1, 1, lots, ";
        let reader = WorkOrderReader::new(data.as_bytes());
        let results: Vec<Result<WorkOrder>> = reader.orders().collect();

        assert!(results[0].is_err());
    }

    #[test]
    fn test_reader_rejects_negative_hours() {
        let data = "id, technician, hours, created_at\n1, 1, -4, ";
        let reader = WorkOrderReader::new(data.as_bytes());
        let results: Vec<Result<WorkOrder>> = reader.orders().collect();

        assert!(results[0].is_err());
    }
}
