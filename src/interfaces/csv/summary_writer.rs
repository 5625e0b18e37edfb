use crate::domain::technician::TechnicianSummary;
use crate::error::Result;
use std::io::Write;

/// Writes the technician listing as CSV.
///
/// Payments are rounded to 2 fractional digits here; the underlying summaries
/// keep full precision.
pub struct SummaryWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> SummaryWriter<W> {
    /// Creates a new `SummaryWriter` over any `Write` sink (e.g., Stdout).
    pub fn new(sink: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(sink),
        }
    }

    /// Writes the header and one row per summary, then flushes.
    pub fn write_summaries(&mut self, summaries: &[TechnicianSummary]) -> Result<()> {
        self.writer
            .write_record(["id", "full_name", "total_hours", "total_orders", "payment"])?;
        for summary in summaries {
            self.writer.write_record([
                summary.id.to_string(),
                summary.full_name.clone(),
                summary.total_hours.to_string(),
                summary.total_orders.to_string(),
                summary.payment.rounded().to_string(),
            ])?;
        }
        self.writer.flush()?;
        Ok(())
    }
}
