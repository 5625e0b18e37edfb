use crate::domain::technician::TechnicianId;
use crate::error::BillingError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Hours worked on a single order.
///
/// Ensures hour values are non-negative before they can reach the payment
/// calculator. Deserialization goes through [`TryFrom<i64>`] so a negative
/// value in the input is rejected at the boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(try_from = "i64")]
pub struct HoursWorked(u32);

impl HoursWorked {
    pub fn new(value: i64) -> Result<Self, BillingError> {
        u32::try_from(value).map(Self).map_err(|_| {
            BillingError::ValidationError(format!("hours worked must be non-negative, got {value}"))
        })
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}

impl TryFrom<i64> for HoursWorked {
    type Error = BillingError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct WorkOrder {
    pub id: u32,
    /// The assigned technician, if any. Unassigned orders are accepted but do
    /// not feed anyone's compensation.
    pub technician: Option<TechnicianId>,
    pub hours: HoursWorked,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}
