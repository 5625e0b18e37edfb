use crate::domain::payment::Payment;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize, Serializer};

pub type TechnicianId = u32;

/// A field technician on the roster.
///
/// Work orders reference technicians by id; compensation is derived from the
/// hours accumulated across those orders, never stored on the technician itself.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct Technician {
    /// The unique identifier for the technician.
    pub id: TechnicianId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    /// When the technician joined the roster.
    pub date_joined: DateTime<Utc>,
    /// Inactive technicians keep their history but are excluded from listings
    /// and reports.
    pub is_active: bool,
}

impl Technician {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// A technician's workload reduced to the numbers the billing engine needs.
///
/// Always derived live from the current work-order data; never persisted.
/// Serialized field names are the published wire contract.
#[derive(Debug, Serialize, PartialEq, Clone)]
pub struct TechnicianSummary {
    pub id: TechnicianId,
    pub full_name: String,
    #[serde(rename = "total_hours_worked")]
    pub total_hours: u32,
    #[serde(rename = "total_pedidos")]
    pub total_orders: u64,
    #[serde(rename = "total_payment", serialize_with = "serialize_rounded")]
    pub payment: Payment,
    #[serde(skip)]
    pub date_joined: DateTime<Utc>,
}

fn serialize_rounded<S>(payment: &Payment, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    Serialize::serialize(&payment.rounded(), serializer)
}
