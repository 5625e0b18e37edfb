use crate::domain::technician::TechnicianSummary;
use crate::error::{BillingError, Result};
use rust_decimal::Decimal;
use serde::{Serialize, Serializer};

/// System-wide billing statistics over one snapshot of technician summaries.
///
/// A short-lived value object: built per request and discarded with it.
/// Serialized field names are the published wire contract.
#[derive(Debug, Serialize, PartialEq, Clone)]
pub struct Report {
    #[serde(rename = "monto_promedio", serialize_with = "serialize_rounded")]
    pub average_payment: Decimal,
    #[serde(rename = "tecnicos_bajo_promedio")]
    pub below_average: Vec<TechnicianSummary>,
    #[serde(rename = "ultimo_trabajador_monto_bajo")]
    pub lowest_paid: TechnicianSummary,
    #[serde(rename = "ultimo_trabajador_monto_alto")]
    pub highest_paid: TechnicianSummary,
    #[serde(rename = "total_tecnicos")]
    pub technician_count: usize,
    #[serde(rename = "total_horas_sistema")]
    pub total_hours: u64,
    #[serde(rename = "total_pedidos_sistema")]
    pub total_orders: u64,
}

fn serialize_rounded<S>(amount: &Decimal, serializer: S) -> std::result::Result<S::Ok, S::Error>
where
    S: Serializer,
{
    Serialize::serialize(&amount.round_dp(2), serializer)
}

/// Aggregates a snapshot of technician summaries into a [`Report`].
///
/// The average is taken over technicians with strictly positive payment and is
/// zero when there are none; the below-average cohort is strictly below that
/// average. Extremal selection runs over the full input, with payment ties
/// broken toward the most recent join date for both the minimum and the
/// maximum. Totals always cover the full input.
pub fn build_report(summaries: &[TechnicianSummary]) -> Result<Report> {
    let lowest_paid = summaries.iter().min_by(|a, b| {
        a.payment
            .value()
            .cmp(&b.payment.value())
            .then_with(|| b.date_joined.cmp(&a.date_joined))
    });
    let highest_paid = summaries.iter().max_by(|a, b| {
        a.payment
            .value()
            .cmp(&b.payment.value())
            .then_with(|| a.date_joined.cmp(&b.date_joined))
    });
    let (Some(lowest_paid), Some(highest_paid)) = (lowest_paid, highest_paid) else {
        return Err(BillingError::EmptyDatasetError);
    };

    let positive_payments: Vec<Decimal> = summaries
        .iter()
        .map(|summary| summary.payment.value())
        .filter(|payment| *payment > Decimal::ZERO)
        .collect();
    let average_payment = if positive_payments.is_empty() {
        Decimal::ZERO
    } else {
        positive_payments.iter().sum::<Decimal>() / Decimal::from(positive_payments.len())
    };

    let below_average = summaries
        .iter()
        .filter(|summary| summary.payment.value() < average_payment)
        .cloned()
        .collect();

    Ok(Report {
        average_payment,
        below_average,
        lowest_paid: lowest_paid.clone(),
        highest_paid: highest_paid.clone(),
        technician_count: summaries.len(),
        total_hours: summaries
            .iter()
            .map(|summary| u64::from(summary.total_hours))
            .sum(),
        total_orders: summaries.iter().map(|summary| summary.total_orders).sum(),
    })
}
