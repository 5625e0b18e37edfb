use crate::domain::payment::calculate_payment;
use crate::domain::ports::{ReportObserver, TechnicianStoreBox, WorkOrderStoreBox};
use crate::domain::report::{self, Report};
use crate::domain::technician::{Technician, TechnicianSummary};
use crate::domain::work_order::{HoursWorked, WorkOrder};
use crate::error::{BillingError, Result};

/// The main entry point for technician billing.
///
/// `BillingEngine` ingests roster entries and work orders and derives
/// per-technician summaries and the aggregate report on demand. It owns the
/// storage backends and ensures sequential consistency by awaiting storage
/// operations for each call.
pub struct BillingEngine {
    technician_store: TechnicianStoreBox,
    work_order_store: WorkOrderStoreBox,
    report_observer: Option<ReportObserver>,
}

impl BillingEngine {
    /// Creates a new `BillingEngine` instance.
    ///
    /// # Arguments
    ///
    /// * `technician_store` - The store for the technician roster.
    /// * `work_order_store` - The store for work orders.
    pub fn new(technician_store: TechnicianStoreBox, work_order_store: WorkOrderStoreBox) -> Self {
        Self {
            technician_store,
            work_order_store,
            report_observer: None,
        }
    }

    /// Attaches a callback that receives every finished report.
    ///
    /// The observer runs after the aggregation has completed, never
    /// interleaved with it.
    pub fn with_report_observer(mut self, observer: ReportObserver) -> Self {
        self.report_observer = Some(observer);
        self
    }

    /// Adds or replaces a roster entry.
    pub async fn register_technician(&self, technician: Technician) -> Result<()> {
        self.technician_store.store(technician).await
    }

    /// Submits a work order for ingestion.
    ///
    /// Duplicate order ids are ignored so re-ingesting the same feed is
    /// idempotent. An order referencing a technician that is not on the
    /// roster is rejected.
    pub async fn submit_order(&self, order: WorkOrder) -> Result<()> {
        if self.work_order_store.exists(order.id).await? {
            return Ok(());
        }

        if let Some(technician_id) = order.technician
            && self.technician_store.get(technician_id).await?.is_none()
        {
            return Err(BillingError::ValidationError(format!(
                "work order {} references unknown technician {}",
                order.id, technician_id
            )));
        }

        self.work_order_store.store(order).await
    }

    /// Replaces the hours on an existing work order.
    pub async fn update_order_hours(&self, order_id: u32, hours: HoursWorked) -> Result<()> {
        let Some(mut order) = self.work_order_store.get(order_id).await? else {
            return Err(BillingError::ValidationError(format!(
                "work order {order_id} not found"
            )));
        };
        order.hours = hours;
        self.work_order_store.store(order).await
    }

    /// Derives the current summary for every active technician.
    ///
    /// Summaries are recomputed from the stored work orders on every call;
    /// nothing is cached. The listing is ordered by most recent join date,
    /// then by id.
    pub async fn technician_summaries(&self) -> Result<Vec<TechnicianSummary>> {
        let mut technicians = self.technician_store.get_all().await?;
        technicians.retain(|technician| technician.is_active);
        technicians.sort_by(|a, b| {
            b.date_joined
                .cmp(&a.date_joined)
                .then_with(|| a.id.cmp(&b.id))
        });

        let mut summaries = Vec::with_capacity(technicians.len());
        for technician in technicians {
            let orders = self.work_order_store.orders_for(technician.id).await?;
            let total_hours: u32 = orders.iter().map(|order| order.hours.value()).sum();
            summaries.push(TechnicianSummary {
                id: technician.id,
                full_name: technician.full_name(),
                total_hours,
                total_orders: orders.len() as u64,
                payment: calculate_payment(total_hours),
                date_joined: technician.date_joined,
            });
        }
        tracing::debug!(technicians = summaries.len(), "derived technician summaries");
        Ok(summaries)
    }

    /// Builds the aggregate report over the current snapshot.
    pub async fn build_report(&self) -> Result<Report> {
        let summaries = self.technician_summaries().await?;
        let report = report::build_report(&summaries)?;
        tracing::info!(
            technicians = report.technician_count,
            total_hours = report.total_hours,
            "report built"
        );
        if let Some(observer) = &self.report_observer {
            observer(&report);
        }
        Ok(report)
    }
}
