use super::report::Report;
use super::technician::{Technician, TechnicianId};
use super::work_order::WorkOrder;
use crate::error::Result;
use async_trait::async_trait;

#[async_trait]
pub trait TechnicianStore: Send + Sync {
    async fn store(&self, technician: Technician) -> Result<()>;
    async fn get(&self, technician_id: TechnicianId) -> Result<Option<Technician>>;
    async fn get_all(&self) -> Result<Vec<Technician>>;
}

#[async_trait]
pub trait WorkOrderStore: Send + Sync {
    async fn store(&self, order: WorkOrder) -> Result<()>;
    async fn get(&self, order_id: u32) -> Result<Option<WorkOrder>>;
    async fn exists(&self, order_id: u32) -> Result<bool>;
    async fn orders_for(&self, technician_id: TechnicianId) -> Result<Vec<WorkOrder>>;
}

pub type TechnicianStoreBox = Box<dyn TechnicianStore>;
pub type WorkOrderStoreBox = Box<dyn WorkOrderStore>;

pub type TechnicianStoreFactory = Box<dyn Fn() -> TechnicianStoreBox + Send + Sync>;
pub type WorkOrderStoreFactory = Box<dyn Fn() -> WorkOrderStoreBox + Send + Sync>;

/// Side-channel consumer of finished reports, invoked strictly after the
/// aggregation has completed.
pub type ReportObserver = Box<dyn Fn(&Report) + Send + Sync>;
