use crate::domain::ports::{TechnicianStore, WorkOrderStore};
use crate::domain::technician::{Technician, TechnicianId};
use crate::domain::work_order::WorkOrder;
use crate::error::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// A thread-safe in-memory store for the technician roster.
///
/// Uses `Arc<RwLock<HashMap<TechnicianId, Technician>>>` to allow shared
/// concurrent access. Ideal for testing or one-shot runs where persistence is
/// not required.
#[derive(Default, Clone)]
pub struct InMemoryTechnicianStore {
    technicians: Arc<RwLock<HashMap<TechnicianId, Technician>>>,
}

impl InMemoryTechnicianStore {
    /// Creates a new, empty in-memory technician store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TechnicianStore for InMemoryTechnicianStore {
    async fn store(&self, technician: Technician) -> Result<()> {
        let mut technicians = self.technicians.write().await;
        technicians.insert(technician.id, technician);
        Ok(())
    }

    async fn get(&self, technician_id: TechnicianId) -> Result<Option<Technician>> {
        let technicians = self.technicians.read().await;
        Ok(technicians.get(&technician_id).cloned())
    }

    async fn get_all(&self) -> Result<Vec<Technician>> {
        let technicians = self.technicians.read().await;
        Ok(technicians.values().cloned().collect())
    }
}

/// A thread-safe in-memory store for work orders.
#[derive(Default, Clone)]
pub struct InMemoryWorkOrderStore {
    orders: Arc<RwLock<HashMap<u32, WorkOrder>>>,
}

impl InMemoryWorkOrderStore {
    /// Creates a new, empty in-memory work order store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl WorkOrderStore for InMemoryWorkOrderStore {
    async fn store(&self, order: WorkOrder) -> Result<()> {
        let mut orders = self.orders.write().await;
        orders.insert(order.id, order);
        Ok(())
    }

    async fn get(&self, order_id: u32) -> Result<Option<WorkOrder>> {
        let orders = self.orders.read().await;
        Ok(orders.get(&order_id).cloned())
    }

    async fn exists(&self, order_id: u32) -> Result<bool> {
        let orders = self.orders.read().await;
        Ok(orders.contains_key(&order_id))
    }

    async fn orders_for(&self, technician_id: TechnicianId) -> Result<Vec<WorkOrder>> {
        let orders = self.orders.read().await;
        let mut assigned: Vec<WorkOrder> = orders
            .values()
            .filter(|order| order.technician == Some(technician_id))
            .cloned()
            .collect();
        assigned.sort_by_key(|order| order.id);
        Ok(assigned)
    }
}
