use crate::domain::ports::{TechnicianStore, WorkOrderStore};
use crate::domain::technician::{Technician, TechnicianId};
use crate::domain::work_order::WorkOrder;
use crate::error::{BillingError, Result};
use async_trait::async_trait;
use rocksdb::{ColumnFamilyDescriptor, DB, Options};
use std::path::Path;
use std::sync::Arc;

/// Column Family for storing the technician roster.
pub const CF_TECHNICIANS: &str = "technicians";
/// Column Family for storing work orders.
pub const CF_WORK_ORDERS: &str = "work_orders";

/// A persistent store implementation using RocksDB.
///
/// Handles storage for both `Technician` and `WorkOrder` entities using
/// separate Column Families. This ensures data separation and efficient
/// retrieval.
///
/// This struct is thread-safe (`Clone` shares the underlying `Arc<DB>`).
#[derive(Clone)]
pub struct RocksDBStore {
    db: Arc<DB>,
}

impl RocksDBStore {
    /// Opens or creates a RocksDB instance at the specified path.
    ///
    /// Ensures that the required column families ("technicians" and
    /// "work_orders") exist.
    ///
    /// # Arguments
    ///
    /// * `path` - The filesystem path where the database will be stored.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut opts = Options::default();
        opts.create_if_missing(true);
        opts.create_missing_column_families(true);

        let cf_technicians = ColumnFamilyDescriptor::new(CF_TECHNICIANS, Options::default());
        let cf_work_orders = ColumnFamilyDescriptor::new(CF_WORK_ORDERS, Options::default());

        let db = DB::open_cf_descriptors(&opts, path, vec![cf_technicians, cf_work_orders])?;

        Ok(Self { db: Arc::new(db) })
    }

    fn cf_handle(&self, name: &str) -> Result<&rocksdb::ColumnFamily> {
        self.db.cf_handle(name).ok_or_else(|| {
            BillingError::InternalError(Box::new(std::io::Error::other(format!(
                "{name} column family not found"
            ))))
        })
    }

    fn serialize<T: serde::Serialize>(value: &T) -> Result<Vec<u8>> {
        serde_json::to_vec(value).map_err(|e| {
            BillingError::InternalError(Box::new(std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                format!("Serialization error: {}", e),
            )))
        })
    }

    fn deserialize<T: serde::de::DeserializeOwned>(bytes: &[u8]) -> Result<T> {
        serde_json::from_slice(bytes).map_err(|e| {
            BillingError::InternalError(Box::new(std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                format!("Deserialization error: {}", e),
            )))
        })
    }
}

#[async_trait]
impl TechnicianStore for RocksDBStore {
    async fn store(&self, technician: Technician) -> Result<()> {
        let cf = self.cf_handle(CF_TECHNICIANS)?;
        let key = technician.id.to_be_bytes();
        let value = Self::serialize(&technician)?;
        self.db.put_cf(cf, key, value)?;
        Ok(())
    }

    async fn get(&self, technician_id: TechnicianId) -> Result<Option<Technician>> {
        let cf = self.cf_handle(CF_TECHNICIANS)?;
        let key = technician_id.to_be_bytes();
        match self.db.get_cf(cf, key)? {
            Some(bytes) => Ok(Some(Self::deserialize(&bytes)?)),
            None => Ok(None),
        }
    }

    async fn get_all(&self) -> Result<Vec<Technician>> {
        let cf = self.cf_handle(CF_TECHNICIANS)?;

        let mut technicians = Vec::new();
        let iter = self.db.iterator_cf(cf, rocksdb::IteratorMode::Start);

        for item in iter {
            let (_key, value) = item?;
            technicians.push(Self::deserialize(&value)?);
        }

        Ok(technicians)
    }
}

#[async_trait]
impl WorkOrderStore for RocksDBStore {
    async fn store(&self, order: WorkOrder) -> Result<()> {
        let cf = self.cf_handle(CF_WORK_ORDERS)?;
        let key = order.id.to_be_bytes();
        let value = Self::serialize(&order)?;
        self.db.put_cf(cf, key, value)?;
        Ok(())
    }

    async fn get(&self, order_id: u32) -> Result<Option<WorkOrder>> {
        let cf = self.cf_handle(CF_WORK_ORDERS)?;
        let key = order_id.to_be_bytes();
        match self.db.get_cf(cf, key)? {
            Some(bytes) => Ok(Some(Self::deserialize(&bytes)?)),
            None => Ok(None),
        }
    }

    async fn exists(&self, order_id: u32) -> Result<bool> {
        let cf = self.cf_handle(CF_WORK_ORDERS)?;
        let key = order_id.to_be_bytes();
        // Just check if the key exists without retrieving the value
        let result = self.db.get_pinned_cf(cf, key)?;
        Ok(result.is_some())
    }

    async fn orders_for(&self, technician_id: TechnicianId) -> Result<Vec<WorkOrder>> {
        let cf = self.cf_handle(CF_WORK_ORDERS)?;

        // Big-endian keys keep the iteration id-ordered.
        let mut assigned = Vec::new();
        let iter = self.db.iterator_cf(cf, rocksdb::IteratorMode::Start);

        for item in iter {
            let (_key, value) = item?;
            let order: WorkOrder = Self::deserialize(&value)?;
            if order.technician == Some(technician_id) {
                assigned.push(order);
            }
        }

        Ok(assigned)
    }
}
