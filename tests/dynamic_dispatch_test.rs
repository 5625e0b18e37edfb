use chrono::Utc;
use fieldpay::domain::ports::{TechnicianStoreBox, WorkOrderStoreBox};
use fieldpay::domain::technician::Technician;
use fieldpay::domain::work_order::{HoursWorked, WorkOrder};
use fieldpay::infrastructure::in_memory::{InMemoryTechnicianStore, InMemoryWorkOrderStore};

#[tokio::test]
async fn test_stores_as_trait_objects() {
    let technician_store: TechnicianStoreBox = Box::new(InMemoryTechnicianStore::new());
    let work_order_store: WorkOrderStoreBox = Box::new(InMemoryWorkOrderStore::new());

    let technician = Technician {
        id: 1,
        first_name: "Juan".to_string(),
        last_name: "Pérez".to_string(),
        email: "juan.perez@test.com".to_string(),
        phone: None,
        date_joined: Utc::now(),
        is_active: true,
    };

    let order = WorkOrder {
        id: 1,
        technician: Some(1),
        hours: HoursWorked::new(5).unwrap(),
        created_at: None,
    };

    // Verify Send + Sync by spawning tasks
    let ts_handle = tokio::spawn(async move {
        technician_store.store(technician).await.unwrap();
        technician_store.get(1).await.unwrap().unwrap()
    });

    let wo_handle = tokio::spawn(async move {
        work_order_store.store(order).await.unwrap();
        work_order_store.get(1).await.unwrap().unwrap()
    });

    let retrieved_technician = ts_handle.await.unwrap();
    assert_eq!(retrieved_technician.id, 1);

    let retrieved_order = wo_handle.await.unwrap();
    assert_eq!(retrieved_order.id, 1);
}
