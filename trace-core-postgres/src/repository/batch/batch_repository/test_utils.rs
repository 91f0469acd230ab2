use chrono::{DateTime, SubsecRound, Utc};
use heapless::String as HeaplessString;
use trace_core_db::models::batch::{BatchModel, BatchStatus};
use uuid::Uuid;

/// Current time at the microsecond precision Postgres stores.
pub fn test_now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(6)
}

pub fn create_test_batch(batch_id: &str, product_name: &str) -> BatchModel {
    let now = test_now();
    BatchModel {
        id: Uuid::new_v4(),
        batch_id: HeaplessString::try_from(batch_id).unwrap(),
        product_name: HeaplessString::try_from(product_name).unwrap(),
        origin_info: None,
        process_info: None,
        logistics_info: None,
        quality_report: None,
        scan_count: 0,
        status: BatchStatus::Normal,
        created_at: now,
        updated_at: now,
    }
}
