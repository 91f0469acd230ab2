use chrono::{SubsecRound, Utc};
use heapless::String as HeaplessString;
use trace_core_db::models::scan::ScanLogModel;

pub fn create_test_scan_log(batch_id: &str, source_address: Option<&str>) -> ScanLogModel {
    ScanLogModel::new(
        HeaplessString::try_from(batch_id).unwrap(),
        source_address,
        Utc::now().trunc_subsecs(6),
    )
}
