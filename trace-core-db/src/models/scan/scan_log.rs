use chrono::{DateTime, Utc};
use heapless::String as HeaplessString;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::batch::BatchId;
use crate::models::identifiable::Identifiable;
use crate::utils::{stored_precision, truncated_heapless};

/// Maximum stored length of a client network origin
pub const SOURCE_ADDRESS_MAX_LEN: usize = 64;

pub type SourceAddress = HeaplessString<SOURCE_ADDRESS_MAX_LEN>;

/// One public trace lookup, appended when the lookup succeeds.
///
/// `batch_id` is a logical reference only. Entries outlive the batch they
/// point at and are never updated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScanLogModel {
    pub id: Uuid,
    pub batch_id: BatchId,
    pub source_address: Option<SourceAddress>,
    #[serde(rename = "timestamp")]
    pub scanned_at: DateTime<Utc>,
}

impl Identifiable for ScanLogModel {
    fn get_id(&self) -> Uuid {
        self.id
    }
}

impl ScanLogModel {
    /// Build a new entry. An oversized source address is truncated, never rejected.
    pub fn new(batch_id: BatchId, source_address: Option<&str>, scanned_at: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            batch_id,
            source_address: source_address
                .filter(|addr| !addr.is_empty())
                .map(truncated_heapless),
            scanned_at: stored_precision(scanned_at),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn long_source_address_is_truncated() {
        let long = "f".repeat(100);
        let entry = ScanLogModel::new(BatchId::try_from("B1").unwrap(), Some(&long), Utc::now());
        assert_eq!(entry.source_address.unwrap().len(), SOURCE_ADDRESS_MAX_LEN);
    }

    #[test]
    fn empty_source_address_is_absent() {
        let entry = ScanLogModel::new(BatchId::try_from("B1").unwrap(), Some(""), Utc::now());
        assert!(entry.source_address.is_none());
    }

    #[test]
    fn serializes_timestamp_field() {
        let entry = ScanLogModel::new(
            BatchId::try_from("B1").unwrap(),
            Some("203.0.113.9"),
            Utc::now(),
        );
        let json = serde_json::to_value(&entry).unwrap();
        assert!(json.get("timestamp").is_some());
        assert_eq!(json["source_address"], "203.0.113.9");
    }
}
