use chrono::{DateTime, Utc};
use heapless::String as HeaplessString;
use serde::{Deserialize, Serialize};
use trace_core_api::TraceResult;
use uuid::Uuid;

use crate::models::identifiable::Identifiable;
use crate::utils::{required_heapless, stored_precision, MAX_UTF8_CHAR_BYTES};

use super::batch_status::BatchStatus;

/// Maximum length of a public batch identifier, in characters
pub const BATCH_ID_MAX_LEN: usize = 64;

/// Maximum length of a product name, in characters
pub const PRODUCT_NAME_MAX_LEN: usize = 255;

pub type BatchId = HeaplessString<{ BATCH_ID_MAX_LEN * MAX_UTF8_CHAR_BYTES }>;
pub type ProductName = HeaplessString<{ PRODUCT_NAME_MAX_LEN * MAX_UTF8_CHAR_BYTES }>;

/// A traceable product batch as stored in the database.
///
/// `id` is the internal identity; `batch_id` is the public, printed lookup key.
/// `batch_id` is unique across live rows and never changes after creation.
///
/// The four descriptive payloads are opaque serialized documents; nothing in
/// the core inspects or validates their content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchModel {
    pub id: Uuid,
    pub batch_id: BatchId,
    pub product_name: ProductName,
    pub origin_info: Option<String>,
    pub process_info: Option<String>,
    pub logistics_info: Option<String>,
    pub quality_report: Option<String>,

    /// Visit counter, starts at 0 and only ever increases
    pub scan_count: i64,

    pub status: BatchStatus,
    pub created_at: DateTime<Utc>,

    /// Refreshed on every mutation, including scan-count increments
    pub updated_at: DateTime<Utc>,
}

impl Identifiable for BatchModel {
    fn get_id(&self) -> Uuid {
        self.id
    }
}

impl BatchModel {
    /// Public projection of this batch (everything except the internal id).
    pub fn to_view(&self) -> BatchView {
        BatchView {
            batch_id: self.batch_id.to_string(),
            product_name: self.product_name.to_string(),
            origin_info: self.origin_info.clone(),
            process_info: self.process_info.clone(),
            logistics_info: self.logistics_info.clone(),
            quality_report: self.quality_report.clone(),
            scan_count: self.scan_count,
            status: self.status,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    /// Copy the descriptive content of this batch under a new identifier.
    ///
    /// The copy gets a fresh internal id, a zero scan count and `now` for both
    /// timestamps. No reference back to the source is kept.
    pub fn duplicate_as(&self, batch_id: BatchId, now: DateTime<Utc>) -> BatchModel {
        let now = stored_precision(now);
        BatchModel {
            id: Uuid::new_v4(),
            batch_id,
            product_name: self.product_name.clone(),
            origin_info: self.origin_info.clone(),
            process_info: self.process_info.clone(),
            logistics_info: self.logistics_info.clone(),
            quality_report: self.quality_report.clone(),
            scan_count: 0,
            status: self.status,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Batch as returned to callers: all fields except the internal id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchView {
    pub batch_id: String,
    pub product_name: String,
    pub origin_info: Option<String>,
    pub process_info: Option<String>,
    pub logistics_info: Option<String>,
    pub quality_report: Option<String>,
    pub scan_count: i64,
    pub status: BatchStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&BatchModel> for BatchView {
    fn from(model: &BatchModel) -> Self {
        model.to_view()
    }
}

/// Fields supplied by an administrator when creating a batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewBatch {
    #[serde(alias = "batchId")]
    pub batch_id: String,
    #[serde(alias = "productName")]
    pub product_name: String,
    #[serde(default, alias = "originInfo")]
    pub origin_info: Option<String>,
    #[serde(default, alias = "processInfo")]
    pub process_info: Option<String>,
    #[serde(default, alias = "logisticsInfo", alias = "logistics_static")]
    pub logistics_info: Option<String>,
    #[serde(default, alias = "qualityReport")]
    pub quality_report: Option<String>,
    #[serde(default)]
    pub status: BatchStatus,
}

impl NewBatch {
    pub fn new(batch_id: impl Into<String>, product_name: impl Into<String>) -> Self {
        Self {
            batch_id: batch_id.into(),
            product_name: product_name.into(),
            origin_info: None,
            process_info: None,
            logistics_info: None,
            quality_report: None,
            status: BatchStatus::default(),
        }
    }

    /// Validate the bounded fields and build the row to insert.
    ///
    /// The new row always starts with `scan_count = 0` and `now` timestamps,
    /// whatever the caller sent.
    pub fn into_model(self, now: DateTime<Utc>) -> TraceResult<BatchModel> {
        let now = stored_precision(now);
        Ok(BatchModel {
            id: Uuid::new_v4(),
            batch_id: required_heapless("batch_id", &self.batch_id, BATCH_ID_MAX_LEN)?,
            product_name: required_heapless(
                "product_name",
                &self.product_name,
                PRODUCT_NAME_MAX_LEN,
            )?,
            origin_info: self.origin_info,
            process_info: self.process_info,
            logistics_info: self.logistics_info,
            quality_report: self.quality_report,
            scan_count: 0,
            status: self.status,
            created_at: now,
            updated_at: now,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(secs, 0).unwrap()
    }

    #[test]
    fn new_batch_starts_at_zero_scans() {
        let model = NewBatch::new("B1", "Rice").into_model(at(100)).unwrap();
        assert_eq!(model.batch_id.as_str(), "B1");
        assert_eq!(model.product_name.as_str(), "Rice");
        assert_eq!(model.scan_count, 0);
        assert_eq!(model.status, BatchStatus::Normal);
        assert_eq!(model.created_at, at(100));
        assert_eq!(model.updated_at, at(100));
    }

    #[test]
    fn new_batch_rejects_empty_identifier() {
        assert!(NewBatch::new("", "Rice").into_model(at(0)).is_err());
        assert!(NewBatch::new("B1", "").into_model(at(0)).is_err());
    }

    #[test]
    fn new_batch_rejects_overlong_identifier() {
        let long = "X".repeat(BATCH_ID_MAX_LEN + 1);
        assert!(NewBatch::new(long, "Rice").into_model(at(0)).is_err());
    }

    #[test]
    fn new_batch_limits_count_characters() {
        // 90 chars, 270 bytes.
        let name = "稻".repeat(90);
        let model = NewBatch::new("B1", name.clone()).into_model(at(0)).unwrap();
        assert_eq!(model.product_name.as_str(), name);

        let id = "柑".repeat(BATCH_ID_MAX_LEN);
        let model = NewBatch::new(id.clone(), "Citrus").into_model(at(0)).unwrap();
        assert_eq!(model.batch_id.as_str(), id);

        let overlong = "柑".repeat(BATCH_ID_MAX_LEN + 1);
        assert!(NewBatch::new(overlong, "Citrus").into_model(at(0)).is_err());
        let overlong = "稻".repeat(PRODUCT_NAME_MAX_LEN + 1);
        assert!(NewBatch::new("B1", overlong).into_model(at(0)).is_err());
    }

    #[test]
    fn timestamps_use_stored_precision() {
        let now = Utc.timestamp_opt(100, 987_654_321).unwrap();
        let model = NewBatch::new("B1", "Rice").into_model(now).unwrap();
        assert_eq!(model.created_at, Utc.timestamp_opt(100, 987_654_000).unwrap());
        assert_eq!(model.updated_at, model.created_at);

        let copy = model.duplicate_as(BatchId::try_from("B2").unwrap(), now);
        assert_eq!(copy.created_at, model.created_at);
    }

    #[test]
    fn new_batch_accepts_camel_case_and_legacy_names() {
        let json = r#"{
            "batchId": "B7",
            "productName": "Citrus",
            "logistics_static": "{\"route\":\"cold chain\"}",
            "status": "recall"
        }"#;
        let new_batch: NewBatch = serde_json::from_str(json).unwrap();
        assert_eq!(new_batch.batch_id, "B7");
        assert_eq!(new_batch.logistics_info.as_deref(), Some("{\"route\":\"cold chain\"}"));
        assert_eq!(new_batch.status, BatchStatus::Recall);
        assert_eq!(new_batch.origin_info, None);
    }

    #[test]
    fn duplicate_resets_counter_and_keeps_content() {
        let mut source = NewBatch::new("B1", "Rice");
        source.origin_info = Some("{\"farm\":\"north\"}".into());
        source.status = BatchStatus::Expired;
        let mut source = source.into_model(at(10)).unwrap();
        source.scan_count = 42;

        let copy = source.duplicate_as(BatchId::try_from("B2").unwrap(), at(20));
        assert_ne!(copy.id, source.id);
        assert_eq!(copy.batch_id.as_str(), "B2");
        assert_eq!(copy.product_name, source.product_name);
        assert_eq!(copy.origin_info, source.origin_info);
        assert_eq!(copy.status, BatchStatus::Expired);
        assert_eq!(copy.scan_count, 0);
        assert_eq!(copy.created_at, at(20));
        assert_eq!(copy.updated_at, at(20));
    }

    #[test]
    fn view_omits_internal_id() {
        let model = NewBatch::new("B1", "Rice").into_model(at(0)).unwrap();
        let json = serde_json::to_value(model.to_view()).unwrap();
        assert!(json.get("id").is_none());
        assert_eq!(json["batch_id"], "B1");
        assert_eq!(json["status"], "NORMAL");
    }
}
