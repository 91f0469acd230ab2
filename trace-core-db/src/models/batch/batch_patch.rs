use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use trace_core_api::TraceResult;

use crate::utils::{required_heapless, stored_precision};

use super::batch::{BatchModel, PRODUCT_NAME_MAX_LEN};
use super::batch_status::BatchStatus;

/// Partial update of a batch.
///
/// For the four descriptive payloads the outer `Option` says whether the
/// field was sent at all and the inner one carries the new value, so an
/// explicit JSON `null` clears the payload. `product_name` and `status` are
/// required columns: a `null` for either is the same as leaving it out.
///
/// `batch_id`, `scan_count` and the timestamps are not patchable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BatchPatch {
    #[serde(default, alias = "productName")]
    pub product_name: Option<String>,

    #[serde(
        default,
        alias = "originInfo",
        deserialize_with = "double_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub origin_info: Option<Option<String>>,

    #[serde(
        default,
        alias = "processInfo",
        deserialize_with = "double_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub process_info: Option<Option<String>>,

    #[serde(
        default,
        alias = "logisticsInfo",
        alias = "logistics_static",
        deserialize_with = "double_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub logistics_info: Option<Option<String>>,

    #[serde(
        default,
        alias = "qualityReport",
        deserialize_with = "double_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub quality_report: Option<Option<String>>,

    #[serde(default)]
    pub status: Option<BatchStatus>,
}

/// Present-but-null becomes `Some(None)`; absence is handled by `default`.
fn double_option<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Some)
}

impl BatchPatch {
    pub fn with_status(mut self, status: BatchStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_product_name(mut self, product_name: impl Into<String>) -> Self {
        self.product_name = Some(product_name.into());
        self
    }

    /// True when no field is present.
    pub fn is_empty(&self) -> bool {
        self.product_name.is_none()
            && self.origin_info.is_none()
            && self.process_info.is_none()
            && self.logistics_info.is_none()
            && self.quality_report.is_none()
            && self.status.is_none()
    }

    /// Merge this patch into `batch` and refresh `updated_at`.
    ///
    /// Validation happens before anything is written, so a rejected patch
    /// leaves `batch` untouched.
    pub fn apply_to(self, batch: &mut BatchModel, now: DateTime<Utc>) -> TraceResult<()> {
        let product_name = match self.product_name {
            Some(name) => Some(required_heapless("product_name", &name, PRODUCT_NAME_MAX_LEN)?),
            None => None,
        };

        if let Some(name) = product_name {
            batch.product_name = name;
        }
        if let Some(origin_info) = self.origin_info {
            batch.origin_info = origin_info;
        }
        if let Some(process_info) = self.process_info {
            batch.process_info = process_info;
        }
        if let Some(logistics_info) = self.logistics_info {
            batch.logistics_info = logistics_info;
        }
        if let Some(quality_report) = self.quality_report {
            batch.quality_report = quality_report;
        }
        if let Some(status) = self.status {
            batch.status = status;
        }
        batch.updated_at = stored_precision(now);
        Ok(())
    }
}
