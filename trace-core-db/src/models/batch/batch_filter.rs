use serde::{Deserialize, Serialize};

use super::batch_status::BatchStatus;

/// Optional filters for listing batches, combined with logical AND.
///
/// `batch_id` and `product_name` are substring matches; `status` is exact.
/// Empty strings are treated the same as an absent filter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchFilter {
    pub batch_id: Option<String>,
    pub product_name: Option<String>,
    pub status: Option<BatchStatus>,
}

impl BatchFilter {
    pub fn batch_id_contains(mut self, fragment: impl Into<String>) -> Self {
        self.batch_id = Some(fragment.into());
        self
    }

    pub fn product_name_contains(mut self, fragment: impl Into<String>) -> Self {
        self.product_name = Some(fragment.into());
        self
    }

    pub fn with_status(mut self, status: BatchStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Substring to match on `batch_id`, if any.
    pub fn batch_id_fragment(&self) -> Option<&str> {
        non_blank(self.batch_id.as_deref())
    }

    /// Substring to match on `product_name`, if any.
    pub fn product_name_fragment(&self) -> Option<&str> {
        non_blank(self.product_name.as_deref())
    }

    pub fn is_empty(&self) -> bool {
        self.batch_id_fragment().is_none()
            && self.product_name_fragment().is_none()
            && self.status.is_none()
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
