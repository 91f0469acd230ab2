use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lifecycle status of a batch.
///
/// Transitions are admin-driven only: any state can be set from any other via
/// an update, and nothing in the core changes a status on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "batch_status", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BatchStatus {
    #[default]
    #[serde(rename = "NORMAL", alias = "normal")]
    Normal,
    #[serde(rename = "EXPIRED", alias = "expired")]
    Expired,
    #[serde(rename = "RECALL", alias = "recall")]
    Recall,
}

impl From<BatchStatus> for &str {
    fn from(val: BatchStatus) -> Self {
        match val {
            BatchStatus::Normal => "NORMAL",
            BatchStatus::Expired => "EXPIRED",
            BatchStatus::Recall => "RECALL",
        }
    }
}

impl fmt::Display for BatchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str((*self).into())
    }
}

impl FromStr for BatchStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "NORMAL" => Ok(BatchStatus::Normal),
            "EXPIRED" => Ok(BatchStatus::Expired),
            "RECALL" => Ok(BatchStatus::Recall),
            _ => Err(format!("Unknown batch status: {s}")),
        }
    }
}
