//! In-memory repositories for exercising services without a database.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::Postgres;
use std::collections::HashMap;
use tokio::sync::Mutex;
use trace_core_api::{TraceError, TraceResult};
use trace_core_db::models::batch::BatchModel;
use trace_core_db::models::scan::ScanLogModel;
use trace_core_db::repository::{Create, FindByBatchId, IncrementScanCount};

#[derive(Default)]
pub struct FakeBatches {
    rows: Mutex<HashMap<String, BatchModel>>,
}

impl FakeBatches {
    pub async fn insert(&self, batch: BatchModel) {
        self.rows.lock().await.insert(batch.batch_id.to_string(), batch);
    }

    pub async fn get(&self, batch_id: &str) -> Option<BatchModel> {
        self.rows.lock().await.get(batch_id).cloned()
    }

    pub async fn len(&self) -> usize {
        self.rows.lock().await.len()
    }
}

#[async_trait]
impl Create<Postgres, BatchModel> for FakeBatches {
    async fn create(&self, item: BatchModel) -> TraceResult<BatchModel> {
        let mut rows = self.rows.lock().await;
        if rows.contains_key(item.batch_id.as_str()) {
            return Err(TraceError::batch_id_taken(&item.batch_id));
        }
        rows.insert(item.batch_id.to_string(), item.clone());
        Ok(item)
    }
}

#[async_trait]
impl FindByBatchId<Postgres, BatchModel> for FakeBatches {
    async fn find_by_batch_id(&self, batch_id: &str) -> TraceResult<Option<BatchModel>> {
        Ok(self.get(batch_id).await)
    }
}

#[async_trait]
impl IncrementScanCount<Postgres, BatchModel> for FakeBatches {
    async fn increment_scan_count(
        &self,
        batch_id: &str,
        now: DateTime<Utc>,
    ) -> TraceResult<Option<BatchModel>> {
        let mut rows = self.rows.lock().await;
        Ok(rows.get_mut(batch_id).map(|batch| {
            batch.scan_count += 1;
            batch.updated_at = now;
            batch.clone()
        }))
    }
}

#[derive(Default)]
pub struct FakeScanLog {
    entries: Mutex<Vec<ScanLogModel>>,
    fail: bool,
}

impl FakeScanLog {
    pub fn failing() -> Self {
        Self {
            entries: Mutex::default(),
            fail: true,
        }
    }

    pub async fn entries(&self) -> Vec<ScanLogModel> {
        self.entries.lock().await.clone()
    }
}

#[async_trait]
impl Create<Postgres, ScanLogModel> for FakeScanLog {
    async fn create(&self, item: ScanLogModel) -> TraceResult<ScanLogModel> {
        if self.fail {
            return Err(TraceError::Database("scan_log unavailable".into()));
        }
        self.entries.lock().await.push(item.clone());
        Ok(item)
    }
}
