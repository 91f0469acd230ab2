//! Scoped transaction handle.
//!
//! A [`TraceSession`] owns one database transaction for the lifetime of a
//! single request. Repositories built from the session share its executor,
//! so every statement they issue lands in the same transaction. The session
//! is consumed by [`TraceSession::commit`] or [`TraceSession::rollback`]; if
//! it is dropped without either, the transaction rolls back.

use postgres_unit_of_work::Executor;
use sqlx::PgPool;
use std::future::Future;
use trace_core_api::{TraceError, TraceResult};
use tracing::{error, warn};

use crate::postgres_repositories::TraceRepositories;
use crate::utils::transaction_consumed;

pub struct TraceSession {
    executor: Executor,
}

impl TraceSession {
    /// Open a new transaction on `pool`.
    pub async fn begin(pool: &PgPool) -> TraceResult<Self> {
        let tx = pool.begin().await.map_err(|e| {
            error!(error = %e, "Failed to begin transaction");
            TraceError::from(e)
        })?;
        Ok(Self {
            executor: Executor::new(tx),
        })
    }

    pub fn executor(&self) -> &Executor {
        &self.executor
    }

    pub async fn commit(self) -> TraceResult<()> {
        let tx = self.executor.tx.lock().await.take();
        match tx {
            Some(tx) => tx.commit().await.map_err(|e| {
                error!(error = %e, "Failed to commit transaction");
                TraceError::from(e)
            }),
            None => Err(transaction_consumed()),
        }
    }

    pub async fn rollback(self) -> TraceResult<()> {
        let tx = self.executor.tx.lock().await.take();
        match tx {
            Some(tx) => tx.rollback().await.map_err(TraceError::from),
            None => Err(transaction_consumed()),
        }
    }
}

/// Run `op` inside a fresh session.
///
/// The session commits when `op` returns `Ok` and rolls back when it returns
/// `Err`, so a failed operation never leaves partial writes behind. The
/// operation's own error always wins over a rollback failure.
pub async fn run_in_session<T, F, Fut>(pool: &PgPool, op: F) -> TraceResult<T>
where
    F: FnOnce(TraceRepositories) -> Fut,
    Fut: Future<Output = TraceResult<T>>,
{
    let session = TraceSession::begin(pool).await?;
    let repos = TraceRepositories::from_session(&session);
    match op(repos).await {
        Ok(value) => {
            session.commit().await?;
            Ok(value)
        }
        Err(err) => {
            if let Err(rollback_err) = session.rollback().await {
                warn!(error = %rollback_err, "Rollback after failed operation did not complete");
            }
            Err(err)
        }
    }
}
