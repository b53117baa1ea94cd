use std::marker::PhantomData;
use std::sync::Arc;

use consult_core_api::{ApiError, ApiResult, ChangeEntry, UNKNOWN_ACTOR};
use sqlx::Database;
use tracing::debug;

use crate::models::consultation::{ConsultationHistoryModel, NewConsultationHistory};
use crate::repository::create_batch::CreateBatch;

/// Appends change entries to `consultation_history`.
pub struct HistoryWriter<DB, R> {
    repository: Arc<R>,
    _db: PhantomData<fn() -> DB>,
}

impl<DB, R> HistoryWriter<DB, R>
where
    DB: Database,
    R: CreateBatch<DB, NewConsultationHistory, ConsultationHistoryModel>,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self {
            repository,
            _db: PhantomData,
        }
    }

    /// Writes one row per change in a single batched insert.
    ///
    /// An empty change set does not touch the store. A missing or blank actor
    /// is recorded as [`UNKNOWN_ACTOR`]. Failures are returned, never retried.
    ///
    /// Returns the number of rows written.
    pub async fn write(
        &self,
        consultation_id: i64,
        changes: &[ChangeEntry],
        actor: Option<&str>,
    ) -> ApiResult<usize> {
        if consultation_id <= 0 {
            return Err(ApiError::ValidationError(format!(
                "consultation id must be positive, got {consultation_id}"
            )));
        }
        if changes.is_empty() {
            debug!(consultation_id, "no tracked field changed, skipping history write");
            return Ok(0);
        }

        let actor = actor
            .filter(|name| !name.trim().is_empty())
            .unwrap_or(UNKNOWN_ACTOR);
        let rows: Vec<NewConsultationHistory> = changes
            .iter()
            .map(|change| NewConsultationHistory::from_change(consultation_id, actor, change))
            .collect();

        let saved = self
            .repository
            .create_batch(rows)
            .await
            .map_err(|e| ApiError::DatabaseError(format!("history insert failed: {e}")))?;

        debug!(consultation_id, actor, rows = saved.len(), "history written");
        Ok(saved.len())
    }
}
