use sqlx::PgPool;
use std::sync::Arc;

/// Reads and appends `consultation_history` rows. Rows are never updated.
pub struct ConsultationHistoryRepositoryImpl {
    pub(crate) pool: Arc<PgPool>,
}

impl ConsultationHistoryRepositoryImpl {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}
