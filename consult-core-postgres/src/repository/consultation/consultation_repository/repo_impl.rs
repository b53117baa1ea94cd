use sqlx::PgPool;
use std::sync::Arc;

pub struct ConsultationRepositoryImpl {
    pub(crate) pool: Arc<PgPool>,
}

impl ConsultationRepositoryImpl {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}
