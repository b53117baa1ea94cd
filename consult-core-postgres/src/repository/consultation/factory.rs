use sqlx::PgPool;
use std::sync::Arc;

use super::{
    consultation_history_repository::ConsultationHistoryRepositoryImpl,
    consultation_repository::ConsultationRepositoryImpl,
};

/// Factory for creating consultation module repositories
///
/// Repositories share the pool handed to the factory. Each statement runs on
/// its own connection checkout; nothing here opens a transaction.
pub struct ConsultationRepoFactory {
    pool: Arc<PgPool>,
}

impl ConsultationRepoFactory {
    pub fn new(pool: Arc<PgPool>) -> Arc<Self> {
        Arc::new(Self { pool })
    }

    pub fn build_consultation_repo(&self) -> Arc<ConsultationRepositoryImpl> {
        Arc::new(ConsultationRepositoryImpl::new(self.pool.clone()))
    }

    pub fn build_consultation_history_repo(&self) -> Arc<ConsultationHistoryRepositoryImpl> {
        Arc::new(ConsultationHistoryRepositoryImpl::new(self.pool.clone()))
    }

    pub fn build_all_repos(&self) -> ConsultationRepositories {
        ConsultationRepositories {
            consultation_repository: self.build_consultation_repo(),
            consultation_history_repository: self.build_consultation_history_repo(),
        }
    }
}

/// Container for all consultation module repositories
pub struct ConsultationRepositories {
    pub consultation_repository: Arc<ConsultationRepositoryImpl>,
    pub consultation_history_repository: Arc<ConsultationHistoryRepositoryImpl>,
}
