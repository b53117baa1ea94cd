use sqlx::{PgPool, Postgres};
use std::sync::Arc;

use consult_core_db::services::EditController;

use crate::config::DatabaseConfig;
use crate::repository::consultation::{
    ConsultationHistoryRepositoryImpl, ConsultationRepoFactory, ConsultationRepositories,
    ConsultationRepositoryImpl,
};

/// Edit controller wired to the Postgres repositories
pub type ConsultationEditController =
    EditController<Postgres, ConsultationRepositoryImpl, ConsultationHistoryRepositoryImpl>;

pub struct PostgresRepositories {
    pool: Arc<PgPool>,
}

impl PostgresRepositories {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }

    /// Opens a pool using the given configuration
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, sqlx::Error> {
        let pool = config.connect().await?;
        Ok(Self::new(Arc::new(pool)))
    }

    pub fn pool(&self) -> &Arc<PgPool> {
        &self.pool
    }

    pub fn create_consultation_repositories(&self) -> ConsultationRepositories {
        ConsultationRepoFactory::new(self.pool.clone()).build_all_repos()
    }

    pub fn edit_controller(&self) -> ConsultationEditController {
        let repos = self.create_consultation_repositories();
        EditController::new(repos.consultation_repository, repos.consultation_history_repository)
    }
}
