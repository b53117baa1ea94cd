//! Shared setup for tests that run against a live database
//!
//! Tests using this module are ignored by default. Point `DATABASE_URL` at a
//! scratch database and run them with `--ignored`.

use crate::config::DatabaseConfig;
use crate::postgres_repositories::PostgresRepositories;
use crate::repository::consultation::ConsultationRepositories;

pub struct TestContext {
    repositories: PostgresRepositories,
    consultation_repos: ConsultationRepositories,
}

impl TestContext {
    pub fn consultation_repos(&self) -> &ConsultationRepositories {
        &self.consultation_repos
    }

    pub fn repositories(&self) -> &PostgresRepositories {
        &self.repositories
    }
}

/// Connects using the environment configuration and applies migrations
pub async fn setup_test_context() -> Result<TestContext, Box<dyn std::error::Error + Send + Sync>> {
    let config = DatabaseConfig::from_env()?;
    let repositories = PostgresRepositories::connect(&config).await?;

    sqlx::migrate!().run(&**repositories.pool()).await?;

    let consultation_repos = repositories.create_consultation_repositories();
    Ok(TestContext {
        repositories,
        consultation_repos,
    })
}
