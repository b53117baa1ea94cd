pub mod config;
pub mod postgres_repositories;
pub mod repository;

pub use config::{ConfigError, DatabaseConfig};
pub use postgres_repositories::{ConsultationEditController, PostgresRepositories};
pub use repository::consultation::{
    ConsultationHistoryRepositoryImpl, ConsultationRepoFactory, ConsultationRepositories,
    ConsultationRepositoryImpl,
};

#[cfg(test)]
pub mod test_helper;
