pub mod consultation_history_repository;
pub mod consultation_repository;
pub mod factory;

pub use consultation_history_repository::ConsultationHistoryRepositoryImpl;
pub use consultation_repository::ConsultationRepositoryImpl;
pub use factory::{ConsultationRepoFactory, ConsultationRepositories};
