use async_trait::async_trait;
use sqlx::Database;

use crate::models::identifiable::Identifiable;
use crate::repository::pagination::{Page, PageRequest};

/// Generic repository trait for loading the change history of an entity with pagination
///
/// This trait provides a standard interface for reading append-only history rows
/// that reference an owning entity. Rows are returned most recent first.
///
/// # Type Parameters
/// * `DB` - The database type (must implement sqlx::Database)
/// * `T` - The history row type that must implement Identifiable trait
///
/// # Example
/// ```ignore
/// use consult_core_db::repository::pagination::PageRequest;
///
/// impl LoadHistory<Postgres, ConsultationHistoryModel> for ConsultationHistoryRepositoryImpl {
///     async fn load_history(&self, owner_id: i64, page: PageRequest) -> Result<Page<ConsultationHistoryModel>, Box<dyn Error + Send + Sync>> {
///         // Implementation
///     }
/// }
///
/// // Usage:
/// let page = repo.load_history(consultation_id, PageRequest::new(20, 0)).await?;
/// println!("page {} of {}", page.page_number(), page.total_pages());
/// ```
#[async_trait]
pub trait LoadHistory<DB: Database, T: Identifiable>: Send + Sync {
    /// Load paginated history rows of an entity
    ///
    /// # Arguments
    /// * `owner_id` - The id of the entity whose history should be loaded
    /// * `page` - The pagination parameters (limit and offset)
    ///
    /// # Returns
    /// * `Ok(Page<T>)` - A page of history rows, newest first
    /// * `Err` - An error if the history could not be loaded
    async fn load_history(
        &self,
        owner_id: i64,
        page: PageRequest,
    ) -> Result<Page<T>, Box<dyn std::error::Error + Send + Sync>>;
}
