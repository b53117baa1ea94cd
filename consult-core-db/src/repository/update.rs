use async_trait::async_trait;
use sqlx::Database;

use crate::models::identifiable::Identifiable;

/// Generic repository trait for updating an entity by its primary key
///
/// This trait provides a standard interface for updating entities in a data store.
/// The store refreshes store-managed columns such as `updated_at` and returns
/// the row as saved.
///
/// # Type Parameters
/// * `DB` - The database type (must implement sqlx::Database)
/// * `T` - The entity type that must implement Identifiable trait
///
/// # Example
/// ```ignore
/// impl Update<Postgres, ConsultationModel> for ConsultationRepositoryImpl {
///     async fn update(&self, item: ConsultationModel) -> Result<ConsultationModel, Box<dyn Error + Send + Sync>> {
///         // Implementation
///     }
/// }
/// ```
#[async_trait]
pub trait Update<DB: Database, T: Identifiable + Send + 'static>: Send + Sync {
    /// Update one item, matched by `get_id()`
    ///
    /// # Arguments
    /// * `item` - The entity carrying the new field values
    ///
    /// # Returns
    /// * `Ok(T)` - The updated entity
    /// * `Err` - An error if no row matched or the statement failed
    async fn update(&self, item: T) -> Result<T, Box<dyn std::error::Error + Send + Sync>>;
}
