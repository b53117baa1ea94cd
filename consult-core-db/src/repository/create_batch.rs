use async_trait::async_trait;
use sqlx::Database;

use crate::models::identifiable::Identifiable;

/// Generic repository trait for creating multiple entities in a batch
///
/// This trait provides a standard interface for batch creating entities in a data store.
/// Items are given as insert payloads `N`; the store assigns ids and timestamps.
/// The whole batch is sent in a single round trip.
/// Returns saved items with any generated fields populated, in input order.
///
/// # Type Parameters
/// * `DB` - The database type (must implement sqlx::Database)
/// * `N` - The insert payload type
/// * `T` - The saved entity type that must implement Identifiable trait
///
/// # Example
/// ```ignore
/// impl CreateBatch<Postgres, NewConsultationHistory, ConsultationHistoryModel> for ConsultationHistoryRepositoryImpl {
///     async fn create_batch(&self, items: Vec<NewConsultationHistory>) -> Result<Vec<ConsultationHistoryModel>, Box<dyn Error + Send + Sync>> {
///         // Implementation
///     }
/// }
/// ```
#[async_trait]
pub trait CreateBatch<DB: Database, N: Send + 'static, T: Identifiable>: Send + Sync {
    /// Save multiple items in a single statement
    ///
    /// # Arguments
    /// * `items` - A vector of insert payloads
    ///
    /// # Returns
    /// * `Ok(Vec<T>)` - A vector of created entities with generated fields populated
    /// * `Err` - An error if the insert could not be executed
    async fn create_batch(&self, items: Vec<N>) -> Result<Vec<T>, Box<dyn std::error::Error + Send + Sync>>;
}
