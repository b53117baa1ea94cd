use std::marker::PhantomData;
use std::sync::Arc;

use sqlx::Database;
use tracing::warn;

use crate::models::consultation::ConsultationHistoryModel;
use crate::repository::load_history::LoadHistory;
use crate::repository::pagination::{Page, PageRequest};

const DEFAULT_PAGE_SIZE: usize = 100;

/// Reads the change history of a consultation, most recent first.
///
/// Read failures are logged and reported as an empty history.
pub struct HistoryReader<DB, R> {
    repository: Arc<R>,
    page_size: usize,
    _db: PhantomData<fn() -> DB>,
}

impl<DB, R> HistoryReader<DB, R>
where
    DB: Database,
    R: LoadHistory<DB, ConsultationHistoryModel>,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self {
            repository,
            page_size: DEFAULT_PAGE_SIZE,
            _db: PhantomData,
        }
    }

    /// Number of rows fetched per round trip by [`read`](Self::read).
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    /// All history rows of a consultation.
    pub async fn read(&self, consultation_id: i64) -> Vec<ConsultationHistoryModel> {
        let mut request = PageRequest::first(self.page_size);
        let mut rows = Vec::new();

        loop {
            let page = match self.repository.load_history(consultation_id, request).await {
                Ok(page) => page,
                Err(e) => {
                    warn!(consultation_id, error = %e, "history fetch failed, showing no history");
                    return Vec::new();
                }
            };

            let next = page.next_request();
            rows.extend(page.items);
            match next {
                Some(next) => request = next,
                None => break,
            }
        }

        rows
    }

    /// One page of history rows. A failed read yields an empty page.
    pub async fn read_page(&self, consultation_id: i64, page: PageRequest) -> Page<ConsultationHistoryModel> {
        match self.repository.load_history(consultation_id, page).await {
            Ok(result) => result,
            Err(e) => {
                warn!(consultation_id, error = %e, "history page fetch failed, showing no history");
                Page::empty(page)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::consultation::NewConsultationHistory;
    use crate::repository::create_batch::CreateBatch;
    use crate::test_utils::InMemoryHistoryStore;
    use sqlx::Postgres;

    fn row(consultation_id: i64, field: &str) -> NewConsultationHistory {
        NewConsultationHistory {
            consultation_id,
            changed_by: "정상문".to_string(),
            field_name: field.to_string(),
            old_value: None,
            new_value: Some("값".to_string()),
        }
    }

    async fn seed(store: &InMemoryHistoryStore, consultation_id: i64, fields: &[&str]) {
        let rows: Vec<NewConsultationHistory> = fields.iter().map(|f| row(consultation_id, f)).collect();
        CreateBatch::<Postgres, _, _>::create_batch(store, rows)
            .await
            .expect("seeding in-memory store");
    }

    #[tokio::test]
    async fn test_read_returns_rows_newest_first() {
        let store = Arc::new(InMemoryHistoryStore::new());
        seed(&store, 1, &["status"]).await;
        seed(&store, 1, &["phone", "memo"]).await;
        seed(&store, 2, &["carrier"]).await;
        let reader: HistoryReader<Postgres, _> = HistoryReader::new(store.clone());

        let rows = reader.read(1).await;

        let fields: Vec<&str> = rows.iter().map(|r| r.field_name.as_str()).collect();
        assert_eq!(fields, vec!["memo", "phone", "status"]);
        assert!(rows.windows(2).all(|w| w[0].changed_at >= w[1].changed_at));
    }

    #[tokio::test]
    async fn test_read_walks_every_page() {
        let store = Arc::new(InMemoryHistoryStore::new());
        let fields: Vec<String> = (0..7).map(|i| format!("field_{i}")).collect();
        let refs: Vec<&str> = fields.iter().map(String::as_str).collect();
        seed(&store, 4, &refs).await;
        let reader: HistoryReader<Postgres, _> = HistoryReader::new(store.clone()).with_page_size(3);

        let rows = reader.read(4).await;

        assert_eq!(rows.len(), 7);
        assert_eq!(store.history_reads(), 3);
    }

    #[tokio::test]
    async fn test_read_without_history_is_empty() {
        let store = Arc::new(InMemoryHistoryStore::new());
        let reader: HistoryReader<Postgres, _> = HistoryReader::new(store);

        assert!(reader.read(99).await.is_empty());
    }

    #[tokio::test]
    async fn test_fetch_failure_reads_as_no_history() {
        let store = Arc::new(InMemoryHistoryStore::new());
        seed(&store, 1, &["status"]).await;
        store.fail_reads(true);
        let reader: HistoryReader<Postgres, _> = HistoryReader::new(store.clone());

        assert!(reader.read(1).await.is_empty());
        let page = reader.read_page(1, PageRequest::new(10, 0)).await;
        assert!(page.items.is_empty());
        assert_eq!(page.total, 0);
    }

    #[tokio::test]
    async fn test_read_page_reports_totals() {
        let store = Arc::new(InMemoryHistoryStore::new());
        seed(&store, 1, &["status", "phone", "memo", "speed"]).await;
        let reader: HistoryReader<Postgres, _> = HistoryReader::new(store);

        let page = reader.read_page(1, PageRequest::new(3, 0)).await;

        assert_eq!(page.total, 4);
        assert_eq!(page.items.len(), 3);
        assert!(page.has_more());
    }
}
