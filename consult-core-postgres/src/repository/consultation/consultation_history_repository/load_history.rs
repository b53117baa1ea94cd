use async_trait::async_trait;
use consult_core_db::models::consultation::ConsultationHistoryModel;
use consult_core_db::repository::load_history::LoadHistory;
use consult_core_db::repository::pagination::{Page, PageRequest};
use sqlx::Postgres;
use std::error::Error;

use super::repo_impl::ConsultationHistoryRepositoryImpl;

/// `LIMIT`/`OFFSET` bind values for a page request.
fn sql_window(page: PageRequest) -> Result<(i64, i64), Box<dyn Error + Send + Sync>> {
    let limit = i64::try_from(page.limit).map_err(|_| format!("page limit {} out of range", page.limit))?;
    let offset = i64::try_from(page.offset).map_err(|_| format!("page offset {} out of range", page.offset))?;
    Ok((limit, offset))
}

impl ConsultationHistoryRepositoryImpl {
    pub(super) async fn load_history_impl(
        repo: &ConsultationHistoryRepositoryImpl,
        consultation_id: i64,
        page: PageRequest,
    ) -> Result<Page<ConsultationHistoryModel>, Box<dyn Error + Send + Sync>> {
        let (limit, offset) = sql_window(page)?;

        // First, get the total count of history rows for this consultation
        let total: i64 = sqlx::query_scalar(
            r#"SELECT COUNT(*) FROM consultation_history WHERE consultation_id = $1"#,
        )
        .bind(consultation_id)
        .fetch_one(&*repo.pool)
        .await?;

        // Then fetch the requested page, most recent first
        let items = sqlx::query_as::<_, ConsultationHistoryModel>(
            r#"
            SELECT id, consultation_id, changed_by, field_name, old_value, new_value, changed_at
            FROM consultation_history
            WHERE consultation_id = $1
            ORDER BY changed_at DESC, id DESC
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(consultation_id)
        .bind(limit)
        .bind(offset)
        .fetch_all(&*repo.pool)
        .await?;

        Ok(Page::new(items, total as usize, page.limit, page.offset))
    }
}

#[async_trait]
impl LoadHistory<Postgres, ConsultationHistoryModel> for ConsultationHistoryRepositoryImpl {
    async fn load_history(
        &self,
        owner_id: i64,
        page: PageRequest,
    ) -> Result<Page<ConsultationHistoryModel>, Box<dyn Error + Send + Sync>> {
        Self::load_history_impl(self, owner_id, page).await
    }
}
