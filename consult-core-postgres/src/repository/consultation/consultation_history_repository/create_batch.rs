use async_trait::async_trait;
use consult_core_db::models::consultation::{ConsultationHistoryModel, NewConsultationHistory};
use consult_core_db::repository::create_batch::CreateBatch;
use sqlx::Postgres;
use std::error::Error;
use tracing::debug;

use super::repo_impl::ConsultationHistoryRepositoryImpl;

impl ConsultationHistoryRepositoryImpl {
    pub(super) async fn create_batch_impl(
        repo: &ConsultationHistoryRepositoryImpl,
        items: Vec<NewConsultationHistory>,
    ) -> Result<Vec<ConsultationHistoryModel>, Box<dyn Error + Send + Sync>> {
        if items.is_empty() {
            return Ok(Vec::new());
        }

        let mut consultation_ids = Vec::with_capacity(items.len());
        let mut changed_by = Vec::with_capacity(items.len());
        let mut field_names = Vec::with_capacity(items.len());
        let mut old_values: Vec<Option<String>> = Vec::with_capacity(items.len());
        let mut new_values: Vec<Option<String>> = Vec::with_capacity(items.len());
        for item in items {
            consultation_ids.push(item.consultation_id);
            changed_by.push(item.changed_by);
            field_names.push(item.field_name);
            old_values.push(item.old_value);
            new_values.push(item.new_value);
        }

        // One statement for the whole batch; ordinality keeps input order for ids.
        let mut saved = sqlx::query_as::<_, ConsultationHistoryModel>(
            r#"
            INSERT INTO consultation_history (consultation_id, changed_by, field_name, old_value, new_value)
            SELECT consultation_id, changed_by, field_name, old_value, new_value
            FROM UNNEST($1::BIGINT[], $2::TEXT[], $3::TEXT[], $4::TEXT[], $5::TEXT[])
                WITH ORDINALITY AS batch(consultation_id, changed_by, field_name, old_value, new_value, position)
            ORDER BY position
            RETURNING id, consultation_id, changed_by, field_name, old_value, new_value, changed_at
            "#,
        )
        .bind(&consultation_ids)
        .bind(&changed_by)
        .bind(&field_names)
        .bind(&old_values)
        .bind(&new_values)
        .fetch_all(&*repo.pool)
        .await?;

        saved.sort_by_key(|row| row.id);
        debug!(rows = saved.len(), "consultation history appended");
        Ok(saved)
    }
}

#[async_trait]
impl CreateBatch<Postgres, NewConsultationHistory, ConsultationHistoryModel> for ConsultationHistoryRepositoryImpl {
    async fn create_batch(
        &self,
        items: Vec<NewConsultationHistory>,
    ) -> Result<Vec<ConsultationHistoryModel>, Box<dyn Error + Send + Sync>> {
        Self::create_batch_impl(self, items).await
    }
}
