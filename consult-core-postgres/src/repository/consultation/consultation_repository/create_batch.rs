use async_trait::async_trait;
use consult_core_db::models::consultation::{ConsultationModel, NewConsultation};
use consult_core_db::repository::create_batch::CreateBatch;
use sqlx::Postgres;
use std::error::Error;
use tracing::debug;

use super::repo_impl::ConsultationRepositoryImpl;

impl ConsultationRepositoryImpl {
    pub(super) async fn create_batch_impl(
        repo: &ConsultationRepositoryImpl,
        items: Vec<NewConsultation>,
    ) -> Result<Vec<ConsultationModel>, Box<dyn Error + Send + Sync>> {
        if items.is_empty() {
            return Ok(Vec::new());
        }

        let mut saved_items = Vec::with_capacity(items.len());
        for item in items {
            let saved = sqlx::query_as::<_, ConsultationModel>(
                r#"
                INSERT INTO consultations
                (status, customer_name, phone, first_consultation_date, follow_up_date,
                 moving_date, desired_install_date, carrier, speed, has_tv, tv_plan,
                 product_summary, consultation_note, memo, consultant)
                VALUES (COALESCE($1, '신규'::consultation_status), $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15)
                RETURNING id, created_at, updated_at, status, customer_name, phone,
                          first_consultation_date, follow_up_date, moving_date, desired_install_date,
                          carrier, speed, has_tv, tv_plan, product_summary,
                          consultation_note, memo, consultant
                "#,
            )
            .bind(item.status)
            .bind(item.customer_name)
            .bind(item.phone)
            .bind(item.first_consultation_date)
            .bind(item.follow_up_date)
            .bind(item.moving_date)
            .bind(item.desired_install_date)
            .bind(item.carrier)
            .bind(item.speed)
            .bind(item.has_tv)
            .bind(item.tv_plan)
            .bind(item.product_summary)
            .bind(item.consultation_note)
            .bind(item.memo)
            .bind(item.consultant)
            .fetch_one(&*repo.pool)
            .await?;

            debug!(consultation_id = saved.id, "consultation inserted");
            saved_items.push(saved);
        }

        Ok(saved_items)
    }
}

#[async_trait]
impl CreateBatch<Postgres, NewConsultation, ConsultationModel> for ConsultationRepositoryImpl {
    async fn create_batch(
        &self,
        items: Vec<NewConsultation>,
    ) -> Result<Vec<ConsultationModel>, Box<dyn Error + Send + Sync>> {
        Self::create_batch_impl(self, items).await
    }
}

#[cfg(test)]
mod tests {
    use crate::repository::consultation::consultation_repository::test_utils::create_test_consultation;
    use crate::test_helper::setup_test_context;
    use consult_core_db::models::consultation::{ConsultationStatus, NewConsultation};
    use consult_core_db::repository::create_batch::CreateBatch;
    use serial_test::serial;

    #[tokio::test]
    #[serial]
    #[ignore = "requires DATABASE_URL"]
    async fn test_create_batch() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let repo = &ctx.consultation_repos().consultation_repository;

        let first = create_test_consultation("박성표");
        let second = create_test_consultation("조수창");
        let saved = repo.create_batch(vec![first.clone(), second.clone()]).await?;

        assert_eq!(saved.len(), 2);
        assert!(saved[0].id > 0);
        assert!(saved[1].id > saved[0].id);
        assert_eq!(saved[0].customer_name, "박성표");
        assert_eq!(saved[1].status, ConsultationStatus::FollowUpNeeded);
        assert_eq!(saved[0].created_at, saved[0].updated_at);

        Ok(())
    }

    #[tokio::test]
    #[serial]
    #[ignore = "requires DATABASE_URL"]
    async fn test_create_batch_defaults_status() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let repo = &ctx.consultation_repos().consultation_repository;

        let new = NewConsultation {
            customer_name: "하이재".to_string(),
            phone: "010-2586-8800".to_string(),
            ..Default::default()
        };
        let saved = repo.create_batch(vec![new]).await?;

        assert_eq!(saved[0].status, ConsultationStatus::New);
        assert!(!saved[0].has_tv);
        Ok(())
    }

    #[tokio::test]
    #[serial]
    #[ignore = "requires DATABASE_URL"]
    async fn test_create_batch_empty() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let repo = &ctx.consultation_repos().consultation_repository;

        let saved = repo.create_batch(vec![]).await?;

        assert_eq!(saved.len(), 0);
        Ok(())
    }
}
