use async_trait::async_trait;
use consult_core_db::models::consultation::ConsultationModel;
use consult_core_db::repository::update::Update;
use sqlx::Postgres;
use std::error::Error;
use tracing::debug;

use super::repo_impl::ConsultationRepositoryImpl;

impl ConsultationRepositoryImpl {
    pub(super) async fn update_impl(
        repo: &ConsultationRepositoryImpl,
        item: ConsultationModel,
    ) -> Result<ConsultationModel, Box<dyn Error + Send + Sync>> {
        let id = item.id;
        let updated = sqlx::query_as::<_, ConsultationModel>(
            r#"
            UPDATE consultations SET
                status = $2,
                customer_name = $3,
                phone = $4,
                first_consultation_date = $5,
                follow_up_date = $6,
                moving_date = $7,
                desired_install_date = $8,
                carrier = $9,
                speed = $10,
                has_tv = $11,
                tv_plan = $12,
                product_summary = $13,
                consultation_note = $14,
                memo = $15,
                consultant = $16,
                updated_at = now()
            WHERE id = $1
            RETURNING id, created_at, updated_at, status, customer_name, phone,
                      first_consultation_date, follow_up_date, moving_date, desired_install_date,
                      carrier, speed, has_tv, tv_plan, product_summary,
                      consultation_note, memo, consultant
            "#,
        )
        .bind(item.id)
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
        .fetch_optional(&*repo.pool)
        .await?
        .ok_or_else(|| format!("Consultation {id} not found"))?;

        debug!(consultation_id = id, "consultation updated");
        Ok(updated)
    }
}

#[async_trait]
impl Update<Postgres, ConsultationModel> for ConsultationRepositoryImpl {
    async fn update(&self, item: ConsultationModel) -> Result<ConsultationModel, Box<dyn Error + Send + Sync>> {
        Self::update_impl(self, item).await
    }
}
