use async_trait::async_trait;
use consult_core_db::models::consultation::ConsultationModel;
use consult_core_db::repository::load::Load;
use sqlx::Postgres;
use std::error::Error;

use super::repo_impl::ConsultationRepositoryImpl;

impl ConsultationRepositoryImpl {
    pub(super) async fn load_impl(
        repo: &ConsultationRepositoryImpl,
        id: i64,
    ) -> Result<Option<ConsultationModel>, Box<dyn Error + Send + Sync>> {
        let query = sqlx::query_as::<_, ConsultationModel>(
            r#"
            SELECT id, created_at, updated_at, status, customer_name, phone,
                   first_consultation_date, follow_up_date, moving_date, desired_install_date,
                   carrier, speed, has_tv, tv_plan, product_summary,
                   consultation_note, memo, consultant
            FROM consultations
            WHERE id = $1
            "#,
        )
        .bind(id);

        Ok(query.fetch_optional(&*repo.pool).await?)
    }
}

#[async_trait]
impl Load<Postgres, ConsultationModel> for ConsultationRepositoryImpl {
    async fn load(&self, id: i64) -> Result<Option<ConsultationModel>, Box<dyn Error + Send + Sync>> {
        Self::load_impl(self, id).await
    }
}
