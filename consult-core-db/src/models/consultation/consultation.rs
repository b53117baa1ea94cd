use chrono::{DateTime, NaiveDate, Utc};
use consult_core_api::{FieldSnapshot, FieldValue};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::{Validate, ValidationError};

use super::common_enums::{Carrier, ConsultationStatus, InternetSpeed};
use crate::models::auditable::Auditable;
use crate::models::identifiable::Identifiable;

/// Required display fields must hold something other than whitespace.
pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("required"));
    }
    Ok(())
}

/// # Documentation
/// - A customer consultation tracked by the sales desk (table `consultations`).
/// - `id`, `created_at` and `updated_at` are assigned by the store.
/// - Edits to the fields listed in `TrackedFieldSet::consultation()` are written
///   to `consultation_history`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, Validate)]
pub struct ConsultationModel {
    pub id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,

    pub status: ConsultationStatus,

    #[validate(custom(function = "validate_not_blank"))]
    pub customer_name: String,
    #[validate(custom(function = "validate_not_blank"))]
    pub phone: String,

    pub first_consultation_date: Option<NaiveDate>,
    /// Date the customer asked to be called back
    pub follow_up_date: Option<NaiveDate>,
    pub moving_date: Option<NaiveDate>,
    pub desired_install_date: Option<NaiveDate>,

    pub carrier: Option<Carrier>,
    pub speed: Option<InternetSpeed>,
    pub has_tv: bool,
    pub tv_plan: Option<String>,
    pub product_summary: Option<String>,

    pub consultation_note: Option<String>,
    pub memo: Option<String>,

    /// Display name of the consultant in charge
    pub consultant: Option<String>,
}

impl Identifiable for ConsultationModel {
    fn get_id(&self) -> i64 {
        self.id
    }
}

fn date_value(date: Option<NaiveDate>) -> FieldValue {
    date.map(|d| d.format("%Y-%m-%d").to_string()).into()
}

impl Auditable for ConsultationModel {
    fn snapshot(&self) -> FieldSnapshot {
        FieldSnapshot::new()
            .with("status", self.status.as_str())
            .with("customer_name", self.customer_name.as_str())
            .with("phone", self.phone.as_str())
            .with("first_consultation_date", date_value(self.first_consultation_date))
            .with("follow_up_date", date_value(self.follow_up_date))
            .with("moving_date", date_value(self.moving_date))
            .with("desired_install_date", date_value(self.desired_install_date))
            .with("carrier", self.carrier.map(|c| c.as_str()))
            .with("speed", self.speed.map(|s| s.as_str()))
            .with("has_tv", self.has_tv)
            .with("tv_plan", self.tv_plan.clone())
            .with("product_summary", self.product_summary.clone())
            .with("consultation_note", self.consultation_note.clone())
            .with("memo", self.memo.clone())
            .with("consultant", self.consultant.clone())
    }
}

/// Input for a new consultation. Missing status and first consultation date
/// are filled in by [`NewConsultation::with_defaults`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct NewConsultation {
    pub status: Option<ConsultationStatus>,

    #[validate(custom(function = "validate_not_blank"))]
    pub customer_name: String,
    #[validate(custom(function = "validate_not_blank"))]
    pub phone: String,

    pub first_consultation_date: Option<NaiveDate>,
    pub follow_up_date: Option<NaiveDate>,
    pub moving_date: Option<NaiveDate>,
    pub desired_install_date: Option<NaiveDate>,

    pub carrier: Option<Carrier>,
    pub speed: Option<InternetSpeed>,
    pub has_tv: bool,
    pub tv_plan: Option<String>,
    pub product_summary: Option<String>,
    pub consultation_note: Option<String>,
    pub memo: Option<String>,
    pub consultant: Option<String>,
}

impl NewConsultation {
    pub fn with_defaults(mut self, today: NaiveDate) -> Self {
        self.status.get_or_insert(ConsultationStatus::New);
        self.first_consultation_date.get_or_insert(today);
        self
    }

    /// Materializes the row as the store would return it.
    pub fn into_model(self, id: i64, now: DateTime<Utc>) -> ConsultationModel {
        ConsultationModel {
            id,
            created_at: now,
            updated_at: now,
            status: self.status.unwrap_or_default(),
            customer_name: self.customer_name,
            phone: self.phone,
            first_consultation_date: self.first_consultation_date,
            follow_up_date: self.follow_up_date,
            moving_date: self.moving_date,
            desired_install_date: self.desired_install_date,
            carrier: self.carrier,
            speed: self.speed,
            has_tv: self.has_tv,
            tv_plan: self.tv_plan,
            product_summary: self.product_summary,
            consultation_note: self.consultation_note,
            memo: self.memo,
            consultant: self.consultant,
        }
    }
}
