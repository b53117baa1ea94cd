use std::marker::PhantomData;
use std::sync::Arc;

use chrono::Utc;
use consult_core_api::{
    detect_changes, Action, ApiError, ApiResult, FieldSnapshot, SaveOutcome, Section, SessionContext,
    TrackedFieldSet,
};
use sqlx::Database;
use tracing::{debug, info, warn};
use validator::Validate;

use crate::models::auditable::Auditable;
use crate::models::consultation::{
    ConsultationHistoryModel, ConsultationModel, NewConsultation, NewConsultationHistory,
};
use crate::repository::create_batch::CreateBatch;
use crate::repository::load::Load;
use crate::repository::load_history::LoadHistory;
use crate::repository::update::Update;
use crate::services::history_reader::HistoryReader;
use crate::services::history_writer::HistoryWriter;

/// State captured when an edit starts: the record as it was loaded.
#[derive(Debug, Clone)]
pub struct EditSession {
    original: ConsultationModel,
    before: FieldSnapshot,
}

impl EditSession {
    pub fn consultation_id(&self) -> i64 {
        self.original.id
    }

    /// The record as loaded, to prefill the edit form.
    pub fn original(&self) -> &ConsultationModel {
        &self.original
    }
}

/// Drives consultation create/edit/save and keeps the audit history in step.
///
/// A save updates the record first and writes history second. The two writes
/// are independent; [`SaveOutcome`] reports which of them succeeded.
pub struct EditController<DB, C, H> {
    consultations: Arc<C>,
    writer: HistoryWriter<DB, H>,
    reader: HistoryReader<DB, H>,
    tracked: TrackedFieldSet,
    _db: PhantomData<fn() -> DB>,
}

impl<DB, C, H> EditController<DB, C, H>
where
    DB: Database,
    C: Load<DB, ConsultationModel>
        + Update<DB, ConsultationModel>
        + CreateBatch<DB, NewConsultation, ConsultationModel>,
    H: CreateBatch<DB, NewConsultationHistory, ConsultationHistoryModel>
        + LoadHistory<DB, ConsultationHistoryModel>,
{
    pub fn new(consultations: Arc<C>, history: Arc<H>) -> Self {
        Self {
            consultations,
            writer: HistoryWriter::new(history.clone()),
            reader: HistoryReader::new(history),
            tracked: TrackedFieldSet::consultation(),
            _db: PhantomData,
        }
    }

    pub fn with_tracked_fields(mut self, tracked: TrackedFieldSet) -> Self {
        self.tracked = tracked;
        self
    }

    pub fn tracked_fields(&self) -> &TrackedFieldSet {
        &self.tracked
    }

    /// Loads the record and captures its snapshot for the later save.
    pub async fn begin_edit(&self, session: &SessionContext, consultation_id: i64) -> ApiResult<EditSession> {
        session.require(Section::Consultation, Action::Write)?;

        let original = self
            .consultations
            .load(consultation_id)
            .await?
            .ok_or_else(|| ApiError::NotFound(format!("consultation {consultation_id}")))?;

        debug!(consultation_id, actor = session.actor_name(), "edit started");
        Ok(EditSession {
            before: original.snapshot(),
            original,
        })
    }

    /// Saves `modified` and records the tracked fields that changed since
    /// `begin_edit`.
    ///
    /// Permission and validation problems are returned as errors before any
    /// store call. Store failures come back inside the [`SaveOutcome`].
    pub async fn save(
        &self,
        session: &SessionContext,
        edit: EditSession,
        mut modified: ConsultationModel,
    ) -> ApiResult<SaveOutcome> {
        session.require(Section::Consultation, Action::Write)?;

        let consultation_id = edit.consultation_id();
        if modified.id != consultation_id {
            return Err(ApiError::ValidationError(format!(
                "edit session is for consultation {consultation_id}, got {}",
                modified.id
            )));
        }
        modified.validate()?;
        modified.updated_at = Utc::now();

        let saved = match self.consultations.update(modified).await {
            Ok(saved) => saved,
            Err(e) => {
                warn!(consultation_id, error = %e, "consultation update failed");
                return Ok(SaveOutcome::UpdateFailed { reason: e.to_string() });
            }
        };

        let changes = detect_changes(&edit.before, &saved.snapshot(), &self.tracked);
        let actor = session.actor_name();

        match self.writer.write(consultation_id, &changes, Some(actor)).await {
            Ok(written) => {
                info!(consultation_id, actor, changes = written, "consultation saved");
                Ok(SaveOutcome::Updated { changes })
            }
            Err(e) => {
                warn!(
                    consultation_id,
                    actor,
                    changes = changes.len(),
                    error = %e,
                    "consultation saved but history write failed"
                );
                Ok(SaveOutcome::UpdatedAuditFailed {
                    changes,
                    reason: e.to_string(),
                })
            }
        }
    }

    /// Saves a new consultation. No history is written for creation.
    pub async fn create(&self, session: &SessionContext, new: NewConsultation) -> ApiResult<ConsultationModel> {
        session.require(Section::Consultation, Action::Write)?;
        new.validate()?;

        let new = new.with_defaults(Utc::now().date_naive());
        let created = self
            .consultations
            .create_batch(vec![new])
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| ApiError::InternalError("store returned no consultation".to_string()))?;

        info!(consultation_id = created.id, actor = session.actor_name(), "consultation created");
        Ok(created)
    }

    /// Change history of a consultation, newest first. Empty on fetch failure.
    pub async fn history(
        &self,
        session: &SessionContext,
        consultation_id: i64,
    ) -> ApiResult<Vec<ConsultationHistoryModel>> {
        session.require(Section::Consultation, Action::Read)?;
        Ok(self.reader.read(consultation_id).await)
    }
}
