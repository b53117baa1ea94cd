//! In-memory record stores for exercising the services without a database.
//!
//! Both stores implement the repository traits for any `sqlx::Database`, count
//! the calls they receive and can be told to fail on demand.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;
use sqlx::Database;

use crate::models::consultation::{
    Carrier, ConsultationHistoryModel, ConsultationModel, ConsultationStatus, InternetSpeed,
    NewConsultation, NewConsultationHistory,
};
use crate::repository::create_batch::CreateBatch;
use crate::repository::load::Load;
use crate::repository::load_history::LoadHistory;
use crate::repository::pagination::{Page, PageRequest};
use crate::repository::update::Update;

type StoreResult<T> = Result<T, Box<dyn std::error::Error + Send + Sync>>;

pub fn create_test_consultation() -> NewConsultation {
    NewConsultation {
        status: Some(ConsultationStatus::New),
        customer_name: "홍길동".to_string(),
        phone: "010-1111-2222".to_string(),
        carrier: Some(Carrier::Kt),
        speed: Some(InternetSpeed::Mbps500),
        has_tv: true,
        tv_plan: Some("베이직".to_string()),
        product_summary: Some("KT 500MB+베이직".to_string()),
        consultation_note: Some("통신사 변경도 고려중".to_string()),
        consultant: Some("정상문".to_string()),
        ..Default::default()
    }
}

#[derive(Default)]
pub struct InMemoryConsultationStore {
    rows: Mutex<BTreeMap<i64, ConsultationModel>>,
    fail_updates: AtomicBool,
    update_calls: AtomicUsize,
}

impl InMemoryConsultationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a row directly, bypassing the repository traits.
    pub fn seed(&self, new: NewConsultation) -> ConsultationModel {
        let mut rows = self.rows.lock().expect("consultation store lock");
        let id = rows.keys().next_back().copied().unwrap_or(0) + 1;
        let model = new.into_model(id, Utc::now());
        rows.insert(id, model.clone());
        model
    }

    pub fn get(&self, id: i64) -> Option<ConsultationModel> {
        self.rows.lock().expect("consultation store lock").get(&id).cloned()
    }

    pub fn fail_updates(&self, fail: bool) {
        self.fail_updates.store(fail, Ordering::SeqCst);
    }

    pub fn update_calls(&self) -> usize {
        self.update_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl<DB: Database> Load<DB, ConsultationModel> for InMemoryConsultationStore {
    async fn load(&self, id: i64) -> StoreResult<Option<ConsultationModel>> {
        let rows = self.rows.lock().map_err(|_| "consultation store lock poisoned")?;
        Ok(rows.get(&id).cloned())
    }
}

#[async_trait]
impl<DB: Database> Update<DB, ConsultationModel> for InMemoryConsultationStore {
    async fn update(&self, mut item: ConsultationModel) -> StoreResult<ConsultationModel> {
        self.update_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_updates.load(Ordering::SeqCst) {
            return Err("simulated update failure".into());
        }

        let mut rows = self.rows.lock().map_err(|_| "consultation store lock poisoned")?;
        let existing = rows.get(&item.id).ok_or("Entity not found")?;
        item.created_at = existing.created_at;
        item.updated_at = Utc::now();
        rows.insert(item.id, item.clone());
        Ok(item)
    }
}

#[async_trait]
impl<DB: Database> CreateBatch<DB, NewConsultation, ConsultationModel> for InMemoryConsultationStore {
    async fn create_batch(&self, items: Vec<NewConsultation>) -> StoreResult<Vec<ConsultationModel>> {
        let mut rows = self.rows.lock().map_err(|_| "consultation store lock poisoned")?;
        let now = Utc::now();
        let mut saved = Vec::with_capacity(items.len());
        for item in items {
            let id = rows.keys().next_back().copied().unwrap_or(0) + 1;
            let model = item.into_model(id, now);
            rows.insert(id, model.clone());
            saved.push(model);
        }
        Ok(saved)
    }
}

#[derive(Default)]
pub struct InMemoryHistoryStore {
    rows: Mutex<Vec<ConsultationHistoryModel>>,
    fail_inserts: AtomicBool,
    fail_reads: AtomicBool,
    insert_calls: AtomicUsize,
    history_reads: AtomicUsize,
}

impl InMemoryHistoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// All rows in insertion order.
    pub fn rows(&self) -> Vec<ConsultationHistoryModel> {
        self.rows.lock().expect("history store lock").clone()
    }

    pub fn fail_inserts(&self, fail: bool) {
        self.fail_inserts.store(fail, Ordering::SeqCst);
    }

    pub fn fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    pub fn insert_calls(&self) -> usize {
        self.insert_calls.load(Ordering::SeqCst)
    }

    pub fn history_reads(&self) -> usize {
        self.history_reads.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl<DB: Database> CreateBatch<DB, NewConsultationHistory, ConsultationHistoryModel> for InMemoryHistoryStore {
    async fn create_batch(&self, items: Vec<NewConsultationHistory>) -> StoreResult<Vec<ConsultationHistoryModel>> {
        self.insert_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_inserts.load(Ordering::SeqCst) {
            return Err("simulated insert failure".into());
        }

        let mut rows = self.rows.lock().map_err(|_| "history store lock poisoned")?;
        let changed_at = Utc::now();
        let mut saved = Vec::with_capacity(items.len());
        for item in items {
            let model = item.into_model(rows.len() as i64 + 1, changed_at);
            rows.push(model.clone());
            saved.push(model);
        }
        Ok(saved)
    }
}

#[async_trait]
impl<DB: Database> LoadHistory<DB, ConsultationHistoryModel> for InMemoryHistoryStore {
    async fn load_history(&self, owner_id: i64, page: PageRequest) -> StoreResult<Page<ConsultationHistoryModel>> {
        self.history_reads.fetch_add(1, Ordering::SeqCst);
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err("simulated fetch failure".into());
        }

        let rows = self.rows.lock().map_err(|_| "history store lock poisoned")?;
        let mut matching: Vec<ConsultationHistoryModel> = rows
            .iter()
            .filter(|r| r.consultation_id == owner_id)
            .cloned()
            .collect();
        matching.sort_by(|a, b| b.changed_at.cmp(&a.changed_at).then(b.id.cmp(&a.id)));

        let total = matching.len();
        let items = matching.into_iter().skip(page.offset).take(page.limit).collect();
        Ok(Page::new(items, total, page.limit, page.offset))
    }
}
