//! In-process repository backing `AppState::fake()` in tests.

use std::sync::Mutex;

use async_trait::async_trait;
use time::OffsetDateTime;

use crate::{
    auth::{repo::UserRepo, repo_types::User},
    error::{AppError, AppResult},
    simulations::{
        repo::SimulationRepo,
        repo_types::{Simulation, SimulationDraft},
    },
};

#[derive(Default)]
struct Tables {
    users: Vec<User>,
    simulations: Vec<Simulation>,
    next_user_id: i64,
    next_simulation_id: i64,
}

#[derive(Default)]
pub struct MemoryRepo {
    tables: Mutex<Tables>,
}

impl MemoryRepo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn simulation_count(&self) -> usize {
        self.tables.lock().unwrap().simulations.len()
    }
}

#[async_trait]
impl UserRepo for MemoryRepo {
    async fn create(&self, email: &str, password_hash: &str) -> AppResult<User> {
        let mut t = self.tables.lock().unwrap();
        if t.users.iter().any(|u| u.email == email) {
            return Err(AppError::Conflict("Email already registered".into()));
        }
        t.next_user_id += 1;
        let user = User {
            id: t.next_user_id,
            email: email.to_string(),
            password_hash: password_hash.to_string(),
            is_active: true,
            created_at: OffsetDateTime::now_utc(),
        };
        t.users.push(user.clone());
        Ok(user)
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let t = self.tables.lock().unwrap();
        Ok(t.users.iter().find(|u| u.email == email).cloned())
    }
}

#[async_trait]
impl SimulationRepo for MemoryRepo {
    async fn create(&self, user_id: i64, draft: &SimulationDraft) -> AppResult<Simulation> {
        let mut t = self.tables.lock().unwrap();
        t.next_simulation_id += 1;
        let sim = Simulation {
            id: t.next_simulation_id,
            user_id,
            amount: draft.amount,
            term: draft.term,
            start_date: draft.start_date,
            end_date: draft.end_date,
            rate_applied: draft.rate_applied,
            created_at: OffsetDateTime::now_utc(),
        };
        t.simulations.push(sim.clone());
        Ok(sim)
    }

    async fn get(&self, user_id: i64, id: i64) -> AppResult<Option<Simulation>> {
        let t = self.tables.lock().unwrap();
        Ok(t.simulations
            .iter()
            .find(|s| s.id == id && s.user_id == user_id)
            .cloned())
    }

    async fn list_by_user(&self, user_id: i64) -> AppResult<Vec<Simulation>> {
        let t = self.tables.lock().unwrap();
        let mut rows: Vec<Simulation> = t
            .simulations
            .iter()
            .filter(|s| s.user_id == user_id)
            .cloned()
            .collect();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(rows)
    }

    async fn update(
        &self,
        user_id: i64,
        id: i64,
        draft: &SimulationDraft,
    ) -> AppResult<Option<Simulation>> {
        let mut t = self.tables.lock().unwrap();
        let Some(sim) = t
            .simulations
            .iter_mut()
            .find(|s| s.id == id && s.user_id == user_id)
        else {
            return Ok(None);
        };
        sim.amount = draft.amount;
        sim.term = draft.term;
        sim.start_date = draft.start_date;
        sim.end_date = draft.end_date;
        sim.rate_applied = draft.rate_applied;
        Ok(Some(sim.clone()))
    }

    async fn delete(&self, user_id: i64, id: i64) -> AppResult<bool> {
        let mut t = self.tables.lock().unwrap();
        let before = t.simulations.len();
        t.simulations.retain(|s| !(s.id == id && s.user_id == user_id));
        Ok(t.simulations.len() != before)
    }
}
