use anyhow::Context;
use async_trait::async_trait;

use crate::{db::PgRepo, error::AppResult};

use super::repo_types::{Simulation, SimulationDraft};

/// Every id-taking call is scoped by owner: a row owned by someone else is
/// indistinguishable from a missing one.
#[async_trait]
pub trait SimulationRepo: Send + Sync {
    async fn create(&self, user_id: i64, draft: &SimulationDraft) -> AppResult<Simulation>;
    async fn get(&self, user_id: i64, id: i64) -> AppResult<Option<Simulation>>;
    /// Newest first.
    async fn list_by_user(&self, user_id: i64) -> AppResult<Vec<Simulation>>;
    async fn update(
        &self,
        user_id: i64,
        id: i64,
        draft: &SimulationDraft,
    ) -> AppResult<Option<Simulation>>;
    /// `false` when nothing owned by `user_id` matched.
    async fn delete(&self, user_id: i64, id: i64) -> AppResult<bool>;
}

const COLUMNS: &str =
    "id, user_id, amount, term, start_date, end_date, rate_applied, created_at";

#[async_trait]
impl SimulationRepo for PgRepo {
    async fn create(&self, user_id: i64, draft: &SimulationDraft) -> AppResult<Simulation> {
        let sql = format!(
            r#"
            INSERT INTO simulations (user_id, amount, term, start_date, end_date, rate_applied)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING {COLUMNS}
            "#
        );
        let row = sqlx::query_as::<_, Simulation>(&sql)
            .bind(user_id)
            .bind(draft.amount)
            .bind(draft.term)
            .bind(draft.start_date)
            .bind(draft.end_date)
            .bind(draft.rate_applied)
            .fetch_one(&self.pool)
            .await
            .context("insert simulation")?;
        Ok(row)
    }

    async fn get(&self, user_id: i64, id: i64) -> AppResult<Option<Simulation>> {
        let sql = format!("SELECT {COLUMNS} FROM simulations WHERE id = $1 AND user_id = $2");
        let row = sqlx::query_as::<_, Simulation>(&sql)
            .bind(id)
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await
            .context("get simulation")?;
        Ok(row)
    }

    async fn list_by_user(&self, user_id: i64) -> AppResult<Vec<Simulation>> {
        let sql = format!(
            r#"
            SELECT {COLUMNS}
            FROM simulations
            WHERE user_id = $1
            ORDER BY created_at DESC, id DESC
            "#
        );
        let rows = sqlx::query_as::<_, Simulation>(&sql)
            .bind(user_id)
            .fetch_all(&self.pool)
            .await
            .context("list simulations")?;
        Ok(rows)
    }

    async fn update(
        &self,
        user_id: i64,
        id: i64,
        draft: &SimulationDraft,
    ) -> AppResult<Option<Simulation>> {
        let sql = format!(
            r#"
            UPDATE simulations
               SET amount = $3, term = $4, start_date = $5, end_date = $6, rate_applied = $7
             WHERE id = $1 AND user_id = $2
            RETURNING {COLUMNS}
            "#
        );
        let row = sqlx::query_as::<_, Simulation>(&sql)
            .bind(id)
            .bind(user_id)
            .bind(draft.amount)
            .bind(draft.term)
            .bind(draft.start_date)
            .bind(draft.end_date)
            .bind(draft.rate_applied)
            .fetch_optional(&self.pool)
            .await
            .context("update simulation")?;
        Ok(row)
    }

    async fn delete(&self, user_id: i64, id: i64) -> AppResult<bool> {
        let res = sqlx::query("DELETE FROM simulations WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(&self.pool)
            .await
            .context("delete simulation")?;
        Ok(res.rows_affected() > 0)
    }
}
