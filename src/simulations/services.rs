use rust_decimal::{Decimal, RoundingStrategy};
use tracing::{info, warn};

use crate::{
    error::{AppError, AppResult},
    state::AppState,
};

use super::{
    dto::SimulationRequest,
    repo_types::{Simulation, SimulationDraft},
    rules::{annual_rate, effective_rate},
};

/// Amount column scale: NUMERIC(14,2).
const AMOUNT_SCALE: u32 = 2;

fn max_amount() -> Decimal {
    Decimal::from(1_000_000_000_000_i64)
}

/// Validate input and derive `rate_applied` from dates and term.
///
/// Amounts round half away from zero, the same way Postgres casts into NUMERIC.
pub fn draft_from_request(req: SimulationRequest) -> AppResult<SimulationDraft> {
    let amount = req
        .amount
        .round_dp_with_strategy(AMOUNT_SCALE, RoundingStrategy::MidpointAwayFromZero);
    if amount <= Decimal::ZERO {
        return Err(AppError::Validation("amount must be greater than 0".into()));
    }
    if amount >= max_amount() {
        return Err(AppError::Validation("amount is too large".into()));
    }

    let annual = annual_rate(req.start_date, req.end_date);
    Ok(SimulationDraft {
        amount,
        term: req.term,
        start_date: req.start_date,
        end_date: req.end_date,
        rate_applied: effective_rate(req.term, annual),
    })
}

pub async fn create(
    state: &AppState,
    user_id: i64,
    req: SimulationRequest,
) -> AppResult<Simulation> {
    let draft = draft_from_request(req).inspect_err(|e| warn!(error = %e, "invalid simulation"))?;
    let sim = state.simulations.create(user_id, &draft).await?;
    info!(
        user_id = sim.user_id,
        simulation_id = sim.id,
        rate = %sim.rate_applied,
        "simulation created"
    );
    Ok(sim)
}

pub async fn list(state: &AppState, user_id: i64) -> AppResult<Vec<Simulation>> {
    state.simulations.list_by_user(user_id).await
}

pub async fn get(state: &AppState, user_id: i64, id: i64) -> AppResult<Simulation> {
    state
        .simulations
        .get(user_id, id)
        .await?
        .ok_or(AppError::NotFound)
}

pub async fn update(
    state: &AppState,
    user_id: i64,
    id: i64,
    req: SimulationRequest,
) -> AppResult<Simulation> {
    let draft = draft_from_request(req).inspect_err(|e| warn!(error = %e, "invalid simulation"))?;
    let sim = state
        .simulations
        .update(user_id, id, &draft)
        .await?
        .ok_or(AppError::NotFound)?;
    info!(user_id, simulation_id = id, rate = %sim.rate_applied, "simulation updated");
    Ok(sim)
}

pub async fn delete(state: &AppState, user_id: i64, id: i64) -> AppResult<()> {
    if !state.simulations.delete(user_id, id).await? {
        return Err(AppError::NotFound);
    }
    info!(user_id, simulation_id = id, "simulation deleted");
    Ok(())
}
