use axum::{extract::State, routing::get, Json, Router};
use tracing::instrument;

use crate::{
    auth::jwt::AuthUser,
    dto::Ack,
    error::AppResult,
    extract::{AppJson, AppPath},
    state::AppState,
};

use super::{
    dto::{SimulationRequest, SimulationResponse},
    services,
};

pub fn simulation_routes() -> Router<AppState> {
    Router::new()
        .route("/simulations", get(list_simulations).post(create_simulation))
        .route(
            "/simulations/:id",
            get(get_simulation)
                .put(update_simulation)
                .delete(delete_simulation),
        )
}

#[instrument(skip(state, payload))]
pub async fn create_simulation(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    AppJson(payload): AppJson<SimulationRequest>,
) -> AppResult<Json<SimulationResponse>> {
    let sim = services::create(&state, user_id, payload).await?;
    Ok(Json(sim.into()))
}

#[instrument(skip(state))]
pub async fn list_simulations(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> AppResult<Json<Vec<SimulationResponse>>> {
    let sims = services::list(&state, user_id).await?;
    Ok(Json(sims.into_iter().map(Into::into).collect()))
}

#[instrument(skip(state))]
pub async fn get_simulation(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    AppPath(id): AppPath<i64>,
) -> AppResult<Json<SimulationResponse>> {
    let sim = services::get(&state, user_id, id).await?;
    Ok(Json(sim.into()))
}

#[instrument(skip(state, payload))]
pub async fn update_simulation(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    AppPath(id): AppPath<i64>,
    AppJson(payload): AppJson<SimulationRequest>,
) -> AppResult<Json<SimulationResponse>> {
    let sim = services::update(&state, user_id, id, payload).await?;
    Ok(Json(sim.into()))
}

#[instrument(skip(state))]
pub async fn delete_simulation(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    AppPath(id): AppPath<i64>,
) -> AppResult<Json<Ack>> {
    services::delete(&state, user_id, id).await?;
    Ok(Json(Ack::ok()))
}
