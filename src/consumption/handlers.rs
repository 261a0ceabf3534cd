use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use tracing::{instrument, warn};

use super::dto::ConsumeRequest;
use super::repo_types::{Consumption, ConsumptionLogEntry};
use super::services;
use crate::{
    app::Ack,
    error::AppError,
    extractors::{today, AppJson, DayQuery},
    state::AppState,
};

pub fn consumption_routes() -> Router<AppState> {
    Router::new()
        .route("/consume", post(consume))
        .route("/logs", get(list_logs))
}

/// POST /consume { item_id, quantity, note? }
#[instrument(skip(state, body))]
pub async fn consume(
    State(state): State<AppState>,
    AppJson(body): AppJson<ConsumeRequest>,
) -> Result<Json<Ack>, AppError> {
    let consumption = Consumption::try_from(body).inspect_err(|e| {
        warn!(error = %e, "rejected consumption");
    })?;
    services::consume(&state.db, consumption, today()).await?;
    Ok(Json(Ack::ok()))
}

/// GET /logs?date=YYYY-MM-DD
#[instrument(skip(state))]
pub async fn list_logs(
    State(state): State<AppState>,
    DayQuery(day): DayQuery,
) -> Result<Json<Vec<ConsumptionLogEntry>>, AppError> {
    Ok(Json(services::logs_for_day(&state.db, day).await?))
}
