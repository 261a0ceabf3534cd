use axum::{extract::State, routing::get, Json, Router};
use tracing::{instrument, warn};

use super::dto::SetTargetsRequest;
use super::repo_types::{DailySummary, TargetRecord};
use super::services;
use crate::{
    app::Ack,
    error::AppError,
    extractors::{AppJson, DayQuery},
    nutrition::Macros,
    state::AppState,
};

pub fn targets_routes() -> Router<AppState> {
    Router::new()
        .route("/macros/targets", get(get_targets).post(set_targets))
        .route("/macros/summary", get(summary))
}

#[instrument(skip(state))]
pub async fn get_targets(State(state): State<AppState>) -> Result<Json<TargetRecord>, AppError> {
    Ok(Json(services::get_targets(&state.db).await?))
}

/// POST /macros/targets { calories, protein, carbs, fat }
#[instrument(skip(state, body))]
pub async fn set_targets(
    State(state): State<AppState>,
    AppJson(body): AppJson<SetTargetsRequest>,
) -> Result<Json<Ack>, AppError> {
    let targets = Macros::try_from(body).inspect_err(|e| {
        warn!(error = %e, "rejected targets");
    })?;
    services::set_targets(&state.db, targets).await?;
    Ok(Json(Ack::ok()))
}

/// GET /macros/summary?date=YYYY-MM-DD
#[instrument(skip(state))]
pub async fn summary(
    State(state): State<AppState>,
    DayQuery(day): DayQuery,
) -> Result<Json<DailySummary>, AppError> {
    Ok(Json(services::daily_summary(&state.db, day).await?))
}
