use axum::{extract::State, routing::post, Json, Router};
use tracing::instrument;

use super::services;
use crate::{app::Ack, error::AppError, state::AppState};

pub fn ledger_routes() -> Router<AppState> {
    Router::new().route("/reset", post(reset_all))
}

/// POST /reset. Wipes pantry and logs; targets survive.
#[instrument(skip(state))]
pub async fn reset_all(State(state): State<AppState>) -> Result<Json<Ack>, AppError> {
    services::reset_all(&state.db).await?;
    Ok(Json(Ack::ok()))
}
