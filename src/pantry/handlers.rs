use axum::{
    extract::{Path, State},
    http::{header, HeaderMap, HeaderValue, StatusCode},
    routing::get,
    Json, Router,
};
use tracing::{instrument, warn};

use super::dto::{CreatePantryItemRequest, CreatedPantryItemResponse, UpdatePantryItemRequest};
use super::repo_types::{NewPantryItem, PantryItem, PantryItemPatch};
use super::services;
use crate::{app::Ack, error::AppError, extractors::AppJson, state::AppState};

pub fn pantry_routes() -> Router<AppState> {
    Router::new()
        .route("/pantry", get(list_pantry).post(add_pantry_item))
        .route(
            "/pantry/:id",
            get(get_pantry_item)
                .put(update_pantry_item)
                .delete(delete_pantry_item),
        )
}

#[instrument(skip(state))]
pub async fn list_pantry(State(state): State<AppState>) -> Result<Json<Vec<PantryItem>>, AppError> {
    Ok(Json(services::list_items(&state.db).await?))
}

#[instrument(skip(state))]
pub async fn get_pantry_item(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<PantryItem>, AppError> {
    Ok(Json(services::get_item(&state.db, id).await?))
}

/// POST /pantry
#[instrument(skip(state, body))]
pub async fn add_pantry_item(
    State(state): State<AppState>,
    AppJson(body): AppJson<CreatePantryItemRequest>,
) -> Result<(StatusCode, HeaderMap, Json<CreatedPantryItemResponse>), AppError> {
    let item = NewPantryItem::try_from(body).inspect_err(|e| {
        warn!(error = %e, "rejected pantry item");
    })?;
    let id = services::add_item(&state.db, item).await?;

    let mut headers = HeaderMap::new();
    if let Ok(location) = HeaderValue::from_str(&format!("/api/pantry/{}", id)) {
        headers.insert(header::LOCATION, location);
    }

    Ok((
        StatusCode::CREATED,
        headers,
        Json(CreatedPantryItemResponse { id }),
    ))
}

/// PUT /pantry/:id
#[instrument(skip(state, body))]
pub async fn update_pantry_item(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    AppJson(body): AppJson<UpdatePantryItemRequest>,
) -> Result<Json<Ack>, AppError> {
    let patch = PantryItemPatch::try_from(body).inspect_err(|e| {
        warn!(error = %e, item_id = id, "rejected pantry update");
    })?;
    services::update_item(&state.db, id, patch).await?;
    Ok(Json(Ack::ok()))
}

#[instrument(skip(state))]
pub async fn delete_pantry_item(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Ack>, AppError> {
    services::delete_item(&state.db, id).await?;
    Ok(Json(Ack::ok()))
}
