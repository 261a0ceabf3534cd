use axum::extract::{FromRequest, FromRequestParts, Query};
use axum::http::request::Parts;
use axum::async_trait;
use serde::Deserialize;
use time::{macros::format_description, Date, OffsetDateTime};

use crate::error::AppError;

/// `Json` whose rejection is an [`AppError::Validation`].
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

#[derive(Debug, Deserialize)]
struct DateParams {
    date: Option<String>,
}

/// `?date=YYYY-MM-DD`, falling back to today (UTC) when absent or blank.
#[derive(Debug, Clone, Copy)]
pub struct DayQuery(pub Date);

#[async_trait]
impl<S> FromRequestParts<S> for DayQuery
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<DateParams>::from_request_parts(parts, state).await?;
        match params.date.as_deref().map(str::trim) {
            None | Some("") => Ok(DayQuery(today())),
            Some(raw) => parse_day(raw).map(DayQuery),
        }
    }
}

pub fn parse_day(raw: &str) -> Result<Date, AppError> {
    Date::parse(raw, format_description!("[year]-[month]-[day]"))
        .map_err(|_| AppError::Validation(format!("Invalid date: {raw} (expected YYYY-MM-DD)")))
}

pub fn today() -> Date {
    OffsetDateTime::now_utc().date()
}
