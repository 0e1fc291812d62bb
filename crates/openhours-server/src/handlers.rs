//! HTTP handlers for the availability API.
//!
//! Each handler validates its inputs, delegates to the core resolver, and
//! maps the outcome onto the wire DTOs.

use axum::extract::{Query, State};
use axum::Json;
use chrono::{NaiveDate, NaiveTime};

use openhours_core::resolve;

use super::dto::{AvailabilityQuery, AvailabilityResponse, HealthResponse};
use super::error::AppError;
use super::state::AppState;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

/// GET /health
///
/// Liveness probe.
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

/// GET /availability?date=YYYY-MM-DD&time=HH:mm
///
/// Answers whether the provider is available at the requested instant and,
/// if not, the next available slot. Missing or unparseable parameters are
/// rejected with 400 before the resolver runs; valid parameters always get
/// a definite answer.
pub async fn get_availability(
    State(state): State<AppState>,
    Query(query): Query<AvailabilityQuery>,
) -> HandlerResult<AvailabilityResponse> {
    let (date_raw, time_raw) = match (query.date, query.time) {
        (Some(date), Some(time)) => (date, time),
        _ => {
            return Err(AppError::BadRequest(
                "date and time parameters are required".to_string(),
            ))
        }
    };

    let date = NaiveDate::parse_from_str(&date_raw, "%Y-%m-%d").map_err(|_| {
        AppError::BadRequest(format!("invalid date '{date_raw}': expected YYYY-MM-DD"))
    })?;
    let time = NaiveTime::parse_from_str(&time_raw, "%H:%M").map_err(|_| {
        AppError::BadRequest(format!("invalid time '{time_raw}': expected HH:mm"))
    })?;

    let availability = resolve(date, time, &state.schedule);
    tracing::debug!(%date, %time, ?availability, "resolved availability query");

    Ok(Json(availability.into()))
}
