use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
    http::StatusCode,
};

use crate::{
    adapters::inbound::http::{
        dto::{TrackQueryDto, TrackResponseDto},
        router::AppState,
    },
    domain::errors::{LookupError, ValidationError},
};

/// Handle a mobile number lookup
pub async fn track_mobile(
    State(app_state): State<AppState>,
    query: Result<Query<TrackQueryDto>, QueryRejection>,
) -> Result<Json<TrackResponseDto>, (StatusCode, Json<TrackResponseDto>)> {
    let lookup_service = &app_state.lookup_service;

    // A malformed query string is reported like any other bad input
    let Query(query) = query.map_err(|rejection| {
        lookup_failure(&LookupError::InvalidMobile(ValidationError::MalformedQuery(
            rejection.body_text(),
        )))
    })?;

    let record = lookup_service
        .track(query.mobile().unwrap_or_default())
        .await
        .map_err(|e| lookup_failure(&e))?;

    Ok(Json(TrackResponseDto::found(record)))
}

fn lookup_failure(error: &LookupError) -> (StatusCode, Json<TrackResponseDto>) {
    (
        StatusCode::from(error),
        Json(TrackResponseDto::from_lookup_error(error)),
    )
}
