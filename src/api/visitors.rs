//! Visitor counter API endpoints

use axum::{extract::State, Json};
use chrono::Utc;

use crate::{error::AppResult, models::VisitorCountResponse};

use super::ClientIdentifier;

/// Get the current visitor count
#[utoipa::path(
    get,
    path = "/visitors/count",
    tag = "visitors",
    responses(
        (status = 200, description = "Current visitor count", body = VisitorCountResponse),
        (status = 500, description = "Store failure", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_count(
    State(state): State<crate::AppState>,
) -> AppResult<Json<VisitorCountResponse>> {
    let count = state.services.visitors.count().await?;
    Ok(Json(VisitorCountResponse { count }))
}

/// Count a visit from the calling client (once per client per UTC day)
#[utoipa::path(
    post,
    path = "/visitors/increment",
    tag = "visitors",
    responses(
        (status = 200, description = "Visitor count after recording the visit", body = VisitorCountResponse),
        (status = 500, description = "Store failure", body = crate::error::ErrorResponse)
    )
)]
pub async fn increment(
    State(state): State<crate::AppState>,
    ClientIdentifier(client): ClientIdentifier,
) -> AppResult<Json<VisitorCountResponse>> {
    let today = Utc::now().date_naive();
    let count = state.services.visitors.record_visit(&client, today).await?;
    Ok(Json(VisitorCountResponse { count }))
}
