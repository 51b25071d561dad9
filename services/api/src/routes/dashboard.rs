//! Public reporting endpoints (v2 dashboard)
//!
//! These routes are read-only and unauthenticated. All of them accept
//! optional `year`, `province`, and `sector` query filters which are
//! passed through verbatim to the aggregation repository.

use axum::{
    Json, Router,
    extract::{Query, State},
    response::IntoResponse,
    routing::get,
};
use tracing::error;

use crate::{
    error::{ApiError, ApiResult},
    models::dashboard::DashboardQuery,
    state::AppState,
};

/// Create the router for the v2 reporting endpoints
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/v2/dashboard/overview", get(overview))
        .route("/api/v2/dashboard/projects", get(projects))
        .route("/api/v2/dashboard/sectors", get(sectors))
        .route("/api/v2/dashboard/monitoring", get(monitoring))
        .route("/api/v2/dashboard/evaluation", get(evaluation))
        .route("/api/v2/dashboard/accountability", get(accountability))
        .route("/api/v2/dashboard/knowledge", get(knowledge))
        .route("/api/v2/dashboard/filters", get(filters))
}

/// Portfolio-wide overview statistics
pub async fn overview(
    State(state): State<AppState>,
    Query(query): Query<DashboardQuery>,
) -> ApiResult<impl IntoResponse> {
    let stats = state.dashboard.overview(&query).await.map_err(|e| {
        error!("Failed to load overview statistics: {}", e);
        ApiError::Internal("Could not load overview statistics".to_string())
    })?;

    Ok(Json(stats))
}

/// Filtered project rows
pub async fn projects(
    State(state): State<AppState>,
    Query(query): Query<DashboardQuery>,
) -> ApiResult<impl IntoResponse> {
    let rows = state.dashboard.projects(&query).await.map_err(|e| {
        error!("Failed to load projects: {}", e);
        ApiError::Internal("Could not load projects".to_string())
    })?;

    Ok(Json(rows))
}

/// Per-sector project breakdown
pub async fn sectors(
    State(state): State<AppState>,
    Query(query): Query<DashboardQuery>,
) -> ApiResult<impl IntoResponse> {
    let rows = state.dashboard.sectors(&query).await.map_err(|e| {
        error!("Failed to load sector breakdown: {}", e);
        ApiError::Internal("Could not load the sector breakdown".to_string())
    })?;

    Ok(Json(rows))
}

/// Enumerator totals for the monitoring view
pub async fn monitoring(
    State(state): State<AppState>,
    Query(query): Query<DashboardQuery>,
) -> ApiResult<impl IntoResponse> {
    let stats = state.dashboard.monitoring(&query).await.map_err(|e| {
        error!("Failed to load monitoring statistics: {}", e);
        ApiError::Internal("Could not load monitoring statistics".to_string())
    })?;

    Ok(Json(stats))
}

/// Success-story totals for the evaluation view
pub async fn evaluation(
    State(state): State<AppState>,
    Query(query): Query<DashboardQuery>,
) -> ApiResult<impl IntoResponse> {
    let stats = state.dashboard.evaluation(&query).await.map_err(|e| {
        error!("Failed to load evaluation statistics: {}", e);
        ApiError::Internal("Could not load evaluation statistics".to_string())
    })?;

    Ok(Json(stats))
}

/// Complaint totals for the accountability view
pub async fn accountability(
    State(state): State<AppState>,
    Query(query): Query<DashboardQuery>,
) -> ApiResult<impl IntoResponse> {
    let stats = state.dashboard.accountability(&query).await.map_err(|e| {
        error!("Failed to load accountability statistics: {}", e);
        ApiError::Internal("Could not load accountability statistics".to_string())
    })?;

    Ok(Json(stats))
}

/// Filtered knowledge products
pub async fn knowledge(
    State(state): State<AppState>,
    Query(query): Query<DashboardQuery>,
) -> ApiResult<impl IntoResponse> {
    let rows = state.dashboard.knowledge(&query).await.map_err(|e| {
        error!("Failed to load knowledge products: {}", e);
        ApiError::Internal("Could not load knowledge products".to_string())
    })?;

    Ok(Json(rows))
}

/// Distinct filter values offered to reporting clients
pub async fn filters(State(state): State<AppState>) -> ApiResult<impl IntoResponse> {
    let options = state.dashboard.filter_options().await.map_err(|e| {
        error!("Failed to load filter options: {}", e);
        ApiError::Internal("Could not load filter options".to_string())
    })?;

    Ok(Json(options))
}
