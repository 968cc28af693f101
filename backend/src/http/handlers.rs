//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the
//! service layer for business logic.

use axum::{
    extract::State,
    http::{header, HeaderMap, HeaderValue, StatusCode, Uri},
    response::{IntoResponse, Response},
    Json,
};
use std::sync::Arc;

use super::dto::{DashboardData, DashboardRequest, DatasetSummary, FilterOptions, HealthResponse};
use super::error::AppError;
use super::state::AppState;
use crate::io::Dataset;
use crate::models::CategoryDomain;
use crate::routes::export::{attachment_disposition, etag_matches, EXPORT_CONTENT_TYPE};
use crate::services;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
///
/// Health check endpoint reporting which dataset is being served.
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    let dataset = &state.dataset;
    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: "v1".to_string(),
        dataset: DatasetSummary {
            rows: dataset.len(),
            checksum: dataset.checksum().to_string(),
            source: dataset.source_name().to_string(),
        },
    }))
}

// =============================================================================
// Dashboard
// =============================================================================

/// GET /v1/filters
///
/// Sidebar options: categorical domains and the default date window.
pub async fn get_filters(State(state): State<AppState>) -> HandlerResult<FilterOptions> {
    Ok(Json(services::filter_options(
        &state.dataset,
        &state.settings.title,
    )))
}

/// POST /v1/dashboard
///
/// Run one render pass for the submitted sidebar state.
pub async fn render_dashboard(
    State(state): State<AppState>,
    Json(request): Json<DashboardRequest>,
) -> HandlerResult<DashboardData> {
    validate_request(&state.dataset, &request)?;

    let dataset = Arc::clone(&state.dataset);
    let data = tokio::task::spawn_blocking(move || {
        let criteria = request.to_criteria(&dataset);
        services::render(&dataset, &criteria)
    })
    .await?;

    Ok(Json(data))
}

/// Reject category values the dataset never contains.
fn validate_request(dataset: &Dataset, request: &DashboardRequest) -> Result<(), AppError> {
    check_known("accident type", &request.accident_types, dataset.accident_types())?;
    if !request.select_all_light_conditions {
        check_known(
            "light condition",
            &request.light_conditions,
            dataset.light_conditions(),
        )?;
    }
    Ok(())
}

fn check_known(what: &str, values: &[String], domain: &CategoryDomain) -> Result<(), AppError> {
    match values.iter().find(|v| !domain.contains(v.as_str())) {
        Some(unknown) => Err(AppError::BadRequest(format!(
            "Unknown {}: {:?}",
            what, unknown
        ))),
        None => Ok(()),
    }
}

// =============================================================================
// Export
// =============================================================================

/// GET /v1/export
///
/// Download the full, unfiltered source dataset as CSV.
pub async fn export_csv(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    let etag = format!("\"{}\"", state.dataset.checksum());

    let cached = headers
        .get(header::IF_NONE_MATCH)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| etag_matches(v, &etag));
    if cached {
        return Ok((StatusCode::NOT_MODIFIED, [(header::ETAG, etag)]).into_response());
    }

    let dataset = Arc::clone(&state.dataset);
    let body = tokio::task::spawn_blocking(move || dataset.export_csv()).await??;

    let disposition = HeaderValue::from_str(&attachment_disposition(
        &state.settings.export_file_name,
    ))
    .map_err(|e| AppError::Internal(format!("Invalid export file name: {}", e)))?;

    Ok((
        [
            (header::CONTENT_TYPE, HeaderValue::from_static(EXPORT_CONTENT_TYPE)),
            (header::CONTENT_DISPOSITION, disposition),
            (
                header::ETAG,
                HeaderValue::from_str(&etag)
                    .map_err(|e| AppError::Internal(format!("Invalid ETag: {}", e)))?,
            ),
        ],
        body,
    )
        .into_response())
}

// =============================================================================
// Fallback
// =============================================================================

/// Any path without a route.
pub async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {}", uri.path()))
}
