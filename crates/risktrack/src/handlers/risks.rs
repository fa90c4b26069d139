//! Risk handlers.
//!
//! Input is validated here before any repository call; repository results are
//! mapped to HTTP responses through [`ApiError`].

use axum::{
    body::Bytes,
    extract::{rejection::PathRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use risktrack_core::risk::{parse_risk_id, parse_state, CreateRiskRequest, Risk, RiskError};

use crate::{handlers::ApiError, state::AppState};

/// Create a new risk (POST /v1/risk).
///
/// The body is read raw so that an empty body and malformed JSON can be
/// reported separately, and so no particular `Content-Type` is required.
pub async fn create_risk(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<impl IntoResponse, ApiError> {
    let payload = CreateRiskRequest::from_slice(&body)?;
    let risk_state = parse_state(payload.state.as_deref())?;

    let risk = state
        .risk_repo
        .create_risk(
            risk_state,
            payload.title.as_deref().unwrap_or_default(),
            payload.description.as_deref().unwrap_or_default(),
        )
        .await?;

    tracing::info!(risk_id = %risk.id, state = %risk.state, "Created new risk");

    Ok((StatusCode::CREATED, Json(risk)))
}

/// Get a single risk by ID (GET /v1/risk/{id}).
///
/// A path segment that cannot be decoded (e.g. invalid UTF-8 after percent
/// decoding) is reported the same way as a malformed ID.
pub async fn get_risk(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<Risk>, ApiError> {
    let Path(id) = path.map_err(|_| RiskError::InvalidId)?;
    let id = parse_risk_id(&id)?;

    let risk = state.risk_repo.get_risk(&id.to_string()).await?;

    Ok(Json(risk))
}

/// List all risks (GET /v1/risk/).
pub async fn list_risks(State(state): State<AppState>) -> Result<Json<Vec<Risk>>, ApiError> {
    let risks = state.risk_repo.list_risks().await?;

    tracing::debug!(count = risks.len(), "Listed risks");

    Ok(Json(risks))
}
