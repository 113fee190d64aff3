//! Claims handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use core_kernel::{ClaimId, Clock, PolicyholderId};
use domain_claims::{ClaimStatus, NewClaim};

use crate::dto::claims::*;
use crate::{error::ApiError, AppState};

/// Submits a claim against an existing policyholder
pub async fn create_claim(
    State(state): State<AppState>,
    Json(request): Json<CreateClaimRequest>,
) -> Result<(StatusCode, Json<ClaimResponse>), ApiError> {
    let policyholder_id: PolicyholderId = request.policyholder_id.parse()?;
    let now = state.clock.now();

    let mut store = state.store.write().await;
    if store.get_policyholder(policyholder_id).is_none() {
        return Err(ApiError::not_found("Policyholder", policyholder_id));
    }

    let claim = store.submit_claim(
        NewClaim {
            policyholder_id,
            amount: request.claim_amount,
            reason: request.reason,
        },
        now,
    )?;

    Ok((StatusCode::CREATED, Json(ClaimResponse::from(&claim))))
}

/// Lists claims
pub async fn list_claims(State(state): State<AppState>) -> Json<Vec<ClaimResponse>> {
    let store = state.store.read().await;
    Json(store.list_claims().into_iter().map(ClaimResponse::from).collect())
}

/// Gets a claim by ID
pub async fn get_claim(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ClaimResponse>, ApiError> {
    let id: ClaimId = id.parse()?;
    let store = state.store.read().await;

    store
        .get_claim(id)
        .map(|claim| Json(ClaimResponse::from(claim)))
        .ok_or_else(|| ApiError::not_found("Claim", id))
}

/// Updates claim status
pub async fn update_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<UpdateStatusRequest>,
) -> Result<Json<ClaimResponse>, ApiError> {
    let id: ClaimId = id.parse()?;
    let status: ClaimStatus = request.status.parse()?;

    let mut store = state.store.write().await;
    if !store.update_claim_status(id, status) {
        return Err(ApiError::not_found("Claim", id));
    }

    store
        .get_claim(id)
        .map(|claim| Json(ClaimResponse::from(claim)))
        .ok_or_else(|| ApiError::Internal(format!("Claim '{}' vanished after update", id)))
}
