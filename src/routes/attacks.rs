use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};

use crate::constants::ERR_MISSING_PARTICIPANT;
use crate::error::{AppError, Result};
use crate::ledger::attacks;
use crate::models::Attack;
use crate::routes::require_team;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct ListAttacksRequest {
    #[serde(rename = "teamName")]
    pub team_name: String,
}

#[derive(Debug, Serialize)]
pub struct ListAttacksResponse {
    pub data: Vec<Attack>,
}

/// List the team's recorded attacks in row order
pub async fn list_attacks(
    State(state): State<AppState>,
    Json(payload): Json<ListAttacksRequest>,
) -> Result<Json<ListAttacksResponse>> {
    require_team(&payload.team_name)?;

    let data = attacks::list(state.store.as_ref(), &payload.team_name).await?;
    Ok(Json(ListAttacksResponse { data }))
}

#[derive(Debug, Deserialize)]
pub struct RegisterAttackRequest {
    pub attacker: String,
    pub victim: String,
    #[serde(rename = "teamName")]
    pub team_name: String,
}

#[derive(Debug, Serialize)]
pub struct RegisterAttackResponse {
    pub message: String,
}

/// Record an attack
///
/// Appends (attacker, victim, now) to the team's attack ledger. Participants
/// are not checked against the roster; an attack naming an unregistered user
/// is tolerated and cleaned up by the roster delete cascade if the name ever
/// belonged to someone.
pub async fn register_attack(
    State(state): State<AppState>,
    Json(payload): Json<RegisterAttackRequest>,
) -> Result<(StatusCode, Json<RegisterAttackResponse>)> {
    require_team(&payload.team_name)?;

    if payload.attacker.trim().is_empty() || payload.victim.trim().is_empty() {
        return Err(AppError::Validation(ERR_MISSING_PARTICIPANT.to_string()));
    }

    attacks::add(
        state.store.as_ref(),
        &payload.team_name,
        &payload.attacker,
        &payload.victim,
    )
    .await?;

    Ok((
        StatusCode::CREATED,
        Json(RegisterAttackResponse {
            message: "Attack registered successfully".to_string(),
        }),
    ))
}

#[derive(Debug, Deserialize)]
pub struct DeleteAttackRequest {
    /// Attack ledger snapshot the client picked the index from
    #[serde(rename = "attackData")]
    pub attack_data: Vec<Attack>,
    pub index: usize,
    #[serde(rename = "teamName")]
    pub team_name: String,
}

/// Delete the attack at `index` of the submitted ledger snapshot
///
/// Responds 204 with no body. Returns 400 if the index falls outside the
/// submitted snapshot.
pub async fn delete_attack(
    State(state): State<AppState>,
    Json(payload): Json<DeleteAttackRequest>,
) -> Result<StatusCode> {
    require_team(&payload.team_name)?;

    attacks::remove(
        state.store.as_ref(),
        &payload.team_name,
        &payload.attack_data,
        payload.index,
    )
    .await?;

    Ok(StatusCode::NO_CONTENT)
}
