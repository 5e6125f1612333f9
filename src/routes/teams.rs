use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::routes::require_team;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct TeamRequest {
    #[serde(rename = "teamName")]
    pub team_name: String,
}

#[derive(Debug, Serialize)]
pub struct TeamExistsResponse {
    pub exists: bool,
}

/// Check whether a team exists
///
/// A team exists when the backing store has a sheet named after it. GET with
/// a JSON body; the browser client sends one and the extractor accepts it.
pub async fn team_exists(
    State(state): State<AppState>,
    Json(payload): Json<TeamRequest>,
) -> Result<Json<TeamExistsResponse>> {
    require_team(&payload.team_name)?;

    let exists = state.store.sheet_exists(&payload.team_name).await?;
    Ok(Json(TeamExistsResponse { exists }))
}

#[derive(Debug, Serialize)]
pub struct CreateTeamResponse {
    pub message: String,
}

/// Create a new team
///
/// Requests a new empty sheet named after the team. Uniqueness is whatever
/// the backing store enforces; creating an existing team fails there and
/// surfaces as 502. Clients are expected to check existence first and
/// confirm.
pub async fn create_team(
    State(state): State<AppState>,
    Json(payload): Json<TeamRequest>,
) -> Result<(StatusCode, Json<CreateTeamResponse>)> {
    require_team(&payload.team_name)?;

    state.store.create_sheet(&payload.team_name).await?;

    Ok((
        StatusCode::CREATED,
        Json(CreateTeamResponse {
            message: "Team sheet created successfully".to_string(),
        }),
    ))
}
