use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};

use crate::constants::ERR_EMPTY_NAME;
use crate::error::{AppError, Result};
use crate::ledger::roster;
use crate::routes::{require_field, require_team};
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct ListUsersRequest {
    #[serde(rename = "teamName")]
    pub team_name: String,
}

/// List the team's registered users
///
/// POST because the team name travels in the request body, like every other
/// team-scoped route. Responds with the roster as a plain JSON array in row
/// order.
pub async fn list_users(
    State(state): State<AppState>,
    Json(payload): Json<ListUsersRequest>,
) -> Result<Json<Vec<String>>> {
    require_team(&payload.team_name)?;

    let users = roster::list(state.store.as_ref(), &payload.team_name).await?;
    Ok(Json(users))
}

#[derive(Debug, Deserialize)]
pub struct RegisterUserRequest {
    pub name: String,
    #[serde(rename = "teamName")]
    pub team_name: String,
}

#[derive(Debug, Serialize)]
pub struct RegisterUserResponse {
    pub message: String,
}

/// Register a new user
///
/// Appends the name to the end of the team roster. Returns 409 Conflict if
/// the name is already registered. The check is read-then-append against the
/// remote store, so two concurrent registrations of the same name can still
/// both land; the roster tolerates that the same way it tolerates any
/// last-writer-wins race.
pub async fn register_user(
    State(state): State<AppState>,
    Json(payload): Json<RegisterUserRequest>,
) -> Result<(StatusCode, Json<RegisterUserResponse>)> {
    require_team(&payload.team_name)?;
    require_field(&payload.name, ERR_EMPTY_NAME)?;

    let users = roster::list(state.store.as_ref(), &payload.team_name).await?;
    if users.iter().any(|user| user == &payload.name) {
        tracing::info!(
            "Registration rejected, {} already on team {}",
            payload.name,
            payload.team_name
        );
        return Err(AppError::DuplicateUser);
    }

    roster::add(state.store.as_ref(), &payload.team_name, &payload.name).await?;

    Ok((
        StatusCode::CREATED,
        Json(RegisterUserResponse {
            message: "User registered successfully".to_string(),
        }),
    ))
}

#[derive(Debug, Deserialize)]
pub struct DeleteUserRequest {
    /// Roster snapshot the client was looking at when it picked the index
    pub users: Vec<String>,
    pub index: usize,
    #[serde(rename = "teamName")]
    pub team_name: String,
}

/// Delete the user at `index` of the submitted roster snapshot
///
/// Also removes every recorded attack the user appears in, as attacker or
/// victim. Responds 204 with no body. Returns 400 if the index falls outside
/// the submitted snapshot.
pub async fn delete_user(
    State(state): State<AppState>,
    Json(payload): Json<DeleteUserRequest>,
) -> Result<StatusCode> {
    require_team(&payload.team_name)?;

    roster::remove(
        state.store.as_ref(),
        &payload.team_name,
        &payload.users,
        payload.index,
    )
    .await?;

    Ok(StatusCode::NO_CONTENT)
}
