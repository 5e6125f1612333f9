use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::ledger::{attacks, roster};
use crate::models::{compute_stats, most_attacked, UserStats};
use crate::routes::require_team;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct StatsRequest {
    #[serde(rename = "teamName")]
    pub team_name: String,
}

#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub stats: Vec<UserStats>,
    #[serde(rename = "mostAttacked")]
    pub most_attacked: Vec<String>,
}

/// Per-user attack totals for a team
///
/// Reads the roster and the attack ledger once each and derives the ranking
/// server side: most attacked first, ties broken by fewest attacks made. The
/// most-attacked set is empty until the first attack is recorded.
pub async fn team_stats(
    State(state): State<AppState>,
    Json(payload): Json<StatsRequest>,
) -> Result<Json<StatsResponse>> {
    require_team(&payload.team_name)?;

    let store = state.store.as_ref();
    let users = roster::list(store, &payload.team_name).await?;
    let attacks = attacks::list(store, &payload.team_name).await?;

    let stats = compute_stats(&users, &attacks);
    let most_attacked = most_attacked(&stats);

    Ok(Json(StatsResponse {
        stats,
        most_attacked,
    }))
}
