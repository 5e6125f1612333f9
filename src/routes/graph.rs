use axum::{extract::State, Json};
use serde::Deserialize;

use crate::error::Result;
use crate::ledger::{attacks, roster};
use crate::models::{build_graph, AttackGraph};
use crate::routes::require_team;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct GraphRequest {
    #[serde(rename = "teamName")]
    pub team_name: String,
}

/// Directed attack graph for a team
///
/// One node per roster user, one edge per distinct (attacker, victim) pair
/// weighted by how often it occurred. Recomputed from scratch on every call;
/// the snapshot is whatever the two reads observe.
pub async fn attack_graph(
    State(state): State<AppState>,
    Json(payload): Json<GraphRequest>,
) -> Result<Json<AttackGraph>> {
    require_team(&payload.team_name)?;

    let store = state.store.as_ref();
    let users = roster::list(store, &payload.team_name).await?;
    let attacks = attacks::list(store, &payload.team_name).await?;

    Ok(Json(build_graph(&users, &attacks)))
}
