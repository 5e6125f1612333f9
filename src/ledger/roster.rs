//! Roster ledger: the ordered list of registered names in the sheet's
//! roster column.

use crate::constants::{ERR_INDEX_OUT_OF_RANGE, ROSTER_COL};
use crate::error::{AppError, Result};
use crate::ledger::{attacks, compact_delete};
use crate::sheets::{Range, RowStore};

fn roster_columns() -> Range {
    Range::columns(ROSTER_COL, ROSTER_COL)
}

/// List the team's registered users in row order, skipping blank rows
pub async fn list(store: &dyn RowStore, team: &str) -> Result<Vec<String>> {
    let rows = store.read(team, roster_columns()).await?;
    Ok(rows
        .into_iter()
        .filter_map(|row| row.into_iter().next())
        .filter(|name| !name.trim().is_empty())
        .collect())
}

/// Append a user to the end of the roster.
/// Uniqueness is the caller's concern, not the ledger's.
pub async fn add(store: &dyn RowStore, team: &str, name: &str) -> Result<()> {
    store
        .append(
            team,
            Range::rows(ROSTER_COL, ROSTER_COL, 1, 1),
            vec![vec![name.to_string()]],
        )
        .await?;

    tracing::info!("User {} registered for team {}", name, team);
    Ok(())
}

/// Remove the user at `index` of the caller's roster snapshot `users`, then
/// purge every attack that references the removed name.
///
/// The compaction window is bounded by the snapshot, never a fresh read: a
/// concurrent registration lands below `users.len()` and survives the shift.
/// The purge is a second write with no rollback; if it fails the roster stays
/// compacted and the caller sees the error.
pub async fn remove(store: &dyn RowStore, team: &str, users: &[String], index: usize) -> Result<()> {
    let removed = users
        .get(index)
        .ok_or_else(|| AppError::Validation(ERR_INDEX_OUT_OF_RANGE.to_string()))?;

    compact_delete(store, team, ROSTER_COL, ROSTER_COL, users.len(), index).await?;
    tracing::info!("User {} removed from team {}", removed, team);

    attacks::purge_for_user(store, team, removed).await
}
