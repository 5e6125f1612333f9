//! Attack ledger: ordered (attacker, victim, timestamp) rows in the sheet's
//! attack columns.

use chrono::{SecondsFormat, Utc};

use crate::constants::{ATTACK_END_COL, ATTACK_START_COL, ATTACK_WIDTH, ERR_INDEX_OUT_OF_RANGE};
use crate::error::{AppError, Result};
use crate::ledger::{blank_row, compact_delete};
use crate::models::Attack;
use crate::sheets::{Range, RowStore};

fn attack_columns() -> Range {
    Range::columns(ATTACK_START_COL, ATTACK_END_COL)
}

/// List the team's attacks in row order, dropping incomplete rows
pub async fn list(store: &dyn RowStore, team: &str) -> Result<Vec<Attack>> {
    let rows = store.read(team, attack_columns()).await?;
    Ok(rows.iter().filter_map(|row| Attack::from_row(row)).collect())
}

/// Record an attack, stamped with the current wall-clock time
pub async fn add(store: &dyn RowStore, team: &str, attacker: &str, victim: &str) -> Result<()> {
    let timestamp = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);
    store
        .append(
            team,
            Range::rows(ATTACK_START_COL, ATTACK_END_COL, 1, 1),
            vec![vec![attacker.to_string(), victim.to_string(), timestamp]],
        )
        .await?;

    tracing::info!("Attack by {} on {} recorded for team {}", attacker, victim, team);
    Ok(())
}

/// Remove the attack at `index` of the caller's snapshot `attacks`.
///
/// The snapshot must be the ledger the client was looking at when it picked
/// the index; it bounds the compaction window.
pub async fn remove(store: &dyn RowStore, team: &str, attacks: &[Attack], index: usize) -> Result<()> {
    if index >= attacks.len() {
        return Err(AppError::Validation(ERR_INDEX_OUT_OF_RANGE.to_string()));
    }

    compact_delete(store, team, ATTACK_START_COL, ATTACK_END_COL, attacks.len(), index).await?;

    tracing::info!("Attack {} removed from team {}", index, team);
    Ok(())
}

/// Remove every attack referencing `user` as attacker or victim, batched
/// into one read and one compacting write over a single snapshot.
pub async fn purge_for_user(store: &dyn RowStore, team: &str, user: &str) -> Result<()> {
    let rows = store.read(team, attack_columns()).await?;
    if rows.is_empty() {
        return Ok(());
    }

    let total = rows.len();
    let (purged, removed) = purge_rows(rows, user);
    if removed == 0 {
        return Ok(());
    }

    store
        .write(
            team,
            Range::rows(ATTACK_START_COL, ATTACK_END_COL, 1, total as u32),
            purged,
        )
        .await?;

    tracing::info!("Purged {} attacks referencing {} from team {}", removed, user, team);
    Ok(())
}

/// Drop raw rows whose attacker or victim cell equals `user`; keep everything
/// else (broken rows included) in order and pad back to the original length
/// with blanks.
fn purge_rows(rows: Vec<Vec<String>>, user: &str) -> (Vec<Vec<String>>, usize) {
    let total = rows.len();
    let mut kept: Vec<Vec<String>> = rows
        .into_iter()
        .filter(|row| {
            row.first().map(String::as_str) != Some(user)
                && row.get(1).map(String::as_str) != Some(user)
        })
        .map(|mut row| {
            row.resize(ATTACK_WIDTH, String::new());
            row
        })
        .collect();

    let removed = total - kept.len();
    kept.resize(total, blank_row(ATTACK_WIDTH));
    (kept, removed)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(cells: &[&[&str]]) -> Vec<Vec<String>> {
        cells
            .iter()
            .map(|row| row.iter().map(|c| c.to_string()).collect())
            .collect()
    }

    #[test]
    fn test_purge_rows_drops_both_roles_and_pads() {
        let rows = grid(&[
            &["bob", "ann", "t1"],
            &["ann", "cho", "t2"],
            &["cho", "bob", "t3"],
        ]);

        let (purged, removed) = purge_rows(rows, "ann");

        assert_eq!(removed, 2);
        assert_eq!(
            purged,
            grid(&[&["cho", "bob", "t3"], &["", "", ""], &["", "", ""]])
        );
    }

    #[test]
    fn test_purge_rows_keeps_unrelated_and_broken_rows() {
        let rows = grid(&[&["bob", "cho", "t1"], &["stray"], &["", "", ""]]);

        let (purged, removed) = purge_rows(rows, "ann");

        assert_eq!(removed, 0);
        assert_eq!(
            purged,
            grid(&[&["bob", "cho", "t1"], &["stray", "", ""], &["", "", ""]])
        );
    }

    #[test]
    fn test_purge_rows_ignores_timestamp_column() {
        // a name in the timestamp cell is not a participant
        let (purged, removed) = purge_rows(grid(&[&["bob", "cho", "ann"]]), "ann");

        assert_eq!(removed, 0);
        assert_eq!(purged, grid(&[&["bob", "cho", "ann"]]));
    }

    #[test]
    fn test_purge_rows_everything_matches() {
        let rows = grid(&[&["ann", "bob", "t1"], &["bob", "ann", "t2"]]);

        let (purged, removed) = purge_rows(rows, "ann");

        assert_eq!(removed, 2);
        assert_eq!(purged, grid(&[&["", "", ""], &["", "", ""]]));
    }
}
