//! Ordered-ledger mutations over the sheet row store.
//!
//! The values API has no delete-row primitive, so removal is simulated by
//! left-compaction: read the suffix window starting at the removed slot,
//! shift every row up one position, blank the freed tail slot, and write the
//! window back. An O(n) rewrite per deletion is the tradeoff the backing
//! store's API imposes.

pub mod attacks;
pub mod roster;

use crate::error::Result;
use crate::sheets::{Range, RowStore};

fn blank_row(width: usize) -> Vec<String> {
    vec![String::new(); width]
}

/// Left-compact a ledger suffix after removing the row at `index`.
///
/// Reads the window `[index, snapshot_len)` (1-based sheet rows
/// `index+1..=snapshot_len`), shifts every row up one slot, blanks the freed
/// tail slot, and writes the whole window back. The window is bounded by the
/// caller's stale snapshot length on purpose: a fresh read here would race
/// with concurrent appends and shift the wrong rows.
///
/// Callers must ensure `index < snapshot_len`.
async fn compact_delete(
    store: &dyn RowStore,
    team: &str,
    start_col: char,
    end_col: char,
    snapshot_len: usize,
    index: usize,
) -> Result<()> {
    let window = Range::rows(start_col, end_col, index as u32 + 1, snapshot_len as u32);
    let width = window.width();

    let rows = store.read(team, window).await?;
    let shifted = shift_window(rows, snapshot_len - index, width);

    store.write(team, window, shifted).await
}

/// Shift window rows up one slot and blank the freed tail.
///
/// The fetched window is first squared to `expected_len` rows of `width`
/// cells: the store omits trailing blank rows on read, and a short row
/// written back raw would leave the old trailing cells in place.
fn shift_window(mut rows: Vec<Vec<String>>, expected_len: usize, width: usize) -> Vec<Vec<String>> {
    rows.resize_with(expected_len, || blank_row(width));
    for row in &mut rows {
        row.resize(width, String::new());
    }

    rows.remove(0);
    rows.push(blank_row(width));
    rows
}
