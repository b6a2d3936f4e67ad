//! # Stage Columns & Snapshots
//!
//! Bucketing partitions the current order set into the four fixed stage
//! columns for display. Within a column, records keep the order the server
//! returned them in; the board never re-sorts.

use crate::model::{OrderRecord, Stage};

/// The four fixed, ordered columns of the board.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StageColumns {
    columns: [Vec<OrderRecord>; 4],
}

impl StageColumns {
    /// Records currently sitting in `stage`'s column, in server order.
    pub fn get(&self, stage: Stage) -> &[OrderRecord] {
        &self.columns[stage.index()]
    }

    /// Total records across all four columns.
    pub fn total(&self) -> usize {
        self.columns.iter().map(Vec::len).sum()
    }

    /// Iterates columns in pipeline order.
    pub fn iter<'a>(&'a self) -> impl Iterator<Item = (Stage, &'a [OrderRecord])> + 'a {
        Stage::ALL.iter().map(|&stage| (stage, self.get(stage)))
    }
}

/// Single-pass partition of `records` into stage columns.
///
/// Every record lands in exactly the column matching its stage; the type
/// system guarantees there is one, so this is a true partition of the input.
pub fn bucket(records: Vec<OrderRecord>) -> StageColumns {
    let mut columns = StageColumns::default();
    for record in records {
        columns.columns[record.stage.index()].push(record);
    }
    columns
}

/// The board state published to subscribers after each successful refresh.
///
/// Snapshots are whole-world replacements: the synchronizer never merges a
/// new server response into an old snapshot. `generation` increments once per
/// applied refresh, so subscribers can tell "unchanged" from "re-fetched".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoardSnapshot {
    pub columns: StageColumns,
    pub generation: u64,
}
