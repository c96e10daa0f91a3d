//! Settlement output.

use serde::{Deserialize, Serialize};

use crate::{Result, Scores, Seat, TenbouError, constants};

/// Per-seat point deltas produced by one settlement.
pub type ScoreDiff = [i64; constants::SEAT_COUNT];

/// Result of one settlement: the new totals and what changed.
///
/// Serialized as `{"scores": [..], "diff": [..]}`, the shape the client
/// application renders directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SettlementResult {
    #[serde(rename = "scores")]
    pub updated_scores: Scores,
    pub diff: ScoreDiff,
}

impl SettlementResult {
    /// Build a result from the scores before and after the transfer.
    ///
    /// # Errors
    /// Returns [`TenbouError::ArithmeticOverflow`] if a delta does not fit.
    pub fn from_transfer(before: &Scores, after: Scores) -> Result<Self> {
        let mut diff = [0i64; constants::SEAT_COUNT];
        for seat in Seat::ALL {
            diff[seat.index()] = after[seat]
                .checked_sub(before[seat])
                .ok_or(TenbouError::ArithmeticOverflow)?;
        }
        Ok(Self {
            updated_scores: after,
            diff,
        })
    }

    /// A settlement that moves no points.
    #[must_use]
    pub fn unchanged(scores: &Scores) -> Self {
        Self {
            updated_scores: *scores,
            diff: [0; constants::SEAT_COUNT],
        }
    }

    #[must_use]
    pub fn diff_for(&self, seat: Seat) -> i64 {
        self.diff[seat.index()]
    }

    /// Net points injected into the table (riichi sticks leaving the pot).
    #[must_use]
    pub fn diff_sum(&self) -> i64 {
        self.diff.iter().sum()
    }
}
