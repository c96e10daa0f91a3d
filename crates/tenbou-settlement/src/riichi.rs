//! Riichi stick deposits.
//!
//! Declaring riichi moves one stick from the declarer's score into the pot.
//! The pot is paid out later by [`crate::Settler::settle`] to whoever wins.

use tenbou_types::{Result, Scores, Seat, TableRules, TenbouError};

use crate::engine::checked;

/// Scores and pot size after a riichi declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RiichiDeposit {
    pub updated_scores: Scores,
    pub riichi_sticks: u32,
}

/// Deduct one stick from `seat` and add it to the pot.
///
/// # Errors
/// Returns [`TenbouError::ArithmeticOverflow`] if the score or the stick
/// count would overflow.
pub fn deposit_riichi_stick(
    rules: &TableRules,
    scores: &Scores,
    seat: Seat,
    riichi_sticks: u32,
) -> Result<RiichiDeposit> {
    let mut updated = *scores;
    updated[seat] = checked(updated[seat].checked_sub(i64::from(rules.riichi_stick_value)))?;
    let riichi_sticks = riichi_sticks
        .checked_add(1)
        .ok_or(TenbouError::ArithmeticOverflow)?;

    tracing::debug!(seat = %seat, riichi_sticks, "Riichi stick deposited");

    Ok(RiichiDeposit {
        updated_scores: updated,
        riichi_sticks,
    })
}
