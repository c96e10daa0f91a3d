//! Exhaustive draw (ryuukyoku) settlement.
//!
//! When the wall runs out, noten seats pay the tenpai seats a fixed penalty:
//! each tenpai seat receives `penalty / k` and each noten seat pays
//! `penalty / (4 - k)`, where `k` is the number of tenpai seats. When all
//! or none are tenpai nothing moves. Honba and riichi sticks stay on the
//! table.

use std::collections::HashSet;

use tenbou_types::{
    InvalidInputReason, Result, Scores, Seat, SettlementResult, TableRules, TenbouError,
    constants,
};

use crate::conservation::verify_point_conservation;
use crate::engine::checked;

/// Settle an exhaustive draw given the seats that are tenpai.
///
/// # Errors
/// - `InvalidInput { DuplicateSeat }` if a seat is listed twice
/// - `ArithmeticOverflow` if a transfer does not fit in `i64`
pub fn settle_exhaustive_draw(
    rules: &TableRules,
    scores: &Scores,
    tenpai: &[Seat],
) -> Result<SettlementResult> {
    let mut seen = HashSet::with_capacity(tenpai.len());
    for seat in tenpai {
        if !seen.insert(*seat) {
            tracing::warn!(seat = %seat, "Draw rejected: duplicate tenpai seat");
            return Err(TenbouError::invalid(InvalidInputReason::DuplicateSeat(*seat)));
        }
    }

    let tenpai_count = seen.len();
    if tenpai_count == 0 || tenpai_count == constants::SEAT_COUNT {
        return Ok(SettlementResult::unchanged(scores));
    }

    let penalty = i64::from(rules.noten_penalty_total);
    let receive = penalty / seat_count(tenpai_count)?;
    let pay = penalty / seat_count(constants::SEAT_COUNT - tenpai_count)?;

    let mut updated = *scores;
    for seat in Seat::ALL {
        updated[seat] = if seen.contains(&seat) {
            checked(updated[seat].checked_add(receive))?
        } else {
            checked(updated[seat].checked_sub(pay))?
        };
    }

    let result = SettlementResult::from_transfer(scores, updated)?;
    verify_point_conservation(scores, &result, 0)?;

    tracing::info!(
        tenpai = tenpai_count,
        receive,
        pay,
        diff = ?result.diff,
        "Exhaustive draw settled"
    );

    Ok(result)
}

fn seat_count(n: usize) -> Result<i64> {
    i64::try_from(n).map_err(|_| TenbouError::ArithmeticOverflow)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seats(indices: &[u8]) -> Vec<Seat> {
        indices.iter().map(|i| Seat::new(*i).unwrap()).collect()
    }

    fn draw(tenpai: &[u8]) -> Result<SettlementResult> {
        settle_exhaustive_draw(&TableRules::standard(), &Scores::starting(), &seats(tenpai))
    }

    #[test]
    fn one_tenpai_collects_from_three() {
        let result = draw(&[2]).unwrap();
        assert_eq!(result.diff, [-1000, -1000, 3000, -1000]);
    }

    #[test]
    fn two_tenpai_split_evenly() {
        let result = draw(&[0, 3]).unwrap();
        assert_eq!(result.diff, [1500, -1500, -1500, 1500]);
    }

    #[test]
    fn three_tenpai_one_pays_all() {
        let result = draw(&[0, 1, 2]).unwrap();
        assert_eq!(result.diff, [1000, 1000, 1000, -3000]);
    }

    #[test]
    fn all_or_none_tenpai_moves_nothing() {
        assert_eq!(draw(&[]).unwrap().diff, [0; 4]);
        assert_eq!(draw(&[3, 1, 0, 2]).unwrap().diff, [0; 4]);
    }

    #[test]
    fn duplicate_seat_rejected() {
        let err = draw(&[1, 1]).unwrap_err();
        assert!(matches!(
            err,
            TenbouError::InvalidInput {
                reason: InvalidInputReason::DuplicateSeat(s)
            } if s.index() == 1
        ));
    }

    #[test]
    fn draw_conserves_points() {
        for tenpai in [&[0u8][..], &[1u8, 2][..], &[0u8, 2, 3][..]] {
            assert_eq!(draw(tenpai).unwrap().diff_sum(), 0);
        }
    }
}
