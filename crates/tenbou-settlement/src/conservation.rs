//! Point conservation invariant checker.
//!
//! Invariants enforced after every settlement:
//! ```text
//! ∀ seat: diff[seat] == updated[seat] - before[seat]
//! Σ diff == pot                       (riichi sticks are the only injection)
//! ron:   diff[winner] + diff[loser] == pot, every other diff == 0
//! ```
//!
//! A violation means the transfer arithmetic is wrong, not that the input
//! was bad, so it surfaces as [`TenbouError::PointInvariantViolation`].

use tenbou_types::{Result, Scores, Seat, SettlementResult, TenbouError};

/// Verify a settlement against the scores it started from.
///
/// `pot` is the number of points released from the riichi-stick pot
/// (zero for a draw).
///
/// # Errors
/// Returns [`TenbouError::PointInvariantViolation`] if a delta does not
/// match the scores, or the deltas do not sum to `pot`.
pub fn verify_point_conservation(
    before: &Scores,
    result: &SettlementResult,
    pot: i64,
) -> Result<()> {
    for seat in Seat::ALL {
        let expected = result.updated_scores[seat]
            .checked_sub(before[seat])
            .ok_or(TenbouError::ArithmeticOverflow)?;
        if result.diff_for(seat) != expected {
            return Err(TenbouError::PointInvariantViolation {
                reason: format!(
                    "{seat}: diff {} != updated {} - before {}",
                    result.diff_for(seat),
                    result.updated_scores[seat],
                    before[seat],
                ),
            });
        }
    }

    let net = result
        .diff
        .iter()
        .try_fold(0i64, |acc, d| acc.checked_add(*d))
        .ok_or(TenbouError::ArithmeticOverflow)?;
    if net != pot {
        return Err(TenbouError::PointInvariantViolation {
            reason: format!("net transfer {net} != pot {pot} (diff={:?})", result.diff),
        });
    }
    Ok(())
}

/// Verify that a ron moved points only between winner and loser.
///
/// # Errors
/// Returns [`TenbouError::PointInvariantViolation`] if a bystander's score
/// changed or the pair's deltas do not sum to `pot`.
pub fn verify_ron_isolation(
    result: &SettlementResult,
    winner: Seat,
    loser: Seat,
    pot: i64,
) -> Result<()> {
    for seat in Seat::ALL {
        if seat != winner && seat != loser && result.diff_for(seat) != 0 {
            return Err(TenbouError::PointInvariantViolation {
                reason: format!("bystander {seat} changed by {} on ron", result.diff_for(seat)),
            });
        }
    }
    let pair = result
        .diff_for(winner)
        .checked_add(result.diff_for(loser))
        .ok_or(TenbouError::ArithmeticOverflow)?;
    if pair != pot {
        return Err(TenbouError::PointInvariantViolation {
            reason: format!("winner + loser diff {pair} != pot {pot}"),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seat(i: u8) -> Seat {
        Seat::new(i).unwrap()
    }

    fn result(updated: [i64; 4], diff: [i64; 4]) -> SettlementResult {
        SettlementResult {
            updated_scores: Scores::new(updated),
            diff,
        }
    }

    #[test]
    fn balanced_transfer_passes() {
        let before = Scores::starting();
        let r = result([25_000, 30_200, 20_800, 25_000], [0, 5200, -4200, 0]);
        assert!(verify_point_conservation(&before, &r, 1000).is_ok());
        assert!(verify_ron_isolation(&r, seat(1), seat(2), 1000).is_ok());
    }

    #[test]
    fn unexpected_injection_detected() {
        let before = Scores::starting();
        let r = result([25_000, 30_200, 20_800, 25_000], [0, 5200, -4200, 0]);
        let err = verify_point_conservation(&before, &r, 0).unwrap_err();
        assert!(matches!(err, TenbouError::PointInvariantViolation { .. }));
    }

    #[test]
    fn inconsistent_diff_detected() {
        let before = Scores::starting();
        let r = result([25_000, 30_000, 20_000, 25_000], [0, 5000, -4000, -1000]);
        let err = verify_point_conservation(&before, &r, 0).unwrap_err();
        assert!(
            matches!(&err, TenbouError::PointInvariantViolation { reason } if reason.contains("seat:2")),
            "Got: {err}"
        );
    }

    #[test]
    fn bystander_change_detected() {
        let r = result([24_000, 26_000, 25_000, 25_000], [-1000, 2000, -1000, 0]);
        let err = verify_ron_isolation(&r, seat(1), seat(2), 0).unwrap_err();
        assert!(matches!(err, TenbouError::PointInvariantViolation { .. }));
    }

    #[test]
    fn zero_transfer_passes() {
        let before = Scores::starting();
        let r = SettlementResult::unchanged(&before);
        assert!(verify_point_conservation(&before, &r, 0).is_ok());
    }
}
