//! Win settlement.
//!
//! Given the current scores and a [`WinDeclaration`], computes the new
//! totals and per-seat deltas:
//!
//! - **Tsumo**: every other seat pays. The dealer pays `main`; non-dealers
//!   pay `additional`, unless the winner is the dealer, in which case all
//!   three pay `main`. Each payer adds the per-payer honba surcharge.
//! - **Ron**: the discarder pays `main` plus the full honba surcharge.
//!
//! In both cases the winner also collects the riichi sticks in the pot.
//! Those points were deducted when the sticks were deposited, so no seat
//! pays them here.
//!
//! The computation is pure: it reads only its arguments, works on a copy of
//! the scores, and either returns a complete result or an error.

use tenbou_types::{
    ApplyScoreRequest, Result, Scores, Seat, SettlementResult, TableRules, TenbouError, Win,
    WinDeclaration,
};

use crate::conservation::{verify_point_conservation, verify_ron_isolation};
use crate::draw;
use crate::riichi::{self, RiichiDeposit};

/// Settlement engine bound to a set of [`TableRules`].
///
/// Holds no state besides the rules, so a single instance can be shared
/// freely across threads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Settler {
    rules: TableRules,
}

impl Settler {
    #[must_use]
    pub fn new(rules: TableRules) -> Self {
        Self { rules }
    }

    /// Create a settler after validating the rules.
    pub fn try_new(rules: TableRules) -> Result<Self> {
        rules.validate()?;
        Ok(Self { rules })
    }

    #[must_use]
    pub fn rules(&self) -> &TableRules {
        &self.rules
    }

    /// Settle a win.
    ///
    /// # Errors
    /// - `InvalidInput` if the declaration is inconsistent (ron on the
    ///   winner's own discard)
    /// - `ArithmeticOverflow` if a transfer does not fit in `i64`
    /// - `PointInvariantViolation` if the result fails the conservation check
    pub fn settle(&self, scores: &Scores, declaration: &WinDeclaration) -> Result<SettlementResult> {
        if let Err(err) = declaration.validate() {
            tracing::warn!(
                winner = %declaration.winner,
                win = %declaration.win_type(),
                error = %err,
                "Settlement rejected"
            );
            return Err(err);
        }

        let mut updated = *scores;
        let winner = declaration.winner;
        let pot = points(declaration.riichi_sticks, self.rules.riichi_stick_value)?;

        match declaration.win {
            Win::Tsumo => {
                let honba_bonus =
                    points(declaration.honba, self.rules.honba_tsumo_bonus_per_payer)?;
                let mut total_receive: i64 = 0;

                for payer in winner.others() {
                    let base = if declaration.winner_is_dealer() || payer == declaration.dealer {
                        declaration.cost.main
                    } else {
                        declaration.cost.additional
                    };
                    let payment = checked(i64::from(base).checked_add(honba_bonus))?;
                    updated[payer] = checked(updated[payer].checked_sub(payment))?;
                    total_receive = checked(total_receive.checked_add(payment))?;
                }

                total_receive = checked(total_receive.checked_add(pot))?;
                updated[winner] = checked(updated[winner].checked_add(total_receive))?;
            }
            Win::Ron { loser } => {
                let honba_bonus = points(declaration.honba, self.rules.honba_ron_bonus)?;
                let total_loss =
                    checked(i64::from(declaration.cost.main).checked_add(honba_bonus))?;
                let total_gain = checked(total_loss.checked_add(pot))?;

                updated[winner] = checked(updated[winner].checked_add(total_gain))?;
                updated[loser] = checked(updated[loser].checked_sub(total_loss))?;
            }
        }

        let result = SettlementResult::from_transfer(scores, updated)?;
        verify_point_conservation(scores, &result, pot)?;
        if let Win::Ron { loser } = declaration.win {
            verify_ron_isolation(&result, winner, loser, pot)?;
        }

        tracing::debug!(
            winner = %winner,
            dealer = %declaration.dealer,
            win = %declaration.win_type(),
            cost = %declaration.cost,
            honba = declaration.honba,
            riichi_sticks = declaration.riichi_sticks,
            diff = ?result.diff,
            "Win settled"
        );

        Ok(result)
    }

    /// Validate a wire request and settle it.
    pub fn settle_request(&self, request: &ApplyScoreRequest) -> Result<SettlementResult> {
        let (scores, declaration) = request.into_parts().inspect_err(|err| {
            tracing::warn!(error = %err, "Apply-score request rejected");
        })?;
        self.settle(&scores, &declaration)
    }

    /// Settle an exhaustive draw under these rules.
    /// See [`draw::settle_exhaustive_draw`].
    pub fn settle_exhaustive_draw(
        &self,
        scores: &Scores,
        tenpai: &[Seat],
    ) -> Result<SettlementResult> {
        draw::settle_exhaustive_draw(&self.rules, scores, tenpai)
    }

    /// Deposit one riichi stick under these rules.
    /// See [`riichi::deposit_riichi_stick`].
    pub fn deposit_riichi_stick(
        &self,
        scores: &Scores,
        seat: Seat,
        riichi_sticks: u32,
    ) -> Result<RiichiDeposit> {
        riichi::deposit_riichi_stick(&self.rules, scores, seat, riichi_sticks)
    }
}

/// Settle a win under the standard table rules.
pub fn settle(scores: &Scores, declaration: &WinDeclaration) -> Result<SettlementResult> {
    Settler::default().settle(scores, declaration)
}

/// `count * unit` as points.
pub(crate) fn points(count: u32, unit: u32) -> Result<i64> {
    checked(i64::from(count).checked_mul(i64::from(unit)))
}

pub(crate) fn checked(value: Option<i64>) -> Result<i64> {
    value.ok_or(TenbouError::ArithmeticOverflow)
}
