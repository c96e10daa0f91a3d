//! Win declarations: everything the settlement engine needs besides the
//! current scores.

use serde::{Deserialize, Serialize};

use crate::{Cost, InvalidInputReason, Result, Seat, TenbouError, WinType};

/// How the hand was won, carrying the discarder for a ron.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Win {
    Tsumo,
    Ron { loser: Seat },
}

impl Win {
    #[must_use]
    pub fn win_type(&self) -> WinType {
        match self {
            Self::Tsumo => WinType::Tsumo,
            Self::Ron { .. } => WinType::Ron,
        }
    }

    #[must_use]
    pub fn loser(&self) -> Option<Seat> {
        match self {
            Self::Tsumo => None,
            Self::Ron { loser } => Some(*loser),
        }
    }
}

/// A complete win declaration for one hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WinDeclaration {
    pub winner: Seat,
    pub dealer: Seat,
    pub cost: Cost,
    pub win: Win,
    /// Repeat-round counter.
    pub honba: u32,
    /// Deposited sticks in the pot, credited to the winner.
    pub riichi_sticks: u32,
}

impl WinDeclaration {
    /// A self-draw win with no honba and an empty pot.
    #[must_use]
    pub fn tsumo(winner: Seat, dealer: Seat, cost: Cost) -> Self {
        Self {
            winner,
            dealer,
            cost,
            win: Win::Tsumo,
            honba: 0,
            riichi_sticks: 0,
        }
    }

    /// A win off `loser`'s discard with no honba and an empty pot.
    #[must_use]
    pub fn ron(winner: Seat, loser: Seat, dealer: Seat, cost: Cost) -> Self {
        Self {
            winner,
            dealer,
            cost,
            win: Win::Ron { loser },
            honba: 0,
            riichi_sticks: 0,
        }
    }

    #[must_use]
    pub fn with_honba(mut self, honba: u32) -> Self {
        self.honba = honba;
        self
    }

    #[must_use]
    pub fn with_riichi_sticks(mut self, riichi_sticks: u32) -> Self {
        self.riichi_sticks = riichi_sticks;
        self
    }

    /// Build a declaration from flat arguments, where the loser is optional
    /// and only meaningful for a ron. A loser passed with a tsumo is ignored.
    ///
    /// # Errors
    /// - [`InvalidInputReason::MissingLoser`] for a ron without a loser
    /// - [`InvalidInputReason::WinnerIsLoser`] for a ron naming the winner
    pub fn from_parts(
        winner: Seat,
        dealer: Seat,
        cost: Cost,
        win_type: WinType,
        honba: u32,
        riichi_sticks: u32,
        loser: Option<Seat>,
    ) -> Result<Self> {
        let win = match win_type {
            WinType::Tsumo => Win::Tsumo,
            WinType::Ron => Win::Ron {
                loser: loser
                    .ok_or_else(|| TenbouError::invalid(InvalidInputReason::MissingLoser))?,
            },
        };
        let declaration = Self {
            winner,
            dealer,
            cost,
            win,
            honba,
            riichi_sticks,
        };
        declaration.validate()?;
        Ok(declaration)
    }

    /// Check the seat relationships that the type system cannot.
    ///
    /// # Errors
    /// Returns [`InvalidInputReason::WinnerIsLoser`] for a ron whose loser is
    /// the winner.
    pub fn validate(&self) -> Result<()> {
        if self.win.loser() == Some(self.winner) {
            return Err(TenbouError::invalid(InvalidInputReason::WinnerIsLoser));
        }
        Ok(())
    }

    #[must_use]
    pub fn win_type(&self) -> WinType {
        self.win.win_type()
    }

    #[must_use]
    pub fn winner_is_dealer(&self) -> bool {
        self.winner == self.dealer
    }
}

/// Test helpers.
#[cfg(any(test, feature = "test-helpers"))]
impl WinDeclaration {
    /// A random, valid declaration: distinct winner and loser on a ron,
    /// costs up to a double yakuman, up to 8 honba and 6 sticks.
    pub fn random<R: rand::Rng>(rng: &mut R) -> Self {
        let seat = |rng: &mut R| Seat::ALL[rng.gen_range(0..Seat::ALL.len())];
        let winner = seat(rng);
        let dealer = seat(rng);
        let cost = Cost::new(rng.gen_range(0..=32_000), rng.gen_range(0..=16_000));
        let win = if rng.gen_bool(0.5) {
            Win::Tsumo
        } else {
            let others: Vec<Seat> = winner.others().collect();
            Win::Ron {
                loser: others[rng.gen_range(0..others.len())],
            }
        };
        Self {
            winner,
            dealer,
            cost,
            win,
            honba: rng.gen_range(0..=8),
            riichi_sticks: rng.gen_range(0..=6),
        }
    }
}
