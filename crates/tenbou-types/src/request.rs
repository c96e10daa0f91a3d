//! Wire form of a settlement request, as the transport layer receives it.
//!
//! Indices arrive as plain integers and the loser is optional, so every
//! structural check happens in [`ApplyScoreRequest::into_parts`] before the
//! engine sees a typed [`WinDeclaration`].

use serde::{Deserialize, Serialize};

use crate::{Cost, Result, Scores, Seat, WinDeclaration, WinType};

/// `POST /apply-score` body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplyScoreRequest {
    /// Current totals, one per seat.
    pub scores: Vec<i64>,
    pub winner_index: i64,
    /// Discarder; required for a ron, ignored for a tsumo.
    #[serde(default)]
    pub loser_index: Option<i64>,
    pub dealer_index: i64,
    pub cost: Cost,
    pub is_tsumo: bool,
    #[serde(default)]
    pub honba: u32,
    #[serde(default)]
    pub riichi_sticks: u32,
}

impl ApplyScoreRequest {
    #[must_use]
    pub fn win_type(&self) -> WinType {
        if self.is_tsumo {
            WinType::Tsumo
        } else {
            WinType::Ron
        }
    }

    /// Validate and convert into engine inputs.
    ///
    /// # Errors
    /// Returns [`crate::TenbouError::InvalidInput`] for a wrong score count,
    /// an out-of-range seat, a ron without a loser, or a ron naming the
    /// winner as loser.
    pub fn into_parts(&self) -> Result<(Scores, WinDeclaration)> {
        let scores = Scores::from_slice(&self.scores)?;
        let winner = Seat::try_from(self.winner_index)?;
        let dealer = Seat::try_from(self.dealer_index)?;
        let loser = match (self.win_type(), self.loser_index) {
            (WinType::Ron, Some(index)) => Some(Seat::try_from(index)?),
            _ => None,
        };
        let declaration = WinDeclaration::from_parts(
            winner,
            dealer,
            self.cost,
            self.win_type(),
            self.honba,
            self.riichi_sticks,
            loser,
        )?;
        Ok((scores, declaration))
    }
}
