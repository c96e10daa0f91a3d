//! Seat identifiers and the four-seat score vector.
//!
//! A [`Seat`] can only be constructed inside `0..=3`, so every index the
//! engine touches is already range-checked. Which wind a seat carries is a
//! labeling convention outside this crate; the engine only cares which seat
//! is the dealer.

use std::fmt;
use std::ops::{Index, IndexMut};

use serde::{Deserialize, Serialize};

use crate::{InvalidInputReason, Result, TenbouError, constants};

// ---------------------------------------------------------------------------
// Seat
// ---------------------------------------------------------------------------

/// One of the four seats at the table (player index `0..=3`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct Seat(u8);

impl Seat {
    /// All four seats in index order.
    pub const ALL: [Seat; constants::SEAT_COUNT] = [Seat(0), Seat(1), Seat(2), Seat(3)];

    /// Create a seat from a player index.
    ///
    /// # Errors
    /// Returns [`InvalidInputReason::SeatOutOfRange`] if `index > 3`.
    pub fn new(index: u8) -> Result<Self> {
        if usize::from(index) < constants::SEAT_COUNT {
            Ok(Self(index))
        } else {
            Err(TenbouError::invalid(InvalidInputReason::SeatOutOfRange(
                i64::from(index),
            )))
        }
    }

    #[must_use]
    pub fn index(self) -> usize {
        usize::from(self.0)
    }

    /// The three other seats, in index order.
    pub fn others(self) -> impl Iterator<Item = Seat> {
        Self::ALL.into_iter().filter(move |s| *s != self)
    }
}

impl TryFrom<i64> for Seat {
    type Error = TenbouError;

    fn try_from(index: i64) -> Result<Self> {
        u8::try_from(index)
            .map_err(|_| TenbouError::invalid(InvalidInputReason::SeatOutOfRange(index)))
            .and_then(Self::new)
    }
}

impl TryFrom<u8> for Seat {
    type Error = TenbouError;

    fn try_from(index: u8) -> Result<Self> {
        Self::new(index)
    }
}

impl From<Seat> for u8 {
    fn from(seat: Seat) -> Self {
        seat.0
    }
}

impl fmt::Display for Seat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "seat:{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// Scores
// ---------------------------------------------------------------------------

/// Current point totals, one per seat, indexed by [`Seat`].
///
/// Scores are signed: a seat may go below zero (tobi) and the engine
/// does not stop the hand when it does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Scores(pub [i64; constants::SEAT_COUNT]);

impl Scores {
    #[must_use]
    pub fn new(points: [i64; constants::SEAT_COUNT]) -> Self {
        Self(points)
    }

    /// Every seat holds the same number of points.
    #[must_use]
    pub fn uniform(points: i64) -> Self {
        Self([points; constants::SEAT_COUNT])
    }

    /// Standard starting position: 25,000 each.
    #[must_use]
    pub fn starting() -> Self {
        Self::uniform(constants::DEFAULT_STARTING_SCORE)
    }

    /// Sum over all four seats.
    #[must_use]
    pub fn total(&self) -> i64 {
        self.0.iter().sum()
    }

    #[must_use]
    pub fn as_array(&self) -> &[i64; constants::SEAT_COUNT] {
        &self.0
    }

    /// Parse a variable-length list (as received on the wire).
    ///
    /// # Errors
    /// Returns [`InvalidInputReason::WrongScoreCount`] unless `points` has
    /// exactly four entries.
    pub fn from_slice(points: &[i64]) -> Result<Self> {
        let arr: [i64; constants::SEAT_COUNT] = points.try_into().map_err(|_| {
            TenbouError::invalid(InvalidInputReason::WrongScoreCount(points.len()))
        })?;
        Ok(Self(arr))
    }
}

impl Default for Scores {
    fn default() -> Self {
        Self::starting()
    }
}

impl Index<Seat> for Scores {
    type Output = i64;

    fn index(&self, seat: Seat) -> &i64 {
        &self.0[seat.index()]
    }
}

impl IndexMut<Seat> for Scores {
    fn index_mut(&mut self, seat: Seat) -> &mut i64 {
        &mut self.0[seat.index()]
    }
}

impl fmt::Display for Scores {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d] = self.0;
        write!(f, "[{a}, {b}, {c}, {d}]")
    }
}
