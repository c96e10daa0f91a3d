//! Error types for the Tenbou settlement engine.
//!
//! All errors use the `TB_ERR_` prefix convention for easy grepping in logs.
//! Error codes are grouped by subsystem:
//! - 1xx: Input errors
//! - 2xx: Upstream (hand-value engine) errors
//! - 3xx: Pricing errors
//! - 6xx: Settlement errors
//! - 9xx: General / internal errors

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::Seat;

/// Machine-readable reason attached to [`TenbouError::InvalidInput`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum InvalidInputReason {
    /// A ron was declared without naming the discarder.
    MissingLoser,
    /// A seat index outside `0..=3`.
    SeatOutOfRange(i64),
    /// A ron names the winner as the discarder.
    WinnerIsLoser,
    /// The score list does not carry exactly four entries.
    WrongScoreCount(usize),
    /// The same seat appears twice where seats must be distinct.
    DuplicateSeat(Seat),
}

impl InvalidInputReason {
    /// Stable snake_case code for client-facing error bodies.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::MissingLoser => "missing_loser",
            Self::SeatOutOfRange(_) => "seat_out_of_range",
            Self::WinnerIsLoser => "winner_is_loser",
            Self::WrongScoreCount(_) => "wrong_score_count",
            Self::DuplicateSeat(_) => "duplicate_seat",
        }
    }
}

impl fmt::Display for InvalidInputReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingLoser => write!(f, "loser index is required for ron"),
            Self::SeatOutOfRange(index) => write!(f, "seat index {index} is outside 0..=3"),
            Self::WinnerIsLoser => write!(f, "winner and loser are the same seat"),
            Self::WrongScoreCount(n) => write!(f, "expected 4 scores, got {n}"),
            Self::DuplicateSeat(seat) => write!(f, "seat {seat} listed more than once"),
        }
    }
}

/// Central error enum for all Tenbou operations.
#[derive(Debug, Error)]
pub enum TenbouError {
    // =================================================================
    // Input Errors (1xx)
    // =================================================================
    /// The request to the engine is structurally malformed.
    #[error("TB_ERR_100: Invalid input: {reason}")]
    InvalidInput { reason: InvalidInputReason },

    // =================================================================
    // Upstream Errors (2xx)
    // =================================================================
    /// The external hand-value engine could not price the hand.
    #[error("TB_ERR_200: Upstream calculation failed: {reason}")]
    UpstreamCalculation { reason: String },

    /// An external collaborator is unreachable or misconfigured.
    #[error("TB_ERR_201: Upstream unavailable: {reason}")]
    UpstreamUnavailable { reason: String },

    // =================================================================
    // Pricing Errors (3xx)
    // =================================================================
    /// Zero han: the hand has no yaku and cannot win.
    #[error("TB_ERR_300: Hand has no yaku")]
    NoYaku,

    /// The han/fu combination does not exist in the cost table.
    #[error("TB_ERR_301: Unsupported hand value: {han} han {fu} fu")]
    UnsupportedHandValue { han: u32, fu: u32 },

    // =================================================================
    // Settlement Errors (6xx)
    // =================================================================
    /// A point transfer would overflow the score range.
    #[error("TB_ERR_600: Arithmetic overflow during settlement")]
    ArithmeticOverflow,

    /// Point conservation invariant violated.
    #[error("TB_ERR_601: Point invariant violation: {reason}")]
    PointInvariantViolation { reason: String },

    // =================================================================
    // General / Internal (9xx)
    // =================================================================
    /// Unrecoverable internal error.
    #[error("TB_ERR_900: Internal error: {0}")]
    Internal(String),

    /// Serialization / deserialization error.
    #[error("TB_ERR_901: Serialization error: {0}")]
    Serialization(String),

    /// Configuration error (invalid rules document, inconsistent values).
    #[error("TB_ERR_902: Configuration error: {0}")]
    Configuration(String),
}

impl TenbouError {
    /// Shorthand for an [`TenbouError::InvalidInput`] with the given reason.
    #[must_use]
    pub fn invalid(reason: InvalidInputReason) -> Self {
        Self::InvalidInput { reason }
    }

    /// Whether the error is the caller's fault (maps to a 4xx at the
    /// transport boundary).
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidInput { .. }
                | Self::NoYaku
                | Self::UnsupportedHandValue { .. }
                | Self::UpstreamCalculation { .. }
                | Self::Serialization(_)
        )
    }
}

/// Crate-wide `Result` alias.
pub type Result<T> = std::result::Result<T, TenbouError>;

impl From<serde_json::Error> for TenbouError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_input_display_contains_reason() {
        let err = TenbouError::invalid(InvalidInputReason::MissingLoser);
        let msg = format!("{err}");
        assert!(msg.starts_with("TB_ERR_100"), "Got: {msg}");
        assert!(msg.contains("loser index is required for ron"));
    }

    #[test]
    fn unsupported_hand_value_display() {
        let err = TenbouError::UnsupportedHandValue { han: 1, fu: 25 };
        let msg = format!("{err}");
        assert!(msg.contains("TB_ERR_301"));
        assert!(msg.contains("1 han 25 fu"));
    }

    #[test]
    fn reason_codes_are_stable() {
        assert_eq!(InvalidInputReason::MissingLoser.code(), "missing_loser");
        assert_eq!(InvalidInputReason::SeatOutOfRange(7).code(), "seat_out_of_range");
        assert_eq!(InvalidInputReason::WrongScoreCount(3).code(), "wrong_score_count");
    }

    #[test]
    fn reason_serializes_machine_readable() {
        let json = serde_json::to_string(&InvalidInputReason::SeatOutOfRange(5)).unwrap();
        assert_eq!(json, r#"{"kind":"seat_out_of_range","value":5}"#);
    }

    #[test]
    fn client_errors_classified() {
        assert!(TenbouError::invalid(InvalidInputReason::WinnerIsLoser).is_client_error());
        assert!(TenbouError::NoYaku.is_client_error());
        assert!(!TenbouError::ArithmeticOverflow.is_client_error());
        assert!(!TenbouError::Internal("x".into()).is_client_error());
    }

    #[test]
    fn all_errors_have_tb_err_prefix() {
        let errors: Vec<Box<dyn std::error::Error>> = vec![
            Box::new(TenbouError::NoYaku),
            Box::new(TenbouError::ArithmeticOverflow),
            Box::new(TenbouError::UpstreamUnavailable {
                reason: "vision".into(),
            }),
            Box::new(TenbouError::Configuration("bad".into())),
            Box::new(TenbouError::PointInvariantViolation {
                reason: "sum".into(),
            }),
        ];
        for err in errors {
            let msg = format!("{err}");
            assert!(
                msg.starts_with("TB_ERR_"),
                "Error missing TB_ERR_ prefix: {msg}"
            );
        }
    }
}
