//! # tenbou-types
//!
//! Shared types, errors, and configuration for the **Tenbou** point
//! settlement engine.
//!
//! This crate is the leaf dependency of the workspace: every other crate
//! depends on it. It defines:
//!
//! - **Seats and scores**: [`Seat`], [`Scores`]
//! - **Hand cost**: [`Cost`], [`WinType`], [`HandValue`], [`HandValuation`], [`YakuEntry`]
//! - **Win model**: [`Win`], [`WinDeclaration`]
//! - **Settlement output**: [`SettlementResult`], [`ScoreDiff`]
//! - **Wire request**: [`ApplyScoreRequest`]
//! - **Configuration**: [`TableRules`]
//! - **Errors**: [`TenbouError`] with `TB_ERR_` prefix codes, [`InvalidInputReason`]
//! - **Constants**: table-wide defaults

pub mod config;
pub mod constants;
pub mod cost;
pub mod declaration;
pub mod error;
pub mod request;
pub mod seat;
pub mod settlement;

// Re-export all primary types at crate root for ergonomic imports:
//   use tenbou_types::{Seat, Scores, Cost, WinDeclaration, ...};

pub use config::*;
pub use cost::*;
pub use declaration::*;
pub use error::*;
pub use request::*;
pub use seat::*;
pub use settlement::*;

// Constants are accessed via `tenbou_types::constants::FOO`
// (not re-exported to avoid name collisions).
