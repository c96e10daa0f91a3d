//! # tenbou-settlement
//!
//! **Settlement engine**: point transfers after a hand ends.
//!
//! ## Architecture
//!
//! The engine receives the current [`Scores`](tenbou_types::Scores) and a
//! [`WinDeclaration`](tenbou_types::WinDeclaration) and:
//! 1. Validates the declaration (ron on the winner's own discard is rejected)
//! 2. Moves `cost` plus honba surcharges from the payers to the winner
//! 3. Releases the riichi-stick pot to the winner
//! 4. Checks point conservation on the result
//!
//! Nothing is stored between calls. Every function here is a pure
//! transformation of its arguments and is safe to call concurrently.
//!
//! ## Other transfers
//!
//! - **Exhaustive draw**: noten penalty between tenpai and noten seats
//! - **Riichi deposit**: one stick from the declarer into the pot
//! - **Digest**: SHA-256 commitment to a settlement's inputs and outputs

pub mod conservation;
pub mod determinism;
pub mod draw;
pub mod engine;
pub mod riichi;

pub use conservation::{verify_point_conservation, verify_ron_isolation};
pub use determinism::{settlement_digest, settlement_digest_hex, verify_settlement_digest};
pub use draw::settle_exhaustive_draw;
pub use engine::{Settler, settle};
pub use riichi::{RiichiDeposit, deposit_riichi_stick};
