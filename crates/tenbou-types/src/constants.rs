//! Table-wide constants for the Tenbou settlement engine.

/// Number of seats at a four-player table.
pub const SEAT_COUNT: usize = 4;

/// Default honba surcharge on a ron, paid entirely by the discarder.
pub const DEFAULT_HONBA_RON_BONUS: u32 = 300;

/// Default honba surcharge on a tsumo, paid by each of the three payers.
pub const DEFAULT_HONBA_TSUMO_BONUS_PER_PAYER: u32 = 100;

/// Value of one riichi stick (deposit) in points.
pub const DEFAULT_RIICHI_STICK_VALUE: u32 = 1000;

/// Total noten penalty moved at an exhaustive draw.
pub const DEFAULT_NOTEN_PENALTY_TOTAL: u32 = 3000;

/// Starting score for each seat in a standard game.
pub const DEFAULT_STARTING_SCORE: i64 = 25_000;

/// Domain separator for settlement digests.
pub const SETTLEMENT_DIGEST_DOMAIN: &[u8] = b"tenbou:settlement:v1:";

/// Version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Engine name.
pub const ENGINE_NAME: &str = "Tenbou";
