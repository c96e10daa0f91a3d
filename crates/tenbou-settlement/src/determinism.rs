//! Settlement digests for cross-checking results.
//!
//! Settlement is a pure function, so two parties that agree on the inputs
//! must agree on the output. The digest commits to both: the scores before,
//! the full declaration, and the resulting scores and deltas. A client and
//! server (or two replicas) can exchange 32 bytes instead of the payload.

use sha2::{Digest, Sha256};
use tenbou_types::{Scores, SettlementResult, Win, WinDeclaration, constants};

/// Marker byte for "no loser" (tsumo).
const NO_LOSER: u8 = 0xFF;

/// Compute the digest of one settlement.
///
/// Encoding (all integers little-endian):
/// `domain || before[4] || winner || dealer || win_tag || loser || main ||
/// additional || honba || riichi_sticks || updated[4] || diff[4]`
#[must_use]
pub fn settlement_digest(
    before: &Scores,
    declaration: &WinDeclaration,
    result: &SettlementResult,
) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(constants::SETTLEMENT_DIGEST_DOMAIN);

    for points in before.as_array() {
        hasher.update(points.to_le_bytes());
    }

    hasher.update([u8::from(declaration.winner), u8::from(declaration.dealer)]);
    match declaration.win {
        Win::Tsumo => hasher.update([0u8, NO_LOSER]),
        Win::Ron { loser } => hasher.update([1u8, u8::from(loser)]),
    }
    hasher.update(declaration.cost.main.to_le_bytes());
    hasher.update(declaration.cost.additional.to_le_bytes());
    hasher.update(declaration.honba.to_le_bytes());
    hasher.update(declaration.riichi_sticks.to_le_bytes());

    for points in result.updated_scores.as_array() {
        hasher.update(points.to_le_bytes());
    }
    for delta in &result.diff {
        hasher.update(delta.to_le_bytes());
    }

    let hash = hasher.finalize();
    let mut digest = [0u8; 32];
    digest.copy_from_slice(&hash);
    digest
}

/// Recompute the digest and compare with the expected one.
#[must_use]
pub fn verify_settlement_digest(
    before: &Scores,
    declaration: &WinDeclaration,
    result: &SettlementResult,
    expected: &[u8; 32],
) -> bool {
    settlement_digest(before, declaration, result) == *expected
}

/// Hex form of [`settlement_digest`], for logs and JSON bodies.
#[must_use]
pub fn settlement_digest_hex(
    before: &Scores,
    declaration: &WinDeclaration,
    result: &SettlementResult,
) -> String {
    hex::encode(settlement_digest(before, declaration, result))
}
