//! Han/fu cost table.
//!
//! Base points are `fu × 2^(han + 2)`, capped at mangan (2000). Limit hands
//! by han count ignore fu. Payments are multiples of the base rounded up to
//! the next 100:
//!
//! | Win          | Child winner                    | Dealer winner     |
//! |--------------|---------------------------------|-------------------|
//! | Ron          | 4 × base                        | 6 × base          |
//! | Tsumo        | dealer 2 × base, others 1 × base| each 2 × base     |

use tenbou_types::{Cost, HandValue, Result, TenbouError, WinType};

use crate::limit::LimitHand;

/// Base points cap for hands below 5 han.
const MANGAN_BASE: u32 = 2000;

/// Highest fu value a hand can reach.
const MAX_FU: u32 = 110;

/// Round up to the next multiple of 100.
fn ceil100(points: u32) -> u32 {
    points.div_ceil(100) * 100
}

/// Whether `value` is a han/fu combination that can occur.
///
/// - fu is 20, 25, or a multiple of 10 from 30 to 110
/// - 1 han needs at least 30 fu
/// - 20 fu is only reachable by tsumo (pinfu tsumo)
fn is_valid_fu(value: HandValue, win_type: WinType) -> bool {
    let HandValue { han, fu } = value;
    let shape = fu == 20 || fu == 25 || (fu % 10 == 0 && (30..=MAX_FU).contains(&fu));
    let reachable = match fu {
        20 => han >= 2 && win_type == WinType::Tsumo,
        25 => han >= 2,
        _ => true,
    };
    shape && reachable
}

/// Base points for a hand, or `None` if the han/fu pair cannot occur.
///
/// # Errors
/// Returns [`TenbouError::NoYaku`] for zero han.
pub fn base_points(value: HandValue, win_type: WinType) -> Result<Option<u32>> {
    if value.han == 0 {
        return Err(TenbouError::NoYaku);
    }
    if let Some(limit) = LimitHand::from_han(value.han) {
        return Ok(Some(limit.base_points()));
    }
    if !is_valid_fu(value, win_type) {
        return Ok(None);
    }
    // han <= 4 here, so the shift stays below 2^6.
    let raw = value.fu << (value.han + 2);
    Ok(Some(raw.min(MANGAN_BASE)))
}

/// Tier of a hand, including fu-driven mangan (e.g. 4 han 40 fu).
pub fn limit_for(value: HandValue, win_type: WinType) -> Result<Option<LimitHand>> {
    if let Some(limit) = LimitHand::from_han(value.han) {
        return Ok(Some(limit));
    }
    Ok(base_points(value, win_type)?
        .filter(|base| *base >= MANGAN_BASE)
        .map(|_| LimitHand::Mangan))
}

/// Price a hand for settlement.
///
/// # Errors
/// - [`TenbouError::NoYaku`] for zero han
/// - [`TenbouError::UnsupportedHandValue`] for a han/fu pair that cannot occur
pub fn cost_for(value: HandValue, winner_is_dealer: bool, win_type: WinType) -> Result<Cost> {
    let Some(base) = base_points(value, win_type)? else {
        tracing::debug!(han = value.han, fu = value.fu, win = %win_type, "Unsupported hand value");
        return Err(TenbouError::UnsupportedHandValue {
            han: value.han,
            fu: value.fu,
        });
    };

    let cost = match (win_type, winner_is_dealer) {
        (WinType::Ron, false) => Cost::ron(ceil100(base * 4)),
        (WinType::Ron, true) => Cost::ron(ceil100(base * 6)),
        (WinType::Tsumo, false) => Cost::new(ceil100(base * 2), ceil100(base)),
        (WinType::Tsumo, true) => Cost::dealer_tsumo(ceil100(base * 2)),
    };
    Ok(cost)
}
