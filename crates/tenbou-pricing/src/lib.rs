//! # tenbou-pricing
//!
//! **Manual cost table** for hands whose han and fu were entered by hand
//! instead of being computed by the external hand-value engine.
//!
//! The table produces the same [`Cost`] shape the engine replies with, so
//! settlement never knows which source priced the hand.

pub mod limit;
pub mod table;

pub use limit::LimitHand;
pub use table::{base_points, cost_for, limit_for};

use tenbou_types::{Cost, HandValuation, HandValue, WinType};

/// Price a manually entered hand into the same reply shape the external
/// hand-value engine uses: on failure the reply carries an `error` and no
/// cost, so [`HandValuation::settle_cost`] refuses it.
#[must_use]
pub fn manual_valuation(value: HandValue, winner_is_dealer: bool, win_type: WinType) -> HandValuation {
    let (cost, error): (Option<Cost>, Option<String>) =
        match cost_for(value, winner_is_dealer, win_type) {
            Ok(cost) => (Some(cost), None),
            Err(err) => (None, Some(err.to_string())),
        };
    HandValuation {
        han: value.han,
        fu: value.fu,
        cost,
        yaku: Vec::new(),
        error,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tenbou_types::TenbouError;

    #[test]
    fn manual_valuation_settles() {
        let valuation = manual_valuation(HandValue::new(3, 30), false, WinType::Ron);
        assert_eq!(valuation.settle_cost().unwrap(), Cost::ron(3900));
    }

    #[test]
    fn manual_valuation_error_blocks_settlement() {
        let valuation = manual_valuation(HandValue::new(0, 30), false, WinType::Ron);
        assert!(valuation.cost.is_none());
        assert!(valuation.error.as_deref().unwrap().contains("TB_ERR_300"));
        assert!(matches!(
            valuation.settle_cost(),
            Err(TenbouError::UpstreamCalculation { .. })
        ));
    }

    #[test]
    fn manual_valuation_wire_shape() {
        let valuation = manual_valuation(HandValue::new(2, 30), true, WinType::Tsumo);
        let json = serde_json::to_value(&valuation).unwrap();
        assert_eq!(json["cost"]["main"], 1000);
        assert_eq!(json["cost"]["additional"], 1000);
        assert!(json.get("error").is_none());
    }
}
