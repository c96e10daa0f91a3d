//! Hand cost types and the upstream hand-value engine's reply.
//!
//! A [`Cost`] is opaque to the settlement engine: it is produced either by
//! the external hand-value engine ([`HandValuation`]) or by the manual cost
//! table, and consumed unchanged.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

use crate::{Result, TenbouError};

/// Points owed for a winning hand, before honba and riichi sticks.
///
/// - `main`: paid by the discarder on a ron; on a tsumo, paid by the dealer
///   (or by every other seat when the dealer is the winner).
/// - `additional`: paid by each non-dealer on a non-dealer tsumo.
///
/// Both fields are required on the wire; a missing key is a
/// deserialization error rather than a zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cost {
    pub main: u32,
    pub additional: u32,
}

impl Cost {
    #[must_use]
    pub fn new(main: u32, additional: u32) -> Self {
        Self { main, additional }
    }

    /// Cost of a ron: the discarder pays `main`, nobody pays `additional`.
    #[must_use]
    pub fn ron(main: u32) -> Self {
        Self {
            main,
            additional: 0,
        }
    }

    /// Cost of a dealer tsumo: every seat pays the same share.
    #[must_use]
    pub fn dealer_tsumo(each: u32) -> Self {
        Self {
            main: each,
            additional: each,
        }
    }
}

impl fmt::Display for Cost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.main, self.additional)
    }
}

/// How the hand was won.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WinType {
    /// Self-draw: paid by the other three seats.
    Tsumo,
    /// Off a discard: paid entirely by the discarder.
    Ron,
}

impl fmt::Display for WinType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Tsumo => write!(f, "TSUMO"),
            Self::Ron => write!(f, "RON"),
        }
    }
}

/// Han and fu of a priced hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HandValue {
    pub han: u32,
    pub fu: u32,
}

impl HandValue {
    #[must_use]
    pub fn new(han: u32, fu: u32) -> Self {
        Self { han, fu }
    }
}

impl fmt::Display for HandValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} han {} fu", self.han, self.fu)
    }
}

/// A single yaku reported by the hand-value engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct YakuEntry {
    pub name: String,
    pub han: u32,
}

/// Reply of the external hand-value engine.
///
/// On failure the engine still answers with a body, carrying zero han, an
/// empty `cost` object and an `error` string. Such a reply must never reach
/// settlement; [`HandValuation::settle_cost`] enforces that.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandValuation {
    pub han: u32,
    pub fu: u32,
    #[serde(default, deserialize_with = "empty_object_as_none")]
    pub cost: Option<Cost>,
    #[serde(default)]
    pub yaku: Vec<YakuEntry>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl HandValuation {
    #[must_use]
    pub fn hand_value(&self) -> HandValue {
        HandValue::new(self.han, self.fu)
    }

    /// The cost to feed into settlement.
    ///
    /// # Errors
    /// Returns [`TenbouError::UpstreamCalculation`] if the engine reported
    /// an error or returned no cost.
    pub fn settle_cost(&self) -> Result<Cost> {
        if let Some(reason) = &self.error {
            return Err(TenbouError::UpstreamCalculation {
                reason: reason.clone(),
            });
        }
        self.cost.ok_or_else(|| TenbouError::UpstreamCalculation {
            reason: "hand-value reply carried no cost".to_string(),
        })
    }

    /// Sum of han over the reported yaku.
    #[must_use]
    pub fn yaku_han(&self) -> u32 {
        self.yaku.iter().map(|y| y.han).sum()
    }
}

/// `{}` and `null` both mean "no cost"; anything else must be a full [`Cost`].
fn empty_object_as_none<'de, D>(deserializer: D) -> std::result::Result<Option<Cost>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    let value = serde_json::Value::deserialize(deserializer)?;
    match &value {
        serde_json::Value::Null => Ok(None),
        serde_json::Value::Object(map) if map.is_empty() => Ok(None),
        _ => serde_json::from_value(value).map(Some).map_err(D::Error::custom),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cost_requires_both_fields() {
        let ok: Cost = serde_json::from_str(r#"{"main":3900,"additional":0}"#).unwrap();
        assert_eq!(ok, Cost::ron(3900));
        assert!(serde_json::from_str::<Cost>(r#"{"main":3900}"#).is_err());
        assert!(serde_json::from_str::<Cost>(r#"{"main":-1,"additional":0}"#).is_err());
    }

    #[test]
    fn cost_ignores_upstream_total() {
        let cost: Cost =
            serde_json::from_str(r#"{"main":2000,"additional":1000,"total":4000}"#).unwrap();
        assert_eq!(cost, Cost::new(2000, 1000));
    }

    #[test]
    fn win_type_display_and_serde() {
        assert_eq!(format!("{}", WinType::Tsumo), "TSUMO");
        assert_eq!(serde_json::to_string(&WinType::Ron).unwrap(), r#""ron""#);
    }

    #[test]
    fn valuation_success_yields_cost() {
        let json = r#"{
            "han": 3, "fu": 40,
            "cost": {"main": 5200, "additional": 0, "total": 5200},
            "yaku": [{"name": "Riichi", "han": 1}, {"name": "Pinfu", "han": 1}, {"name": "Dora", "han": 1}]
        }"#;
        let valuation: HandValuation = serde_json::from_str(json).unwrap();
        assert_eq!(valuation.settle_cost().unwrap(), Cost::ron(5200));
        assert_eq!(valuation.yaku_han(), 3);
        assert_eq!(valuation.hand_value(), HandValue::new(3, 40));
    }

    #[test]
    fn valuation_error_blocks_settlement() {
        let json = r#"{"han": 0, "fu": 0, "cost": {}, "yaku": [], "error": "no_yaku"}"#;
        let valuation: HandValuation = serde_json::from_str(json).unwrap();
        assert!(valuation.cost.is_none());
        let err = valuation.settle_cost().unwrap_err();
        assert!(
            matches!(&err, TenbouError::UpstreamCalculation { reason } if reason == "no_yaku"),
            "Got: {err:?}"
        );
    }

    #[test]
    fn valuation_without_cost_blocks_settlement() {
        let valuation: HandValuation = serde_json::from_str(r#"{"han": 1, "fu": 30}"#).unwrap();
        assert!(matches!(
            valuation.settle_cost(),
            Err(TenbouError::UpstreamCalculation { .. })
        ));
    }

    #[test]
    fn valuation_partial_cost_rejected() {
        let json = r#"{"han": 1, "fu": 30, "cost": {"main": 1000}}"#;
        assert!(serde_json::from_str::<HandValuation>(json).is_err());
    }
}
