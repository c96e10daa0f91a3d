//! Table rules configuration.

use serde::{Deserialize, Serialize};

use crate::{Result, TenbouError, constants};

/// Point values the settlement engine applies on top of a hand's cost.
///
/// Missing keys in a rules document fall back to the standard values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableRules {
    /// Surcharge per honba on a ron, paid by the discarder.
    pub honba_ron_bonus: u32,
    /// Surcharge per honba on a tsumo, paid by each payer.
    pub honba_tsumo_bonus_per_payer: u32,
    /// Value of one riichi stick.
    pub riichi_stick_value: u32,
    /// Total noten penalty at an exhaustive draw.
    pub noten_penalty_total: u32,
}

impl Default for TableRules {
    fn default() -> Self {
        Self::standard()
    }
}

impl TableRules {
    /// Standard riichi values: 300 per honba, 1000 per stick, 3000 noten.
    #[must_use]
    pub const fn standard() -> Self {
        Self {
            honba_ron_bonus: constants::DEFAULT_HONBA_RON_BONUS,
            honba_tsumo_bonus_per_payer: constants::DEFAULT_HONBA_TSUMO_BONUS_PER_PAYER,
            riichi_stick_value: constants::DEFAULT_RIICHI_STICK_VALUE,
            noten_penalty_total: constants::DEFAULT_NOTEN_PENALTY_TOTAL,
        }
    }

    /// Check internal consistency.
    ///
    /// # Errors
    /// Returns [`TenbouError::Configuration`] if:
    /// - the ron honba bonus is not three times the per-payer tsumo bonus
    /// - the riichi stick value is zero
    /// - the noten penalty cannot be split exactly among 1, 2 or 3 seats
    pub fn validate(&self) -> Result<()> {
        if u64::from(self.honba_ron_bonus) != 3 * u64::from(self.honba_tsumo_bonus_per_payer) {
            return Err(TenbouError::Configuration(format!(
                "honba_ron_bonus ({}) must equal 3 x honba_tsumo_bonus_per_payer ({})",
                self.honba_ron_bonus, self.honba_tsumo_bonus_per_payer
            )));
        }
        if self.riichi_stick_value == 0 {
            return Err(TenbouError::Configuration(
                "riichi_stick_value must be > 0".to_string(),
            ));
        }
        if self.noten_penalty_total % 6 != 0 {
            return Err(TenbouError::Configuration(format!(
                "noten_penalty_total ({}) must be divisible by 6",
                self.noten_penalty_total
            )));
        }
        Ok(())
    }

    /// Load rules from a JSON document and validate them.
    pub fn from_json(json: &str) -> Result<Self> {
        let rules: Self = serde_json::from_str(json)?;
        rules.validate()?;
        Ok(rules)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_rules_validate() {
        let rules = TableRules::default();
        assert_eq!(rules.honba_ron_bonus, 300);
        assert_eq!(rules.honba_tsumo_bonus_per_payer, 100);
        assert_eq!(rules.riichi_stick_value, 1000);
        assert_eq!(rules.noten_penalty_total, 3000);
        assert!(rules.validate().is_ok());
    }

    #[test]
    fn partial_document_uses_defaults() {
        let rules = TableRules::from_json(r#"{"honba_ron_bonus": 1500, "honba_tsumo_bonus_per_payer": 500}"#)
            .unwrap();
        assert_eq!(rules.honba_ron_bonus, 1500);
        assert_eq!(rules.riichi_stick_value, 1000);
    }

    #[test]
    fn asymmetric_honba_rejected() {
        let err = TableRules::from_json(r#"{"honba_ron_bonus": 300, "honba_tsumo_bonus_per_payer": 150}"#)
            .unwrap_err();
        assert!(matches!(err, TenbouError::Configuration(_)));
    }

    #[test]
    fn inexact_noten_split_rejected() {
        let rules = TableRules {
            noten_penalty_total: 1000,
            ..TableRules::standard()
        };
        assert!(matches!(rules.validate(), Err(TenbouError::Configuration(_))));
    }

    #[test]
    fn malformed_document_is_serialization_error() {
        let err = TableRules::from_json("{not json").unwrap_err();
        assert!(matches!(err, TenbouError::Serialization(_)));
    }
}
