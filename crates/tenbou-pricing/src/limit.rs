//! Limit hands: tiers where the payment depends on han alone.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A limit-hand tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LimitHand {
    /// 5 han, or fewer han whose base points reach the cap.
    Mangan,
    /// 6–7 han.
    Haneman,
    /// 8–10 han.
    Baiman,
    /// 11–12 han.
    Sanbaiman,
    /// 13+ han (counted yakuman).
    Yakuman,
}

impl LimitHand {
    /// The tier a hand of `han` falls into by han count alone, if any.
    #[must_use]
    pub fn from_han(han: u32) -> Option<Self> {
        match han {
            0..=4 => None,
            5 => Some(Self::Mangan),
            6 | 7 => Some(Self::Haneman),
            8..=10 => Some(Self::Baiman),
            11 | 12 => Some(Self::Sanbaiman),
            _ => Some(Self::Yakuman),
        }
    }

    /// Base points of the tier.
    #[must_use]
    pub fn base_points(self) -> u32 {
        match self {
            Self::Mangan => 2000,
            Self::Haneman => 3000,
            Self::Baiman => 4000,
            Self::Sanbaiman => 6000,
            Self::Yakuman => 8000,
        }
    }
}

impl fmt::Display for LimitHand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Mangan => write!(f, "MANGAN"),
            Self::Haneman => write!(f, "HANEMAN"),
            Self::Baiman => write!(f, "BAIMAN"),
            Self::Sanbaiman => write!(f, "SANBAIMAN"),
            Self::Yakuman => write!(f, "YAKUMAN"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tiers_by_han() {
        assert_eq!(LimitHand::from_han(4), None);
        assert_eq!(LimitHand::from_han(5), Some(LimitHand::Mangan));
        assert_eq!(LimitHand::from_han(7), Some(LimitHand::Haneman));
        assert_eq!(LimitHand::from_han(10), Some(LimitHand::Baiman));
        assert_eq!(LimitHand::from_han(12), Some(LimitHand::Sanbaiman));
        assert_eq!(LimitHand::from_han(13), Some(LimitHand::Yakuman));
        assert_eq!(LimitHand::from_han(26), Some(LimitHand::Yakuman));
    }

    #[test]
    fn tiers_are_ordered() {
        assert!(LimitHand::Mangan < LimitHand::Yakuman);
        assert!(LimitHand::Haneman.base_points() < LimitHand::Baiman.base_points());
    }
}
