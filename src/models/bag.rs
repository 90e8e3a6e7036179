//! Bag sizes and their capacity budgets

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::PackingError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BagSize {
    CarryOn,
    CheckedSmall,
    CheckedMedium,
    CheckedLarge,
    Backpack,
    Duffel,
}

impl BagSize {
    pub const COUNT: usize = 6;

    /// Smallest to largest; bag suggestion walks this order
    pub const PREFERENCE_ORDER: [BagSize; Self::COUNT] = [
        BagSize::CarryOn,
        BagSize::Backpack,
        BagSize::Duffel,
        BagSize::CheckedSmall,
        BagSize::CheckedMedium,
        BagSize::CheckedLarge,
    ];

    /// Returned when nothing smaller fits
    pub const LARGEST: BagSize = BagSize::CheckedLarge;

    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            BagSize::CarryOn => "carry_on",
            BagSize::CheckedSmall => "checked_small",
            BagSize::CheckedMedium => "checked_medium",
            BagSize::CheckedLarge => "checked_large",
            BagSize::Backpack => "backpack",
            BagSize::Duffel => "duffel",
        }
    }
}

impl fmt::Display for BagSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BagSize {
    type Err = PackingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase().replace('-', "_");
        Self::PREFERENCE_ORDER
            .into_iter()
            .find(|bag| bag.as_str() == needle)
            .ok_or_else(|| PackingError::validation(format!("unknown bag size '{s}'")))
    }
}

/// Absorbs float drift when summing fractional item sizes
const CAPACITY_TOLERANCE: f64 = 1e-9;

/// Volume (liters) and weight (kg) budget of a bag
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BagCapacity {
    pub volume: f64,
    pub weight: f64,
}

impl BagCapacity {
    pub const ZERO: BagCapacity = BagCapacity {
        volume: 0.0,
        weight: 0.0,
    };

    #[must_use]
    pub const fn new(volume: f64, weight: f64) -> Self {
        Self { volume, weight }
    }

    /// Capacity scaled down by a safety margin (e.g. 0.85)
    #[must_use]
    pub fn scaled(&self, factor: f64) -> Self {
        Self::new(self.volume * factor, self.weight * factor)
    }

    /// Remaining budget after `used`, floored at zero on each axis
    #[must_use]
    pub fn saturating_sub(&self, used: &BagCapacity) -> Self {
        Self::new(
            (self.volume - used.volume).max(0.0),
            (self.weight - used.weight).max(0.0),
        )
    }

    /// True when `load` fits on both axes
    #[must_use]
    pub fn holds(&self, load: &BagCapacity) -> bool {
        load.volume <= self.volume + CAPACITY_TOLERANCE
            && load.weight <= self.weight + CAPACITY_TOLERANCE
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("carry_on", BagSize::CarryOn)]
    #[case("carry-on", BagSize::CarryOn)]
    #[case("Checked_Large", BagSize::CheckedLarge)]
    #[case(" duffel ", BagSize::Duffel)]
    fn test_bag_size_parsing(#[case] raw: &str, #[case] expected: BagSize) {
        assert_eq!(raw.parse::<BagSize>().unwrap(), expected);
    }

    #[test]
    fn test_unknown_bag_size() {
        assert!("trunk".parse::<BagSize>().is_err());
    }

    #[test]
    fn test_saturating_sub_floors_at_zero() {
        let cap = BagCapacity::new(56.0, 7.0);
        let remaining = cap.saturating_sub(&BagCapacity::new(60.0, 5.0));
        assert_eq!(remaining.volume, 0.0);
        assert_eq!(remaining.weight, 2.0);
    }

    #[test]
    fn test_holds_checks_both_axes() {
        let cap = BagCapacity::new(6.0, 2.0);
        assert!(cap.holds(&BagCapacity::new(6.0, 0.9)));
        assert!(!cap.holds(&BagCapacity::new(6.1, 0.9)));
        assert!(!cap.holds(&BagCapacity::new(1.0, 2.5)));
    }

    #[test]
    fn test_serde_uses_snake_case_identifiers() {
        let json = serde_json::to_string(&BagSize::CheckedMedium).unwrap();
        assert_eq!(json, "\"checked_medium\"");
    }
}
