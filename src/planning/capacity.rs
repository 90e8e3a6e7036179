//! Bag capacity table

use std::collections::HashMap;

use crate::error::PackingError;
use crate::models::{BagCapacity, BagSize};

/// Immutable lookup from bag size to its volume/weight budget
#[derive(Debug, Clone, PartialEq)]
pub struct CapacityModel {
    capacities: [BagCapacity; BagSize::COUNT],
}

impl Default for CapacityModel {
    fn default() -> Self {
        let mut capacities = [BagCapacity::ZERO; BagSize::COUNT];
        for (bag, capacity) in default_capacities() {
            capacities[bag.index()] = capacity;
        }
        Self { capacities }
    }
}

/// Standard airline and luggage budgets (liters, kg)
#[must_use]
pub fn default_capacities() -> [(BagSize, BagCapacity); BagSize::COUNT] {
    [
        (BagSize::CarryOn, BagCapacity::new(56.0, 7.0)),
        (BagSize::CheckedSmall, BagCapacity::new(68.0, 23.0)),
        (BagSize::CheckedMedium, BagCapacity::new(85.0, 23.0)),
        (BagSize::CheckedLarge, BagCapacity::new(119.0, 32.0)),
        (BagSize::Backpack, BagCapacity::new(45.0, 15.0)),
        (BagSize::Duffel, BagCapacity::new(60.0, 20.0)),
    ]
}

impl CapacityModel {
    /// Build from a table that must cover every bag size with positive budgets
    pub fn from_table(table: &HashMap<BagSize, BagCapacity>) -> crate::Result<Self> {
        let mut capacities = [BagCapacity::ZERO; BagSize::COUNT];
        for bag in BagSize::PREFERENCE_ORDER {
            let capacity = table.get(&bag).ok_or_else(|| {
                PackingError::config(format!("missing capacity for bag size '{bag}'"))
            })?;
            if capacity.volume <= 0.0 || capacity.weight <= 0.0 {
                return Err(PackingError::config(format!(
                    "capacity for bag size '{bag}' must be positive"
                )));
            }
            capacities[bag.index()] = *capacity;
        }
        Ok(Self { capacities })
    }

    #[must_use]
    pub fn capacity(&self, bag: BagSize) -> BagCapacity {
        self.capacities[bag.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(BagSize::CarryOn, 56.0, 7.0)]
    #[case(BagSize::CheckedSmall, 68.0, 23.0)]
    #[case(BagSize::CheckedMedium, 85.0, 23.0)]
    #[case(BagSize::CheckedLarge, 119.0, 32.0)]
    #[case(BagSize::Backpack, 45.0, 15.0)]
    #[case(BagSize::Duffel, 60.0, 20.0)]
    fn test_default_table(#[case] bag: BagSize, #[case] volume: f64, #[case] weight: f64) {
        let model = CapacityModel::default();
        assert_eq!(model.capacity(bag), BagCapacity::new(volume, weight));
    }

    #[test]
    fn test_from_table_requires_every_bag() {
        let mut table: HashMap<_, _> = default_capacities().into_iter().collect();
        assert_eq!(CapacityModel::from_table(&table).unwrap(), CapacityModel::default());

        table.remove(&BagSize::Duffel);
        let err = CapacityModel::from_table(&table).unwrap_err();
        assert!(err.to_string().contains("duffel"));
    }

    #[test]
    fn test_from_table_rejects_non_positive() {
        let mut table: HashMap<_, _> = default_capacities().into_iter().collect();
        table.insert(BagSize::Backpack, BagCapacity::new(0.0, 10.0));
        assert!(CapacityModel::from_table(&table).is_err());
    }
}
