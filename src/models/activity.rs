//! Planned trip activities

use serde::{Deserialize, Serialize};

use super::clothing::FormalityLevel;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityType {
    Sightseeing,
    Dining,
    Business,
    Outdoor,
    Cultural,
    Nightlife,
    Sports,
    Relaxation,
    Shopping,
    Adventure,
}

/// Optional dress code attached to an activity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DressCode {
    Casual,
    SmartCasual,
    Business,
    BusinessFormal,
    Cocktail,
    Formal,
    BlackTie,
    Athletic,
    Beachwear,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    pub name: String,
    #[serde(rename = "type")]
    pub activity_type: ActivityType,
    pub formality_level: FormalityLevel,
    #[serde(default)]
    pub dress_code: Option<DressCode>,
}

impl Activity {
    /// Sports and outdoor activities need athletic wear
    #[must_use]
    pub fn is_athletic(&self) -> bool {
        matches!(
            self.activity_type,
            ActivityType::Sports | ActivityType::Outdoor
        )
    }

    #[must_use]
    pub fn is_formal(&self) -> bool {
        self.formality_level.is_formal()
    }

    /// Beach time: a beachwear dress code, or a relaxation activity at the beach
    #[must_use]
    pub fn is_beach(&self) -> bool {
        if self.dress_code == Some(DressCode::Beachwear) {
            return true;
        }
        self.activity_type == ActivityType::Relaxation
            && self.name.to_lowercase().contains("beach")
    }
}

/// Lowest and highest formality across a set of activities
#[must_use]
pub fn formality_range(activities: &[Activity]) -> Option<(FormalityLevel, FormalityLevel)> {
    let lo = activities.iter().map(|a| a.formality_level).min()?;
    let hi = activities.iter().map(|a| a.formality_level).max()?;
    Some((lo, hi))
}

/// Rounded mean formality; 0 when there are no activities
#[must_use]
pub fn target_formality(activities: &[Activity]) -> u8 {
    if activities.is_empty() {
        return 0;
    }
    let sum: u32 = activities
        .iter()
        .map(|a| u32::from(a.formality_level.level()))
        .sum();
    let mean = f64::from(sum) / activities.len() as f64;
    mean.round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn activity(name: &str, activity_type: ActivityType, level: u8) -> Activity {
        Activity {
            name: name.to_string(),
            activity_type,
            formality_level: FormalityLevel::try_from(level).unwrap(),
            dress_code: None,
        }
    }

    #[rstest]
    #[case("Beach Day", ActivityType::Relaxation, true)]
    #[case("spa at the BEACH club", ActivityType::Relaxation, true)]
    #[case("Beach volleyball", ActivityType::Sports, false)]
    #[case("Spa", ActivityType::Relaxation, false)]
    fn test_beach_detection(
        #[case] name: &str,
        #[case] activity_type: ActivityType,
        #[case] expected: bool,
    ) {
        assert_eq!(activity(name, activity_type, 1).is_beach(), expected);
    }

    #[test]
    fn test_beachwear_dress_code_counts_as_beach() {
        let mut a = activity("Pool party", ActivityType::Nightlife, 2);
        a.dress_code = Some(DressCode::Beachwear);
        assert!(a.is_beach());
    }

    #[test]
    fn test_formality_range_and_target() {
        let activities = vec![
            activity("Museum", ActivityType::Cultural, 2),
            activity("Gala", ActivityType::Dining, 5),
        ];
        assert_eq!(
            formality_range(&activities),
            Some((FormalityLevel::Casual, FormalityLevel::Formal))
        );
        // 3.5 rounds half up
        assert_eq!(target_formality(&activities), 4);
        assert_eq!(formality_range(&[]), None);
        assert_eq!(target_formality(&[]), 0);
    }

    #[test]
    fn test_activity_deserializes_type_field() {
        let json = r#"{"name":"Hike","type":"outdoor","formalityLevel":1}"#;
        let a: Activity = serde_json::from_str(json).unwrap();
        assert!(a.is_athletic());
        assert!(!a.is_formal());
    }
}
