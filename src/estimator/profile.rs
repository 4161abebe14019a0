use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::error::EstimatorError;

// Widest ranges accepted by the intake form across its revisions.
pub const WEIGHT_KG_RANGE: (f64, f64) = (30.0, 300.0);
pub const HEIGHT_CM_RANGE: (f64, f64) = (100.0, 250.0);
pub const AGE_YEARS_RANGE: (u32, u32) = (1, 120);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Male,
    Female,
}

impl FromStr for Sex {
    type Err = EstimatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "male" | "m" | "남성" => Ok(Sex::Male),
            "female" | "f" | "여성" => Ok(Sex::Female),
            _ => Err(EstimatorError::UnrecognizedSex(s.to_string())),
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sex::Male => write!(f, "male"),
            Sex::Female => write!(f, "female"),
        }
    }
}

/// How active the user is day to day. Each level maps to a fixed multiplier
/// applied to the basal metabolic rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityLevel {
    Sedentary,
    Moderate,
    Active,
}

impl ActivityLevel {
    pub const ALL: [ActivityLevel; 3] = [
        ActivityLevel::Sedentary,
        ActivityLevel::Moderate,
        ActivityLevel::Active,
    ];

    pub fn factor(self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::Moderate => 1.55,
            ActivityLevel::Active => 1.725,
        }
    }
}

impl FromStr for ActivityLevel {
    type Err = EstimatorError;

    /// Accepts the canonical names, the plain-English synonyms, and the
    /// labels shown on the Korean intake form.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "sedentary" | "low" | "낮음" => Ok(ActivityLevel::Sedentary),
            "moderate" | "normal" | "보통" => Ok(ActivityLevel::Moderate),
            "active" | "high" | "높음" => Ok(ActivityLevel::Active),
            _ => Err(EstimatorError::UnrecognizedActivityLevel(s.to_string())),
        }
    }
}

impl fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ActivityLevel::Sedentary => "sedentary",
            ActivityLevel::Moderate => "moderate",
            ActivityLevel::Active => "active",
        };
        write!(f, "{}", name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BodyProfile {
    weight_kg: f64,
    height_cm: f64,
    age_years: u32,
    sex: Sex,
}

impl BodyProfile {
    /// Builds a profile without any range checks. The BMR formula accepts any
    /// finite input, so callers that need bounds should use [`BodyProfile::validated`].
    pub fn new(weight_kg: f64, height_cm: f64, age_years: u32, sex: Sex) -> Self {
        Self {
            weight_kg,
            height_cm,
            age_years,
            sex,
        }
    }

    /// Builds a profile, rejecting metrics outside the ranges the intake form allows.
    pub fn validated(
        weight_kg: f64,
        height_cm: f64,
        age_years: u32,
        sex: Sex,
    ) -> Result<Self, EstimatorError> {
        check_range("weight_kg", weight_kg, WEIGHT_KG_RANGE)?;
        check_range("height_cm", height_cm, HEIGHT_CM_RANGE)?;
        check_range(
            "age_years",
            f64::from(age_years),
            (f64::from(AGE_YEARS_RANGE.0), f64::from(AGE_YEARS_RANGE.1)),
        )?;
        Ok(Self::new(weight_kg, height_cm, age_years, sex))
    }

    pub fn weight_kg(&self) -> f64 {
        self.weight_kg
    }

    pub fn height_cm(&self) -> f64 {
        self.height_cm
    }

    pub fn age_years(&self) -> u32 {
        self.age_years
    }

    pub fn sex(&self) -> Sex {
        self.sex
    }
}

fn check_range(field: &'static str, value: f64, (min, max): (f64, f64)) -> Result<(), EstimatorError> {
    // NaN fails both comparisons, so test for containment rather than exclusion.
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(EstimatorError::OutOfRange {
            field,
            value,
            min,
            max,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_activity_level_parses_canonical_and_form_labels() {
        assert_eq!("sedentary".parse(), Ok(ActivityLevel::Sedentary));
        assert_eq!(" Moderate ".parse(), Ok(ActivityLevel::Moderate));
        assert_eq!("ACTIVE".parse(), Ok(ActivityLevel::Active));
        assert_eq!("낮음".parse(), Ok(ActivityLevel::Sedentary));
        assert_eq!("보통".parse(), Ok(ActivityLevel::Moderate));
        assert_eq!("높음".parse(), Ok(ActivityLevel::Active));
        assert_eq!("high".parse(), Ok(ActivityLevel::Active));
    }

    #[test]
    fn test_activity_level_rejects_unknown_label() {
        let result: Result<ActivityLevel, _> = "unknown".parse();
        assert_eq!(
            result,
            Err(EstimatorError::UnrecognizedActivityLevel("unknown".to_string()))
        );
        let empty: Result<ActivityLevel, _> = "".parse();
        assert!(matches!(empty, Err(EstimatorError::UnrecognizedActivityLevel(_))));
    }

    #[test]
    fn test_activity_level_display_round_trips_through_from_str() {
        for level in ActivityLevel::ALL {
            assert_eq!(level.to_string().parse(), Ok(level));
        }
    }

    #[test]
    fn test_sex_parses_form_labels() {
        assert_eq!("남성".parse(), Ok(Sex::Male));
        assert_eq!("여성".parse(), Ok(Sex::Female));
        assert_eq!("F".parse(), Ok(Sex::Female));
        assert!(matches!("other".parse::<Sex>(), Err(EstimatorError::UnrecognizedSex(_))));
    }

    #[test]
    fn test_new_accepts_values_outside_form_ranges() {
        let profile = BodyProfile::new(0.0, -5.0, 0, Sex::Male);
        assert_eq!(profile.weight_kg(), 0.0);
        assert_eq!(profile.height_cm(), -5.0);
        assert_eq!(profile.age_years(), 0);
    }

    #[test]
    fn test_validated_bounds() {
        assert!(BodyProfile::validated(70.0, 170.0, 30, Sex::Female).is_ok());
        assert!(BodyProfile::validated(30.0, 100.0, 1, Sex::Female).is_ok());
        assert!(BodyProfile::validated(300.0, 250.0, 120, Sex::Male).is_ok());

        let err = BodyProfile::validated(29.9, 170.0, 30, Sex::Male).unwrap_err();
        assert!(matches!(err, EstimatorError::OutOfRange { field: "weight_kg", .. }));

        let err = BodyProfile::validated(70.0, 251.0, 30, Sex::Male).unwrap_err();
        assert!(matches!(err, EstimatorError::OutOfRange { field: "height_cm", .. }));

        let err = BodyProfile::validated(70.0, 170.0, 0, Sex::Male).unwrap_err();
        assert!(matches!(err, EstimatorError::OutOfRange { field: "age_years", .. }));

        let err = BodyProfile::validated(f64::NAN, 170.0, 30, Sex::Male).unwrap_err();
        assert!(matches!(err, EstimatorError::OutOfRange { field: "weight_kg", .. }));
    }
}
