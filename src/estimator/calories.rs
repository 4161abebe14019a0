use super::error::EstimatorError;
use super::profile::{ActivityLevel, BodyProfile, Sex};

const WEIGHT_COEF: f64 = 10.0;
const HEIGHT_COEF: f64 = 6.25;
const AGE_COEF: f64 = 5.0;
const MALE_CONSTANT: f64 = 5.0;
const FEMALE_CONSTANT: f64 = -161.0;

/// Estimates the basal metabolic rate (kcal/day) with the Mifflin-St Jeor equation.
///
/// `BMR = 10 * weight_kg + 6.25 * height_cm - 5 * age + (5 for male, -161 for female)`
///
/// No range checks are applied here; see [`BodyProfile::validated`].
pub fn compute_bmr(profile: &BodyProfile) -> f64 {
    let sex_constant = match profile.sex() {
        Sex::Male => MALE_CONSTANT,
        Sex::Female => FEMALE_CONSTANT,
    };
    WEIGHT_COEF * profile.weight_kg() + HEIGHT_COEF * profile.height_cm()
        - AGE_COEF * f64::from(profile.age_years())
        + sex_constant
}

/// Scales a BMR by the activity factor to get the daily calorie target.
pub fn compute_daily_calories(bmr: f64, activity: ActivityLevel) -> f64 {
    bmr * activity.factor()
}

/// Same as [`compute_daily_calories`], for an activity level still in label form.
///
/// # Errors
/// Returns [`EstimatorError::UnrecognizedActivityLevel`] when the label does not
/// name a known activity level.
pub fn daily_calories_for_label(bmr: f64, activity_label: &str) -> Result<f64, EstimatorError> {
    let activity: ActivityLevel = activity_label.parse()?;
    Ok(compute_daily_calories(bmr, activity))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_bmr_male() {
        let profile = BodyProfile::new(70.0, 175.0, 30, Sex::Male);
        // 700 + 1093.75 - 150 + 5
        assert_eq!(compute_bmr(&profile), 1648.75);
    }

    #[test]
    fn test_bmr_female() {
        let profile = BodyProfile::new(70.0, 175.0, 30, Sex::Female);
        // 700 + 1093.75 - 150 - 161
        assert_eq!(compute_bmr(&profile), 1482.75);
    }

    #[test]
    fn test_bmr_accepts_zero_inputs() {
        let profile = BodyProfile::new(0.0, 0.0, 0, Sex::Male);
        assert_eq!(compute_bmr(&profile), 5.0);
    }

    #[test]
    fn test_daily_calories_factors() {
        assert!(close(compute_daily_calories(1000.0, ActivityLevel::Sedentary), 1200.0));
        assert!(close(compute_daily_calories(1000.0, ActivityLevel::Moderate), 1550.0));
        assert!(close(compute_daily_calories(1000.0, ActivityLevel::Active), 1725.0));
    }

    #[test]
    fn test_daily_calories_for_label_unknown() {
        for bmr in [0.0, 1648.75, -10.0] {
            assert_eq!(
                daily_calories_for_label(bmr, "unknown"),
                Err(EstimatorError::UnrecognizedActivityLevel("unknown".to_string()))
            );
        }
    }

    #[test]
    fn test_daily_calories_for_label_matches_enum() {
        let bmr = 1500.0;
        assert_eq!(
            daily_calories_for_label(bmr, "보통"),
            Ok(compute_daily_calories(bmr, ActivityLevel::Moderate))
        );
    }
}
