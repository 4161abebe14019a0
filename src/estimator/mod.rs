//! Pure calorie and macro estimation: BMR, daily calorie target, and
//! aggregation of per-item nutrition lookups.

pub mod calories;
pub mod error;
pub mod profile;
pub mod totals;

pub use calories::{compute_bmr, compute_daily_calories, daily_calories_for_label};
pub use error::EstimatorError;
pub use profile::{ActivityLevel, BodyProfile, Sex};
pub use totals::{aggregate_nutrition, NutritionRecord, NutritionTotals};
