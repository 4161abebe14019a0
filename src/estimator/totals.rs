use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::iter::Sum;

/// Resolved nutrition for one food item, as returned by a lookup.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, Default, PartialEq)]
pub struct NutritionRecord {
    pub calories: f64,
    pub carbs_g: f64,
    pub protein_g: f64,
    pub fat_g: f64,
}

/// Point-wise sum of the records that resolved.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, Default, PartialEq)]
pub struct NutritionTotals {
    pub calories: f64,
    pub carbs_g: f64,
    pub protein_g: f64,
    pub fat_g: f64,
}

impl NutritionTotals {
    pub fn zero() -> Self {
        Self::default()
    }

    /// Calories left before reaching `daily_target`; negative once it is exceeded.
    pub fn calorie_balance(&self, daily_target: f64) -> f64 {
        daily_target - self.calories
    }
}

impl<'a> Sum<&'a NutritionRecord> for NutritionTotals {
    fn sum<I: Iterator<Item = &'a NutritionRecord>>(iter: I) -> Self {
        aggregate_nutrition(iter.map(Some))
    }
}

impl Sum<NutritionRecord> for NutritionTotals {
    fn sum<I: Iterator<Item = NutritionRecord>>(iter: I) -> Self {
        aggregate_nutrition(iter.map(Some))
    }
}

/// Adds the values in ascending `total_cmp` order, so any permutation of the
/// same values yields the same bits.
fn canonical_sum(values: impl Iterator<Item = f64>) -> f64 {
    let mut values: Vec<f64> = values.collect();
    values.sort_by(f64::total_cmp);
    // Start from +0.0 so an empty field is not reported as -0.0.
    values.into_iter().fold(0.0, |acc, v| acc + v)
}

/// Sums the four nutrition fields over every record that is present.
///
/// An absent record stands for a failed lookup: it contributes nothing and
/// does not stop the remaining records from being counted. The result does
/// not depend on the order of `records`.
///
/// # Arguments
/// * `records`: One entry per food item, `None` where the lookup failed.
///
/// # Returns
/// The totals of the present records, all zero for an empty input.
pub fn aggregate_nutrition<I, R>(records: I) -> NutritionTotals
where
    I: IntoIterator<Item = Option<R>>,
    R: Borrow<NutritionRecord>,
{
    let present: Vec<NutritionRecord> = records
        .into_iter()
        .flatten()
        .map(|record| *<R as Borrow<NutritionRecord>>::borrow(&record))
        .collect();

    NutritionTotals {
        calories: canonical_sum(present.iter().map(|r| r.calories)),
        carbs_g: canonical_sum(present.iter().map(|r| r.carbs_g)),
        protein_g: canonical_sum(present.iter().map(|r| r.protein_g)),
        fat_g: canonical_sum(present.iter().map(|r| r.fat_g)),
    }
}
