use crate::estimator::NutritionTotals;

/// Everything the recommendation prompt is built from.
#[derive(Debug, Clone)]
pub struct PromptInput<'a> {
    pub foods: &'a [String],
    pub unresolved: &'a [String],
    pub totals: &'a NutritionTotals,
    pub daily_calories: f64,
    pub language: &'a str,
}

pub fn language_name(code: &str) -> &str {
    match code {
        "ko" => "Korean",
        "en" => "English",
        "ja" => "Japanese",
        "zh" => "Chinese",
        "es" => "Spanish",
        "fr" => "French",
        "de" => "German",
        other => other,
    }
}

/// Describes how far the intake is from the daily target.
pub fn describe_balance(totals: &NutritionTotals, daily_calories: f64) -> String {
    let balance = totals.calorie_balance(daily_calories);
    if balance >= 0.0 {
        format!("{:.2} kcal remain before the daily target", balance)
    } else {
        format!("the daily target is exceeded by {:.2} kcal", -balance)
    }
}

/// Builds the chat prompt asking for exercise and alternative-meal advice.
pub fn build_prompt(input: &PromptInput<'_>) -> String {
    let foods = if input.foods.is_empty() {
        "nothing in particular".to_string()
    } else {
        input.foods.join(", ")
    };

    let mut prompt = format!(
        "The user wants to eat '{}'. \
         The total intake is {:.2} kcal (carbohydrate {:.2} g, protein {:.2} g, fat {:.2} g), \
         and the recommended daily intake is {:.2} kcal. ",
        foods,
        input.totals.calories,
        input.totals.carbs_g,
        input.totals.protein_g,
        input.totals.fat_g,
        input.daily_calories,
    );

    prompt.push_str(&format!(
        "With this meal, {}. ",
        describe_balance(input.totals, input.daily_calories)
    ));

    if !input.unresolved.is_empty() {
        prompt.push_str(&format!(
            "Nutrition data could not be found for: {}; these are not included in the totals. ",
            input.unresolved.join(", ")
        ));
    }

    prompt.push_str(
        "Based on this, give appropriate feedback including suitable exercise and alternative meal options. ",
    );
    prompt.push_str(&format!("Respond in {}.", language_name(input.language)));
    prompt
}

#[cfg(test)]
mod tests {
    use super::*;

    fn totals() -> NutritionTotals {
        NutritionTotals {
            calories: 1234.5,
            carbs_g: 150.0,
            protein_g: 40.25,
            fat_g: 30.0,
        }
    }

    #[test]
    fn test_prompt_embeds_totals_and_target() {
        let foods = vec!["ramen".to_string(), "sundae".to_string()];
        let totals = totals();
        let prompt = build_prompt(&PromptInput {
            foods: &foods,
            unresolved: &[],
            totals: &totals,
            daily_calories: 2555.5625,
            language: "ko",
        });
        assert!(prompt.contains("'ramen, sundae'"));
        assert!(prompt.contains("1234.50 kcal"));
        assert!(prompt.contains("protein 40.25 g"));
        assert!(prompt.contains("2555.56 kcal"));
        assert!(prompt.contains("1321.06 kcal remain before the daily target"));
        assert!(prompt.ends_with("Respond in Korean."));
        assert!(!prompt.contains("could not be found"));
    }

    #[test]
    fn test_prompt_mentions_unresolved_items() {
        let foods = vec!["ramen".to_string(), "mystery".to_string()];
        let unresolved = vec!["mystery".to_string()];
        let totals = totals();
        let prompt = build_prompt(&PromptInput {
            foods: &foods,
            unresolved: &unresolved,
            totals: &totals,
            daily_calories: 2000.0,
            language: "pt",
        });
        assert!(prompt.contains("could not be found for: mystery"));
        assert!(prompt.ends_with("Respond in pt."));
    }

    #[test]
    fn test_prompt_with_no_foods() {
        let totals = NutritionTotals::zero();
        let prompt = build_prompt(&PromptInput {
            foods: &[],
            unresolved: &[],
            totals: &totals,
            daily_calories: 1800.0,
            language: "en",
        });
        assert!(prompt.contains("'nothing in particular'"));
        assert!(prompt.contains("0.00 kcal"));
        assert!(prompt.contains("1800.00 kcal"));
    }

    #[test]
    fn test_balance_over_target() {
        let totals = totals();
        assert_eq!(
            describe_balance(&totals, 1000.0),
            "the daily target is exceeded by 234.50 kcal"
        );
        assert_eq!(
            describe_balance(&totals, 1234.5),
            "0.00 kcal remain before the daily target"
        );
    }
}
