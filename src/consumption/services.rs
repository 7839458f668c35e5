//! Daily aggregation and the calorie-to-weight-gain conversion.

use super::dto::{DailyTotals, SummaryItem};

/// Energy surplus corresponding to roughly one kilogram of body mass.
/// A simplified physiological conversion, not a medical model.
pub const KCAL_PER_KG: f64 = 7700.0;

/// Calories for a portion, from the food's per-100g energy density.
/// Rounds to the nearest integer, ties away from zero. The result is
/// stored on the entry as a snapshot; totals never recompute it from the
/// current catalog.
pub fn portion_calories(calories_per_100g: i32, portion_size_grams: i32) -> i32 {
    ((i64::from(calories_per_100g) * i64::from(portion_size_grams) + 50) / 100) as i32
}

/// Per-entry contribution of one nutrient, rounded the same way calories
/// are. An unknown nutrient value counts as zero.
fn nutrient_contribution(per_100g: Option<i32>, portion_size_grams: i32) -> i64 {
    match per_100g {
        Some(v) => (i64::from(v) * i64::from(portion_size_grams) + 50) / 100,
        None => 0,
    }
}

/// Totals over one day's enriched entries.
///
/// Calories sum the stored per-entry snapshots; an entry whose food no
/// longer resolves still counts its calories but contributes nothing to
/// the macros. Nutrient contributions are rounded per entry and then
/// summed, never summed raw and rounded once.
pub fn summarize(items: &[SummaryItem]) -> DailyTotals {
    let mut calories: i64 = 0;
    let mut protein: i64 = 0;
    let mut carbs: i64 = 0;
    let mut fat: i64 = 0;

    for item in items {
        calories += i64::from(item.entry.calories);
        if let Some(food) = &item.food {
            protein += nutrient_contribution(food.protein, item.entry.portion_size_grams);
            carbs += nutrient_contribution(food.carbs, item.entry.portion_size_grams);
            fat += nutrient_contribution(food.fat, item.entry.portion_size_grams);
        }
    }

    DailyTotals {
        calories,
        protein,
        carbs,
        fat,
        estimated_weight_gain_grams: estimate_weight_gain_grams(calories as f64),
    }
}

/// Grams of body mass a calorie total converts to (7700 kcal per kg).
pub fn estimate_weight_gain_grams(total_calories: f64) -> i64 {
    (total_calories / KCAL_PER_KG * 1000.0).round() as i64
}

/// Kilogram rendering of a gram estimate, two decimal places.
pub fn weight_gain_kg(weight_gain_grams: i64) -> String {
    format!("{:.2}", weight_gain_grams as f64 / 1000.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::repo::Food;
    use crate::consumption::repo::ConsumptionEntry;
    use time::macros::datetime;

    fn food(
        id: i32,
        calories_per_100g: i32,
        protein: Option<i32>,
        carbs: Option<i32>,
        fat: Option<i32>,
    ) -> Food {
        Food {
            id,
            name: "Peito de Frango".to_string(),
            category: "Proteínas".to_string(),
            calories_per_100g,
            protein,
            carbs,
            fat,
            fiber: None,
            created_at: datetime!(2026-08-07 0:00 UTC),
        }
    }

    fn entry(id: i32, food_id: i32, portion_size_grams: i32, calories: i32) -> ConsumptionEntry {
        ConsumptionEntry {
            id,
            user_id: 1,
            food_id,
            portion_size_grams,
            calories,
            consumed_at: datetime!(2026-08-07 12:00 UTC),
        }
    }

    #[test]
    fn portion_calories_rounds_to_nearest() {
        // 52 kcal/100g apple at 150g
        assert_eq!(portion_calories(52, 150), 78);
        // 165 kcal/100g chicken breast at 200g
        assert_eq!(portion_calories(165, 200), 330);
        assert_eq!(portion_calories(0, 500), 0);
        assert_eq!(portion_calories(100, 1), 1);
    }

    #[test]
    fn portion_calories_ties_round_away_from_zero() {
        // 33 * 50 = 1650 -> 16.5 -> 17
        assert_eq!(portion_calories(33, 50), 17);
        // 1 * 50 = 50 -> 0.5 -> 1
        assert_eq!(portion_calories(1, 50), 1);
    }

    #[test]
    fn weight_gain_fixed_points() {
        assert_eq!(estimate_weight_gain_grams(0.0), 0);
        assert_eq!(weight_gain_kg(0), "0.00");
        assert_eq!(estimate_weight_gain_grams(7700.0), 1000);
        assert_eq!(weight_gain_kg(1000), "1.00");
        // 330 / 7700 * 1000 = 42.86 -> 43
        assert_eq!(estimate_weight_gain_grams(330.0), 43);
        assert_eq!(weight_gain_kg(43), "0.04");
    }

    #[test]
    fn weight_gain_is_non_decreasing() {
        let samples = [0.0, 1.0, 100.0, 330.0, 3000.0, 7700.0, 15400.0, 100000.0];
        let mut prev = i64::MIN;
        for kcal in samples {
            let grams = estimate_weight_gain_grams(kcal);
            assert!(grams >= prev, "estimate decreased at {kcal} kcal");
            prev = grams;
        }
    }

    #[test]
    fn summarize_empty_day_is_all_zero() {
        let totals = summarize(&[]);
        assert_eq!(
            totals,
            DailyTotals {
                calories: 0,
                protein: 0,
                carbs: 0,
                fat: 0,
                estimated_weight_gain_grams: 0,
            }
        );
    }

    #[test]
    fn summarize_chicken_breast_scenario() {
        // 200g of chicken breast: 165 kcal, 31g protein, 0g carbs, 4g fat per 100g
        let chicken = food(1, 165, Some(31), Some(0), Some(4));
        let items = vec![SummaryItem {
            entry: entry(1, 1, 200, portion_calories(165, 200)),
            food: Some(chicken),
        }];

        let totals = summarize(&items);
        assert_eq!(totals.calories, 330);
        assert_eq!(totals.protein, 62);
        assert_eq!(totals.carbs, 0);
        assert_eq!(totals.fat, 8);
        // 330 / 7700 * 1000 = 42.86 -> 43
        assert_eq!(totals.estimated_weight_gain_grams, 43);
    }

    #[test]
    fn summarize_sums_stored_calories_not_catalog_values() {
        // Entry snapshot says 500 kcal even though the catalog row would
        // now yield 52: the snapshot wins.
        let items = vec![SummaryItem {
            entry: entry(1, 1, 100, 500),
            food: Some(food(1, 52, Some(0), Some(14), Some(0))),
        }];

        let totals = summarize(&items);
        assert_eq!(totals.calories, 500);
    }

    #[test]
    fn unresolved_food_keeps_calories_and_zero_macros() {
        let items = vec![
            SummaryItem {
                entry: entry(1, 99, 150, 78),
                food: None,
            },
            SummaryItem {
                entry: entry(2, 1, 100, 165),
                food: Some(food(1, 165, Some(31), None, Some(4))),
            },
        ];

        let totals = summarize(&items);
        assert_eq!(totals.calories, 78 + 165);
        assert_eq!(totals.protein, 31);
        assert_eq!(totals.carbs, 0);
        assert_eq!(totals.fat, 4);
    }

    #[test]
    fn missing_nutrient_fields_count_as_zero() {
        let items = vec![SummaryItem {
            entry: entry(1, 1, 200, 330),
            food: Some(food(1, 165, None, None, None)),
        }];

        let totals = summarize(&items);
        assert_eq!(totals.protein, 0);
        assert_eq!(totals.carbs, 0);
        assert_eq!(totals.fat, 0);
    }

    #[test]
    fn nutrients_round_per_entry_before_summing() {
        // Two 50g portions of a food with 1g protein per 100g: each entry
        // contributes round(0.5) = 1, so the day totals 2g, not round(1.0) = 1.
        let f = food(1, 10, Some(1), None, None);
        let items = vec![
            SummaryItem {
                entry: entry(1, 1, 50, 5),
                food: Some(f.clone()),
            },
            SummaryItem {
                entry: entry(2, 1, 50, 5),
                food: Some(f),
            },
        ];

        let totals = summarize(&items);
        assert_eq!(totals.protein, 2);
    }
}
