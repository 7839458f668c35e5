use serde::{Deserialize, Serialize};

use crate::catalog::repo::Food;

use super::repo::ConsumptionEntry;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordConsumptionRequest {
    pub food_id: i32,
    pub portion_size_grams: i32,
}

#[derive(Debug, Serialize)]
pub struct RecordConsumptionResponse {
    pub calories: i32,
}

#[derive(Debug, Serialize)]
pub struct RemoveConsumptionResponse {
    pub success: bool,
}

/// One entry enriched with its catalog row; `food` is `null` when the
/// referenced item no longer resolves (its stored calories still count).
#[derive(Debug, Serialize)]
pub struct SummaryItem {
    #[serde(flatten)]
    pub entry: ConsumptionEntry,
    pub food: Option<Food>,
}

#[derive(Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyTotals {
    pub calories: i64,
    pub protein: i64,
    pub carbs: i64,
    pub fat: i64,
    pub estimated_weight_gain_grams: i64,
}

#[derive(Debug, Serialize)]
pub struct DailySummary {
    pub items: Vec<SummaryItem>,
    pub totals: DailyTotals,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeightGainQuery {
    pub total_calories: f64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeightGainResponse {
    pub weight_gain_grams: i64,
    pub weight_gain_kg: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn summary_item_flattens_entry_fields() {
        let item = SummaryItem {
            entry: ConsumptionEntry {
                id: 7,
                user_id: 1,
                food_id: 3,
                portion_size_grams: 150,
                calories: 78,
                consumed_at: datetime!(2026-08-07 12:30 UTC),
            },
            food: None,
        };

        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["id"], 7);
        assert_eq!(json["foodId"], 3);
        assert_eq!(json["portionSizeGrams"], 150);
        assert_eq!(json["calories"], 78);
        assert!(json["food"].is_null());
    }

    #[test]
    fn totals_serialize_with_camel_case_keys() {
        let totals = DailyTotals {
            calories: 330,
            protein: 62,
            carbs: 0,
            fat: 8,
            estimated_weight_gain_grams: 43,
        };

        let json = serde_json::to_value(&totals).unwrap();
        assert_eq!(json["estimatedWeightGainGrams"], 43);
        assert_eq!(json["calories"], 330);
    }

    #[test]
    fn record_request_accepts_camel_case_input() {
        let req: RecordConsumptionRequest =
            serde_json::from_str(r#"{"foodId":1,"portionSizeGrams":200}"#).unwrap();
        assert_eq!(req.food_id, 1);
        assert_eq!(req.portion_size_grams, 200);
    }

    #[test]
    fn weight_gain_response_shape() {
        let res = WeightGainResponse {
            weight_gain_grams: 1000,
            weight_gain_kg: "1.00".into(),
        };
        let json = serde_json::to_value(&res).unwrap();
        assert_eq!(json["weightGainGrams"], 1000);
        assert_eq!(json["weightGainKg"], "1.00");
    }
}
