use std::str::FromStr;

use anyhow::Context;
use rust_decimal::Decimal;
use serde_json::Number;
use tracing::{info, instrument};

use crate::error::ScanError;
use crate::nutritionix::Food;
use crate::results::repo_types::NutritionRecord;
use crate::state::ScanState;

pub const MAX_LABELS: i32 = 5;
pub const UNKNOWN_FOOD: &str = "unknown";

/// Label the image, look the top label up and store the first match under
/// the object key. Any earlier success is dropped if a later call fails.
#[instrument(skip(st))]
pub async fn scan_object(
    st: &ScanState,
    bucket: &str,
    key: &str,
) -> Result<NutritionRecord, ScanError> {
    let labels = st.detector.detect_labels(bucket, key, MAX_LABELS).await?;
    let food_item = labels
        .into_iter()
        .next()
        .unwrap_or_else(|| UNKNOWN_FOOD.to_string());
    info!(%food_item, "detected food item");

    let foods = st.nutrition.natural_nutrients(&food_item).await?;
    let food = foods.into_iter().next().ok_or(ScanError::NoFoodData)?;

    let record = summarize(key, &food_item, food)?;
    st.store
        .put(record.clone())
        .await
        .with_context(|| format!("store nutrition result {}", key))?;

    info!(food = %record.food_name, calories = %record.calories, "stored nutrition result");
    Ok(record)
}

pub fn summarize(key: &str, label: &str, food: Food) -> anyhow::Result<NutritionRecord> {
    Ok(NutritionRecord {
        image_key: key.to_string(),
        food_name: food.food_name.unwrap_or_else(|| label.to_string()),
        calories: to_decimal(food.nf_calories.as_ref()).context("nf_calories")?,
        carbohydrates: to_decimal(food.nf_total_carbohydrate.as_ref())
            .context("nf_total_carbohydrate")?,
        protein: to_decimal(food.nf_protein.as_ref()).context("nf_protein")?,
        fat: to_decimal(food.nf_total_fat.as_ref()).context("nf_total_fat")?,
    })
}

// Parsed from the number's text so 0.1 stays 0.1.
fn to_decimal(n: Option<&Number>) -> anyhow::Result<Decimal> {
    match n {
        Some(n) => Decimal::from_str(&n.to_string()).with_context(|| format!("decimal from {n}")),
        None => Ok(Decimal::ZERO),
    }
}

#[cfg(test)]
mod scanner_tests {
    use std::sync::Arc;

    use serde_json::json;

    use super::*;
    use crate::results::repo::NutritionStore;
    use crate::state::fakes::{FailingStore, FakeDetector, FakeNutrition, MemoryStore};

    fn pizza() -> Food {
        serde_json::from_value(json!({
            "food_name": "pizza",
            "nf_calories": 285,
            "nf_total_carbohydrate": 36,
            "nf_protein": 12,
            "nf_total_fat": 10
        }))
        .unwrap()
    }

    fn labels(names: &[&str]) -> Arc<FakeDetector> {
        Arc::new(FakeDetector(names.iter().map(|s| s.to_string()).collect()))
    }

    #[tokio::test]
    async fn top_label_is_looked_up_and_stored() {
        let store = Arc::new(MemoryStore::default());
        let api = Arc::new(FakeNutrition::with_foods(vec![pizza()]));
        let st = ScanState::from_parts(labels(&["Pizza", "Food", "Dish"]), api.clone(), store.clone());

        scan_object(&st, "uploads", "img-1.jpg").await.unwrap();

        assert_eq!(api.queries(), vec!["Pizza".to_string()]);
        let stored = store.get("img-1.jpg").await.unwrap().unwrap();
        assert_eq!(
            stored,
            NutritionRecord {
                image_key: "img-1.jpg".into(),
                food_name: "pizza".into(),
                calories: Decimal::from(285),
                carbohydrates: Decimal::from(36),
                protein: Decimal::from(12),
                fat: Decimal::from(10),
            }
        );
    }

    #[tokio::test]
    async fn no_labels_queries_unknown() {
        let store = Arc::new(MemoryStore::default());
        let api = Arc::new(FakeNutrition::with_foods(vec![pizza()]));
        let st = ScanState::from_parts(labels(&[]), api.clone(), store.clone());

        scan_object(&st, "uploads", "blank.jpg").await.unwrap();
        assert_eq!(api.queries(), vec![UNKNOWN_FOOD.to_string()]);
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn empty_foods_writes_nothing() {
        let store = Arc::new(MemoryStore::default());
        let st = ScanState::from_parts(
            labels(&["Rock"]),
            Arc::new(FakeNutrition::default()),
            store.clone(),
        );

        let err = scan_object(&st, "uploads", "rock.jpg").await.unwrap_err();
        assert!(matches!(err, ScanError::NoFoodData));
        assert_eq!(store.len(), 0);
    }

    #[tokio::test]
    async fn api_failure_writes_nothing() {
        let store = Arc::new(MemoryStore::default());
        let st = ScanState::from_parts(
            labels(&["Pizza"]),
            Arc::new(FakeNutrition::failing()),
            store.clone(),
        );

        let err = scan_object(&st, "uploads", "p.jpg").await.unwrap_err();
        assert!(matches!(err, ScanError::Upstream(_)));
        assert_eq!(store.len(), 0);
    }

    #[tokio::test]
    async fn store_failure_is_upstream() {
        let st = ScanState::from_parts(
            labels(&["Pizza"]),
            Arc::new(FakeNutrition::with_foods(vec![pizza()])),
            Arc::new(FailingStore),
        );
        let err = scan_object(&st, "uploads", "p.jpg").await.unwrap_err();
        assert_eq!(err.to_string(), "store nutrition result p.jpg");
    }

    #[tokio::test]
    async fn rescanning_overwrites() {
        let store = Arc::new(MemoryStore::default());
        let first = ScanState::from_parts(
            labels(&["Pizza"]),
            Arc::new(FakeNutrition::with_foods(vec![pizza()])),
            store.clone(),
        );
        scan_object(&first, "uploads", "same.jpg").await.unwrap();

        let salad: Food = serde_json::from_value(json!({ "food_name": "salad", "nf_calories": 33 })).unwrap();
        let second = ScanState::from_parts(
            labels(&["Salad"]),
            Arc::new(FakeNutrition::with_foods(vec![salad])),
            store.clone(),
        );
        scan_object(&second, "uploads", "same.jpg").await.unwrap();

        let stored = store.get("same.jpg").await.unwrap().unwrap();
        assert_eq!(store.len(), 1);
        assert_eq!(stored.food_name, "salad");
        assert_eq!(stored.fat, Decimal::ZERO);
    }

    #[test]
    fn summarize_defaults_and_precision() {
        let food: Food = serde_json::from_value(json!({
            "nf_calories": 0.1,
            "nf_total_carbohydrate": 35.66,
            "nf_protein": null
        }))
        .unwrap();

        let r = summarize("k.jpg", "Banana", food).unwrap();
        assert_eq!(r.food_name, "Banana");
        assert_eq!(r.calories.to_string(), "0.1");
        assert_eq!(r.carbohydrates.to_string(), "35.66");
        assert_eq!(r.protein, Decimal::ZERO);
        assert_eq!(r.fat, Decimal::ZERO);
    }
}
