use std::collections::HashMap;
use std::str::FromStr;

use anyhow::Context;
use aws_sdk_dynamodb::types::AttributeValue;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::Serialize;

/// Stored nutrition summary for one uploaded image, keyed by its object key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NutritionRecord {
    pub image_key: String,
    pub food_name: String,
    pub calories: Decimal,
    pub carbohydrates: Decimal,
    pub protein: Decimal,
    pub fat: Decimal,
}

/// Transport shape: decimals widened to `f64`.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct NutritionResult {
    pub image_key: String,
    pub food_name: String,
    pub calories: f64,
    pub carbohydrates: f64,
    pub protein: f64,
    pub fat: f64,
}

impl From<NutritionRecord> for NutritionResult {
    fn from(r: NutritionRecord) -> Self {
        Self {
            image_key: r.image_key,
            food_name: r.food_name,
            calories: r.calories.to_f64().unwrap_or_default(),
            carbohydrates: r.carbohydrates.to_f64().unwrap_or_default(),
            protein: r.protein.to_f64().unwrap_or_default(),
            fat: r.fat.to_f64().unwrap_or_default(),
        }
    }
}

pub(crate) type Item = HashMap<String, AttributeValue>;

impl NutritionRecord {
    pub(crate) fn into_item(self) -> Item {
        HashMap::from([
            ("image_key".to_string(), AttributeValue::S(self.image_key)),
            ("food_name".to_string(), AttributeValue::S(self.food_name)),
            ("calories".to_string(), AttributeValue::N(self.calories.to_string())),
            (
                "carbohydrates".to_string(),
                AttributeValue::N(self.carbohydrates.to_string()),
            ),
            ("protein".to_string(), AttributeValue::N(self.protein.to_string())),
            ("fat".to_string(), AttributeValue::N(self.fat.to_string())),
        ])
    }

    pub(crate) fn from_item(item: &Item) -> anyhow::Result<Self> {
        Ok(Self {
            image_key: string_attr(item, "image_key")?,
            food_name: string_attr(item, "food_name")?,
            calories: number_attr(item, "calories")?,
            carbohydrates: number_attr(item, "carbohydrates")?,
            protein: number_attr(item, "protein")?,
            fat: number_attr(item, "fat")?,
        })
    }
}

fn string_attr(item: &Item, name: &str) -> anyhow::Result<String> {
    match item.get(name) {
        Some(AttributeValue::S(s)) => Ok(s.clone()),
        _ => anyhow::bail!("item attribute {name} is not a string"),
    }
}

// Absent numbers read as zero, matching how the writer defaults them.
fn number_attr(item: &Item, name: &str) -> anyhow::Result<Decimal> {
    match item.get(name) {
        Some(AttributeValue::N(n)) => {
            Decimal::from_str(n).with_context(|| format!("item attribute {name} = {n}"))
        }
        None => Ok(Decimal::ZERO),
        _ => anyhow::bail!("item attribute {name} is not a number"),
    }
}
