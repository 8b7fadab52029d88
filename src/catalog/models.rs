use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Quality tier of an ingredient option
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Quality {
    Low,
    Medium,
    High,
}

impl Quality {
    pub fn as_str(&self) -> &'static str {
        match self {
            Quality::Low => "low",
            Quality::Medium => "medium",
            Quality::High => "high",
        }
    }
}

impl fmt::Display for Quality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Quality {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(Quality::Low),
            "medium" => Ok(Quality::Medium),
            "high" => Ok(Quality::High),
            _ => Err(Error::InvalidInput(format!(
                "Invalid quality: {s}. Must be low, medium, or high"
            ))),
        }
    }
}

/// Unit an option price is quoted per
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriceUnit {
    #[default]
    Kilogram,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngredientOption {
    pub quality: Quality,
    pub price: f64,
    #[serde(default, alias = "per_amount")]
    pub unit: PriceUnit,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    pub name: String,
    #[serde(default)]
    pub groups: Vec<String>,
    #[serde(default)]
    pub options: Vec<IngredientOption>,
}

impl Ingredient {
    /// Whether the ingredient carries a dietary tag
    pub fn has_group(&self, group: &str) -> bool {
        self.groups.iter().any(|g| g == group)
    }

    /// Option offered at the given tier, if any
    pub fn option(&self, quality: Quality) -> Option<&IngredientOption> {
        self.options.iter().find(|o| o.quality == quality)
    }
}

/// Unit a meal states an ingredient quantity in
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum QuantityType {
    Gram,
    Liter,
    Milliliter,
    Unit,
    Other(String),
}

impl From<String> for QuantityType {
    fn from(value: String) -> Self {
        match value.as_str() {
            "gram" => QuantityType::Gram,
            "liter" => QuantityType::Liter,
            "milliliter" => QuantityType::Milliliter,
            "unit" => QuantityType::Unit,
            _ => QuantityType::Other(value),
        }
    }
}

impl From<QuantityType> for String {
    fn from(value: QuantityType) -> Self {
        match value {
            QuantityType::Gram => "gram".to_string(),
            QuantityType::Liter => "liter".to_string(),
            QuantityType::Milliliter => "milliliter".to_string(),
            QuantityType::Unit => "unit".to_string(),
            QuantityType::Other(other) => other,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealIngredientRef {
    pub name: String,
    pub quantity: f64,
    pub quantity_type: QuantityType,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meal {
    pub id: i64,
    pub name: String,
    pub ingredients: Vec<MealIngredientRef>,
}

impl Meal {
    /// Ingredient names in the order the meal lists them
    pub fn ingredient_names(&self) -> Vec<String> {
        self.ingredients.iter().map(|i| i.name.clone()).collect()
    }
}

/// Raw dataset as it is stored on disk
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Dataset {
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,
    #[serde(default)]
    pub meals: Vec<Meal>,
}
