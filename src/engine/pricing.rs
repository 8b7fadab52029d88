use crate::catalog::{
    normalize_name, Catalog, Ingredient, IngredientOption, Meal, Quality, QuantityType,
};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// Tier a caller asks for. Strings that name no tier are kept so they can
/// still be scored, but they never match an option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestedQuality {
    Tier(Quality),
    Unrecognized(String),
}

static DEFAULT_REQUEST: RequestedQuality = RequestedQuality::Tier(Quality::High);

impl RequestedQuality {
    pub fn parse(value: &str) -> Self {
        value
            .parse::<Quality>()
            .map(RequestedQuality::Tier)
            .unwrap_or_else(|_| RequestedQuality::Unrecognized(value.to_string()))
    }

    pub fn tier(&self) -> Option<Quality> {
        match self {
            RequestedQuality::Tier(quality) => Some(*quality),
            RequestedQuality::Unrecognized(_) => None,
        }
    }
}

impl Default for RequestedQuality {
    fn default() -> Self {
        DEFAULT_REQUEST.clone()
    }
}

impl fmt::Display for RequestedQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestedQuality::Tier(quality) => fmt::Display::fmt(quality, f),
            RequestedQuality::Unrecognized(value) => f.write_str(value),
        }
    }
}

/// Per-ingredient tier choices; ingredients left out default to high
#[derive(Debug, Clone, Default)]
pub struct QualitySelection {
    choices: HashMap<String, RequestedQuality>,
}

impl QualitySelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a selection from `(ingredient, tier)` string pairs
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut selection = Self::new();
        for (name, quality) in pairs {
            selection.set(name.as_ref(), RequestedQuality::parse(quality.as_ref()));
        }
        selection
    }

    pub fn with(mut self, ingredient: &str, quality: RequestedQuality) -> Self {
        self.set(ingredient, quality);
        self
    }

    pub fn set(&mut self, ingredient: &str, quality: RequestedQuality) {
        self.choices.insert(normalize_name(ingredient), quality);
    }

    /// Tier requested for an ingredient, matched ignoring case
    pub fn requested(&self, ingredient: &str) -> &RequestedQuality {
        self.choices
            .get(&normalize_name(ingredient))
            .unwrap_or(&DEFAULT_REQUEST)
    }

    pub fn len(&self) -> usize {
        self.choices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.choices.is_empty()
    }
}

/// Price of a named ingredient at the requested tier, zero when the
/// ingredient is unknown or lacks that tier
pub(crate) fn tier_price(catalog: &Catalog, name: &str, requested: &RequestedQuality) -> f64 {
    let Some(ingredient) = catalog.ingredient(name) else {
        debug!("Ingredient '{}' not in catalog, pricing it at zero", name);
        return 0.0;
    };

    requested
        .tier()
        .and_then(|quality| ingredient.option(quality))
        .map(|option| option.price)
        .unwrap_or(0.0)
}

/// Total price of a meal with the caller's tier choices
pub fn quality_price(catalog: &Catalog, meal_id: i64, selection: &QualitySelection) -> Result<f64> {
    let meal = catalog.meal(meal_id)?;

    let total = meal
        .ingredients
        .iter()
        .map(|reference| {
            tier_price(catalog, &reference.name, selection.requested(&reference.name))
        })
        .sum();

    Ok(total)
}

/// Conversion table from a stated quantity to kilograms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UnitTable {
    /// gram / 1000, liter * 1000, milliliter and everything else unchanged
    #[default]
    Legacy,
    /// gram / 1000, liter unchanged, milliliter / 1000 (1 kg per liter),
    /// everything else unchanged
    Metric,
}

impl FromStr for UnitTable {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "legacy" => Ok(UnitTable::Legacy),
            "metric" => Ok(UnitTable::Metric),
            _ => Err(Error::InvalidInput(format!(
                "Invalid unit table: {s}. Must be legacy or metric"
            ))),
        }
    }
}

pub fn to_kilograms(quantity: f64, quantity_type: &QuantityType, table: UnitTable) -> f64 {
    match (table, quantity_type) {
        (_, QuantityType::Gram) => quantity / 1000.0,
        (UnitTable::Legacy, QuantityType::Liter) => quantity * 1000.0,
        (UnitTable::Metric, QuantityType::Milliliter) => quantity / 1000.0,
        _ => quantity,
    }
}

/// Which option quantity pricing reads the per-kilogram price from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BaselineTier {
    /// First option in dataset order
    #[default]
    FirstListed,
    /// Cheapest option
    Lowest,
    /// The high tier, or the first option when there is none
    Default,
}

impl BaselineTier {
    pub fn option<'a>(&self, ingredient: &'a Ingredient) -> Option<&'a IngredientOption> {
        match self {
            BaselineTier::FirstListed => ingredient.options.first(),
            BaselineTier::Lowest => ingredient
                .options
                .iter()
                .min_by(|a, b| a.price.total_cmp(&b.price)),
            BaselineTier::Default => ingredient
                .option(Quality::High)
                .or_else(|| ingredient.options.first()),
        }
    }
}

impl FromStr for BaselineTier {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "first-listed" => Ok(BaselineTier::FirstListed),
            "lowest" => Ok(BaselineTier::Lowest),
            "default" => Ok(BaselineTier::Default),
            _ => Err(Error::InvalidInput(format!(
                "Invalid baseline tier: {s}. Must be first-listed, lowest, or default"
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PricingPolicy {
    pub unit_table: UnitTable,
    pub baseline_tier: BaselineTier,
}

/// Price of a meal from its stated quantities
pub fn quantity_price(catalog: &Catalog, meal: &Meal, policy: &PricingPolicy) -> f64 {
    meal.ingredients
        .iter()
        .map(|reference| {
            let Some(ingredient) = catalog.ingredient(&reference.name) else {
                debug!(
                    "Meal {} ingredient '{}' not in catalog, pricing it at zero",
                    meal.id, reference.name
                );
                return 0.0;
            };

            let per_kilogram = policy
                .baseline_tier
                .option(ingredient)
                .map(|option| option.price)
                .unwrap_or(0.0);

            per_kilogram
                * to_kilograms(
                    reference.quantity,
                    &reference.quantity_type,
                    policy.unit_table,
                )
        })
        .sum()
}

pub fn quantity_price_by_id(
    catalog: &Catalog,
    meal_id: i64,
    policy: &PricingPolicy,
) -> Result<f64> {
    let meal = catalog.meal(meal_id)?;
    Ok(quantity_price(catalog, meal, policy))
}

/// Meal with the price options of each ingredient
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MealDetail {
    pub id: i64,
    pub name: String,
    pub ingredients: Vec<IngredientDetail>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IngredientDetail {
    pub name: String,
    pub options: Vec<IngredientOption>,
}

/// Meal detail; ingredients missing from the catalog are left out
pub fn meal_detail(catalog: &Catalog, meal_id: i64) -> Result<MealDetail> {
    let meal = catalog.meal(meal_id)?;

    let ingredients = meal
        .ingredients
        .iter()
        .filter_map(|reference| {
            catalog
                .ingredient(&reference.name)
                .map(|ingredient| IngredientDetail {
                    name: reference.name.clone(),
                    options: ingredient.options.clone(),
                })
        })
        .collect();

    Ok(MealDetail {
        id: meal.id,
        name: meal.name.clone(),
        ingredients,
    })
}
