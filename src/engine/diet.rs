use crate::catalog::{Catalog, Meal};
use serde::Serialize;

pub const VEGETARIAN: &str = "vegetarian";
pub const VEGAN: &str = "vegan";

/// Which dietary filters a listing applies; the default applies none
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DietFilter {
    pub vegetarian: bool,
    pub vegan: bool,
}

/// Meal projected for listings
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MealSummary {
    pub id: i64,
    pub name: String,
    pub ingredients: Vec<String>,
}

impl From<&Meal> for MealSummary {
    fn from(meal: &Meal) -> Self {
        Self {
            id: meal.id,
            name: meal.name.clone(),
            ingredients: meal.ingredient_names(),
        }
    }
}

/// True when every ingredient resolves and carries the tag.
/// Unknown ingredients disqualify the meal.
fn all_ingredients_tagged(catalog: &Catalog, meal: &Meal, group: &str) -> bool {
    meal.ingredients.iter().all(|reference| {
        catalog
            .ingredient(&reference.name)
            .is_some_and(|ingredient| ingredient.has_group(group))
    })
}

pub fn is_vegetarian(catalog: &Catalog, meal: &Meal) -> bool {
    all_ingredients_tagged(catalog, meal, VEGETARIAN)
}

pub fn is_vegan(catalog: &Catalog, meal: &Meal) -> bool {
    all_ingredients_tagged(catalog, meal, VEGAN)
}

/// List meals passing every requested filter, in catalog order
pub fn list_meals(catalog: &Catalog, filter: DietFilter) -> Vec<MealSummary> {
    catalog
        .meals()
        .iter()
        .filter(|meal| !filter.vegetarian || is_vegetarian(catalog, meal))
        .filter(|meal| !filter.vegan || is_vegan(catalog, meal))
        .map(MealSummary::from)
        .collect()
}
