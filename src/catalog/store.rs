use crate::catalog::lookup::normalize_name;
use crate::catalog::models::{Dataset, Ingredient, Meal};
use crate::error::{Error, Result};
use serde_json::error::Category;
use std::collections::{HashMap, HashSet};
use std::path::Path;
use tracing::{debug, info};

/// Immutable in-memory catalog of ingredients and meals
#[derive(Debug, Clone)]
pub struct Catalog {
    ingredients: Vec<Ingredient>,
    meals: Vec<Meal>,
    pub(crate) ingredient_index: HashMap<String, usize>,
    meal_index: HashMap<i64, usize>,
}

impl Catalog {
    /// Build a catalog, validating the dataset and indexing it for lookups
    pub fn new(dataset: Dataset) -> Result<Self> {
        let Dataset { ingredients, meals } = dataset;

        let mut ingredient_index = HashMap::with_capacity(ingredients.len());
        for (position, ingredient) in ingredients.iter().enumerate() {
            validate_ingredient(ingredient)?;

            let key = normalize_name(&ingredient.name);
            if ingredient_index.insert(key, position).is_some() {
                return Err(Error::Dataset(format!(
                    "Duplicate ingredient name: {}",
                    ingredient.name
                )));
            }
        }

        let mut meal_index = HashMap::with_capacity(meals.len());
        for (position, meal) in meals.iter().enumerate() {
            validate_meal(meal)?;

            if meal_index.insert(meal.id, position).is_some() {
                return Err(Error::Dataset(format!("Duplicate meal id: {}", meal.id)));
            }
        }

        debug!(
            "Indexed {} ingredients and {} meals",
            ingredient_index.len(),
            meal_index.len()
        );

        Ok(Self {
            ingredients,
            meals,
            ingredient_index,
            meal_index,
        })
    }

    /// Parse and build a catalog from a JSON document
    pub fn from_json_str(content: &str) -> Result<Self> {
        let dataset: Dataset = serde_json::from_str(content).map_err(|e| match e.classify() {
            // Well-formed JSON carrying a wrong value, e.g. a price that is not a number
            Category::Data => Error::InvalidInput(format!("Invalid catalog data: {e}")),
            Category::Io | Category::Syntax | Category::Eof => {
                Error::Dataset(format!("Malformed catalog JSON: {e}"))
            }
        })?;
        Self::new(dataset)
    }

    /// Load a catalog from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            Error::Dataset(format!(
                "Failed to read catalog from {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;

        let catalog = Self::from_json_str(&content)?;
        info!(
            "Loaded catalog from {}: {} ingredients, {} meals",
            path.as_ref().display(),
            catalog.ingredients.len(),
            catalog.meals.len()
        );

        Ok(catalog)
    }

    pub fn ingredients(&self) -> &[Ingredient] {
        &self.ingredients
    }

    /// Meals in dataset order
    pub fn meals(&self) -> &[Meal] {
        &self.meals
    }

    pub fn meal(&self, id: i64) -> Result<&Meal> {
        self.meal_index
            .get(&id)
            .map(|&position| &self.meals[position])
            .ok_or(Error::MealNotFound(id))
    }

    pub(crate) fn ingredient_at(&self, position: usize) -> &Ingredient {
        &self.ingredients[position]
    }
}

fn validate_number(value: f64, what: &str) -> Result<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(Error::InvalidInput(format!(
            "{what} must be a non-negative number, got {value}"
        )));
    }
    Ok(())
}

fn validate_ingredient(ingredient: &Ingredient) -> Result<()> {
    if ingredient.name.trim().is_empty() {
        return Err(Error::Dataset("Ingredient name cannot be empty".to_string()));
    }

    let mut tiers = HashSet::new();
    for option in &ingredient.options {
        validate_number(option.price, &format!("Price of {}", ingredient.name))?;

        if !tiers.insert(option.quality) {
            return Err(Error::Dataset(format!(
                "Ingredient {} has more than one {} option",
                ingredient.name, option.quality
            )));
        }
    }

    Ok(())
}

fn validate_meal(meal: &Meal) -> Result<()> {
    for reference in &meal.ingredients {
        validate_number(
            reference.quantity,
            &format!("Quantity of {} in meal {}", reference.name, meal.id),
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const SALAD: &str = r#"{
        "ingredients": [
            {
                "name": "Tomato",
                "groups": ["vegetarian", "vegan"],
                "options": [
                    {"quality": "low", "price": 2.0, "unit": "kilogram"},
                    {"quality": "high", "price": 6.0, "unit": "kilogram"}
                ]
            }
        ],
        "meals": [
            {
                "id": 1,
                "name": "Salad",
                "ingredients": [{"name": "Tomato", "quantity": 200, "quantity_type": "gram"}]
            }
        ]
    }"#;

    #[test]
    fn test_from_json_str() {
        let catalog = Catalog::from_json_str(SALAD).unwrap();

        assert_eq!(catalog.ingredients().len(), 1);
        assert_eq!(catalog.meals().len(), 1);
        assert_eq!(catalog.meal(1).unwrap().name, "Salad");
    }

    #[test]
    fn test_unknown_meal_id() {
        let catalog = Catalog::from_json_str(SALAD).unwrap();

        assert!(matches!(catalog.meal(42), Err(Error::MealNotFound(42))));
    }

    #[test]
    fn test_reject_duplicate_ingredient_names() {
        let content = r#"{
            "ingredients": [
                {"name": "Rice", "groups": [], "options": []},
                {"name": "rice ", "groups": [], "options": []}
            ],
            "meals": []
        }"#;

        let result = Catalog::from_json_str(content);
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Duplicate ingredient name"));
    }

    #[test]
    fn test_reject_duplicate_meal_ids() {
        let content = r#"{
            "ingredients": [],
            "meals": [
                {"id": 3, "name": "Soup", "ingredients": []},
                {"id": 3, "name": "Stew", "ingredients": []}
            ]
        }"#;

        let result = Catalog::from_json_str(content);
        assert!(result.unwrap_err().to_string().contains("Duplicate meal id"));
    }

    #[test]
    fn test_reject_duplicate_tiers() {
        let content = r#"{
            "ingredients": [
                {
                    "name": "Rice",
                    "groups": [],
                    "options": [
                        {"quality": "low", "price": 1.0},
                        {"quality": "low", "price": 2.0}
                    ]
                }
            ],
            "meals": []
        }"#;

        let result = Catalog::from_json_str(content);
        assert!(result.unwrap_err().to_string().contains("more than one low"));
    }

    #[test]
    fn test_reject_negative_numbers() {
        let negative_price = r#"{
            "ingredients": [
                {"name": "Rice", "groups": [], "options": [{"quality": "low", "price": -1.0}]}
            ],
            "meals": []
        }"#;
        assert!(matches!(
            Catalog::from_json_str(negative_price),
            Err(Error::InvalidInput(_))
        ));

        let negative_quantity = r#"{
            "ingredients": [],
            "meals": [
                {
                    "id": 1,
                    "name": "Soup",
                    "ingredients": [{"name": "Water", "quantity": -5, "quantity_type": "liter"}]
                }
            ]
        }"#;
        assert!(matches!(
            Catalog::from_json_str(negative_quantity),
            Err(Error::InvalidInput(_))
        ));
    }

    #[test]
    fn test_reject_non_numeric_price() {
        let content = r#"{
            "ingredients": [
                {"name": "Rice", "groups": [], "options": [{"quality": "low", "price": "cheap"}]}
            ],
            "meals": []
        }"#;

        let err = Catalog::from_json_str(content).unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
        assert_eq!(err.status_code(), axum::http::StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_reject_non_numeric_quantity() {
        let content = r#"{
            "ingredients": [],
            "meals": [
                {
                    "id": 1,
                    "name": "Soup",
                    "ingredients": [{"name": "Water", "quantity": "lots", "quantity_type": "liter"}]
                }
            ]
        }"#;

        assert!(matches!(
            Catalog::from_json_str(content),
            Err(Error::InvalidInput(_))
        ));
    }

    #[test]
    fn test_reject_malformed_json() {
        let result = Catalog::from_json_str(r#"{"ingredients": [,"#);
        assert!(matches!(result, Err(Error::Dataset(_))));
    }

    #[test]
    fn test_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(SALAD.as_bytes()).unwrap();
        file.flush().unwrap();

        let catalog = Catalog::from_file(file.path()).unwrap();
        assert_eq!(catalog.meals()[0].id, 1);
    }

    #[test]
    fn test_from_missing_file() {
        let result = Catalog::from_file("/nonexistent/catalog.json");
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Failed to read catalog"));
    }
}
