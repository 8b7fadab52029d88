use crate::catalog::store::Catalog;
use serde::Serialize;
use std::fmt;
use tracing::warn;

/// Data-quality finding that queries tolerate silently
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CatalogWarning {
    /// Meal references an ingredient missing from the catalog
    DanglingIngredient { meal_id: i64, ingredient: String },
    /// Ingredient has no priced option and always costs zero
    NoOptions { ingredient: String },
    /// Ingredient is tagged vegan but not vegetarian
    VeganNotVegetarian { ingredient: String },
}

impl fmt::Display for CatalogWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogWarning::DanglingIngredient {
                meal_id,
                ingredient,
            } => write!(f, "meal {meal_id} references unknown ingredient '{ingredient}'"),
            CatalogWarning::NoOptions { ingredient } => {
                write!(f, "ingredient '{ingredient}' has no quality options")
            }
            CatalogWarning::VeganNotVegetarian { ingredient } => {
                write!(f, "ingredient '{ingredient}' is vegan but not vegetarian")
            }
        }
    }
}

impl Catalog {
    /// Collect the data-quality findings of this catalog
    pub fn audit(&self) -> Vec<CatalogWarning> {
        let mut warnings = Vec::new();

        for ingredient in self.ingredients() {
            if ingredient.options.is_empty() {
                warnings.push(CatalogWarning::NoOptions {
                    ingredient: ingredient.name.clone(),
                });
            }
            if ingredient.has_group("vegan") && !ingredient.has_group("vegetarian") {
                warnings.push(CatalogWarning::VeganNotVegetarian {
                    ingredient: ingredient.name.clone(),
                });
            }
        }

        for meal in self.meals() {
            for reference in &meal.ingredients {
                if self.ingredient(&reference.name).is_none() {
                    warnings.push(CatalogWarning::DanglingIngredient {
                        meal_id: meal.id,
                        ingredient: reference.name.clone(),
                    });
                }
            }
        }

        warnings
    }

    /// Log every audit finding, returning how many there were
    pub fn log_audit(&self) -> usize {
        let warnings = self.audit();
        for warning in &warnings {
            warn!("Catalog: {}", warning);
        }
        warnings.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_audit_findings() {
        let catalog = Catalog::from_json_str(
            r#"{
                "ingredients": [
                    {
                        "name": "Tofu",
                        "groups": ["vegan"],
                        "options": [{"quality": "low", "price": 4}]
                    },
                    {"name": "Salt", "groups": ["vegan", "vegetarian"], "options": []}
                ],
                "meals": [
                    {
                        "id": 9,
                        "name": "Mystery",
                        "ingredients": [
                            {"name": "tofu", "quantity": 100, "quantity_type": "gram"},
                            {"name": "Unicorn", "quantity": 1, "quantity_type": "unit"}
                        ]
                    }
                ]
            }"#,
        )
        .unwrap();

        let warnings = catalog.audit();

        assert_eq!(warnings.len(), 3);
        assert!(warnings.contains(&CatalogWarning::VeganNotVegetarian {
            ingredient: "Tofu".to_string()
        }));
        assert!(warnings.contains(&CatalogWarning::NoOptions {
            ingredient: "Salt".to_string()
        }));
        assert!(warnings.contains(&CatalogWarning::DanglingIngredient {
            meal_id: 9,
            ingredient: "Unicorn".to_string()
        }));
        assert_eq!(catalog.log_audit(), 3);
    }

    #[test]
    fn test_warning_display() {
        let warning = CatalogWarning::DanglingIngredient {
            meal_id: 2,
            ingredient: "Saffron".to_string(),
        };
        assert_eq!(
            warning.to_string(),
            "meal 2 references unknown ingredient 'Saffron'"
        );
    }
}
