// In-memory catalog of ingredients and meals, frozen once loaded

pub mod audit;
pub mod lookup;
pub mod models;
pub mod store;

// Re-exports
pub use audit::CatalogWarning;
pub use lookup::normalize_name;
pub use models::{
    Dataset, Ingredient, IngredientOption, Meal, MealIngredientRef, PriceUnit, Quality,
    QuantityType,
};
pub use store::Catalog;
