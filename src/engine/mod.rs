// Query and pricing engine over a frozen catalog
// Every operation here is a pure read of the catalog

pub mod diet;
pub mod pricing;
pub mod sampler;
pub mod scoring;
pub mod search;

// Re-exports
pub use diet::{is_vegan, is_vegetarian, list_meals, DietFilter, MealSummary};
pub use pricing::{
    meal_detail, quality_price, quantity_price, quantity_price_by_id, to_kilograms, BaselineTier,
    IngredientDetail, MealDetail, PricingPolicy, QualitySelection, RequestedQuality, UnitTable,
};
pub use sampler::{pick_within_budget, pick_within_budget_random, Budget, BudgetPick};
pub use scoring::{multiplier, quality_score};
pub use search::search_meals;
