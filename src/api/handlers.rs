use axum::{
    extract::{Query, State},
    Form, Json,
};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

use crate::{
    api::models::*,
    catalog::{Catalog, Meal},
    engine::{self, Budget, BudgetPick, DietFilter, MealDetail, MealSummary, QualitySelection},
    utils::{parse_flag, parse_meal_id},
    Result,
};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub settings: crate::config::Settings,
}

/// Split a pricing form into the meal id and the per-ingredient tier choices
fn meal_and_selection(form: &HashMap<String, String>) -> Result<(i64, QualitySelection)> {
    let meal_id = parse_meal_id(form.get("meal_id").map(String::as_str))?;
    let selection =
        QualitySelection::from_pairs(form.iter().filter(|(key, _)| key.as_str() != "meal_id"));
    Ok((meal_id, selection))
}

/// GET / - Landing message
pub async fn index() -> Json<Vec<String>> {
    Json(vec!["Welcome to the best restaurant ever!".to_string()])
}

/// GET /listMeals - List meals, optionally only vegetarian and/or vegan ones
pub async fn list_meals(
    State(state): State<AppState>,
    Query(params): Query<ListMealsParams>,
) -> Result<Json<Vec<MealSummary>>> {
    debug!("List meals request: {:?}", params);

    let filter = DietFilter {
        vegetarian: parse_flag(params.is_vegetarian.as_deref()),
        vegan: parse_flag(params.is_vegan.as_deref()),
    };

    Ok(Json(engine::list_meals(&state.catalog, filter)))
}

/// GET /getMeal - Meal with the price options of its ingredients
pub async fn get_meal(
    State(state): State<AppState>,
    Query(params): Query<GetMealParams>,
) -> Result<Json<MealDetail>> {
    debug!("Get meal request: {:?}", params);

    let meal_id = parse_meal_id(params.id.as_deref())?;
    Ok(Json(engine::meal_detail(&state.catalog, meal_id)?))
}

/// POST /quality - Quality score for the chosen tiers
pub async fn calculate_quality(
    State(state): State<AppState>,
    Form(form): Form<HashMap<String, String>>,
) -> Result<Json<QualityResponse>> {
    let (meal_id, selection) = meal_and_selection(&form)?;
    debug!(
        "Quality request: meal {} with {} overrides",
        meal_id,
        selection.len()
    );

    let quality_score = engine::quality_score(&state.catalog, meal_id, &selection)?;
    Ok(Json(QualityResponse { quality_score }))
}

/// POST /price - Price for the chosen tiers
pub async fn calculate_price(
    State(state): State<AppState>,
    Form(form): Form<HashMap<String, String>>,
) -> Result<Json<PriceResponse>> {
    let (meal_id, selection) = meal_and_selection(&form)?;
    debug!(
        "Price request: meal {} with {} overrides",
        meal_id,
        selection.len()
    );

    let price = engine::quality_price(&state.catalog, meal_id, &selection)?;
    Ok(Json(PriceResponse { price }))
}

/// POST /random - Random meal whose quantity price fits the budget
pub async fn random_meal(
    State(state): State<AppState>,
    Form(params): Form<RandomParams>,
) -> Result<Json<BudgetPick>> {
    debug!("Random meal request: {:?}", params);

    let budget = Budget::parse(params.budget.as_deref())?;
    let pick = engine::pick_within_budget_random(&state.catalog, &state.settings.pricing, budget)?;

    Ok(Json(pick))
}

/// GET /search - Meals whose name contains the query
pub async fn search_meals(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Json<Vec<Meal>> {
    debug!("Search request: {:?}", params);

    let meals = engine::search_meals(&state.catalog, &params.query)
        .into_iter()
        .cloned()
        .collect();

    Json(meals)
}

/// GET /health - Health check endpoint
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        meals: state.catalog.meals().len(),
        ingredients: state.catalog.ingredients().len(),
    })
}
