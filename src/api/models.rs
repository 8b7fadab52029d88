use serde::{Deserialize, Serialize};

/// Dietary listing query parameters; flags are loose strings like "yes" or "1"
#[derive(Debug, Clone, Deserialize)]
pub struct ListMealsParams {
    #[serde(default)]
    pub is_vegetarian: Option<String>,
    #[serde(default)]
    pub is_vegan: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GetMealParams {
    #[serde(default)]
    pub id: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub query: String,
}

/// Random pick form; an absent budget means no limit
#[derive(Debug, Clone, Deserialize)]
pub struct RandomParams {
    #[serde(default)]
    pub budget: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PriceResponse {
    pub price: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct QualityResponse {
    pub quality_score: f64,
}

/// Health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub meals: usize,
    pub ingredients: usize,
}
