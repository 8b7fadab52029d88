use crate::catalog::{Catalog, Meal};
use crate::engine::pricing::{quantity_price, PricingPolicy};
use crate::error::{Error, Result};
use rand::seq::IndexedRandom;
use rand::Rng;
use serde::Serialize;
use tracing::debug;

/// Spending limit for a random pick
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Budget {
    #[default]
    Unbounded,
    AtMost(f64),
}

impl Budget {
    pub fn at_most(limit: f64) -> Result<Self> {
        if limit.is_nan() || limit < 0.0 {
            return Err(Error::InvalidInput(format!(
                "Budget must be a non-negative number, got {limit}"
            )));
        }
        Ok(Budget::AtMost(limit))
    }

    /// Parse an optional budget; an absent value means no limit
    pub fn parse(value: Option<&str>) -> Result<Self> {
        match value {
            None => Ok(Budget::Unbounded),
            Some(raw) => {
                let limit = raw
                    .trim()
                    .parse::<f64>()
                    .map_err(|_| Error::InvalidInput("Invalid budget value".to_string()))?;
                Self::at_most(limit)
            }
        }
    }

    pub fn allows(&self, price: f64) -> bool {
        match self {
            Budget::Unbounded => true,
            Budget::AtMost(limit) => price <= *limit,
        }
    }
}

/// Meal drawn by the sampler, with its quantity price
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BudgetPick {
    pub id: i64,
    pub name: String,
    pub price: f64,
    pub ingredients: Vec<String>,
}

/// Draw one meal uniformly from those whose quantity price fits the budget.
/// Every candidate is already within budget, so the draw is never repeated.
pub fn pick_within_budget<R: Rng + ?Sized>(
    catalog: &Catalog,
    policy: &PricingPolicy,
    budget: Budget,
    rng: &mut R,
) -> Result<BudgetPick> {
    let eligible: Vec<(&Meal, f64)> = catalog
        .meals()
        .iter()
        .map(|meal| (meal, quantity_price(catalog, meal, policy)))
        .filter(|(_, price)| budget.allows(*price))
        .collect();

    debug!(
        "{} of {} meals fit budget {:?}",
        eligible.len(),
        catalog.meals().len(),
        budget
    );

    let (meal, price) = eligible.choose(rng).ok_or(Error::NoMealsInBudget)?;

    Ok(BudgetPick {
        id: meal.id,
        name: meal.name.clone(),
        price: *price,
        ingredients: meal.ingredient_names(),
    })
}

/// Same as [`pick_within_budget`] with the thread-local generator
pub fn pick_within_budget_random(
    catalog: &Catalog,
    policy: &PricingPolicy,
    budget: Budget,
) -> Result<BudgetPick> {
    let mut rng = rand::rng();
    pick_within_budget(catalog, policy, budget, &mut rng)
}
