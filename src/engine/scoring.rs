use crate::catalog::{Catalog, Quality};
use crate::engine::pricing::{tier_price, QualitySelection, RequestedQuality};
use crate::error::Result;

/// Weight of a requested tier: high 5, medium 3, anything else 1
pub fn multiplier(requested: &RequestedQuality) -> f64 {
    match requested.tier() {
        Some(Quality::High) => 5.0,
        Some(Quality::Medium) => 3.0,
        _ => 1.0,
    }
}

/// Quality score of a meal: each ingredient's tier price times the tier weight.
/// Not normalized, so bigger and pricier meals score higher.
pub fn quality_score(catalog: &Catalog, meal_id: i64, selection: &QualitySelection) -> Result<f64> {
    let meal = catalog.meal(meal_id)?;

    let score = meal
        .ingredients
        .iter()
        .map(|reference| {
            let requested = selection.requested(&reference.name);
            tier_price(catalog, &reference.name, requested) * multiplier(requested)
        })
        .sum();

    Ok(score)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Dataset, Meal, MealIngredientRef, QuantityType};
    use crate::engine::fixtures::{self, assert_close};
    use crate::error::Error;

    #[test]
    fn test_multiplier() {
        assert_eq!(multiplier(&RequestedQuality::Tier(Quality::High)), 5.0);
        assert_eq!(multiplier(&RequestedQuality::Tier(Quality::Medium)), 3.0);
        assert_eq!(multiplier(&RequestedQuality::Tier(Quality::Low)), 1.0);
        assert_eq!(
            multiplier(&RequestedQuality::Unrecognized("organic".to_string())),
            1.0
        );
    }

    #[test]
    fn test_single_medium_ingredient_scores_thirty() {
        let menu = fixtures::menu_catalog();

        // Pasta is priced 10 at medium; a meal of pasta alone scores 30
        let catalog = Catalog::new(Dataset {
            ingredients: menu.ingredients().to_vec(),
            meals: vec![Meal {
                id: 10,
                name: "Plain Pasta".to_string(),
                ingredients: vec![MealIngredientRef {
                    name: "Pasta".to_string(),
                    quantity: 100.0,
                    quantity_type: QuantityType::Gram,
                }],
            }],
        })
        .unwrap();

        let selection = QualitySelection::from_pairs([("Pasta", "medium")]);
        assert_close(quality_score(&catalog, 10, &selection).unwrap(), 30.0);
    }

    #[test]
    fn test_default_selection_scores_high() {
        let catalog = fixtures::menu_catalog();

        // Rice 3 * 5 + Chicken 10 * 5
        assert_close(
            quality_score(&catalog, 2, &QualitySelection::new()).unwrap(),
            65.0,
        );
    }

    #[test]
    fn test_mixed_selection() {
        let catalog = fixtures::menu_catalog();

        let selection = QualitySelection::from_pairs([("Rice", "low"), ("Chicken", "medium")]);
        // Rice 1 * 1 + Chicken 8 * 3
        assert_close(quality_score(&catalog, 2, &selection).unwrap(), 25.0);
    }

    #[test]
    fn test_missing_data_scores_zero() {
        let catalog = fixtures::menu_catalog();

        // Unicorn is unknown, Tomato high is 6
        assert_close(
            quality_score(&catalog, 5, &QualitySelection::new()).unwrap(),
            30.0,
        );

        // Tofu has no low option, Rice low is 1
        let selection = QualitySelection::from_pairs([("Tofu", "low"), ("Rice", "low")]);
        assert_close(quality_score(&catalog, 4, &selection).unwrap(), 1.0);

        let selection = QualitySelection::from_pairs([("Tomato", "organic")]);
        assert_close(quality_score(&catalog, 1, &selection).unwrap(), 0.0);
    }

    #[test]
    fn test_unknown_meal() {
        let catalog = fixtures::menu_catalog();

        assert!(matches!(
            quality_score(&catalog, -1, &QualitySelection::new()),
            Err(Error::MealNotFound(-1))
        ));
    }
}
