use crate::catalog::Catalog;
use crate::engine::{
    self, Budget, BudgetPick, DietFilter, MealDetail, MealSummary, PricingPolicy, QualitySelection,
};
use crate::utils::parse_quality_pair;
use crate::Result;

/// List meals passing the diet filters
pub fn list(catalog: &Catalog, filter: DietFilter) -> Result<()> {
    let meals = engine::list_meals(catalog, filter);
    print!("{}", format_meal_table(&meals));
    Ok(())
}

/// Show a meal with its ingredient options
pub fn show(catalog: &Catalog, meal_id: i64) -> Result<()> {
    let detail = engine::meal_detail(catalog, meal_id)?;
    print!("{}", format_meal_detail(&detail));
    Ok(())
}

/// Price a meal at the requested tiers
pub fn price(catalog: &Catalog, meal_id: i64, qualities: &[String]) -> Result<()> {
    let selection = selection_from_args(qualities)?;
    let price = engine::quality_price(catalog, meal_id, &selection)?;

    println!("Price of meal {meal_id}: {price:.2}");
    Ok(())
}

/// Score a meal at the requested tiers
pub fn quality(catalog: &Catalog, meal_id: i64, qualities: &[String]) -> Result<()> {
    let selection = selection_from_args(qualities)?;
    let score = engine::quality_score(catalog, meal_id, &selection)?;

    println!("Quality score of meal {meal_id}: {score:.2}");
    Ok(())
}

/// Pick a random meal within budget
pub fn random(catalog: &Catalog, policy: &PricingPolicy, budget: Option<&str>) -> Result<()> {
    let budget = Budget::parse(budget)?;
    let pick = engine::pick_within_budget_random(catalog, policy, budget)?;

    print!("{}", format_pick(&pick));
    Ok(())
}

/// Search meals by name
pub fn search(catalog: &Catalog, query: &str) -> Result<()> {
    let meals: Vec<MealSummary> = engine::search_meals(catalog, query)
        .into_iter()
        .map(MealSummary::from)
        .collect();

    print!("{}", format_meal_table(&meals));
    Ok(())
}

/// Print catalog audit findings
pub fn check(catalog: &Catalog) -> Result<()> {
    let warnings = catalog.audit();

    if warnings.is_empty() {
        println!(
            "✓ Catalog OK: {} ingredients, {} meals",
            catalog.ingredients().len(),
            catalog.meals().len()
        );
        return Ok(());
    }

    println!("Found {} catalog warnings:\n", warnings.len());
    for warning in &warnings {
        println!("  - {warning}");
    }
    Ok(())
}

// Helper functions

fn selection_from_args(qualities: &[String]) -> Result<QualitySelection> {
    let pairs = qualities
        .iter()
        .map(|q| parse_quality_pair(q))
        .collect::<Result<Vec<_>>>()?;

    Ok(QualitySelection::from_pairs(pairs))
}

fn format_meal_table(meals: &[MealSummary]) -> String {
    if meals.is_empty() {
        return "No meals found\n".to_string();
    }

    let mut out = format!("\nFound {} meals:\n\n", meals.len());
    out.push_str(&format!("{:<5} {:<30} {:<40}\n", "ID", "Name", "Ingredients"));
    out.push_str(&format!("{}\n", "-".repeat(75)));

    for meal in meals {
        out.push_str(&format!(
            "{:<5} {:<30} {:<40}\n",
            meal.id,
            truncate(&meal.name, 28),
            truncate(&meal.ingredients.join(", "), 38)
        ));
    }

    out
}

fn format_meal_detail(detail: &MealDetail) -> String {
    let mut out = format!("{} (#{})\n", detail.name, detail.id);

    for ingredient in &detail.ingredients {
        let options = ingredient
            .options
            .iter()
            .map(|o| format!("{} {:.2}/kg", o.quality, o.price))
            .collect::<Vec<_>>()
            .join(", ");
        out.push_str(&format!("  {}: {}\n", ingredient.name, options));
    }

    out
}

fn format_pick(pick: &BudgetPick) -> String {
    format!(
        "{} (#{}) for {:.2}\n  Ingredients: {}\n",
        pick.name,
        pick.id,
        pick.price,
        pick.ingredients.join(", ")
    )
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{kept}...")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{IngredientOption, PriceUnit, Quality};
    use crate::engine::IngredientDetail;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Salad", 10), "Salad");
        assert_eq!(truncate("Spaghetti Carbonara", 10), "Spaghet...");
        assert_eq!(truncate("Crème brûlée maison", 8), "Crème...");
    }

    #[test]
    fn test_format_empty_table() {
        assert_eq!(format_meal_table(&[]), "No meals found\n");
    }

    #[test]
    fn test_format_meal_table() {
        let table = format_meal_table(&[MealSummary {
            id: 1,
            name: "Salad".to_string(),
            ingredients: vec!["Tomato".to_string(), "Lettuce".to_string()],
        }]);

        assert!(table.contains("Found 1 meals"));
        assert!(table.contains("Tomato, Lettuce"));
    }

    #[test]
    fn test_format_meal_detail() {
        let detail = MealDetail {
            id: 1,
            name: "Salad".to_string(),
            ingredients: vec![IngredientDetail {
                name: "Tomato".to_string(),
                options: vec![IngredientOption {
                    quality: Quality::Low,
                    price: 2.0,
                    unit: PriceUnit::Kilogram,
                }],
            }],
        };

        assert_eq!(
            format_meal_detail(&detail),
            "Salad (#1)\n  Tomato: low 2.00/kg\n"
        );
    }

    #[test]
    fn test_selection_from_args() {
        let selection =
            selection_from_args(&["Rice=low".to_string(), "chicken=medium".to_string()]).unwrap();
        assert_eq!(selection.len(), 2);

        assert!(selection_from_args(&["Rice".to_string()]).is_err());
    }
}
