use crate::catalog::{Catalog, Meal};
use tracing::debug;

/// Meals whose name contains the query, ignoring case, in catalog order.
/// An empty query matches nothing.
pub fn search_meals<'a>(catalog: &'a Catalog, query: &str) -> Vec<&'a Meal> {
    if query.is_empty() {
        return Vec::new();
    }

    let needle = query.to_lowercase();
    let matches: Vec<&Meal> = catalog
        .meals()
        .iter()
        .filter(|meal| meal.name.to_lowercase().contains(&needle))
        .collect();

    debug!("Search '{}' matched {} meals", query, matches.len());
    matches
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::fixtures;

    fn ids(meals: &[&Meal]) -> Vec<i64> {
        meals.iter().map(|m| m.id).collect()
    }

    #[test]
    fn test_empty_query_matches_nothing() {
        let catalog = fixtures::menu_catalog();
        assert!(search_meals(&catalog, "").is_empty());
    }

    #[test]
    fn test_no_match() {
        let catalog = fixtures::menu_catalog();
        assert!(search_meals(&catalog, "lasagna").is_empty());
    }

    #[test]
    fn test_exact_name_any_case() {
        let catalog = fixtures::menu_catalog();

        assert_eq!(ids(&search_meals(&catalog, "Salad")), vec![1]);
        assert_eq!(ids(&search_meals(&catalog, "SALAD")), vec![1]);
        assert_eq!(ids(&search_meals(&catalog, "tofu bowl")), vec![4]);
    }

    #[test]
    fn test_substring_keeps_catalog_order() {
        let catalog = fixtures::menu_catalog();

        assert_eq!(ids(&search_meals(&catalog, "a")), vec![1, 2, 3, 6, 7]);
        assert_eq!(ids(&search_meals(&catalog, "w")), vec![3, 4, 5, 6]);
    }
}
