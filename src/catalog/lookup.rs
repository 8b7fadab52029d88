use crate::catalog::models::Ingredient;
use crate::catalog::store::Catalog;

/// Normalize ingredient name (lowercase, trim)
pub fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}

impl Catalog {
    /// Resolve an ingredient by name, ignoring case
    pub fn ingredient(&self, name: &str) -> Option<&Ingredient> {
        self.ingredient_index
            .get(&normalize_name(name))
            .map(|&position| self.ingredient_at(position))
    }
}
