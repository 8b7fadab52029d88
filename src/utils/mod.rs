// Utility functions
pub mod validation;

pub use validation::{parse_flag, parse_meal_id, parse_quality_pair};
