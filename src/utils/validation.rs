// Parsing of loosely typed request arguments
use crate::error::{Error, Result};

/// Values a boolean-like flag accepts as true, compared ignoring case
const TRUTHY: &[&str] = &["true", "1", "t", "y", "yes"];

/// Interpret a flag string; anything not truthy, including absence, is false
pub fn parse_flag(value: Option<&str>) -> bool {
    value
        .map(|v| TRUTHY.contains(&v.trim().to_lowercase().as_str()))
        .unwrap_or(false)
}

/// Parse a required meal id argument
pub fn parse_meal_id(value: Option<&str>) -> Result<i64> {
    let raw = value.ok_or_else(|| Error::InvalidInput("Meal ID is required".to_string()))?;

    raw.trim()
        .parse::<i64>()
        .map_err(|_| Error::InvalidInput(format!("Invalid meal ID: {raw}")))
}

/// Parse a `name=tier` quality override
pub fn parse_quality_pair(value: &str) -> Result<(String, String)> {
    let (name, tier) = value.split_once('=').ok_or_else(|| {
        Error::InvalidInput(format!(
            "Invalid quality override: {value}. Expected ingredient=tier"
        ))
    })?;

    let name = name.trim();
    if name.is_empty() {
        return Err(Error::InvalidInput(
            "Quality override needs an ingredient name".to_string(),
        ));
    }

    Ok((name.to_string(), tier.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flag() {
        for value in ["true", "TRUE", "1", "t", "Y", "yes", "Yes"] {
            assert!(parse_flag(Some(value)), "{value} should be true");
        }
        for value in ["", "false", "0", "no", "on", "maybe"] {
            assert!(!parse_flag(Some(value)), "{value} should be false");
        }
        assert!(!parse_flag(None));
    }

    #[test]
    fn test_parse_meal_id() {
        assert_eq!(parse_meal_id(Some("42")).unwrap(), 42);
        assert_eq!(parse_meal_id(Some(" 7 ")).unwrap(), 7);

        let missing = parse_meal_id(None).unwrap_err();
        assert!(missing.to_string().contains("Meal ID is required"));

        assert!(matches!(
            parse_meal_id(Some("seven")),
            Err(Error::InvalidInput(_))
        ));
        assert!(matches!(parse_meal_id(Some("1.5")), Err(Error::InvalidInput(_))));
    }

    #[test]
    fn test_parse_quality_pair() {
        assert_eq!(
            parse_quality_pair("Rice=low").unwrap(),
            ("Rice".to_string(), "low".to_string())
        );
        assert_eq!(
            parse_quality_pair(" Olive Oil = medium ").unwrap(),
            ("Olive Oil".to_string(), "medium".to_string())
        );
        assert!(parse_quality_pair("Rice").is_err());
        assert!(parse_quality_pair("=high").is_err());
    }
}
