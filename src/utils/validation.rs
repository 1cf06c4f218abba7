use crate::utils::error::{DelegationError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_positive_number(field_name: &str, value: u32, min_value: u32) -> Result<()> {
    if value < min_value {
        return Err(DelegationError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(DelegationError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_labels(field_name: &str, labels: &[String]) -> Result<()> {
    for (index, label) in labels.iter().enumerate() {
        validate_non_empty_string(&format!("{}[{}]", field_name, index), label)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_positive_number() {
        assert!(validate_positive_number("bakery.recipe.size", 5, 1).is_ok());
        assert!(validate_positive_number("bakery.recipe.size", 0, 1).is_err());
    }

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("catalog.title", "Items").is_ok());
        assert!(validate_non_empty_string("catalog.title", "   ").is_err());
    }

    #[test]
    fn test_validate_labels_reports_offending_index() {
        let labels = vec!["item1".to_string(), "".to_string()];
        match validate_labels("catalog.items", &labels) {
            Err(DelegationError::InvalidConfigValueError { field, .. }) => {
                assert_eq!(field, "catalog.items[1]");
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }
}
