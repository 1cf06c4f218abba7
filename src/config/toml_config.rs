use crate::domain::model::{Cookie, CookieOverrides};
use crate::utils::error::{DelegationError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::LazyLock;

static ENV_VAR_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").expect("valid substitution pattern"));

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaygroundConfig {
    /// When false the demo wires no delegates at all.
    pub attach_delegates: bool,
    pub bakery: BakeryConfig,
    pub catalog: CatalogConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BakeryConfig {
    pub shop_name: String,
    pub recipe: Cookie,
    pub overrides: CookieOverrides,
    pub preferred_size: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    pub title: String,
    pub items: Vec<String>,
    pub select: Option<usize>,
}

impl Default for PlaygroundConfig {
    fn default() -> Self {
        Self {
            attach_delegates: true,
            bakery: BakeryConfig::default(),
            catalog: CatalogConfig::default(),
        }
    }
}

impl Default for BakeryConfig {
    fn default() -> Self {
        Self {
            shop_name: "Cookie Shop".to_string(),
            recipe: Cookie::default(),
            overrides: CookieOverrides::new(6, true),
            preferred_size: None,
        }
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            title: "Items".to_string(),
            items: vec!["item1".to_string(), "item2".to_string(), "item3".to_string()],
            select: Some(2),
        }
    }
}

impl PlaygroundConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;
        Ok(toml::from_str(&processed_content)?)
    }

    /// 替換環境變數 (例如 ${SHOP_NAME})，未設定的變數視為錯誤
    fn substitute_env_vars(content: &str) -> Result<String> {
        let mut missing = Vec::new();

        let result = ENV_VAR_PATTERN.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| {
                missing.push(var_name.to_string());
                String::new()
            })
        });

        if !missing.is_empty() {
            return Err(DelegationError::config(format!(
                "unresolved environment variable(s): {}",
                missing.join(", ")
            )));
        }

        Ok(result.into_owned())
    }
}

impl Validate for PlaygroundConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_non_empty_string("bakery.shop_name", &self.bakery.shop_name)?;
        validation::validate_positive_number("bakery.recipe.size", self.bakery.recipe.size, 1)?;
        if let Some(size) = self.bakery.overrides.size {
            validation::validate_positive_number("bakery.overrides.size", size, 1)?;
        }
        if let Some(size) = self.bakery.preferred_size {
            validation::validate_positive_number("bakery.preferred_size", size, 1)?;
        }
        validation::validate_non_empty_string("catalog.title", &self.catalog.title)?;
        validation::validate_labels("catalog.items", &self.catalog.items)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
attach_delegates = true

[bakery]
shop_name = "Corner Shop"

[bakery.recipe]
size = 4
has_chocolate_chips = false

[bakery.overrides]
size = 8

[catalog]
title = "Menu"
items = ["a", "b"]
select = 0
"#;

        let config = PlaygroundConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.bakery.shop_name, "Corner Shop");
        assert_eq!(config.bakery.recipe.size, 4);
        assert_eq!(config.bakery.overrides.size, Some(8));
        assert_eq!(config.bakery.overrides.has_chocolate_chips, None);
        assert_eq!(config.catalog.items, vec!["a", "b"]);
        assert_eq!(config.catalog.select, Some(0));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = PlaygroundConfig::from_toml_str("").unwrap();
        assert_eq!(config, PlaygroundConfig::default());
        assert_eq!(config.bakery.overrides, CookieOverrides::new(6, true));
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("PLAYGROUND_TEST_SHOP", "Env Shop");

        let toml_content = r#"
[bakery]
shop_name = "${PLAYGROUND_TEST_SHOP}"
"#;

        let config = PlaygroundConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.bakery.shop_name, "Env Shop");

        std::env::remove_var("PLAYGROUND_TEST_SHOP");
    }

    #[test]
    fn test_unresolved_env_var_is_config_error() {
        std::env::remove_var("PLAYGROUND_TEST_UNSET");

        let toml_content = r#"
[catalog]
title = "${PLAYGROUND_TEST_UNSET}"
"#;

        match PlaygroundConfig::from_toml_str(toml_content) {
            Err(DelegationError::ConfigError { message }) => {
                assert!(message.contains("PLAYGROUND_TEST_UNSET"));
            }
            other => panic!("expected config error, got {:?}", other),
        }
    }

    #[test]
    fn test_negative_select_is_rejected() {
        let toml_content = r#"
[catalog]
items = ["only"]
select = -1
"#;

        let err = PlaygroundConfig::from_toml_str(toml_content).unwrap_err();
        assert!(matches!(err, DelegationError::TomlError(_)));
    }

    #[test]
    fn test_config_validation() {
        let toml_content = r#"
[bakery.recipe]
size = 0
has_chocolate_chips = true
"#;

        let config = PlaygroundConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_toml_is_reported() {
        let err = PlaygroundConfig::from_toml_str("[bakery").unwrap_err();
        assert!(matches!(err, DelegationError::TomlError(_)));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();

        let toml_content = r#"
[catalog]
title = "From File"
"#;

        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = PlaygroundConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.catalog.title, "From File");
        assert_eq!(config.catalog.items.len(), 3);
    }
}
