use crate::domain::model::Product;
use crate::utils::error::{DrillError, Result};
use crate::utils::validation::{
    validate_finite, validate_non_empty_string, validate_positive_number, validate_range, Validate,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Settings shared by the drills. Every section is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TomlConfig {
    pub finance: FinanceConfig,
    pub limits: LimitsConfig,
    pub pattern: PatternConfig,
    pub logging: Option<LoggingConfig>,
    pub catalog: CatalogConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FinanceConfig {
    pub interest_rate: f64,
    pub months: u32,
}

impl Default for FinanceConfig {
    fn default() -> Self {
        Self {
            interest_rate: 0.05,
            months: 12,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LimitsConfig {
    pub max_value: f64,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self { max_value: 100.0 }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PatternConfig {
    pub glyph: String,
}

impl Default for PatternConfig {
    fn default() -> Self {
        Self {
            glyph: "*".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    pub products: Vec<Product>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            products: vec![
                Product::new("Laptop", 1200.00, 5),
                Product::new("Smartphone", 800.00, 10),
            ],
        }
    }
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(DrillError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| DrillError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${INTEREST_RATE})
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| DrillError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn log_level(&self) -> Option<&str> {
        self.logging.as_ref().and_then(|l| l.level.as_deref())
    }

    pub fn glyph(&self) -> char {
        self.pattern.glyph.chars().next().unwrap_or('*')
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validate_range("finance.interest_rate", self.finance.interest_rate, 0.0, 1.0)?;
        validate_positive_number("finance.months", self.finance.months, 1)?;
        validate_finite("limits.max_value", self.limits.max_value)?;

        let glyph = &self.pattern.glyph;
        if glyph.chars().count() != 1 || glyph.trim().is_empty() {
            return Err(DrillError::InvalidConfigValueError {
                field: "pattern.glyph".to_string(),
                value: glyph.clone(),
                reason: "Glyph must be a single visible character".to_string(),
            });
        }

        if let Some(level) = self.log_level() {
            let valid_levels = ["trace", "debug", "info", "warn", "error"];
            if !valid_levels.contains(&level) {
                return Err(DrillError::InvalidConfigValueError {
                    field: "logging.level".to_string(),
                    value: level.to_string(),
                    reason: format!("Unsupported level. Valid levels: {}", valid_levels.join(", ")),
                });
            }
        }

        for product in &self.catalog.products {
            validate_non_empty_string("catalog.products.name", &product.name)?;
            validate_finite("catalog.products.price", product.price)?;
            if product.price < 0.0 {
                return Err(DrillError::InvalidConfigValueError {
                    field: "catalog.products.price".to_string(),
                    value: product.price.to_string(),
                    reason: "Price cannot be negative".to_string(),
                });
            }
        }

        Ok(())
    }
}
