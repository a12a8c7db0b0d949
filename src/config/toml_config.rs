use crate::adapters::render::OutputFormat;
use crate::domain::model::RawInput;
use crate::domain::ports::InputSource;
use crate::utils::error::{DoughError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_unique_names, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A batch of recipes loaded from TOML.
///
/// ```toml
/// [output]
/// format = "table"
///
/// [[recipes]]
/// name = "friday"
/// pizzas = 5
/// dough_weight = 300
/// hydration = "60"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipeFile {
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub recipes: Vec<RecipeEntry>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: Option<OutputFormat>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipeEntry {
    pub name: String,
    #[serde(default)]
    pub pizzas: RawValue,
    #[serde(default)]
    pub dough_weight: RawValue,
    #[serde(default)]
    pub hydration: RawValue,
}

/// A recipe value as written in the file. Numbers and strings are both kept
/// as text so the engine validates them exactly like typed input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    Integer(i64),
    Float(f64),
    Text(String),
}

impl Default for RawValue {
    fn default() -> Self {
        RawValue::Text(String::new())
    }
}

impl RawValue {
    pub fn as_text(&self) -> String {
        match self {
            RawValue::Integer(v) => v.to_string(),
            RawValue::Float(v) => v.to_string(),
            RawValue::Text(s) => s.clone(),
        }
    }
}

impl InputSource for RecipeEntry {
    fn label(&self) -> &str {
        &self.name
    }

    fn raw_input(&self) -> RawInput {
        RawInput::new(
            self.pizzas.as_text(),
            self.dough_weight.as_text(),
            self.hydration.as_text(),
        )
    }
}

impl RecipeFile {
    /// Loads and parses a recipe file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(DoughError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        // ${VAR} placeholders are filled in before parsing
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| DoughError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value; unknown variables are left as is.
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| DoughError::ConfigError {
            message: format!("Invalid placeholder pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        if self.recipes.is_empty() {
            return Err(DoughError::MissingConfigError {
                field: "recipes".to_string(),
            });
        }

        for recipe in &self.recipes {
            validate_non_empty_string("recipes.name", &recipe.name)?;
        }
        validate_unique_names("recipes.name", self.recipes.iter().map(|r| r.name.as_str()))?;

        Ok(())
    }

    pub fn output_format(&self) -> OutputFormat {
        self.output.format.unwrap_or_default()
    }
}

impl Validate for RecipeFile {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_numbers_and_strings() {
        let toml_content = r#"
[output]
format = "json"

[[recipes]]
name = "friday"
pizzas = 5
dough_weight = 300.5
hydration = "60"
"#;

        let file = RecipeFile::from_toml_str(toml_content).unwrap();

        assert_eq!(file.output_format(), OutputFormat::Json);
        assert_eq!(file.recipes.len(), 1);
        assert_eq!(
            file.recipes[0].raw_input(),
            RawInput::new("5", "300.5", "60")
        );
        assert!(file.validate().is_ok());
    }

    #[test]
    fn test_missing_values_become_empty_text() {
        let toml_content = r#"
[[recipes]]
name = "half-done"
pizzas = 2
"#;

        let file = RecipeFile::from_toml_str(toml_content).unwrap();
        let raw = file.recipes[0].raw_input();
        assert_eq!(raw.dough_weight_grams, "");
        assert_eq!(raw.hydration_percent, "");
        assert_eq!(file.output_format(), OutputFormat::Table);
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("PIZZA_DOUGH_TEST_HYDRATION", "65");

        let toml_content = r#"
[[recipes]]
name = "env"
pizzas = 1
dough_weight = 250
hydration = "${PIZZA_DOUGH_TEST_HYDRATION}"
"#;

        let file = RecipeFile::from_toml_str(toml_content).unwrap();
        assert_eq!(file.recipes[0].raw_input().hydration_percent, "65");

        std::env::remove_var("PIZZA_DOUGH_TEST_HYDRATION");
    }

    #[test]
    fn test_config_validation() {
        let empty = RecipeFile::from_toml_str("").unwrap();
        assert!(matches!(
            empty.validate(),
            Err(DoughError::MissingConfigError { .. })
        ));

        let duplicated = RecipeFile::from_toml_str(
            r#"
[[recipes]]
name = "a"

[[recipes]]
name = "a"
"#,
        )
        .unwrap();
        assert!(duplicated.validate().is_err());
    }

    #[test]
    fn test_invalid_toml() {
        let err = RecipeFile::from_toml_str("[[recipes]\nname =").unwrap_err();
        assert!(matches!(err, DoughError::ConfigValidationError { .. }));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[[recipes]]\nname = \"file\"\npizzas = 3\ndough_weight = 280\nhydration = 62\n")
            .unwrap();

        let file = RecipeFile::from_file(temp_file.path()).unwrap();
        assert_eq!(file.recipes[0].name, "file");
        assert_eq!(file.recipes[0].raw_input().hydration_percent, "62");
    }
}
