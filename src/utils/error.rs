use crate::domain::model::FieldErrors;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DoughError {
    #[error("Invalid recipe input: {0}")]
    Validation(FieldErrors),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV output error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing configuration field: {field}")]
    MissingConfigError { field: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Configuration,
    Output,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl DoughError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            DoughError::Validation(_) => ErrorCategory::Input,
            DoughError::ConfigError { .. }
            | DoughError::ConfigValidationError { .. }
            | DoughError::InvalidConfigValueError { .. }
            | DoughError::MissingConfigError { .. } => ErrorCategory::Configuration,
            DoughError::SerializationError(_) | DoughError::CsvError(_) => ErrorCategory::Output,
            DoughError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input | ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Output => ErrorSeverity::Medium,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            DoughError::Validation(errors) => {
                let lines: Vec<String> = errors
                    .iter()
                    .map(|(field, error)| format!("{}: {}", field.label(), error))
                    .collect();
                format!("Please check the recipe inputs. {}", lines.join(" "))
            }
            DoughError::IoError(e) => format!("Could not read or write a file: {}", e),
            DoughError::SerializationError(_) | DoughError::CsvError(_) => {
                "Could not format the recipe output".to_string()
            }
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Input => {
                "Fill in every field with a number greater than zero"
            }
            ErrorCategory::Configuration => {
                "Check the recipe file: it needs at least one [[recipes]] entry with a unique name"
            }
            ErrorCategory::Output => "Try another output format (table, json or csv)",
            ErrorCategory::System => "Check that the file exists and is readable",
        }
    }
}

impl From<FieldErrors> for DoughError {
    fn from(errors: FieldErrors) -> Self {
        DoughError::Validation(errors)
    }
}

pub type Result<T> = std::result::Result<T, DoughError>;
