pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::{RecipeEntry, RecipeFile};

pub use adapters::render::{render_outcomes, OutputFormat};
pub use crate::core::calculator::{calculate, compute_recipe};
pub use crate::core::engine::{RecipeEngine, RecipeOutcome};
pub use crate::core::validator::{field_errors, validate};
pub use domain::model::{Field, FieldError, FieldErrors, RawInput, RecipeResult, ValidatedInput};
pub use domain::ports::InputSource;
pub use utils::error::{DoughError, Result};
