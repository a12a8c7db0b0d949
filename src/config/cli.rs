use crate::adapters::render::OutputFormat;
use crate::domain::model::RawInput;
use crate::domain::ports::InputSource;
use crate::utils::error::Result;
use crate::utils::logger::LogFormat;
use crate::utils::validation::{validate_path, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "pizza-dough")]
#[command(about = "Pizza dough calculator with a poolish split")]
#[command(allow_negative_numbers = true)]
pub struct CliConfig {
    /// Number of pizzas
    #[arg(long, short = 'n')]
    pub pizzas: Option<String>,

    /// Dough weight per pizza, in grams
    #[arg(long, short = 'w')]
    pub dough_weight: Option<String>,

    /// Hydration, as a percentage of flour mass
    #[arg(long, short = 'H')]
    pub hydration: Option<String>,

    /// Output format
    #[arg(long, short = 'f', value_enum)]
    pub format: Option<OutputFormat>,

    /// TOML file with one or more [[recipes]]; the inputs above are ignored
    #[arg(long, short = 'r')]
    pub recipe_file: Option<String>,

    /// Log line format on stderr
    #[arg(long, value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,

    #[arg(long, short = 'v', help = "Enable verbose output")]
    pub verbose: bool,
}

impl InputSource for CliConfig {
    fn label(&self) -> &str {
        "recipe"
    }

    fn raw_input(&self) -> RawInput {
        // An omitted flag reads the same as an empty form field.
        RawInput::new(
            self.pizzas.clone().unwrap_or_default(),
            self.dough_weight.clone().unwrap_or_default(),
            self.hydration.clone().unwrap_or_default(),
        )
    }
}

// Recipe values are checked by the engine; only the file path is checked here.
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.recipe_file {
            validate_path("recipe_file", path)?;
        }
        Ok(())
    }
}
