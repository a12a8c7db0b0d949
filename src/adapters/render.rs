use crate::core::engine::RecipeOutcome;
use crate::domain::model::RecipeResult;
use crate::utils::error::{DoughError, Result};
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;

pub const SUCCESS_MESSAGE: &str = "Calculation completed successfully!";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Csv,
}

/// Renders a batch. A single outcome renders on its own (a JSON object rather
/// than an array, no heading in the table).
pub fn render_outcomes(outcomes: &[RecipeOutcome], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Table => Ok(render_table(outcomes)),
        OutputFormat::Json => render_json(outcomes),
        OutputFormat::Csv => render_csv(outcomes),
    }
}

fn render_table(outcomes: &[RecipeOutcome]) -> String {
    let mut out = String::new();
    let with_headings = outcomes.len() > 1;

    for (i, outcome) in outcomes.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        if with_headings {
            let _ = writeln!(out, "== {} ==", outcome.name);
        }
        match &outcome.result {
            Some(result) => {
                write_result_table(&mut out, result);
                for warning in &outcome.warnings {
                    let _ = writeln!(out, "Note: {}", warning);
                }
            }
            None => {
                for (field, error) in outcome.errors.iter() {
                    let _ = writeln!(out, "{}: {}", field.label(), error);
                }
            }
        }
    }
    out
}

fn write_result_table(out: &mut String, result: &RecipeResult) {
    let _ = writeln!(out, "{}", SUCCESS_MESSAGE);
    let _ = writeln!(out, "{:<20}{:>10}", "Ingredient", "Quantity");
    for (label, grams) in result.ingredients() {
        let _ = writeln!(out, "{:<20}{:>10.2}", label, grams);
    }
}

fn render_json(outcomes: &[RecipeOutcome]) -> Result<String> {
    let json = match outcomes {
        [single] => serde_json::to_string_pretty(single)?,
        many => serde_json::to_string_pretty(many)?,
    };
    Ok(json)
}

fn render_csv(outcomes: &[RecipeOutcome]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(["recipe", "item", "value"])?;

    for outcome in outcomes {
        match &outcome.result {
            Some(result) => {
                for (label, grams) in result.ingredients() {
                    writer.write_record([
                        outcome.name.as_str(),
                        label,
                        format!("{:.2}", grams).as_str(),
                    ])?;
                }
                for warning in &outcome.warnings {
                    writer.write_record([outcome.name.as_str(), "note", warning.as_str()])?;
                }
            }
            None => {
                for (field, error) in outcome.errors.iter() {
                    writer.write_record([outcome.name.as_str(), field.name(), error.message()])?;
                }
            }
        }
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| DoughError::IoError(e.into_error()))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
