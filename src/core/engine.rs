use crate::core::calculator::compute_recipe;
use crate::domain::model::{FieldErrors, RecipeResult};
use crate::domain::ports::InputSource;
use crate::utils::error::Result;
use serde::Serialize;

/// Outcome of one recipe in a batch.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeOutcome {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<RecipeResult>,
    #[serde(skip_serializing_if = "FieldErrors::is_empty")]
    pub errors: FieldErrors,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

impl RecipeOutcome {
    pub fn is_ok(&self) -> bool {
        self.result.is_some()
    }

    /// The calculated recipe, or [`DoughError::Validation`] with the field errors.
    ///
    /// [`DoughError::Validation`]: crate::utils::error::DoughError::Validation
    pub fn into_result(self) -> Result<RecipeResult> {
        match self.result {
            Some(result) => Ok(result),
            None => Err(self.errors.into()),
        }
    }
}

pub const OVERFLOW_WARNING: &str =
    "The inputs are too large: some quantities could not be represented.";
pub const SHORTFALL_WARNING: &str =
    "The poolish needs more flour or water than this dough has.";

pub struct RecipeEngine<S: InputSource> {
    sources: Vec<S>,
}

impl<S: InputSource> RecipeEngine<S> {
    pub fn new(source: S) -> Self {
        Self {
            sources: vec![source],
        }
    }

    pub fn with_sources(sources: Vec<S>) -> Self {
        Self { sources }
    }

    /// Runs every source. A rejected recipe is reported in its outcome and does
    /// not stop the others.
    pub fn run_batch(&self) -> Vec<RecipeOutcome> {
        tracing::info!("Calculating {} recipe(s)", self.sources.len());
        let outcomes: Vec<RecipeOutcome> = self.sources.iter().map(Self::evaluate).collect();

        let failed = outcomes.iter().filter(|o| !o.is_ok()).count();
        if failed > 0 {
            tracing::warn!("{} of {} recipe(s) rejected", failed, outcomes.len());
        }
        outcomes
    }

    fn evaluate(source: &S) -> RecipeOutcome {
        let raw = source.raw_input();
        tracing::debug!(
            recipe = source.label(),
            pizzas = %raw.pizza_count,
            dough_weight = %raw.dough_weight_grams,
            hydration = %raw.hydration_percent,
            "Validating input"
        );

        match compute_recipe(&raw) {
            Ok(result) => {
                let mut warnings = Vec::new();
                // Overflow first: NaN and infinity say nothing about the poolish.
                if !result.is_finite() {
                    tracing::warn!(recipe = source.label(), "⚠️ Quantities overflowed f64");
                    warnings.push(OVERFLOW_WARNING.to_string());
                } else if !result.is_feasible() {
                    tracing::warn!(
                        recipe = source.label(),
                        flour = result.flour_grams,
                        water = result.water_grams,
                        "⚠️ Poolish is larger than the dough's flour or water"
                    );
                    warnings.push(SHORTFALL_WARNING.to_string());
                }
                tracing::info!(recipe = source.label(), "✅ Calculation completed");
                RecipeOutcome {
                    name: source.label().to_string(),
                    result: Some(result),
                    errors: FieldErrors::new(),
                    warnings,
                }
            }
            Err(errors) => {
                tracing::info!(recipe = source.label(), "❌ Input rejected: {}", errors);
                RecipeOutcome {
                    name: source.label().to_string(),
                    result: None,
                    errors,
                    warnings: Vec::new(),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{Field, FieldError, RawInput};
    use crate::utils::error::DoughError;

    struct NamedInput {
        name: &'static str,
        raw: RawInput,
    }

    impl InputSource for NamedInput {
        fn label(&self) -> &str {
            self.name
        }

        fn raw_input(&self) -> RawInput {
            self.raw.clone()
        }
    }

    fn single(raw: RawInput) -> RecipeOutcome {
        RecipeEngine::new(raw).run_batch().remove(0)
    }

    #[test]
    fn test_into_result_returns_recipe() {
        let result = single(RawInput::new("5", "300", "60")).into_result().unwrap();
        assert_eq!(result.water_grams, 312.5);
    }

    #[test]
    fn test_into_result_maps_field_errors() {
        match single(RawInput::new("", "300", "60")).into_result() {
            Err(DoughError::Validation(errors)) => {
                assert_eq!(errors.get(Field::PizzaCount), Some(FieldError::MissingField));
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_batch() {
        let engine: RecipeEngine<RawInput> = RecipeEngine::with_sources(vec![]);
        assert!(engine.run_batch().is_empty());
    }

    #[test]
    fn test_shortfall_warning() {
        let outcome = single(RawInput::new("1", "80", "100"));
        assert!(outcome.is_ok());
        assert_eq!(outcome.warnings, vec![SHORTFALL_WARNING.to_string()]);
    }

    #[test]
    fn test_huge_input_warns_about_overflow_not_poolish() {
        let outcome = single(RawInput::new("1e308", "10", "60"));
        assert!(outcome.is_ok());
        assert_eq!(outcome.warnings, vec![OVERFLOW_WARNING.to_string()]);
    }

    #[test]
    fn test_regular_recipe_has_no_warnings() {
        assert!(single(RawInput::new("5", "300", "60")).warnings.is_empty());
    }

    #[test]
    fn test_batch_keeps_going_after_bad_entry() {
        let engine = RecipeEngine::with_sources(vec![
            NamedInput {
                name: "bad",
                raw: RawInput::new("0", "300", "60"),
            },
            NamedInput {
                name: "good",
                raw: RawInput::new("2", "280", "65"),
            },
        ]);

        let outcomes = engine.run_batch();
        assert_eq!(outcomes.len(), 2);
        assert_eq!(outcomes[0].name, "bad");
        assert!(!outcomes[0].is_ok());
        assert_eq!(
            outcomes[0].errors.get(Field::PizzaCount),
            Some(FieldError::NonPositiveValue)
        );
        assert!(outcomes[1].is_ok());
    }
}
