use crate::core::validator::validate;
use crate::domain::model::{FieldErrors, RawInput, RecipeResult, ValidatedInput};

/// Salt as a share of total flour.
pub const SALT_RATIO: f64 = 0.02;
/// Yeast as a share of total flour.
pub const YEAST_RATIO: f64 = 0.005;
/// Poolish allocated per pizza, split evenly between flour and water.
pub const POOLISH_GRAMS_PER_PIZZA: f64 = 100.0;

/// Derives the ingredient masses for validated inputs.
///
/// Salt and yeast are sized on the total flour, before the poolish portion is
/// taken out. The poolish is not bounded by the totals, so very light doughs
/// give negative flour or water (see [`RecipeResult::is_feasible`]).
pub fn calculate(input: &ValidatedInput) -> RecipeResult {
    let hydration = input.hydration_fraction();

    let total_flour = (input.pizza_count() * input.dough_weight_grams()) / (1.0 + hydration);
    let total_water = total_flour * hydration;
    let salt = total_flour * SALT_RATIO;
    let yeast = total_flour * YEAST_RATIO;

    let poolish_total = input.pizza_count() * POOLISH_GRAMS_PER_PIZZA;
    let poolish_flour = poolish_total / 2.0;
    let poolish_water = poolish_total / 2.0;

    let flour = total_flour - poolish_flour;
    let water = total_water - poolish_water;

    RecipeResult {
        flour_grams: round2(flour),
        water_grams: round2(water),
        salt_grams: round2(salt),
        yeast_grams: round2(yeast),
        poolish_flour_grams: round2(poolish_flour),
        poolish_water_grams: round2(poolish_water),
    }
}

/// Validates, then calculates only when every field is valid.
pub fn compute_recipe(raw: &RawInput) -> Result<RecipeResult, FieldErrors> {
    validate(raw).map(|input| calculate(&input))
}

/// Rounds half away from zero on the value scaled by 100, so 4.6875 becomes 4.69.
/// Binary values that sit just under a `.xx5` tie can land on the other side
/// of `toFixed(2)`.
fn round2(value: f64) -> f64 {
    let rounded = (value * 100.0).round() / 100.0;
    // avoid printing -0.00
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(pizzas: f64, weight: f64, hydration_percent: f64) -> ValidatedInput {
        ValidatedInput::new(pizzas, weight, hydration_percent / 100.0)
    }

    #[test]
    fn test_reference_recipe() {
        let result = calculate(&input(5.0, 300.0, 60.0));

        assert_eq!(result.flour_grams, 687.5);
        assert_eq!(result.water_grams, 312.5);
        assert_eq!(result.salt_grams, 18.75);
        assert_eq!(result.yeast_grams, 4.69);
        assert_eq!(result.poolish_flour_grams, 250.0);
        assert_eq!(result.poolish_water_grams, 250.0);
        assert!(result.is_feasible());
    }

    #[test]
    fn test_salt_and_yeast_use_total_flour() {
        let result = calculate(&input(2.0, 250.0, 70.0));
        let total_flour = result.flour_grams + result.poolish_flour_grams;

        assert!((result.salt_grams - total_flour * SALT_RATIO).abs() <= 0.01);
        assert!((result.yeast_grams - total_flour * YEAST_RATIO).abs() <= 0.01);
    }

    #[test]
    fn test_light_dough_goes_negative() {
        // 80 g at 100 % hydration is 40 g flour and 40 g water, the poolish wants 50 g of each.
        let result = calculate(&input(1.0, 80.0, 100.0));

        assert_eq!(result.flour_grams, -10.0);
        assert_eq!(result.water_grams, -10.0);
        assert!(!result.is_feasible());
    }

    #[test]
    fn test_round2() {
        assert_eq!(round2(4.6875), 4.69);
        assert_eq!(round2(1.004), 1.0);
        assert_eq!(round2(-0.001), 0.0);
    }

    #[test]
    fn test_compute_recipe_skips_calculation_on_errors() {
        let errors = compute_recipe(&RawInput::new("5", "", "60")).unwrap_err();
        assert_eq!(errors.len(), 1);

        let result = compute_recipe(&RawInput::new("5", "300", "60")).unwrap();
        assert_eq!(result.flour_grams, 687.5);
    }
}
