use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// The three user-facing inputs of the calculator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    PizzaCount,
    DoughWeightGrams,
    HydrationPercent,
}

impl Field {
    pub const ALL: [Field; 3] = [
        Field::PizzaCount,
        Field::DoughWeightGrams,
        Field::HydrationPercent,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Field::PizzaCount => "pizzaCount",
            Field::DoughWeightGrams => "doughWeightGrams",
            Field::HydrationPercent => "hydrationPercent",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Field::PizzaCount => "Number of pizzas",
            Field::DoughWeightGrams => "Dough weight (g)",
            Field::HydrationPercent => "Hydration (%)",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Inputs as typed by the user, before any parsing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawInput {
    pub pizza_count: String,
    pub dough_weight_grams: String,
    pub hydration_percent: String,
}

impl RawInput {
    pub fn new(
        pizza_count: impl Into<String>,
        dough_weight_grams: impl Into<String>,
        hydration_percent: impl Into<String>,
    ) -> Self {
        Self {
            pizza_count: pizza_count.into(),
            dough_weight_grams: dough_weight_grams.into(),
            hydration_percent: hydration_percent.into(),
        }
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::PizzaCount => &self.pizza_count,
            Field::DoughWeightGrams => &self.dough_weight_grams,
            Field::HydrationPercent => &self.hydration_percent,
        }
    }
}

/// Strictly positive numeric inputs. Only the validator builds one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValidatedInput {
    pizza_count: f64,
    dough_weight_grams: f64,
    hydration_fraction: f64,
}

impl ValidatedInput {
    pub(crate) fn new(pizza_count: f64, dough_weight_grams: f64, hydration_fraction: f64) -> Self {
        Self {
            pizza_count,
            dough_weight_grams,
            hydration_fraction,
        }
    }

    pub fn pizza_count(&self) -> f64 {
        self.pizza_count
    }

    pub fn dough_weight_grams(&self) -> f64 {
        self.dough_weight_grams
    }

    /// Hydration as a fraction of flour mass (60 % becomes 0.6).
    pub fn hydration_fraction(&self) -> f64 {
        self.hydration_fraction
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldError {
    /// Empty or not a number.
    MissingField,
    /// Parsed, but zero or negative.
    NonPositiveValue,
}

impl FieldError {
    pub fn message(&self) -> &'static str {
        match self {
            FieldError::MissingField => "Required field.",
            FieldError::NonPositiveValue => "Invalid value.",
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Per-field validation failures. An empty map means the input is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    errors: BTreeMap<Field, FieldError>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: Field, error: FieldError) {
        self.errors.insert(field, error);
    }

    pub fn get(&self, field: Field) -> Option<FieldError> {
        self.errors.get(&field).copied()
    }

    /// Message for a field, empty when the field has no error.
    pub fn message(&self, field: Field) -> &'static str {
        self.get(field).map(|e| e.message()).unwrap_or("")
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, FieldError)> + '_ {
        self.errors.iter().map(|(f, e)| (*f, *e))
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .iter()
            .map(|(field, error)| format!("{}: {}", field, error))
            .collect();
        f.write_str(&parts.join(", "))
    }
}

// Serialises as {"pizzaCount": "Required field.", ...}
impl Serialize for FieldErrors {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;
        let mut map = serializer.serialize_map(Some(self.errors.len()))?;
        for (field, error) in &self.errors {
            map.serialize_entry(field.name(), error.message())?;
        }
        map.end()
    }
}

/// Ingredient quantities in grams, rounded to two decimals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeResult {
    pub flour_grams: f64,
    pub water_grams: f64,
    pub salt_grams: f64,
    pub yeast_grams: f64,
    pub poolish_flour_grams: f64,
    pub poolish_water_grams: f64,
}

impl RecipeResult {
    /// False when the poolish allocation is larger than the dough's own flour or water.
    /// Non-finite quantities are not a shortfall; see [`RecipeResult::is_finite`].
    pub fn is_feasible(&self) -> bool {
        !(self.flour_grams < 0.0 || self.water_grams < 0.0)
    }

    /// False when the inputs were large enough to overflow an `f64`.
    pub fn is_finite(&self) -> bool {
        self.ingredients().iter().all(|(_, grams)| grams.is_finite())
    }

    /// Labelled rows in display order.
    pub fn ingredients(&self) -> [(&'static str, f64); 6] {
        [
            ("Flour (g)", self.flour_grams),
            ("Water (g)", self.water_grams),
            ("Salt (g)", self.salt_grams),
            ("Yeast (g)", self.yeast_grams),
            ("Poolish flour (g)", self.poolish_flour_grams),
            ("Poolish water (g)", self.poolish_water_grams),
        ]
    }
}
