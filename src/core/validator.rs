use crate::domain::model::{Field, FieldError, FieldErrors, RawInput, ValidatedInput};
use crate::utils::validation::parse_number;

/// Checks the raw inputs and converts them to numbers.
///
/// Presence is checked first for every field. If any field is empty or not a
/// number, only those presence errors are returned and no range check runs.
/// Otherwise every value that is zero or negative is reported. Hydration is
/// returned as a fraction (percent / 100).
pub fn validate(raw: &RawInput) -> Result<ValidatedInput, FieldErrors> {
    let mut errors = FieldErrors::new();
    let mut values = [0.0_f64; 3];

    for (slot, field) in values.iter_mut().zip(Field::ALL) {
        match parse_number(raw.get(field)) {
            Some(value) => *slot = value,
            None => errors.insert(field, FieldError::MissingField),
        }
    }

    if !errors.is_empty() {
        tracing::debug!("Presence check failed: {}", errors);
        return Err(errors);
    }

    for (value, field) in values.iter().zip(Field::ALL) {
        if *value <= 0.0 {
            errors.insert(field, FieldError::NonPositiveValue);
        }
    }

    if !errors.is_empty() {
        tracing::debug!("Range check failed: {}", errors);
        return Err(errors);
    }

    let [pizza_count, dough_weight_grams, hydration_percent] = values;
    Ok(ValidatedInput::new(
        pizza_count,
        dough_weight_grams,
        hydration_percent / 100.0,
    ))
}

/// Same check as [`validate`], reported as a plain error map (empty when valid).
pub fn field_errors(raw: &RawInput) -> FieldErrors {
    validate(raw).err().unwrap_or_default()
}
