pub mod calculator;
pub mod engine;
pub mod validator;

pub use crate::domain::model::{
    Field, FieldError, FieldErrors, RawInput, RecipeResult, ValidatedInput,
};
pub use crate::domain::ports::InputSource;
pub use crate::utils::error::Result;
