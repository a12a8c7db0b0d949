use crate::domain::model::RawInput;

/// Anything that can hand the engine a set of raw inputs: command-line flags,
/// a recipe file entry, a form.
pub trait InputSource {
    fn label(&self) -> &str;
    fn raw_input(&self) -> RawInput;
}

impl InputSource for RawInput {
    fn label(&self) -> &str {
        "recipe"
    }

    fn raw_input(&self) -> RawInput {
        self.clone()
    }
}
