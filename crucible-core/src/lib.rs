pub mod error;
pub mod source;
pub mod types;
pub mod validate;

pub use error::SourceError;
pub use source::{load_records, LabeledRecord};
pub use types::{allowed_keys, required_keys, Ingredient, Recipe, RecipeKey, RECIPE_KEYS};
pub use validate::{validate_recipe, Diagnostic, FieldViolation, Verdict};
