//! Utils module split into submodules

mod errors;
mod replay;
mod validation;

pub use errors::UtilsError;
pub use replay::replay;
pub use validation::{validate_numbers, validate_target};
