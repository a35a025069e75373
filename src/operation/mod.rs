//! Operation module split into submodules for clarity

mod ast;
mod display;
mod errors;
mod eval;

pub use ast::{OperationKey, OperationStep, Operator};
pub use errors::OperationError;
pub use eval::evaluate;
