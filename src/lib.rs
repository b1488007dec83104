pub mod error;
pub mod normalize;
pub mod parser;
pub mod repl;
pub mod synth;
pub mod types;
pub mod value;

pub use error::{Error, Result};
pub use types::Type;
pub use value::{BinaryExpr, Operator, Value};

/// Normalizes one line of input and synthesizes its type.
pub fn check(line: &str) -> Result<Type> {
    let value = normalize::normalize(line)?;
    synth::synth(&value)
}
