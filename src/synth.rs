use tracing::debug;

use crate::error::{Error, Result};
use crate::normalize::is_quoted;
use crate::types::{allowed_operands, Type};
use crate::value::{BinaryExpr, Value};

/// Synthesizes the type of a canonical value.
pub fn synth(value: &Value) -> Result<Type> {
    match value {
        Value::Integer(_) | Value::Float(_) => Ok(Type::Number),
        Value::String(s) => synth_string(s),
        Value::Boolean(_) => Ok(Type::Boolean),
        Value::Null => Ok(Type::Null),
        Value::Array(_) => Ok(Type::Array),
        Value::Object(_) => Ok(Type::Object),
        Value::Function => Ok(Type::Function),
        Value::BinaryExpr(expr) => synth_binary(expr),
    }
}

// An undelimited empty string counts as double-quoted.
fn synth_string(s: &str) -> Result<Type> {
    if s.is_empty() {
        return Ok(Type::DoubleQuoteString);
    }
    if !is_quoted(s) {
        return Err(Error::InvalidStringLiteral(s.to_string()));
    }
    if s.starts_with('\'') {
        Ok(Type::SingleQuoteString)
    } else {
        Ok(Type::DoubleQuoteString)
    }
}

fn synth_binary(expr: &BinaryExpr) -> Result<Type> {
    let allowed = allowed_operands(expr.op);

    let left = synth(&expr.left).map_err(Error::checking_type)?;
    let right = synth(&expr.right).map_err(Error::checking_type)?;

    if !allowed.iter().any(|t| *t == left || *t == right) {
        return Err(Error::InvalidBinaryOperation);
    }

    // Both operands must share one type; the result takes the left one.
    if left != right {
        return Err(Error::TypeMismatch {
            found: right,
            expected: left,
        });
    }

    debug!(op = %expr.op, %left, "binary expression checked");
    Ok(left)
}
