use tracing::{debug, trace};

use crate::error::{Error, Result, Side};
use crate::parser::parse_literal;
use crate::value::{Operator, Value};

/// Outcome of one recognizer.
#[derive(PartialEq, Debug)]
pub enum Recognition {
    /// The input belongs to this recognizer and produced a value.
    Matched(Value),
    /// The input is not this recognizer's shape; try the next one.
    Declined,
    /// The input belongs to this recognizer but is malformed.
    Invalid(Error),
}

type Recognizer = fn(&str) -> Recognition;

const RECOGNIZERS: [(&str, Recognizer); 3] = [
    ("structured", recognize_structured),
    ("s-expression", recognize_sexpr),
    ("scalar", recognize_scalar),
];

/// Turns one line of text into a canonical value.
pub fn normalize(line: &str) -> Result<Value> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Err(Error::EmptyInput);
    }

    for (name, recognize) in RECOGNIZERS {
        match recognize(trimmed) {
            Recognition::Matched(value) => {
                debug!(recognizer = name, %value, "input recognized");
                return Ok(value);
            }
            Recognition::Invalid(err) => {
                debug!(recognizer = name, %err, "input rejected");
                return Err(err);
            }
            Recognition::Declined => trace!(recognizer = name, "declined"),
        }
    }

    Err(Error::UnrecognizedInput)
}

/// `[...]` and `{...}` literals, with `["op", a, b]` read as a binary expression.
pub fn recognize_structured(input: &str) -> Recognition {
    if !input.starts_with('[') && !input.starts_with('{') {
        return Recognition::Declined;
    }

    match parse_literal(input) {
        Ok(value) => Recognition::Matched(into_binary(value)),
        Err(err) => Recognition::Invalid(err),
    }
}

/// Reads a top-level `["op", a, b]` array as a binary expression.
///
/// Operands of the same shape become nested expressions. Only the top-level
/// operands regain double quotes; strings inside nested operands stay bare.
fn into_binary(value: Value) -> Value {
    as_binary(value, requote)
}

fn as_binary(value: Value, operand: fn(Value) -> Value) -> Value {
    let Value::Array(items) = value else {
        return value;
    };

    match <[Value; 3]>::try_from(items) {
        Ok([Value::String(op), left, right]) => match op.parse::<Operator>() {
            Ok(operator) => Value::binary(
                operator,
                operand(as_binary(left, bare)),
                operand(as_binary(right, bare)),
            ),
            Err(_) => Value::Array(vec![Value::String(op), left, right]),
        },
        Ok(items) => Value::Array(Vec::from(items)),
        Err(items) => Value::Array(items),
    }
}

fn bare(operand: Value) -> Value {
    operand
}

fn requote(operand: Value) -> Value {
    match operand {
        Value::String(s) => Value::double_quoted(&s),
        other => other,
    }
}

/// `op a b`, optionally wrapped in one layer of `(...)` and/or `[...]`.
pub fn recognize_sexpr(input: &str) -> Recognition {
    let inner = trim_enclosing(input, '(', ')');
    let inner = trim_enclosing(inner, '[', ']');

    let parts: Vec<&str> = inner.split_whitespace().collect();
    let [op, left, right] = parts.as_slice() else {
        return Recognition::Declined;
    };
    let Ok(op) = op.parse::<Operator>() else {
        return Recognition::Declined;
    };

    let Some(left) = parse_scalar(left) else {
        return Recognition::Invalid(Error::InvalidOperand(Side::Left));
    };
    let Some(right) = parse_scalar(right) else {
        return Recognition::Invalid(Error::InvalidOperand(Side::Right));
    };

    Recognition::Matched(Value::binary(op, left, right))
}

pub fn recognize_scalar(input: &str) -> Recognition {
    match parse_scalar(input) {
        Some(value) => Recognition::Matched(value),
        None => Recognition::Declined,
    }
}

/// Quoted string, boolean, `nil`/`null`, integer or float, in that order.
pub fn parse_scalar(input: &str) -> Option<Value> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }

    if is_quoted(trimmed) {
        return Some(Value::String(trimmed.to_string()));
    }

    match trimmed {
        "true" => return Some(Value::Boolean(true)),
        "false" => return Some(Value::Boolean(false)),
        "nil" | "null" => return Some(Value::Null),
        _ => {}
    }

    if let Ok(n) = trimmed.parse::<i64>() {
        return Some(Value::Integer(n));
    }
    if let Ok(n) = trimmed.parse::<f64>() {
        return Some(Value::Float(n));
    }

    None
}

pub fn is_quoted(s: &str) -> bool {
    s.len() >= 2
        && ((s.starts_with('\'') && s.ends_with('\''))
            || (s.starts_with('"') && s.ends_with('"')))
}

fn trim_enclosing(s: &str, open: char, close: char) -> &str {
    if s.len() >= 2 && s.starts_with(open) && s.ends_with(close) {
        s[1..s.len() - 1].trim()
    } else {
        s
    }
}
