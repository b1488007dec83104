use std::fmt;

use crate::value::Operator;

#[derive(PartialEq, Eq, Clone, Copy, Debug, Hash)]
pub enum Type {
    Number,
    SingleQuoteString,
    DoubleQuoteString,
    Boolean,
    Array,
    Object,
    Null,
    Function,
}

impl Type {
    pub fn as_str(&self) -> &'static str {
        match self {
            Type::Number => "number",
            Type::SingleQuoteString => "single-quote-string",
            Type::DoubleQuoteString => "double-quote-string",
            Type::Boolean => "boolean",
            Type::Array => "array",
            Type::Object => "object",
            Type::Null => "nil",
            Type::Function => "function",
        }
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Operand types an operator accepts.
pub fn allowed_operands(op: Operator) -> &'static [Type] {
    match op {
        Operator::Add => &[
            Type::Number,
            Type::DoubleQuoteString,
            Type::SingleQuoteString,
            Type::Array,
        ],
        Operator::Sub | Operator::Mul => &[Type::Number, Type::Array],
        Operator::Div | Operator::Mod => &[Type::Number],
    }
}
