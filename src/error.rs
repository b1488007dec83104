use std::fmt;

use crate::types::Type;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Side {
    Left,
    Right,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Left => f.write_str("left"),
            Side::Right => f.write_str("right"),
        }
    }
}

#[derive(PartialEq, Eq, Clone, Debug, thiserror::Error)]
pub enum Error {
    /// Blank line. Front ends skip it without reporting anything.
    #[error("empty input")]
    EmptyInput,

    #[error("syntax error: {0}")]
    Syntax(String),

    #[error("unrecognized input")]
    UnrecognizedInput,

    #[error("invalid {0} operand")]
    InvalidOperand(Side),

    #[error("invalid string literal: '{0}'")]
    InvalidStringLiteral(String),

    #[error("invalid operation: '{0}'")]
    InvalidOperation(String),

    #[error("invalid binary operation")]
    InvalidBinaryOperation,

    #[error("invalid type: '{found}', expected '{expected}'")]
    TypeMismatch { found: Type, expected: Type },

    /// Failure while checking an operand of a binary expression.
    #[error("typechecking error: {0}")]
    CheckingType(Box<Error>),
}

impl Error {
    pub fn checking_type(inner: Error) -> Self {
        Error::CheckingType(Box::new(inner))
    }

    /// The error underneath any `CheckingType` wrappers.
    pub fn root(&self) -> &Error {
        match self {
            Error::CheckingType(inner) => inner.root(),
            e => e,
        }
    }

    pub fn is_empty_input(&self) -> bool {
        matches!(self, Error::EmptyInput)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_format_messages() {
        let cases = vec![
            (Error::EmptyInput, "empty input"),
            (Error::UnrecognizedInput, "unrecognized input"),
            (Error::InvalidOperand(Side::Left), "invalid left operand"),
            (Error::InvalidOperand(Side::Right), "invalid right operand"),
            (
                Error::InvalidStringLiteral("abc".to_string()),
                "invalid string literal: 'abc'",
            ),
            (
                Error::InvalidOperation("^".to_string()),
                "invalid operation: '^'",
            ),
            (Error::InvalidBinaryOperation, "invalid binary operation"),
            (
                Error::TypeMismatch {
                    found: Type::Boolean,
                    expected: Type::Number,
                },
                "invalid type: 'boolean', expected 'number'",
            ),
            (
                Error::checking_type(Error::InvalidStringLiteral("x".to_string())),
                "typechecking error: invalid string literal: 'x'",
            ),
        ];

        for (err, expected) in cases {
            assert_eq!(err.to_string(), expected);
        }
    }

    #[test]
    fn should_find_root_through_wrappers() {
        let err = Error::checking_type(Error::checking_type(Error::InvalidBinaryOperation));
        assert_eq!(err.root(), &Error::InvalidBinaryOperation);
        assert_eq!(Error::UnrecognizedInput.root(), &Error::UnrecognizedInput);
    }
}
