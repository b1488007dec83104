use std::fmt;
use std::str::FromStr;

use indexmap::IndexMap;

use crate::error::Error;

/// Canonical value exchanged between the normalizer and the checker.
///
/// Strings keep their delimiters: `'a'` and `"a"` are different values and
/// the checker reads the quote style back from the first and last character.
#[derive(PartialEq, Clone, Debug)]
pub enum Value {
    Integer(i64),
    Float(f64),
    String(String),
    Boolean(bool),
    Null,
    Array(Vec<Value>),
    Object(IndexMap<String, Value>),
    Function,
    BinaryExpr(Box<BinaryExpr>),
}

#[derive(PartialEq, Clone, Debug)]
pub struct BinaryExpr {
    pub op: Operator,
    pub left: Value,
    pub right: Value,
}

#[derive(PartialEq, Eq, Clone, Copy, Debug, Hash)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
}

impl Operator {
    pub fn symbol(&self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Sub => "-",
            Operator::Mul => "*",
            Operator::Div => "/",
            Operator::Mod => "%",
        }
    }
}

impl FromStr for Operator {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "+" => Ok(Operator::Add),
            "-" => Ok(Operator::Sub),
            "*" => Ok(Operator::Mul),
            "/" => Ok(Operator::Div),
            "%" => Ok(Operator::Mod),
            _ => Err(Error::InvalidOperation(s.to_string())),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl Value {
    pub fn binary(op: Operator, left: Value, right: Value) -> Self {
        Value::BinaryExpr(Box::new(BinaryExpr { op, left, right }))
    }

    /// Wraps bare text in double quotes, the only style JSON-like input can express.
    pub fn double_quoted(s: &str) -> Self {
        Value::String(format!("\"{}\"", s))
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Integer(n) => write!(f, "{}", n),
            Value::Float(n) => write!(f, "{:?}", n),
            Value::String(s) => f.write_str(s),
            Value::Boolean(b) => write!(f, "{}", b),
            Value::Null => f.write_str("nil"),
            Value::Array(items) => {
                let items: Vec<String> = items.iter().map(|v| v.to_string()).collect();
                write!(f, "[{}]", items.join(", "))
            }
            Value::Object(props) => {
                let props: Vec<String> = props
                    .iter()
                    .map(|(k, v)| format!("{:?}: {}", k, v))
                    .collect();
                write!(f, "{{{}}}", props.join(", "))
            }
            Value::Function => f.write_str("<function>"),
            Value::BinaryExpr(expr) => write!(f, "({} {} {})", expr.op, expr.left, expr.right),
        }
    }
}
