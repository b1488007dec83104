use indexmap::IndexMap;
use lazy_static::lazy_static;
use regex::Regex;
use swc_common::{sync::Lrc, BytePos, FileName, SourceMap, Spanned};
use swc_ecma_ast::{
    ArrayLit, EsVersion, Expr, ExprOrSpread, Lit, Number, ObjectLit, Prop, PropName, PropOrSpread,
    Str, UnaryExpr, UnaryOp,
};
use swc_ecma_parser::{lexer::Lexer, Parser, StringInput, Syntax};

use crate::error::{Error, Result};
use crate::value::Value;

lazy_static! {
    static ref JSON_NUMBER: Regex =
        Regex::new(r#"^(?:0|[1-9][0-9]*)(?:\.[0-9]+)?(?:[eE][+-]?[0-9]+)?$"#).unwrap();
    static ref JSON_STRING: Regex =
        Regex::new(r#"^"(?:[^"\\\x00-\x1f]|\\["\\/bfnrt]|\\u[0-9a-fA-F]{4})*"$"#).unwrap();
}

/// Parses a JSON array or object literal.
///
/// The text goes through the ECMAScript expression parser and the tree is
/// then lowered with JSON's rules: double-quoted strings and keys, JSON
/// number grammar, no comments, no trailing commas. Anything else, or
/// tokens left over after the expression, is a syntax error.
pub fn parse_literal(input: &str) -> Result<Value> {
    let cm = Lrc::new(SourceMap::default());
    let fm = cm.new_source_file(Lrc::new(FileName::Custom("input.json".into())), input.into());

    let lexer = Lexer::new(
        Syntax::Es(Default::default()),
        EsVersion::Es2020,
        StringInput::from(&*fm),
        None,
    );

    let mut parser = Parser::new_from(lexer);

    let expr = parser.parse_expr().map_err(syntax_error)?;
    if let Some(err) = parser.take_errors().into_iter().next() {
        return Err(syntax_error(err));
    }
    if expr.span().hi < fm.end_pos {
        return Err(Error::Syntax("unexpected trailing tokens".to_string()));
    }

    let lowering = Lowering {
        src: input,
        start: fm.start_pos,
    };
    lowering.lower(&expr)
}

fn syntax_error(err: swc_ecma_parser::error::Error) -> Error {
    Error::Syntax(err.kind().msg().into_owned())
}

fn unsupported(what: &str) -> Error {
    Error::Syntax(format!("unsupported {} in literal", what))
}

fn is_json_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r')
}

struct Lowering<'a> {
    src: &'a str,
    start: BytePos,
}

impl Lowering<'_> {
    fn text(&self, lo: BytePos, hi: BytePos) -> Result<&str> {
        let lo = lo.0.saturating_sub(self.start.0) as usize;
        let hi = hi.0.saturating_sub(self.start.0) as usize;
        self.src
            .get(lo..hi)
            .ok_or_else(|| Error::Syntax("malformed literal".to_string()))
    }

    // Between two tokens only whitespace and the expected separator may appear.
    fn expect_gap(&self, lo: BytePos, hi: BytePos, separator: Option<char>) -> Result<()> {
        let gap = self.text(lo, hi)?.trim_matches(is_json_whitespace);
        let rest = match separator {
            Some(sep) => gap
                .strip_prefix(sep)
                .map(|rest| rest.trim_start_matches(is_json_whitespace)),
            None => Some(gap),
        };
        match rest {
            Some("") => Ok(()),
            _ => Err(Error::Syntax(format!("unexpected `{}` in literal", gap))),
        }
    }

    fn lower(&self, expr: &Expr) -> Result<Value> {
        match expr {
            Expr::Lit(lit) => self.lower_literal(lit),
            Expr::Array(array) => self.lower_array(array),
            Expr::Object(obj) => self.lower_object(obj),
            Expr::Unary(UnaryExpr {
                span,
                op: UnaryOp::Minus,
                arg,
                ..
            }) => match &**arg {
                Expr::Lit(Lit::Num(num)) if num.span.lo.0 == span.lo.0 + 1 => {
                    lower_number(num, true)
                }
                Expr::Lit(Lit::Num(_)) => Err(Error::Syntax(
                    "unexpected whitespace after `-` in literal".to_string(),
                )),
                _ => Err(unsupported("unary expression")),
            },
            _ => Err(unsupported("expression")),
        }
    }

    fn lower_literal(&self, lit: &Lit) -> Result<Value> {
        match lit {
            Lit::Null(_) => Ok(Value::Null),
            Lit::Bool(value) => Ok(Value::Boolean(value.value)),
            Lit::Num(value) => lower_number(value, false),
            Lit::Str(value) => Ok(Value::String(lower_string(value)?)),
            _ => Err(unsupported("literal")),
        }
    }

    fn lower_array(&self, array: &ArrayLit) -> Result<Value> {
        let mut items = Vec::with_capacity(array.elems.len());
        let mut cursor = BytePos(array.span.lo.0 + 1);
        for (i, elem) in array.elems.iter().enumerate() {
            let expr = match elem {
                Some(ExprOrSpread { spread: None, expr }) => expr,
                Some(_) => return Err(unsupported("spread element")),
                None => return Err(unsupported("array hole")),
            };
            let span = expr.span();
            self.expect_gap(cursor, span.lo, (i > 0).then_some(','))?;
            items.push(self.lower(expr)?);
            cursor = span.hi;
        }
        self.expect_gap(cursor, BytePos(array.span.hi.0 - 1), None)?;
        Ok(Value::Array(items))
    }

    fn lower_object(&self, obj: &ObjectLit) -> Result<Value> {
        let mut props = IndexMap::new();
        let mut cursor = BytePos(obj.span.lo.0 + 1);
        for (i, prop) in obj.props.iter().enumerate() {
            let PropOrSpread::Prop(boxed_prop) = prop else {
                return Err(unsupported("spread property"));
            };
            let Prop::KeyValue(kv) = &**boxed_prop else {
                return Err(unsupported("property"));
            };
            let PropName::Str(key) = &kv.key else {
                return Err(unsupported("unquoted property key"));
            };

            self.expect_gap(cursor, key.span.lo, (i > 0).then_some(','))?;
            self.expect_gap(key.span.hi, kv.value.span().lo, Some(':'))?;

            let key = lower_string(key)?;
            let value = self.lower(&kv.value)?;
            props.insert(key, value);
            cursor = kv.value.span().hi;
        }
        self.expect_gap(cursor, BytePos(obj.span.hi.0 - 1), None)?;
        Ok(Value::Object(props))
    }
}

fn lower_string(str_: &Str) -> Result<String> {
    match str_.raw.as_deref() {
        Some(raw) if JSON_STRING.is_match(raw) => Ok(str_.value.to_string()),
        Some(raw) if raw.starts_with('\'') => Err(Error::Syntax(format!(
            "single-quoted string {} in literal",
            raw
        ))),
        _ => Err(unsupported("string")),
    }
}

// Integral text stays an integer; a decimal point, an exponent or an
// out-of-range value makes it a float.
fn lower_number(num: &Number, negative: bool) -> Result<Value> {
    let raw = match num.raw.as_deref() {
        Some(raw) if JSON_NUMBER.is_match(raw) => raw,
        Some(raw) => return Err(Error::Syntax(format!("invalid number {} in literal", raw))),
        None => return Err(unsupported("number")),
    };
    let (raw, value) = if negative {
        (format!("-{}", raw), -num.value)
    } else {
        (raw.to_string(), num.value)
    };

    if !raw.contains('.') {
        if let Ok(n) = raw.parse::<i64>() {
            return Ok(Value::Integer(n));
        }
    }
    Ok(Value::Float(value))
}
