use std::fmt;
use std::sync::Arc;

use num::bigint::BigInt;
use num::ToPrimitive;

use crate::ast::{self, AstValue, Node};
use crate::number;

quick_error! {
    #[derive(Debug)]
    pub enum Error {
        InvalidToken(ty: ValueType, token: String) {
            display("Could not build {} from token: {}", ty, token)
        }
        NoConversion(from: ValueType, to: ValueType) {
            display("Cannot convert {} to {}", from, to)
        }
        OutOfRange(value: BigInt, to: ValueType) {
            display("Cannot convert {} to {}: out of range", value, to)
        }
    }
}

impl Error {
    /// True for both a missing conversion edge and a failed range guard.
    pub fn is_conversion(&self) -> bool {
        match *self {
            Error::NoConversion(..) | Error::OutOfRange(..) => true,
            Error::InvalidToken(..) => false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueType {
    String,
    Int,
    BigInt,
    Float,
    Var,
    Bool,
    Ast,
}

impl ValueType {
    pub const ALL: [ValueType; 7] = [
        ValueType::String,
        ValueType::Int,
        ValueType::BigInt,
        ValueType::Float,
        ValueType::Var,
        ValueType::Bool,
        ValueType::Ast,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ValueType::String => "string",
            ValueType::Int => "int",
            ValueType::BigInt => "bigint",
            ValueType::Float => "float",
            ValueType::Var => "var",
            ValueType::Bool => "bool",
            ValueType::Ast => "ast",
        }
    }

    /// Literal types are built straight from a token and stand for themselves.
    pub fn is_literal(self) -> bool {
        match self {
            ValueType::String | ValueType::Int | ValueType::BigInt | ValueType::Float | ValueType::Bool => true,
            ValueType::Var | ValueType::Ast => false,
        }
    }

    /// Whether `token` belongs to this type. `Ast` never matches.
    pub fn recognizes(self, token: &str) -> bool {
        match self {
            ValueType::String => is_quoted(token),
            ValueType::Int => number::parse_integer(token).ok().and_then(|n| n.to_i64()).is_some(),
            ValueType::BigInt => number::parse_integer(token).is_ok(),
            ValueType::Float => parse_float(token).is_some(),
            ValueType::Bool => token == "true" || token == "false",
            ValueType::Var => is_identifier(token),
            ValueType::Ast => false,
        }
    }

    /// Builds a value of this type from `token`.
    pub fn construct(self, token: &str) -> Result<Value, Error> {
        let value = match self {
            ValueType::String if is_quoted(token) => {
                Some(Value::String(token[1..token.len() - 1].to_string()))
            },
            ValueType::Int => number::parse_integer(token).ok().and_then(|n| n.to_i64()).map(Value::Int),
            ValueType::BigInt => number::parse_integer(token).ok().map(Value::BigInt),
            ValueType::Float => parse_float(token).map(Value::Float),
            ValueType::Bool => match token {
                "true" => Some(Value::Bool(true)),
                "false" => Some(Value::Bool(false)),
                _ => None,
            },
            ValueType::Var if is_identifier(token) => Some(Value::Var(token.to_string())),
            _ => None,
        };

        value.ok_or_else(|| Error::InvalidToken(self, token.to_string()))
    }

    /// Whether a value of this type can be converted to `target`.
    pub fn can_convert_to(self, target: ValueType) -> bool {
        match (self, target) {
            (from, to) if from == to => true,
            (ValueType::Int, ValueType::BigInt) => true,
            (ValueType::Int, ValueType::Float) => true,
            // Only when the value fits; see `Value::convert`.
            (ValueType::BigInt, ValueType::Int) => true,
            _ => false,
        }
    }

    /// The narrowest type both operands widen to, if any.
    pub fn join(self, other: ValueType) -> Option<ValueType> {
        match (self, other) {
            (a, b) if a == b => Some(a),
            (ValueType::Int, ValueType::BigInt) | (ValueType::BigInt, ValueType::Int) => Some(ValueType::BigInt),
            (ValueType::Int, ValueType::Float) | (ValueType::Float, ValueType::Int) => Some(ValueType::Float),
            _ => None,
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

// No check for quotes inside the literal: `'it''s'` is accepted as is.
fn is_quoted(token: &str) -> bool {
    let bytes = token.as_bytes();
    if bytes.len() < 2 {
        return false;
    }
    match (bytes[0], bytes[bytes.len() - 1]) {
        (b'\'', b'\'') | (b'"', b'"') => true,
        _ => false,
    }
}

/// Overflow to infinity is rejected; only an explicit `inf`/`infinity` yields one.
fn parse_float(token: &str) -> Option<f64> {
    let x = token.parse::<f64>().ok()?;
    if x.is_infinite() {
        let word = token.trim_start_matches(|c| c == '+' || c == '-').to_ascii_lowercase();
        if word != "inf" && word != "infinity" {
            return None;
        }
    }
    Some(x)
}

fn is_identifier(token: &str) -> bool {
    let mut chars = token.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() => chars.all(|c| c.is_ascii_alphanumeric()),
        _ => false,
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    String(String),
    Int(i64),
    BigInt(BigInt),
    Float(f64),
    Var(String),
    Bool(bool),
    Ast(AstValue),
}

impl Value {
    pub fn string<S: Into<String>>(text: S) -> Value {
        Value::String(text.into())
    }

    pub fn var<S: Into<String>>(name: S) -> Value {
        Value::Var(name.into())
    }

    /// Captures the arguments of `parent` unevaluated.
    pub fn wrap_subtree(parent: &Arc<Node>) -> Value {
        Value::Ast(ast::wrap_subtree(parent))
    }

    pub fn value_type(&self) -> ValueType {
        match *self {
            Value::String(_) => ValueType::String,
            Value::Int(_) => ValueType::Int,
            Value::BigInt(_) => ValueType::BigInt,
            Value::Float(_) => ValueType::Float,
            Value::Var(_) => ValueType::Var,
            Value::Bool(_) => ValueType::Bool,
            Value::Ast(_) => ValueType::Ast,
        }
    }

    pub fn var_name(&self) -> Option<&str> {
        match *self {
            Value::Var(ref name) => Some(name),
            _ => None,
        }
    }

    /// Converts to `target`. Widening from `Int` always succeeds; `BigInt`
    /// narrows to `Int` only when the value fits in 64 bits.
    pub fn convert(&self, target: ValueType) -> Result<Value, Error> {
        let result = match (self, target) {
            (value, target) if value.value_type() == target => Ok(value.clone()),
            (&Value::Int(n), ValueType::BigInt) => Ok(Value::BigInt(BigInt::from(n))),
            (&Value::Int(n), ValueType::Float) => Ok(Value::Float(n as f64)),
            (&Value::BigInt(ref n), ValueType::Int) => match n.to_i64() {
                Some(i) => Ok(Value::Int(i)),
                None => Err(Error::OutOfRange(n.clone(), target)),
            },
            (value, target) => Err(Error::NoConversion(value.value_type(), target)),
        };

        if let Err(ref err) = result {
            debug!(from = %self.value_type(), to = %target, "{}", err);
        }
        result
    }

    /// Canonical text of the value; literals re-classify to an equal value.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Value::String(ref s) => write!(f, "\"{}\"", s),
            Value::Int(n) => write!(f, "{}", n),
            Value::BigInt(ref n) => write!(f, "{}", n),
            // Debug keeps a `.0` or an exponent, so `2.0` never reads back as an int.
            Value::Float(x) => write!(f, "{:?}", x),
            Value::Var(ref name) => f.write_str(name),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Ast(ref ast) => write!(f, "{}", ast),
        }
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Value {
        Value::Int(n)
    }
}

impl From<BigInt> for Value {
    fn from(n: BigInt) -> Value {
        Value::BigInt(n)
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Value {
        Value::Float(x)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Value {
        Value::Bool(b)
    }
}

/// Converts both operands to their common type before an operator combines them.
pub fn unify(a: &Value, b: &Value) -> Result<(Value, Value), Error> {
    let (ta, tb) = (a.value_type(), b.value_type());
    let target = match ta.join(tb) {
        Some(target) => target,
        None => return Err(Error::NoConversion(ta, tb)),
    };
    Ok((a.convert(target)?, b.convert(target)?))
}
