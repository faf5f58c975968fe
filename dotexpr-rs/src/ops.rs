//! Binary operator table and semantics.
//!
//! | Operator | Operands | Result |
//! |---|---|---|
//! | `==` `!=` | string, number, boolean (same kind both sides) | boolean |
//! | `>` `>=` `<` `<=` | string (lexicographic), number | boolean |
//! | `+` | string (concat), number (sum), sequence (append) | operand kind |
//! | `-` `*` `/` `**` | number | number |
//! | `&&` `\|\|` | anything | whichever operand decides the outcome |
//!
//! Operands are never coerced.  A kind mismatch is
//! [`Error::IncompatibleTypes`].

use std::cmp::Ordering;
use std::fmt;

use crate::error::{Error, Result};
use crate::value::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinOp {
    Eq,
    Ne,
    Gt,
    Ge,
    Lt,
    Le,
    And,
    Or,
    Add,
    Sub,
    Mul,
    Pow,
    Div,
}

impl BinOp {
    /// Every operator, in no particular order.
    pub const ALL: [BinOp; 13] = [
        BinOp::Eq,
        BinOp::Ne,
        BinOp::Gt,
        BinOp::Ge,
        BinOp::Lt,
        BinOp::Le,
        BinOp::And,
        BinOp::Or,
        BinOp::Add,
        BinOp::Sub,
        BinOp::Mul,
        BinOp::Pow,
        BinOp::Div,
    ];

    /// Exact-match lookup of an operator lexeme.
    pub fn from_symbol(s: &str) -> Option<BinOp> {
        Self::ALL.into_iter().find(|op| op.symbol() == s)
    }

    pub fn symbol(self) -> &'static str {
        match self {
            BinOp::Eq => "==",
            BinOp::Ne => "!=",
            BinOp::Gt => ">",
            BinOp::Ge => ">=",
            BinOp::Lt => "<",
            BinOp::Le => "<=",
            BinOp::And => "&&",
            BinOp::Or => "||",
            BinOp::Add => "+",
            BinOp::Sub => "-",
            BinOp::Mul => "*",
            BinOp::Pow => "**",
            BinOp::Div => "/",
        }
    }

    /// Combine two evaluated operands.
    pub fn apply(self, l: Value, r: Value) -> Result<Value> {
        match self {
            BinOp::Eq => equals(l, r, self).map(Value::Bool),
            BinOp::Ne => equals(l, r, self).map(|eq| Value::Bool(!eq)),
            BinOp::Gt => compare(l, r, self).map(|o| Value::Bool(o == Ordering::Greater)),
            BinOp::Ge => compare(l, r, self).map(|o| Value::Bool(o != Ordering::Less)),
            BinOp::Lt => compare(l, r, self).map(|o| Value::Bool(o == Ordering::Less)),
            BinOp::Le => compare(l, r, self).map(|o| Value::Bool(o != Ordering::Greater)),
            BinOp::And => Ok(if l.is_truthy() { r } else { l }),
            BinOp::Or => Ok(if l.is_truthy() { l } else { r }),
            BinOp::Add => add(l, r),
            BinOp::Sub => arith(l, r, self, |a, b| a - b),
            BinOp::Mul => arith(l, r, self, |a, b| a * b),
            BinOp::Pow => arith(l, r, self, f64::powf),
            BinOp::Div => match (&l, &r) {
                (Value::Number(_), Value::Number(b)) if *b == 0.0 => Err(Error::DivisionByZero),
                _ => arith(l, r, self, |a, b| a / b),
            },
        }
    }
}

impl fmt::Display for BinOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

fn incompatible(op: BinOp, left: Value, right: Value) -> Error {
    Error::IncompatibleTypes { op, left, right }
}

fn equals(l: Value, r: Value, op: BinOp) -> Result<bool> {
    match (&l, &r) {
        (Value::Str(a), Value::Str(b)) => Ok(a == b),
        (Value::Number(a), Value::Number(b)) => Ok(a == b),
        (Value::Bool(a), Value::Bool(b)) => Ok(a == b),
        _ => Err(incompatible(op, l, r)),
    }
}

/// Ordering for the relational operators.  Any relation involving NaN is false.
fn compare(l: Value, r: Value, op: BinOp) -> Result<Ordering> {
    match (&l, &r) {
        (Value::Str(a), Value::Str(b)) => Ok(a.cmp(b)),
        (Value::Number(a), Value::Number(b)) => match a.partial_cmp(b) {
            Some(o) => Ok(o),
            None => Ok(match op {
                BinOp::Gt | BinOp::Ge => Ordering::Less,
                _ => Ordering::Greater,
            }),
        },
        _ => Err(incompatible(op, l, r)),
    }
}

fn add(l: Value, r: Value) -> Result<Value> {
    match (l, r) {
        (Value::Str(mut a), Value::Str(b)) => {
            a.push_str(&b);
            Ok(Value::Str(a))
        }
        (Value::Number(a), Value::Number(b)) => Ok(Value::Number(a + b)),
        (Value::List(mut a), Value::List(b)) => {
            a.extend(b);
            Ok(Value::List(a))
        }
        (l, r) => Err(incompatible(BinOp::Add, l, r)),
    }
}

fn arith(l: Value, r: Value, op: BinOp, f: impl Fn(f64, f64) -> f64) -> Result<Value> {
    match (&l, &r) {
        (Value::Number(a), Value::Number(b)) => Ok(Value::Number(f(*a, *b))),
        _ => Err(incompatible(op, l, r)),
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn n(x: f64) -> Value {
        Value::Number(x)
    }

    fn s(x: &str) -> Value {
        Value::Str(x.into())
    }

    fn b(x: bool) -> Value {
        Value::Bool(x)
    }

    fn apply(op: BinOp, l: Value, r: Value) -> Value {
        op.apply(l, r).expect("operator failed")
    }

    #[test]
    fn symbols_round_trip() {
        for op in BinOp::ALL {
            assert_eq!(BinOp::from_symbol(op.symbol()), Some(op));
        }
        assert_eq!(BinOp::from_symbol("=>"), None);
        assert_eq!(BinOp::from_symbol(","), None);
    }

    #[test]
    fn equality() {
        assert_eq!(apply(BinOp::Eq, s("a"), s("a")), b(true));
        assert_eq!(apply(BinOp::Eq, s("a"), s("b")), b(false));
        assert_eq!(apply(BinOp::Eq, n(1.0), n(1.0)), b(true));
        assert_eq!(apply(BinOp::Eq, n(1.0), n(1.1)), b(false));
        assert_eq!(apply(BinOp::Eq, b(false), b(false)), b(true));
        assert_eq!(apply(BinOp::Ne, b(false), b(true)), b(true));
        assert_eq!(apply(BinOp::Ne, s("a"), s("a")), b(false));
        assert!(BinOp::Eq.apply(n(1.0), s("a")).is_err());
        assert!(BinOp::Ne.apply(n(1.0), s("a")).is_err());
    }

    #[test]
    fn equality_rejects_composites() {
        let list = Value::from(vec![1]);
        assert!(BinOp::Eq.apply(list.clone(), list).is_err());
        assert!(BinOp::Eq.apply(Value::Null, Value::Null).is_err());
    }

    #[test]
    fn relational() {
        assert_eq!(apply(BinOp::Gt, s("b"), s("a")), b(true));
        assert_eq!(apply(BinOp::Gt, s("a"), s("a")), b(false));
        assert_eq!(apply(BinOp::Ge, s("a"), s("a")), b(true));
        assert_eq!(apply(BinOp::Lt, n(1.0), n(1.1)), b(true));
        assert_eq!(apply(BinOp::Le, n(1.1), n(1.0)), b(false));
        assert_eq!(apply(BinOp::Le, n(1.0), n(1.0)), b(true));
        assert!(BinOp::Gt.apply(n(1.0), s("a")).is_err());
        assert!(BinOp::Lt.apply(b(true), b(false)).is_err());
    }

    #[test]
    fn nan_relations_are_false() {
        assert_eq!(apply(BinOp::Gt, n(f64::NAN), n(1.0)), b(false));
        assert_eq!(apply(BinOp::Lt, n(f64::NAN), n(1.0)), b(false));
    }

    #[test]
    fn logical_returns_deciding_operand() {
        assert_eq!(apply(BinOp::And, s(""), n(1.0)), s(""));
        assert_eq!(apply(BinOp::Or, s(""), n(1.0)), n(1.0));
        assert_eq!(apply(BinOp::And, b(true), n(0.0)), n(0.0));
        assert_eq!(apply(BinOp::And, n(2.0), s("x")), s("x"));
        assert_eq!(apply(BinOp::Or, s("x"), n(0.0)), s("x"));
        assert_eq!(apply(BinOp::Or, n(0.0), s("")), s(""));
        assert_eq!(apply(BinOp::Or, Value::Null, Value::List(vec![])), Value::List(vec![]));
    }

    #[test]
    fn addition() {
        assert_eq!(apply(BinOp::Add, s("ab"), s("cd")), s("abcd"));
        assert_eq!(apply(BinOp::Add, n(1.5), n(2.0)), n(3.5));
        assert_eq!(
            apply(BinOp::Add, Value::from(vec![1, 2]), Value::from(vec![3])),
            Value::from(vec![1, 2, 3])
        );
        assert!(BinOp::Add.apply(s("a"), n(1.0)).is_err());
        assert!(BinOp::Add.apply(b(true), b(true)).is_err());
    }

    #[test]
    fn numeric_only_operators() {
        assert_eq!(apply(BinOp::Sub, n(5.0), n(3.0)), n(2.0));
        assert_eq!(apply(BinOp::Mul, n(4.0), n(2.5)), n(10.0));
        assert_eq!(apply(BinOp::Pow, n(2.0), n(10.0)), n(1024.0));
        assert_eq!(apply(BinOp::Div, n(9.0), n(3.0)), n(3.0));
        assert!(matches!(
            BinOp::Sub.apply(s("a"), s("b")),
            Err(Error::IncompatibleTypes { op: BinOp::Sub, .. })
        ));
        assert!(BinOp::Pow.apply(s("a"), n(2.0)).is_err());
    }

    #[test]
    fn division_by_zero() {
        assert_eq!(BinOp::Div.apply(n(1.0), n(0.0)), Err(Error::DivisionByZero));
        assert_eq!(BinOp::Div.apply(n(1.0), n(-0.0)), Err(Error::DivisionByZero));
        assert_eq!(apply(BinOp::Div, n(0.0), n(4.0)), n(0.0));
    }
}
