//! Tree-walking evaluator.
//!
//! A [`Token::Group`] is folded left to right: the first operand seeds the
//! accumulator and every following `operator operand` pair is combined into
//! it.  Precedence has already been encoded as nested groups by
//! [`organize`](crate::organize), so the fold itself knows no priorities.

use log::trace;

use crate::error::{Error, Result};
use crate::lexer::Token;
use crate::ops::BinOp;
use crate::subscript;
use crate::value::Value;

// ── Resolver ──────────────────────────────────────────────────────────────────

/// Variables and functions supplied by the embedding application.
///
/// Both methods report failures as a plain message; the evaluator wraps it
/// into [`Error::Lookup`] or [`Error::Call`].  Returned integers should enter
/// [`Value`] through its `From` impls, which widen them to `f64`.
pub trait Resolver {
    /// Resolve a variable reference.  `path` is the raw token text,
    /// sigil and any `.field` / `[n]` suffix included.
    fn lookup(&mut self, path: &str) -> std::result::Result<Value, String>;

    /// Invoke `name` with arguments already evaluated left to right.
    fn call(&mut self, name: &str, args: Vec<Value>) -> std::result::Result<Value, String>;
}

impl<R: Resolver + ?Sized> Resolver for &mut R {
    fn lookup(&mut self, path: &str) -> std::result::Result<Value, String> {
        (**self).lookup(path)
    }

    fn call(&mut self, name: &str, args: Vec<Value>) -> std::result::Result<Value, String> {
        (**self).call(name, args)
    }
}

// ── Evaluator ─────────────────────────────────────────────────────────────────

/// Evaluate a token tree against `resolver`.
pub fn eval_token(token: &Token, resolver: &mut dyn Resolver) -> Result<Value> {
    match token {
        Token::Number(x) => Ok(Value::Number(*x)),
        Token::Boolean(b) => Ok(Value::Bool(*b)),
        // Unmatched bare words are string literals.
        Token::Str(s) | Token::InferredStr(s) => Ok(Value::Str(s.clone())),

        Token::Variable(path) => resolver.lookup(path).map_err(|message| Error::Lookup {
            path: path.clone(),
            message,
        }),

        Token::Function { name, args } => {
            let mut values = Vec::with_capacity(args.len());
            for arg in args {
                values.push(eval_token(arg, resolver)?);
            }
            trace!("calling {name} with {} argument(s)", values.len());
            resolver.call(name, values).map_err(|message| Error::Call {
                name: name.clone(),
                message,
            })
        }

        Token::Subscript { base, accessor } => {
            let value = eval_token(base, resolver)?;
            subscript::resolve(&value, accessor)
        }

        Token::Group(children) => eval_group(children, resolver),

        Token::Operator(_) => Err(Error::MalformedExpression("operator without operands")),
        Token::Separator => Err(Error::MalformedExpression("unexpected separator")),
    }
}

fn eval_group(children: &[Token], resolver: &mut dyn Resolver) -> Result<Value> {
    let mut acc: Option<Value> = None;
    let mut pending: Option<BinOp> = None;

    for token in children {
        match token {
            Token::Operator(op) => {
                if acc.is_none() || pending.is_some() {
                    return Err(Error::MalformedExpression("multiple adjacent operators"));
                }
                pending = Some(*op);
            }
            Token::Separator => {
                return Err(Error::MalformedExpression("unexpected separator"));
            }
            operand => {
                if acc.is_some() && pending.is_none() {
                    return Err(Error::MalformedExpression(
                        "values must be separated by operators",
                    ));
                }
                let value = eval_token(operand, resolver)?;
                acc = Some(match (acc.take(), pending.take()) {
                    (Some(left), Some(op)) => op.apply(left, value)?,
                    _ => value,
                });
            }
        }
    }

    if pending.is_some() {
        return Err(Error::MalformedExpression("operator missing right operand"));
    }
    Ok(acc.unwrap_or_default())
}

// ── Tests ─────────────────────────────────────────────────────────────────────
