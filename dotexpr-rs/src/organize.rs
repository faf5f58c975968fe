//! Rewrites a flat token list into the tree the evaluator folds over.
//!
//! 1. Call syntax: a bare word directly followed by a group becomes a
//!    [`Token::Function`] with one argument group per `,`-separated slice.
//!    A bare word starting with `[` directly after a value becomes a
//!    [`Token::Subscript`] on that value; further accessor words extend it.
//! 2. Precedence: `**`, then `/`, then `*` are each swept left to right,
//!    wrapping `left op right` into a [`Token::Group`].  A run of the same
//!    operator shares one group, so `2 * 3 * 4` becomes `(2 * 3 * 4)` and
//!    the evaluator's left fold gives `((2 * 3) * 4)` without deep trees.
//!
//! `+ - == != > >= < <= && ||` are left flat and resolve in source order.

use crate::lexer::Token;
use crate::ops::BinOp;

/// Highest priority first.
const PRECEDENCE: [BinOp; 3] = [BinOp::Pow, BinOp::Div, BinOp::Mul];

pub fn organize(tokens: Vec<Token>) -> Vec<Token> {
    fold_precedence(fold_calls(tokens))
}

fn fold_calls(tokens: Vec<Token>) -> Vec<Token> {
    let mut out: Vec<Token> = Vec::with_capacity(tokens.len());
    for token in tokens {
        match token {
            Token::Group(children) => match out.pop() {
                Some(Token::InferredStr(name)) => out.push(Token::Function {
                    name,
                    args: split_args(children),
                }),
                prev => {
                    out.extend(prev);
                    out.push(Token::Group(children));
                }
            },
            Token::InferredStr(word) if word.starts_with('[') => match out.pop() {
                Some(Token::Subscript { base, mut accessor }) => {
                    accessor.push_str(&word);
                    out.push(Token::Subscript { base, accessor });
                }
                Some(base) if base.is_operand() => out.push(Token::Subscript {
                    base: Box::new(base),
                    accessor: word,
                }),
                prev => {
                    out.extend(prev);
                    out.push(Token::InferredStr(word));
                }
            },
            other => out.push(other),
        }
    }
    out
}

/// Partition call arguments on separators.  A trailing empty slice still
/// counts as an argument.
fn split_args(children: Vec<Token>) -> Vec<Token> {
    let mut args = Vec::new();
    let mut current = Vec::new();
    for token in children {
        if matches!(token, Token::Separator) {
            args.push(Token::Group(std::mem::take(&mut current)));
        } else {
            current.push(token);
        }
    }
    args.push(Token::Group(current));
    args
}

fn fold_precedence(mut tokens: Vec<Token>) -> Vec<Token> {
    for op in PRECEDENCE {
        let mut out: Vec<Token> = Vec::with_capacity(tokens.len());
        let mut iter = tokens.into_iter().peekable();
        // Whether `out.last()` is a group built by this sweep.
        let mut chained = false;
        while let Some(token) = iter.next() {
            let matches_op = matches!(token, Token::Operator(o) if o == op);
            if matches_op && out.last().is_some_and(Token::is_operand) {
                if let Some(right) = iter.next_if(Token::is_operand) {
                    if chained {
                        if let Some(Token::Group(children)) = out.last_mut() {
                            children.extend([token, right]);
                            continue;
                        }
                    }
                    let left = out.pop();
                    out.push(Token::Group(left.into_iter().chain([token, right]).collect()));
                    chained = true;
                    continue;
                }
            }
            out.push(token);
            chained = false;
        }
        tokens = out;
    }
    tokens
}

// ── Tests ─────────────────────────────────────────────────────────────────────
