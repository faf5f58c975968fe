//! First pass over an expression: split it into quoted literals,
//! parenthesized sub-expressions, and raw text.
//!
//! Only the outermost parentheses start a group.  Nested pairs stay inside
//! the group's text and are split again when that group is tokenized.
//! Quotes open a literal only at depth zero; deeper down they merely shield
//! parentheses from the depth counter so `len("(")` stays balanced.

use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupKind {
    /// `"..."` or `'...'`, quotes stripped, contents verbatim.
    Quoted,
    /// `( ... )`, outer parentheses stripped, contents trimmed.
    Parenthesized,
    /// Anything else, trimmed.  Never empty.
    Unqualified,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Group<'a> {
    pub text: &'a str,
    pub kind: GroupKind,
}

impl<'a> Group<'a> {
    fn new(text: &'a str, kind: GroupKind) -> Self {
        Group { text, kind }
    }
}

/// Split `expr` into an ordered list of groups.
pub fn split(expr: &str) -> Result<Vec<Group<'_>>> {
    let mut groups = Vec::new();
    let mut quote: Option<char> = None;
    let mut depth = 0usize;
    // Byte offset where the pending group's text begins.
    let mut start = 0usize;

    for (i, c) in expr.char_indices() {
        if let Some(q) = quote {
            if c == q {
                quote = None;
                if depth == 0 {
                    groups.push(Group::new(&expr[start..i], GroupKind::Quoted));
                    start = i + c.len_utf8();
                }
            }
            continue;
        }

        match c {
            '"' | '\'' => {
                if depth == 0 {
                    push_unqualified(&mut groups, &expr[start..i]);
                    start = i + c.len_utf8();
                }
                quote = Some(c);
            }
            '(' => {
                if depth == 0 {
                    push_unqualified(&mut groups, &expr[start..i]);
                    start = i + c.len_utf8();
                }
                depth += 1;
            }
            ')' => {
                match depth {
                    0 => return Err(Error::UnbalancedParenthesis),
                    1 => {
                        let inner = expr[start..i].trim();
                        if inner.is_empty() {
                            return Err(Error::EmptyParenGroup);
                        }
                        groups.push(Group::new(inner, GroupKind::Parenthesized));
                        start = i + c.len_utf8();
                    }
                    _ => {}
                }
                depth -= 1;
            }
            _ => {}
        }
    }

    if depth != 0 {
        return Err(Error::UnbalancedParenthesis);
    }
    if quote.is_some() {
        return Err(Error::UnterminatedQuote);
    }
    push_unqualified(&mut groups, &expr[start..]);

    Ok(groups)
}

fn push_unqualified<'a>(groups: &mut Vec<Group<'a>>, text: &'a str) {
    let text = text.trim();
    if !text.is_empty() {
        groups.push(Group::new(text, GroupKind::Unqualified));
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
