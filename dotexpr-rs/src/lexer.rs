//! Tokens and the lexer for raw (unqualified) expression text.
//!
//! Raw text is cut into runs of operator characters (`= ! > < & | + - * / ,`)
//! and runs of everything else.  Each run is split on whitespace and every
//! piece is classified on its own:
//!
//! | Lexeme | Token |
//! |--------|-------|
//! | `== != >= <= > < && \|\| + - * ** /` | [`Token::Operator`] |
//! | `,` | [`Token::Separator`] |
//! | sigil followed by a letter or `_` (`.values.count`) | [`Token::Variable`] |
//! | decimal float literal (`3`, `2.5`, `.5`, `1e3`) | [`Token::Number`] |
//! | `true` / `false` | [`Token::Boolean`] |
//! | any other word | [`Token::InferredStr`] |
//!
//! An operator run that is not exactly one known operator (`=>`, `+-`) is an
//! error rather than being broken into smaller operators.

use crate::error::{Error, Result};
use crate::group::{split, GroupKind};
use crate::ops::BinOp;
use crate::organize::organize;

#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// Quoted literal.
    Str(String),
    /// Bare word: a function name when followed by a group, otherwise a string.
    InferredStr(String),
    Number(f64),
    Boolean(bool),
    /// Raw variable reference including its sigil and any accessor suffix.
    Variable(String),
    Operator(BinOp),
    /// Argument delimiter `,`.
    Separator,
    /// Call with one [`Token::Group`] per argument.
    Function { name: String, args: Vec<Token> },
    /// Parenthesized or precedence-folded sub-expression.
    Group(Vec<Token>),
    /// Value followed by an accessor chain such as `[0].name`.
    Subscript { base: Box<Token>, accessor: String },
}

impl Token {
    pub fn is_operator(&self) -> bool {
        matches!(self, Token::Operator(_))
    }

    /// True for tokens that produce a value when evaluated.
    pub fn is_operand(&self) -> bool {
        !matches!(self, Token::Operator(_) | Token::Separator)
    }

    /// Child tokens of a function (its argument groups) or a group.
    pub fn children(&self) -> &[Token] {
        match self {
            Token::Function { args, .. } => args,
            Token::Group(children) => children,
            _ => &[],
        }
    }
}

/// Characters that make up operator runs.
pub fn is_operator_char(c: char) -> bool {
    matches!(
        c,
        '=' | '!' | '>' | '<' | '&' | '|' | '+' | '-' | '*' | '/' | ','
    )
}

// ── Lexer ─────────────────────────────────────────────────────────────────────

struct Lexer<'a> {
    src: &'a str,
    sigil: char,
}

impl<'a> Lexer<'a> {
    fn new(src: &'a str, sigil: char) -> Self {
        Lexer { src, sigil }
    }

    fn tokenize(self) -> Result<Vec<Token>> {
        let mut tokens = Vec::new();
        let mut start = 0usize;
        let mut run_is_op: Option<bool> = None;

        for (i, c) in self.src.char_indices() {
            let is_op = is_operator_char(c);
            if let Some(prev) = run_is_op {
                if prev != is_op {
                    self.emit_run(&self.src[start..i], prev, &mut tokens)?;
                    start = i;
                }
            }
            run_is_op = Some(is_op);
        }
        if let Some(prev) = run_is_op {
            self.emit_run(&self.src[start..], prev, &mut tokens)?;
        }

        Ok(tokens)
    }

    fn emit_run(&self, run: &str, is_op: bool, tokens: &mut Vec<Token>) -> Result<()> {
        for lexeme in run.split_whitespace() {
            tokens.push(self.classify(lexeme, is_op)?);
        }
        Ok(())
    }

    fn classify(&self, lexeme: &str, is_op: bool) -> Result<Token> {
        if is_op {
            if lexeme == "," {
                return Ok(Token::Separator);
            }
            return BinOp::from_symbol(lexeme)
                .map(Token::Operator)
                .ok_or_else(|| Error::UnrecognizedOperator(lexeme.to_owned()));
        }
        if self.is_variable(lexeme) {
            return Ok(Token::Variable(lexeme.to_owned()));
        }
        if let Some(x) = parse_number(lexeme) {
            return Ok(Token::Number(x));
        }
        Ok(match lexeme {
            "true" => Token::Boolean(true),
            "false" => Token::Boolean(false),
            word => Token::InferredStr(word.to_owned()),
        })
    }

    fn is_variable(&self, lexeme: &str) -> bool {
        let mut chars = lexeme.chars();
        chars.next() == Some(self.sigil)
            && chars
                .next()
                .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
    }
}

/// Decimal literals only; words such as `inf` or `NaN` stay strings.
fn parse_number(lexeme: &str) -> Option<f64> {
    let mut chars = lexeme.chars();
    let leads_numeric = match chars.next()? {
        c if c.is_ascii_digit() => true,
        '.' => chars.next().is_some_and(|c| c.is_ascii_digit()),
        _ => false,
    };
    if !leads_numeric {
        return None;
    }
    lexeme.parse().ok()
}

// ── Driver ────────────────────────────────────────────────────────────────────

/// Deepest parenthesis nesting accepted by [`tokenize`].
pub const MAX_NESTING: usize = 256;

/// Split, lex, and organize `expr` into a token tree.
///
/// Parenthesized groups are tokenized recursively into [`Token::Group`].
/// Nesting beyond [`MAX_NESTING`] is [`Error::NestingTooDeep`].
pub fn tokenize(expr: &str, sigil: char) -> Result<Vec<Token>> {
    tokenize_at(expr, sigil, 0)
}

fn tokenize_at(expr: &str, sigil: char, depth: usize) -> Result<Vec<Token>> {
    let mut tokens = Vec::new();
    for group in split(expr)? {
        match group.kind {
            GroupKind::Quoted => tokens.push(Token::Str(group.text.to_owned())),
            GroupKind::Parenthesized => {
                if depth == MAX_NESTING {
                    return Err(Error::NestingTooDeep { limit: MAX_NESTING });
                }
                tokens.push(Token::Group(tokenize_at(group.text, sigil, depth + 1)?));
            }
            GroupKind::Unqualified => tokens.extend(Lexer::new(group.text, sigil).tokenize()?),
        }
    }
    Ok(organize(tokens))
}

// ── Tests ─────────────────────────────────────────────────────────────────────
