//! Error types shared by every stage of the pipeline.
//!
//! A call either succeeds with one value or fails with the first [`Error`]
//! encountered.  [`Error::kind`] groups the variants into the broad classes
//! callers usually branch on.

use thiserror::Error;

use crate::ops::BinOp;
use crate::value::Value;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Broad classification of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Unbalanced parentheses, bad quoting, unknown operators, malformed token sequences.
    Syntax,
    /// Operand types not accepted by an operator.
    Type,
    /// Division by zero.
    Arithmetic,
    /// Raised by the variable collaborator.
    Lookup,
    /// Raised by the function collaborator.
    Call,
    /// Subscript out of range, missing key, or non-indexable base.
    Index,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("unclosed parenthesis group")]
    UnbalancedParenthesis,

    #[error("unclosed quotation mark")]
    UnterminatedQuote,

    #[error("empty parenthesis group contained no contents")]
    EmptyParenGroup,

    #[error("parenthesis groups nested deeper than {limit} levels")]
    NestingTooDeep { limit: usize },

    #[error("unrecognized operator {0}")]
    UnrecognizedOperator(String),

    #[error("bad expression, {0}")]
    MalformedExpression(&'static str),

    #[error("malformed accessor {0:?}")]
    MalformedAccessor(String),

    #[error("{left} and {right} are incompatible types for {op}")]
    IncompatibleTypes { op: BinOp, left: Value, right: Value },

    #[error("division by zero error")]
    DivisionByZero,

    #[error("{kind} value {0} is not indexable", kind = .0.type_name())]
    NotIndexable(Value),

    #[error("index {index} out of range for sequence of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("key {0:?} not found")]
    KeyNotFound(String),

    #[error("lookup of {path} failed: {message}")]
    Lookup { path: String, message: String },

    #[error("call to {name} failed: {message}")]
    Call { name: String, message: String },
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::UnbalancedParenthesis
            | Error::UnterminatedQuote
            | Error::EmptyParenGroup
            | Error::NestingTooDeep { .. }
            | Error::UnrecognizedOperator(_)
            | Error::MalformedExpression(_)
            | Error::MalformedAccessor(_) => ErrorKind::Syntax,
            Error::IncompatibleTypes { .. } => ErrorKind::Type,
            Error::DivisionByZero => ErrorKind::Arithmetic,
            Error::NotIndexable(_) | Error::IndexOutOfRange { .. } | Error::KeyNotFound(_) => {
                ErrorKind::Index
            }
            Error::Lookup { .. } => ErrorKind::Lookup,
            Error::Call { .. } => ErrorKind::Call,
        }
    }
}
