//! Accessor chains on composite values: `[2]` indexes a sequence, `.name`
//! reads a mapping key.  Steps apply left to right and the first bad step
//! is the error; nothing is recovered.

use crate::error::{Error, Result};
use crate::value::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accessor<'a> {
    Index(usize),
    Field(&'a str),
}

/// Iterator over the accessors of a suffix such as `[1].def[0]`.
///
/// Yields an error for the first malformed step and stops.
#[derive(Debug, Clone)]
pub struct Accessors<'a> {
    src: &'a str,
    rest: &'a str,
}

impl<'a> Accessors<'a> {
    pub fn new(src: &'a str) -> Self {
        Accessors { src, rest: src }
    }

    fn malformed(&mut self) -> Error {
        self.rest = "";
        Error::MalformedAccessor(self.src.to_owned())
    }
}

impl<'a> Iterator for Accessors<'a> {
    type Item = Result<Accessor<'a>>;

    fn next(&mut self) -> Option<Self::Item> {
        let rest = self.rest;
        if let Some(after) = rest.strip_prefix('[') {
            let Some(close) = after.find(']') else {
                return Some(Err(self.malformed()));
            };
            let digits = &after[..close];
            if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
                return Some(Err(self.malformed()));
            }
            // Too large for usize: past the end of any sequence.
            let index = digits.parse().unwrap_or(usize::MAX);
            self.rest = &after[close + 1..];
            Some(Ok(Accessor::Index(index)))
        } else if let Some(after) = rest.strip_prefix('.') {
            let end = after.find(['.', '[']).unwrap_or(after.len());
            if end == 0 {
                return Some(Err(self.malformed()));
            }
            self.rest = &after[end..];
            Some(Ok(Accessor::Field(&after[..end])))
        } else if rest.is_empty() {
            None
        } else {
            Some(Err(self.malformed()))
        }
    }
}

/// Apply the accessor chain `suffix` to `base`.
pub fn resolve(base: &Value, suffix: &str) -> Result<Value> {
    let mut current = base;
    for accessor in Accessors::new(suffix) {
        current = step(current, accessor?)?;
    }
    Ok(current.clone())
}

fn step<'v>(value: &'v Value, accessor: Accessor<'_>) -> Result<&'v Value> {
    match (value, accessor) {
        (Value::List(items), Accessor::Index(index)) => {
            items.get(index).ok_or(Error::IndexOutOfRange {
                index,
                len: items.len(),
            })
        }
        (Value::Map(map), Accessor::Field(key)) => map
            .get(key)
            .ok_or_else(|| Error::KeyNotFound(key.to_owned())),
        _ => Err(Error::NotIndexable(value.clone())),
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
