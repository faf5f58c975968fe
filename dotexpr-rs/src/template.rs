//! Inline expression regions in literal text.
//!
//! With the default delimiters, `count: {{ .items.count + 1 }}` evaluates
//! `.items.count + 1` and splices the result into the text.  At least one
//! whitespace character must sit just inside each delimiter; regions are
//! matched left to right, non-greedily, and never nest.  A `null` result
//! renders as nothing.

use std::ops::Range;

use log::debug;
use regex::Regex;

use crate::error::Result;
use crate::value::Value;

/// Compiled region matcher for one delimiter pair.
#[derive(Debug, Clone)]
pub struct Template {
    regex: Regex,
}

/// One expression region found in a template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Region<'t> {
    /// Byte range of the whole region, delimiters included.
    pub span: Range<usize>,
    /// Expression text between the delimiters.
    pub expr: &'t str,
}

impl Template {
    pub fn new(open: &str, close: &str) -> std::result::Result<Self, regex::Error> {
        let pattern = format!(
            r"{}(\s+.*?\s+){}",
            regex::escape(open),
            regex::escape(close)
        );
        Ok(Template {
            regex: Regex::new(&pattern)?,
        })
    }

    /// All regions in `text`, in order.
    pub fn regions<'a>(&'a self, text: &'a str) -> impl Iterator<Item = Region<'a>> + 'a {
        self.regex.captures_iter(text).filter_map(|caps| {
            let whole = caps.get(0)?;
            let inner = caps.get(1)?;
            Some(Region {
                span: whole.range(),
                expr: inner.as_str(),
            })
        })
    }

    /// Replace every region with the rendering of `eval(expr)`.
    ///
    /// Text outside regions is copied through unchanged.  The first
    /// evaluation error aborts the render.
    pub fn render(
        &self,
        text: &str,
        mut eval: impl FnMut(&str) -> Result<Value>,
    ) -> Result<String> {
        let mut out = String::with_capacity(text.len());
        let mut last = 0usize;
        let mut count = 0usize;

        for region in self.regions(text) {
            out.push_str(&text[last..region.span.start]);
            let value = eval(region.expr)?;
            if !value.is_null() {
                out.push_str(&value.to_string());
            }
            last = region.span.end;
            count += 1;
        }
        out.push_str(&text[last..]);

        debug!("rendered {count} template region(s)");
        Ok(out)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
