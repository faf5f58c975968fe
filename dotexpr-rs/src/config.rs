//! Surface syntax configuration.
//!
//! | Setting | Default | Meaning |
//! |---------|---------|---------|
//! | `sigil` | `.` | Leading character of a variable reference (`.values.count`) |
//! | `open`  | `{{` | Opening delimiter of a template region |
//! | `close` | `}}` | Closing delimiter of a template region |
//!
//! A template region needs at least one whitespace character just inside
//! each delimiter: `{{ 1+1 }}` is a region, `{{1+1}}` is literal text.

use thiserror::Error;

use crate::lexer::is_operator_char;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0:?} cannot be used as a variable sigil")]
    InvalidSigil(char),
    #[error("template delimiters must be non-empty without whitespace (got {open:?} / {close:?})")]
    InvalidDelimiters { open: String, close: String },
    #[error("template pattern failed to compile: {0}")]
    Pattern(String),
}

/// Sigil and template delimiters for one [`Engine`](crate::Engine).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Syntax {
    sigil: char,
    open: String,
    close: String,
}

impl Default for Syntax {
    fn default() -> Self {
        Syntax {
            sigil: '.',
            open: "{{".into(),
            close: "}}".into(),
        }
    }
}

impl Syntax {
    pub fn new() -> Self {
        Self::default()
    }

    /// `<! expr !>` template regions.
    pub fn angle_bang() -> Self {
        Syntax {
            open: "<!".into(),
            close: "!>".into(),
            ..Self::default()
        }
    }

    pub fn with_sigil(mut self, sigil: char) -> Result<Self, ConfigError> {
        let reserved = sigil.is_whitespace()
            || is_operator_char(sigil)
            || matches!(sigil, '"' | '\'' | '(' | ')' | '[' | ']');
        if reserved {
            return Err(ConfigError::InvalidSigil(sigil));
        }
        self.sigil = sigil;
        Ok(self)
    }

    pub fn with_delimiters(
        mut self,
        open: impl Into<String>,
        close: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        let (open, close) = (open.into(), close.into());
        let bad = |d: &str| d.is_empty() || d.chars().any(char::is_whitespace);
        if bad(&open) || bad(&close) {
            return Err(ConfigError::InvalidDelimiters { open, close });
        }
        self.open = open;
        self.close = close;
        Ok(self)
    }

    pub fn sigil(&self) -> char {
        self.sigil
    }

    pub fn open(&self) -> &str {
        &self.open
    }

    pub fn close(&self) -> &str {
        &self.close
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
