//! An in-memory [`Resolver`] over a [`Value`] tree.
//!
//! Variable paths are accessor chains rooted at the scope's value:
//! `.abc.def[1]` reads key `abc`, then key `def`, then index 1.  A missing
//! key resolves to `null`; any other failed step is a lookup error.
//! Functions are plain closures registered by name.

use std::collections::HashMap;
use std::fmt;

use crate::error::Error;
use crate::eval::Resolver;
use crate::subscript;
use crate::value::Value;

/// A registered function.
pub type Function = Box<dyn FnMut(Vec<Value>) -> Result<Value, String> + Send>;

pub struct ValueScope {
    root: Value,
    sigil: char,
    functions: HashMap<String, Function>,
}

impl Default for ValueScope {
    fn default() -> Self {
        ValueScope {
            root: Value::Null,
            sigil: '.',
            functions: HashMap::new(),
        }
    }
}

impl fmt::Debug for ValueScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<_> = self.functions.keys().collect();
        names.sort();
        f.debug_struct("ValueScope")
            .field("root", &self.root)
            .field("sigil", &self.sigil)
            .field("functions", &names)
            .finish()
    }
}

impl ValueScope {
    pub fn new(root: impl Into<Value>) -> Self {
        ValueScope {
            root: root.into(),
            ..Self::default()
        }
    }

    /// Match the sigil of the [`Syntax`](crate::Syntax) in use.
    pub fn with_sigil(mut self, sigil: char) -> Self {
        self.sigil = sigil;
        self
    }

    /// Register (or replace) a function.
    pub fn with_function<F>(mut self, name: impl Into<String>, f: F) -> Self
    where
        F: FnMut(Vec<Value>) -> Result<Value, String> + Send + 'static,
    {
        self.functions.insert(name.into(), Box::new(f));
        self
    }

    pub fn root(&self) -> &Value {
        &self.root
    }

    pub fn root_mut(&mut self) -> &mut Value {
        &mut self.root
    }
}

impl Resolver for ValueScope {
    fn lookup(&mut self, path: &str) -> Result<Value, String> {
        let Some(rest) = path.strip_prefix(self.sigil) else {
            return Err(format!("{path} does not start with {:?}", self.sigil));
        };
        match subscript::resolve(&self.root, &format!(".{rest}")) {
            Err(Error::KeyNotFound(_)) => Ok(Value::Null),
            other => other.map_err(|e| e.to_string()),
        }
    }

    fn call(&mut self, name: &str, args: Vec<Value>) -> Result<Value, String> {
        match self.functions.get_mut(name) {
            Some(f) => f(args),
            None => Err(format!("unknown function {name}")),
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
