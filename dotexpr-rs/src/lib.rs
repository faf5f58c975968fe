//! A small embeddable expression language.
//!
//! Expressions combine literals, sigil-prefixed variables (`.values.count`),
//! function calls, parentheses and binary operators.  Variables and
//! functions come from a [`Resolver`] supplied by the caller; [`ValueScope`]
//! is a ready-made one over a [`Value`] tree.  Expressions can also be
//! embedded in text as template regions (`{{ expr }}` by default).
//!
//! ```
//! use dotexpr::{Value, ValueScope};
//!
//! let values: Value = [("count".to_string(), Value::from(7))].into_iter().collect();
//! let mut scope = ValueScope::new(Value::from_iter([("values".to_string(), values)]))
//!     .with_function("double", |args| Ok(Value::from(args[0].as_number() * 2.0)));
//!
//! assert_eq!(
//!     dotexpr::evaluate("double(.values.count) + 1", &mut scope).unwrap(),
//!     Value::from(15)
//! );
//! assert_eq!(
//!     dotexpr::render("count={{ .values.count }}", &mut scope).unwrap(),
//!     "count=7"
//! );
//! ```

use std::sync::OnceLock;

pub mod config;
pub mod engine;
pub mod error;
pub mod eval;
pub mod group;
pub mod lexer;
pub mod ops;
pub mod organize;
pub mod scope;
pub mod subscript;
pub mod template;
pub mod value;

pub use config::{ConfigError, Syntax};
pub use engine::Engine;
pub use error::{Error, ErrorKind, Result};
pub use eval::Resolver;
pub use lexer::Token;
pub use ops::BinOp;
pub use scope::ValueScope;
pub use template::Template;
pub use value::Value;

/// Engine with the default [`Syntax`], built on first use.
pub fn default_engine() -> &'static Engine {
    static ENGINE: OnceLock<Engine> = OnceLock::new();
    ENGINE.get_or_init(Engine::default)
}

/// Parse `expr` with the default syntax.
pub fn parse(expr: &str) -> Result<Token> {
    default_engine().parse(expr)
}

/// Evaluate `expr` with the default syntax.
pub fn evaluate(expr: &str, resolver: &mut dyn Resolver) -> Result<Value> {
    default_engine().evaluate(expr, resolver)
}

/// Render `{{ expr }}` regions of `text` with the default syntax.
pub fn render(text: &str, resolver: &mut dyn Resolver) -> Result<String> {
    default_engine().render(text, resolver)
}
