//! The [`Engine`] ties a [`Syntax`] to its compiled template matcher.

use log::trace;

use crate::config::{ConfigError, Syntax};
use crate::error::Result;
use crate::eval::{eval_token, Resolver};
use crate::lexer::{tokenize, Token};
use crate::template::Template;
use crate::value::Value;

#[derive(Debug, Clone)]
pub struct Engine {
    syntax: Syntax,
    template: Template,
}

impl Engine {
    pub fn new(syntax: Syntax) -> std::result::Result<Self, ConfigError> {
        let template = Template::new(syntax.open(), syntax.close())
            .map_err(|e| ConfigError::Pattern(e.to_string()))?;
        Ok(Engine { syntax, template })
    }

    pub fn syntax(&self) -> &Syntax {
        &self.syntax
    }

    pub fn template(&self) -> &Template {
        &self.template
    }

    /// Token tree for `expr`, rooted at a [`Token::Group`].
    pub fn parse(&self, expr: &str) -> Result<Token> {
        Ok(Token::Group(tokenize(expr, self.syntax.sigil())?))
    }

    /// Parse and evaluate one expression.
    pub fn evaluate(&self, expr: &str, resolver: &mut dyn Resolver) -> Result<Value> {
        let root = self.parse(expr)?;
        let value = eval_token(&root, resolver);
        trace!("evaluate {expr:?} -> {value:?}");
        value
    }

    /// Render every template region of `text` against `resolver`.
    pub fn render(&self, text: &str, resolver: &mut dyn Resolver) -> Result<String> {
        self.template.render(text, |expr| self.evaluate(expr, resolver))
    }
}

impl Default for Engine {
    fn default() -> Self {
        // The default delimiters are constant and always compile.
        Engine::new(Syntax::default()).expect("default template pattern")
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Error, ErrorKind};
    use crate::scope::ValueScope;

    fn scope() -> ValueScope {
        let values: Value = [
            ("count".to_string(), Value::from(7)),
            ("name".to_string(), Value::from("hello")),
        ]
        .into_iter()
        .collect();
        ValueScope::new(Value::from_iter([("values".to_string(), values)]))
            .with_function("len", |args| match args.as_slice() {
                [Value::Str(s)] => Ok(Value::from(s.chars().count())),
                _ => Err("len takes one string".into()),
            })
    }

    #[test]
    fn evaluate_with_default_syntax() {
        let engine = Engine::default();
        let mut s = scope();
        assert_eq!(
            engine.evaluate(".values.count + len(.values.name)", &mut s),
            Ok(Value::Number(12.0))
        );
    }

    #[test]
    fn parse_wraps_in_group() {
        let engine = Engine::default();
        let Token::Group(children) = engine.parse("1 + 2").unwrap() else {
            panic!("expected a group");
        };
        assert_eq!(children.len(), 3);
    }

    #[test]
    fn render_with_angle_bang() {
        let engine = Engine::new(Syntax::angle_bang()).unwrap();
        let mut s = scope();
        assert_eq!(
            engine.render("<! .values.name !>, <! .values.count * 2 !>", &mut s),
            Ok("hello, 14".to_string())
        );
        // Braces are literal text under this syntax.
        assert_eq!(
            engine.render("{{ 1 + 1 }}", &mut s),
            Ok("{{ 1 + 1 }}".to_string())
        );
    }

    #[test]
    fn custom_sigil_reaches_lexer() {
        let syntax = Syntax::new().with_sigil('$').unwrap();
        let engine = Engine::new(syntax).unwrap();
        let mut s = scope().with_sigil('$');
        assert_eq!(engine.evaluate("$values.count", &mut s), Ok(Value::Number(7.0)));
        // `.values` is no longer a variable; it is a bare word.
        assert_eq!(engine.evaluate(".values", &mut s), Ok(Value::from(".values")));
    }

    #[test]
    fn render_propagates_errors() {
        let engine = Engine::default();
        let err = engine.render("x {{ 1 / 0 }} y", &mut scope()).unwrap_err();
        assert_eq!(err, Error::DivisionByZero);
        assert_eq!(err.kind(), ErrorKind::Arithmetic);
    }
}
