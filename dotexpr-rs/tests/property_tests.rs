use proptest::prelude::*;

use dotexpr::group::split;
use dotexpr::{Error, Value, ValueScope};

fn eval(expr: &str) -> dotexpr::Result<Value> {
    dotexpr::evaluate(expr, &mut ValueScope::default())
}

proptest! {
    /// A single-quoted literal evaluates to exactly its contents.
    #[test]
    fn quoted_literal_round_trips(s in "[^']{0,40}") {
        prop_assert_eq!(eval(&format!("'{s}'")), Ok(Value::Str(s)));
    }

    /// Text with no opening delimiter renders unchanged.
    #[test]
    fn template_passthrough(text in "[^{]{0,80}") {
        prop_assert_eq!(
            dotexpr::render(&text, &mut ValueScope::default()),
            Ok(text.clone())
        );
    }

    #[test]
    fn splitter_never_panics(expr in "\\PC{0,60}") {
        let _ = split(&expr);
    }

    #[test]
    fn evaluator_never_panics(expr in "[0-9a-z .()'\"+*/=!<>&|,\\[\\]-]{0,40}") {
        let _ = eval(&expr);
    }

    /// Any number divided by zero fails; zero divided by a nonzero number is zero.
    #[test]
    fn division_by_zero(x in 0.0f64..1.0e6) {
        prop_assert_eq!(eval(&format!("{x} / 0")), Err(Error::DivisionByZero));
        if x != 0.0 {
            prop_assert_eq!(eval(&format!("0 / {x}")), Ok(Value::Number(0.0)));
        }
    }

    /// Integer addition renders in its shortest form.
    #[test]
    fn integer_sums_render_plainly(a in 0u32..10_000, b in 0u32..10_000) {
        let out = dotexpr::render(&format!("{{{{ {a} + {b} }}}}"), &mut ValueScope::default());
        prop_assert_eq!(out, Ok((u64::from(a) + u64::from(b)).to_string()));
    }
}

#[test]
fn one_plus_one_renders_two() {
    assert_eq!(
        dotexpr::render("{{ 1+1 }}", &mut ValueScope::default()),
        Ok("2".to_string())
    );
}
