//! Render a template against a small in-memory value tree.
//!
//! Usage: cargo run --example render_template -- '<template>'

use dotexpr::{Engine, Syntax, Value, ValueScope};

fn main() {
    let template = std::env::args().nth(1).unwrap_or_else(|| {
        concat!(
            "<! .service.name !> runs <! .service.replicas * 2 !> workers ",
            "on port <! .service.ports[0] !>",
        )
        .to_string()
    });

    let service: Value = [
        ("name".to_string(), Value::from("web")),
        ("replicas".to_string(), Value::from(3)),
        ("ports".to_string(), Value::from(vec![8080, 8443])),
    ]
    .into_iter()
    .collect();
    let mut scope = ValueScope::new(Value::from_iter([("service".to_string(), service)]))
        .with_function("upper", |args| match args.as_slice() {
            [Value::Str(s)] => Ok(Value::from(s.to_uppercase())),
            _ => Err("upper takes one string".into()),
        });

    let engine = match Engine::new(Syntax::angle_bang()) {
        Ok(e) => e,
        Err(e) => {
            eprintln!("render_template: {e}");
            std::process::exit(1);
        }
    };

    match engine.render(&template, &mut scope) {
        Ok(out) => println!("{out}"),
        Err(e) => {
            eprintln!("render_template: {e}");
            std::process::exit(1);
        }
    }
}
