use hyadt::prelude::*;
use hyadt_derive::Shape;

#[derive(Debug, Clone, PartialEq, Shape)]
enum Literal {
    Int(i64),
    Float(f64),
    Text(String),
}

#[derive(Debug, Shape)]
enum Slot<'a, T> {
    Borrowed(&'a str),
    Owned(T),
}

fn describe(literal: Literal) -> String {
    inspect(
        literal,
        handlers![
            on(|x: i64| format!("int {x}")),
            on(|x: f64| format!("float {x}")),
            on(|s: String| format!("text {s:?}")),
        ],
    )
}

#[test]
fn derived_enum_routes_each_variant() {
    assert_eq!(describe(Literal::Int(3)), "int 3");
    assert_eq!(describe(Literal::Float(0.5)), "float 0.5");
    assert_eq!(describe(Literal::Text("a".into())), "text \"a\"");
}

#[test]
fn derived_enum_by_reference() {
    let mut literal = Literal::Text(String::from("ab"));
    let len = inspect(
        &literal,
        handlers![on(|_: &i64| 0), on(|_: &f64| 0), on(|s: &String| s.len())],
    );
    assert_eq!(len, 2);

    inspect(
        &mut literal,
        handlers![on(|x: &mut i64| *x += 1); otherwise(|_| ())],
    );
    assert_eq!(literal, Literal::Text(String::from("ab")));

    let mut number = Literal::Int(1);
    inspect(
        &mut number,
        handlers![on(|x: &mut i64| *x += 1); otherwise(|_| ())],
    );
    assert_eq!(number, Literal::Int(2));
}

#[test]
fn derived_generic_enum() {
    let slot: Slot<'_, Vec<u8>> = Slot::Owned(vec![1, 2, 3]);
    let len = inspect(
        &slot,
        handlers![on(|s: &&str| s.len()), on(|v: &Vec<u8>| v.len())],
    );
    assert_eq!(len, 3);

    let borrowed: Slot<'_, u32> = Slot::Borrowed("four");
    let len = inspect(borrowed, handlers![on(|s: &'static str| s.len()), on(|_: u32| 0)]);
    assert_eq!(len, 4);
}

#[test]
fn derived_enum_is_a_union_in_reports() {
    let set = handlers![on(|_: String| ()); otherwise(|_| ())];
    let report = coverage::<Literal, _, _>(&set);
    assert_eq!(report.kind, ShapeKind::Union);
    assert_eq!(report.alternatives[..], ["i64", "f64", "alloc::string::String"]);
    assert_eq!(report.fallback[..], ["i64", "f64"]);
}
