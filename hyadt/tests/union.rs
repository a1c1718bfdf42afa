use std::cell::Cell;

use hyadt::coproduct::Coproduct;
use hyadt::prelude::*;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

type Number = Union![i32, f64, f32];

fn describe(value: Number) -> String {
    inspect(
        value,
        handlers![
            on(|x: i32| format!("int {x}")),
            on(|x: f64| format!("double {x}")),
            on(|x: f32| format!("float {x}")),
        ],
    )
}

#[test]
fn each_alternative_routes_to_its_handler() {
    assert_eq!(describe(Union::new(42)), "int 42");
    assert_eq!(describe(Union::new(2.5f64)), "double 2.5");
    assert_eq!(describe(Union::new(0.5f32)), "float 0.5");
}

#[test]
fn handler_order_does_not_matter() {
    let value: Number = Union::new(1.25f32);
    let tag = inspect(
        value,
        handlers![
            on(|_: f32| 'f'),
            on(|_: i32| 'i'),
            on(|_: f64| 'd'),
        ],
    );
    assert_eq!(tag, 'f');
}

#[test]
fn single_alternative_union() {
    let value: Union![String] = Union::new(String::from("only"));
    let len = inspect(value, handlers![on(|s: String| s.len())]);
    assert_eq!(len, 4);
}

#[test]
fn exactly_one_handler_runs() {
    let calls = [Cell::new(0usize), Cell::new(0), Cell::new(0)];
    let bump = |slot: usize| calls[slot].set(calls[slot].get() + 1);
    let values: [Number; 4] = [
        Union::new(1),
        Union::new(2.0f64),
        Union::new(3),
        Union::new(4.0f32),
    ];
    for value in values {
        inspect(
            value,
            handlers![
                on(|_: i32| bump(0)),
                on(|_: f64| bump(1)),
                on(|_: f32| bump(2)),
            ],
        );
    }
    assert_eq!(calls.map(Cell::into_inner), [2, 1, 1]);
}

#[test]
fn random_values_match_a_plain_match() {
    let mut rng = ChaCha20Rng::seed_from_u64(0x42);
    for _ in 0..256 {
        let (value, expected): (Number, i64) = match rng.random_range(0..3) {
            0 => {
                let x: i32 = rng.random_range(-1000..1000);
                (Union::new(x), i64::from(x) * 3)
            }
            1 => {
                let x: i32 = rng.random_range(-1000..1000);
                (Union::new(f64::from(x)), i64::from(x) * 5)
            }
            _ => {
                let x: i16 = rng.random_range(-1000..1000);
                (Union::new(f32::from(x)), i64::from(x) * 7)
            }
        };
        let position = value.position();
        let got = inspect(
            value,
            handlers![
                on(|x: i32| i64::from(x) * 3),
                on(|x: f64| x as i64 * 5),
                on(|x: f32| x as i64 * 7),
            ],
        );
        assert_eq!(got, expected, "alternative at position {position}");
    }
}

#[test]
fn accessors_follow_the_active_alternative() {
    let mut value: Union![i32, String] = Union::new(String::from("abc"));
    assert_eq!(<Union![i32, String]>::LEN, 2);
    assert_eq!(value.position(), 1);
    assert!(value.is::<String, _>());
    assert!(!value.is::<i32, _>());
    assert!(value.type_name().ends_with("String"));

    if let Some(text) = value.get_mut::<String, _>() {
        text.push('d');
    }
    assert_eq!(value.get::<String, _>().map(String::as_str), Some("abcd"));

    let violation = value.try_get::<i32, _>().unwrap_err();
    assert!(violation.is_inactive_alternative());
    assert!(violation.to_string().contains("`i32`"));

    let rest = value.take::<i32, _>().unwrap_err();
    assert_eq!(rest.unwrap::<String, _>(), "abcd");
}

#[test]
#[should_panic(expected = "Attempted to access alternative `i32`")]
fn unwrapping_an_inactive_alternative_is_fatal() {
    let value: Union![i32, bool] = Union::new(true);
    let _ = value.unwrap::<i32, _>();
}

#[test]
fn inspect_macro_builds_the_handler_set() {
    let value: Number = Union::new(7);
    let doubled = inspect!(value;
        on(|x: i32| f64::from(x) * 2.0),
        on(|x: f64| x * 2.0),
        on(|x: f32| f64::from(x) * 2.0),
    );
    assert_eq!(doubled, 14.0);
}

#[test]
fn alternatives_are_listed_in_declaration_order() {
    let names = alternatives_of::<Number>();
    assert_eq!(names[..], ["i32", "f64", "f32"]);
}

#[test]
fn a_union_wraps_and_releases_its_coproduct() {
    let inner: Coprod![u8, char] = Coproduct::Inr(Coproduct::Inl('k'));
    let value = Union::from_inner(inner);
    assert_eq!(value.position(), 1);
    assert_eq!(value.get::<char, _>(), Some(&'k'));
    assert_eq!(value.into_inner(), Coproduct::Inr(Coproduct::Inl('k')));
}
