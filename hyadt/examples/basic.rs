//! Inspect a three-way numeric union and a few optionals.
use hyadt::prelude::*;

type Number = Union![i32, f64, f32];

fn describe(value: &Number) -> String {
    inspect(
        value,
        handlers![
            on(|x: &i32| format!("int {x}")),
            on(|x: &f64| format!("double {x}")),
            on(|x: &f32| format!("float {x}")),
        ],
    )
}

fn main() {
    let numbers: [Number; 3] = [Union::new(42), Union::new(3.25f64), Union::new(0.5f32)];
    for number in &numbers {
        println!("{}", describe(number));
    }

    for value in [Some(7), None] {
        let line = inspect!(value; on(|x: i32| format!("got {x}")), absent(|| "nothing".to_owned()));
        println!("{line}");
    }

    let set = handlers![on(|x: &i32| i64::from(*x)); otherwise(|_| 0)];
    println!("{}", coverage::<&Number, _, _>(&set));
}
