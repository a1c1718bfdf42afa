use hyadt::prelude::*;

fn int(x: i32) -> i32 {
    x
}

fn float(y: f64) -> i32 {
    y as i32
}

fn negate(x: i32) -> i32 {
    -x
}

fn main() {
    let value: Union![i32, f64] = Union::new(4);
    let set = handlers![on(int), on(float), on(negate)];
    let _ = inspect(value, set);
}
