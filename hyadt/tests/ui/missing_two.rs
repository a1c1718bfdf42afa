use hyadt::prelude::*;

fn int(x: i32) -> i32 {
    x
}

fn main() {
    let value: Union![i32, f64, String] = Union::new(7);
    let set = handlers![on(int)];
    let _ = inspect(value, set);
}
