use hyadt::prelude::*;

fn int(x: i32) -> i32 {
    x
}

fn text(s: String) -> i32 {
    s.len() as i32
}

fn main() {
    let value: Union![i32, f64, String] = Union::new(7);
    let set = handlers![on(int), on(text)];
    let _ = inspect(value, set);
}
