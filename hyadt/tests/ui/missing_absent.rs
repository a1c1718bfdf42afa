use hyadt::prelude::*;

fn int(x: i32) -> i32 {
    x
}

fn main() {
    let set = handlers![on(int)];
    let _ = inspect(Some(3), set);
}
