use hyadt::prelude::*;

fn render(x: i32) -> String {
    x.to_string()
}

fn nothing() {}

fn main() {
    let set = handlers![on(render), absent(nothing)];
    let _: String = inspect_as::<String, _, _, _>(None::<i32>, set);
}
