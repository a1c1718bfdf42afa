use hyadt::prelude::*;

fn byte(b: u8) -> u8 {
    b
}

fn letter(c: char) -> char {
    c
}

fn main() {
    let value: Union![u8, char] = Union::new('x');
    let set = handlers![on(byte), on(letter)];
    let _ = inspect(value, set);
}
