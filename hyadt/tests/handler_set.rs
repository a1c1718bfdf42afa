use hyadt::hlist::{HCons, HNil};
use hyadt::prelude::*;

#[test]
fn a_handler_set_can_be_queried_by_type() {
    let set = handlers![on(|x: i32| x * 2), on(|s: &str| s.len() as i32)];
    assert_eq!(set.clone().call(21), 42);
    assert_eq!(set.call("four"), 4);
}

#[test]
fn a_handler_set_can_be_built_without_the_macro() {
    let set = HNil.prepend(on(|c: char| c.is_alphabetic())).prepend(absent(|| false));
    let value: Option<char> = Some('a');
    assert!(inspect(value, set));
}

#[test]
fn empty_handler_set_is_hnil() {
    let set = handlers![];
    assert_eq!(set, HNil);
}

#[test]
fn macro_spells_a_plain_list() {
    let set = handlers![on(|x: u8| x)];
    let HCons { head, tail } = set;
    assert_eq!(tail, HNil);
    assert_eq!(head.call(9), 9);
}

#[test]
fn handlers_report_their_alternative() {
    let handler = ok(|v: u16| v);
    assert_eq!(format!("{handler:?}"), "On<hyadt::shape::result::Success<u16>>");
}

#[test]
fn a_set_is_reusable_when_cloned() {
    let set = handlers![on(|x: u8| u32::from(x)), absent(|| 0)];
    let first = inspect(Some(4u8), set.clone());
    let second = inspect(None::<u8>, set);
    assert_eq!((first, second), (4, 0));
}
