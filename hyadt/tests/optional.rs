use hyadt::prelude::*;

fn render(value: Option<i32>) -> String {
    inspect(
        value,
        handlers![on(|x: i32| format!("some {x}")), absent(|| String::from("none"))],
    )
}

#[test]
fn present_and_absent_route_to_their_handlers() {
    assert_eq!(render(Some(3)), "some 3");
    assert_eq!(render(None), "none");
}

#[test]
fn absent_handler_may_come_first() {
    let value: Option<&str> = None;
    let len = inspect(value, handlers![absent(|| 0usize), on(|s: &str| s.len())]);
    assert_eq!(len, 0);
}

#[test]
fn optional_of_union_nests() {
    let value: Option<Union![u8, char]> = Some(Union::new('z'));
    let code = inspect(
        value,
        handlers![
            on(|inner: Union![u8, char]| inspect(
                inner,
                handlers![on(|b: u8| u32::from(b)), on(|c: char| u32::from(c))]
            )),
            absent(|| 0),
        ],
    );
    assert_eq!(code, u32::from('z'));
}

#[test]
fn borrowed_optional_hands_out_references() {
    let value = Some(String::from("kept"));
    let len = inspect(&value, handlers![on(|s: &String| s.len()), absent(|| 0)]);
    assert_eq!(len, 4);
    // Still owned by the caller.
    assert_eq!(value.as_deref(), Some("kept"));
}

#[test]
fn mutably_borrowed_optional_can_be_updated() {
    let mut value = Some(vec![1, 2]);
    inspect(
        &mut value,
        handlers![on(|v: &mut Vec<i32>| v.push(3)), absent(|| ())],
    );
    assert_eq!(value, Some(vec![1, 2, 3]));
}

#[test]
fn presence_accessors() {
    let full = Some(5u8);
    let empty: Option<u8> = None;

    assert!(full.is_present());
    assert_eq!(*full.present(), 5);
    assert_eq!(full.try_present(), Ok(&5));

    assert!(!empty.is_present());
    let violation = empty.try_present().unwrap_err();
    assert!(violation.is_absent());
    assert_eq!(
        violation,
        InvalidStateAccess::Absent { value: "u8" }
    );
}

#[test]
#[should_panic(expected = "absent optional")]
fn reading_an_absent_payload_is_fatal() {
    let empty: Option<u8> = None;
    let _ = empty.present();
}

#[test]
fn optional_coverage_lists_absent() {
    let set = handlers![on(|x: i32| x), absent(|| 0)];
    let report = coverage::<Option<i32>, _, _>(&set);
    assert_eq!(report.kind, ShapeKind::Optional);
    assert_eq!(report.alternatives.len(), 2);
    assert!(report.alternatives[1].ends_with("Absent"));
    assert!(!report.uses_fallback());
}
