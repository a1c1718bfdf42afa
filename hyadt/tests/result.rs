use hyadt::prelude::*;

#[derive(Debug, Clone, PartialEq)]
struct ParseFailure {
    input: String,
}

fn parse(input: &str) -> Result<i64, ParseFailure> {
    input.trim().parse().map_err(|_| ParseFailure {
        input: input.to_owned(),
    })
}

#[test]
fn distinct_types_accept_plain_handlers() {
    let render = |value: Result<i64, ParseFailure>| {
        inspect(
            value,
            handlers![
                on(|n: i64| format!("number {n}")),
                on(|e: ParseFailure| format!("cannot parse {:?}", e.input)),
            ],
        )
    };
    assert_eq!(render(parse(" 12 ")), "number 12");
    assert_eq!(render(parse("twelve")), "cannot parse \"twelve\"");
}

#[test]
fn plain_error_handler_may_come_first() {
    let value: Result<u8, String> = Err(String::from("boom"));
    let len = inspect(value, handlers![on(|e: String| e.len()), on(|v: u8| usize::from(v))]);
    assert_eq!(len, 4);
}

#[test]
fn identical_types_are_told_apart_by_ok_and_err() {
    let classify = |value: Result<i32, i32>| {
        inspect(
            value,
            handlers![ok(|v: i32| format!("value {v}")), err(|e: i32| format!("error {e}"))],
        )
    };
    assert_eq!(classify(Ok(55)), "value 55");
    assert_eq!(classify(Err(55)), "error 55");
}

#[test]
fn wrapped_alternatives_can_be_taken_as_is() {
    let value: Result<i32, i32> = Err(7);
    let signed = inspect(
        value,
        handlers![
            on(|Success(v): Success<i32>| v),
            on(|Failure(e): Failure<i32>| -e),
        ],
    );
    assert_eq!(signed, -7);
}

#[test]
fn borrowed_result_keeps_the_value() {
    let value: Result<Vec<u8>, String> = Ok(vec![1, 2, 3]);
    let total = inspect(
        &value,
        handlers![
            on(|bytes: &Vec<u8>| bytes.iter().map(|&b| u32::from(b)).sum::<u32>()),
            on(|_: &String| 0),
        ],
    );
    assert_eq!(total, 6);
    assert!(value.is_ok());
}

#[test]
fn mutably_borrowed_result_with_identical_types() {
    let mut value: Result<String, String> = Err(String::from("bad"));
    inspect(
        &mut value,
        handlers![
            ok(|v: &mut String| v.push_str(" (ok)")),
            err(|e: &mut String| e.push_str(" (err)")),
        ],
    );
    assert_eq!(value, Err(String::from("bad (err)")));
}

#[test]
fn outcome_accessors() {
    let good: Result<u32, String> = Ok(1);
    let bad: Result<u32, String> = Err(String::from("nope"));

    assert!(good.is_success());
    assert_eq!(*good.success(), 1);
    assert!(good.try_failure().unwrap_err().is_not_failure());

    assert!(!bad.is_success());
    assert_eq!(bad.failure(), "nope");
    let violation = bad.try_success().unwrap_err();
    assert!(violation.is_not_success());
    assert!(violation.to_string().contains("String"));
}

#[test]
#[should_panic(expected = "holds a success value")]
fn reading_the_error_of_a_success_is_fatal() {
    let good: Result<u32, u32> = Ok(55);
    let _ = good.failure();
}

#[test]
#[should_panic(expected = "holds an error")]
fn reading_the_value_of_an_error_is_fatal() {
    let bad: Result<u32, u32> = Err(55);
    let _ = bad.success();
}

#[test]
fn requested_result_type_converts_each_branch() {
    let value: Result<u8, u16> = Err(300);
    let widened = inspect!(value => u64; ok(|v: u8| v), err(|e: u16| e));
    assert_eq!(widened, 300);
}
