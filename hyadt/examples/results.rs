//! Inspect results, including one whose success and error types coincide.
use hyadt::prelude::*;

fn parse(input: &str) -> Result<u32, String> {
    input
        .parse()
        .map_err(|error| format!("`{input}`: {error}"))
}

fn main() {
    for input in ["12", "x"] {
        let line = inspect(
            parse(input),
            handlers![
                on(|value: u32| format!("parsed {value}")),
                on(|error: String| format!("rejected {error}")),
            ],
        );
        println!("{line}");
    }

    // Same type on both sides: plain handlers would be ambiguous, `ok` and `err` are not.
    let exit: Result<i32, i32> = Ok(55);
    let code = inspect(exit, handlers![ok(|v: i32| v), err(|e: i32| -e)]);
    println!("exit code {code}");

    match exit.try_failure() {
        Ok(error) => println!("error {error}"),
        Err(violation) => println!("{violation}"),
    }
}
