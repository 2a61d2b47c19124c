use result_rail::{err, ok, Outcome};
use std::cell::Cell;

fn sq(x: i32) -> Outcome<i32, i32> {
    ok(x * x)
}

fn error(x: i32) -> Outcome<i32, i32> {
    err(x)
}

#[test]
fn and_with_ok_given_err_returns_err() {
    let x: Outcome<i32, &str> = ok(2);
    let y: Outcome<&str, &str> = err("late error");
    assert!(x.and(y).contains_err(&"late error"));
}

#[test]
fn and_with_err_given_ok_returns_err() {
    let x: Outcome<&str, &str> = err("early error");
    let y: Outcome<&str, &str> = ok("foo");
    assert!(x.and(y).contains_err(&"early error"));
}

#[test]
fn and_with_err_given_err_returns_first_err() {
    let x: Outcome<&str, &str> = err("not a 2");
    let y: Outcome<&str, &str> = err("late error");
    assert!(x.and(y).contains_err(&"not a 2"));
}

#[test]
fn and_with_ok_given_ok_returns_second_ok() {
    let x: Outcome<i32, &str> = ok(2);
    let y: Outcome<&str, &str> = ok("other value");
    assert!(x.and(y).contains(&"other value"));
}

#[test]
fn and_then_binds_and_short_circuits() {
    assert!(ok(2).and_then(sq).and_then(sq).contains(&16));
    assert!(ok(2).and_then(sq).and_then(error).contains_err(&4));
    assert!(ok(2).and_then(error).and_then(sq).contains_err(&2));
    assert!(err(3).and_then(sq).and_then(sq).contains_err(&3));
}

#[test]
fn and_then_never_calls_the_function_on_err() {
    let calls = Cell::new(0);
    let result = err::<i32, i32>(3).and_then(|x| {
        calls.set(calls.get() + 1);
        sq(x)
    });

    assert!(result.contains_err(&3));
    assert_eq!(calls.get(), 0);
}

#[test]
fn or_with_ok_given_err_returns_ok() {
    let x: Outcome<i32, &str> = ok(2);
    let y: Outcome<i32, &str> = err("late error");
    assert!(x.or(y).contains(&2));
}

#[test]
fn or_with_err_given_ok_returns_ok() {
    let x: Outcome<&str, &str> = err("early error");
    let y: Outcome<&str, &str> = ok("foo");
    assert!(x.or(y).contains(&"foo"));
}

#[test]
fn or_with_err_given_err_returns_second_err() {
    let x: Outcome<&str, &str> = err("not a 2");
    let y: Outcome<&str, &str> = err("late error");
    assert!(x.or(y).contains_err(&"late error"));
}

#[test]
fn or_with_ok_given_ok_returns_first_ok() {
    let x: Outcome<i32, &str> = ok(2);
    let y: Outcome<i32, &str> = ok(100);
    assert!(x.or(y).contains(&2));
}

#[test]
fn or_else_recovers_and_short_circuits() {
    assert!(ok(2).or_else(sq).or_else(sq).contains(&2));
    assert!(ok(2).or_else(error).or_else(sq).contains(&2));
    assert!(err(3).or_else(sq).or_else(error).contains(&9));
    assert!(err(3).or_else(error).or_else(error).contains_err(&3));
}

#[test]
fn or_else_never_calls_the_function_on_ok() {
    let calls = Cell::new(0);
    let result = ok::<i32, i32>(2).or_else(|e| {
        calls.set(calls.get() + 1);
        error(e)
    });

    assert!(result.contains(&2));
    assert_eq!(calls.get(), 0);
}

#[test]
fn or_else_can_change_the_error_type() {
    let x: Outcome<i32, i32> = err(404);
    let described: Outcome<i32, String> = x.or_else(|code| err(format!("HTTP {code}")));
    assert!(described.contains_err(&"HTTP 404".to_string()));
}
