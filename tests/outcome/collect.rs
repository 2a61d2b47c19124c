use result_rail::{err, ok, Outcome};
use std::cell::Cell;

#[test]
fn collecting_all_ok_gathers_every_value() {
    let inputs: Vec<Outcome<i32, &str>> = vec![ok(1), ok(2), ok(3)];
    let collected: Outcome<Vec<i32>, &str> = inputs.into_iter().collect();
    assert!(collected.contains(&vec![1, 2, 3]));
}

#[test]
fn collecting_returns_the_first_error() {
    let inputs: Vec<Outcome<i32, &str>> = vec![ok(1), err("err1"), err("err2")];
    let collected: Outcome<Vec<i32>, &str> = inputs.into_iter().collect();
    assert!(collected.contains_err(&"err1"));
}

#[test]
fn collecting_stops_pulling_after_the_first_error() {
    let pulled = Cell::new(0);
    let source = [ok(1), err("stop"), ok(3), ok(4)].into_iter().inspect(|_| {
        pulled.set(pulled.get() + 1);
    });

    let collected: Outcome<Vec<i32>, &str> = source.collect();
    assert!(collected.is_err());
    assert_eq!(pulled.get(), 2);
}

#[test]
fn collecting_an_empty_iterator_is_ok() {
    let inputs: Vec<Outcome<i32, &str>> = Vec::new();
    let collected: Outcome<Vec<i32>, &str> = inputs.into_iter().collect();
    assert!(collected.contains(&Vec::new()));
}

#[test]
fn collecting_into_a_string() {
    let chars: Vec<Outcome<char, &str>> = vec![ok('o'), ok('k')];
    let joined: Outcome<String, &str> = chars.into_iter().collect();
    assert!(joined.contains(&"ok".to_string()));
}

#[test]
fn std_result_converts_both_ways() {
    let from_std: Outcome<i32, &str> = Ok::<i32, &str>(1).into();
    assert!(from_std.contains(&1));

    let back: Result<i32, &str> = err::<i32, &str>("e").into();
    assert_eq!(back, Err("e"));
}
