use crate::support::panic_message;
use result_rail::maybe::UNWRAP_NONE_MESSAGE;
use result_rail::{ok, Maybe, Outcome};
use std::cell::Cell;

#[test]
fn some_and_none_predicates() {
    let some = Maybe::Some(1);
    let none: Maybe<i32> = Maybe::None;

    assert!(some.is_some());
    assert!(!some.is_none());
    assert!(none.is_none());
    assert!(some.contains(&1));
    assert!(!some.contains(&2));
    assert!(!none.contains(&1));
}

#[test]
fn unwrap_on_none_panics_with_fixed_diagnostic() {
    let message = panic_message(|| Maybe::<i32>::None.unwrap());
    assert_eq!(message, format!("panics with `{UNWRAP_NONE_MESSAGE}`"));
}

#[test]
fn expect_on_none_panics_with_the_message() {
    let message = panic_message(|| Maybe::<i32>::None.expect("config loaded"));
    assert_eq!(message, "panics with `config loaded`");
    assert_eq!(Maybe::Some(3).expect("config loaded"), 3);
}

#[test]
fn defaults_are_only_used_for_none() {
    let calls = Cell::new(0);
    let fallback = || {
        calls.set(calls.get() + 1);
        9
    };

    assert_eq!(Maybe::Some(1).unwrap_or(5), 1);
    assert_eq!(Maybe::<i32>::None.unwrap_or(5), 5);
    assert_eq!(Maybe::Some(1).unwrap_or_else(fallback), 1);
    assert_eq!(calls.get(), 0);
    assert_eq!(Maybe::<i32>::None.unwrap_or_else(fallback), 9);
    assert_eq!(calls.get(), 1);
}

#[test]
fn map_and_then_and_filter() {
    let doubled = Maybe::Some(4).map(|v| v * 2);
    assert!(doubled.contains(&8));

    let halved = Maybe::Some(4).and_then(|v| if v % 2 == 0 { Maybe::Some(v / 2) } else { Maybe::None });
    assert!(halved.contains(&2));

    assert!(Maybe::Some(3).filter(|v| *v > 5).is_none());
    assert!(Maybe::Some(7).filter(|v| *v > 5).contains(&7));
    assert!(Maybe::<i32>::None.map(|v| v + 1).is_none());
}

#[test]
fn ok_or_converts_back_into_an_outcome() {
    assert!(Maybe::Some(3).ok_or("missing").contains(&3));
    assert!(Maybe::<i32>::None.ok_or("missing").contains_err(&"missing"));

    let calls = Cell::new(0);
    let present: Outcome<i32, &str> = Maybe::Some(1).ok_or_else(|| {
        calls.set(calls.get() + 1);
        "missing"
    });
    assert!(present.contains(&1));
    assert_eq!(calls.get(), 0);
}

#[test]
fn projection_round_trips_through_ok_or() {
    let original: Outcome<i32, &str> = ok(2);
    let back = original.ok().ok_or("lost");
    assert_eq!(back, original);
}

#[test]
fn option_conversions_are_lossless() {
    let from_some: Maybe<i32> = Some(1).into();
    let from_none: Maybe<i32> = None::<i32>.into();
    assert_eq!(from_some, Maybe::Some(1));
    assert_eq!(from_none, Maybe::None);

    let back: Option<i32> = Maybe::Some(2).into();
    assert_eq!(back, Some(2));
    assert_eq!(Maybe::<i32>::None.into_option(), None);
    assert_eq!(Maybe::<i32>::default(), Maybe::None);
}

#[test]
fn transpose_inverts_outcome_transpose() {
    let inner: Maybe<Outcome<i32, &str>> = Maybe::Some(ok(5));
    let swapped = inner.transpose();
    assert!(swapped.contains(&Maybe::Some(5)));
    assert_eq!(swapped.transpose(), inner);

    let none: Maybe<Outcome<i32, &str>> = Maybe::None;
    assert!(none.transpose().contains(&Maybe::None));
}
