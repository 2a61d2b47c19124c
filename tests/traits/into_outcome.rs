use result_rail::traits::{IntoMaybe, IntoOutcome};

#[test]
fn results_lift_into_outcomes() {
    assert!("17".parse::<u8>().into_outcome().contains(&17));
    assert!("x".parse::<u8>().into_outcome().is_err());
}

#[test]
fn options_lift_into_maybes() {
    assert!([3, 4].first().copied().into_maybe().contains(&3));
    assert!(Vec::<i32>::new().first().copied().into_maybe().is_none());
}

#[test]
fn into_outcome_or_supplies_the_error() {
    let missing: Option<i32> = None;
    assert!(missing.into_outcome_or("missing").contains_err(&"missing"));
    assert!(Some(1).into_outcome_or("missing").contains(&1));
}
