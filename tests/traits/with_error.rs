use result_rail::traits::WithError;
use result_rail::{err, ok, Outcome};

#[test]
fn fmap_error_on_outcome_rewrites_only_errors() {
    let failed: Outcome<i32, u32> = err(404);
    assert!(failed.fmap_error(|code| format!("HTTP {code}")).contains_err(&"HTTP 404".to_string()));

    let fine: Outcome<i32, u32> = ok(1);
    assert!(fine.fmap_error(|code| code + 1).contains(&1));
}

#[test]
fn fmap_error_on_result_rewrites_only_errors() {
    let failed: Result<i32, u32> = Err(500);
    assert_eq!(failed.fmap_error(|code| code + 1), Err(501));

    let fine: Result<i32, u32> = Ok(2);
    assert_eq!(fine.fmap_error(|code| code + 1), Ok(2));
}

#[test]
fn to_outcome_is_identity_for_outcome() {
    let x: Outcome<i32, &str> = err("e");
    assert_eq!(x.to_outcome(), err("e"));
    assert!(Ok::<i32, &str>(42).to_outcome().contains(&42));
}

fn describe<C>(container: C) -> Outcome<C::Success, String>
where
    C: WithError<u16>,
{
    container.to_outcome().map_err(|code| format!("status {code}"))
}

#[test]
fn generic_code_accepts_either_container() {
    assert!(describe(err::<(), u16>(418)).contains_err(&"status 418".to_string()));
    assert!(describe(Ok::<i32, u16>(1)).contains(&1));
}
