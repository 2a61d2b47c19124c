use result_rail::{err, ok, Outcome};

#[test]
fn iter_yields_the_success_value_once() {
    let x: Outcome<i32, &str> = ok(5);
    let mut it = x.iter();
    assert_eq!(it.len(), 1);
    assert_eq!(it.next(), Some(&5));
    assert_eq!(it.next(), None);
    assert_eq!(it.next(), None);
}

#[test]
fn iter_over_err_is_empty() {
    let x: Outcome<i32, &str> = err("nothing");
    assert_eq!(x.iter().count(), 0);
    assert_eq!(x.iter().size_hint(), (0, Some(0)));
}

#[test]
fn iter_mut_edits_the_success_value() {
    let mut x: Outcome<i32, &str> = ok(3);
    if let Some(value) = x.iter_mut().next() {
        *value = 4;
    }
    assert!(x.contains(&4));

    for value in &mut x {
        *value *= 10;
    }
    assert!(x.contains(&40));
}

#[test]
fn into_iter_moves_the_success_value_out() {
    let x: Outcome<String, &str> = ok("owned".to_string());
    let collected: Vec<String> = x.into_iter().collect();
    assert_eq!(collected, vec!["owned".to_string()]);

    let y: Outcome<String, &str> = err("e");
    assert_eq!(y.into_iter().count(), 0);
}

#[test]
fn borrowed_outcomes_chain_into_flat_iteration() {
    let items: Vec<Outcome<i32, &str>> = vec![ok(1), err("skip"), ok(3)];
    let total: i32 = items.iter().flat_map(|item| item.iter()).sum();
    assert_eq!(total, 4);

    let mut seen = Vec::new();
    for value in &items[0] {
        seen.push(*value);
    }
    assert_eq!(seen, vec![1]);
}
