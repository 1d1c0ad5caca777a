use pos_core::{family_from, ElementSet, SetFamily};
use pos_matroid::{
    find_exchange_violation, has_basis_exchange_property, has_exchange, is_matroid_bases,
    ExchangeViolation,
};

#[test]
fn all_pairs_of_three_elements_exchange() {
    let family = family_from([vec![1, 2], vec![1, 3], vec![2, 3]]);
    assert!(has_basis_exchange_property(&family));
    assert!(is_matroid_bases(&family));
}

#[test]
fn disjoint_pair_fails() {
    let family = family_from([vec![1, 2], vec![3, 4]]);
    assert!(!is_matroid_bases(&family));
    let violation = find_exchange_violation(&family).expect("violation");
    assert_eq!(violation.from, ElementSet::from([1, 2]));
    assert_eq!(violation.towards, ElementSet::from([3, 4]));
    assert_eq!(violation.element, 1);
}

#[test]
fn one_exchanging_pair_does_not_rescue_the_family() {
    // {1,2} -> {3,4} can reach {1,3} by swapping 2, but dropping 1 has no partner.
    let family = family_from([vec![1, 2], vec![1, 3], vec![3, 4]]);
    let a = ElementSet::from([1, 2]);
    let b = ElementSet::from([1, 3]);
    let c = ElementSet::from([3, 4]);
    assert!(has_exchange(&a, &b, &family).unwrap());
    assert!(!has_exchange(&a, &c, &family).unwrap());
    assert!(!has_basis_exchange_property(&family));
    assert_eq!(
        find_exchange_violation(&family),
        Some(ExchangeViolation {
            from: a,
            towards: c,
            element: 1,
        })
    );
}

#[test]
fn exchange_is_checked_per_removed_element() {
    // Aggregating exchanges over every removed element would accept this
    // family through {1,3}; removing 1 from {1,2} still has no partner.
    let family = family_from([vec![1, 2], vec![1, 3], vec![3, 4]]);
    let from = ElementSet::from([1, 2]);
    let towards = ElementSet::from([3, 4]);
    let aggregated = [1, 2]
        .iter()
        .flat_map(|&a| [3, 4].map(|b| from.exchange(a, b)))
        .any(|candidate| family.contains(&candidate));
    assert!(aggregated);
    assert!(!has_exchange(&from, &towards, &family).unwrap());
}

#[test]
fn small_families_pass_vacuously() {
    assert!(is_matroid_bases(&SetFamily::new()));
    assert!(is_matroid_bases(&family_from([vec![2, 4]])));
    assert!(is_matroid_bases(&family_from([Vec::new()])));
}

#[test]
fn mixed_sizes_are_rejected() {
    let family = family_from([vec![1, 2], vec![3]]);
    assert!(!is_matroid_bases(&family));
}

#[test]
fn missing_members_are_usage_errors() {
    let family = family_from([vec![1, 2], vec![1, 3]]);
    let outsider = ElementSet::from([2, 3]);
    let err = has_exchange(&outsider, &ElementSet::from([1, 2]), &family).unwrap_err();
    assert_eq!(err.code(), "set-not-in-family");
    let err = has_exchange(&ElementSet::from([1, 2]), &outsider, &family).unwrap_err();
    assert_eq!(err.code(), "set-not-in-family");
}
