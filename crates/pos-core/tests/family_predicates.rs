use pos_core::family::{
    family_in_range, ground_set, k_subsets, subsets_by_size, support, uniform_rank,
};
use pos_core::{family_from, is_in_range, is_non_empty, is_uniform_size, ElementSet, SetFamily};

#[test]
fn emptiness() {
    assert!(!is_non_empty(&SetFamily::new()));
    assert!(is_non_empty(&family_from([vec![]])));
}

#[test]
fn uniform_size_rejects_empty_family() {
    let err = is_uniform_size(&SetFamily::new()).unwrap_err();
    assert_eq!(err.code(), "empty-family");
}

#[test]
fn uniform_size_detects_mixed_members() {
    let uniform = family_from([vec![1, 2], vec![2, 3]]);
    let mixed = family_from([vec![1, 2], vec![3]]);
    assert!(is_uniform_size(&uniform).unwrap());
    assert!(!is_uniform_size(&mixed).unwrap());
    assert_eq!(uniform_rank(&uniform), Some(2));
    assert_eq!(uniform_rank(&mixed), None);
}

#[test]
fn range_checks() {
    assert!(is_in_range(&ElementSet::from([1, 4]), 4));
    assert!(!is_in_range(&ElementSet::from([0, 2]), 4));
    assert!(!is_in_range(&ElementSet::from([5]), 4));
    assert!(is_in_range(&ElementSet::new(), 0));
    assert!(family_in_range(&family_from([vec![1], vec![2, 3]]), 3));
    assert!(!family_in_range(&family_from([vec![1], vec![2, 7]]), 3));
}

#[test]
fn subset_generators() {
    let pairs: Vec<ElementSet> = k_subsets(4, 2).collect();
    assert_eq!(pairs.len(), 6);
    assert_eq!(pairs[0], ElementSet::from([1, 2]));
    assert_eq!(pairs[5], ElementSet::from([3, 4]));
    assert_eq!(k_subsets(3, 0).collect::<Vec<_>>(), vec![ElementSet::new()]);
    assert_eq!(k_subsets(2, 3).count(), 0);

    let all: Vec<ElementSet> = subsets_by_size(&[1, 2, 3]).collect();
    assert_eq!(all.len(), 8);
    assert!(all[0].is_empty());
    assert_eq!(all[7], ground_set(3));
}

#[test]
fn support_is_union_of_members() {
    let family = family_from([vec![1, 2], vec![2, 5]]);
    assert_eq!(support(&family), ElementSet::from([1, 2, 5]));
}

#[test]
fn set_algebra_returns_new_values() {
    let a = ElementSet::from([1, 2, 3]);
    let b = ElementSet::from([3, 4]);
    assert_eq!(a.union(&b), ElementSet::from([1, 2, 3, 4]));
    assert_eq!(a.intersection(&b), ElementSet::from([3]));
    assert_eq!(a.difference(&b), ElementSet::from([1, 2]));
    assert_eq!(a.exchange(1, 4), ElementSet::from([2, 3, 4]));
    assert_eq!(a.without(2).with(9), ElementSet::from([1, 3, 9]));
    assert_eq!(a, ElementSet::from([1, 2, 3]));
    assert_eq!(format!("{:?}", b), "{3, 4}");
}
