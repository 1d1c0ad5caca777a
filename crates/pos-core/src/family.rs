//! Primitive predicates on families of finite sets.

use itertools::Itertools;

use crate::errors::{ErrorInfo, PosError};
use crate::set::{Element, ElementSet, SetFamily};

/// Returns whether the family has at least one member.
pub fn is_non_empty(family: &SetFamily) -> bool {
    !family.is_empty()
}

/// Returns whether every member of the family has the same cardinality.
///
/// The empty family has no cardinality to agree on and is rejected; guard
/// with [`is_non_empty`] first.
pub fn is_uniform_size(family: &SetFamily) -> Result<bool, PosError> {
    let mut sizes = family.iter().map(ElementSet::len);
    let Some(first) = sizes.next() else {
        return Err(PosError::Family(
            ErrorInfo::new("empty-family", "uniform size is undefined for an empty family")
                .with_hint("check is_non_empty before asking for a common size"),
        ));
    };
    Ok(sizes.all(|size| size == first))
}

/// Common cardinality of a non-empty uniform family.
pub fn uniform_rank(family: &SetFamily) -> Option<usize> {
    match is_uniform_size(family) {
        Ok(true) => family.iter().next().map(ElementSet::len),
        _ => None,
    }
}

/// Returns whether every element of `set` lies in `[1, n]`.
pub fn is_in_range(set: &ElementSet, n: usize) -> bool {
    set.iter().all(|&element| (1..=n).contains(&element))
}

/// Returns whether every member of `family` lies in `[1, n]`.
pub fn family_in_range(family: &SetFamily, n: usize) -> bool {
    family.iter().all(|set| is_in_range(set, n))
}

/// The ground set `{1, ..., n}`.
pub fn ground_set(n: usize) -> ElementSet {
    (1..=n).collect()
}

/// Union of all members of the family.
pub fn support(family: &SetFamily) -> ElementSet {
    family.iter().flatten().copied().collect()
}

/// All `k`-subsets of `{1, ..., n}` in lexicographic order.
///
/// For `k > n` there are none; for `k == 0` the single empty set.
pub fn k_subsets(n: usize, k: usize) -> impl Iterator<Item = ElementSet> + Clone {
    (1..=n)
        .combinations(k)
        .map(|combo| combo.into_iter().collect::<ElementSet>())
}

/// Every subset of `elements`, smallest cardinality first.
pub fn subsets_by_size(elements: &[Element]) -> impl Iterator<Item = ElementSet> + '_ {
    (0..=elements.len()).flat_map(move |size| {
        elements
            .iter()
            .copied()
            .combinations(size)
            .map(|combo| combo.into_iter().collect::<ElementSet>())
    })
}

/// Members shown by [`describe_family`] before the rest is summarised.
const DESCRIBED_MEMBERS: usize = 12;

/// Renders a set as `{1,2,3}`.
pub fn describe_set(set: &ElementSet) -> String {
    format!("{{{}}}", set.iter().join(","))
}

/// Renders a family into a short context string for error payloads, e.g.
/// `{1,2} {1,3} {2,3}`. Families past a dozen members end in `(+N more)`.
pub fn describe_family(family: &SetFamily) -> String {
    if family.is_empty() {
        return "(empty)".to_string();
    }
    let shown = family.iter().take(DESCRIBED_MEMBERS).map(describe_set).join(" ");
    match family.len().checked_sub(DESCRIBED_MEMBERS) {
        Some(rest) if rest > 0 => format!("{shown} (+{rest} more)"),
        _ => shown,
    }
}
