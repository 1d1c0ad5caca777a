use itertools::Itertools;
use pos_core::{Element, ElementSet, SetFamily};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// Reason a candidate circuit family fails the circuit axioms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CircuitViolation {
    /// The family contains the empty set.
    EmptyCircuit,
    /// `smaller` is a proper subset of `larger`.
    NotMinimal {
        /// Member contained in `larger`.
        smaller: ElementSet,
        /// Member containing `smaller`.
        larger: ElementSet,
    },
    /// `(first ∪ second) − element` contains no member of the family.
    Elimination {
        /// First circuit of the pair.
        first: ElementSet,
        /// Second circuit of the pair.
        second: ElementSet,
        /// Shared element that cannot be eliminated.
        element: Element,
    },
}

/// Finds an empty member or a member contained in another member.
pub fn find_minimality_violation(family: &SetFamily) -> Option<CircuitViolation> {
    if family.iter().any(ElementSet::is_empty) {
        debug!("circuit family contains the empty set");
        return Some(CircuitViolation::EmptyCircuit);
    }
    for (left, right) in family.iter().tuple_combinations() {
        let pair = if left.is_subset(right) {
            Some((left, right))
        } else if right.is_subset(left) {
            Some((right, left))
        } else {
            None
        };
        if let Some((smaller, larger)) = pair {
            trace!(?smaller, ?larger, "circuit family is not minimal");
            return Some(CircuitViolation::NotMinimal {
                smaller: smaller.clone(),
                larger: larger.clone(),
            });
        }
    }
    None
}

/// Returns the first shared element of `first` and `second` whose
/// elimination `(first ∪ second) − e` contains no member of `family`,
/// together with that complement.
pub(crate) fn uncovered_elimination(
    first: &ElementSet,
    second: &ElementSet,
    family: &SetFamily,
) -> Option<(Element, ElementSet)> {
    let union = first.union(second);
    first.intersection(second).into_iter().find_map(|element| {
        let complement = union.without(element);
        let covered = family.iter().any(|member| member.is_subset(&complement));
        (!covered).then_some((element, complement))
    })
}

/// Pairs of distinct members that share at least one element.
pub(crate) fn intersecting_pairs(family: &SetFamily) -> Vec<(ElementSet, ElementSet)> {
    family
        .iter()
        .tuple_combinations()
        .filter(|(left, right)| !left.is_disjoint(right))
        .map(|(left, right)| (left.clone(), right.clone()))
        .collect()
}

/// Finds a pair of intersecting circuits violating circuit elimination.
pub fn find_elimination_violation(family: &SetFamily) -> Option<CircuitViolation> {
    for (first, second) in family.iter().tuple_combinations() {
        if let Some((element, _)) = uncovered_elimination(first, second, family) {
            trace!(?first, ?second, element, "circuit elimination fails");
            return Some(CircuitViolation::Elimination {
                first: first.clone(),
                second: second.clone(),
                element,
            });
        }
    }
    None
}

/// Runs both circuit checks, minimality first.
pub fn find_circuit_violation(family: &SetFamily) -> Option<CircuitViolation> {
    find_minimality_violation(family).or_else(|| find_elimination_violation(family))
}

/// No empty member and no member contained in another.
pub fn is_minimally_dependent(family: &SetFamily) -> bool {
    find_minimality_violation(family).is_none()
}

/// Circuit elimination holds for every intersecting pair.
pub fn has_circuit_elimination(family: &SetFamily) -> bool {
    find_elimination_violation(family).is_none()
}

/// Returns whether `family` is the circuit set of a matroid.
pub fn is_matroid_circuit(family: &SetFamily) -> bool {
    find_circuit_violation(family).is_none()
}
