//! Conversions between the bases and circuits descriptions of a matroid.

use pos_core::family::{family_in_range, ground_set, k_subsets, subsets_by_size};
use pos_core::{ElementSet, ErrorInfo, PosError, SetFamily};

use crate::bases::is_matroid_bases;
use crate::circuits::is_matroid_circuit;

fn require_in_range(family: &SetFamily, n: usize) -> Result<(), PosError> {
    if family_in_range(family, n) {
        return Ok(());
    }
    Err(PosError::Matroid(
        ErrorInfo::new("out-of-range", "family contains elements outside the ground set")
            .with_context("n", n.to_string())
            .with_family("family", family),
    ))
}

/// Returns whether `set` contains no circuit.
pub fn is_independent(set: &ElementSet, circuits: &SetFamily) -> bool {
    !circuits.iter().any(|circuit| circuit.is_subset(set))
}

/// Bases of the matroid on `{1, ..., n}` with the given circuits: the
/// largest subsets containing no circuit.
pub fn circuits_to_bases(circuits: &SetFamily, n: usize) -> Result<SetFamily, PosError> {
    require_in_range(circuits, n)?;
    if !is_matroid_circuit(circuits) {
        return Err(PosError::Matroid(
            ErrorInfo::new("invalid-circuits", "family is not the circuit set of a matroid")
                .with_family("family", circuits)
                .with_hint("run matroid_closure first"),
        ));
    }
    for rank in (0..=n).rev() {
        let bases: SetFamily = k_subsets(n, rank)
            .filter(|candidate| is_independent(candidate, circuits))
            .collect();
        if !bases.is_empty() {
            return Ok(bases);
        }
    }
    // The empty set is independent whenever no circuit is empty.
    Ok(SetFamily::from([ElementSet::new()]))
}

/// Circuits of the matroid with the given bases: the minimal subsets of
/// `{1, ..., n}` not contained in any basis.
pub fn bases_to_circuits(bases: &SetFamily, n: usize) -> Result<SetFamily, PosError> {
    require_in_range(bases, n)?;
    if bases.is_empty() || !is_matroid_bases(bases) {
        return Err(PosError::Matroid(
            ErrorInfo::new("invalid-matroid", "family is not a non-empty bases family")
                .with_family("family", bases),
        ));
    }
    let independent = |set: &ElementSet| bases.iter().any(|basis| set.is_subset(basis));
    let ground = ground_set(n).to_vec();
    let circuits = subsets_by_size(&ground)
        .filter(|set| !independent(set))
        .filter(|set| set.iter().all(|&element| independent(&set.without(element))))
        .collect();
    Ok(circuits)
}

/// Rank of a matroid given by its bases; `None` for the empty family.
pub fn rank_of(bases: &SetFamily) -> Option<usize> {
    bases.iter().next().map(ElementSet::len)
}
