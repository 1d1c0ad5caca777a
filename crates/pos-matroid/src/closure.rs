use std::collections::VecDeque;

use pos_core::family::support;
use pos_core::{ErrorInfo, PosError, SetFamily};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::circuits::{
    find_minimality_violation, intersecting_pairs, uncovered_elimination, CircuitViolation,
};

/// Options controlling the closure fixed-point loop.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClosureOpts {
    /// Maximum number of repair insertions before the run is declared
    /// divergent. `None` derives the bound `2^|support|` from the input.
    #[serde(default)]
    pub max_insertions: Option<usize>,
}

/// Result of a closure run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClosureOutcome {
    /// Circuit set of the smallest matroid containing the input.
    pub circuits: SetFamily,
    /// Number of complements inserted while repairing.
    pub insertions: usize,
}

/// Computes the circuit set of the smallest matroid containing `circuits`.
///
/// The input must be minimally dependent.
pub fn matroid_closure(circuits: &SetFamily) -> Result<SetFamily, PosError> {
    matroid_closure_with(circuits, &ClosureOpts::default()).map(|outcome| outcome.circuits)
}

/// [`matroid_closure`] with explicit options and repair statistics.
///
/// Every insertion adds a set outside the up-closure of the family and
/// keeps all previous members inside it, so the up-closure grows strictly
/// within the power set of the support. That caps the number of insertions
/// at `2^|support|`.
pub fn matroid_closure_with(
    circuits: &SetFamily,
    opts: &ClosureOpts,
) -> Result<ClosureOutcome, PosError> {
    if let Some(violation) = find_minimality_violation(circuits) {
        let detail = match &violation {
            CircuitViolation::EmptyCircuit => "empty circuit".to_string(),
            other => format!("{other:?}"),
        };
        return Err(PosError::Closure(
            ErrorInfo::new(
                "not-minimally-dependent",
                "closure input must be minimally dependent",
            )
            .with_context("violation", detail)
            .with_family("family", circuits),
        ));
    }

    let support_size = support(circuits).len();
    let bound = opts.max_insertions.unwrap_or_else(|| {
        u32::try_from(support_size)
            .ok()
            .and_then(|bits| 1usize.checked_shl(bits))
            .unwrap_or(usize::MAX)
    });

    let mut family = circuits.clone();
    let mut insertions = 0usize;
    let mut pending: VecDeque<_> = intersecting_pairs(&family).into();

    while let Some((first, second)) = pending.pop_front() {
        let Some((element, complement)) = uncovered_elimination(&first, &second, &family) else {
            continue;
        };
        if insertions >= bound {
            return Err(PosError::Closure(
                ErrorInfo::new("closure-diverged", "closure exceeded its insertion bound")
                    .with_context("bound", bound.to_string())
                    .with_family("family", &family),
            ));
        }
        trace!(?first, ?second, element, ?complement, "inserting eliminated complement");
        family.retain(|member| !complement.is_subset(member));
        family.insert(complement);
        insertions += 1;
        pending = intersecting_pairs(&family).into();
    }

    debug!(insertions, circuits = family.len(), "closure reached fixed point");
    Ok(ClosureOutcome {
        circuits: family,
        insertions,
    })
}
