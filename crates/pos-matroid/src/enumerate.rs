use itertools::Itertools;
use pos_core::family::k_subsets;
use pos_core::{ElementSet, ErrorInfo, PosError, SetFamily};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::bases::is_matroid_bases;

/// Options controlling exhaustive matroid enumeration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumerationOpts {
    /// Evaluate bases-count slices on the rayon thread pool.
    pub parallel: bool,
    /// Smallest number of bases to enumerate.
    pub min_bases: usize,
    /// Largest number of bases to enumerate; `None` means `C(n, k)`.
    #[serde(default)]
    pub max_bases: Option<usize>,
}

impl Default for EnumerationOpts {
    fn default() -> Self {
        Self {
            parallel: false,
            min_bases: 1,
            max_bases: None,
        }
    }
}

fn check_rank(n: usize, k: usize) -> Result<(), PosError> {
    if k > n {
        return Err(PosError::Matroid(
            ErrorInfo::new("rank-exceeds-ground-set", "rank cannot exceed the ground set size")
                .with_context("n", n.to_string())
                .with_context("k", k.to_string()),
        ));
    }
    Ok(())
}

fn basis_candidates(n: usize, k: usize) -> Vec<ElementSet> {
    k_subsets(n, k).collect()
}

fn slice_of(candidates: &[ElementSet], num: usize) -> Vec<SetFamily> {
    candidates
        .iter()
        .cloned()
        .combinations(num)
        .map(|combo| combo.into_iter().collect::<SetFamily>())
        .filter(is_matroid_bases)
        .collect()
}

/// All matroids of rank `k` on `{1, ..., n}` with exactly `num` bases.
///
/// `num == 0` yields the rank-zero matroid whose single basis is the empty
/// set, regardless of `k`.
pub fn generate_matroids_slice(n: usize, k: usize, num: usize) -> Result<Vec<SetFamily>, PosError> {
    check_rank(n, k)?;
    if num == 0 {
        return Ok(vec![SetFamily::from([ElementSet::new()])]);
    }
    let candidates = basis_candidates(n, k);
    if num > candidates.len() {
        return Err(PosError::Matroid(
            ErrorInfo::new("slice-too-large", "number of bases exceeds C(n, k)")
                .with_context("num", num.to_string())
                .with_context("available", candidates.len().to_string()),
        ));
    }
    let matroids = slice_of(&candidates, num);
    debug!(n, k, num, found = matroids.len(), "enumerated matroid slice");
    Ok(matroids)
}

/// Lazily enumerates every matroid of rank `k` on `{1, ..., n}` as a bases
/// family, ordered by number of bases and then lexicographically.
pub fn generate_matroids(
    n: usize,
    k: usize,
) -> Result<impl Iterator<Item = SetFamily>, PosError> {
    check_rank(n, k)?;
    let candidates = basis_candidates(n, k);
    let total = candidates.len();
    Ok((1..=total)
        .flat_map(move |num| candidates.clone().into_iter().combinations(num))
        .map(|combo| combo.into_iter().collect::<SetFamily>())
        .filter(is_matroid_bases))
}

/// Eager enumeration with each bases-count slice evaluated on the rayon
/// pool. The output order matches [`generate_matroids`].
pub fn par_generate_matroids(n: usize, k: usize) -> Result<Vec<SetFamily>, PosError> {
    enumerate_matroids(
        n,
        k,
        &EnumerationOpts {
            parallel: true,
            ..EnumerationOpts::default()
        },
    )
}

/// Eager enumeration restricted to the slices selected by `opts`.
pub fn enumerate_matroids(
    n: usize,
    k: usize,
    opts: &EnumerationOpts,
) -> Result<Vec<SetFamily>, PosError> {
    check_rank(n, k)?;
    let candidates = basis_candidates(n, k);
    let upper = opts
        .max_bases
        .map_or(candidates.len(), |cap| cap.min(candidates.len()));
    let lower = opts.min_bases.max(1);
    if lower > upper {
        return Ok(Vec::new());
    }
    let slices: Vec<Vec<SetFamily>> = if opts.parallel {
        (lower..=upper)
            .into_par_iter()
            .map(|num| slice_of(&candidates, num))
            .collect()
    } else {
        (lower..=upper).map(|num| slice_of(&candidates, num)).collect()
    };
    let matroids: Vec<SetFamily> = slices.into_iter().flatten().collect();
    debug!(n, k, lower, upper, found = matroids.len(), "enumerated matroids");
    Ok(matroids)
}
