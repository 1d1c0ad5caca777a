//! Matroid to necklace extraction and the positroid envelope.

use pos_core::family::{family_in_range, k_subsets};
use pos_core::{gale_leq, min_under_offset, ElementSet, ErrorInfo, PosError, SetFamily};
use pos_matroid::{circuits_to_bases, is_matroid_bases, rank_of};
use tracing::{debug, trace};

use crate::necklace::GrassmannNecklace;

/// Computes the Grassmann necklace of a matroid given by its bases: entry
/// `i` is the `<_i`-lexicographically minimal basis.
///
/// The empty family has no bases to pick from and maps to `n` empty
/// entries of rank zero.
pub fn matroid_to_grassmann_necklace(
    matroid: &SetFamily,
    n: usize,
) -> Result<GrassmannNecklace, PosError> {
    if !family_in_range(matroid, n) {
        return Err(PosError::Necklace(
            ErrorInfo::new("out-of-range", "matroid uses elements outside the ground set")
                .with_context("n", n.to_string())
                .with_family("family", matroid),
        ));
    }
    if !is_matroid_bases(matroid) {
        return Err(PosError::Necklace(
            ErrorInfo::new("invalid-matroid", "family violates basis exchange")
                .with_family("family", matroid)
                .with_hint("validate with is_matroid_bases before extracting a necklace"),
        ));
    }
    let Some(k) = rank_of(matroid) else {
        return Ok(GrassmannNecklace::from_parts(n, 0, vec![ElementSet::new(); n]));
    };
    let mut entries = Vec::with_capacity(n);
    for i in 1..=n {
        let minimal = min_under_offset(matroid, n, i)?.cloned().ok_or_else(|| {
            PosError::Necklace(ErrorInfo::new("invalid-matroid", "matroid has no bases"))
        })?;
        trace!(i, entry = ?minimal, "necklace entry");
        entries.push(minimal);
    }
    Ok(GrassmannNecklace::from_parts(n, k, entries))
}

/// Grassmann necklace of the matroid whose circuits are `circuits`.
pub fn circuits_to_grassmann_necklace(
    circuits: &SetFamily,
    n: usize,
) -> Result<GrassmannNecklace, PosError> {
    let bases = circuits_to_bases(circuits, n)?;
    matroid_to_grassmann_necklace(&bases, n)
}

fn above_every_entry(candidate: &ElementSet, necklace: &GrassmannNecklace) -> bool {
    let n = necklace.n();
    necklace
        .entries()
        .iter()
        .enumerate()
        .all(|(idx, entry)| matches!(gale_leq(entry, candidate, n, idx + 1), Ok(true)))
}

impl GrassmannNecklace {
    /// Bases of the positroid of this necklace: the `k`-subsets lying above
    /// `I_i` in the Gale order `<_i` for every `i`.
    pub fn positroid_bases(&self) -> SetFamily {
        let bases: SetFamily = k_subsets(self.n(), self.k())
            .filter(|candidate| above_every_entry(candidate, self))
            .collect();
        debug!(n = self.n(), k = self.k(), bases = bases.len(), "positroid of necklace");
        bases
    }
}

/// Validates `entries` as a Grassmann necklace of type `(k, n)` and returns
/// the bases of its positroid.
pub fn necklace_to_positroid_bases(
    entries: &[ElementSet],
    n: usize,
    k: usize,
) -> Result<SetFamily, PosError> {
    let necklace = GrassmannNecklace::new(n, k, entries.to_vec())?;
    Ok(necklace.positroid_bases())
}

/// Returns whether a matroid equals the positroid of its own Grassmann
/// necklace.
///
/// The empty family is not a positroid.
pub fn is_positroid(matroid: &SetFamily, n: usize) -> Result<bool, PosError> {
    if matroid.is_empty() {
        return Ok(false);
    }
    let necklace = matroid_to_grassmann_necklace(matroid, n)?;
    Ok(necklace.positroid_bases() == *matroid)
}
