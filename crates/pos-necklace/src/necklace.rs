use pos_core::family::is_in_range;
use pos_core::{ElementSet, ErrorInfo, PosError};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Grassmann necklace of type `(k, n)`: `n` sets of size `k`, where entry
/// `i` (1-based) is the `<_i`-minimal basis of a matroid.
///
/// Values are validated on construction and on deserialisation.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawNecklace")]
pub struct GrassmannNecklace {
    n: usize,
    k: usize,
    entries: Vec<ElementSet>,
}

#[derive(Deserialize)]
struct RawNecklace {
    n: usize,
    k: usize,
    entries: Vec<ElementSet>,
}

impl TryFrom<RawNecklace> for GrassmannNecklace {
    type Error = PosError;

    fn try_from(raw: RawNecklace) -> Result<Self, Self::Error> {
        GrassmannNecklace::new(raw.n, raw.k, raw.entries)
    }
}

/// Describes the first structural defect of `entries`, if any.
fn necklace_defect(entries: &[ElementSet], n: usize, k: usize) -> Option<String> {
    if k > n {
        return Some(format!("rank {k} exceeds ground set size {n}"));
    }
    if entries.len() != n {
        return Some(format!("expected {n} entries, found {}", entries.len()));
    }
    for (idx, entry) in entries.iter().enumerate() {
        if entry.len() != k {
            return Some(format!("entry {} has size {}, expected {k}", idx + 1, entry.len()));
        }
        if !is_in_range(entry, n) {
            return Some(format!("entry {} leaves the ground set", idx + 1));
        }
    }
    for (idx, entry) in entries.iter().enumerate() {
        let i = idx + 1;
        let next = &entries[i % n];
        let consistent = if entry.contains(i) {
            entry.without(i).is_subset(next)
        } else {
            entry == next
        };
        if !consistent {
            return Some(format!("entries {i} and {} are not compatible", i % n + 1));
        }
    }
    None
}

/// Returns whether `entries` is a Grassmann necklace of type `(k, n)`.
///
/// Besides length, size and range, consecutive entries must satisfy
/// `I_i − {i} ⊆ I_{i+1}` when `i ∈ I_i` and `I_i = I_{i+1}` otherwise, with
/// `I_{n+1} = I_1`.
pub fn is_grassmann_necklace(entries: &[ElementSet], n: usize, k: usize) -> bool {
    match necklace_defect(entries, n, k) {
        Some(defect) => {
            debug!(n, k, %defect, "not a Grassmann necklace");
            false
        }
        None => true,
    }
}

impl GrassmannNecklace {
    /// Validates and wraps a sequence of necklace entries.
    pub fn new(n: usize, k: usize, entries: Vec<ElementSet>) -> Result<Self, PosError> {
        if let Some(defect) = necklace_defect(&entries, n, k) {
            return Err(PosError::Necklace(
                ErrorInfo::new("invalid-necklace", defect)
                    .with_context("n", n.to_string())
                    .with_context("k", k.to_string()),
            ));
        }
        Ok(Self { n, k, entries })
    }

    pub(crate) fn from_parts(n: usize, k: usize, entries: Vec<ElementSet>) -> Self {
        debug_assert!(necklace_defect(&entries, n, k).is_none());
        Self { n, k, entries }
    }

    /// Size of the ground set.
    pub fn n(&self) -> usize {
        self.n
    }

    /// Common size of the entries.
    pub fn k(&self) -> usize {
        self.k
    }

    /// Entries in order `I_1, ..., I_n`.
    pub fn entries(&self) -> &[ElementSet] {
        &self.entries
    }

    /// Entry `I_i` for a 1-based index, wrapping cyclically past `n`.
    pub fn entry(&self, i: usize) -> Option<&ElementSet> {
        if self.n == 0 || i == 0 {
            return None;
        }
        self.entries.get((i - 1) % self.n)
    }

    /// Consumes the necklace and returns its entries.
    pub fn into_entries(self) -> Vec<ElementSet> {
        self.entries
    }
}
