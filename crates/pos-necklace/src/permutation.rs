use pos_core::{cyclic_shift, Element, ElementSet, ErrorInfo, PosError};
use serde::{Deserialize, Serialize};

use crate::necklace::GrassmannNecklace;

/// Permutation of `{1, ..., n}` whose fixed points are coloured as loops or
/// coloops. Decorated permutations are in bijection with Grassmann
/// necklaces.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawPermutation")]
pub struct DecoratedPermutation {
    images: Vec<Element>,
    coloops: ElementSet,
}

#[derive(Deserialize)]
struct RawPermutation {
    images: Vec<Element>,
    #[serde(default)]
    coloops: ElementSet,
}

impl TryFrom<RawPermutation> for DecoratedPermutation {
    type Error = PosError;

    fn try_from(raw: RawPermutation) -> Result<Self, Self::Error> {
        DecoratedPermutation::new(raw.images, raw.coloops)
    }
}

fn permutation_error(code: &str, message: impl Into<String>) -> PosError {
    PosError::Necklace(ErrorInfo::new(code, message))
}

impl DecoratedPermutation {
    /// Builds a decorated permutation from the images of `1, ..., n` and the
    /// fixed points marked as coloops. Unmarked fixed points are loops.
    pub fn new(images: Vec<Element>, coloops: ElementSet) -> Result<Self, PosError> {
        let n = images.len();
        let mut seen = vec![false; n + 1];
        for &image in &images {
            if image == 0 || image > n || seen[image] {
                return Err(permutation_error(
                    "not-a-permutation",
                    format!("images {images:?} are not a permutation of 1..={n}"),
                ));
            }
            seen[image] = true;
        }
        if let Some(&bad) = coloops
            .iter()
            .find(|&&element| element == 0 || element > n || images[element - 1] != element)
        {
            return Err(permutation_error(
                "coloop-not-fixed",
                format!("coloop {bad} is not a fixed point"),
            ));
        }
        Ok(Self { images, coloops })
    }

    /// Reads the decorated permutation off a Grassmann necklace.
    ///
    /// `π(i)` is the element entering when stepping from `I_i` to `I_{i+1}`;
    /// a fixed point is a coloop when `i` belongs to every entry.
    pub fn from_necklace(necklace: &GrassmannNecklace) -> Result<Self, PosError> {
        let n = necklace.n();
        let mut images = Vec::with_capacity(n);
        let mut coloops = ElementSet::new();
        for (idx, current) in necklace.entries().iter().enumerate() {
            let a = idx + 1;
            let next = &necklace.entries()[a % n];
            if !current.contains(a) {
                images.push(a);
                continue;
            }
            if current == next {
                images.push(a);
                coloops = coloops.with(a);
                continue;
            }
            let entering = next.difference(&current.without(a)).to_vec();
            match entering.as_slice() {
                [image] => images.push(*image),
                _ => {
                    return Err(permutation_error(
                        "inconsistent-necklace",
                        format!("entries {a} and {} differ by more than one exchange", a % n + 1),
                    ))
                }
            }
        }
        Self::new(images, coloops)
    }

    /// Size of the ground set.
    pub fn n(&self) -> usize {
        self.images.len()
    }

    /// `π(i)` for `1 ≤ i ≤ n`.
    pub fn image(&self, i: Element) -> Option<Element> {
        i.checked_sub(1).and_then(|idx| self.images.get(idx)).copied()
    }

    /// Images of `1, ..., n` in order.
    pub fn images(&self) -> &[Element] {
        &self.images
    }

    /// Fixed points decorated as coloops.
    pub fn coloops(&self) -> &ElementSet {
        &self.coloops
    }

    /// Fixed points decorated as loops.
    pub fn loops(&self) -> ElementSet {
        (1..=self.n())
            .filter(|&i| self.images[i - 1] == i && !self.coloops.contains(i))
            .collect()
    }

    fn inverse(&self) -> Vec<Element> {
        let mut inverse = vec![0; self.n() + 1];
        for (idx, &image) in self.images.iter().enumerate() {
            inverse[image] = idx + 1;
        }
        inverse
    }

    /// Rebuilds the Grassmann necklace: `I_a` holds the coloops and every
    /// non-fixed `j` with `j <_a π⁻¹(j)`.
    pub fn to_necklace(&self) -> Result<GrassmannNecklace, PosError> {
        let n = self.n();
        let inverse = self.inverse();
        let mut entries = Vec::with_capacity(n);
        for a in 1..=n {
            let mut entry = self.coloops.clone();
            for j in 1..=n {
                let source = inverse[j];
                if source != j && cyclic_shift(j, n, a)? < cyclic_shift(source, n, a)? {
                    entry = entry.with(j);
                }
            }
            entries.push(entry);
        }
        let k = entries.first().map_or(0, ElementSet::len);
        GrassmannNecklace::new(n, k, entries)
    }
}
