use std::collections::btree_set;
use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Element of the ground set `{1, ..., n}`.
pub type Element = usize;

/// Finite set of ground-set elements used for bases, circuits and necklace
/// entries.
///
/// The set is kept sorted so equality, ordering and hashing are structural.
/// All algebra returns a fresh value and never mutates `self`.
#[derive(Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ElementSet(BTreeSet<Element>);

impl ElementSet {
    /// Creates the empty set.
    pub fn new() -> Self {
        Self(BTreeSet::new())
    }

    /// Number of elements in the set.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns whether the set has no elements.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns whether `element` is a member.
    pub fn contains(&self, element: Element) -> bool {
        self.0.contains(&element)
    }

    /// Iterates over the members in increasing order.
    pub fn iter(&self) -> btree_set::Iter<'_, Element> {
        self.0.iter()
    }

    /// Returns whether every member of `self` is also in `other`.
    pub fn is_subset(&self, other: &ElementSet) -> bool {
        self.0.is_subset(&other.0)
    }

    /// Returns whether `self` and `other` share no member.
    pub fn is_disjoint(&self, other: &ElementSet) -> bool {
        self.0.is_disjoint(&other.0)
    }

    /// `self ∪ other`.
    pub fn union(&self, other: &ElementSet) -> ElementSet {
        Self(self.0.union(&other.0).copied().collect())
    }

    /// `self ∩ other`.
    pub fn intersection(&self, other: &ElementSet) -> ElementSet {
        Self(self.0.intersection(&other.0).copied().collect())
    }

    /// `self ∖ other`.
    pub fn difference(&self, other: &ElementSet) -> ElementSet {
        Self(self.0.difference(&other.0).copied().collect())
    }

    /// `self ∖ {element}`.
    pub fn without(&self, element: Element) -> ElementSet {
        let mut inner = self.0.clone();
        inner.remove(&element);
        Self(inner)
    }

    /// `self ∪ {element}`.
    pub fn with(&self, element: Element) -> ElementSet {
        let mut inner = self.0.clone();
        inner.insert(element);
        Self(inner)
    }

    /// `(self ∖ {removed}) ∪ {added}`, the one-step basis exchange.
    pub fn exchange(&self, removed: Element, added: Element) -> ElementSet {
        let mut inner = self.0.clone();
        inner.remove(&removed);
        inner.insert(added);
        Self(inner)
    }

    /// Members as a sorted vector.
    pub fn to_vec(&self) -> Vec<Element> {
        self.0.iter().copied().collect()
    }
}

impl fmt::Debug for ElementSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.0.iter()).finish()
    }
}

impl FromIterator<Element> for ElementSet {
    fn from_iter<I: IntoIterator<Item = Element>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<const N: usize> From<[Element; N]> for ElementSet {
    fn from(values: [Element; N]) -> Self {
        Self(values.into_iter().collect())
    }
}

impl From<BTreeSet<Element>> for ElementSet {
    fn from(inner: BTreeSet<Element>) -> Self {
        Self(inner)
    }
}

impl<'a> IntoIterator for &'a ElementSet {
    type Item = &'a Element;
    type IntoIter = btree_set::Iter<'a, Element>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl IntoIterator for ElementSet {
    type Item = Element;
    type IntoIter = btree_set::IntoIter<Element>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// Family of element sets: candidate bases, circuits, or a matroid.
///
/// A `BTreeSet` keeps members unique and the iteration order deterministic.
pub type SetFamily = BTreeSet<ElementSet>;

/// Builds a family from nested element lists, handy for fixtures.
pub fn family_from<I, S>(sets: I) -> SetFamily
where
    I: IntoIterator<Item = S>,
    S: IntoIterator<Item = Element>,
{
    sets.into_iter()
        .map(|set| set.into_iter().collect())
        .collect()
}
